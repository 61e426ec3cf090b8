#![recursion_limit = "256"]
use axum::{
    body::Body as AxumBody,
    extract::State,
    http::Request,
    response::{IntoResponse, Response},
    Router,
};
use leaderboard_table_ssr::app::{shell, App};
use leaderboard_table_ssr::fallback::file_and_error_handler;
use leptos::prelude::*;
use leptos_axum::{generate_route_list, LeptosRoutes};
use tower_http::trace::TraceLayer;
use tracing::instrument;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[instrument(skip(options, req), fields(uri = %req.uri()))]
pub async fn leptos_routes_handler(
    State(options): State<LeptosOptions>,
    req: Request<AxumBody>,
) -> Response {
    let handler = leptos_axum::render_app_to_stream(move || shell(options.clone()));
    handler(req).await.into_response()
}

/// `try_init` also installs the `log` -> `tracing` bridge, so `log::` calls
/// from the component crates reach the same subscriber.
fn init_logging() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tower_http=info,leaderboard_table_ssr=debug"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init()?;
    Ok(())
}

async fn main_impl() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    init_logging()?;

    // Setting get_configuration(None) means we'll be using cargo-leptos's env values
    // For deployment these variables are:
    // <https://github.com/leptos-rs/start-axum#executing-a-server-on-a-remote-machine-without-the-toolchain>
    let conf = get_configuration(None)?;
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;
    let routes = generate_route_list(App);

    let terminate = {
        use tokio::signal;

        let ctrl_c = async {
            if let Err(e) = signal::ctrl_c().await {
                log::error!("failed to install Ctrl+C handler: {e}");
            }
        };

        #[cfg(unix)]
        let terminate = async {
            match signal::unix::signal(signal::unix::SignalKind::terminate()) {
                Ok(mut sig) => {
                    sig.recv().await;
                }
                Err(e) => {
                    log::error!("failed to install signal handler: {e}");
                    std::future::pending::<()>().await;
                }
            }
        };

        #[cfg(not(unix))]
        let terminate = std::future::pending::<()>();

        async {
            tokio::select! {
                _ = ctrl_c => {},
                _ = terminate => {},
            }
            log::info!("stopping...");
        }
    };

    let app = Router::new()
        .leptos_routes_with_handler(routes, axum::routing::get(leptos_routes_handler))
        .fallback(file_and_error_handler)
        .layer(TraceLayer::new_for_http())
        .with_state(leptos_options);

    log::info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(terminate)
        .await?;

    Ok(())
}

fn main() {
    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("failed to start tokio runtime: {e}");
            std::process::exit(1);
        }
    };

    runtime.block_on(async {
        if let Err(e) = main_impl().await {
            eprintln!("Server error: {e}");
            std::process::exit(1);
        }
    });
}
