use axum::{
    body::Body,
    extract::State,
    http::{Request, Response, StatusCode, Uri},
    response::{IntoResponse, Response as AxumResponse},
};
use leptos::prelude::*;
use tower::ServiceExt;
use tower_http::services::ServeDir;

use crate::app::shell;

pub async fn file_and_error_handler(
    uri: Uri,
    State(options): State<LeptosOptions>,
    req: Request<Body>,
) -> AxumResponse {
    let root = options.site_root.clone();
    let res = get_static_file(uri.clone(), &root).await;

    match res {
        Ok(res) if res.status() == StatusCode::OK => res.into_response(),
        Ok(_) => {
            let handler = leptos_axum::render_app_to_stream(move || shell(options.clone()));
            handler(req).await.into_response()
        }
        Err((status, msg)) => {
            log::warn!("static file lookup for {uri} failed: {msg}");
            (status, msg).into_response()
        }
    }
}

async fn get_static_file(uri: Uri, root: &str) -> Result<Response<Body>, (StatusCode, String)> {
    let req = Request::builder()
        .uri(uri.clone())
        .body(Body::empty())
        .map_err(|e| (StatusCode::BAD_REQUEST, e.to_string()))?;
    // `ServeDir` implements `tower::Service` so we can call it with `tower::ServiceExt::oneshot`
    match ServeDir::new(root).oneshot(req).await {
        Ok(res) => Ok(res.into_response()),
        Err(err) => Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Something went wrong: {err}"),
        )),
    }
}
