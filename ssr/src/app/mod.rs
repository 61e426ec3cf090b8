use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{
    components::{Route, Router, Routes},
    StaticSegment,
};
use page::leaderboard::Leaderboard;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <MetaTags />
            </head>
            <body class="bg-black">
                <App />
            </body>
        </html>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="h-screen w-screen flex items-center justify-center text-white">
            "Page not found"
        </div>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/leaderboard-table.css" />
        <Title text="Leaderboard" />
        <Router>
            <main>
                <Routes fallback=NotFound>
                    <Route path=StaticSegment("") view=Leaderboard />
                    <Route path=StaticSegment("leaderboard") view=Leaderboard />
                </Routes>
            </main>
        </Router>
    }
}
