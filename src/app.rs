use leptos::prelude::*;
use leptos_meta::{MetaTags, Script, Stylesheet, Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::ui::auth::provide_session_context;
use crate::ui::pages::{AuthPage, NotFoundPage, UsersPage};
use crate::ui::upload_widget::UPLOAD_WIDGET_SCRIPT;
use crate::ui::{ToastContainer, provide_app_config, provide_toasts};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="vi">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body class="h-full">
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    provide_app_config();
    provide_session_context();
    provide_toasts();

    view! {
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/gunita.css"/>
        <Script src=UPLOAD_WIDGET_SCRIPT async_="true"/>

        <Title text="Gunita"/>

        <Router>
            <main class="h-full">
                <Routes fallback=NotFoundPage>
                    <Route path=path!("/") view=AuthPage/>
                    // DEFAULT_LANDING_PATH
                    <Route path=path!("/users") view=UsersPage/>
                </Routes>
            </main>
        </Router>

        <ToastContainer/>
    }
}
