//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::header::Header;
use crate::pages::{
    broadcast::BroadcastPage, dashboard::DashboardPage, settings::SettingsPage, student_detail::StudentDetailPage,
    student_profile::StudentProfilePage,
};
use crate::query::client::provide_query_client;
use crate::state::ui::UiState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the page-wide query cache and shell state, then routes.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_query_client();
    provide_context(RwSignal::new(UiState::default()));

    view! {
        <Stylesheet id="leptos" href="/pkg/smart-attendance.css"/>
        <Title text="Smart Attendance"/>

        <Router>
            <Header/>
            <main class="page">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=DashboardPage/>
                    <Route path=StaticSegment("broadcast") view=BroadcastPage/>
                    <Route path=StaticSegment("settings") view=SettingsPage/>
                    <Route path=(StaticSegment("student"), StaticSegment("profile")) view=StudentProfilePage/>
                    <Route
                        path=(StaticSegment("student"), ParamSegment("id"), StaticSegment("profile"))
                        view=StudentDetailPage
                    />
                </Routes>
            </main>
        </Router>
    }
}
