//! Application header: brand, navigation, theme toggle, signed-in user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered once by `App` above the routed pages. Browser-only inputs (stored
//! user, theme preference) are read in an effect so the server render and the
//! first client render produce the same markup. The greeting prefers the
//! cached current-user query over the stored login.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::net::auth::fetch_current_user;
use crate::net::types::CurrentUser;
use crate::query::cache::QueryKey;
use crate::query::client::use_query;
use crate::state::ui::{NAV_LINKS, UiState, current_user_options, display_name, is_active};
use crate::util::storage::{StoredUser, load_user};
use crate::util::theme::{self, Theme};

#[component]
pub fn Header() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let pathname = use_location().pathname;
    let user = RwSignal::new(None::<StoredUser>);
    let current_user = use_query::<CurrentUser, _, _>(
        QueryKey::CurrentUser,
        current_user_options(),
        Signal::stored(true),
        fetch_current_user,
    );

    Effect::new(move || {
        user.set(load_user());
        let preferred = theme::read_preference();
        theme::apply(preferred);
        ui.update(|u| u.theme = preferred);
    });

    Effect::new(move || {
        let path = pathname.get();
        ui.update(|u| u.navigated(&path));
    });

    let greeting = move || {
        let current = current_user.data();
        let error = current_user.error();
        user.with(|stored| display_name(current.as_ref(), error.as_ref(), stored.as_ref()))
    };
    let on_theme = move |_| {
        if let Some(next) = ui.try_update(UiState::toggle_theme) {
            theme::store(next);
        }
    };

    let links = move |extra: &'static str| {
        NAV_LINKS
            .into_iter()
            .map(|(href, label)| {
                let class = move || {
                    let active = pathname.with(|p| is_active(p, href));
                    format!("{extra} {}", if active { "nav__link nav__link--active" } else { "nav__link" })
                };
                view! { <a href=href class=class>{label}</a> }
            })
            .collect_view()
    };

    view! {
        <header class="header">
            <div class="header__bar">
                <button
                    class="btn header__menu-toggle"
                    aria-label="Toggle navigation"
                    on:click=move |_| ui.update(UiState::toggle_menu)
                >
                    {move || if ui.with(|u| u.menu_open) { "✕" } else { "☰" }}
                </button>
                <a href="/" class="header__brand">
                    <h1>"Smart Attendance"</h1>
                </a>
                <nav class="header__nav">{links("header__nav-item")}</nav>
                <div class="header__profile">
                    <button class="btn header__theme" title="Toggle theme" on:click=on_theme>
                        {move || if ui.with(|u| u.theme == Theme::Dark) { "☀" } else { "☾" }}
                    </button>
                    <span class="header__user">{greeting}</span>
                    <a href="/settings" class="header__settings" title="Settings">"▾"</a>
                </div>
            </div>
            <Show when=move || ui.with(|u| u.menu_open)>
                <nav class="header__drawer">
                    {links("header__drawer-item")}
                    <span class="header__drawer-user">{greeting}</span>
                </nav>
            </Show>
        </header>
    }
}
