//! Live preview of the broadcast being composed.

use leptos::prelude::*;

use crate::state::broadcast::{BroadcastState, Preview};

#[component]
pub fn BroadcastPreview(state: RwSignal<BroadcastState>) -> impl IntoView {
    move || match state.with(|s| Preview::of(&s.title, &s.message)) {
        Preview::Placeholder => view! {
            <div class="broadcast-preview broadcast-preview--empty">
                <p>"Preview will appear here"</p>
            </div>
        }
        .into_any(),
        Preview::Draft { title, message } => view! {
            <div class="broadcast-preview">
                <h3>"Preview"</h3>
                <span class="broadcast-preview__label">"Title"</span>
                <div class="broadcast-preview__title">
                    {match title {
                        Some(title) => view! { <span>{title}</span> }.into_any(),
                        None => view! { <span class="broadcast-preview__hint">"No title..."</span> }.into_any(),
                    }}
                </div>
                <span class="broadcast-preview__label">"Message"</span>
                <div class="broadcast-preview__message">
                    {match message {
                        Some(message) => view! { <span>{message}</span> }.into_any(),
                        None => view! { <span class="broadcast-preview__hint">"No content..."</span> }.into_any(),
                    }}
                </div>
            </div>
        }
        .into_any(),
    }
}
