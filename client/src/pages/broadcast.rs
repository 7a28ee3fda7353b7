//! Broadcast page: composer beside a live preview.

use leptos::prelude::*;

use crate::components::broadcast_form::BroadcastForm;
use crate::components::broadcast_preview::BroadcastPreview;
use crate::state::broadcast::BroadcastState;

#[component]
pub fn BroadcastPage() -> impl IntoView {
    let state = RwSignal::new(BroadcastState::default());

    view! {
        <div class="broadcast-page">
            <BroadcastForm state=state />
            <BroadcastPreview state=state />
        </div>
    }
}
