//! Broadcast composer form.
//!
//! The send is simulated locally; see `state::broadcast`.

use leptos::prelude::*;

use crate::state::broadcast::{AUDIENCES, BroadcastState};
#[cfg(feature = "hydrate")]
use crate::state::broadcast::{RESET_DELAY_MS, SEND_DELAY_MS};
use crate::util::lifetime::Lifetime;

#[component]
pub fn BroadcastForm(state: RwSignal<BroadcastState>) -> impl IntoView {
    let lifetime = Lifetime::scoped();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(seq) = state.try_update(BroadcastState::begin_send).flatten() else {
            return;
        };
        simulate_send(state, seq, lifetime.clone());
    };

    view! {
        <div class="broadcast-form">
            <div class="broadcast-form__header">
                <h2>"Broadcast Message"</h2>
                <p>"Send announcements to students"</p>
            </div>
            <form on:submit=on_submit>
                <label class="broadcast-form__field" for="target-class">"Target Audience"</label>
                <select
                    id="target-class"
                    prop:value=move || state.with(|s| s.audience.clone())
                    on:change=move |ev| state.update(|s| s.audience = event_target_value(&ev))
                >
                    <option value="">"Select a class..."</option>
                    {AUDIENCES
                        .into_iter()
                        .map(|(value, label)| view! { <option value=value>{label}</option> })
                        .collect_view()}
                </select>

                <label class="broadcast-form__field" for="broadcast-title">"Title"</label>
                <input
                    id="broadcast-title"
                    type="text"
                    placeholder="e.g. Exam Schedule Change"
                    prop:value=move || state.with(|s| s.title.clone())
                    on:input=move |ev| state.update(|s| s.title = event_target_value(&ev))
                />

                <label class="broadcast-form__field" for="broadcast-message">"Message Content"</label>
                <textarea
                    id="broadcast-message"
                    rows="6"
                    placeholder="Type your announcement here..."
                    prop:value=move || state.with(|s| s.message.clone())
                    on:input=move |ev| state.update(|s| s.message = event_target_value(&ev))
                ></textarea>

                {move || {
                    state
                        .with(|s| s.status)
                        .map(|status| view! { <p class="broadcast-form__status">{status.text()}</p> })
                }}

                <button
                    type="submit"
                    class="btn btn--primary broadcast-form__submit"
                    disabled=move || !state.with(BroadcastState::can_submit)
                >
                    {move || if state.with(|s| s.sending) { "Sending..." } else { "Send Broadcast" }}
                </button>
            </form>
        </div>
    }
}

fn simulate_send(state: RwSignal<BroadcastState>, seq: u64, lifetime: Lifetime) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        use std::time::Duration;

        gloo_timers::future::sleep(Duration::from_millis(u64::from(SEND_DELAY_MS))).await;
        if !lifetime.is_alive() {
            return;
        }
        state.with_untracked(|s| log::info!("broadcast sent to {}: {}", s.audience, s.title));
        state.update(|s| s.finish_send(true));

        gloo_timers::future::sleep(Duration::from_millis(u64::from(RESET_DELAY_MS))).await;
        if lifetime.is_alive() {
            state.update(|s| s.reset_after(seq));
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (state, seq, lifetime);
    }
}
