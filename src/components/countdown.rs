//! Deadline Countdown Component

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use daonation_core::TimeLeft;

const TICK_MS: u32 = 30_000;

fn now_secs() -> u64 {
    (js_sys::Date::now() / 1000.0) as u64
}

/// Time left until `deadline`, refreshed while mounted
#[component]
pub fn Countdown(deadline: u64) -> impl IntoView {
    let (now, set_now) = signal(now_secs());

    spawn_local(async move {
        loop {
            TimeoutFuture::new(TICK_MS).await;
            // Stops once the component is gone and the signal disposed
            if set_now.try_set(now_secs()).is_some() {
                break;
            }
        }
    });

    view! {
        <span class="countdown">{move || TimeLeft::until(deadline, now.get()).to_string()}</span>
    }
}
