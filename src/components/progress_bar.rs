//! Funding Progress Bar Component

use leptos::prelude::*;

use daonation_core::{format_ether_fixed, Progress, Wei};

/// Raised/target amounts, a bar clamped to 100% and the uncapped label
#[component]
pub fn ProgressBar(target: Wei, funded: Wei) -> impl IntoView {
    let progress = Progress::of(target, funded);
    let width = format!("{:.2}%", progress.bar_width());
    let fill_class = if progress.is_unbounded() { "progress-fill unbounded" } else { "progress-fill" };

    view! {
        <div class="progress">
            <div class="progress-amounts">
                <span>"Raised: " {format_ether_fixed(funded, 4)} " ETH"</span>
                <span>"Target: " {format_ether_fixed(target, 4)} " ETH"</span>
            </div>
            <div class="progress-track">
                <div class=fill_class style:width=width></div>
            </div>
            <div class="progress-label">{progress.label()} " Funded"</div>
        </div>
    }
}
