//! Circular SVG gauge for a 0-100 compliance score.

use leptos::prelude::*;

use crate::state::compliance::{GAUGE_RADIUS, Gauge, score_label};

#[component]
pub fn ScoreGauge(#[prop(into)] score: Signal<f64>) -> impl IntoView {
    let gauge = move || Gauge::from_score(score.get());

    view! {
        <div class="score-gauge">
            <svg class="score-gauge__svg" viewBox="0 0 120 120" width="120" height="120">
                <circle class="score-gauge__track" cx="60" cy="60" r=GAUGE_RADIUS.to_string() fill="none" stroke-width="10"/>
                <circle
                    class="score-gauge__fill"
                    cx="60"
                    cy="60"
                    r=GAUGE_RADIUS.to_string()
                    fill="none"
                    stroke-width="10"
                    stroke-linecap="round"
                    transform="rotate(-90 60 60)"
                    stroke=move || gauge().band.color()
                    stroke-dasharray=move || gauge().dasharray()
                />
            </svg>
            <span class="score-gauge__label">{move || score_label(score.get())}</span>
        </div>
    }
}
