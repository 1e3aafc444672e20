//! Issue cards colored by the severity keyword in their text.

use leptos::prelude::*;

use crate::state::compliance::Severity;

#[component]
pub fn IssueList(#[prop(into)] issues: Signal<Vec<String>>) -> impl IntoView {
    view! {
        <Show
            when=move || !issues.get().is_empty()
            fallback=|| view! { <p class="issue-list__empty">"No issues detected 🎉"</p> }
        >
            <ul class="issue-list">
                {move || {
                    issues
                        .get()
                        .into_iter()
                        .map(|issue| {
                            let severity = Severity::from_issue(&issue);
                            view! {
                                <li
                                    class="issue-card"
                                    style:border-left-color=severity.color()
                                >
                                    <span class="issue-card__badge" style:background-color=severity.color()>
                                        {severity.label()}
                                    </span>
                                    <span class="issue-card__text">{issue}</span>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </ul>
        </Show>
    }
}
