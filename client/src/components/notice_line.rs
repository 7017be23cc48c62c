//! Single-line status for the last failed view action.

use leptos::prelude::*;

#[component]
pub fn NoticeLine(#[prop(into)] notice: Signal<Option<String>>) -> impl IntoView {
    move || {
        notice
            .get()
            .map(|text| view! { <p class="notice-line" role="status">{text}</p> })
    }
}
