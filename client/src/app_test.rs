use leptos::prelude::*;
use leptos_router::location::RequestUrl;

use super::*;

fn render_at(path: &str) -> String {
    Owner::new().with(|| {
        provide_context(RequestUrl::new(path));
        provide_context(RwSignal::new(SessionState::default()));
        provide_context(RwSignal::new(ApiKeyHolder::default()));
        view! { <ConsoleRouter/> }.to_html()
    })
}

#[test]
fn admin_subpaths_stay_in_guarded_area() {
    assert!(!render_at("/admin").contains("Page not found."));
    assert!(!render_at("/admin/reports").contains("Page not found."));
}

#[test]
fn user_subpaths_stay_in_guarded_area() {
    assert!(!render_at("/user").contains("Page not found."));
    assert!(!render_at("/user/settings/profile").contains("Page not found."));
}

#[test]
fn unknown_paths_fall_back() {
    assert!(render_at("/reports").contains("Page not found."));
}
