use crate::domain::a001_statute_qa::ui::StatuteQaPage;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Single page, no routing: the statute Q&A page is the whole app.
    view! {
        <StatuteQaPage />
    }
}
