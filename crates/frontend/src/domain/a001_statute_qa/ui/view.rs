//! Statute Q&A - View Component

use super::model::{fetch_document_text, fetch_pdf_list, submit_query};
use super::view_model::StatuteQaVm;
use crate::domain::a001_statute_qa::answer::answer_rows;
use crate::shared::components::ui::{Button, Select, Textarea};
use contracts::domain::a001_statute_qa::catalog::DOCUMENT_CATALOG;
use leptos::prelude::*;

#[component]
pub fn StatuteQaPage() -> impl IntoView {
    let vm = StatuteQaVm::new();

    // One-shot list fetch, issued explicitly at page construction.
    wasm_bindgen_futures::spawn_local(async move {
        vm.apply_pdf_list(fetch_pdf_list().await);
    });

    let handle_select = Callback::new(move |filename: String| {
        if filename.is_empty() {
            vm.clear_selection();
            return;
        }
        let generation = vm.begin_document_load(&filename);
        wasm_bindgen_futures::spawn_local(async move {
            let result = fetch_document_text(&filename).await;
            vm.finish_document_load(generation, &filename, result);
        });
    });

    let ask = move || {
        if !vm.validate_question() {
            return;
        }
        vm.begin_ask();
        let question = vm.question.get_untracked();
        let context = vm.context.get_untracked();
        wasm_bindgen_futures::spawn_local(async move {
            vm.finish_ask(submit_query(&question, &context).await);
        });
    };

    let options = Signal::derive(|| {
        let mut options = vec![(String::new(), "Select a statute...".to_string())];
        options.extend(
            DOCUMENT_CATALOG
                .iter()
                .map(|doc| (doc.filename.to_string(), doc.display.to_string())),
        );
        options
    });

    view! {
        <div class="statute-qa">
            <header class="statute-qa__header">
                <h1 class="statute-qa__title">"Legal Statute Q&A"</h1>
                <p class="statute-qa__status">{move || vm.status.get()}</p>
            </header>

            {move || {
                vm.error.get().map(|e| view! {
                    <div class="statute-qa__error">{e}</div>
                })
            }}

            <Select
                label="Statute"
                id="statute-select"
                value=vm.selected_filename
                options=options
                on_change=handle_select
                disabled=Signal::derive(move || vm.is_loading.get())
            />

            <Textarea
                label="Your question"
                id="question-input"
                value=vm.question
                placeholder="Ask about the selected statute... (Ctrl+Enter to submit)"
                rows=4
                on_input=Callback::new(move |text| vm.question.set(text))
                on_keydown=Callback::new(move |ev: web_sys::KeyboardEvent| {
                    if ev.key() == "Enter" && ev.ctrl_key() {
                        ev.prevent_default();
                        ask();
                    }
                })
                disabled=Signal::derive(move || vm.is_loading.get())
            />

            <Button
                disabled=Signal::derive(move || vm.is_loading.get())
                on_click=Callback::new(move |_| ask())
            >
                {move || if vm.is_loading.get() { "Asking..." } else { "Ask Question" }}
            </Button>

            {move || {
                let rows = answer_rows(&vm.answer.get());
                (!rows.is_empty()).then(|| view! {
                    <div class="statute-qa__answer">
                        {rows
                            .into_iter()
                            .map(|row| view! {
                                <div class="statute-qa__answer-row">
                                    <span class="statute-qa__bullet">"•"</span>
                                    <span class="statute-qa__answer-text">{row}</span>
                                </div>
                            })
                            .collect_view()}
                    </div>
                })
            }}
        </div>
    }
}
