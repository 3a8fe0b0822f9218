//! Statute Q&A - View Model

use contracts::domain::a001_statute_qa::api::{
    PdfListResponse, ProcessPdfResponse, QueryResponse,
};
use contracts::domain::a001_statute_qa::catalog::display_name_for;
use leptos::prelude::*;

pub const ERR_EMPTY_QUESTION: &str = "Please enter a question";
pub const ERR_NO_CONTEXT: &str = "Please select a PDF first";

/// All mutable page state. Mutated only through the methods below, each of
/// which corresponds to one phase of the three user-triggered operations.
#[derive(Clone, Copy)]
pub struct StatuteQaVm {
    /// Server-reported filenames; shown only as a count
    pub available_pdfs: RwSignal<Vec<String>>,
    /// Currently chosen filename, empty when none
    pub selected_filename: RwSignal<String>,
    pub question: RwSignal<String>,
    /// Extracted text of the selected document
    pub context: RwSignal<String>,
    pub answer: RwSignal<String>,
    pub is_loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    pub status: RwSignal<String>,
    /// Generation token for document loads; stale responses are dropped
    load_generation: RwSignal<u64>,
}

impl StatuteQaVm {
    pub fn new() -> Self {
        Self {
            available_pdfs: RwSignal::new(Vec::new()),
            selected_filename: RwSignal::new(String::new()),
            question: RwSignal::new(String::new()),
            context: RwSignal::new(String::new()),
            answer: RwSignal::new(String::new()),
            is_loading: RwSignal::new(false),
            error: RwSignal::new(None),
            status: RwSignal::new(String::new()),
            load_generation: RwSignal::new(0),
        }
    }

    /// Applies the result of the one-shot document list fetch.
    pub fn apply_pdf_list(&self, result: Result<PdfListResponse, String>) {
        match result {
            Ok(list) => {
                self.status.set(format!("Found {} PDFs", list.count));
                self.available_pdfs.set(list.pdfs);
            }
            Err(e) => {
                log::warn!("Failed to load PDF list: {e}");
                self.error.set(Some(e));
                self.status.set("Failed to load PDFs".to_string());
            }
        }
    }

    /// Synchronous reset for the empty selection; no request is issued.
    pub fn clear_selection(&self) {
        self.selected_filename.set(String::new());
        self.context.set(String::new());
        self.answer.set(String::new());
    }

    /// Marks the start of a document load and returns its generation token.
    pub fn begin_document_load(&self, filename: &str) -> u64 {
        self.is_loading.set(true);
        self.error.set(None);
        self.context.set(String::new());
        self.answer.set(String::new());
        self.status.set("Loading PDF...".to_string());
        self.selected_filename.set(filename.to_string());

        let generation = self.load_generation.get_untracked() + 1;
        self.load_generation.set(generation);
        generation
    }

    /// Applies a finished document load. A response whose token no longer
    /// matches belongs to a superseded selection and is dropped; the newer
    /// load owns the loading flag.
    pub fn finish_document_load(
        &self,
        generation: u64,
        filename: &str,
        result: Result<ProcessPdfResponse, String>,
    ) {
        if self.load_generation.get_untracked() != generation {
            return;
        }
        match result {
            Ok(doc) => {
                log::info!("Loaded {} ({} chars)", filename, doc.text.len());
                self.context.set(doc.text);
                self.status
                    .set(format!("{} loaded successfully!", display_name_for(filename)));
                self.error.set(None);
            }
            Err(e) => {
                self.error.set(Some(e));
                self.status.set("Loading failed".to_string());
                self.context.set(String::new());
            }
        }
        self.is_loading.set(false);
    }

    /// Local validation before asking; sets the error banner on failure.
    pub fn validate_question(&self) -> bool {
        if self.question.get_untracked().is_empty() {
            self.error.set(Some(ERR_EMPTY_QUESTION.to_string()));
            return false;
        }
        if self.context.get_untracked().is_empty() {
            self.error.set(Some(ERR_NO_CONTEXT.to_string()));
            return false;
        }
        true
    }

    pub fn begin_ask(&self) {
        self.is_loading.set(true);
        self.error.set(None);
        self.answer.set(String::new());
    }

    /// Applies a finished query. Context is left untouched so a failed ask
    /// can be retried against the loaded document.
    pub fn finish_ask(&self, result: Result<QueryResponse, String>) {
        match result {
            Ok(response) => {
                self.answer.set(response.answer);
                self.error.set(None);
            }
            Err(e) => {
                self.error.set(Some(e));
                self.answer.set(String::new());
            }
        }
        self.is_loading.set(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::prelude::Owner;

    fn in_scope<T>(test: impl FnOnce() -> T) -> T {
        let owner = Owner::new();
        owner.set();
        test()
    }

    fn loaded(text: &str) -> ProcessPdfResponse {
        ProcessPdfResponse {
            text: text.to_string(),
            message: None,
            filename: None,
            display: None,
            text_length: None,
        }
    }

    #[test]
    fn list_success_sets_count_status() {
        in_scope(|| {
            let vm = StatuteQaVm::new();
            vm.apply_pdf_list(Ok(PdfListResponse {
                pdfs: vec!["x.pdf".to_string()],
                count: 1,
            }));
            assert_eq!(vm.status.get_untracked(), "Found 1 PDFs");
            assert_eq!(vm.available_pdfs.get_untracked(), vec!["x.pdf".to_string()]);
            assert_eq!(vm.error.get_untracked(), None);
        });
    }

    #[test]
    fn list_failure_sets_error_and_status() {
        in_scope(|| {
            let vm = StatuteQaVm::new();
            vm.apply_pdf_list(Err("connection refused".to_string()));
            assert_eq!(vm.error.get_untracked().as_deref(), Some("connection refused"));
            assert_eq!(vm.status.get_untracked(), "Failed to load PDFs");
        });
    }

    #[test]
    fn clear_selection_resets_without_touching_status() {
        in_scope(|| {
            let vm = StatuteQaVm::new();
            vm.selected_filename.set("Indian Penal Code.pdf".to_string());
            vm.context.set("Section 378.".to_string());
            vm.answer.set("• theft".to_string());
            vm.status.set("Found 7 PDFs".to_string());

            vm.clear_selection();

            assert_eq!(vm.selected_filename.get_untracked(), "");
            assert_eq!(vm.context.get_untracked(), "");
            assert_eq!(vm.answer.get_untracked(), "");
            assert_eq!(vm.status.get_untracked(), "Found 7 PDFs");
        });
    }

    #[test]
    fn document_load_success_uses_catalog_label() {
        in_scope(|| {
            let vm = StatuteQaVm::new();
            let generation = vm.begin_document_load("Indian Penal Code.pdf");
            assert!(vm.is_loading.get_untracked());
            assert_eq!(vm.status.get_untracked(), "Loading PDF...");

            vm.finish_document_load(generation, "Indian Penal Code.pdf", Ok(loaded("Section 1.")));

            assert_eq!(vm.context.get_untracked(), "Section 1.");
            assert_eq!(
                vm.status.get_untracked(),
                "The Indian Penal Code loaded successfully!"
            );
            assert!(!vm.is_loading.get_untracked());
            assert_eq!(vm.error.get_untracked(), None);
        });
    }

    #[test]
    fn document_load_falls_back_to_raw_filename() {
        in_scope(|| {
            let vm = StatuteQaVm::new();
            let generation = vm.begin_document_load("custom.pdf");
            vm.finish_document_load(generation, "custom.pdf", Ok(loaded("text")));
            assert_eq!(vm.status.get_untracked(), "custom.pdf loaded successfully!");
        });
    }

    #[test]
    fn document_load_failure_clears_context() {
        in_scope(|| {
            let vm = StatuteQaVm::new();
            let generation = vm.begin_document_load("Indian Evidence Act.pdf");
            vm.finish_document_load(
                generation,
                "Indian Evidence Act.pdf",
                Err("not found".to_string()),
            );

            assert_eq!(vm.error.get_untracked().as_deref(), Some("not found"));
            assert_eq!(vm.status.get_untracked(), "Loading failed");
            assert_eq!(vm.context.get_untracked(), "");
            assert!(!vm.is_loading.get_untracked());
        });
    }

    #[test]
    fn stale_document_load_is_dropped() {
        in_scope(|| {
            let vm = StatuteQaVm::new();
            let first = vm.begin_document_load("Indian Penal Code.pdf");
            let second = vm.begin_document_load("The Motor Vehicles Act.pdf");

            vm.finish_document_load(first, "Indian Penal Code.pdf", Ok(loaded("old")));
            assert_eq!(vm.context.get_untracked(), "");
            assert!(vm.is_loading.get_untracked());

            vm.finish_document_load(second, "The Motor Vehicles Act.pdf", Ok(loaded("new")));
            assert_eq!(vm.context.get_untracked(), "new");
            assert!(!vm.is_loading.get_untracked());
        });
    }

    #[test]
    fn reselecting_same_document_overwrites_context() {
        in_scope(|| {
            let vm = StatuteQaVm::new();
            let first = vm.begin_document_load("Indian Penal Code.pdf");
            vm.finish_document_load(first, "Indian Penal Code.pdf", Ok(loaded("first copy")));

            let second = vm.begin_document_load("Indian Penal Code.pdf");
            assert_eq!(vm.context.get_untracked(), "");
            vm.finish_document_load(second, "Indian Penal Code.pdf", Ok(loaded("second copy")));
            assert_eq!(vm.context.get_untracked(), "second copy");
        });
    }

    #[test]
    fn validation_requires_question_then_context() {
        in_scope(|| {
            let vm = StatuteQaVm::new();
            vm.context.set("Section 378.".to_string());
            assert!(!vm.validate_question());
            assert_eq!(vm.error.get_untracked().as_deref(), Some(ERR_EMPTY_QUESTION));

            let vm = StatuteQaVm::new();
            vm.question.set("What is theft?".to_string());
            assert!(!vm.validate_question());
            assert_eq!(vm.error.get_untracked().as_deref(), Some(ERR_NO_CONTEXT));

            vm.context.set("Section 378.".to_string());
            assert!(vm.validate_question());
            assert_eq!(vm.error.get_untracked().as_deref(), Some(ERR_NO_CONTEXT));
        });
    }

    #[test]
    fn failed_ask_preserves_context() {
        in_scope(|| {
            let vm = StatuteQaVm::new();
            vm.context.set("Section 378.".to_string());
            vm.answer.set("• stale answer".to_string());

            vm.begin_ask();
            assert!(vm.is_loading.get_untracked());
            assert_eq!(vm.answer.get_untracked(), "");

            vm.finish_ask(Err("Error processing question".to_string()));
            assert_eq!(
                vm.error.get_untracked().as_deref(),
                Some("Error processing question")
            );
            assert_eq!(vm.answer.get_untracked(), "");
            assert_eq!(vm.context.get_untracked(), "Section 378.");
            assert!(!vm.is_loading.get_untracked());
        });
    }

    #[test]
    fn successful_ask_stores_answer() {
        in_scope(|| {
            let vm = StatuteQaVm::new();
            vm.context.set("Section 378.".to_string());
            vm.begin_ask();
            vm.finish_ask(Ok(QueryResponse {
                answer: "• Theft is defined in Section 378.".to_string(),
                question: None,
                context_length: None,
                error: None,
            }));
            assert_eq!(
                vm.answer.get_untracked(),
                "• Theft is defined in Section 378."
            );
            assert_eq!(vm.error.get_untracked(), None);
            assert!(!vm.is_loading.get_untracked());
        });
    }
}
