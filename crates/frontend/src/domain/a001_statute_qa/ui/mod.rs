//! Statute Q&A UI Module (MVVM Standard)
//!
//! Structure:
//! - model.rs: API functions for the three backend endpoints
//! - view_model.rs: StatuteQaVm with RwSignals
//! - view.rs: Main component StatuteQaPage

mod model;
mod view;
mod view_model;

pub use view::StatuteQaPage;
pub use view_model::StatuteQaVm;
