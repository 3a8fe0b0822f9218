pub mod answer;
pub mod ui;
