//! Application layer: selector checking and the grading use case

pub mod selector_checker;
pub mod grading_service;

pub use grading_service::{grade, grade_html_file};
pub use selector_checker::SelectorPresenceChecker;
