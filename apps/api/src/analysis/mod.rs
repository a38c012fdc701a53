// Career analysis engine.
// Pure and deterministic: extraction, skill matching, scoring and the report
// generators all run synchronously over two strings. No I/O below this module
// except the optional dictionary file load at startup.

pub mod action_plan;
pub mod cover_letter;
pub mod dictionaries;
pub mod engine;
pub mod extractor;
pub mod handlers;
pub mod interview;
pub mod market;
pub mod matcher;
pub mod models;
pub mod resume_review;
pub mod salary;
pub mod scoring;
pub mod skills_report;
