#[path = "../common/mod.rs"]
mod common;

mod concurrency_tests;
