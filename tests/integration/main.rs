//! Integration test modules.

mod config_test;
mod report_test;
