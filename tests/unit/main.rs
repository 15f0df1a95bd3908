//! Unit test modules.

mod adaptation_test;
mod plan_generator_test;
mod profile_test;
mod result_log_test;
