//! Test harness for CLI integration tests.
//!
//! Provides isolated test environments with their own database and
//! config directory, plus CLI assertion helpers using `assert_cmd`.

mod command;
mod env;

#[allow(unused_imports)]
pub use command::FlownotesCommand;
#[allow(unused_imports)]
pub use env::TestEnv;
