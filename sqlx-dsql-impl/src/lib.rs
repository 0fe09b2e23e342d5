#![cfg_attr(not(test), warn(unused_crate_dependencies))]
//! Statement splitting and sequential script execution for **Aurora DSQL**.

mod script;
mod split;

#[cfg(feature = "sqlx")]
pub use script::ConnectionExecutor;
pub use script::{
    OnError, ScriptConfigError, ScriptError, ScriptOptions, ScriptOptionsBuilder, ScriptReport,
    ScriptRunner, StatementExecutor, StatementFailure,
};
pub use split::{split_statements, statements, Statements};
