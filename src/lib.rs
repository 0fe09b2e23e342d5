#![cfg_attr(not(test), warn(unused_crate_dependencies))]
//! Statement splitting and sequential script execution for
//! [Aurora DSQL](https://aws.amazon.com/rds/aurora/dsql/).
//!
//! Aurora DSQL executes exactly one statement per request and requires DDL statements to run on
//! their own, each in its own transaction. Migration scripts, on the other hand, usually contain
//! many statements separated by `;`. This crate bridges the two.
//!
//! ## Features flags
//!
//! - `sqlx` - Add `ConnectionExecutor`, which runs scripts on any `sqlx` connection.
//!
//! ## Splitting
//!
//! [`split_statements`] is a quoting-aware scanner, not a SQL parser. A `;` ends a statement
//! unless it appears inside:
//! - a single quoted string literal (`'a;b'`, with `''` as an escaped quote)
//! - a double quoted identifier (`"a;b"`, with `""` as an escaped quote)
//! - a dollar quoted string (`$$a;b$$` or `$tag$a;b$tag$`), whose body ignores any other quote
//!
//! Statements are returned trimmed and borrowed from the input; empty statements are dropped.
//! Unterminated quotes are not an error, the rest of the input simply becomes the last statement.
//!
//! ```rust
//! use sqlx_dsql::split_statements;
//!
//! let sql = r#"
//!     CREATE TABLE "weird;name" (id INT);
//!     CREATE FUNCTION f() RETURNS INT AS $body$ SELECT 1; $body$ LANGUAGE sql;
//!     INSERT INTO t VALUES ('it''s;tricky');
//! "#;
//!
//! assert_eq!(
//!     split_statements(sql),
//!     [
//!         r#"CREATE TABLE "weird;name" (id INT)"#,
//!         "CREATE FUNCTION f() RETURNS INT AS $body$ SELECT 1; $body$ LANGUAGE sql",
//!         "INSERT INTO t VALUES ('it''s;tricky')",
//!     ]
//! );
//! ```
//!
//! ## Running scripts
//!
//! A [`ScriptRunner`] splits a script and hands the statements, one at a time and in order, to a
//! [`StatementExecutor`]. By default it stops at the first failure; see [`ScriptOptions`].
//!
//! ```rust,ignore
//! use sqlx_dsql::{ConnectionExecutor, OnError, ScriptOptions, ScriptRunner};
//!
//! let options = ScriptOptions::builder().on_error(OnError::Abort).build();
//! let report = ScriptRunner::new(options)
//!     .run(ConnectionExecutor::new(&mut conn), include_str!("migrations/0001_init.sql"))
//!     .await?;
//!
//! println!("executed {} statements", report.executed());
//! ```
//!
//! ## CLI utility
//!
//! ```sh
//! cargo install sqlx-dsql-cli
//!
//! sqlx-dsql split migrations/0001_init.sql
//! cat migrations/0001_init.sql | sqlx-dsql split --format json
//! ```

#[cfg(feature = "sqlx")]
pub use sqlx_dsql_impl::ConnectionExecutor;
pub use sqlx_dsql_impl::{
    split_statements, statements, OnError, ScriptConfigError, ScriptError, ScriptOptions,
    ScriptOptionsBuilder, ScriptReport, ScriptRunner, StatementExecutor, StatementFailure,
    Statements,
};
