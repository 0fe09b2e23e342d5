//! Sequential execution of multi-statement SQL scripts.
//!
//! Scripts such as migrations are split with [`crate::split_statements`] and every statement is
//! sent on its own, in order, since Aurora DSQL rejects batches and wants each DDL statement
//! committed separately.

mod error;
mod executor;
mod options;

use std::time::{Duration, Instant};

pub use error::{ScriptConfigError, ScriptError};
#[cfg(feature = "sqlx")]
pub use executor::ConnectionExecutor;
pub use executor::StatementExecutor;
pub use options::{OnError, ScriptOptions, ScriptOptionsBuilder};

use crate::split::split_statements;

/// Runs SQL scripts one statement at a time through a [`StatementExecutor`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ScriptRunner {
    options: ScriptOptions,
}

impl ScriptRunner {
    #[must_use]
    pub fn new(options: ScriptOptions) -> Self {
        Self { options }
    }

    #[must_use]
    pub fn options(&self) -> &ScriptOptions {
        &self.options
    }

    /// Splits `sql` into statements and executes them in order.
    ///
    /// # Errors
    ///
    /// Returns [`ScriptError::Empty`] if the script has no statements and
    /// [`ScriptOptions::deny_empty`] is set. With [`OnError::Abort`], the first failing statement
    /// is returned as [`ScriptError::Statement`] and nothing after it gets executed.
    pub async fn run<E>(
        &self,
        mut executor: E,
        sql: &str,
    ) -> Result<ScriptReport, ScriptError<E::Error>>
    where
        E: StatementExecutor,
    {
        let statements = split_statements(sql);
        let total = statements.len();

        if total == 0 && self.options.deny_empty {
            return Err(ScriptError::Empty);
        }

        let start = Instant::now();
        let mut report = ScriptReport {
            statements: total,
            ..Default::default()
        };

        for (index, statement) in statements.into_iter().enumerate() {
            tracing::debug!("executing statement {}/{total}:\n{statement}", index + 1);

            match executor.execute(statement).await {
                Ok(()) => report.executed += 1,
                Err(source) => {
                    tracing::warn!("statement {}/{total} failed: {source}", index + 1);

                    match self.options.on_error {
                        OnError::Abort => {
                            return Err(ScriptError::Statement {
                                index,
                                statement: statement.to_owned(),
                                source,
                            });
                        }
                        OnError::Continue => report.failures.push(StatementFailure {
                            index,
                            statement: statement.to_owned(),
                            message: source.to_string(),
                        }),
                    }
                }
            }
        }

        report.elapsed = start.elapsed();
        Ok(report)
    }
}

/// Outcome of a script run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScriptReport {
    statements: usize,
    executed: usize,
    failures: Vec<StatementFailure>,
    elapsed: Duration,
}

impl ScriptReport {
    /// Number of statements the script was split into.
    #[must_use]
    pub fn statements(&self) -> usize {
        self.statements
    }

    /// Number of statements that were executed successfully.
    #[must_use]
    pub fn executed(&self) -> usize {
        self.executed
    }

    /// Statements that failed, only populated with [`OnError::Continue`].
    #[must_use]
    pub fn failures(&self) -> &[StatementFailure] {
        &self.failures
    }

    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// A statement that failed while running a script with [`OnError::Continue`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatementFailure {
    pub index: usize,
    pub statement: String,
    pub message: String,
}
