use futures_core::future::BoxFuture;

/// Something able to execute a single SQL statement, typically a database connection.
///
/// The [`crate::ScriptRunner`] hands statements over one by one, awaiting each before sending the
/// next, so implementors never see more than one statement per call.
pub trait StatementExecutor: Send {
    type Error: std::error::Error + Send + Sync + 'static;

    fn execute<'e>(&'e mut self, statement: &'e str) -> BoxFuture<'e, Result<(), Self::Error>>;
}

impl<T> StatementExecutor for &mut T
where
    T: StatementExecutor + ?Sized,
{
    type Error = T::Error;

    fn execute<'e>(&'e mut self, statement: &'e str) -> BoxFuture<'e, Result<(), Self::Error>> {
        (**self).execute(statement)
    }
}

#[cfg(feature = "sqlx")]
pub use connection::ConnectionExecutor;

#[cfg(feature = "sqlx")]
mod connection {
    use futures_core::future::BoxFuture;
    use sqlx_core::{connection::Connection, executor::Executor, sql_str::AssertSqlSafe};

    use super::StatementExecutor;

    /// Adapter running statements on any `sqlx` connection.
    ///
    /// ```rust,ignore
    /// let mut conn = PgConnection::connect(&url).await?;
    /// ScriptRunner::default()
    ///     .run(ConnectionExecutor::new(&mut conn), include_str!("0001_init.sql"))
    ///     .await?;
    /// ```
    #[derive(Debug)]
    pub struct ConnectionExecutor<'c, C>(&'c mut C);

    impl<'c, C> ConnectionExecutor<'c, C> {
        #[must_use]
        pub fn new(conn: &'c mut C) -> Self {
            Self(conn)
        }
    }

    impl<C> StatementExecutor for ConnectionExecutor<'_, C>
    where
        C: Connection,
        for<'e> &'e mut C: Executor<'e, Database = C::Database>,
    {
        type Error = sqlx_core::Error;

        fn execute<'e>(&'e mut self, statement: &'e str) -> BoxFuture<'e, Result<(), Self::Error>> {
            // Statements are split out of scripts that are trusted to the same degree as
            // migrations, they are not built from user input.
            let query = AssertSqlSafe(statement.to_owned());
            let future = (&mut *self.0).execute(query);

            Box::pin(async move {
                future.await?;
                Ok(())
            })
        }
    }
}
