//! Splitting of SQL batches into individual statements.
//!
//! Aurora DSQL does not accept multiple statements in a single request and requires DDL to run
//! as isolated statements, so migration scripts have to be broken apart client-side. The scanner
//! only tracks the quoting context, it does not parse SQL:
//! - a `;` outside of any quoting construct ends a statement
//! - single quoted strings and double quoted identifiers escape their delimiter by doubling it
//! - dollar quoted strings (`$$ ... $$`, `$tag$ ... $tag$`) end only at the exact same tag
//! - quoting constructs never nest; whichever opens first wins until it is closed
//!
//! Statements are returned as trimmed slices of the input and empty statements are dropped.

use std::{
    iter::{FusedIterator, Peekable},
    str::CharIndices,
};

/// Splits a SQL batch into its individual, trimmed, non-empty statements.
///
/// The returned slices borrow from `sql` and keep their original text, except for the leading
/// and trailing whitespace. The statement terminators are not included.
///
/// ```
/// # use sqlx_dsql_impl::split_statements;
/// let sql = "CREATE TABLE \"a;b\" (id INT); INSERT INTO t VALUES ('it''s;here');;";
/// assert_eq!(
///     split_statements(sql),
///     vec!["CREATE TABLE \"a;b\" (id INT)", "INSERT INTO t VALUES ('it''s;here')"]
/// );
/// ```
#[must_use]
pub fn split_statements(sql: &str) -> Vec<&str> {
    let statements: Vec<_> = Statements::new(sql).collect();
    tracing::trace!("split SQL batch into {} statement(s)", statements.len());
    statements
}

/// Lazy version of [`split_statements`].
#[must_use]
pub fn statements(sql: &str) -> Statements<'_> {
    Statements::new(sql)
}

/// Iterator over the statements of a SQL batch, created by [`statements`].
#[derive(Debug, Clone)]
pub struct Statements<'a> {
    sql: &'a str,
    chars: Peekable<CharIndices<'a>>,
    state: Inside<'a>,
    start: usize,
}

/// Quoting context the scanner is currently in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Inside<'a> {
    Statement,
    SingleQuote,
    DoubleQuote,
    /// Holds the tag between the dollar signs, possibly empty.
    DollarQuote(&'a str),
}

impl<'a> Statements<'a> {
    fn new(sql: &'a str) -> Self {
        Self {
            sql,
            chars: sql.char_indices().peekable(),
            state: Inside::Statement,
            start: 0,
        }
    }

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().map(|(_, c)| *c)
    }

    /// Advances the cursor so that the next character returned starts at or after `end`.
    fn skip_to(&mut self, end: usize) {
        while self.chars.next_if(|(i, _)| *i < end).is_some() {}
    }

    /// Trims the slice between the last statement boundary and `end` and moves the boundary
    /// past `end`.
    fn take_until(&mut self, end: usize) -> Option<&'a str> {
        let sql = self.sql;
        let stmt = sql[self.start..end].trim();
        self.start = (end + 1).min(sql.len());
        (!stmt.is_empty()).then_some(stmt)
    }
}

impl<'a> Iterator for Statements<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let sql = self.sql;

        while let Some((i, c)) = self.chars.next() {
            #[allow(clippy::match_same_arms, reason = "better readability if split")]
            match (self.state, c) {
                // Single quote start
                (Inside::Statement, '\'') => self.state = Inside::SingleQuote,
                // Double quote start
                (Inside::Statement, '"') => self.state = Inside::DoubleQuote,
                // Dollar quote start, otherwise a plain `$`
                (Inside::Statement, '$') => {
                    if let Some(tag) = dollar_tag(&sql[i..]) {
                        self.skip_to(i + tag.len() + 2);
                        self.state = Inside::DollarQuote(tag);
                    }
                }
                // Statement end
                (Inside::Statement, ';') => {
                    if let Some(stmt) = self.take_until(i) {
                        return Some(stmt);
                    }
                }
                // Skip escaped single quote
                (Inside::SingleQuote, '\'') if self.peek() == Some('\'') => {
                    self.chars.next();
                }
                // Skip escaped double quote
                (Inside::DoubleQuote, '"') if self.peek() == Some('"') => {
                    self.chars.next();
                }
                // Single quote end
                (Inside::SingleQuote, '\'') => self.state = Inside::Statement,
                // Double quote end
                (Inside::DoubleQuote, '"') => self.state = Inside::Statement,
                // Dollar quote end
                (Inside::DollarQuote(tag), '$') if closes_dollar_quote(&sql[i..], tag) => {
                    self.skip_to(i + tag.len() + 2);
                    self.state = Inside::Statement;
                }
                _ => (),
            }
        }

        // Whatever remains after the last `;`, including unterminated quotes.
        if self.start < sql.len() {
            return self.take_until(sql.len());
        }

        None
    }
}

impl FusedIterator for Statements<'_> {}

/// Returns the tag of the dollar quote opening at the start of `rest`, if there is one.
///
/// `rest` must start with `$`. The tag follows identifier rules: letters, digits and
/// underscores, but no leading digit, so positional parameters like `$1` are not mistaken for
/// dollar quotes.
fn dollar_tag(rest: &str) -> Option<&str> {
    let body = rest.strip_prefix('$')?;
    let end = body.find(|c: char| !is_tag_char(c))?;
    let tag = &body[..end];

    let is_opener = body[end..].starts_with('$') && !tag.starts_with(|c: char| c.is_ascii_digit());
    is_opener.then_some(tag)
}

/// Checks whether `rest` starts with the `$tag$` sequence closing a dollar quote.
fn closes_dollar_quote(rest: &str, tag: &str) -> bool {
    rest.strip_prefix('$')
        .and_then(|r| r.strip_prefix(tag))
        .is_some_and(|r| r.starts_with('$'))
}

fn is_tag_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
