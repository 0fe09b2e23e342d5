use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[clap(version, about)]
pub struct Opt {
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Split a SQL script into the individual statements Aurora DSQL can execute.
    Split(SplitArgs),
}

#[derive(Args, Debug)]
pub struct SplitArgs {
    /// Path of the SQL script. Reads from stdin when omitted or `-`.
    pub input: Option<PathBuf>,

    /// How to print the statements.
    #[clap(long, value_enum, env = "SQLX_DSQL_FORMAT", default_value_t = Format::Lines)]
    pub format: Format,

    /// Only print the number of statements.
    #[clap(long)]
    pub count: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    /// Statements separated by a `;` on its own line and an empty line.
    Lines,
    /// A JSON array of statements.
    Json,
}
