use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use serde::{Deserialize, Serialize};

use crate::task::DueTag;

#[derive(Parser)]
#[command(name = "todoline")]
#[command(about = "Parse, format and complete todo.txt task lines")]
#[command(long_about = "todoline - todo.txt lines in, todo.txt lines out

Reads a single todo.txt line, breaks it into its fields and writes it back
in canonical order. Lines that are already canonical come back unchanged.

QUICK START:
  todoline parse \"(A) 2015-04-26 call mom +family @phone\"
  todoline done \"(A) call mom +family\"
  todoline normalize \"call +family mom\"
  todoline new \"call mom\" --priority A --project family

OUTPUT FORMATS:
  --output pretty    Human-readable colored output (default)
  --output json      Machine-readable JSON for scripting

For more information on a specific command, run:
  todoline <command> --help")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    ///
    /// Use 'pretty' for human-readable colored output,
    /// or 'json' for machine-readable output suitable for scripting.
    /// Defaults to the configured format.
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

/// Due tag spelling on the command line.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum DueTagArg {
    /// `Due:`
    Upper,
    /// `due:`
    Lower,
}

impl From<DueTagArg> for DueTag {
    fn from(arg: DueTagArg) -> Self {
        match arg {
            DueTagArg::Upper => Self::Upper,
            DueTagArg::Lower => Self::Lower,
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the fields of a todo.txt line
    ///
    /// # Examples
    ///
    ///   todoline parse "(A) 2015-04-26 call mom +family @phone Due:2015-04-30"
    ///   todoline parse "x 2015-04-30 file taxes" -o json
    #[command(alias = "p")]
    Parse {
        /// The todo.txt line
        line: String,
    },

    /// Rewrite a line in canonical field order
    ///
    /// Projects, contexts and the due tag move to the end and dates are
    /// zero-padded. Canonical lines are printed unchanged.
    ///
    /// # Examples
    ///
    ///   todoline normalize "call +family mom due:2015-4-6"
    #[command(alias = "n")]
    Normalize {
        /// The todo.txt line
        line: String,
    },

    /// Mark a line as completed
    ///
    /// Drops the priority and prefixes the line with `x <date>`.
    ///
    /// # Examples
    ///
    ///   todoline done "(A) call mom"
    ///   todoline done "(A) call mom" --date 2015-04-30
    #[command(alias = "x")]
    Done {
        /// The todo.txt line
        line: String,

        /// Completion date (YYYY-MM-DD or "today"; defaults to today)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Reopen a completed line
    ///
    /// The completion marker and date are removed. A priority dropped on
    /// completion does not come back.
    Undo {
        /// The todo.txt line
        line: String,
    },

    /// Check whether two lines describe the same task
    ///
    /// Two lines are the same when they normalize to the same text.
    Same {
        /// First todo.txt line
        first: String,
        /// Second todo.txt line
        second: String,
    },

    /// Build a new line from its parts
    New(NewTaskArgs),

    /// Generate shell completions
    ///
    /// # Examples
    ///
    ///   todoline completions zsh > ~/.zsh/completions/_todoline
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Args)]
pub struct NewTaskArgs {
    /// Task description
    pub text: String,

    /// Priority letter (A-Z)
    #[arg(short, long)]
    pub priority: Option<String>,

    /// Creation date (YYYY-MM-DD or "today")
    #[arg(short, long)]
    pub created: Option<String>,

    /// Project (repeatable)
    #[arg(long = "project", value_name = "PROJECT")]
    pub projects: Vec<String>,

    /// Context (repeatable)
    #[arg(long = "context", value_name = "CONTEXT")]
    pub contexts: Vec<String>,

    /// Due date (YYYY-MM-DD or "today")
    #[arg(short, long)]
    pub due: Option<String>,

    /// Due tag spelling (defaults to the configured one)
    #[arg(long, value_enum)]
    pub due_tag: Option<DueTagArg>,
}
