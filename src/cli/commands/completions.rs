//! Shell completions generation.
//!
//! Generates shell completion scripts for bash, zsh, fish, and PowerShell.

use clap::CommandFactory;
use clap_complete::Shell;

use crate::cli::args::Cli;
use crate::error::TodoError;

/// Generate shell completions for the specified shell.
///
/// # Errors
///
/// Returns an error if the generated script is not valid UTF-8.
pub fn completions(shell: Shell) -> Result<String, TodoError> {
    let mut cmd = Cli::command();
    let mut buf = Vec::new();
    clap_complete::generate(shell, &mut cmd, "todoline", &mut buf);
    String::from_utf8(buf).map_err(|e| {
        TodoError::Io(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            format!("UTF-8 error: {e}"),
        ))
    })
}
