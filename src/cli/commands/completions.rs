//! Shell completions generation.
//!
//! Generates shell completion scripts for bash, zsh, fish, PowerShell, and elvish.

use clap::CommandFactory;
use clap_complete::Shell;

use crate::cli::args::Cli;
use crate::error::ClockError;

/// Execute the completions command.
///
/// # Errors
///
/// Returns `ClockError::Parse` for an unknown shell name.
pub fn completions(shell: &str, install: bool) -> Result<String, ClockError> {
    let shell = shell_from_str(shell)
        .ok_or_else(|| ClockError::Parse(format!("Unknown shell: {shell}")))?;

    if install {
        Ok(completion_install_instructions(shell))
    } else {
        generate_completions(shell)
    }
}

/// Generate the completion script for `shell`.
///
/// # Errors
///
/// Returns an error if the generated script is not valid UTF-8.
pub fn generate_completions(shell: Shell) -> Result<String, ClockError> {
    let mut cmd = Cli::command();
    let mut buf = Vec::new();
    clap_complete::generate(shell, &mut cmd, "pomoclock", &mut buf);
    String::from_utf8(buf).map_err(|e| ClockError::Parse(format!("UTF-8 error: {e}")))
}

/// Get shell from string name.
#[must_use]
pub fn shell_from_str(s: &str) -> Option<Shell> {
    match s.to_lowercase().as_str() {
        "bash" => Some(Shell::Bash),
        "zsh" => Some(Shell::Zsh),
        "fish" => Some(Shell::Fish),
        "powershell" | "ps" | "pwsh" => Some(Shell::PowerShell),
        "elvish" => Some(Shell::Elvish),
        _ => None,
    }
}

/// Get installation instructions for shell completions.
#[must_use]
pub fn completion_install_instructions(shell: Shell) -> String {
    match shell {
        Shell::Bash => "# Add to ~/.bashrc:
source <(pomoclock completions bash)
"
        .to_string(),

        Shell::Zsh => "# Save to your fpath:
pomoclock completions zsh > ~/.zsh/completions/_pomoclock
# Then add to ~/.zshrc (before compinit):
fpath=(~/.zsh/completions $fpath)
"
        .to_string(),

        Shell::Fish => "# Save to fish completions directory:
pomoclock completions fish > ~/.config/fish/completions/pomoclock.fish
"
        .to_string(),

        Shell::PowerShell => "# Add to your PowerShell profile ($PROFILE):
pomoclock completions powershell | Out-String | Invoke-Expression
"
        .to_string(),

        Shell::Elvish => "# Save to elvish completions directory:
pomoclock completions elvish > ~/.elvish/lib/pomoclock.elv
# Then add to ~/.elvish/rc.elv:
use pomoclock
"
        .to_string(),

        _ => "Unknown shell".to_string(),
    }
}
