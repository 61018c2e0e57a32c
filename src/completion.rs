//! # Shell Completion Module
//!
//! This module provides shell completion generation for Rota through clap's
//! completion system.
//!
//! ## Usage
//!
//! ```bash
//! # Generate bash completions
//! rota completion bash > ~/.local/share/bash-completion/completions/rota
//!
//! # Generate zsh completions
//! rota completion zsh > ~/.config/zsh/completions/_rota
//! ```

use crate::cli;
use clap::Command;
use clap_complete::{generate, Generator, Shell as CompletionShell};
use std::io;

/// Generate shell completions for the given shell
pub fn generate_completions<G: Generator>(gen: G, cmd: &mut Command) {
    let name = cmd.get_name().to_string();
    generate(gen, cmd, name, &mut io::stdout());
}

/// Map our CLI shell enum to clap_complete's shell type
#[must_use]
pub fn shell_to_completion_shell(shell: &cli::Shell) -> CompletionShell {
    match shell {
        cli::Shell::Bash => CompletionShell::Bash,
        cli::Shell::Zsh => CompletionShell::Zsh,
        cli::Shell::Fish => CompletionShell::Fish,
        cli::Shell::PowerShell => CompletionShell::PowerShell,
        cli::Shell::Elvish => CompletionShell::Elvish,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_shells_map() {
        assert_eq!(
            shell_to_completion_shell(&cli::Shell::Bash),
            CompletionShell::Bash
        );
        assert_eq!(
            shell_to_completion_shell(&cli::Shell::Fish),
            CompletionShell::Fish
        );
        assert_eq!(
            shell_to_completion_shell(&cli::Shell::PowerShell),
            CompletionShell::PowerShell
        );
    }
}
