//! Operator confirmation

use std::io::IsTerminal;

use dialoguer::Confirm as ConfirmPrompt;
use tracing::warn;

use liftoff_core::error::Result;
use liftoff_core::{Confirm, LiftoffError};

/// Asks on the terminal, defaulting to "no"
pub struct DialoguerConfirm;

impl Confirm for DialoguerConfirm {
    fn confirm(&self, prompt: &str) -> Result<bool> {
        ConfirmPrompt::new()
            .with_prompt(prompt)
            .default(false)
            .interact()
            .map_err(|e| LiftoffError::other(format!("Confirmation prompt failed: {}", e)))
    }
}

/// Declines every question, for runs without a terminal
pub struct NonInteractive;

impl Confirm for NonInteractive {
    fn confirm(&self, prompt: &str) -> Result<bool> {
        warn!(prompt, "no terminal to confirm on, declining (pass --yes to proceed)");
        Ok(false)
    }
}

/// Pick the confirmation strategy for this process
pub fn for_terminal() -> Box<dyn Confirm> {
    if std::io::stdin().is_terminal() && std::io::stderr().is_terminal() {
        Box::new(DialoguerConfirm)
    } else {
        Box::new(NonInteractive)
    }
}
