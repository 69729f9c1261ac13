//! Operator confirmation prompt

use crate::core::ScaffoldError;
use std::io::{self, BufRead, Write};

/// Trait for confirmation prompts - allows for different implementations
pub trait ConfirmPrompt {
    /// Ask the operator to confirm; blocks until an answer arrives.
    ///
    /// Returns false on refusal. Cancelled input (EOF) counts as refusal.
    fn confirm(&self, message: &str) -> Result<bool, ScaffoldError>;
}

/// Prompt that reads the answer from the terminal (y/N)
pub struct TerminalPrompt;

impl ConfirmPrompt for TerminalPrompt {
    fn confirm(&self, message: &str) -> Result<bool, ScaffoldError> {
        print!("{message} [y/N]: ");
        io::stdout().flush().map_err(ScaffoldError::Io)?;

        let mut input = String::new();
        let read = io::stdin()
            .lock()
            .read_line(&mut input)
            .map_err(ScaffoldError::Io)?;
        if read == 0 {
            // stdin closed before an answer
            return Ok(false);
        }

        let trimmed = input.trim().to_lowercase();
        Ok(trimmed == "y" || trimmed == "yes")
    }
}
