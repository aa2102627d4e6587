//! Confirmer Port
//!
//! Asks the user a yes/no question before a destructive action.

/// Interactive yes/no prompt
pub trait Confirmer {
    /// Returns `true` only on an affirmative answer
    fn confirm(&self, prompt: &str) -> bool;
}

/// Confirmer that always answers yes (non-interactive `--yes` mode)
#[derive(Debug, Clone, Copy, Default)]
pub struct AssumeYes;

impl Confirmer for AssumeYes {
    fn confirm(&self, _prompt: &str) -> bool {
        true
    }
}
