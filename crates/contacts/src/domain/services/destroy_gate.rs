//! Destroy gate - confirm before deleting
//!
//! Deletion is a two-step protocol: ask, then act. A declined prompt
//! returns before the destroy future is even created.

use std::future::Future;

use crate::ports::Confirmer;

/// Prompt shown before a contact is deleted
pub const DELETE_CONFIRMATION_PROMPT: &str = "Are you sure you want to delete this record?";

/// Result of a gated deletion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DestroyOutcome {
    Destroyed,
    Cancelled,
}

/// Ask `confirmer`, and only on an affirmative answer run `destroy`
pub async fn confirm_then_destroy<C, F, Fut, E>(
    confirmer: &C,
    destroy: F,
) -> Result<DestroyOutcome, E>
where
    C: Confirmer + ?Sized,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<(), E>>,
{
    if !confirmer.confirm(DELETE_CONFIRMATION_PROMPT) {
        tracing::debug!("Deletion declined");
        return Ok(DestroyOutcome::Cancelled);
    }

    destroy().await?;
    Ok(DestroyOutcome::Destroyed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    struct Answer {
        yes: bool,
        prompts: Mutex<Vec<String>>,
    }

    impl Answer {
        fn new(yes: bool) -> Self {
            Self {
                yes,
                prompts: Mutex::new(Vec::new()),
            }
        }
    }

    impl Confirmer for Answer {
        fn confirm(&self, prompt: &str) -> bool {
            self.prompts.lock().unwrap().push(prompt.to_string());
            self.yes
        }
    }

    #[tokio::test]
    async fn test_declined_never_destroys() {
        let counter = AtomicUsize::new(0);
        let calls = &counter;
        let confirmer = Answer::new(false);

        let outcome = confirm_then_destroy(&confirmer, || async move {
            calls.fetch_add(1, Ordering::SeqCst);
            Ok::<(), String>(())
        })
        .await
        .unwrap();

        assert_eq!(outcome, DestroyOutcome::Cancelled);
        assert_eq!(counter.load(Ordering::SeqCst), 0);
        assert_eq!(
            *confirmer.prompts.lock().unwrap(),
            vec![DELETE_CONFIRMATION_PROMPT.to_string()]
        );
    }

    #[tokio::test]
    async fn test_confirmed_destroys_once() {
        let counter = AtomicUsize::new(0);
        let calls = &counter;

        let outcome = confirm_then_destroy(&Answer::new(true), || async move {
            calls.fetch_add(1, Ordering::SeqCst);
            Ok::<(), String>(())
        })
        .await
        .unwrap();

        assert_eq!(outcome, DestroyOutcome::Destroyed);
        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_destroy_error_propagates() {
        let result = confirm_then_destroy(&Answer::new(true), || async {
            Err::<(), _>("store unavailable".to_string())
        })
        .await;

        assert_eq!(result, Err("store unavailable".to_string()));
    }
}
