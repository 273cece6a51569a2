#![forbid(unsafe_code)]

use crate::error_message;
use dao_ops_client::ClientError;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{debug, error};

pub type Mutator<I, R> = Arc<dyn Fn(&I) -> Result<R, ClientError> + Send + Sync>;

#[derive(Clone, Debug, PartialEq)]
pub struct MutationState<R> {
    pub loading: bool,
    pub error: Option<String>,
    pub last_result: Option<R>,
}

impl<R> Default for MutationState<R> {
    fn default() -> Self {
        Self {
            loading: false,
            error: None,
            last_result: None,
        }
    }
}

/// A create handle. It never triggers a re-read on its own: refreshing whatever
/// shows the new entity is the caller's job once `mutate` returns `Ok`.
pub struct Mutation<I, R> {
    name: &'static str,
    mutator: Mutator<I, R>,
    state: Arc<Mutex<MutationState<R>>>,
}

impl<I, R> Clone for Mutation<I, R> {
    fn clone(&self) -> Self {
        Self {
            name: self.name,
            mutator: Arc::clone(&self.mutator),
            state: Arc::clone(&self.state),
        }
    }
}

impl<I, R> Mutation<I, R>
where
    R: Clone + Send,
{
    pub fn new(name: &'static str, mutator: Mutator<I, R>) -> Self {
        Self {
            name,
            mutator,
            state: Arc::new(Mutex::new(MutationState::default())),
        }
    }

    fn lock(&self) -> MutexGuard<'_, MutationState<R>> {
        self.state
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Records the outcome and hands it back. Failures are stored for display
    /// and still returned, so a form can tell whether it may clear its fields.
    pub fn mutate(&self, input: &I) -> Result<R, ClientError> {
        {
            let mut state = self.lock();
            state.loading = true;
            state.error = None;
        }

        debug!(mutation = self.name, "submit");
        let result = (self.mutator)(input);

        let mut state = self.lock();
        state.loading = false;
        match &result {
            Ok(response) => state.last_result = Some(response.clone()),
            Err(err) => {
                error!(mutation = self.name, error = %err, "mutation failed");
                state.error = Some(error_message(err));
            }
        }
        result
    }

    pub fn snapshot(&self) -> MutationState<R> {
        self.lock().clone()
    }

    pub fn is_loading(&self) -> bool {
        self.lock().loading
    }

    pub fn error(&self) -> Option<String> {
        self.lock().error.clone()
    }

    pub fn last_result(&self) -> Option<R> {
        self.lock().last_result.clone()
    }
}

#[cfg(test)]
mod tests;
