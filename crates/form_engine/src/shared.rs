//! Mutex-guarded builder handle for hosts with several callers

use crate::{BuilderCommand, Clock, CommandOutput, FormBuilder, IdProvider, Result};
use form_model::Template;
use std::sync::{Arc, Mutex, PoisonError};

/// Cloneable handle that serializes every call against one builder.
///
/// Each call holds the lock for its whole duration, so callers on different
/// threads still observe a single linear history of edits.
pub struct SharedFormBuilder<I = crate::UuidIdProvider, C = crate::SystemClock> {
    inner: Arc<Mutex<FormBuilder<I, C>>>,
}

impl<I, C> Clone for SharedFormBuilder<I, C> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<I: IdProvider, C: Clock> SharedFormBuilder<I, C> {
    pub fn new(builder: FormBuilder<I, C>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(builder)),
        }
    }

    /// Run a closure with exclusive access to the builder.
    ///
    /// A panic in an earlier caller does not lock the document out: every
    /// builder operation leaves the document consistent before returning.
    pub fn with<R>(&self, f: impl FnOnce(&mut FormBuilder<I, C>) -> R) -> R {
        let mut guard = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut guard)
    }

    pub fn execute(&self, command: BuilderCommand) -> Result<CommandOutput> {
        self.with(|builder| builder.execute(command))
    }

    pub fn snapshot(&self) -> Template {
        self.with(|builder| builder.snapshot())
    }
}
