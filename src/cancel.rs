//! Cooperative cancellation for generation passes.
//!
//! The host hands a [`CancelToken`] into each pass; per-item loops poll it
//! and abort without emitting a partial artifact for the in-flight item.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::error::{Result, SnipgenError};

/// Cancellation signal shared between the host and a running pass.
///
/// Clones share the same underlying flag, so the host can keep one clone
/// and cancel a pass it already handed the token to.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    /// Create a token that has not been cancelled
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation of the pass holding this token
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    /// Whether cancellation has been requested
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }

    /// Return [`SnipgenError::Cancelled`] if cancellation has been requested
    pub fn check(&self) -> Result<()> {
        if self.is_cancelled() {
            Err(SnipgenError::Cancelled)
        } else {
            Ok(())
        }
    }
}
