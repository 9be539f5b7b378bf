//! Injected logging for failures the facade swallows.
//!
//! The facade never returns errors from its collapsing methods, so the only
//! trace of a failure is what it reports here. Taking the logger as a value
//! instead of writing to a global lets tests capture reports and lets
//! embedders route them wherever they like.

use std::sync::Arc;

use crate::error::ApiError;

pub trait Logger: Send + Sync {
    /// A failure that was converted into a default result.
    fn report(&self, context: &str, err: &ApiError);

    /// Per-request detail, off unless the implementation wants it.
    fn debug(&self, _message: &str) {}
}

/// Forwards to `tracing`. The embedding application installs the subscriber.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn report(&self, context: &str, err: &ApiError) {
        tracing::warn!(error = %err, "{context}");
    }

    fn debug(&self, message: &str) {
        tracing::debug!("{message}");
    }
}

/// Discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullLogger;

impl Logger for NullLogger {
    fn report(&self, _context: &str, _err: &ApiError) {}
}

impl<L: Logger + ?Sized> Logger for Arc<L> {
    fn report(&self, context: &str, err: &ApiError) {
        (**self).report(context, err);
    }

    fn debug(&self, message: &str) {
        (**self).debug(message);
    }
}

impl<L: Logger + ?Sized> Logger for &L {
    fn report(&self, context: &str, err: &ApiError) {
        (**self).report(context, err);
    }

    fn debug(&self, message: &str) {
        (**self).debug(message);
    }
}
