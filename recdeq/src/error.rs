//! Error types for `recdeq`.

use alloc::collections::TryReserveError;
use core::fmt;

/// The error type returned by [`RecordQueue::push_front`].
///
/// [`RecordQueue::push_front`]: crate::RecordQueue::push_front
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PushError {
	/// The queue needed to grow and the allocator could not provide the
	/// memory. The queue is left unchanged and can continue to be used
	/// normally.
	Alloc(TryReserveError),
}

impl From<TryReserveError> for PushError {
	fn from(value: TryReserveError) -> Self {
		Self::Alloc(value)
	}
}

impl fmt::Display for PushError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Alloc(_) => f.write_str("allocation failure"),
		}
	}
}

#[cfg(feature = "std")]
impl std::error::Error for PushError {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		match self {
			Self::Alloc(e) => Some(e),
		}
	}
}
