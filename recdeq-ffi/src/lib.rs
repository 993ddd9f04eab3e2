//! C bindings for the `recdeq` record queue.
//!
//! This crate exposes [`recdeq`]'s queue to C and C++ hosts. The host
//! receives an opaque handle from [`recdeq_new`], passes it to every
//! operation, and releases it exactly once with [`recdeq_free`]. Records
//! cross the boundary by value as plain 24-byte structs; the queue never
//! hands out pointers into its own storage.
//!
//! All fallible operations return a [`RecdeqStatus`] instead of relying
//! on caller preconditions: a null handle reports
//! [`RecdeqStatus::NullHandle`] and operations on an empty queue report
//! [`RecdeqStatus::Empty`].
//!
//! ## Usage from C
//!
//! ```c
//! recdeq_queue_t *queue = recdeq_new();
//!
//! recdeq_record_t record = { .key = {0}, .timestamp = {0} };
//! recdeq_push_front(queue, record);
//!
//! recdeq_record_t back;
//! while (recdeq_peek_back(queue, &back) == RECDEQ_OK) {
//!     /* consume back... */
//!     recdeq_remove_back(queue);
//! }
//!
//! recdeq_free(queue);
//! ```
//!
//! ## Thread safety
//!
//! Handles are not synchronized. A queue may only be used from one thread
//! at a time; hosts that share a handle across threads must wrap every
//! call in their own lock.

use std::ffi::c_char;

use recdeq::{Key, Record, RecordQueue, Timestamp};

// =============================================================================
// Types
// =============================================================================

/// Status codes returned by the `recdeq_*` functions.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecdeqStatus {
	/// Success (no error).
	Ok = 0,
	/// A null handle or output pointer was passed.
	NullHandle = 1,
	/// The queue holds no records.
	Empty = 2,
	/// The queue needed to grow and the allocator failed.
	AllocationFailed = 3,
}

/// A queue record as seen by C: 16 key bytes followed by 8 timestamp
/// bytes, passed by value.
///
/// Matches `struct { uint8_t key[16]; uint8_t timestamp[8]; }` with no
/// padding.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RecdeqRecord {
	/// Record key, opaque to the queue.
	pub key: [u8; 16],
	/// Record timestamp, opaque to the queue.
	pub timestamp: [u8; 8],
}

impl From<Record> for RecdeqRecord {
	fn from(record: Record) -> Self {
		Self {
			key: record.key.into_bytes(),
			timestamp: record.timestamp.into_bytes(),
		}
	}
}

impl From<RecdeqRecord> for Record {
	fn from(record: RecdeqRecord) -> Self {
		Self::new(Key::new(record.key), Timestamp::new(record.timestamp))
	}
}

/// Opaque queue handle.
#[derive(Debug)]
pub struct RecdeqQueue {
	inner: RecordQueue,
}

// =============================================================================
// Library
// =============================================================================

/// Get the recdeq library version string.
///
/// Returns a null-terminated string like "0.1.0".
#[no_mangle]
pub extern "C" fn recdeq_version() -> *const c_char {
	// Static string with null terminator
	b"0.1.0\0".as_ptr() as *const c_char
}

// =============================================================================
// Queue Lifecycle
// =============================================================================

/// Create a new empty queue.
///
/// The returned handle owns the queue. Pass it to [`recdeq_free`] exactly
/// once when done; every other `recdeq_*` call borrows it.
///
/// Returns NULL on allocation failure.
#[no_mangle]
pub extern "C" fn recdeq_new() -> *mut RecdeqQueue {
	let queue = RecdeqQueue { inner: RecordQueue::new() };

	Box::into_raw(Box::new(queue))
}

/// Free a queue created by [`recdeq_new`].
///
/// Passing NULL is a no-op.
///
/// # Safety
///
/// `queue` must be a pointer returned by [`recdeq_new`] that has not
/// already been freed.
#[no_mangle]
pub unsafe extern "C" fn recdeq_free(queue: *mut RecdeqQueue) {
	if !queue.is_null() {
		drop(Box::from_raw(queue));
	}
}

// =============================================================================
// Queue Operations
// =============================================================================

/// Push a record to the front of the queue.
///
/// The record is copied; the queue keeps no reference to host memory.
/// Returns `AllocationFailed` if the queue could not grow, in which case
/// the queue is unchanged and still usable.
///
/// # Safety
///
/// `queue` must be a valid handle from [`recdeq_new`], or NULL.
#[no_mangle]
pub unsafe extern "C" fn recdeq_push_front(
	queue: *mut RecdeqQueue,
	record: RecdeqRecord,
) -> RecdeqStatus {
	if queue.is_null() {
		return RecdeqStatus::NullHandle;
	}

	match (*queue).inner.push_front(record.into()) {
		Ok(()) => RecdeqStatus::Ok,
		Err(_) => RecdeqStatus::AllocationFailed,
	}
}

/// Copy the back record into `out` without removing it.
///
/// Returns `Empty` if the queue holds no records; `out` is left untouched
/// in that case. Peeking does not change the queue, so two consecutive
/// calls write the same record.
///
/// # Safety
///
/// `queue` must be a valid handle or NULL. `out` must point to writable
/// memory for one record, or be NULL.
#[no_mangle]
pub unsafe extern "C" fn recdeq_peek_back(
	queue: *const RecdeqQueue,
	out: *mut RecdeqRecord,
) -> RecdeqStatus {
	if queue.is_null() || out.is_null() {
		return RecdeqStatus::NullHandle;
	}

	match (*queue).inner.peek_back() {
		Some(record) => {
			*out = record.into();
			RecdeqStatus::Ok
		}
		None => RecdeqStatus::Empty,
	}
}

/// Remove the back record.
///
/// Returns `Empty` if the queue holds no records.
///
/// # Safety
///
/// `queue` must be a valid handle or NULL.
#[no_mangle]
pub unsafe extern "C" fn recdeq_remove_back(
	queue: *mut RecdeqQueue,
) -> RecdeqStatus {
	if queue.is_null() {
		return RecdeqStatus::NullHandle;
	}

	match (*queue).inner.pop_back() {
		Some(_) => RecdeqStatus::Ok,
		None => RecdeqStatus::Empty,
	}
}

/// Check whether the queue holds no records.
///
/// NULL handles report empty.
///
/// # Safety
///
/// `queue` must be a valid handle or NULL.
#[no_mangle]
pub unsafe extern "C" fn recdeq_is_empty(queue: *const RecdeqQueue) -> bool {
	if queue.is_null() {
		return true;
	}
	(*queue).inner.is_empty()
}

/// Get the number of records currently in the queue.
///
/// Returns 0 for a NULL handle.
///
/// # Safety
///
/// `queue` must be a valid handle or NULL.
#[no_mangle]
pub unsafe extern "C" fn recdeq_len(queue: *const RecdeqQueue) -> usize {
	if queue.is_null() {
		return 0;
	}
	(*queue).inner.len()
}

// =============================================================================
// Tests
// =============================================================================
