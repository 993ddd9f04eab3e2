//! Double-ended queue of fixed-size key/timestamp records.
//!
//! A [`RecordQueue`] holds [`Record`]s, each exactly 24 bytes: a 16-byte
//! opaque key followed by an 8-byte opaque timestamp. Records enter at the
//! front and are inspected and drained from the back, so the oldest record
//! is always the next one out.
//!
//! The queue is a plain owned value with no internal locking. Callers that
//! need concurrent access must wrap it in their own synchronization.
//!
//! # Example
//! ```
//! use recdeq::{Key, Record, RecordQueue, Timestamp};
//!
//! let mut queue = RecordQueue::new();
//! assert!(queue.is_empty());
//!
//! let record = Record::new(Key::new([1; 16]), Timestamp::new([2; 8]));
//! queue.push_front(record).unwrap();
//!
//! assert_eq!(queue.peek_back(), Some(record));
//! assert_eq!(queue.pop_back(), Some(record));
//! assert!(queue.is_empty());
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod error;
mod queue;
mod record;
mod util;

#[cfg(feature = "statistics")]
mod statistics;

pub use self::error::PushError;
pub use self::queue::RecordQueue;
pub use self::record::{Key, Record, Timestamp};

#[cfg(feature = "statistics")]
pub use self::statistics::Statistics;
