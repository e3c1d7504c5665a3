#![deny(missing_docs)]
//! A growable first-in-first-out queue of `i32` values, stored unboxed in
//! a single contiguous buffer. Meant as a worklist for code that pushes and
//! pops a lot of integer ids, such as graph traversals.

mod config;
pub mod error;
mod queue;

pub use config::QueueConfig;
pub use error::{Error, Result};
pub use queue::{IntQueue, DEFAULT_CAPACITY, DEFAULT_GROW_FACTOR};
