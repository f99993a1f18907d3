//! A randomized queue and the line-subset filter built on top of it.
//!
//! [`RandomizedQueue`] supports O(1) insertion, uniformly random sampling
//! and removal, and iteration in an order reshuffled on every traversal.
//! [`subset`](subset::subset) uses it to print a random selection of lines.

pub mod cmd;
pub mod subset;
pub mod utils;

pub use subset::{subset, SubsetError};
pub use utils::queues::{IntoIter, Iter, IterMut, RandomizedQueue};
pub use utils::random::RandomSource;
