//! Domain Services
//!
//! Stateless computations over domain entities.

mod status_counter;

pub use status_counter::{StatusCounts, StatusLine};
