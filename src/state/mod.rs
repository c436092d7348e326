// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Mutable search state, tracked on the trail.
//!
//! - `selection`: partial solution, used markers and results for the
//!   combinatorial searches
//! - `statistics`: counters that survive backtracking

pub mod selection;
pub mod statistics;

pub use selection::{Pick, Selection};
pub use statistics::{Counters, Statistics};
