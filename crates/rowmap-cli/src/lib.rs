//! CLI library components for rowmap.

pub mod input;
pub mod logging;
