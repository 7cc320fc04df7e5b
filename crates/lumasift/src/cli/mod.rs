//! Command implementations.

pub mod sift;
