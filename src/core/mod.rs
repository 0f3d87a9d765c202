//! Pure Rust implementations of the functionality exposed to R.

pub mod base;
