//! Shared helpers for the Rust <> R boundary.

pub mod r_rust_interface;
