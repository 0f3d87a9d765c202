//! R bindings for the base numerical routines.

pub mod r_triangle;
