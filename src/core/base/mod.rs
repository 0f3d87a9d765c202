//! Module containing the base numerical routines of the crate.

pub mod triangle;
