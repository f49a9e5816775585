//! Common utilities for ddscope.
//!
//! This crate provides the foundational types used across the ddscope crates:
//!
//! - [`BinaryReader`] - Bounds-checked little-endian reading from byte slices
//! - [`Error`] - Errors raised when a read runs past the end of the input

mod error;
mod reader;

pub use error::{Error, Result};
pub use reader::BinaryReader;
