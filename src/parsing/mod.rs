//! Low-level parsing utilities.
//!
//! This module holds the pieces the tokenizer is built from, kept apart
//! so new export layouts can be added without touching the tokenizer.

pub mod whatsapp;

pub use whatsapp::{LayoutPatterns, TimestampLayout, normalize_spaces};
