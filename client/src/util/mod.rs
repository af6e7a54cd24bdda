//! Utility helpers shared across client UI modules.
//!
//! Utility modules isolate browser/environment concerns from page and
//! component logic to improve reuse and testability.

pub mod config;
