//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate formatting, chart geometry, and browser clock
//! access from page and component logic to improve reuse and testability.

pub mod chart;
pub mod currency;
pub mod dates;
