//! Page-local display state.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each page owns one of these structs inside an `RwSignal`; state is
//! request-scoped and fully replaced on every fetch. Form records and their
//! payload builders live here so they stay pure and unit-testable.

pub mod analytics;
pub mod categories;
pub mod transactions;
