//! Page components, one per client-side route.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every page follows the same lifecycle: fetch on mount (Analytics also
//! re-fetches on its range filter), spinner while pending, replace local
//! state on success, dismissible alert on failure. Mutations re-fetch the
//! full list instead of patching state incrementally.

pub mod analytics;
pub mod categories;
pub mod dashboard;
pub mod transactions;
