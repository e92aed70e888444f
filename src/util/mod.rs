//! Utility helpers shared across feature modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from feature logic
//! to improve reuse and testability.

#[cfg(feature = "hydrate")]
pub mod dom;
pub mod storage;
