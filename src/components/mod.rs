//! Leptos components mounted into the hand-written page markup.
//!
//! SYSTEM CONTEXT
//! ==============
//! The site is static HTML; components here only render the fragments the
//! behavior layer injects at runtime.

pub mod mobile_nav;
