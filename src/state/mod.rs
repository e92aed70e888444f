//! Feature state and transition tables.
//!
//! DESIGN
//! ======
//! Each feature is modeled as "on event E, apply transition T" over a small
//! value type. The DOM wiring in `features` only translates browser events
//! into these transitions and writes the derived attributes back, so the
//! behavior is testable without a browser.

pub mod audio;
pub mod nav;
pub mod reveal;
pub mod scroll;
pub mod theme;
pub mod welcome;
