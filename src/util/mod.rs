//! Utility helpers shared across drawer modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from component logic
//! to improve reuse and testability.

pub mod broadcast;
#[cfg(feature = "csr")]
pub mod dom_bridge;
pub mod format;
pub mod nav;
pub mod storage;
