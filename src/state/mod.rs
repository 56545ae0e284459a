//! Plain state models for the drawer.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components hold these inside `RwSignal`s; the hooks in `crate::hooks` drive
//! their transitions from browser events and network results.

pub mod accounts;
pub mod layout;
pub mod session;
