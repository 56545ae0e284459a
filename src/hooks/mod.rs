//! Hook-style installers that bind state models to the browser.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each `use_*` function must be called inside a component. It creates the
//! signal it owns, subscribes to the drawer bus, and unsubscribes when the
//! owning component is cleaned up.

pub mod accounts;
pub mod current_path;
pub mod layout;
