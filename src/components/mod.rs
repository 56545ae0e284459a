//! Presentation components for the drawer.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render from props only; state and side effects are wired in
//! `app::NavigationDrawer`.

pub mod account_selector;
pub mod error_message;
pub mod icons;
pub mod nav_link;
pub mod sidebar_header;
pub mod user_profile;
