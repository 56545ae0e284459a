//! # navigation-drawer
//!
//! Leptos + WASM navigation drawer for the banking host application.
//!
//! The drawer is a single-spa fragment: the host page calls the exported
//! `bootstrap`, `mount`, and `unmount` functions. It renders the user's
//! greeting or profile, the account picker, navigation links, and logout, and
//! shares the selected account, token, and user name with sibling fragments
//! through `localStorage` and window events.

pub mod app;
pub mod components;
pub mod config;
pub mod hooks;
pub mod messages;
pub mod net;
pub mod routes;
pub mod state;
pub mod util;

#[cfg(feature = "csr")]
mod lifecycle {
    use std::any::Any;
    use std::cell::RefCell;
    use std::sync::Arc;

    use leptos::prelude::*;
    use wasm_bindgen::JsCast as _;
    use wasm_bindgen::prelude::*;

    use crate::app::NavigationDrawer;
    use crate::config::DrawerConfig;
    use crate::state::session::Session;
    use crate::util::broadcast::Broadcast;
    use crate::util::storage::LocalStore;

    thread_local! {
        static MOUNTED: RefCell<Option<Box<dyn Any>>> = const { RefCell::new(None) };
    }

    /// Install the panic hook and console logger. Safe to call repeatedly.
    #[wasm_bindgen]
    pub fn bootstrap() {
        console_error_panic_hook::set_once();
        // Fails only when a logger is already installed.
        let _ = console_log::init_with_level(log::Level::Info);
    }

    /// Mount the drawer into `#element_id`, or the document body.
    ///
    /// A drawer that is already mounted is unmounted first.
    ///
    /// # Errors
    ///
    /// Returns an error if no mount target exists.
    #[wasm_bindgen]
    pub fn mount(element_id: Option<String>) -> Result<(), JsValue> {
        bootstrap();
        unmount();

        let config = DrawerConfig::from_env().unwrap_or_else(|e| {
            log::warn!("{e}; falling back to default drawer config");
            DrawerConfig::default()
        });
        let parent = mount_target(element_id.as_deref())
            .ok_or_else(|| JsValue::from_str("navigation drawer: mount target not found"))?;
        let session = Session::new(Arc::new(LocalStore), Broadcast::new());

        let handle = leptos::mount::mount_to(parent, move || {
            view! { <NavigationDrawer config=config session=session/> }
        });
        MOUNTED.with(|m| *m.borrow_mut() = Some(Box::new(handle)));
        log::info!("navigation drawer mounted");
        Ok(())
    }

    /// Tear down the mounted drawer, if any.
    #[wasm_bindgen]
    pub fn unmount() {
        let previous = MOUNTED.with(|m| m.borrow_mut().take());
        if previous.is_some() {
            drop(previous);
            log::info!("navigation drawer unmounted");
        }
    }

    fn mount_target(element_id: Option<&str>) -> Option<web_sys::HtmlElement> {
        let document = web_sys::window()?.document()?;
        match element_id {
            Some(id) => document.get_element_by_id(id)?.dyn_into::<web_sys::HtmlElement>().ok(),
            None => document.body(),
        }
    }
}
