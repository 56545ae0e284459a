//! Root drawer component.
//!
//! ARCHITECTURE
//! ============
//! Wires the session, the bus, and the three hooks (accounts, layout, path)
//! into the presentational components. Browser builds also install the DOM
//! bridge here so its lifetime matches the mounted drawer.

use leptos::prelude::*;

use crate::components::account_selector::AccountSelector;
use crate::components::error_message::ErrorMessage;
use crate::components::icons::{ArrowLeftIcon, LogoutIcon};
use crate::components::nav_link::NavLink;
use crate::components::sidebar_header::SidebarHeader;
use crate::components::user_profile::UserProfile;
use crate::config::DrawerConfig;
use crate::hooks::accounts::use_accounts;
use crate::hooks::current_path::use_current_path;
use crate::hooks::layout::use_layout;
use crate::messages;
use crate::net::http::ApiClient;
use crate::routes::{self, NAV_ITEMS};
use crate::state::accounts::AccountsState;
use crate::state::layout::LayoutState;
use crate::state::session::Session;
use crate::util::nav;

/// The navigation drawer: profile header, account picker, links, and logout.
#[component]
pub fn NavigationDrawer(config: DrawerConfig, session: Session) -> impl IntoView {
    let bus = session.bus().clone();

    #[cfg(feature = "csr")]
    {
        let bridge = crate::util::dom_bridge::install(&bus);
        on_cleanup(move || bridge.remove());
    }

    let client = ApiClient::new(config.api_base_url.clone(), session.clone());
    let accounts = use_accounts(session.clone(), client);
    let layout = use_layout(&bus, config.mobile_breakpoint);
    let current_path = use_current_path(&bus);

    let user_name = session.user_name().unwrap_or_default();
    let agency = config.agency;
    let selected_id = Memo::new(move |_| accounts.state.with(|s| s.selected_account_id.clone()));

    let on_navigate = Callback::new(move |route: &'static str| {
        layout.close.run(());
        nav::navigate_to_url(route);
    });
    let on_logout = Callback::new(move |()| {
        session.logout();
    });

    view! {
        <aside class="sidebar" class:sidebar--open=move || layout.state.with(LayoutState::is_overlay_open)>
            <div class="sidebar__content">
                <Show
                    when=move || !accounts.state.with(AccountsState::is_loading)
                    fallback=|| view! { <div class="drawer__loading" role="status">{messages::LOADING}</div> }
                >
                    <div class="drawer__header">
                        <Show when=move || layout.state.with(|s| s.is_mobile)>
                            <button
                                class="drawer__close"
                                on:click=move |_| layout.close.run(())
                                aria-label=messages::CLOSE_MENU
                            >
                                <ArrowLeftIcon/>
                            </button>
                        </Show>
                        {
                            let user_name = user_name.clone();
                            let agency = agency.clone();
                            move || match selected_id.get() {
                                Some(account_id) if !user_name.is_empty() => {
                                    view! {
                                        <UserProfile
                                            user_name=user_name.clone()
                                            account_id=account_id
                                            agency=agency.clone()
                                        />
                                    }
                                        .into_any()
                                }
                                _ => view! { <SidebarHeader user_name=user_name.clone()/> }.into_any(),
                            }
                        }
                    </div>

                    <Show when=move || accounts.state.with(AccountsState::show_error)>
                        <ErrorMessage
                            message=Signal::derive(move || accounts.state.with(|s| s.error.clone().unwrap_or_default()))
                            on_retry=accounts.retry
                        />
                    </Show>

                    <Show when=move || accounts.state.with(AccountsState::show_empty)>
                        <div class="drawer__empty">{messages::NO_ACCOUNTS}</div>
                    </Show>

                    <AccountSelector accounts=accounts.state on_change=accounts.select/>

                    <nav class="drawer__nav" aria-label=messages::MAIN_NAV_LABEL>
                        {NAV_ITEMS
                            .iter()
                            .copied()
                            .map(|item| {
                                view! {
                                    <NavLink
                                        icon=item.icon
                                        label=item.label
                                        is_active=Signal::derive(move || {
                                            current_path.with(|path| routes::is_active(item.path, path))
                                        })
                                        on_click=Callback::new(move |()| on_navigate.run(item.route))
                                    />
                                }
                            })
                            .collect_view()}
                    </nav>

                    <button
                        class="nav-link drawer__logout"
                        on:click=move |_| on_logout.run(())
                        aria-label=messages::LOGOUT_LABEL
                    >
                        <div class="nav-link__content">
                            <LogoutIcon/>
                            <span class="nav-link__label">{messages::LOGOUT}</span>
                        </div>
                    </button>
                </Show>
            </div>
        </aside>
    }
}
