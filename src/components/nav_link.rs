//! Single entry in the drawer's navigation list.

use leptos::prelude::*;

use crate::components::icons::{ChevronRightIcon, nav_icon};
use crate::routes::NavIcon;

/// A navigation button, highlighted and marked `aria-current` when active.
#[component]
pub fn NavLink(
    icon: NavIcon,
    label: &'static str,
    #[prop(into)] is_active: Signal<bool>,
    on_click: Callback<()>,
) -> impl IntoView {
    view! {
        <button
            class="nav-link"
            class:nav-link--active=move || is_active.get()
            on:click=move |_| on_click.run(())
            aria-label=label
            aria-current=move || is_active.get().then_some("page")
        >
            <div class="nav-link__content">
                <span aria-hidden="true">{nav_icon(icon)}</span>
                <span class="nav-link__label" class:nav-link__label--active=move || is_active.get()>
                    {label}
                </span>
            </div>
            <ChevronRightIcon/>
        </button>
    }
}
