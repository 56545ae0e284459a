//! Inline SVG icons used by the drawer.

use leptos::prelude::*;

use crate::routes::NavIcon;

#[component]
pub fn HomeIcon() -> impl IntoView {
    view! {
        <svg class="icon" viewBox="0 0 24 24" width="20" height="20" aria-hidden="true">
            <path d="M3 11 L12 3 L21 11"></path>
            <path d="M5 10 V21 H10 V15 H14 V21 H19 V10"></path>
        </svg>
    }
}

#[component]
pub fn StatementIcon() -> impl IntoView {
    view! {
        <svg class="icon" viewBox="0 0 24 24" width="20" height="20" aria-hidden="true">
            <rect x="5" y="3" width="14" height="18" rx="2" ry="2"></rect>
            <path d="M8 8 H16 M8 12 H16 M8 16 H13"></path>
        </svg>
    }
}

#[component]
pub fn TransactionIcon() -> impl IntoView {
    view! {
        <svg class="icon" viewBox="0 0 24 24" width="20" height="20" aria-hidden="true">
            <path d="M4 8 H18 L14 4 M20 16 H6 L10 20"></path>
        </svg>
    }
}

#[component]
pub fn LogoutIcon() -> impl IntoView {
    view! {
        <svg class="icon" viewBox="0 0 24 24" width="20" height="20" aria-hidden="true">
            <path d="M10 4 H5 V20 H10"></path>
            <path d="M14 8 L18 12 L14 16 M18 12 H9"></path>
        </svg>
    }
}

#[component]
pub fn ArrowLeftIcon() -> impl IntoView {
    view! {
        <svg class="icon" viewBox="0 0 24 24" width="20" height="20" aria-hidden="true">
            <path d="M19 12 H5 M11 6 L5 12 L11 18"></path>
        </svg>
    }
}

#[component]
pub fn ChevronRightIcon() -> impl IntoView {
    view! {
        <svg class="icon icon--chevron" viewBox="0 0 24 24" width="16" height="16" aria-hidden="true">
            <path d="M9 6 L15 12 L9 18"></path>
        </svg>
    }
}

#[component]
pub fn UserIcon() -> impl IntoView {
    view! {
        <svg class="icon" viewBox="0 0 24 24" width="20" height="20" aria-hidden="true">
            <circle cx="12" cy="8" r="4"></circle>
            <path d="M4 21 C4 16.6 7.6 14 12 14 C16.4 14 20 16.6 20 21"></path>
        </svg>
    }
}

/// Icon for a navigation entry.
pub fn nav_icon(icon: NavIcon) -> AnyView {
    match icon {
        NavIcon::Home => view! { <HomeIcon/> }.into_any(),
        NavIcon::Statement => view! { <StatementIcon/> }.into_any(),
        NavIcon::Transaction => view! { <TransactionIcon/> }.into_any(),
    }
}
