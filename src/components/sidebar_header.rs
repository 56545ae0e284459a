//! Greeting and date header.

use leptos::prelude::*;

use crate::messages;
use crate::util::format;

/// "Bem vindo {name}" with today's date underneath.
#[component]
pub fn SidebarHeader(user_name: String) -> impl IntoView {
    let greeting = format!("{} {user_name}", messages::WELCOME);
    let date = format::current_date();
    let date_line = (!date.is_empty()).then(|| view! { <p class="drawer__date">{date}</p> });

    view! {
        <div class="drawer__greeting-block">
            <p class="drawer__greeting">{greeting}</p>
            {date_line}
        </div>
    }
}
