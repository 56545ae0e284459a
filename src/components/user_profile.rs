//! Signed-in user's name with branch and account number.

use leptos::prelude::*;

use crate::components::icons::UserIcon;
use crate::messages;
use crate::util::format::format_account_number;

#[component]
pub fn UserProfile(user_name: String, account_id: String, agency: String) -> impl IntoView {
    let name = user_name.to_uppercase();
    let account = format!("Conta {}", format_account_number(&account_id));

    view! {
        <div class="user-profile" role="region" aria-label=messages::PROFILE_LABEL>
            <div class="user-profile__name-row">
                <span class="user-profile__icon" aria-hidden="true">
                    <UserIcon/>
                </span>
                <span class="user-profile__name">{name}</span>
            </div>
            <div class="user-profile__account-row">
                <span class="user-profile__account-info">{format!("Agência {agency}")}</span>
                <span class="user-profile__account-info">{account}</span>
            </div>
        </div>
    }
}
