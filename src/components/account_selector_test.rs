use super::*;

fn account(id: &str, kind: &str) -> Account {
    Account {
        id: id.to_owned(),
        kind: kind.to_owned(),
        user_id: "u-1".to_owned(),
    }
}

fn state_with(selected: Option<&str>) -> AccountsState {
    AccountsState {
        accounts: vec![account("acc-0001", "Debit"), account("acc-0042", "Credit")],
        selected_account_id: selected.map(str::to_owned),
        ..AccountsState::default()
    }
}

#[test]
fn option_label_uses_type_and_last_digits() {
    assert_eq!(option_label(&account("acc-98765", "Debit")), "Debit - 8765");
}

#[test]
fn selected_label_shows_selected_account() {
    assert_eq!(selected_label(&state_with(Some("acc-0042"))), "Credit - 0042");
}

#[test]
fn selected_label_unknown_id_falls_back_to_first_account() {
    assert_eq!(selected_label(&state_with(Some("acc-123"))), "Debit - 0001");
}

#[test]
fn selected_label_prompts_without_selection() {
    assert_eq!(selected_label(&state_with(None)), "Selecione uma conta");
}

#[test]
fn selected_label_prompts_without_accounts() {
    let state = AccountsState {
        selected_account_id: Some("acc-123".into()),
        ..AccountsState::default()
    };
    assert_eq!(selected_label(&state), "Selecione uma conta");
}
