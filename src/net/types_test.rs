use super::*;

#[test]
fn account_response_parses_service_payload() {
    let raw = r#"{
        "message": "Conta encontrada carregada com sucesso",
        "result": {
            "account": [
                { "id": "acc-1", "type": "Debit", "userId": "u-1" },
                { "id": "acc-2", "type": "Credit", "userId": "u-1" }
            ],
            "transactions": [],
            "cards": []
        }
    }"#;

    let resp: AccountResponse = serde_json::from_str(raw).unwrap();
    assert_eq!(resp.message, "Conta encontrada carregada com sucesso");
    let accounts = resp.into_accounts();
    assert_eq!(accounts.len(), 2);
    assert_eq!(accounts[0].id, "acc-1");
    assert_eq!(accounts[0].kind, "Debit");
    assert_eq!(accounts[0].user_id, "u-1");
    assert_eq!(accounts[1].id, "acc-2");
}

#[test]
fn account_response_null_account_list_is_empty() {
    let raw = r#"{ "message": "ok", "result": { "account": null, "transactions": [], "cards": [] } }"#;
    let resp: AccountResponse = serde_json::from_str(raw).unwrap();
    assert!(resp.into_accounts().is_empty());
}

#[test]
fn account_response_missing_result_is_empty() {
    let resp: AccountResponse = serde_json::from_str(r#"{ "message": "ok" }"#).unwrap();
    assert!(resp.into_accounts().is_empty());
}

#[test]
fn account_serializes_with_wire_field_names() {
    let account = Account {
        id: "acc-1".into(),
        kind: "Debit".into(),
        user_id: "u-1".into(),
    };
    let value = serde_json::to_value(&account).unwrap();
    assert_eq!(value, serde_json::json!({ "id": "acc-1", "type": "Debit", "userId": "u-1" }));
}
