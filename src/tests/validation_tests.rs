use super::input;
use crate::models::validation::{ensure_valid, validate_team_input};
use crate::models::ServiceError;

#[test]
fn well_formed_payload_passes() {
    assert!(validate_team_input(&input("QA Squad", "QAS001")).is_empty());
    assert!(ensure_valid(&input("Back-end_Team 2", "BE2")).is_ok());
}

#[test]
fn every_bad_field_is_reported() {
    let mut payload = input("Q", "qas001");
    payload.description = "too short".to_string();
    payload.email = "not-an-email".to_string();
    payload.entity = String::new();
    payload.manager = "R2-D2".to_string();

    let fields: Vec<String> = validate_team_input(&payload).into_iter().map(|e| e.field).collect();
    assert_eq!(fields, vec!["name", "description", "code", "email", "entity", "manager"]);

    match ensure_valid(&payload) {
        Err(ServiceError::BadRequest(summary)) => {
            assert!(summary.contains("entity: Entity is required"));
            assert!(summary.contains("code: Team code must be uppercase letters and numbers only"));
        }
        other => panic!("expected BadRequest, got {:?}", other),
    }
}

#[test]
fn length_limits_are_inclusive() {
    let mut payload = input("QA Squad", "ABCDEFGHIJ");
    payload.description = "x".repeat(500);
    assert!(validate_team_input(&payload).is_empty());

    payload.code = "ABCDEFGHIJK".to_string();
    payload.description = "x".repeat(501);
    let fields: Vec<String> = validate_team_input(&payload).into_iter().map(|e| e.field).collect();
    assert_eq!(fields, vec!["description", "code"]);
}
