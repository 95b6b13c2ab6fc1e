use envelope::*;
use serde::Deserialize;
use serde_json::Value;
use std::path::Path;

const FIXTURES_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures");

#[derive(Debug, Deserialize, PartialEq)]
struct HealthData {
    uptime: f64,
    timestamp: i64,
}

fn load_fixture(name: &str) -> Value {
    let fixture_path = Path::new(FIXTURES_DIR).join(name);
    let fixture_content =
        std::fs::read_to_string(&fixture_path).expect("Should be able to read fixture");
    serde_json::from_str(&fixture_content).expect("Fixture should be valid JSON")
}

#[test]
fn given_health_fixture_when_validating_with_decoder_then_narrows_to_payload() {
    let value = load_fixture("health_ok.json");

    assert!(is_api_response(&value));

    let validated = narrow_with(&value, Decodes::<HealthData>::new())
        .validated()
        .expect("Health fixture should validate");

    assert_eq!(validated.is_ok(), Some(true));
    assert_eq!(validated.mssg(), Some("ok"));

    let response: ApiResponse<HealthData> = validated.decode().expect("Should decode");
    assert_eq!(
        response.data,
        Some(HealthData {
            uptime: 12.5,
            timestamp: 1_760_865_600_000,
        })
    );
}

#[test]
fn given_not_found_fixture_when_checking_shape_only_then_accepted() {
    let value = load_fixture("not_found.json");

    assert!(is_api_response(&value));

    let view = narrow(&value).view().expect("Shape should pass");
    assert_eq!(view.is_ok(), Some(false));
    assert_eq!(view.mssg(), Some("not found"));
    assert!(view.data().is_none());
}

#[test]
fn given_not_found_fixture_when_validator_supplied_then_rejected() {
    let value = load_fixture("not_found.json");

    assert!(!is_api_response_with(&value, |data: &Value| data.is_string()));
    assert_eq!(
        narrow_with(&value, |_: &Value| true),
        Narrowed::Invalid
    );
}

#[test]
fn given_null_data_fixture_when_validator_supplied_then_rejected() {
    let value = load_fixture("expired_null_data.json");

    assert!(is_api_response(&value));
    assert!(!is_api_response_with(&value, |_: &Value| true));

    let view = narrow(&value).view().expect("Shape should pass");
    assert_eq!(view.expired(), Some(true));
    assert!(view.data().is_none());
}

#[test]
fn given_fixture_missing_mssg_when_validating_then_rejected_regardless_of_payload() {
    let value = load_fixture("missing_mssg.json");

    assert!(!is_api_response(&value));
    assert!(!is_api_response_with(&value, Decodes::<HealthData>::new()));
}

#[test]
fn given_payload_rejected_by_validator_then_result_matches_wrong_shape() {
    let wrong_shape = load_fixture("missing_mssg.json");
    let wrong_payload = load_fixture("health_ok.json");

    let shape_result = narrow_with(&wrong_shape, |data: &Value| data.is_string());
    let payload_result = narrow_with(&wrong_payload, |data: &Value| data.is_string());

    assert_eq!(shape_result, payload_result);
    assert!(narrow(&wrong_payload).is_valid());
}
