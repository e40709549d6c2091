use super::*;
use crate::engine::StubEngine;
use crate::error::{BindingErrorCodes, ErrorCode};

fn stub_api() -> DrumKitApi {
    let engine = StubEngine::new("/data", ["Rock", "Jazz"]);
    DrumKitApi::from_facade(DrumKit::with_engine(Box::new(engine)))
}

#[test]
fn test_get_version() {
    assert_eq!(get_version(), "0.1.0");
    assert_eq!(stub_api().get_version(), get_version());
}

#[test]
fn test_typed_methods() {
    let api = stub_api();

    api.start().unwrap();
    assert!(api.is_started().unwrap());
    api.stop().unwrap();
    assert!(!api.is_started().unwrap());

    api.enable_metronome(true).unwrap();
    api.change_click_volume(55.5).unwrap();
    assert_eq!(api.get_data_location().unwrap(), "/data");
    assert_eq!(api.get_kits_names().unwrap(), vec!["Rock", "Jazz"]);
}

#[test]
fn test_invoke_returns_json() {
    let api = stub_api();

    assert_eq!(api.invoke("start".into(), "[]".into()).unwrap(), "null");
    assert_eq!(api.invoke("isStarted".into(), "[]".into()).unwrap(), "true");
    assert_eq!(
        api.invoke("getKitsNames".into(), "[]".into()).unwrap(),
        r#"["Rock","Jazz"]"#
    );
}

#[test]
fn test_invoke_rejects_non_array_arguments() {
    let api = stub_api();

    let err = api
        .invoke("enableMetronome".into(), "true".into())
        .unwrap_err();
    assert_eq!(err.code(), BindingErrorCodes::ARGUMENT_TYPE);

    let err = api
        .invoke("enableMetronome".into(), "not json".into())
        .unwrap_err();
    assert_eq!(err.code(), BindingErrorCodes::ARGUMENT_TYPE);
}

#[test]
fn test_construct_from_json_arguments() {
    let err = DrumKitApi::construct("[]".into()).err().unwrap();
    assert_eq!(err.code(), BindingErrorCodes::ARGUMENT_COUNT);

    let err = DrumKitApi::construct("[7]".into()).err().unwrap();
    assert_eq!(err.code(), BindingErrorCodes::ARGUMENT_TYPE);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().to_str().unwrap().to_string();
    let api = DrumKitApi::construct(serde_json::json!([path]).to_string()).unwrap();
    assert_eq!(api.get_data_location().unwrap(), path);
}

#[test]
fn test_new_rejects_missing_data_location() {
    let err = DrumKitApi::new("/no/such/drumkit/data".into()).err().unwrap();
    assert_eq!(err.code(), BindingErrorCodes::ENGINE);
}

#[test]
fn test_error_code_accessors() {
    let _ = get_binding_error_codes();
    let _ = get_engine_error_codes();
    assert_eq!(BindingErrorCodes::argument_count(), 1001);
    assert_eq!(EngineErrorCodes::data_location_not_found(), 2001);
}
