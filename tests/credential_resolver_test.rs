use voxrelay::infrastructure::speech::{ACCESS_TOKEN_ENV, resolve_credentials};

#[test]
fn given_missing_file_when_resolving_then_degrades_with_not_found_error() {
    let state = resolve_credentials(std::path::Path::new("/nonexistent/google-credentials.json"));

    assert!(state.using_mock());
    assert!(state.recognizer().is_none());
    let error = state.init_error().unwrap();
    assert!(error.contains("credentials file not found at"));
    assert!(error.contains("/nonexistent/google-credentials.json"));
}

#[test]
fn given_unparseable_file_when_resolving_then_degrades_with_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("google-credentials.json");
    std::fs::write(&path, "{ not json at all").unwrap();

    let state = resolve_credentials(&path);

    assert!(state.using_mock());
    assert!(
        state
            .init_error()
            .unwrap()
            .contains("Error initializing with credentials file")
    );
}

#[test]
fn given_document_without_project_id_when_resolving_then_degrades() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("google-credentials.json");
    std::fs::write(&path, r#"{"type": "service_account"}"#).unwrap();

    let state = resolve_credentials(&path);

    assert!(state.using_mock());
    assert!(state.init_error().is_some());
}

#[test]
fn given_document_with_api_key_when_resolving_then_client_is_ready() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("google-credentials.json");
    std::fs::write(
        &path,
        r#"{"type": "service_account", "project_id": "demo-project", "api_key": "test-key"}"#,
    )
    .unwrap();

    let state = resolve_credentials(&path);

    assert!(!state.using_mock());
    assert!(state.recognizer().is_some());
    assert!(state.init_error().is_none());
    assert_eq!(state.credentials_path(), path);
}

#[test]
fn given_document_without_auth_material_when_resolving_then_degrades() {
    std::env::remove_var(ACCESS_TOKEN_ENV);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("google-credentials.json");
    std::fs::write(
        &path,
        r#"{"type": "service_account", "project_id": "demo-project"}"#,
    )
    .unwrap();

    let state = resolve_credentials(&path);

    assert!(state.using_mock());
    assert!(
        state
            .init_error()
            .unwrap()
            .contains("no usable auth material")
    );
}
