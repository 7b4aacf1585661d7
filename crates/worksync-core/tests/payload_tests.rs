use worksync_core::{parse_repositories_payload, parse_settings_payload, SyncError};

#[test]
fn settings_payload_parses_wire_field_names() {
    let state = parse_settings_payload(
        r#"{"include_path":["f/**"],"include_type":["script","flow"],"exclude_path":["f/tmp/**"]}"#,
    )
    .expect("parse");

    assert_eq!(state.include_path, vec![String::from("f/**")]);
    assert_eq!(
        state.include_type,
        vec![String::from("script"), String::from("flow")]
    );
    assert_eq!(state.exclude_path, Some(vec![String::from("f/tmp/**")]));
    assert_eq!(state.extra_include_path, None);
}

#[test]
fn empty_object_parses_to_an_empty_state() {
    let state = parse_settings_payload("{}").expect("parse");
    assert!(state.include_path.is_empty());
    assert!(state.include_type.is_empty());
}

#[test]
fn malformed_settings_payload_is_a_typed_error() {
    let error = parse_settings_payload(r#"{"a":"#).expect_err("must fail");

    assert!(matches!(error, SyncError::SettingsPayload(_)));
    assert!(error
        .to_string()
        .contains("Invalid JSON in settings parameter"));
}

#[test]
fn repositories_payload_parses_each_entry() {
    let repositories = parse_repositories_payload(
        r#"{
            "repositories": [
                {
                    "git_repo_resource_path": "$res:u/team/repo",
                    "script_path": "f/scripts",
                    "group_by_folder": true,
                    "use_individual_branch": false,
                    "settings": {
                        "include_path": ["f/**"],
                        "include_type": ["script"]
                    }
                }
            ]
        }"#,
    )
    .expect("parse");

    assert_eq!(repositories.len(), 1);
    assert_eq!(repositories[0].normalized_repo_path(), "u/team/repo");
    assert!(repositories[0].group_by_folder);
}

#[test]
fn missing_repositories_list_is_empty() {
    let repositories = parse_repositories_payload("{}").expect("parse");
    assert!(repositories.is_empty());
}
