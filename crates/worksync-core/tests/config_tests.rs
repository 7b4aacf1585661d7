use std::fs;
use tempfile::TempDir;
use worksync_core::{
    find_config_file, read_config_file, write_config_file, LocalConfig, SyncError,
    SyncOptionsPatch, CONFIG_FILE_NAME,
};

#[test]
fn missing_file_is_an_absent_layer() {
    let temp = TempDir::new().expect("tempdir");

    let config = read_config_file(&temp.path().join(CONFIG_FILE_NAME)).expect("read");
    assert_eq!(config, LocalConfig::default());
}

#[test]
fn malformed_content_is_a_parse_error() {
    let temp = TempDir::new().expect("tempdir");
    let path = temp.path().join(CONFIG_FILE_NAME);
    fs::write(&path, "includes: [unclosed\n").expect("write");

    let error = read_config_file(&path).expect_err("must fail");
    assert!(matches!(error, SyncError::ConfigParse { .. }));
}

#[test]
fn top_level_fields_and_overrides_parse() {
    let temp = TempDir::new().expect("tempdir");
    let path = temp.path().join(CONFIG_FILE_NAME);
    fs::write(
        &path,
        concat!(
            "defaultTs: bun\n",
            "includes:\n",
            "  - f/**\n",
            "excludes: []\n",
            "skipVariables: true\n",
            "overrides:\n",
            "  \"https://remote.example/:team:u/team/repo\":\n",
            "    includes:\n",
            "      - repo/**\n",
            "    includeSchedules: true\n",
        ),
    )
    .expect("write");

    let config = read_config_file(&path).expect("read");
    assert_eq!(config.base.default_ts.as_deref(), Some("bun"));
    assert_eq!(config.base.skip_variables, Some(true));
    assert_eq!(config.base.excludes, Some(Vec::new()));

    let block = config
        .overrides
        .get("https://remote.example/:team:u/team/repo")
        .expect("override block");
    assert_eq!(block.includes, Some(vec![String::from("repo/**")]));
    assert_eq!(block.include_schedules, Some(true));
}

#[test]
fn empty_overrides_are_written_explicitly() {
    let temp = TempDir::new().expect("tempdir");
    let path = temp.path().join(CONFIG_FILE_NAME);

    let config = LocalConfig {
        base: SyncOptionsPatch {
            default_ts: Some(String::from("bun")),
            includes: Some(vec![String::from("f/**")]),
            ..SyncOptionsPatch::default()
        },
        overrides: Default::default(),
    };
    write_config_file(&path, &config).expect("write");

    let text = fs::read_to_string(&path).expect("read back");
    assert!(text.contains("overrides: {}"));

    let reread = read_config_file(&path).expect("reread");
    assert_eq!(reread, config);
}

#[test]
fn config_file_is_found_in_a_parent_directory() {
    let temp = TempDir::new().expect("tempdir");
    let nested = temp.path().join("a").join("b");
    fs::create_dir_all(&nested).expect("mkdirs");
    fs::write(temp.path().join(CONFIG_FILE_NAME), "overrides: {}\n").expect("write");

    let found = find_config_file(&nested).expect("found");
    assert_eq!(found, temp.path().join(CONFIG_FILE_NAME));
}
