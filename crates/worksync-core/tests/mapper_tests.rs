use std::collections::BTreeSet;
use worksync_core::{to_inclusion_state, to_sync_options, InclusionState, SyncOptions};

fn state(paths: &[&str], kinds: &[&str]) -> InclusionState {
    InclusionState {
        include_path: paths.iter().map(|s| String::from(*s)).collect(),
        include_type: kinds.iter().map(|s| String::from(*s)).collect(),
        exclude_path: None,
        extra_include_path: None,
    }
}

fn kind_set(kinds: &[String]) -> BTreeSet<String> {
    kinds.iter().cloned().collect()
}

#[test]
fn empty_state_substitutes_defaults() {
    let options = to_sync_options(&state(&[], &[]));

    assert_eq!(options.includes, vec![String::from("f/**")]);
    assert_eq!(options.excludes, Vec::<String>::new());
    assert_eq!(options.codebases, Vec::<String>::new());
    assert_eq!(options.default_ts, "bun");
}

#[test]
fn core_kind_selection_inverts_to_skip_flags() {
    let options = to_sync_options(&state(&["f/**"], &["script", "flow", "app", "folder"]));

    assert!(!options.skip_scripts);
    assert!(!options.skip_flows);
    assert!(!options.skip_apps);
    assert!(!options.skip_folders);
    assert!(options.skip_variables);
    assert!(options.skip_resources);
    assert!(options.skip_resource_types);
    assert!(options.skip_secrets);
    assert!(!options.include_schedules);
    assert!(!options.include_triggers);
    assert!(!options.include_users);
    assert!(!options.include_groups);
    assert!(!options.include_settings);
    assert!(!options.include_key);
}

#[test]
fn privileged_kind_requires_explicit_selection() {
    let options = to_sync_options(&state(&["f/**"], &["script", "schedule"]));

    assert!(options.include_schedules);
    assert!(!options.include_triggers);
    assert!(!options.include_users);
    assert!(!options.include_groups);
    assert!(!options.include_settings);
    assert!(!options.include_key);
}

#[test]
fn unknown_tags_are_ignored() {
    let with_bogus = to_sync_options(&state(&["f/**"], &["script", "bogus_tag"]));
    let without = to_sync_options(&state(&["f/**"], &["script"]));

    assert_eq!(with_bogus, without);
}

#[test]
fn exclude_paths_carry_over() {
    let mut input = state(&["f/**"], &["script"]);
    input.exclude_path = Some(vec![String::from("f/internal/**")]);

    let options = to_sync_options(&input);
    assert_eq!(options.excludes, vec![String::from("f/internal/**")]);
}

#[test]
fn kind_selection_round_trips_through_options() {
    let input = state(
        &["f/**", "u/shared/**"],
        &["script", "flow", "secret", "schedule", "key"],
    );

    let restored = to_inclusion_state(&to_sync_options(&input));

    assert_eq!(
        kind_set(&restored.include_type),
        kind_set(&input.include_type)
    );
    assert_eq!(restored.include_path, input.include_path);
    assert_eq!(restored.exclude_path, None);
    assert_eq!(restored.extra_include_path, None);
}

#[test]
fn options_round_trip_through_inclusion_state() {
    let options = to_sync_options(&state(&["f/**"], &["script", "app", "variable", "trigger"]));

    let restored = to_sync_options(&to_inclusion_state(&options));

    assert_eq!(restored, options);
}

#[test]
fn all_kinds_selected_round_trips_to_all_tags() {
    let mut options = SyncOptions::default();
    for kind in worksync_core::ResourceKind::ALL {
        options.set_kind_included(kind, true);
    }

    let restored = to_inclusion_state(&options);
    assert_eq!(restored.include_type.len(), 14);
}
