use worksync_core::PathFilter;

fn patterns(raw: &[&str]) -> Vec<String> {
    raw.iter().map(|s| String::from(*s)).collect()
}

fn filter(includes: &[&str], excludes: &[&str], extra: &[&str]) -> PathFilter {
    PathFilter::new(&patterns(includes), &patterns(excludes), &patterns(extra))
        .expect("valid patterns")
}

#[test]
fn recursive_wildcard_spans_directories() {
    let filter = filter(&["f/**"], &[], &[]);

    assert!(filter.is_selected("f/app/main.script.yaml"));
    assert!(filter.is_selected("f/deep/nested/flow.yaml"));
    assert!(!filter.is_selected("g/app/main.script.yaml"));
}

#[test]
fn single_star_stays_within_one_segment() {
    let filter = filter(&["f/*.yaml"], &[], &[]);

    assert!(filter.is_selected("f/app.yaml"));
    assert!(!filter.is_selected("f/sub/app.yaml"));
}

#[test]
fn excludes_remove_matched_paths() {
    let filter = filter(&["f/**"], &["f/internal/**"], &[]);

    assert!(filter.is_selected("f/public/app.yaml"));
    assert!(!filter.is_selected("f/internal/app.yaml"));
}

#[test]
fn extra_includes_override_exclusion() {
    let filter = filter(&["f/**"], &["f/internal/**"], &["f/internal/keep.yaml"]);

    assert!(!filter.is_selected("f/internal/other.yaml"));
    assert!(filter.is_selected("f/internal/keep.yaml"));
}

#[test]
fn extra_includes_select_outside_the_include_set() {
    let filter = filter(&["f/**"], &[], &["g/shared/**"]);

    assert!(filter.is_selected("g/shared/util.yaml"));
    assert!(!filter.is_selected("g/other/util.yaml"));
}

#[test]
fn unmatched_paths_are_not_selected() {
    let filter = filter(&["f/**"], &[], &[]);

    assert!(!filter.is_selected("README.md"));
}

#[test]
fn invalid_pattern_is_a_typed_error() {
    let error = PathFilter::new(&patterns(&["f/[**"]), &[], &[]).expect_err("must fail");
    assert!(error.to_string().contains("f/[**"));
}
