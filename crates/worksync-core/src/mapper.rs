use crate::models::{InclusionState, ResourceKind, SyncOptions, DEFAULT_INCLUDE_PATTERN};
use std::collections::BTreeSet;

/// Convert the UI-facing inclusion set into the canonical settings record.
///
/// Total in both directions with `to_inclusion_state`: unrecognized tags
/// are dropped, an empty path list falls back to the default include
/// pattern, and the runtime/codebase fields take their fixed defaults.
pub fn to_sync_options(state: &InclusionState) -> SyncOptions {
    let mut options = SyncOptions::default();

    if !state.include_path.is_empty() {
        options.includes = state.include_path.clone();
    }
    options.excludes = state.exclude_path.clone().unwrap_or_default();

    let selected: BTreeSet<ResourceKind> = state
        .include_type
        .iter()
        .filter_map(|tag| ResourceKind::try_from(tag.as_str()).ok())
        .collect();
    for kind in ResourceKind::ALL {
        options.set_kind_included(kind, selected.contains(&kind));
    }

    options
}

/// Rebuild the inclusion set from a canonical record. Exclude and
/// extra-include paths are not retained on `SyncOptions` and stay unset.
pub fn to_inclusion_state(options: &SyncOptions) -> InclusionState {
    InclusionState {
        include_path: options.includes.clone(),
        include_type: ResourceKind::ALL
            .iter()
            .filter(|kind| options.includes_kind(**kind))
            .map(|kind| kind.as_str().to_owned())
            .collect(),
        exclude_path: None,
        extra_include_path: None,
    }
}

pub fn default_includes() -> Vec<String> {
    vec![String::from(DEFAULT_INCLUDE_PATTERN)]
}
