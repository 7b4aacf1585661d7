use crate::error::SyncError;
use crate::models::SyncOptions;
use glob::{MatchOptions, Pattern};

/// Decides whether a relative path participates in a sync operation.
///
/// A path is selected when it matches an include or extra-include pattern
/// and no exclude pattern, except that a path matching an extra-include
/// pattern is selected even when an exclude pattern also matches.
#[derive(Debug, Clone)]
pub struct PathFilter {
    includes: Vec<Pattern>,
    excludes: Vec<Pattern>,
    extra_includes: Vec<Pattern>,
}

impl PathFilter {
    pub fn new(
        includes: &[String],
        excludes: &[String],
        extra_includes: &[String],
    ) -> Result<Self, SyncError> {
        Ok(Self {
            includes: compile(includes)?,
            excludes: compile(excludes)?,
            extra_includes: compile(extra_includes)?,
        })
    }

    pub fn for_options(options: &SyncOptions) -> Result<Self, SyncError> {
        Self::new(&options.includes, &options.excludes, &[])
    }

    pub fn is_selected(&self, path: &str) -> bool {
        let forced = matches_any(&self.extra_includes, path);
        if !forced && !matches_any(&self.includes, path) {
            return false;
        }
        forced || !matches_any(&self.excludes, path)
    }
}

fn compile(patterns: &[String]) -> Result<Vec<Pattern>, SyncError> {
    patterns
        .iter()
        .map(|raw| Pattern::new(raw).map_err(|e| SyncError::pattern(raw, e)))
        .collect()
}

fn matches_any(patterns: &[Pattern], path: &str) -> bool {
    // `*` stays within one path segment; only `**` spans segments.
    let options = MatchOptions {
        case_sensitive: true,
        require_literal_separator: true,
        require_literal_leading_dot: false,
    };
    patterns
        .iter()
        .any(|pattern| pattern.matches_with(path, options))
}
