//! Relative path simulation without filesystem access.
//!
//! A relative specifier is replayed against the directory of the importing
//! file as push/pop operations on a [`SegmentStack`]. Imports made from the
//! flat layers (`shared`, `app`) get one extra adjustment: a destination that
//! no longer names a layer is assumed to stay inside the origin layer.

use crate::layer::LayerRegistry;
use crate::paths::ModulePath;

/// Ordered stack of path segments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SegmentStack {
    segments: Vec<String>,
}

impl SegmentStack {
    /// Creates an empty stack.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the stack with the directory part of a normalized file path
    /// (every segment except the last).
    #[must_use]
    pub fn directory_of(file_path: &str) -> Self {
        let path = ModulePath::parse(file_path);
        let segments = path.segments();
        let dir = &segments[..segments.len().saturating_sub(1)];
        Self {
            segments: dir.iter().map(|s| (*s).to_string()).collect(),
        }
    }

    /// Applies one specifier segment: `..` pops, `.` and empty segments are
    /// ignored, anything else is pushed. Popping an empty stack is a no-op.
    pub fn apply(&mut self, segment: &str) {
        match segment {
            ".." => {
                self.segments.pop();
            }
            "." | "" => {}
            other => self.segments.push(other.to_string()),
        }
    }

    /// Applies every `/`-separated segment of a specifier in order.
    pub fn replay(&mut self, specifier: &str) {
        for segment in specifier.split('/') {
            self.apply(segment);
        }
    }

    /// Inserts a segment at the bottom of the stack.
    pub fn prepend(&mut self, segment: impl Into<String>) {
        self.segments.insert(0, segment.into());
    }

    /// Pushes a segment on top of the stack.
    pub fn push(&mut self, segment: impl Into<String>) {
        self.segments.push(segment.into());
    }

    /// Returns true if the stack holds no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Bottom segment (the would-be layer).
    #[must_use]
    pub fn first(&self) -> Option<&str> {
        self.segments.first().map(String::as_str)
    }

    /// Joins the stack into a forward-slash path.
    #[must_use]
    pub fn to_path(&self) -> String {
        self.segments.join("/")
    }
}

/// Computes the logical destination of `specifier` imported from `file_path`.
///
/// `file_path` is the `src`-relative path of the importing file. The result is
/// a `src`-relative path suitable for [`ModulePath::parse`].
#[must_use]
pub fn resolve_relative(file_path: &str, specifier: &str, registry: &LayerRegistry) -> String {
    let mut stack = SegmentStack::directory_of(file_path);
    stack.replay(specifier);

    let origin = ModulePath::parse(file_path).layer();
    let flat_origin = origin.filter(|layer| registry.role_of(layer).is_some_and(|r| r.is_flat()));

    if let Some(layer) = flat_origin {
        if stack.is_empty() {
            stack.push(layer);
        } else if stack.first().is_some_and(|first| !registry.is_known(first)) {
            stack.prepend(layer);
        }
    }

    stack.to_path()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layer::{LayerConfig, LayerRole};

    fn resolve(file: &str, spec: &str) -> String {
        resolve_relative(file, spec, &LayerRegistry::default())
    }

    #[test]
    fn pop_on_empty_stack_is_noop() {
        let mut stack = SegmentStack::new();
        stack.apply("..");
        stack.apply("..");
        assert!(stack.is_empty());
        stack.apply("theme");
        assert_eq!(stack.to_path(), "theme");
    }

    #[test]
    fn dot_and_empty_segments_are_ignored() {
        let mut stack = SegmentStack::directory_of("features/add/model/Type");
        stack.replay(".//./Type2");
        assert_eq!(stack.to_path(), "features/add/model/Type2");
    }

    #[test]
    fn directory_of_drops_file_name() {
        assert_eq!(
            SegmentStack::directory_of("entities/user/ui/Form").to_path(),
            "entities/user/ui"
        );
        assert!(SegmentStack::directory_of("").is_empty());
    }

    #[test]
    fn resolves_within_same_slice() {
        assert_eq!(
            resolve("entities/user/ui/Form", "../model/Type"),
            "entities/user/model/Type"
        );
    }

    #[test]
    fn resolves_into_sibling_slice() {
        assert_eq!(
            resolve("entities/user/ui/Form", "../../article/model/Type"),
            "entities/article/model/Type"
        );
    }

    #[test]
    fn reseeds_empty_stack_for_flat_layer() {
        assert_eq!(resolve("shared/ui/Button", "../.."), "shared");
        assert_eq!(resolve("app/providers/Store", "../../.."), "app");
    }

    #[test]
    fn prepends_flat_layer_to_unknown_head() {
        assert_eq!(
            resolve("shared/ui/Button", "../../config/theme"),
            "shared/config/theme"
        );
        assert_eq!(
            resolve("shared/config", "../18n/config/locales"),
            "shared/18n/config/locales"
        );
    }

    #[test]
    fn keeps_known_layer_head_for_flat_layer() {
        assert_eq!(
            resolve("shared/ui/Button", "../../entities/user/model/User"),
            "entities/user/model/User"
        );
    }

    #[test]
    fn structured_layers_are_not_adjusted() {
        assert_eq!(resolve("entities/user/ui/Form", "../../../theme"), "theme");
        assert_eq!(resolve("entities/user/ui/Form", "../../../../.."), "");
    }

    #[test]
    fn flat_adjustment_follows_renamed_layers() {
        let registry =
            LayerRegistry::new(&LayerConfig::new().rename(LayerRole::Shared, "shared-layer"));
        assert_eq!(
            resolve_relative("shared-layer/ui/Button", "../../config/theme", &registry),
            "shared-layer/config/theme"
        );
        // "shared" is no longer a layer name, so it is treated as a folder.
        assert_eq!(
            resolve_relative("shared-layer/ui/Button", "../../shared/x", &registry),
            "shared-layer/shared/x"
        );
    }
}
