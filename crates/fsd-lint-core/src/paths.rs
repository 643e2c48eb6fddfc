//! Path resolution: normalizes file paths and import specifiers into
//! layer/slice-addressable form.
//!
//! Every function here is total. Inputs that carry no architectural identity
//! (no `src` anchor, bare package names, empty strings) produce empty results
//! instead of errors, and callers treat that as "not applicable".

/// Directory name that anchors layer/slice extraction.
pub const SOURCE_ROOT: &str = "src";

/// Marker folder for explicit cross-entity imports (`entities/<target>/@x/<consumer>`).
pub const CROSS_ENTITIES_FOLDER: &str = "@x";

/// Third segment that opens the testing public API (`<layer>/<slice>/testing`).
pub const TESTING_SEGMENT: &str = "testing";

/// Converts a platform path to forward-slash form.
///
/// With `full == false` only the part after the first segment named exactly
/// [`SOURCE_ROOT`] is returned; a path without such a segment yields `None`.
///
/// ```
/// use fsd_lint_core::paths::normalize_file_path;
///
/// let raw = r"C:\project\src\entities\user\ui\UserForm.tsx";
/// assert_eq!(
///     normalize_file_path(raw, false).as_deref(),
///     Some("entities/user/ui/UserForm.tsx")
/// );
/// assert_eq!(normalize_file_path(r"C:\project\ui\Form", false), None);
/// ```
#[must_use]
pub fn normalize_file_path(raw: &str, full: bool) -> Option<String> {
    if raw.is_empty() {
        return None;
    }

    let normalized = raw.replace('\\', "/");
    if full {
        return Some(normalized);
    }

    let mut segments = normalized.split('/');
    segments.by_ref().find(|segment| *segment == SOURCE_ROOT)?;
    Some(segments.collect::<Vec<_>>().join("/"))
}

/// Removes a configured alias prefix (`<alias>/`) from the front of a specifier.
///
/// An empty alias, or a specifier that does not start with it, is returned unchanged.
#[must_use]
pub fn strip_alias<'a>(specifier: &'a str, alias: &str) -> &'a str {
    let alias = alias.trim_end_matches('/');
    if alias.is_empty() {
        return specifier;
    }
    specifier
        .strip_prefix(alias)
        .and_then(|rest| rest.strip_prefix('/'))
        .unwrap_or(specifier)
}

/// Returns true iff the specifier is `.` or starts with `./` or `../`.
#[must_use]
pub fn is_relative(specifier: &str) -> bool {
    specifier == "." || specifier.starts_with("./") || specifier.starts_with("../")
}

/// Layer and slice of a module path. Either may be absent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Identity<'a> {
    /// First segment.
    pub layer: Option<&'a str>,
    /// Second segment.
    pub slice: Option<&'a str>,
}

/// A forward-slash path split into its non-empty segments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModulePath<'a> {
    segments: Vec<&'a str>,
}

impl<'a> ModulePath<'a> {
    /// Splits `path` on `/`, dropping empty segments.
    #[must_use]
    pub fn parse(path: &'a str) -> Self {
        Self {
            segments: path.split('/').filter(|s| !s.is_empty()).collect(),
        }
    }

    /// Parses an optional path; `None` yields an empty path.
    #[must_use]
    pub fn parse_opt(path: Option<&'a str>) -> Self {
        path.map(Self::parse).unwrap_or_default()
    }

    /// All segments.
    #[must_use]
    pub fn segments(&self) -> &[&'a str] {
        &self.segments
    }

    /// Number of segments.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    /// Segment at `index`, if present.
    #[must_use]
    pub fn segment(&self, index: usize) -> Option<&'a str> {
        self.segments.get(index).copied()
    }

    /// First segment.
    #[must_use]
    pub fn layer(&self) -> Option<&'a str> {
        self.segment(0)
    }

    /// Second segment.
    #[must_use]
    pub fn slice(&self) -> Option<&'a str> {
        self.segment(1)
    }

    /// The (layer, slice) pair.
    #[must_use]
    pub fn identity(&self) -> Identity<'a> {
        Identity {
            layer: self.layer(),
            slice: self.slice(),
        }
    }

    /// Returns true if this path has the shape `<layer>/<target>/@x/<consumer>`
    /// with `consumer == consuming_slice`.
    #[must_use]
    pub fn is_cross_entity_import_for(&self, consuming_slice: Option<&str>) -> bool {
        self.depth() >= 4
            && self.segment(2) == Some(CROSS_ENTITIES_FOLDER)
            && consuming_slice.is_some()
            && self.segment(3) == consuming_slice
    }
}
