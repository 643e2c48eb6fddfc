//! Layer registry: canonical FSD layer roles, their configurable display
//! names, and the import rule table derived from them.
//!
//! Renaming is a pure value transform. [`ImportRuleTable::default`] is built
//! from the canonical role table on every call, so no configuration can
//! alter what another run sees as the defaults.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

/// One of the six canonical Feature-Sliced Design layers.
///
/// Variants are declared from the highest layer to the lowest, so the derived
/// ordering follows the dependency direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayerRole {
    /// Application wiring: providers, routing, global styles.
    App,
    /// Full pages composed from widgets and features.
    Pages,
    /// Self-contained UI blocks.
    Widgets,
    /// User-facing interactions that bring business value.
    Features,
    /// Business entities.
    Entities,
    /// Reusable infrastructure with no business logic.
    Shared,
}

impl LayerRole {
    /// All roles, from the highest layer to the lowest.
    pub const ALL: [Self; 6] = [
        Self::App,
        Self::Pages,
        Self::Widgets,
        Self::Features,
        Self::Entities,
        Self::Shared,
    ];

    /// Returns the canonical name of this role.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::App => "app",
            Self::Pages => "pages",
            Self::Widgets => "widgets",
            Self::Features => "features",
            Self::Entities => "entities",
            Self::Shared => "shared",
        }
    }

    /// Flat layers (`app`, `shared`) have no meaningful slices.
    #[must_use]
    pub fn is_flat(self) -> bool {
        matches!(self, Self::App | Self::Shared)
    }

    /// Roles this role may import from under the canonical rule table.
    #[must_use]
    pub fn allowed_imports(self) -> &'static [Self] {
        match self {
            Self::App => &Self::ALL,
            Self::Pages => &[Self::Widgets, Self::Features, Self::Entities, Self::Shared],
            Self::Widgets => &[Self::Features, Self::Entities, Self::Shared],
            Self::Features => &[Self::Entities, Self::Shared],
            Self::Entities => &[Self::Entities, Self::Shared],
            Self::Shared => &[Self::Shared],
        }
    }
}

impl fmt::Display for LayerRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string does not name a canonical layer role.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown layer role '{0}' (expected one of: app, pages, widgets, features, entities, shared)")]
pub struct UnknownLayerRole(pub String);

impl FromStr for LayerRole {
    type Err = UnknownLayerRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| UnknownLayerRole(s.to_string()))
    }
}

/// User renaming of canonical roles. Roles not mentioned keep their canonical name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayerConfig {
    renames: BTreeMap<LayerRole, String>,
}

impl LayerConfig {
    /// Creates an empty configuration (canonical names everywhere).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a configuration from a raw `role -> name` map, as found in TOML.
    ///
    /// # Errors
    ///
    /// Returns an error if a key is not a canonical role name.
    pub fn from_map<'a, I>(raw: I) -> Result<Self, UnknownLayerRole>
    where
        I: IntoIterator<Item = (&'a String, &'a String)>,
    {
        let mut config = Self::new();
        for (role, name) in raw {
            config = config.rename(role.parse()?, name.clone());
        }
        Ok(config)
    }

    /// Renames a role.
    #[must_use]
    pub fn rename(mut self, role: LayerRole, name: impl Into<String>) -> Self {
        self.renames.insert(role, name.into());
        self
    }

    /// Display name for a role under this configuration.
    #[must_use]
    pub fn display_name(&self, role: LayerRole) -> &str {
        self.renames
            .get(&role)
            .map_or_else(|| role.as_str(), String::as_str)
    }

    /// Returns true if no role is renamed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.renames.is_empty()
    }

    /// Returns the first display name shared by two roles, if any.
    #[must_use]
    pub fn duplicate_name(&self) -> Option<&str> {
        let mut seen = BTreeSet::new();
        LayerRole::ALL
            .into_iter()
            .map(|role| self.display_name(role))
            .find(|name| !seen.insert(*name))
    }
}

/// Resolves display names to roles and back for one configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayerRegistry {
    roles: BTreeMap<LayerRole, String>,
    names: BTreeMap<String, LayerRole>,
}

impl Default for LayerRegistry {
    fn default() -> Self {
        Self::new(&LayerConfig::default())
    }
}

impl LayerRegistry {
    /// Builds the registry for a configuration.
    #[must_use]
    pub fn new(config: &LayerConfig) -> Self {
        let roles: BTreeMap<LayerRole, String> = LayerRole::ALL
            .into_iter()
            .map(|role| (role, config.display_name(role).to_string()))
            .collect();
        let names = roles
            .iter()
            .map(|(role, name)| (name.clone(), *role))
            .collect();
        Self { roles, names }
    }

    /// Canonical role → display name. Keys are role identities regardless of renaming.
    #[must_use]
    pub fn roles(&self) -> &BTreeMap<LayerRole, String> {
        &self.roles
    }

    /// Display name of a role.
    #[must_use]
    pub fn display_name(&self, role: LayerRole) -> &str {
        self.roles.get(&role).map_or_else(|| role.as_str(), String::as_str)
    }

    /// Which role does this display name belong to?
    #[must_use]
    pub fn role_of(&self, name: &str) -> Option<LayerRole> {
        self.names.get(name).copied()
    }

    /// Is this string a known layer at all?
    #[must_use]
    pub fn is_known(&self, name: &str) -> bool {
        self.names.contains_key(name)
    }

    /// Returns true if `name` is the display name of `role`.
    #[must_use]
    pub fn is_role(&self, name: &str, role: LayerRole) -> bool {
        self.role_of(name) == Some(role)
    }

    /// All known display names.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.keys().map(String::as_str)
    }
}

/// Which layers each layer may import from, keyed by display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportRuleTable {
    rules: BTreeMap<String, BTreeSet<String>>,
}

impl Default for ImportRuleTable {
    fn default() -> Self {
        Self::new(&LayerConfig::default())
    }
}

impl ImportRuleTable {
    /// Derives the table by substituting display names into the canonical table.
    #[must_use]
    pub fn new(config: &LayerConfig) -> Self {
        let rules = LayerRole::ALL
            .into_iter()
            .map(|role| {
                let allowed = role
                    .allowed_imports()
                    .iter()
                    .map(|target| config.display_name(*target).to_string())
                    .collect();
                (config.display_name(role).to_string(), allowed)
            })
            .collect();
        Self { rules }
    }

    /// Layers `file_layer` may import from, if it is a known layer.
    #[must_use]
    pub fn allowed(&self, file_layer: &str) -> Option<&BTreeSet<String>> {
        self.rules.get(file_layer)
    }

    /// Returns true if a file in `file_layer` may import from `import_layer`.
    #[must_use]
    pub fn allows(&self, file_layer: &str, import_layer: &str) -> bool {
        self.allowed(file_layer)
            .is_some_and(|allowed| allowed.contains(import_layer))
    }

    /// Iterates over `(layer, allowed layers)` rows.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeSet<String>)> {
        self.rules.iter().map(|(k, v)| (k.as_str(), v))
    }
}
