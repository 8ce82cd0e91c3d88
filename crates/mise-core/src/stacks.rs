//! Stack registry and stack-map operations.
//!
//! A stack is an optional capability extension of the recipe schema (timing,
//! storage notes, scaling, ...). Recipes track enabled stacks in a sparse
//! `stacks` map of key → version. Only the registry keys below are canonical.
//! Older documents wrote versioned keys (`prep@1`); those are migrated once
//! to their unversioned form or dropped.
//!
//! Every operation here is copy-on-write: inputs are never mutated.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::errors::{MiseError, MiseResult};

/// Key → version map stored on a recipe.
pub type StacksMap = BTreeMap<String, u32>;

/// The only legacy version that migrates to an unversioned key.
const MIGRATABLE_VERSION: &str = "1";

/// Recognized stack keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StackKey {
    Prep,
    Equipment,
    Timed,
    Storage,
    Scaling,
    Structured,
    Referenced,
    Illustrated,
}

/// Registry keys in declaration order.
pub const STACK_KEYS: [StackKey; 8] = [
    StackKey::Prep,
    StackKey::Equipment,
    StackKey::Timed,
    StackKey::Storage,
    StackKey::Scaling,
    StackKey::Structured,
    StackKey::Referenced,
    StackKey::Illustrated,
];

impl StackKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Prep => "prep",
            Self::Equipment => "equipment",
            Self::Timed => "timed",
            Self::Storage => "storage",
            Self::Scaling => "scaling",
            Self::Structured => "structured",
            Self::Referenced => "referenced",
            Self::Illustrated => "illustrated",
        }
    }

    /// Parse an unversioned registry key. Versioned forms (`prep@1`) are not
    /// accepted here; see [`migrate_versioned_keys`].
    pub fn parse(s: &str) -> Option<Self> {
        STACK_KEYS.iter().copied().find(|k| k.as_str() == s)
    }

    pub fn all() -> &'static [StackKey] {
        &STACK_KEYS
    }
}

impl AsRef<str> for StackKey {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for StackKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// True iff `key` is present. Any stored version counts, including `0`.
pub fn is_enabled(stacks: &StacksMap, key: impl AsRef<str>) -> bool {
    stacks.contains_key(key.as_ref())
}

/// Return a copy with `key` set to version 1, replacing any previous version.
pub fn enable(stacks: &StacksMap, key: impl AsRef<str>) -> StacksMap {
    let mut out = stacks.clone();
    out.insert(key.as_ref().to_string(), 1);
    out
}

/// Return a copy without `key`.
pub fn disable(stacks: &StacksMap, key: impl AsRef<str>) -> StacksMap {
    let mut out = stacks.clone();
    out.remove(key.as_ref());
    out
}

/// Why a key was dropped during migration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum DropReason {
    UnknownStack,
    UnsupportedVersion,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DroppedKey {
    pub key: String,
    pub reason: DropReason,
}

/// What a migration pass did to the legacy keys it found.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MigrationReport {
    /// Versioned keys folded into their unversioned registry key.
    pub migrated: Vec<String>,
    /// Keys removed without a replacement.
    pub dropped: Vec<DroppedKey>,
}

impl MigrationReport {
    pub fn is_empty(&self) -> bool {
        self.migrated.is_empty() && self.dropped.is_empty()
    }
}

/// Migrate legacy `<name>@<version>` keys to unversioned registry keys.
///
/// Returns the borrowed input when there is nothing to migrate, so callers
/// can detect "no change" with `matches!(out, Cow::Borrowed(_))`.
pub fn migrate_versioned_keys(stacks: &StacksMap) -> Cow<'_, StacksMap> {
    migrate_versioned_keys_with_report(stacks).0
}

/// Same as [`migrate_versioned_keys`], also reporting every key it touched.
pub fn migrate_versioned_keys_with_report(
    stacks: &StacksMap,
) -> (Cow<'_, StacksMap>, MigrationReport) {
    let mut report = MigrationReport::default();

    if !stacks.keys().any(|k| k.contains('@')) {
        return (Cow::Borrowed(stacks), report);
    }

    let mut out = stacks.clone();
    for key in stacks.keys().filter(|k| k.contains('@')) {
        out.remove(key);

        let (base, version) = key.split_once('@').unwrap_or((key.as_str(), ""));
        let reason = match StackKey::parse(base) {
            None => Some(DropReason::UnknownStack),
            Some(_) if version != MIGRATABLE_VERSION => Some(DropReason::UnsupportedVersion),
            Some(stack) => {
                out.entry(stack.as_str().to_string()).or_insert(1);
                None
            }
        };

        match reason {
            Some(reason) => {
                tracing::debug!(key = %key, ?reason, "dropping legacy stack key");
                report.dropped.push(DroppedKey {
                    key: key.clone(),
                    reason,
                });
            }
            None => report.migrated.push(key.clone()),
        }
    }

    (Cow::Owned(out), report)
}

/// Load-time policy for stored maps: migrate legacy keys, then drop every
/// unversioned key the registry does not recognize. The result always passes
/// [`validate_stacks`].
pub fn sanitize_stacks(stacks: &StacksMap) -> (Cow<'_, StacksMap>, MigrationReport) {
    let (migrated, mut report) = migrate_versioned_keys_with_report(stacks);

    let unknown: Vec<String> = migrated
        .keys()
        .filter(|k| StackKey::parse(k).is_none())
        .cloned()
        .collect();
    if unknown.is_empty() {
        return (migrated, report);
    }

    let mut out = migrated.into_owned();
    for key in unknown {
        out.remove(&key);
        tracing::debug!(key = %key, "dropping unknown stack key");
        report.dropped.push(DroppedKey {
            key,
            reason: DropReason::UnknownStack,
        });
    }
    (Cow::Owned(out), report)
}

/// Reject versioned or unrecognized keys.
pub fn validate_stacks(stacks: &StacksMap) -> MiseResult<()> {
    for key in stacks.keys() {
        if key.contains('@') {
            return Err(MiseError::invalid_argument(format!(
                "versioned stack key must be migrated: {key}"
            )));
        }
        if StackKey::parse(key).is_none() {
            return Err(MiseError::invalid_argument(format!(
                "unknown stack key: {key}"
            )));
        }
    }
    Ok(())
}
