//! Schema identity: canonical schema URL, media type and recipe profiles.

use serde::{Deserialize, Serialize};

use crate::errors::{MiseError, MiseResult};

/// Canonical `$schema` value carried by every recipe artifact.
pub const SCHEMA_URL: &str = "https://soustack.org/schemas/recipe.schema.json";

/// Media type of the emitted recipe JSON.
pub const MEDIA_TYPE: &str = "application/vnd.soustack+json";

/// Known recipe profiles. The compiler only produces `Lite`; the rest are
/// reserved schema variants that loaded documents may still declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Profile {
    #[default]
    Lite,
    Base,
    Scalable,
    Timed,
    Equipped,
    Prepped,
    Illustrated,
}

/// Validate that a `$schema` field matches the canonical URL.
pub fn require_schema_url(actual: &str) -> MiseResult<()> {
    if actual == SCHEMA_URL {
        Ok(())
    } else {
        Err(MiseError::invariant(format!(
            "invalid $schema: expected {SCHEMA_URL}, got {actual}"
        )))
    }
}
