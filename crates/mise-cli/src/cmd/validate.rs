use anyhow::{bail, Result};
use serde::Serialize;

use mise_core::model::{validate_recipe, Recipe, WorkbenchDoc};
use mise_core::{MiseError, MEDIA_TYPE};

use crate::io::input;
use crate::output;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidateOut {
    pub ok: bool,
    /// Set when a recipe passes: the media type it can be served as.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_type: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

pub fn run(input_arg: Option<&str>, max_bytes: usize, document: bool) -> Result<()> {
    let raw = input::read_text(input_arg, max_bytes)?;

    let res = if document {
        WorkbenchDoc::from_json_slice(raw.as_bytes()).map(|_| ())
    } else {
        serde_json::from_str::<Recipe>(&raw)
            .map_err(MiseError::from)
            .and_then(|r| validate_recipe(&r))
    };

    let out = ValidateOut {
        ok: res.is_ok(),
        media_type: (res.is_ok() && !document).then_some(MEDIA_TYPE),
        error: res.err().map(|e| e.to_string()),
    };
    output::print(&out)?;

    if !out.ok {
        bail!("validation failed");
    }
    Ok(())
}
