use anyhow::{Context, Result};
use serde::Serialize;

use mise_core::stacks::{migrate_versioned_keys_with_report, MigrationReport, StackKey, StacksMap};

use crate::io::input;
use crate::output;

#[derive(Debug, Serialize)]
pub struct ListOut {
    pub stacks: Vec<&'static str>,
}

#[derive(Debug, Serialize)]
pub struct MigrateOut {
    pub changed: bool,
    pub stacks: StacksMap,
    pub report: MigrationReport,
}

pub fn list() -> Result<()> {
    let stacks = StackKey::all().iter().map(StackKey::as_str).collect();
    output::print(&ListOut { stacks })
}

pub fn migrate(input_arg: Option<&str>, max_bytes: usize) -> Result<()> {
    let v = input::read_json(input_arg, max_bytes)?;
    let stacks: StacksMap =
        serde_json::from_value(v).context("stacks must be an object of key -> integer version")?;

    let (migrated, report) = migrate_versioned_keys_with_report(&stacks);
    let out = MigrateOut {
        changed: !report.is_empty(),
        stacks: migrated.into_owned(),
        report,
    };
    output::print(&out)
}
