use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};

use serde::Serialize;
use tracing_subscriber::EnvFilter;

static COMPACT: AtomicBool = AtomicBool::new(false);

pub fn init(compact: bool) {
    COMPACT.store(compact, Ordering::Relaxed);
}

pub fn is_compact() -> bool {
    COMPACT.load(Ordering::Relaxed)
}

/// Install the stderr log subscriber. `MISE_LOG` takes precedence over the
/// verbosity flag.
pub fn init_logging(verbose: bool, json: bool) {
    let default = if verbose { "mise_core=debug,mise=debug" } else { "warn" };
    let filter = EnvFilter::try_from_env("MISE_LOG").unwrap_or_else(|_| EnvFilter::new(default));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr);

    let res = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    if let Err(e) = res {
        eprintln_line(&format!("logging disabled: {e}"));
    }
}

pub fn to_json<T: Serialize>(value: &T) -> anyhow::Result<String> {
    let s = if is_compact() {
        serde_json::to_string(value)?
    } else {
        serde_json::to_string_pretty(value)?
    };
    Ok(s)
}

pub fn print<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let s = to_json(value)?;
    let mut out = io::stdout().lock();
    writeln!(out, "{s}")?;
    Ok(())
}

pub fn eprintln_line(msg: &str) {
    let _ = writeln!(io::stderr(), "{msg}");
}
