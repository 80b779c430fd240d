//! CLI entry point: regenerate the four binding artifacts.
//!
//! Usage: `hyperglue [--schema calls.json] [output-dir]`
//!
//! Without `--schema` the built-in client catalog is used. The output
//! directory defaults to the current directory.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use tracing_subscriber::EnvFilter;

use hyperglue::{generate, load_schema, write_to, CLIENT_CALLS, CLIENT_DOCS};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut schema_path: Option<PathBuf> = None;
    let mut out_dir = PathBuf::from(".");

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--schema" => match args.next() {
                Some(p) => schema_path = Some(PathBuf::from(p)),
                None => bail!("--schema requires a path"),
            },
            other if other.starts_with('-') => bail!("unknown option: {}", other),
            other => out_dir = PathBuf::from(other),
        }
    }

    let calls = match &schema_path {
        Some(path) => load_schema(path)
            .with_context(|| format!("failed to load schema from {}", path.display()))?,
        None => CLIENT_CALLS.clone(),
    };

    let output = generate(&calls, &CLIENT_DOCS).context("generation failed")?;
    write_to(&output, &out_dir)
        .with_context(|| format!("failed to write artifacts to {}", out_dir.display()))?;

    Ok(())
}
