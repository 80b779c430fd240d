//! Generation orchestrator.
//!
//! Renders all four artifacts fully in memory before anything touches the
//! filesystem: a schema defect anywhere aborts the run with no partially
//! written output. Repeated runs over the same schema are byte-identical.

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::dispatch::{call_declaration, call_definition, prototype_row, worker_declaration};
use crate::docs::{api_block, AnnotationTable};
use crate::emit::Artifact;
use crate::error::GenError;
use crate::marshal::worker_definition;
use crate::schema::CallDescriptor;
use crate::workers::distinct_workers;

/// The four rendered artifacts of one generator run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedOutput {
    pub declarations: String,
    pub definitions: String,
    pub prototypes: String,
    pub docs: String,
}

pub fn generate(
    calls: &[CallDescriptor],
    table: &AnnotationTable,
) -> Result<GeneratedOutput, GenError> {
    let workers = distinct_workers(calls);
    info!(
        calls = calls.len(),
        workers = workers.len(),
        "generating client bindings"
    );

    // Forward declarations: one line per distinct worker, then one line per
    // public call.
    let mut declarations = Artifact::with_header("//");
    for rep in &workers {
        declarations.push(worker_declaration(rep));
    }
    declarations.blank();
    for call in calls {
        declarations.push(call_declaration(call));
    }

    // Definitions: worker bodies first, forwarding stubs after, both in
    // first-seen / schema order respectively.
    let mut definitions = Artifact::with_header("//");
    for rep in &workers {
        debug!(worker = %rep.worker_name(), "emitting worker");
        definitions.extend_lines(worker_definition(rep)?);
        definitions.blank();
    }
    definitions.blank();
    for call in calls {
        definitions.extend_lines(call_definition(call));
        definitions.blank();
    }

    let mut prototypes = Artifact::with_header("//");
    for call in calls {
        prototypes.push(prototype_row(call));
    }

    // Docs are per call, never de-duplicated.
    let mut docs = Artifact::with_header("%");
    for call in calls {
        docs.extend_lines(api_block(call, table)?);
        docs.blank();
    }

    Ok(GeneratedOutput {
        declarations: declarations.render(),
        definitions: definitions.render(),
        prototypes: prototypes.render(),
        docs: docs.render(),
    })
}

pub const DECLARATIONS_FILE: &str = "client.declarations.cc";
pub const DEFINITIONS_FILE: &str = "client.definitions.cc";
pub const PROTOTYPES_FILE: &str = "client.prototypes.cc";
pub const DOCS_FILE: &str = "node.js.client.tex";

/// Write the four artifacts under `dir`, creating it if needed.
pub fn write_to(out: &GeneratedOutput, dir: &Path) -> Result<(), GenError> {
    fs::create_dir_all(dir)?;

    for (name, text) in [
        (DECLARATIONS_FILE, &out.declarations),
        (DEFINITIONS_FILE, &out.definitions),
        (PROTOTYPES_FILE, &out.prototypes),
        (DOCS_FILE, &out.docs),
    ] {
        let path = dir.join(name);
        fs::write(&path, text)?;
        info!(path = %path.display(), bytes = text.len(), "wrote artifact");
    }

    Ok(())
}
