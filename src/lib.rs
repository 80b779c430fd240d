//! # hyperglue: Node.js binding generator for the HyperDex client API
//!
//! One declarative schema drives four generated artifacts: worker forward
//! declarations, worker + stub definitions, prototype registration rows,
//! and LaTeX reference documentation. The artifacts can never drift apart
//! because none of them is hand-maintained.
//!
//! ## Binding Invariants
//!
//! 1. **Worker identity is shape identity**: two calls share one generated
//!    worker iff (form, args_in, args_out) match exactly. The public call
//!    name never enters worker naming.
//!
//! 2. **First-seen order**: workers are declared and defined in the order
//!    their shape first occurs in the schema; stubs, registration rows and
//!    doc blocks follow exact schema order. Regeneration is byte-identical.
//!
//! 3. **Callback arity is decided by form alone**: one-shot calls register
//!    a 2-argument callback (status, payload), iterators a 3-argument one
//!    (status, payload, done). This is the only point where form affects
//!    marshalling.
//!
//! 4. **Decode routines are selected by (form, output shape)**: the four
//!    legal output shapes are a closed enum; anything else is a fatal
//!    schema defect at generation time, never a runtime fallback.
//!
//! 5. **No partial output**: all four artifacts are rendered in memory
//!    before the first byte is written to disk.

mod catalog;
mod dispatch;
mod docs;
mod emit;
mod error;
mod generate;
mod marshal;
mod schema;
mod workers;

pub use catalog::{CLIENT_CALLS, CLIENT_DOCS};
pub use docs::AnnotationTable;
pub use error::GenError;
pub use generate::{
    generate, write_to, GeneratedOutput, DECLARATIONS_FILE, DEFINITIONS_FILE, DOCS_FILE,
    PROTOTYPES_FILE,
};
pub use schema::{load_schema, ArgGroup, CallDescriptor, CallForm, Field, ReturnShape};

#[cfg(test)]
mod schema_tests;


#[cfg(test)]
mod marshal_tests;
