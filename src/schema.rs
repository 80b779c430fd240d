//! Call descriptor model for the client API schema.
//!
//! The schema is the single source of truth: every generated artifact
//! (worker declarations, definitions, prototype rows, docs) is derived from
//! the `CallDescriptor` list and nothing else. All types here are plain
//! read-only data constructed once per generator run.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::GenError;

// ═══════════════════════════════════════════════════════════════════════════════
// CALL FORMS
// ═══════════════════════════════════════════════════════════════════════════════

/// How results are delivered to the caller's callback.
///
/// `OneShot` delivers exactly one (status, payload) pair; `Iterator` streams
/// zero or more results to the same callback, with a trailing done/continue
/// indicator. The form decides two things and nothing else: the callback
/// arity registered on the operation record, and which `encode_*` family the
/// completion event dispatches into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CallForm {
    OneShot,
    Iterator,
}

impl CallForm {
    /// Identifier used in worker names and `Operation::encode_*` routines.
    pub fn wire_name(&self) -> &'static str {
        match self {
            CallForm::OneShot => "asynccall",
            CallForm::Iterator => "iterator",
        }
    }

    /// Positional results the host callback receives per invocation:
    /// (status, payload) for one-shot, (status, payload, done) for iterators.
    pub fn callback_arity(&self) -> u32 {
        match self {
            CallForm::OneShot => 2,
            CallForm::Iterator => 3,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// ARGUMENT GROUPS
// ═══════════════════════════════════════════════════════════════════════════════

/// One native parameter of an argument group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    pub ctype: &'static str,
    pub name: &'static str,
}

const fn field(ctype: &'static str, name: &'static str) -> Field {
    Field { ctype, name }
}

/// A named bundle of native fields marshalled (or decoded) as a unit.
///
/// Groups are the vocabulary the whole generator speaks: the marshalling
/// emitter turns each input group into one `convert_<group>` call, the
/// dispatch emitter flattens group fields into the native function-pointer
/// signature, and the docs emitter looks descriptions up by (form, group).
/// Identity is the variant itself; field lists are fixed tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ArgGroup {
    SpaceName,
    Key,
    Attributes,
    MapAttributes,
    Predicates,
    SortBy,
    Limit,
    MaxMin,
    Status,
    Count,
    Description,
}

impl ArgGroup {
    /// Canonical lower-case identifier, used in worker names, conversion
    /// routine names, and doc signatures.
    pub fn name(&self) -> &'static str {
        match self {
            ArgGroup::SpaceName => "spacename",
            ArgGroup::Key => "key",
            ArgGroup::Attributes => "attributes",
            ArgGroup::MapAttributes => "mapattributes",
            ArgGroup::Predicates => "predicates",
            ArgGroup::SortBy => "sortby",
            ArgGroup::Limit => "limit",
            ArgGroup::MaxMin => "maxmin",
            ArgGroup::Status => "status",
            ArgGroup::Count => "count",
            ArgGroup::Description => "description",
        }
    }

    /// Ordered native fields. Output groups use the same tables; the
    /// dispatch layer adds the pointer level for out-parameters.
    pub fn fields(&self) -> &'static [Field] {
        const SPACE_NAME: &[Field] = &[field("const char*", "space")];
        const KEY: &[Field] = &[field("const char*", "key"), field("size_t", "key_sz")];
        const ATTRIBUTES: &[Field] = &[
            field("const struct hyperdex_client_attribute*", "attrs"),
            field("size_t", "attrs_sz"),
        ];
        const MAP_ATTRIBUTES: &[Field] = &[
            field("const struct hyperdex_client_map_attribute*", "mapattrs"),
            field("size_t", "mapattrs_sz"),
        ];
        const PREDICATES: &[Field] = &[
            field("const struct hyperdex_client_attribute_check*", "checks"),
            field("size_t", "checks_sz"),
        ];
        const SORT_BY: &[Field] = &[field("const char*", "sort_by")];
        const LIMIT: &[Field] = &[field("uint64_t", "limit")];
        const MAX_MIN: &[Field] = &[field("int", "maxmin")];
        const STATUS: &[Field] = &[field("enum hyperdex_client_returncode", "status")];
        const COUNT: &[Field] = &[field("uint64_t", "count")];
        const DESCRIPTION: &[Field] = &[field("const char*", "description")];

        match self {
            ArgGroup::SpaceName => SPACE_NAME,
            ArgGroup::Key => KEY,
            ArgGroup::Attributes => ATTRIBUTES,
            ArgGroup::MapAttributes => MAP_ATTRIBUTES,
            ArgGroup::Predicates => PREDICATES,
            ArgGroup::SortBy => SORT_BY,
            ArgGroup::Limit => LIMIT,
            ArgGroup::MaxMin => MAX_MIN,
            ArgGroup::Status => STATUS,
            ArgGroup::Count => COUNT,
            ArgGroup::Description => DESCRIPTION,
        }
    }
}

impl fmt::Display for ArgGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// RETURN SHAPES
// ═══════════════════════════════════════════════════════════════════════════════

/// The closed set of legal args_out shapes.
///
/// This is the one declaration point for output shapes: the decode routine
/// selected by the marshalling emitter and the return-value text in the docs
/// emitter both key off it. Adding a shape means adding a variant here and
/// handling it in both emitters; anything outside the set is a schema defect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReturnShape {
    Status,
    StatusAttributes,
    StatusCount,
    StatusDescription,
}

impl ReturnShape {
    pub fn of(call: &str, args_out: &[ArgGroup]) -> Result<ReturnShape, GenError> {
        if args_out.first() != Some(&ArgGroup::Status) {
            return Err(GenError::MissingStatus {
                call: call.to_string(),
            });
        }

        match args_out {
            [ArgGroup::Status] => Ok(ReturnShape::Status),
            [ArgGroup::Status, ArgGroup::Attributes] => Ok(ReturnShape::StatusAttributes),
            [ArgGroup::Status, ArgGroup::Count] => Ok(ReturnShape::StatusCount),
            [ArgGroup::Status, ArgGroup::Description] => Ok(ReturnShape::StatusDescription),
            other => Err(GenError::UnsupportedReturnShape {
                call: call.to_string(),
                shape: join_names(other),
            }),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// CALL DESCRIPTORS
// ═══════════════════════════════════════════════════════════════════════════════

/// One public API call: its name, delivery form, and argument shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallDescriptor {
    pub name: String,
    pub form: CallForm,
    pub args_in: Vec<ArgGroup>,
    pub args_out: Vec<ArgGroup>,
}

impl CallDescriptor {
    pub fn new(
        name: &str,
        form: CallForm,
        args_in: &[ArgGroup],
        args_out: &[ArgGroup],
    ) -> CallDescriptor {
        CallDescriptor {
            name: name.to_string(),
            form,
            args_in: args_in.to_vec(),
            args_out: args_out.to_vec(),
        }
    }

    /// Canonical worker name shared by every call with this exact shape.
    ///
    /// Derived from the form and the full in/out group sequences, never
    /// from the public call name, so that calls differing only in name
    /// collapse onto one worker, e.g.
    /// `asynccall__spacename_key__status_attributes`.
    pub fn worker_name(&self) -> String {
        format!(
            "{}__{}__{}",
            self.form.wire_name(),
            join_names(&self.args_in),
            join_names(&self.args_out)
        )
    }

    pub fn return_shape(&self) -> Result<ReturnShape, GenError> {
        ReturnShape::of(&self.name, &self.args_out)
    }

    /// `Operation` member routine that decodes this call's completion event,
    /// e.g. `encode_asynccall_status_attributes`. A function of the output
    /// shape and the form: iterator decode re-arms for the next event where
    /// one-shot decode retires the operation.
    pub fn decode_routine(&self) -> Result<String, GenError> {
        self.return_shape()?;
        Ok(format!(
            "encode_{}_{}",
            self.form.wire_name(),
            join_names(&self.args_out)
        ))
    }
}

fn join_names(groups: &[ArgGroup]) -> String {
    groups
        .iter()
        .map(|g| g.name())
        .collect::<Vec<_>>()
        .join("_")
}

/// Load a schema from a JSON file (an array of camelCase descriptors).
/// Unknown forms or groups are rejected by deserialization.
pub fn load_schema(path: &Path) -> Result<Vec<CallDescriptor>, GenError> {
    let raw = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}
