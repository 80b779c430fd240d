//! Documentation emitter: one LaTeX reference block per public call.
//!
//! Docs are emitted straight from the schema, not from the de-duplicated
//! worker list: shape twins share a worker but each still gets its own
//! block, in exact schema order. Parameter descriptions come from the
//! annotation table keyed by (form, group); a missing entry aborts
//! generation rather than emitting a blank description.

use std::collections::HashMap;

use crate::error::GenError;
use crate::schema::{ArgGroup, CallDescriptor, CallForm, ReturnShape};

/// Parameter descriptions, keyed by (form, group). The same group can read
/// differently under different forms (a one-shot key vs. an iterator sort
/// attribute), hence the compound key.
pub type AnnotationTable = HashMap<(CallForm, ArgGroup), &'static str>;

/// Escape a call name for use inside `\code{}` / `\index{}` arguments.
fn latex(name: &str) -> String {
    name.replace('_', "\\_")
}

/// The signature line shown in the code block: the public name plus the
/// lower-cased group identifiers, positionally.
fn signature(call: &CallDescriptor) -> String {
    let params = call
        .args_in
        .iter()
        .map(|g| g.name())
        .collect::<Vec<_>>()
        .join(", ");
    format!("Client :: {}({})", call.name, params)
}

fn return_text(call: &CallDescriptor) -> Result<&'static str, GenError> {
    Ok(match call.return_shape()? {
        ReturnShape::Status => {
            if call.args_in.contains(&ArgGroup::Predicates) {
                "True if predicate, False if not predicate.  Raises exception on error."
            } else {
                "True.  Raises exception on error."
            }
        }
        ReturnShape::StatusAttributes => {
            "Object if found, nil if not found.  Raises exception on error."
        }
        ReturnShape::StatusCount => "Number of objects found.  Raises exception on error.",
        ReturnShape::StatusDescription => "Description of search.  Raises exception on error.",
    })
}

/// Emit the full reference block for one call.
pub fn api_block(call: &CallDescriptor, table: &AnnotationTable) -> Result<Vec<String>, GenError> {
    let mut lines = Vec::new();

    lines.push(format!("\\subsubsection{{\\code{{{}}}}}", latex(&call.name)));
    lines.push(format!("\\label{{api:nodejs:{}}}", call.name));
    lines.push(format!("\\index{{{}!Node.js API}}", latex(&call.name)));
    lines.push("\\begin{javascriptcode}".to_string());
    lines.push(signature(call));
    lines.push("\\end{javascriptcode}".to_string());
    lines.push(format!(
        "\\funcdesc \\input{{\\topdir/api/desc/{}}}",
        call.name
    ));
    lines.push(String::new());
    lines.push("\\noindent\\textbf{Parameters:}".to_string());
    lines.push("\\begin{itemize}[noitemsep]".to_string());

    for group in &call.args_in {
        let desc = table
            .get(&(call.form, *group))
            .copied()
            .ok_or(GenError::MissingAnnotation {
                form: call.form,
                group: *group,
            })?;
        lines.push(format!("\\item \\code{{{}}}", group.name()));
        lines.push(String::new());
        lines.push(desc.to_string());
    }

    lines.push("\\end{itemize}".to_string());
    lines.push(String::new());
    lines.push("\\noindent\\textbf{Returns:}".to_string());
    lines.push(return_text(call)?.to_string());

    Ok(lines)
}
