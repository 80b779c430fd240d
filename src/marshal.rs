//! Marshalling code emitter: the body of each shared worker.
//!
//! A worker is the one place marshalling logic lives. It converts each
//! host-supplied argument group into native storage, registers the caller's
//! callback on a fresh operation record, issues the native request, and
//! parks the record in the client's pending-request table under the request
//! id. The per-call stubs in `dispatch` only bind a worker to a concrete
//! entry point; they never repeat any of these steps.
//!
//! Error discipline of the emitted code:
//! - argument conversion failure returns immediately with no request issued
//!   (the `convert_*` routine has already reported the error to the caller);
//! - a missing or non-callable trailing callback throws a type error and
//!   returns before any request is issued;
//! - a negative request id synthesizes one error callback from the last
//!   known status and leaves nothing in the pending table.

use crate::schema::CallDescriptor;
use crate::workers::native_func_ptr;
use crate::error::GenError;

/// Emit the full worker definition for one representative descriptor.
pub fn worker_definition(call: &CallDescriptor) -> Result<Vec<String>, GenError> {
    // Validates the output shape up front; a schema with an unknown shape
    // aborts generation before any text is produced.
    let decode = call.decode_routine()?;

    let mut lines = Vec::new();

    lines.push("v8::Handle<v8::Value>".to_string());
    lines.push(format!(
        "HyperDexClient :: {}({}, const v8::Arguments& args)",
        call.worker_name(),
        native_func_ptr(call)
    ));
    lines.push("{".to_string());
    lines.push("    v8::HandleScope scope;".to_string());
    lines.push("    v8::Local<v8::Object> client_obj = args.This();".to_string());
    lines.push(
        "    HyperDexClient* client = node::ObjectWrap::Unwrap<HyperDexClient>(client_obj);"
            .to_string(),
    );
    lines.push("    e::intrusive_ptr<Operation> op(new Operation(client_obj, client));".to_string());

    // One conversion step per input group, reading args[] positionally.
    for (idx, group) in call.args_in.iter().enumerate() {
        for f in group.fields() {
            lines.push(format!("    {} in_{};", f.ctype, f.name));
        }
        let outs = group
            .fields()
            .iter()
            .map(|f| format!("&in_{}", f.name))
            .collect::<Vec<_>>()
            .join(", ");
        lines.push(format!(
            "    v8::Local<v8::Value> {} = args[{}];",
            group.name(),
            idx
        ));
        lines.push(format!(
            "    if (!op->convert_{0}({0}, {1})) return scope.Close(v8::Undefined());",
            group.name(),
            outs
        ));
    }

    // The completion callback sits right after the last input group.
    lines.push(format!(
        "    v8::Local<v8::Function> func = args[{}].As<v8::Function>();",
        call.args_in.len()
    ));
    lines.push(String::new());
    lines.push("    if (func.IsEmpty() || !func->IsFunction())".to_string());
    lines.push("    {".to_string());
    lines.push(
        "        v8::ThrowException(v8::String::New(\"Callback must be a function\"));"
            .to_string(),
    );
    lines.push("        return scope.Close(v8::Undefined());".to_string());
    lines.push("    }".to_string());
    lines.push(String::new());

    lines.push(format!(
        "    if (!op->set_callback(func, {})) {{ return scope.Close(v8::Undefined()); }}",
        call.form.callback_arity()
    ));

    // Inputs flattened in group/field order; outputs as addresses of the
    // operation record's fields, flattened the same way.
    let in_args = call
        .args_in
        .iter()
        .flat_map(|g| g.fields())
        .map(|f| format!("in_{}", f.name))
        .collect::<Vec<_>>()
        .join(", ");
    let out_args = call
        .args_out
        .iter()
        .flat_map(|g| g.fields())
        .map(|f| format!("&op->{}", f.name))
        .collect::<Vec<_>>()
        .join(", ");
    lines.push(format!(
        "    op->reqid = f(client->client(), {}, {});",
        in_args, out_args
    ));
    lines.push(String::new());

    lines.push("    if (op->reqid < 0)".to_string());
    lines.push("    {".to_string());
    lines.push("        op->callback_error_from_status();".to_string());
    lines.push("        return scope.Close(v8::Undefined());".to_string());
    lines.push("    }".to_string());
    lines.push(String::new());

    lines.push(format!("    op->encode_return = &Operation::{};", decode));
    lines.push("    client->add(op->reqid, op);".to_string());
    lines.push("    return scope.Close(v8::Undefined());".to_string());
    lines.push("}".to_string());

    Ok(lines)
}
