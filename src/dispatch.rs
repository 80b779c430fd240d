//! Dispatch table emitter: per-call stubs and prototype registration.
//!
//! Each public call gets a forward declaration, a one-line definition that
//! forwards to its shared worker with the concrete native entry point, and
//! one row in the prototype registration table. The stubs carry no
//! marshalling logic of their own.

use crate::schema::CallDescriptor;
use crate::workers::native_func_ptr;

/// Forward declaration of a shared worker.
pub fn worker_declaration(call: &CallDescriptor) -> String {
    format!(
        "static v8::Handle<v8::Value> {}({}, const v8::Arguments& args);",
        call.worker_name(),
        native_func_ptr(call)
    )
}

/// Forward declaration of a public call's entry point.
pub fn call_declaration(call: &CallDescriptor) -> String {
    format!(
        "static v8::Handle<v8::Value> {}(const v8::Arguments& args);",
        call.name
    )
}

/// Definition of a public call: bind the worker to this call's native
/// function pointer and forward everything else untouched.
pub fn call_definition(call: &CallDescriptor) -> Vec<String> {
    vec![
        "v8::Handle<v8::Value>".to_string(),
        format!("HyperDexClient :: {}(const v8::Arguments& args)", call.name),
        "{".to_string(),
        format!(
            "    return {}(hyperdex_client_{}, args);",
            call.worker_name(),
            call.name
        ),
        "}".to_string(),
    ]
}

/// Registration row exposing the call under its public name.
pub fn prototype_row(call: &CallDescriptor) -> String {
    format!(
        "NODE_SET_PROTOTYPE_METHOD(tpl, \"{0}\", HyperDexClient::{0});",
        call.name
    )
}
