//! Worker de-duplication.
//!
//! Every call whose (form, args_in, args_out) shape matches an
//! already-seen call reuses that call's worker; only the first occurrence
//! of each shape gets a generated body. Emission order is first-seen schema
//! order, never sorted order, so regenerated files diff cleanly against the
//! previous run.

use std::collections::HashSet;

use crate::schema::CallDescriptor;

/// Representatives of each distinct worker shape, in first-occurrence order.
///
/// Two-pass by construction: the seen-set lives on the stack of this call,
/// so repeated generator runs cannot observe each other.
pub fn distinct_workers(calls: &[CallDescriptor]) -> Vec<&CallDescriptor> {
    let mut seen = HashSet::new();
    let mut reps = Vec::new();

    for call in calls {
        if seen.insert(call.worker_name()) {
            reps.push(call);
        }
    }

    reps
}

/// The native function-pointer parameter every worker takes: the client
/// library entry point for one concrete call. Input group fields appear in
/// group order; output fields follow, each with one more pointer level so
/// the library can write results into the operation record.
///
/// Shared by the forward declarations and the worker definitions so the two
/// listings cannot drift apart.
pub fn native_func_ptr(call: &CallDescriptor) -> String {
    let mut params = vec!["struct hyperdex_client* client".to_string()];

    for group in &call.args_in {
        for f in group.fields() {
            params.push(format!("{} {}", f.ctype, f.name));
        }
    }

    for group in &call.args_out {
        for f in group.fields() {
            params.push(format!("{}* {}", f.ctype, f.name));
        }
    }

    format!("int64_t (*f)({})", params.join(", "))
}
