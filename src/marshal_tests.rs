#[cfg(test)]
mod tests {
    use crate::error::GenError;
    use crate::marshal::worker_definition;
    use crate::schema::ArgGroup::*;
    use crate::schema::CallForm::{Iterator, OneShot};
    use crate::schema::CallDescriptor;

    fn get_call() -> CallDescriptor {
        CallDescriptor::new("get", OneShot, &[SpaceName, Key], &[Status, Attributes])
    }

    fn sorted_search_call() -> CallDescriptor {
        CallDescriptor::new(
            "sorted_search",
            Iterator,
            &[SpaceName, Predicates, SortBy, Limit, MaxMin],
            &[Status, Attributes],
        )
    }

    #[test]
    fn test_worker_body_conversion_steps_in_schema_order() {
        let lines = worker_definition(&get_call()).unwrap();
        let body = lines.join("\n");

        // Storage declared per field, group value read positionally,
        // conversion routine invoked with field addresses.
        let spacename = body.find("v8::Local<v8::Value> spacename = args[0];").unwrap();
        let key = body.find("v8::Local<v8::Value> key = args[1];").unwrap();
        assert!(spacename < key);
        assert!(body.contains("    const char* in_space;"));
        assert!(body.contains("    const char* in_key;"));
        assert!(body.contains("    size_t in_key_sz;"));
        assert!(body.contains(
            "if (!op->convert_spacename(spacename, &in_space)) return scope.Close(v8::Undefined());"
        ));
        assert!(body.contains(
            "if (!op->convert_key(key, &in_key, &in_key_sz)) return scope.Close(v8::Undefined());"
        ));
    }

    #[test]
    fn test_callback_read_after_last_input_group() {
        let lines = worker_definition(&get_call()).unwrap();
        let body = lines.join("\n");
        assert!(body.contains("v8::Local<v8::Function> func = args[2].As<v8::Function>();"));
        assert!(body.contains("if (func.IsEmpty() || !func->IsFunction())"));
        assert!(body.contains("v8::ThrowException(v8::String::New(\"Callback must be a function\"));"));

        let lines = worker_definition(&sorted_search_call()).unwrap();
        let body = lines.join("\n");
        assert!(body.contains("v8::Local<v8::Function> func = args[5].As<v8::Function>();"));
    }

    #[test]
    fn test_callback_arity_two_for_oneshot_three_for_iterator() {
        let oneshot = worker_definition(&get_call()).unwrap().join("\n");
        assert!(oneshot.contains("op->set_callback(func, 2)"));
        assert!(!oneshot.contains("op->set_callback(func, 3)"));

        let iterator = worker_definition(&sorted_search_call()).unwrap().join("\n");
        assert!(iterator.contains("op->set_callback(func, 3)"));
        assert!(!iterator.contains("op->set_callback(func, 2)"));
    }

    #[test]
    fn test_request_issued_with_flattened_fields() {
        let body = worker_definition(&get_call()).unwrap().join("\n");
        assert!(body.contains(
            "op->reqid = f(client->client(), in_space, in_key, in_key_sz, \
             &op->status, &op->attrs, &op->attrs_sz);"
        ));
    }

    #[test]
    fn test_negative_reqid_synthesizes_error_and_skips_pending_table() {
        let lines = worker_definition(&get_call()).unwrap();
        let body = lines.join("\n");
        let error_path = body.find("if (op->reqid < 0)").unwrap();
        let register = body.find("client->add(op->reqid, op);").unwrap();
        assert!(body.contains("op->callback_error_from_status();"));
        // The error path returns before the pending-table registration.
        assert!(error_path < register);
    }

    #[test]
    fn test_decode_routine_stored_before_registration() {
        let body = worker_definition(&get_call()).unwrap().join("\n");
        assert!(body
            .contains("op->encode_return = &Operation::encode_asynccall_status_attributes;"));

        let body = worker_definition(&sorted_search_call()).unwrap().join("\n");
        assert!(body.contains("op->encode_return = &Operation::encode_iterator_status_attributes;"));
    }

    #[test]
    fn test_shape_twins_emit_identical_bodies() {
        let a = worker_definition(&get_call()).unwrap();
        let b = worker_definition(&CallDescriptor::new(
            "loookup",
            OneShot,
            &[SpaceName, Key],
            &[Status, Attributes],
        ))
        .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_unsupported_shape_aborts_before_emitting() {
        let bad = CallDescriptor::new("bad", OneShot, &[SpaceName, Key], &[Status, Key]);
        assert!(matches!(
            worker_definition(&bad),
            Err(GenError::UnsupportedReturnShape { .. })
        ));
    }
}
