#[cfg(test)]
mod tests {
    use crate::error::GenError;
    use crate::schema::ArgGroup::*;
    use crate::schema::CallForm::{Iterator, OneShot};
    use crate::schema::{CallDescriptor, CallForm, ReturnShape};

    #[test]
    fn test_worker_name_ignores_public_name() {
        let get = CallDescriptor::new("get", OneShot, &[SpaceName, Key], &[Status, Attributes]);
        let other =
            CallDescriptor::new("fetch", OneShot, &[SpaceName, Key], &[Status, Attributes]);
        assert_eq!(get.worker_name(), other.worker_name());
        assert_eq!(
            get.worker_name(),
            "asynccall__spacename_key__status_attributes"
        );
    }

    #[test]
    fn test_worker_name_tracks_every_shape_component() {
        let base = CallDescriptor::new("a", OneShot, &[SpaceName, Key], &[Status]);

        let other_form = CallDescriptor::new("a", Iterator, &[SpaceName, Key], &[Status]);
        assert_ne!(base.worker_name(), other_form.worker_name());

        let other_in = CallDescriptor::new("a", OneShot, &[SpaceName, Key, Attributes], &[Status]);
        assert_ne!(base.worker_name(), other_in.worker_name());

        let other_out = CallDescriptor::new("a", OneShot, &[SpaceName, Key], &[Status, Count]);
        assert_ne!(base.worker_name(), other_out.worker_name());
    }

    #[test]
    fn test_callback_arity() {
        assert_eq!(CallForm::OneShot.callback_arity(), 2);
        assert_eq!(CallForm::Iterator.callback_arity(), 3);
    }

    #[test]
    fn test_return_shape_legal() {
        assert_eq!(ReturnShape::of("x", &[Status]).unwrap(), ReturnShape::Status);
        assert_eq!(
            ReturnShape::of("x", &[Status, Attributes]).unwrap(),
            ReturnShape::StatusAttributes
        );
        assert_eq!(
            ReturnShape::of("x", &[Status, Count]).unwrap(),
            ReturnShape::StatusCount
        );
        assert_eq!(
            ReturnShape::of("x", &[Status, Description]).unwrap(),
            ReturnShape::StatusDescription
        );
    }

    #[test]
    fn test_return_shape_must_lead_with_status() {
        assert!(matches!(
            ReturnShape::of("bad", &[]),
            Err(GenError::MissingStatus { .. })
        ));
        assert!(matches!(
            ReturnShape::of("bad", &[Count]),
            Err(GenError::MissingStatus { .. })
        ));
    }

    #[test]
    fn test_return_shape_rejects_unknown_combination() {
        let err = ReturnShape::of("bad", &[Status, Key]).unwrap_err();
        match err {
            GenError::UnsupportedReturnShape { call, shape } => {
                assert_eq!(call, "bad");
                assert_eq!(shape, "status_key");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_decode_routine_selection() {
        let get = CallDescriptor::new("get", OneShot, &[SpaceName, Key], &[Status, Attributes]);
        assert_eq!(
            get.decode_routine().unwrap(),
            "encode_asynccall_status_attributes"
        );

        // Same output shape, different form, different decode routine.
        let search =
            CallDescriptor::new("search", Iterator, &[SpaceName, Predicates], &[Status, Attributes]);
        assert_eq!(
            search.decode_routine().unwrap(),
            "encode_iterator_status_attributes"
        );
    }

    #[test]
    fn test_descriptor_json_round_trip() {
        let call = CallDescriptor::new(
            "sorted_search",
            Iterator,
            &[SpaceName, Predicates, SortBy, Limit, MaxMin],
            &[Status, Attributes],
        );
        let json = serde_json::to_string(&call).unwrap();
        assert!(json.contains("\"argsIn\""));
        assert!(json.contains("\"argsOut\""));
        let back: CallDescriptor = serde_json::from_str(&json).unwrap();
        assert_eq!(call, back);
    }

    #[test]
    fn test_unknown_group_rejected_by_loader() {
        let json = r#"[{"name":"x","form":"OneShot","argsIn":["Tuple"],"argsOut":["Status"]}]"#;
        assert!(serde_json::from_str::<Vec<CallDescriptor>>(json).is_err());
    }
}
