//! # Integration Test Flows
//!
//! ## Flows Tested:
//!
//! 1. **Ordered → Typed**: entries built and reshaped in an ordered
//!    container are moved into a typed container through the gate
//! 2. **Typed → Ordered**: a typed container hands back its inner container
//! 3. **Log events**: failures and bulk mutations emit the expected events

#[cfg(test)]
mod tests {
    use oc_01_ordered_collection::{
        CollectionConfigBuilder, CollectionError, ExternalIterator, Key, OrderedContainer,
        SortFlags,
    };
    use oc_02_typed_collection::{Capability, Requirement, TypedCollectionError, TypedContainer};

    use crate::support::{capture_logs, init_test_logging};

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    /// Accepts non-empty lowercase words
    struct Words;

    impl Capability for Words {
        type Element = String;

        fn requirement() -> Option<Requirement<String>> {
            Some(Requirement::new("lowercase word", |s: &String| {
                !s.is_empty() && s.chars().all(|c| c.is_ascii_lowercase())
            }))
        }
    }

    fn words(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    // =============================================================================
    // ORDERED → TYPED
    // =============================================================================

    #[test]
    fn test_reshaped_entries_cross_the_gate() {
        init_test_logging();

        let mut staging =
            OrderedContainer::from_values(words(&["pear", "apple", "fig", "kiwi"]));
        staging.splice(1, Some(2), words(&["banana"]));
        staging.sort(None).unwrap();

        let typed = TypedContainer::<Words>::from_entries(staging.clone()).unwrap();

        assert_eq!(typed.dump(), staging.dump());
        assert_eq!(typed.values().collect::<Vec<_>>(), vec!["banana", "kiwi", "pear"]);
    }

    #[test]
    fn test_one_bad_entry_blocks_the_whole_transfer() {
        init_test_logging();

        let staging = OrderedContainer::from_values(words(&["ok", "Bad", "fine"]));
        let mut typed = TypedContainer::<Words>::from_values(words(&["seed"])).unwrap();

        let result = typed.merge(staging);

        assert!(matches!(
            result,
            Err(TypedCollectionError::InvalidElementType { ref actual, .. })
                if actual.contains("String")
        ));
        assert_eq!(typed.count(), 1);
        assert_eq!(typed.get(0u64).map(String::as_str), Some("seed"));
    }

    #[test]
    fn test_typed_config_shares_sort_defaults() {
        init_test_logging();

        let config = CollectionConfigBuilder::new()
            .default_sort_flags(SortFlags::Natural)
            .build()
            .unwrap();
        let mut typed = TypedContainer::<Words>::with_config(config).unwrap();
        typed.append(words(&["b", "a"])).unwrap();

        typed.asort(None).unwrap();
        assert_eq!(
            typed.keys_iter().cloned().collect::<Vec<_>>(),
            vec![Key::Int(1), Key::Int(0)]
        );
    }

    #[test]
    fn test_invalid_config_surfaces_through_typed_error() {
        let config = CollectionConfigBuilder::new()
            .initial_capacity(usize::MAX)
            .build_unchecked();

        let result = TypedContainer::<Words>::with_config(config);

        assert!(matches!(
            result,
            Err(TypedCollectionError::Collection(CollectionError::InvalidConfig(_)))
        ));
    }

    // =============================================================================
    // TYPED → ORDERED
    // =============================================================================

    #[test]
    fn test_inner_container_keeps_cursor_and_entries() {
        let mut typed = TypedContainer::<Words>::from_values(words(&["one", "two"])).unwrap();
        typed.advance();

        let mut inner = typed.into_inner();
        assert_eq!(inner.current().map(String::as_str), Some("two"));

        inner.push("Anything Goes".to_string()).unwrap();
        assert_eq!(inner.count(), 3);
    }

    #[test]
    fn test_flip_of_typed_words_builds_lookup() {
        let typed = TypedContainer::<Words>::from_entries([
            ("x", "alpha".to_string()),
            ("y", "beta".to_string()),
        ])
        .unwrap();

        let lookup = typed.flip();

        assert_eq!(lookup.get("beta"), Some(&Key::from("y")));
        assert_eq!(lookup.count(), 2);
    }

    // =============================================================================
    // LOG EVENTS
    // =============================================================================

    #[test]
    fn test_failed_sort_logs_operation_and_reason() {
        let logs = capture_logs(|| {
            let mut c = OrderedContainer::from_values([1.0, f64::NAN, 0.5]);
            assert!(c.asort(None).is_err());
        });

        assert!(logs.contains("WARN"), "Logs were: {}", logs);
        assert!(logs.contains("operation=asort"), "Logs were: {}", logs);
    }

    #[test]
    fn test_rejection_logs_actual_and_expected() {
        let logs = capture_logs(|| {
            let mut typed = TypedContainer::<Words>::new().unwrap();
            assert!(typed.push(String::new()).is_err());
        });

        assert!(logs.contains("Element rejected"), "Logs were: {}", logs);
        assert!(logs.contains("lowercase word"), "Logs were: {}", logs);
    }

    #[test]
    fn test_flip_logs_skipped_entries() {
        let logs = capture_logs(|| {
            let c = OrderedContainer::from_entries([("a", 1.5), ("b", 2.0)]);
            assert!(c.flip().is_empty());
        });

        assert_eq!(logs.matches("entry skipped").count(), 2, "Logs were: {}", logs);
    }

    #[test]
    fn test_bulk_mutations_log_counts() {
        let logs = capture_logs(|| {
            let mut c = OrderedContainer::from_values(["a", "b", "c"]);
            c.splice(0, Some(1), []);
            c.prepend(["z"], false).unwrap();
        });

        assert!(logs.contains("Collection spliced"), "Logs were: {}", logs);
        assert!(logs.contains("removed=1"), "Logs were: {}", logs);
        assert!(logs.contains("Values prepended"), "Logs were: {}", logs);
    }
}
