//! Property-based tests for the hook registry
//!
//! Callbacks run in ascending priority order, ties in registration order,
//! and removed callbacks never run again.

use std::sync::Arc;

use hybrid_hooks::*;
use parking_lot::Mutex;
use proptest::prelude::*;

proptest! {
    /// Filters run sorted by priority; equal priorities keep registration order.
    #[test]
    fn prop_filters_run_in_priority_order(priorities in prop::collection::vec(-5i32..5, 1..12)) {
        let hooks = HookRegistry::new();
        for (index, priority) in priorities.iter().enumerate() {
            hooks
                .add_filter("order", &format!("cb-{index}"), *priority, move |mut seen: Vec<usize>| {
                    seen.push(index);
                    seen
                })
                .unwrap();
        }

        let seen = hooks.apply_filters("order", Vec::<usize>::new());

        let mut expected: Vec<usize> = (0..priorities.len()).collect();
        expected.sort_by_key(|index| priorities[*index]);
        prop_assert_eq!(seen, expected);
    }

    /// A removed action is not called, the rest still are.
    #[test]
    fn prop_removed_actions_do_not_run(count in 1usize..10, removed in 0usize..10) {
        let removed = removed % count;
        let hooks = HookRegistry::new();
        let calls = Arc::new(Mutex::new(Vec::new()));

        for index in 0..count {
            let calls = calls.clone();
            hooks
                .add_action("notify", &format!("cb-{index}"), DEFAULT_PRIORITY, move |_: &()| {
                    calls.lock().push(index);
                })
                .unwrap();
        }

        let removed_name = format!("cb-{removed}");
        prop_assert!(hooks.remove_action("notify", &removed_name));
        prop_assert!(!hooks.has_action("notify", Some(&removed_name)));
        hooks.do_action("notify", &());

        let expected: Vec<usize> = (0..count).filter(|index| *index != removed).collect();
        prop_assert_eq!(calls.lock().clone(), expected);
        prop_assert_eq!(hooks.did_action("notify"), 1);
    }
}

#[test]
fn test_action_receives_payload() {
    let hooks = HookRegistry::new();
    let seen = Arc::new(Mutex::new(String::new()));
    let sink = seen.clone();

    hooks
        .add_action("get_template_part_entry", "record", DEFAULT_PRIORITY, move |slugs: &Vec<String>| {
            *sink.lock() = slugs.join(",");
        })
        .unwrap();
    hooks.do_action("get_template_part_entry", &vec!["single".to_string(), "archive".to_string()]);

    assert_eq!(*seen.lock(), "single,archive");
}

#[test]
fn test_remove_unknown_callback_returns_false() {
    let hooks = HookRegistry::new();
    assert!(!hooks.remove_filter("missing", "id"));
    assert!(!hooks.has_filter("missing", None));
}

#[test]
fn test_introspection_lists_execution_order() {
    let hooks = HookRegistry::new();
    hooks.add_filter("h", "b", 20, |n: i32| n).unwrap();
    hooks.add_filter("h", "a", 5, |n: i32| n).unwrap();

    let ids: Vec<_> = hooks.filters("h").into_iter().map(|info| info.id).collect();
    assert_eq!(ids, vec!["a", "b"]);
}
