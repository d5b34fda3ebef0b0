//! Property-based tests for resolution behavior

use proptest::prelude::*;
use hybrid_container::*;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq)]
struct Service {
    value: i32,
    data: Vec<u8>,
}

fn arb_service() -> impl Strategy<Value = Service> {
    (any::<i32>(), prop::collection::vec(any::<u8>(), 0..64))
        .prop_map(|(value, data)| Service { value, data })
}

fn arb_abstract() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_/]{0,15}".prop_map(|s| s.to_string())
}

proptest! {
    /// Singletons always hand back the identical allocation.
    #[test]
    fn prop_singleton_identity(name in arb_abstract(), service in arb_service()) {
        let container = Container::new();
        let expected = service.clone();
        container.singleton(name.clone(), Some(Concrete::from_fn(move || service.clone())));

        let first = container.get::<Service>(&name).unwrap();
        let second = container.get::<Service>(&name).unwrap();
        let third = container.get::<Service>(&name).unwrap();

        prop_assert!(Arc::ptr_eq(&first, &second));
        prop_assert!(Arc::ptr_eq(&second, &third));
        prop_assert_eq!(&*first, &expected);
    }

    /// An alias registered before the binding resolves to the same object.
    #[test]
    fn prop_alias_transparency(
        name in arb_abstract(),
        alias in arb_abstract(),
        service in arb_service(),
    ) {
        prop_assume!(name != alias);
        let container = Container::new();
        container.alias(name.clone(), alias.clone());
        container.singleton(name.clone(), Some(Concrete::from_fn(move || service.clone())));

        for _ in 0..3 {
            let by_alias = container.get::<Service>(&alias).unwrap();
            let by_name = container.get::<Service>(&name).unwrap();
            prop_assert!(Arc::ptr_eq(&by_alias, &by_name));
        }
    }

    /// Extensions compose in registration order: E_n(...E_1(base)).
    #[test]
    fn prop_extension_ordering(suffixes in prop::collection::vec("[a-z]{1,4}", 1..6)) {
        let container = Container::new();
        container.bind("name", Some(Concrete::from_fn(|| String::from("base"))), false);

        let mut expected = String::from("base");
        for suffix in &suffixes {
            let suffix = suffix.clone();
            expected = format!("{suffix}({expected})");
            container.extend_with::<String, _>("name", move |s, _| format!("{suffix}({s})"));
        }

        prop_assert_eq!(&*container.make::<String>("name").unwrap(), &expected);
    }

    /// Transient bindings never share an allocation.
    #[test]
    fn prop_transient_uniqueness(service in arb_service()) {
        let container = Container::new();
        container.bind("svc", Some(Concrete::from_fn(move || service.clone())), false);

        let first = container.get::<Service>("svc").unwrap();
        let second = container.get::<Service>("svc").unwrap();
        prop_assert!(!Arc::ptr_eq(&first, &second));
        prop_assert_eq!(&*first, &*second);
    }
}
