//! Auto-wiring of registered classes
use std::sync::Arc;

use hybrid_container::*;

struct Transport {
    host: String,
}

impl Buildable for Transport {
    fn class_name() -> &'static str {
        "Transport"
    }

    fn parameters() -> Vec<Parameter> {
        vec![Parameter::new("host").default_value("localhost".to_string())]
    }

    fn build(args: &Arguments) -> Result<Self> {
        Ok(Self {
            host: (*args.get::<String>("host")?).clone(),
        })
    }
}

struct Mailer {
    transport: Arc<Transport>,
    retries: u8,
}

impl Buildable for Mailer {
    fn class_name() -> &'static str {
        "Mailer"
    }

    fn parameters() -> Vec<Parameter> {
        vec![
            Parameter::new("transport").class("Transport"),
            Parameter::new("retries").default_value(3u8),
        ]
    }

    fn build(args: &Arguments) -> Result<Self> {
        Ok(Self {
            transport: args.get("transport")?,
            retries: *args.get::<u8>("retries")?,
        })
    }
}

struct Needy;

impl Buildable for Needy {
    fn class_name() -> &'static str {
        "Needy"
    }

    fn parameters() -> Vec<Parameter> {
        vec![Parameter::new("secret")]
    }

    fn build(_args: &Arguments) -> Result<Self> {
        Ok(Needy)
    }
}

// Discovered at `Container::new()` without an explicit registration.
struct Clock;

impl Buildable for Clock {
    fn class_name() -> &'static str {
        "Clock"
    }

    fn build(_args: &Arguments) -> Result<Self> {
        Ok(Clock)
    }
}

inventory::submit! {
    ClassRegistration::new(ClassDescriptor::of::<Clock>)
}

fn container() -> Container {
    let container = Container::new();
    container.register_class::<Transport>();
    container.register_class::<Mailer>();
    container.register_class::<Needy>();
    container
}

#[test]
fn test_unbound_class_is_auto_wired() {
    let container = container();

    let mailer = container.get::<Mailer>("Mailer").unwrap();
    assert_eq!(mailer.transport.host, "localhost");
    assert_eq!(mailer.retries, 3);
}

#[test]
fn test_dependency_uses_existing_binding() {
    let container = container();
    container.singleton("Transport", None);

    let mailer = container.get::<Mailer>("Mailer").unwrap();
    let transport = container.get::<Transport>("Transport").unwrap();
    assert!(Arc::ptr_eq(&mailer.transport, &transport));
}

#[test]
fn test_supplied_parameters_take_precedence() {
    let container = container();
    let mut params = Parameters::new();
    params.insert("retries".to_string(), Arc::new(9u8));

    let mailer = container.make_with::<Mailer>("Mailer", &params).unwrap();
    assert_eq!(mailer.retries, 9);
}

#[test]
fn test_abstract_bound_to_class() {
    let container = container();
    container.singleton("mailer", Some(Concrete::class("Mailer")));

    let first = container.get::<Mailer>("mailer").unwrap();
    let second = container.get::<Mailer>("mailer").unwrap();
    assert!(Arc::ptr_eq(&first, &second));
}

#[test]
fn test_unsatisfied_parameter_fails_loudly() {
    let container = container();

    match container.resolve("Needy", &Parameters::new()) {
        Err(ContainerError::Unresolvable {
            abstract_name,
            parameter,
        }) => {
            assert_eq!(abstract_name, "Needy");
            assert_eq!(parameter, "secret");
        }
        other => panic!("expected unresolvable, got {:?}", other.map(|o| o.is_some())),
    }
}

#[test]
fn test_inventory_classes_are_known() {
    let container = Container::new();
    assert!(container.get::<Clock>("Clock").is_some());
}
