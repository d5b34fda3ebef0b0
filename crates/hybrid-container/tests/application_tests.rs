//! Two-phase provider lifecycle
use std::path::PathBuf;
use std::sync::Arc;

use hybrid_container::*;
use parking_lot::Mutex;

fn paths() -> AppPaths {
    AppPaths {
        path: PathBuf::from("/wp-content/themes/hybrid/vendor/justintadlock/hybrid-core"),
        uri: "https://example.test/wp-content/themes/hybrid/vendor/justintadlock/hybrid-core".into(),
    }
}

/// Records every lifecycle call, in order.
#[derive(Default)]
struct Journal {
    calls: Mutex<Vec<String>>,
}

impl Journal {
    fn push(&self, entry: String) {
        self.calls.lock().push(entry);
    }
}

struct Recording {
    name: &'static str,
    journal: Arc<Journal>,
}

impl ServiceProvider for Recording {
    fn name(&self) -> &'static str {
        self.name
    }

    fn register(&self, _container: &Container) -> Result<()> {
        self.journal.push(format!("register:{}", self.name));
        Ok(())
    }

    fn boot(&self, _container: &Container) -> Result<()> {
        self.journal.push(format!("boot:{}", self.name));
        Ok(())
    }
}

#[test]
fn test_every_register_runs_before_any_boot() {
    let journal = Arc::new(Journal::default());
    let providers: Vec<Arc<dyn ServiceProvider>> = ["config", "templates", "view"]
        .into_iter()
        .map(|name| {
            Arc::new(Recording {
                name,
                journal: journal.clone(),
            }) as Arc<dyn ServiceProvider>
        })
        .collect();

    let app = Application::new(paths(), providers).unwrap();

    assert_eq!(
        *journal.calls.lock(),
        vec![
            "register:config",
            "register:templates",
            "register:view",
            "boot:config",
            "boot:templates",
            "boot:view",
        ]
    );
    assert_eq!(app.provider_names(), vec!["config", "templates", "view"]);
}

struct BindsX;

impl ServiceProvider for BindsX {
    fn name(&self) -> &'static str {
        "a"
    }

    fn register(&self, container: &Container) -> Result<()> {
        container.bind("x", Some(Concrete::value(1i32)), false);
        Ok(())
    }
}

struct ReadsX {
    seen: Arc<Mutex<Option<i32>>>,
}

impl ServiceProvider for ReadsX {
    fn name(&self) -> &'static str {
        "b"
    }

    fn register(&self, _container: &Container) -> Result<()> {
        Ok(())
    }

    fn boot(&self, container: &Container) -> Result<()> {
        *self.seen.lock() = Some(*container.make::<i32>("x")?);
        Ok(())
    }
}

#[test]
fn test_boot_sees_bindings_from_other_providers() {
    let seen = Arc::new(Mutex::new(None));
    let app = Application::new(
        paths(),
        vec![Arc::new(BindsX), Arc::new(ReadsX { seen: seen.clone() })],
    )
    .unwrap();

    assert_eq!(*seen.lock(), Some(1));
    assert_eq!(*app.make::<i32>("x").unwrap(), 1);
}

#[test]
fn test_boot_sees_bindings_from_later_providers() {
    let seen = Arc::new(Mutex::new(None));
    // The reader is declared first; its boot still observes the binding.
    Application::new(
        paths(),
        vec![Arc::new(ReadsX { seen: seen.clone() }), Arc::new(BindsX)],
    )
    .unwrap();

    assert_eq!(*seen.lock(), Some(1));
}

#[test]
fn test_boot_failure_names_provider() {
    let seen = Arc::new(Mutex::new(None));
    let err = Application::new(paths(), vec![Arc::new(ReadsX { seen })]).unwrap_err();

    assert!(matches!(err, ContainerError::Provider { ref provider, .. } if provider == "b"));
}
