//! Object template registry
use std::collections::BTreeMap;

use hybrid_template::*;

fn post_template(label: &str, post_types: &[&str]) -> ObjectTemplateArgs {
    ObjectTemplateArgs {
        label: Some(label.to_string()),
        post_types: post_types.iter().map(|s| s.to_string()).collect(),
        ..ObjectTemplateArgs::default()
    }
}

#[test]
fn test_add_overwrites_in_place() {
    let templates = Templates::new();
    templates.add("landing", post_template("Landing", &["page"]));
    templates.add("wide", post_template("Wide", &["post"]));
    templates.add("Landing", post_template("Landing v2", &["page"]));

    let names: Vec<_> = templates.all().iter().map(|t| t.name().to_string()).collect();
    assert_eq!(names, vec!["landing", "wide"]);
    assert_eq!(templates.get("landing").unwrap().label(), "Landing v2");
}

#[test]
fn test_remove_and_has() {
    let templates = Templates::new();
    templates.add("landing", ObjectTemplateArgs::default());

    assert!(templates.has("LANDING"));
    assert_eq!(templates.remove("landing").map(|t| t.filename().to_string()), Some("landing.php".into()));
    assert!(!templates.has("landing"));
    assert!(templates.remove("landing").is_none());
    assert!(templates.is_empty());
}

#[test]
fn test_object_type_queries() {
    let templates = Templates::new();
    templates.add("landing", post_template("Landing", &["page"]));
    templates.add(
        "genre-grid",
        ObjectTemplateArgs {
            taxonomies: vec!["genre".into()],
            ..ObjectTemplateArgs::default()
        },
    );
    templates.add(
        "profile",
        ObjectTemplateArgs {
            is_user_template: true,
            ..ObjectTemplateArgs::default()
        },
    );

    assert_eq!(templates.post_templates("page").len(), 1);
    assert!(templates.post_templates("post").is_empty());
    assert_eq!(templates.term_templates("genre")[0].name(), "genre-grid");
    assert_eq!(templates.user_templates()[0].name(), "profile");
    assert_eq!(templates.len(), 3);
}

#[test]
fn test_theme_templates_merges_labels() {
    let templates = Templates::new();
    templates.add("landing", post_template("Landing Page", &["page"]));
    templates.add("wide", post_template("Wide", &["post"]));

    let mut existing = BTreeMap::new();
    existing.insert("legacy.php".to_string(), "Legacy".to_string());

    let merged = templates.theme_templates(ThemeTemplates {
        post_type: "page".into(),
        templates: existing,
    });

    assert_eq!(merged.templates.len(), 2);
    assert_eq!(merged.templates["landing.php"], "Landing Page");
    assert_eq!(merged.templates["legacy.php"], "Legacy");
}
