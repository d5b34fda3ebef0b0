//! User-selectable templates for posts, terms and users

use serde::{Deserialize, Serialize};

/// Optional settings for an [`ObjectTemplate`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObjectTemplateArgs {
    /// Human-readable name. Defaults to the template name.
    pub label: Option<String>,
    /// File relative to the views directory. Defaults to `{name}.php`.
    pub filename: Option<String>,
    pub post_types: Vec<String>,
    pub taxonomies: Vec<String>,
    pub is_user_template: bool,
}

/// A named template that editors can assign to an object.
///
/// Fields are fixed at construction; re-register under the same name to
/// change them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ObjectTemplate {
    name: String,
    label: String,
    filename: String,
    post_types: Vec<String>,
    taxonomies: Vec<String>,
    is_user_template: bool,
}

impl ObjectTemplate {
    pub fn new(name: &str, args: ObjectTemplateArgs) -> Self {
        let name = sanitize_key(name);
        let label = args
            .label
            .filter(|label| !label.is_empty())
            .unwrap_or_else(|| name.clone());
        let filename = args
            .filename
            .filter(|filename| !filename.is_empty())
            .unwrap_or_else(|| format!("{name}.php"));

        Self {
            name,
            label,
            filename,
            post_types: args.post_types,
            taxonomies: args.taxonomies,
            is_user_template: args.is_user_template,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn post_types(&self) -> &[String] {
        &self.post_types
    }

    pub fn taxonomies(&self) -> &[String] {
        &self.taxonomies
    }

    pub fn is_post_template(&self) -> bool {
        !self.post_types.is_empty()
    }

    pub fn is_term_template(&self) -> bool {
        !self.taxonomies.is_empty()
    }

    pub fn is_user_template(&self) -> bool {
        self.is_user_template
    }

    pub fn supports_post_type(&self, post_type: &str) -> bool {
        self.post_types.iter().any(|supported| supported == post_type)
    }

    pub fn supports_taxonomy(&self, taxonomy: &str) -> bool {
        self.taxonomies.iter().any(|supported| supported == taxonomy)
    }
}

/// Lowercase, keeping only ASCII letters, digits, `_` and `-`.
pub fn sanitize_key(key: &str) -> String {
    key.chars()
        .map(|c| c.to_ascii_lowercase())
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '_' || *c == '-')
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_is_sanitized() {
        let template = ObjectTemplate::new("Full Width!", ObjectTemplateArgs::default());
        assert_eq!(template.name(), "fullwidth");
        assert_eq!(template.label(), "fullwidth");
        assert_eq!(template.filename(), "fullwidth.php");
    }

    #[test]
    fn test_explicit_args_are_kept() {
        let template = ObjectTemplate::new(
            "landing",
            ObjectTemplateArgs {
                label: Some("Landing Page".into()),
                filename: Some("templates/landing.php".into()),
                post_types: vec!["page".into()],
                ..ObjectTemplateArgs::default()
            },
        );

        assert_eq!(template.label(), "Landing Page");
        assert_eq!(template.filename(), "templates/landing.php");
        assert!(template.is_post_template());
        assert!(template.supports_post_type("page"));
        assert!(!template.is_term_template());
        assert!(!template.is_user_template());
    }

    #[test]
    fn test_sanitize_key_keeps_separators() {
        assert_eq!(sanitize_key("My_Template-2"), "my_template-2");
        assert_eq!(sanitize_key("café"), "caf");
    }
}
