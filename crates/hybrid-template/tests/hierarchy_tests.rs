//! Template hierarchy resolution against on-disk themes
use std::path::{Path, PathBuf};
use std::sync::Arc;

use hybrid_hooks::{HookRegistry, DEFAULT_PRIORITY};
use hybrid_template::*;
use tempfile::TempDir;

struct Theme {
    _dir: TempDir,
    root: PathBuf,
}

impl Theme {
    fn with_views(files: &[&str]) -> Self {
        let dir = TempDir::new().unwrap();
        let root = dir.path().to_path_buf();
        for file in files {
            touch(&root.join("resources/views").join(file));
        }
        Self { _dir: dir, root }
    }

    fn view(&self, file: &str) -> PathBuf {
        self.root.join("resources/views").join(file)
    }
}

fn touch(path: &Path) {
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, "").unwrap();
}

fn hierarchy(hooks: &Arc<HookRegistry>, dirs: Vec<PathBuf>) -> Hierarchy {
    let locator = Arc::new(ThemeLocator::new(dirs, "resources/views", hooks.clone()));
    Hierarchy::new(hooks.clone(), locator)
}

#[test]
fn test_custom_template_leads_single_hierarchy() {
    let hooks = Arc::new(HookRegistry::new());
    let theme = Theme::with_views(&["index.php"]);
    let hierarchy = hierarchy(&hooks, vec![theme.root.clone()]);

    let post = PostContext::new(12, "book", "dune").with_template("custom-tpl.php");
    hierarchy.resolve(&PageContext::single(post));

    let recorded = hierarchy.hierarchy();
    assert_eq!(recorded[0], "custom-tpl");
    assert_eq!(recorded[1], "single-book-12");
}

#[test]
fn test_first_located_template_is_kept() {
    let hooks = Arc::new(HookRegistry::new());
    let theme = Theme::with_views(&["single.php", "singular.php", "index.php"]);
    let hierarchy = hierarchy(&hooks, vec![theme.root.clone()]);

    let chosen = hierarchy.resolve(&PageContext::single(PostContext::new(1, "post", "hello")));

    assert_eq!(chosen, Some(theme.view("single.php")));
    assert_eq!(hierarchy.located(), Some(theme.view("single.php")));
}

#[test]
fn test_every_matching_stage_is_recorded_with_duplicates() {
    let hooks = Arc::new(HookRegistry::new());
    let theme = Theme::with_views(&["single.php"]);
    let hierarchy = hierarchy(&hooks, vec![theme.root.clone()]);

    hierarchy.resolve(&PageContext::single(PostContext::new(1, "post", "")));

    assert_eq!(
        hierarchy.hierarchy(),
        vec![
            "single-post-1",
            "post-1",
            "single-post",
            "post",
            "single",
            "singular",
            "index",
        ]
    );

    let attachment = PostContext::new(4, "attachment", "photo");
    hierarchy.resolve(&PageContext::attachment(attachment));
    let recorded = hierarchy.hierarchy();
    // Attachment and single stages both produce the same list.
    assert_eq!(recorded.iter().filter(|name| *name == "single-attachment").count(), 2);
}

#[test]
fn test_child_theme_wins_per_candidate() {
    let hooks = Arc::new(HookRegistry::new());
    let child = Theme::with_views(&["single.php"]);
    let parent = Theme::with_views(&["single-post.php", "single.php"]);
    let hierarchy = hierarchy(&hooks, vec![child.root.clone(), parent.root.clone()]);

    let chosen = hierarchy.resolve(&PageContext::single(PostContext::new(1, "post", "hello")));

    // The parent's more specific candidate comes first in the list.
    assert_eq!(chosen, Some(parent.view("single-post.php")));

    std::fs::remove_file(parent.view("single-post.php")).unwrap();
    let chosen = hierarchy.resolve(&PageContext::single(PostContext::new(1, "post", "hello")));
    assert_eq!(chosen, Some(child.view("single.php")));
}

#[test]
fn test_nothing_found_falls_through() {
    let hooks = Arc::new(HookRegistry::new());
    let theme = Theme::with_views(&[]);
    let hierarchy = hierarchy(&hooks, vec![theme.root.clone()]);

    assert_eq!(hierarchy.resolve(&PageContext::not_found()), None);
    assert_eq!(hierarchy.hierarchy(), vec!["404", "index"]);
}

#[test]
fn test_type_hierarchy_filter_changes_candidates() {
    let hooks = Arc::new(HookRegistry::new());
    let theme = Theme::with_views(&["search-results.php", "index.php"]);
    hooks
        .add_filter("search_template_hierarchy", "results", DEFAULT_PRIORITY, |mut list: Vec<String>| {
            list.insert(0, "search-results.php".to_string());
            list
        })
        .unwrap();
    let hierarchy = hierarchy(&hooks, vec![theme.root.clone()]);

    let chosen = hierarchy.resolve(&PageContext::search());

    assert_eq!(chosen, Some(theme.view("search-results.php")));
    assert_eq!(hierarchy.hierarchy(), vec!["search-results", "search", "index"]);
}

#[test]
fn test_template_include_filter_has_final_say() {
    let hooks = Arc::new(HookRegistry::new());
    let theme = Theme::with_views(&["index.php"]);
    hooks
        .add_filter(TEMPLATE_INCLUDE_HOOK, "maintenance", DEFAULT_PRIORITY, |_: Option<PathBuf>| {
            Some(PathBuf::from("/maintenance.php"))
        })
        .unwrap();
    let hierarchy = hierarchy(&hooks, vec![theme.root.clone()]);

    let chosen = hierarchy.resolve(&PageContext::home());

    assert_eq!(chosen, Some(PathBuf::from("/maintenance.php")));
    assert_eq!(hierarchy.located(), Some(theme.view("index.php")));
}

#[test]
fn test_type_template_filter_can_reject_a_match() {
    let hooks = Arc::new(HookRegistry::new());
    let theme = Theme::with_views(&["single.php", "singular.php"]);
    hooks
        .add_filter("single_template", "reject", DEFAULT_PRIORITY, |_: Option<PathBuf>| None)
        .unwrap();
    let hierarchy = hierarchy(&hooks, vec![theme.root.clone()]);

    let chosen = hierarchy.resolve(&PageContext::single(PostContext::new(1, "post", "x")));
    assert_eq!(chosen, Some(theme.view("singular.php")));
}

#[test]
fn test_posts_front_page_skips_front_page_template() {
    let hooks = Arc::new(HookRegistry::new());
    let theme = Theme::with_views(&["front-page.php", "home.php"]);
    let hierarchy = hierarchy(&hooks, vec![theme.root.clone()]);

    let chosen = hierarchy.resolve(&PageContext::posts_front_page());

    assert_eq!(chosen, Some(theme.view("home.php")));
    assert!(!hierarchy.hierarchy().contains(&"front-page".to_string()));
}

#[test]
fn test_record_is_reset_per_resolution() {
    let hooks = Arc::new(HookRegistry::new());
    let theme = Theme::with_views(&["search.php"]);
    let hierarchy = hierarchy(&hooks, vec![theme.root.clone()]);

    hierarchy.resolve(&PageContext::search());
    assert!(hierarchy.located().is_some());

    hierarchy.resolve(&PageContext::not_found());
    assert_eq!(hierarchy.located(), None);
    assert_eq!(hierarchy.context(), Some(PageContext::not_found()));
}
