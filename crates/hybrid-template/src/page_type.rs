//! Page types and the order they are tried in

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::context::Condition;

/// A template type. Each has its own candidate list and filter hooks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PageType {
    Index,
    NotFound,
    Archive,
    Author,
    Category,
    Tag,
    Taxonomy,
    Date,
    Embed,
    Home,
    FrontPage,
    Page,
    Paged,
    Search,
    Single,
    Singular,
    Attachment,
}

/// Stages of template resolution, in order. A stage runs when its
/// condition holds; the index type runs after all of them.
pub const PIPELINE: [(Condition, PageType); 17] = [
    (Condition::Embed, PageType::Embed),
    (Condition::NotFound, PageType::NotFound),
    (Condition::Search, PageType::Search),
    (Condition::FrontPage, PageType::FrontPage),
    (Condition::Home, PageType::Home),
    (Condition::PostTypeArchive, PageType::Archive),
    (Condition::Taxonomy, PageType::Taxonomy),
    (Condition::Attachment, PageType::Attachment),
    (Condition::Single, PageType::Single),
    (Condition::Page, PageType::Page),
    (Condition::Singular, PageType::Singular),
    (Condition::Category, PageType::Category),
    (Condition::Tag, PageType::Tag),
    (Condition::Author, PageType::Author),
    (Condition::Date, PageType::Date),
    (Condition::Archive, PageType::Archive),
    (Condition::Paged, PageType::Paged),
];

impl PageType {
    pub const ALL: [PageType; 17] = [
        PageType::Index,
        PageType::NotFound,
        PageType::Archive,
        PageType::Author,
        PageType::Category,
        PageType::Tag,
        PageType::Taxonomy,
        PageType::Date,
        PageType::Embed,
        PageType::Home,
        PageType::FrontPage,
        PageType::Page,
        PageType::Paged,
        PageType::Search,
        PageType::Single,
        PageType::Singular,
        PageType::Attachment,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PageType::Index => "index",
            PageType::NotFound => "404",
            PageType::Archive => "archive",
            PageType::Author => "author",
            PageType::Category => "category",
            PageType::Tag => "tag",
            PageType::Taxonomy => "taxonomy",
            PageType::Date => "date",
            PageType::Embed => "embed",
            PageType::Home => "home",
            PageType::FrontPage => "frontpage",
            PageType::Page => "page",
            PageType::Paged => "paged",
            PageType::Search => "search",
            PageType::Single => "single",
            PageType::Singular => "singular",
            PageType::Attachment => "attachment",
        }
    }

    /// Filter applied to this type's candidate list.
    pub fn hierarchy_hook(&self) -> String {
        format!("{}_template_hierarchy", self.as_str())
    }

    /// Filter applied to the file located for this type.
    pub fn template_hook(&self) -> String {
        format!("{}_template", self.as_str())
    }
}

impl fmt::Display for PageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown page type: {0}")]
pub struct UnknownPageType(pub String);

impl FromStr for PageType {
    type Err = UnknownPageType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PageType::ALL
            .into_iter()
            .find(|page_type| page_type.as_str() == s)
            .ok_or_else(|| UnknownPageType(s.to_string()))
    }
}
