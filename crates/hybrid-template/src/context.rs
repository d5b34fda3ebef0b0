//! Request-scoped page context
//!
//! A [`PageContext`] describes what the current request is showing: which
//! page conditions hold (single post, category archive, search, ...) and the
//! queried object those conditions refer to. It is built once by the host
//! and passed explicitly to [`Hierarchy::resolve`](crate::Hierarchy::resolve).

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// A page condition, as reported by the host's query.
///
/// Several conditions usually hold at once: a single post is also
/// singular, a category archive is also an archive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    Embed,
    NotFound,
    Search,
    FrontPage,
    Home,
    PostTypeArchive,
    Taxonomy,
    Attachment,
    Single,
    Page,
    Singular,
    Category,
    Tag,
    Author,
    Date,
    Archive,
    Paged,
}

/// The queried post for singular views and embeds.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PostContext {
    pub id: u64,
    pub post_type: String,
    /// Decoded post name. May be empty for drafts.
    pub slug: String,
    /// Custom template assigned to the post, e.g. `custom-tpl.php`.
    pub template: Option<String>,
    /// MIME type, attachments only.
    pub mime_type: Option<String>,
    /// Post format, e.g. `gallery`.
    pub format: Option<String>,
}

impl PostContext {
    pub fn new(id: u64, post_type: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            id,
            post_type: post_type.into(),
            slug: slug.into(),
            ..Self::default()
        }
    }

    pub fn with_template(mut self, template: impl Into<String>) -> Self {
        self.template = Some(template.into());
        self
    }

    pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = Some(mime_type.into());
        self
    }

    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    /// The assigned custom template, ignoring the `default` placeholder.
    pub fn custom_template(&self) -> Option<&str> {
        self.template
            .as_deref()
            .filter(|template| !template.is_empty() && *template != "default")
    }
}

/// The queried term for taxonomy, category and tag archives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermContext {
    pub taxonomy: String,
    pub slug: String,
}

impl TermContext {
    pub fn new(taxonomy: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            taxonomy: taxonomy.into(),
            slug: slug.into(),
        }
    }
}

/// The queried user for author archives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserContext {
    pub nicename: String,
    pub roles: Vec<String>,
}

impl UserContext {
    pub fn new(nicename: impl Into<String>, roles: Vec<String>) -> Self {
        Self {
            nicename: nicename.into(),
            roles,
        }
    }
}

/// Date archive query variables. A field is present when it was queried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DateQuery {
    pub year: Option<u32>,
    pub month: Option<u32>,
    pub week: Option<u32>,
    pub day: Option<u32>,
    pub hour: Option<u32>,
    pub minute: Option<u32>,
}

/// Everything the template hierarchy needs to know about the current request.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PageContext {
    conditions: BTreeSet<Condition>,
    pub post: Option<PostContext>,
    pub term: Option<TermContext>,
    pub author: Option<UserContext>,
    pub date: DateQuery,
    /// Post types queried by an archive, most specific first.
    pub post_types: Vec<String>,
}

impl PageContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a condition.
    pub fn with(mut self, condition: Condition) -> Self {
        self.conditions.insert(condition);
        self
    }

    pub fn with_post(mut self, post: PostContext) -> Self {
        self.post = Some(post);
        self
    }

    pub fn with_post_types(mut self, post_types: Vec<String>) -> Self {
        self.post_types = post_types;
        self
    }

    /// Whether `condition` holds for this request.
    pub fn is(&self, condition: Condition) -> bool {
        self.conditions.contains(&condition)
    }

    pub fn conditions(&self) -> impl Iterator<Item = Condition> + '_ {
        self.conditions.iter().copied()
    }

    /// Post type of the queried post, if any.
    pub fn post_type(&self) -> Option<&str> {
        self.post.as_ref().map(|post| post.post_type.as_str())
    }

    /// A single post of any type other than `page` and `attachment`.
    pub fn single(post: PostContext) -> Self {
        Self::new()
            .with(Condition::Single)
            .with(Condition::Singular)
            .with_post(post)
    }

    pub fn page(post: PostContext) -> Self {
        Self::new()
            .with(Condition::Page)
            .with(Condition::Singular)
            .with_post(post)
    }

    /// Attachments are single posts as well.
    pub fn attachment(post: PostContext) -> Self {
        Self::new()
            .with(Condition::Attachment)
            .with(Condition::Single)
            .with(Condition::Singular)
            .with_post(post)
    }

    /// A static page shown on the front page.
    pub fn front_page(post: PostContext) -> Self {
        Self::page(post).with(Condition::FrontPage)
    }

    /// The posts index shown on the front page.
    pub fn posts_front_page() -> Self {
        Self::new().with(Condition::FrontPage).with(Condition::Home)
    }

    /// The posts index on its own page.
    pub fn home() -> Self {
        Self::new().with(Condition::Home)
    }

    pub fn embed(post: PostContext) -> Self {
        Self::single(post).with(Condition::Embed)
    }

    /// A term archive. Categories and tags get their dedicated condition.
    pub fn term(term: TermContext) -> Self {
        let condition = match term.taxonomy.as_str() {
            "category" => Condition::Category,
            "post_tag" => Condition::Tag,
            _ => Condition::Taxonomy,
        };
        let mut context = Self::new().with(condition).with(Condition::Archive);
        context.term = Some(term);
        context
    }

    pub fn author(user: UserContext) -> Self {
        let mut context = Self::new().with(Condition::Author).with(Condition::Archive);
        context.author = Some(user);
        context
    }

    pub fn date(date: DateQuery) -> Self {
        let mut context = Self::new().with(Condition::Date).with(Condition::Archive);
        context.date = date;
        context
    }

    pub fn post_type_archive(post_type: impl Into<String>) -> Self {
        Self::new()
            .with(Condition::PostTypeArchive)
            .with(Condition::Archive)
            .with_post_types(vec![post_type.into()])
    }

    pub fn search() -> Self {
        Self::new().with(Condition::Search)
    }

    pub fn not_found() -> Self {
        Self::new().with(Condition::NotFound)
    }
}
