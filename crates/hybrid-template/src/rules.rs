//! Candidate file lists per page type
//!
//! Front page, singular (single, page, attachment), term (taxonomy,
//! category, tag), author and date types get richer lists than the host
//! defaults. Every other type keeps the host's default list.

use crate::context::{Condition, DateQuery, PageContext};
use crate::page_type::PageType;

/// Ordered candidate file names for `page_type`, most specific first.
pub fn candidates(page_type: PageType, context: &PageContext) -> Vec<String> {
    match page_type {
        PageType::FrontPage => front_page(context),
        PageType::Single | PageType::Page | PageType::Attachment => singular(context),
        PageType::Taxonomy | PageType::Category | PageType::Tag => term(context),
        PageType::Author => author(context),
        PageType::Date => date(&context.date),
        PageType::Index => vec!["index.php".into()],
        PageType::NotFound => vec!["404.php".into()],
        PageType::Search => vec!["search.php".into()],
        PageType::Home => vec!["home.php".into(), "index.php".into()],
        PageType::Paged => vec!["paged.php".into()],
        PageType::Singular => vec!["singular.php".into()],
        PageType::Archive => archive(context),
        PageType::Embed => embed(context),
    }
}

/// Suppressed entirely when the posts index is on the front page.
fn front_page(context: &PageContext) -> Vec<String> {
    if context.is(Condition::Home) {
        return Vec::new();
    }

    let mut templates = Vec::new();
    if let Some(template) = context.post.as_ref().and_then(|post| post.custom_template()) {
        templates.push(template.to_string());
    }
    templates.push("front-page.php".into());
    templates
}

fn singular(context: &PageContext) -> Vec<String> {
    let Some(post) = context.post.as_ref() else {
        return vec!["single.php".into()];
    };
    let post_type = &post.post_type;
    let mut templates = Vec::new();

    if let Some(template) = post.custom_template() {
        templates.push(template.to_string());
    }

    if context.is(Condition::Attachment) {
        if let Some(mime_type) = post.mime_type.as_deref().filter(|mime| !mime.is_empty()) {
            match mime_type.split_once('/') {
                Some((kind, subtype)) => {
                    templates.push(format!("attachment-{kind}-{subtype}.php"));
                    templates.push(format!("attachment-{subtype}.php"));
                    templates.push(format!("attachment-{kind}.php"));
                }
                None => templates.push(format!("attachment-{mime_type}.php")),
            }
        }
    } else {
        templates.push(format!("single-{post_type}-{}.php", post.id));
        templates.push(format!("{post_type}-{}.php", post.id));

        if !post.slug.is_empty() {
            templates.push(format!("single-{post_type}-{}.php", post.slug));
            templates.push(format!("{post_type}-{}.php", post.slug));
        }
    }

    templates.push(format!("single-{post_type}.php"));
    templates.push(format!("{post_type}.php"));
    templates.push("single.php".into());
    templates
}

fn term(context: &PageContext) -> Vec<String> {
    let mut templates = Vec::new();

    if let Some(term) = context.term.as_ref() {
        let taxonomy = &term.taxonomy;
        let slug = if taxonomy == "post_format" {
            term.slug.strip_prefix("post-format-").unwrap_or(&term.slug)
        } else {
            term.slug.as_str()
        };

        templates.push(format!("taxonomy-{taxonomy}-{slug}.php"));
        templates.push(format!("taxonomy-{taxonomy}.php"));
    }

    templates.push("taxonomy.php".into());
    templates
}

fn author(context: &PageContext) -> Vec<String> {
    let mut templates = Vec::new();

    if let Some(user) = context.author.as_ref() {
        templates.push(format!("user-{}.php", user.nicename));
        templates.extend(user.roles.iter().map(|role| format!("user-role-{role}.php")));
    }

    templates.push("user.php".into());
    templates.push("author.php".into());
    templates
}

fn date(query: &DateQuery) -> Vec<String> {
    let mut templates = Vec::new();

    if query.minute.is_some() || query.hour.is_some() {
        if query.minute.is_some() {
            templates.push("minute.php".into());
        } else {
            templates.push("hour.php".into());
        }
        templates.push("time.php".into());
    } else if query.day.is_some() {
        templates.push("day.php".into());
    } else if query.week.is_some() {
        templates.push("week.php".into());
    } else if query.month.is_some() {
        templates.push("month.php".into());
    } else if query.year.is_some() {
        templates.push("year.php".into());
    }

    templates.push("date.php".into());
    templates
}

fn archive(context: &PageContext) -> Vec<String> {
    let mut templates: Vec<String> = context
        .post_types
        .iter()
        .map(|post_type| format!("archive-{post_type}.php"))
        .collect();
    templates.push("archive.php".into());
    templates
}

fn embed(context: &PageContext) -> Vec<String> {
    let mut templates = Vec::new();

    if let Some(post) = context.post.as_ref() {
        if let Some(format) = post.format.as_deref() {
            templates.push(format!("embed-{}-{format}.php", post.post_type));
        }
        templates.push(format!("embed-{}.php", post.post_type));
    }

    templates.push("embed.php".into());
    templates
}
