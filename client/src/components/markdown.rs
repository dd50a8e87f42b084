//! Line-based renderer for generated article Markdown.
//!
//! The generator only ever emits `#`/`##` headings, blank separators,
//! and plain paragraphs, so a line classifier is all the rendering the
//! preview needs.

#[cfg(test)]
#[path = "markdown_test.rs"]
mod markdown_test;

use leptos::prelude::*;

/// What a single generated-article line renders as.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineKind {
    Title,
    Heading,
    Blank,
    Paragraph,
}

/// Classify one line of generated Markdown.
#[must_use]
pub fn classify_line(line: &str) -> LineKind {
    if line.starts_with("## ") {
        LineKind::Heading
    } else if line.starts_with("# ") {
        LineKind::Title
    } else if line.trim().is_empty() {
        LineKind::Blank
    } else {
        LineKind::Paragraph
    }
}

/// Render generated article Markdown line by line.
#[component]
pub fn ArticleMarkdown(content: String) -> impl IntoView {
    let lines = content
        .lines()
        .map(|line| match classify_line(line) {
            LineKind::Title => {
                view! { <h2 class="article__title">{line.trim_start_matches("# ").to_owned()}</h2> }
                    .into_any()
            }
            LineKind::Heading => {
                view! { <h3 class="article__heading">{line.trim_start_matches("## ").to_owned()}</h3> }
                    .into_any()
            }
            LineKind::Blank => view! { <br/> }.into_any(),
            LineKind::Paragraph => view! { <p class="article__text">{line.to_owned()}</p> }.into_any(),
        })
        .collect::<Vec<_>>();

    view! { <div class="article">{lines}</div> }
}
