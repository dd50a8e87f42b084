//! Mock article generator.
//!
//! DESIGN
//! ======
//! This is a placeholder for a real content engine: it assembles a
//! Markdown article from the prompt, the selected tone/style, and
//! length-scaled sections of pseudo-random filler prose. The word
//! selection is seeded from the inputs, so the same request always
//! produces the same article.

#[cfg(test)]
#[path = "article_gen_test.rs"]
mod article_gen_test;

use std::hash::{DefaultHasher, Hash, Hasher};

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Writing tone requested by the user.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Tone {
    #[default]
    Formal,
    Informal,
    Persuasive,
    Academic,
    Conversational,
}

impl Tone {
    pub const ALL: [Self; 5] =
        [Self::Formal, Self::Informal, Self::Persuasive, Self::Academic, Self::Conversational];

    #[must_use]
    pub fn value(self) -> &'static str {
        match self {
            Self::Formal => "formal",
            Self::Informal => "informal",
            Self::Persuasive => "persuasive",
            Self::Academic => "academic",
            Self::Conversational => "conversational",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Formal => "Formal",
            Self::Informal => "Informal",
            Self::Persuasive => "Persuasive",
            Self::Academic => "Academic",
            Self::Conversational => "Conversational",
        }
    }

    #[must_use]
    pub fn from_value(value: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|tone| tone.value() == value)
            .unwrap_or_default()
    }

    fn lead(self) -> &'static str {
        match self {
            Self::Formal => "A formal and professional",
            Self::Informal => "A casual and conversational",
            Self::Persuasive => "A compelling and persuasive",
            Self::Academic => "A scholarly and well-researched",
            Self::Conversational => "A friendly and approachable",
        }
    }
}

/// Output format requested by the user.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Style {
    Essay,
    #[default]
    Article,
    Report,
    Blog,
    Technical,
}

impl Style {
    pub const ALL: [Self; 5] =
        [Self::Essay, Self::Article, Self::Report, Self::Blog, Self::Technical];

    #[must_use]
    pub fn value(self) -> &'static str {
        match self {
            Self::Essay => "essay",
            Self::Article => "article",
            Self::Report => "report",
            Self::Blog => "blog",
            Self::Technical => "technical",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Essay => "Essay",
            Self::Article => "Article",
            Self::Report => "Report",
            Self::Blog => "Blog Post",
            Self::Technical => "Technical",
        }
    }

    #[must_use]
    pub fn from_value(value: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|style| style.value() == value)
            .unwrap_or_default()
    }

    fn lead(self) -> &'static str {
        match self {
            Self::Essay => "essay-style",
            Self::Article => "informative",
            Self::Report => "detailed report",
            Self::Blog => "engaging blog post",
            Self::Technical => "technical documentation",
        }
    }
}

/// Generation preferences from the writer form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ArticleOptions {
    pub tone: Tone,
    pub style: Style,
    /// Target length in words.
    pub length: u32,
}

impl Default for ArticleOptions {
    fn default() -> Self {
        Self { tone: Tone::Formal, style: Style::Article, length: 500 }
    }
}

const FILLER_WORDS: &[&str] = &[
    "article", "content", "writing", "analysis", "research", "data", "information", "study",
    "report", "findings", "results", "conclusion", "introduction", "method", "theory", "practice",
    "example", "illustration", "evidence", "argument", "point", "perspective", "approach",
    "technique", "strategy", "solution", "problem", "challenge", "opportunity", "development",
    "innovation", "progress", "advancement", "improvement",
];

/// Produce a Markdown article for the given prompt and preferences.
///
/// `reference` is the extracted text of an uploaded document, if any; its
/// presence adds a references section.
#[must_use]
pub fn generate_article(reference: Option<&str>, prompt: &str, options: &ArticleOptions) -> String {
    let mut rng = SmallRng::seed_from_u64(seed_for(prompt, options));
    let prompt = prompt.trim();

    let mut out = String::new();
    out.push_str(&format!("# {}...\n\n", first_words(prompt, 5)));
    out.push_str(&format!(
        "{} {} article on \"{}\".\n\n",
        options.tone.lead(),
        options.style.lead(),
        prompt
    ));

    for section in 1..=section_count(options.length) {
        out.push_str(&format!("## Section {section}\n\n"));
        let paragraphs = rng.random_range(2..=3);
        for _ in 0..paragraphs {
            let sentences = rng.random_range(3..8);
            let mut paragraph = String::new();
            for _ in 0..sentences {
                let word_count = rng.random_range(10..25);
                for i in 0..word_count {
                    if i > 0 {
                        paragraph.push(' ');
                    }
                    paragraph.push_str(FILLER_WORDS[rng.random_range(0..FILLER_WORDS.len())]);
                }
                paragraph.push_str(". ");
            }
            out.push_str(paragraph.trim_end());
            out.push_str("\n\n");
        }
    }

    if reference.is_some() {
        out.push_str(
            "## References\n\nThis article was written with reference to the uploaded document.\n\n",
        );
    }
    out.push_str("This article was generated with AI based on your prompt and preferences.\n");
    out
}

/// Suggest an article title from the prompt: the first five words, with
/// an ellipsis when the prompt is longer.
#[must_use]
pub fn title_from_prompt(prompt: &str) -> String {
    let words: Vec<&str> = prompt.split_whitespace().collect();
    if words.len() > 5 {
        format!("{}...", words[..5].join(" "))
    } else {
        prompt.trim().to_owned()
    }
}

fn first_words(prompt: &str, count: usize) -> String {
    prompt
        .split_whitespace()
        .take(count)
        .collect::<Vec<_>>()
        .join(" ")
}

fn section_count(length: u32) -> u32 {
    (length / 200).max(3)
}

fn seed_for(prompt: &str, options: &ArticleOptions) -> u64 {
    let mut hasher = DefaultHasher::new();
    prompt.hash(&mut hasher);
    options.tone.value().hash(&mut hasher);
    options.style.value().hash(&mut hasher);
    options.length.hash(&mut hasher);
    hasher.finish()
}
