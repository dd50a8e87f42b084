use super::*;

fn options(length: u32) -> ArticleOptions {
    ArticleOptions { tone: Tone::Formal, style: Style::Article, length }
}

#[test]
fn generation_is_deterministic_for_identical_inputs() {
    let a = generate_article(None, "The future of remote work", &options(500));
    let b = generate_article(None, "The future of remote work", &options(500));
    assert_eq!(a, b);
}

#[test]
fn different_prompts_produce_different_articles() {
    let a = generate_article(None, "The future of remote work", &options(500));
    let b = generate_article(None, "A history of typography", &options(500));
    assert_ne!(a, b);
}

#[test]
fn article_opens_with_a_heading_and_lead_sentence() {
    let article = generate_article(None, "The future of remote work in Europe", &options(400));
    assert!(article.starts_with("# The future of remote work..."));
    assert!(article.contains("A formal and professional informative article on"));
}

#[test]
fn section_count_scales_with_requested_length() {
    let short = generate_article(None, "topic", &options(200));
    let long = generate_article(None, "topic", &options(2000));
    assert_eq!(short.matches("## Section").count(), 3);
    assert_eq!(long.matches("## Section").count(), 10);
}

#[test]
fn short_lengths_still_get_three_sections() {
    let article = generate_article(None, "topic", &options(100));
    assert_eq!(article.matches("## Section").count(), 3);
}

#[test]
fn reference_document_adds_a_references_section() {
    let without = generate_article(None, "topic", &options(300));
    let with = generate_article(Some("extracted text"), "topic", &options(300));
    assert!(!without.contains("## References"));
    assert!(with.contains("## References"));
}

#[test]
fn tone_and_style_change_the_lead_sentence() {
    let opts = ArticleOptions { tone: Tone::Persuasive, style: Style::Blog, length: 300 };
    let article = generate_article(None, "topic", &opts);
    assert!(article.contains("A compelling and persuasive engaging blog post article on"));
}

#[test]
fn title_from_prompt_truncates_long_prompts() {
    assert_eq!(
        title_from_prompt("one two three four five six seven"),
        "one two three four five..."
    );
    assert_eq!(title_from_prompt("short prompt"), "short prompt");
}

#[test]
fn tone_and_style_round_trip_their_form_values() {
    for tone in Tone::ALL {
        assert_eq!(Tone::from_value(tone.value()), tone);
    }
    for style in Style::ALL {
        assert_eq!(Style::from_value(style.value()), style);
    }
    assert_eq!(Tone::from_value("bogus"), Tone::Formal);
    assert_eq!(Style::from_value("bogus"), Style::Article);
}
