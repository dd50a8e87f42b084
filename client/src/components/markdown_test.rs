use super::*;

#[test]
fn classify_line_detects_title_and_heading() {
    assert_eq!(classify_line("# A title..."), LineKind::Title);
    assert_eq!(classify_line("## Section 1"), LineKind::Heading);
}

#[test]
fn classify_line_detects_blank_and_paragraph() {
    assert_eq!(classify_line(""), LineKind::Blank);
    assert_eq!(classify_line("   "), LineKind::Blank);
    assert_eq!(classify_line("Plain prose."), LineKind::Paragraph);
}

#[test]
fn heading_check_runs_before_title_check() {
    // "## " also starts with "# ", so order matters.
    assert_eq!(classify_line("## nested"), LineKind::Heading);
}
