use super::*;

#[test]
fn extraction_names_the_uploaded_file() {
    let text = extract_reference_text("notes.pdf");
    assert!(text.starts_with("Sample text extracted from notes.pdf."));
}

#[test]
fn extraction_falls_back_for_unnamed_files() {
    let text = extract_reference_text("   ");
    assert!(text.starts_with("Sample text extracted from document."));
}
