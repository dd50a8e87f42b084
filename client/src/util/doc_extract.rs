//! Mock reference-document text extraction.
//!
//! No real PDF parsing happens anywhere in this system; the writer page
//! only needs a stand-in extraction string to thread through generation.

#[cfg(test)]
#[path = "doc_extract_test.rs"]
mod doc_extract_test;

/// Produce the placeholder extraction for an uploaded document.
#[must_use]
pub fn extract_reference_text(file_name: &str) -> String {
    let name = file_name.trim();
    let name = if name.is_empty() { "document" } else { name };
    format!(
        "Sample text extracted from {name}. A production build would extract the document's real content here."
    )
}
