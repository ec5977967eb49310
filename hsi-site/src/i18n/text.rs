//! Paragraph segmentation for long localized text blocks

/// Split a text block into paragraphs of renderable lines.
///
/// Paragraphs are separated by blank lines (`\n\n`); single newlines
/// inside a paragraph mark explicit line breaks. Empty paragraphs are
/// dropped, so empty input yields an empty sequence.
pub fn paragraphs(block: &str) -> Vec<Vec<&str>> {
    block
        .split("\n\n")
        .filter(|paragraph| !paragraph.is_empty())
        .map(|paragraph| paragraph.split('\n').collect())
        .collect()
}
