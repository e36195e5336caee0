use scraper::Html;

/// Decodes HTML entities (`&quot;`, `&#039;`, `&amp;` ...) by parsing the text as a fragment.
pub fn decode_entities(text: &str) -> String {
    if !text.contains('&') && !text.contains('<') {
        return text.to_string();
    }
    Html::parse_fragment(text)
        .root_element()
        .text()
        .collect::<String>()
}
