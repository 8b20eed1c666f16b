//! Snapshot testing assertions for lint results
//!
//! Items are formatted consistently for readable snapshots.

/// Format a list of items for snapshot testing, one numbered item per line.
///
/// # Example
///
/// ```ignore
/// use ui5lint_test_utils::assertions::format_items;
///
/// let results = context.into_results();
/// insta::assert_snapshot!(format_items(&results[0].messages));
/// ```
pub fn format_items<D: std::fmt::Debug>(items: &[D]) -> String {
    if items.is_empty() {
        return String::from("(none)");
    }

    items
        .iter()
        .enumerate()
        .map(|(i, item)| format!("[{}] {item:?}", i + 1))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format texts only, e.g. the `message` of each reported message.
pub fn format_texts<T: AsRef<str>>(texts: &[T]) -> String {
    if texts.is_empty() {
        return String::from("(none)");
    }

    texts
        .iter()
        .enumerate()
        .map(|(i, text)| format!("[{}] {}", i + 1, text.as_ref()))
        .collect::<Vec<_>>()
        .join("\n")
}
