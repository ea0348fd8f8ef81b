use std::collections::HashMap;

/// Reduce a header to lowercase alphanumerics only, for tolerant matching.
/// Idempotent: normalizing a normalized header is a no-op.
pub fn normalize(header: &str) -> String {
    header
        .trim()
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric())
        .collect()
}

/// A resolved column: its position in the header row plus the original
/// (un-normalized) header text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub index: usize,
    pub header: String,
}

/// Resolve which column to analyze from the headers actually present.
///
/// Every header is normalized and mapped back to its position; if two
/// distinct headers normalize to the same key, the later one wins. The
/// normalized `hint` is tried first, then each fallback alias in order.
/// Returns `None` when nothing matches — callers degrade to a fallback
/// report rather than failing.
pub fn locate(headers: &[String], hint: &str, fallbacks: &[&str]) -> Option<Column> {
    let mut by_norm: HashMap<String, usize> = HashMap::new();
    for (index, header) in headers.iter().enumerate() {
        by_norm.insert(normalize(header), index);
    }

    std::iter::once(hint)
        .chain(fallbacks.iter().copied())
        .find_map(|candidate| by_norm.get(&normalize(candidate)))
        .map(|&index| Column {
            index,
            header: headers[index].clone(),
        })
}
