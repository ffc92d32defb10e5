use crate::core::aggregate::FrequencyAggregator;

/// Renders the frequency table as `"<count> -> <word>"` lines, counts
/// descending, ties broken alphabetically so repeated renders of the same
/// map are byte-identical.
pub fn render(words: &FrequencyAggregator) -> String {
    let mut entries: Vec<(&str, u64)> = words
        .counts()
        .iter()
        .map(|(word, count)| (word.as_str(), *count))
        .collect();

    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

    let mut out = String::new();
    for (word, count) in entries {
        out.push_str(&format!("{} -> {}\n", count, word));
    }
    out
}
