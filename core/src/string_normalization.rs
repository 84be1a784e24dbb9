use unidecode::unidecode;

/// Canonical form of a genre/style tag: ASCII-folded, trimmed, lowercased and with
/// internal whitespace collapsed. Every node identity in the graph is a cleaned tag.
pub fn clean_tag(input: &str) -> String {
    unidecode(input) // Convert Unicode to ASCII
        .trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<&str>>()
        .join(" ")
}

pub fn clean_tags<'a, I>(tags: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    tags.into_iter()
        .map(clean_tag)
        .filter(|tag| !tag.is_empty())
        .collect()
}
