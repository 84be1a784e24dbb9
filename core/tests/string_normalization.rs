use genregraph_core::{clean_tag, clean_tags};

#[test]
fn test_clean_tag_lowercases_and_trims() {
    assert_eq!(clean_tag("  Indie Rock "), "indie rock");
    assert_eq!(clean_tag("POST-PUNK"), "post-punk");
}

#[test]
fn test_clean_tag_collapses_internal_whitespace() {
    assert_eq!(clean_tag("drum \t and\n  bass"), "drum and bass");
}

#[test]
fn test_clean_tag_folds_unicode_to_ascii() {
    assert_eq!(clean_tag("Música Popular Brasileira"), "musica popular brasileira");
    assert_eq!(clean_tag("Motörhead"), "motorhead");
}

#[test]
fn test_clean_tag_empty_input() {
    assert_eq!(clean_tag(""), "");
    assert_eq!(clean_tag("   "), "");
}

#[test]
fn test_clean_tags_drops_empty_entries() {
    let cleaned = clean_tags(["Jazz", "  ", "Free  Jazz"]);
    assert_eq!(cleaned, vec!["jazz", "free jazz"]);
}
