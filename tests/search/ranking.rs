//! Result ordering across multiple terms.

use super::common::*;
use folio::WordMode;

#[test]
fn test_book_matching_every_term_comes_first() {
    let catalog = sample_catalog();
    let results = search_results(&catalog, "harry potter chamber", WordMode::Contains);
    assert_eq!(
        results,
        vec![CHAMBER_OF_SECRETS, PRISONER_OF_AZKABAN, GOBLET_OF_FIRE, SORCERERS_STONE]
    );
}

#[test]
fn test_partial_overlap_beats_single_term() {
    let catalog = word_catalog(&[
        ("alpha", &["1", "2", "3"]),
        ("bravo", &["2", "3", "4"]),
        ("charlie", &["3", "5"]),
    ]);
    let results = search_results(&catalog, "alpha bravo charlie", WordMode::Contains);
    assert_eq!(results, vec!["3", "2", "1", "4", "5"]);
}

#[test]
fn test_word_order_does_not_change_membership() {
    let catalog = sample_catalog();
    let forward = search_results(&catalog, "hobbit tolkien", WordMode::Fuzzy);
    let backward = search_results(&catalog, "tolkien hobbit", WordMode::Fuzzy);
    assert_eq!(forward, backward);
}

#[test]
fn test_repeated_term() {
    let catalog = sample_catalog();
    let results = search_results(&catalog, "potter potter", WordMode::Contains);
    assert_eq!(results.len(), 4);
    assert_unique(&results);
}
