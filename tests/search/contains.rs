//! Contains (substring) search.

use super::common::*;
use folio::WordMode;

#[test]
fn test_whole_word() {
    let catalog = sample_catalog();
    assert_eq!(
        search_results(&catalog, "hobbit", WordMode::Contains),
        vec![HOBBIT]
    );
}

#[test]
fn test_fragment_inside_word() {
    let catalog = sample_catalog();
    // "arry" is inside "harry" only.
    let results = search_results(&catalog, "arry", WordMode::Contains);
    assert_eq!(
        results,
        vec![CHAMBER_OF_SECRETS, PRISONER_OF_AZKABAN, GOBLET_OF_FIRE, SORCERERS_STONE]
    );
}

#[test]
fn test_fragment_matches_several_words() {
    let catalog = sample_catalog();
    // Author and publisher words are searchable too.
    assert_eq!(
        search_results(&catalog, "silver", WordMode::Contains),
        vec![GIVING_TREE]
    );
    assert_eq!(
        search_results(&catalog, "harper", WordMode::Contains),
        vec![WILD_THINGS, GIVING_TREE]
    );
}

#[test]
fn test_matched_terms_are_vocabulary_words() {
    let catalog = sample_catalog();
    let session = search_session(&catalog, "potter scholastic", WordMode::Contains).unwrap();
    assert_eq!(session.matched_terms, vec!["potter", "scholastic"]);
}

#[test]
fn test_typo_finds_nothing() {
    let catalog = sample_catalog();
    assert!(search_results(&catalog, "hobit", WordMode::Contains).is_empty());
}

#[test]
fn test_term_longer_than_any_word() {
    let catalog = sample_catalog();
    assert!(search_results(&catalog, "antidisestablishment", WordMode::Contains).is_empty());
}

#[test]
fn test_multi_term_union() {
    let catalog = sample_catalog();
    let results = search_results(&catalog, "hobbit road", WordMode::Contains);
    assert_eq!(results.len(), 2);
    assert!(results.contains(&HOBBIT.to_string()));
    assert!(results.contains(&THE_ROAD.to_string()));
    assert_unique(&results);
}

#[test]
fn test_disjoint_terms_rank_equally() {
    let catalog = word_catalog(&[("mummies", &["A"]), ("kitchen", &["B"])]);
    let session = search_session(&catalog, "mummies kitchen", WordMode::Contains).unwrap();
    assert_eq!(session.matched_terms, vec!["mummies", "kitchen"]);

    let mut results = session.results.clone();
    results.sort();
    assert_eq!(results, vec!["A", "B"]);
}

#[test]
fn test_each_matched_word_counts_toward_relevance() {
    // "potter" matches both "potter" and "potters"; B is in both.
    let catalog = word_catalog(&[("potter", &["A", "B"]), ("potters", &["B"]), ("stone", &["C"])]);
    let session = search_session(&catalog, "potter stone", WordMode::Contains).unwrap();
    assert_eq!(session.matched_terms, vec!["potter", "potters", "stone"]);
    assert_eq!(session.results, vec!["B", "A", "C"]);
}
