//! Year and ISBN queries.

use super::common::*;
use folio::WordMode;

#[test]
fn test_year_with_one_book() {
    let catalog = sample_catalog();
    assert_eq!(search_results(&catalog, "1999", WordMode::Fuzzy), vec![SORCERERS_STONE]);
}

#[test]
fn test_year_with_two_books() {
    let catalog = sample_catalog();
    assert_eq!(
        search_results(&catalog, "2002", WordMode::Contains),
        vec![GOBLET_OF_FIRE, HOBBIT]
    );
}

#[test]
fn test_title_that_looks_like_a_year() {
    // "1984" is classified as a year, and nothing was published then.
    let catalog = sample_catalog();
    let session = search_session(&catalog, "1984", WordMode::Fuzzy).unwrap();
    assert!(session.results.is_empty());
    assert!(session.matched_terms.is_empty());
}

#[test]
fn test_full_isbn_forms() {
    let catalog = sample_catalog();
    for query in ["0618260307", "0-618-26030-7", " 0618260307 "] {
        assert_eq!(search_results(&catalog, query, WordMode::Fuzzy), vec![HOBBIT], "{}", query);
    }
}

#[test]
fn test_check_digit_x_any_case() {
    let catalog = sample_catalog();
    assert_eq!(search_results(&catalog, "043942089x", WordMode::Fuzzy), vec![GOBLET_OF_FIRE]);
    assert_eq!(search_results(&catalog, "043942089X", WordMode::Fuzzy), vec![GOBLET_OF_FIRE]);
}

#[test]
fn test_partial_isbn() {
    let catalog = sample_catalog();
    let session = search_session(&catalog, "04391", WordMode::Fuzzy).unwrap();
    assert_eq!(session.results, vec![PRISONER_OF_AZKABAN]);
    assert_eq!(session.matched_terms, session.results);

    assert_eq!(
        search_results(&catalog, "006025", WordMode::Fuzzy),
        vec![WILD_THINGS, GIVING_TREE]
    );
}

#[test]
fn test_unknown_isbn() {
    let catalog = sample_catalog();
    assert!(search_results(&catalog, "0000000000", WordMode::Fuzzy).is_empty());
}
