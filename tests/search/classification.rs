//! Query classification from raw text, through the tokenizer.

use folio::{classify, prepare, QueryKind};

fn kind_of(text: &str) -> QueryKind {
    classify(&prepare(text))
}

#[test]
fn test_years() {
    assert_eq!(kind_of("1999"), QueryKind::Year);
    assert_eq!(kind_of("  2002 "), QueryKind::Year);
    assert_eq!(kind_of("1991"), QueryKind::Year);
}

#[test]
fn test_isbns() {
    assert_eq!(kind_of("0439136350"), QueryKind::Isbn);
    assert_eq!(kind_of("0-439-13635-0"), QueryKind::Isbn);
    assert_eq!(kind_of("978-0-439-13959-5"), QueryKind::Isbn);
    assert_eq!(kind_of("043942089X"), QueryKind::Isbn);
    assert_eq!(kind_of("04394"), QueryKind::Isbn);
    assert_eq!(kind_of("10945"), QueryKind::Isbn);
}

#[test]
fn test_words() {
    assert_eq!(kind_of("hobbit"), QueryKind::Word);
    assert_eq!(kind_of("Harry Potter"), QueryKind::Word);
    assert_eq!(kind_of("dune"), QueryKind::Word);
    assert_eq!(kind_of("1999 2000"), QueryKind::Word);
    assert_eq!(kind_of("Mummies Urumchi"), QueryKind::Word);
}

#[test]
fn test_nothing_searchable() {
    assert_eq!(kind_of(""), QueryKind::Undetermined);
    assert_eq!(kind_of("   "), QueryKind::Undetermined);
    assert_eq!(kind_of("?!"), QueryKind::Undetermined);
    assert_eq!(kind_of("the and of"), QueryKind::Undetermined);
    assert_eq!(kind_of("cat"), QueryKind::Undetermined);
    assert_eq!(kind_of("123456789012345"), QueryKind::Undetermined);
}

#[test]
fn test_stop_words_do_not_count_as_tokens() {
    // "the" drops out, leaving one 6-letter word.
    assert_eq!(prepare("The Hobbit"), vec!["hobbit"]);
    assert_eq!(kind_of("The Hobbit"), QueryKind::Word);
}
