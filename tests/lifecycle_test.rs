use ahopath::{AhoCorasick, AhopathError};

#[test]
fn test_search_before_prepare() {
    let mut tree = AhoCorasick::<String>::builder().build();
    tree.add_keyword("pattern").unwrap();
    assert!(matches!(
        tree.complete_search("pattern", true, false),
        Err(AhopathError::NotPrepared),
    ));
    assert!(matches!(
        tree.progressive_search("pattern"),
        Err(AhopathError::NotPrepared),
    ));
}

#[test]
fn test_add_after_prepare() {
    let mut tree = AhoCorasick::<String>::builder().build();
    tree.add_keyword("pattern").unwrap();
    tree.prepare().unwrap();
    assert!(matches!(
        tree.add_keyword("late"),
        Err(AhopathError::AlreadyPrepared),
    ));
}

#[test]
fn test_double_prepare() {
    let mut tree = AhoCorasick::<String>::builder().build();
    tree.add_keyword("pattern").unwrap();
    tree.prepare().unwrap();
    assert!(matches!(tree.prepare(), Err(AhopathError::AlreadyPrepared)));
}

#[test]
fn test_empty_keyword_rejected() {
    let mut tree = AhoCorasick::<String>::builder().build();
    assert!(matches!(
        tree.add_keyword(""),
        Err(AhopathError::InvalidArgument { .. }),
    ));
}
