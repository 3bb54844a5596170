use super::*;
use pretty_assertions::assert_eq;

#[test]
fn plain_comments_between_doc_and_declaration_are_skipped() {
    let file = parse_and_extract("/** Documented. */\n// note\n/* note */\nclass A {}");
    assert_eq!(description(class(&file, "A").doc_comment.as_ref()), "Documented.");
}

#[test]
fn plain_block_comment_is_not_attached() {
    let file = parse_and_extract("/* not docs */\nfunction f() {}");
    assert!(function(&file, "f").doc_comment.is_none());
}

#[test]
fn intervening_statement_blocks_attachment() {
    let file = parse_and_extract("/** Orphan. */\nlet x = 1;\nfunction f() {}");
    assert!(function(&file, "f").doc_comment.is_none());
    assert_eq!(description(variable(&file, "x").doc_comment.as_ref()), "Orphan.");
}

#[test]
fn nearest_doc_comment_wins() {
    let file = parse_and_extract("/** Older. */\n/** Newer. */\ninterface I {}");
    assert_eq!(description(interface(&file, "I").doc_comment.as_ref()), "Newer.");
}

#[test]
fn tags_only_comment_attaches_with_empty_description() {
    let file = parse_and_extract("/** @deprecated use g */\nfunction f() {}");
    let doc = function(&file, "f").doc_comment.as_ref().expect("attached");
    assert_eq!(doc.description, "");
    assert!(doc.is_deprecated());
}
