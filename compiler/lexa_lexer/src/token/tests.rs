use super::*;
use pretty_assertions::assert_eq;

fn tok(kind: TokenKind, text: &str, line: u32) -> Token {
    Token::new(kind, text, line)
}

#[test]
fn labels_match_kind_names() {
    let labels: Vec<&str> = TokenKind::ALL.iter().map(|k| k.label()).collect();
    assert_eq!(
        labels,
        [
            "keyword",
            "identifier",
            "operator",
            "number",
            "string",
            "comment",
            "punctuation"
        ]
    );
}

#[test]
fn display_uses_label() {
    assert_eq!(TokenKind::Punctuation.to_string(), "punctuation");
    assert_eq!(format!("{}", TokenKind::Keyword), "keyword");
}

#[test]
fn token_debug_is_compact() {
    let token = tok(TokenKind::Keyword, "int", 3);
    assert_eq!(format!("{token:?}"), r#"Keyword("int") @ 3"#);
}

#[test]
fn token_len_counts_chars_not_bytes() {
    assert_eq!(tok(TokenKind::Identifier, "é", 1).len(), 1);
    assert_eq!(tok(TokenKind::String, "\"héllo\"", 1).len(), 7);
    assert!(!tok(TokenKind::Number, "0", 1).is_empty());
}

// === TokenList ===

#[test]
fn empty_list() {
    let list = TokenList::new();
    assert!(list.is_empty());
    assert_eq!(list.len(), 0);
    assert_eq!(list.get(0), None);
    assert_eq!(list.lines().count(), 0);
}

#[test]
fn push_and_index() {
    let mut list = TokenList::new();
    list.push(tok(TokenKind::Identifier, "x", 1));
    list.push(tok(TokenKind::Operator, "=", 1));
    assert_eq!(list.len(), 2);
    assert_eq!(list[1].text, "=");
    assert_eq!(list.get(0).map(|t| t.kind), Some(TokenKind::Identifier));
}

#[test]
fn count_of_kind() {
    let list: TokenList = [
        tok(TokenKind::Identifier, "a", 1),
        tok(TokenKind::Operator, "+", 1),
        tok(TokenKind::Identifier, "b", 1),
    ]
    .into_iter()
    .collect();
    assert_eq!(list.count_of(TokenKind::Identifier), 2);
    assert_eq!(list.count_of(TokenKind::Operator), 1);
    assert_eq!(list.count_of(TokenKind::Comment), 0);
}

#[test]
fn lines_groups_consecutive_tokens() {
    let list = TokenList::from_vec(vec![
        tok(TokenKind::Comment, "// hi", 1),
        tok(TokenKind::Keyword, "int", 3),
        tok(TokenKind::Identifier, "y", 3),
        tok(TokenKind::Punctuation, ";", 4),
    ]);
    let grouped: Vec<(u32, usize)> = list.lines().map(|(line, toks)| (line, toks.len())).collect();
    assert_eq!(grouped, vec![(1, 1), (3, 2), (4, 1)]);
}

#[test]
fn into_vec_round_trips_order() {
    let tokens = vec![
        tok(TokenKind::Number, "1", 1),
        tok(TokenKind::Number, "2", 2),
    ];
    let list = TokenList::from_vec(tokens.clone());
    assert_eq!(list.as_slice(), tokens.as_slice());
    assert_eq!(list.into_vec(), tokens);
}

#[test]
fn iterates_by_reference_and_by_value() {
    let list = TokenList::from_vec(vec![
        tok(TokenKind::Identifier, "a", 1),
        tok(TokenKind::Identifier, "b", 1),
    ]);
    let borrowed: Vec<&str> = (&list).into_iter().map(|t| t.text.as_str()).collect();
    assert_eq!(borrowed, ["a", "b"]);
    let owned: Vec<String> = list.into_iter().map(|t| t.text).collect();
    assert_eq!(owned, ["a", "b"]);
}

#[test]
fn slice_methods_through_deref() {
    let list = TokenList::from_vec(vec![
        tok(TokenKind::Keyword, "int", 1),
        tok(TokenKind::Identifier, "x", 1),
        tok(TokenKind::Punctuation, ";", 2),
    ]);
    assert_eq!(list[1].text, "x");
    assert_eq!(list.first().map(|t| t.kind), Some(TokenKind::Keyword));
    assert_eq!(list.last().map(|t| t.line), Some(2));
    assert_eq!(list.get(3), None);
    assert!(list.windows(2).all(|w| w[0].line <= w[1].line));
    let texts: Vec<&str> = list[..2].iter().map(|t| t.text.as_str()).collect();
    assert_eq!(texts, ["int", "x"]);
}
