use super::*;
use pretty_assertions::assert_eq;

fn sample() -> Vec<Item<'static>> {
    vec![
        Item::new(TokenKind::Local, Pos::new(0), "local"),
        Item::new(TokenKind::Identifier, Pos::new(6), "x"),
        Item::new(TokenKind::AssignmentOperator, Pos::new(8), "="),
        Item::new(TokenKind::NumberLiteral, Pos::new(10), "1"),
        Item::eof(Pos::new(11)),
    ]
}

fn drain<'src>(mut stream: impl TokenStream<'src>) -> Vec<Item<'src>> {
    let mut items = Vec::new();
    loop {
        let item = stream.next_item();
        let terminal = item.is_terminal();
        items.push(item);
        if terminal {
            return items;
        }
    }
}

#[test]
fn list_replays_items_in_order() {
    let list = ItemList::new(sample());
    assert_eq!(drain(list), sample());
}

#[test]
fn exhausted_list_yields_eof_at_end() {
    let mut list = ItemList::new(vec![Item::new(TokenKind::Return, Pos::new(2), "return")]);
    assert_eq!(list.next_item().kind, TokenKind::Return);
    assert_eq!(list.next_item(), Item::eof(Pos::new(8)));
    assert_eq!(list.next_item(), Item::eof(Pos::new(8)));
}

#[test]
fn empty_list_yields_eof_at_zero() {
    let mut list = ItemList::default();
    assert!(list.is_empty());
    assert_eq!(list.next_item(), Item::eof(Pos::ZERO));
}

#[test]
fn peek_does_not_consume() {
    let mut list = ItemList::new(sample());
    assert_eq!(list.peek().map(|i| i.kind), Some(TokenKind::Local));
    assert_eq!(list.peek().map(|i| i.kind), Some(TokenKind::Local));
    assert_eq!(list.next_item().kind, TokenKind::Local);
    assert_eq!(list.peek().map(|i| i.kind), Some(TokenKind::Identifier));
    assert_eq!(list.position(), 1);
}

#[test]
fn seek_rewinds_and_clamps() {
    let mut list = ItemList::new(sample());
    let _ = list.next_item();
    let _ = list.next_item();
    list.seek(0);
    assert_eq!(list.next_item().kind, TokenKind::Local);
    list.seek(100);
    assert_eq!(list.position(), list.len());
    assert_eq!(list.next_item().kind, TokenKind::Eof);
}

#[test]
fn push_stream_stops_after_terminal() {
    let mut list = ItemList::default();
    list.push_keyword(TokenKind::Do);
    list.push_stream(ItemList::new(sample()));
    assert_eq!(list.len(), 1 + sample().len());
    assert_eq!(list.items()[0], Item::keyword(TokenKind::Do));
    assert_eq!(list.items().last().map(|i| i.kind), Some(TokenKind::Eof));
}

#[test]
fn from_stream_collects_through_error() {
    let source = ItemList::new(vec![
        Item::new(TokenKind::Identifier, Pos::new(0), "a"),
        Item::error(Pos::new(2), "unterminated string literal"),
        Item::new(TokenKind::Identifier, Pos::new(9), "never"),
    ]);
    let list = ItemList::from_stream(source);
    assert_eq!(list.len(), 2);
    assert_eq!(list.items()[1].kind, TokenKind::Error);
}

#[test]
fn subset_filters_by_category() {
    let filtered = subset(ItemList::new(sample()), Category::IDENTIFIER | Category::LITERAL);
    let kinds: Vec<TokenKind> = drain(filtered).into_iter().map(|i| i.kind).collect();
    assert_eq!(
        kinds,
        vec![TokenKind::Identifier, TokenKind::NumberLiteral, TokenKind::Eof]
    );
}

#[test]
fn subset_passes_errors_through() {
    let source = ItemList::new(vec![
        Item::new(TokenKind::AdditionOperator, Pos::new(0), "+"),
        Item::error(Pos::new(1), "boom"),
    ]);
    let items = drain(Subset::new(source, Category::KEYWORD));
    assert_eq!(items, vec![Item::error(Pos::new(1), "boom")]);
}

#[test]
fn subset_with_empty_mask_yields_only_terminal() {
    let items = drain(Subset::new(ItemList::new(sample()), Category::empty()));
    assert_eq!(items, vec![Item::eof(Pos::new(11))]);
}

#[test]
fn subset_delegates_through_mutable_reference() {
    let mut list = ItemList::new(sample());
    let mut filtered = Subset::new(&mut list, Category::KEYWORD);
    assert_eq!(filtered.mask(), Category::KEYWORD);
    assert_eq!(filtered.next_item().kind, TokenKind::Local);
    drop(filtered);
    assert_eq!(list.position(), 1);
}

#[test]
fn boxed_streams_are_streams() {
    let boxed: Box<dyn TokenStream<'static>> = Box::new(ItemList::new(sample()));
    assert_eq!(drain(boxed).len(), sample().len());
}
