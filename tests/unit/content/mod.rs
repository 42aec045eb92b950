use super::*;

#[test]
fn default_quote_lines_cover_every_slot_once() {
    let quote = QuoteContent::default();
    let lines = quote.lines();
    assert_eq!(lines, vec![0..4, 4..6, 6..11, 11..13]);
    let covered: usize = lines.iter().map(|r| r.len()).sum();
    assert_eq!(covered, QUOTE_SLOT_COUNT);
    assert_eq!(quote.slots[11], "forward");
    assert_eq!(quote.slots[12], ">>>");
}

#[test]
fn short_line_breaks_get_a_trailing_line() {
    let quote = QuoteContent {
        line_breaks: vec![5, 5, 40],
        ..QuoteContent::default()
    };
    assert_eq!(quote.lines(), vec![0..5, 5..13]);

    let quote = QuoteContent {
        line_breaks: vec![],
        ..QuoteContent::default()
    };
    assert_eq!(quote.lines(), vec![0..13]);
}

#[test]
fn marquee_loops_items_twice_in_order() {
    let m = Marquee::default();
    assert_eq!(m.items.len(), 10);
    let looped: Vec<_> = m.looped_items().map(|i| i.name.as_str()).collect();
    assert_eq!(looped.len(), 20);
    assert_eq!(looped[0], "Figma");
    assert_eq!(looped[9], "DaVinci Resolve");
    assert_eq!(looped[10], "Figma");
}

#[test]
fn quote_content_round_trips_through_json() {
    let quote = QuoteContent::default();
    let s = serde_json::to_string(&quote).unwrap();
    let back: QuoteContent = serde_json::from_str(&s).unwrap();
    assert_eq!(back, quote);
}
