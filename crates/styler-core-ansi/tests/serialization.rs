use styler_core::{Document, Style, StyleNode, StylerSession, TextRange};
use styler_core_ansi::{export_document, serialize_document};

#[test]
fn test_structural_forward_round_trip() {
    let document = Document::from_nodes(vec![
        StyleNode::leaf("Hi "),
        StyleNode::styled(Style::bold(), vec![StyleNode::leaf("there")]),
    ]);
    assert_eq!(serialize_document(&document), "Hi \u{1b}[1mthere\u{1b}[0m");
}

#[test]
fn test_serialization_is_pure() {
    let mut session = StylerSession::with_text("one two three");
    session
        .apply(TextRange::new(4, 7), Style::foreground("#d33682"))
        .unwrap();
    session.apply(TextRange::new(0, 3), Style::bold()).unwrap();

    let first = serialize_document(session.document());
    let second = serialize_document(session.document());
    assert_eq!(first, second);
}

#[test]
fn test_unknown_colors_degrade_to_defaults() {
    let mut fg = StylerSession::with_text("x");
    fg.apply(TextRange::new(0, 1), Style::foreground("#123456"))
        .unwrap();
    assert_eq!(serialize_document(fg.document()), "\u{1b}[37mx\u{1b}[0m");

    let mut bg = StylerSession::with_text("x");
    bg.apply(TextRange::new(0, 1), Style::background("#123456"))
        .unwrap();
    assert_eq!(serialize_document(bg.document()), "\u{1b}[43mx\u{1b}[0m");
}

#[test]
fn test_restyle_idempotence_observable_in_output() {
    let mut once = StylerSession::with_text("same text");
    once.apply(TextRange::new(0, 4), Style::background("#cb4b16"))
        .unwrap();

    let mut twice = StylerSession::with_text("same text");
    twice
        .apply(TextRange::new(0, 4), Style::background("#cb4b16"))
        .unwrap();
    twice
        .apply(TextRange::new(0, 4), Style::background("#cb4b16"))
        .unwrap();

    assert_eq!(
        serialize_document(once.document()),
        serialize_document(twice.document())
    );
}

#[test]
fn test_replacement_strips_bold_from_recolored_sub_range() {
    let mut session = StylerSession::with_text("foobar");
    session.apply(TextRange::new(0, 6), Style::bold()).unwrap();
    session
        .apply(TextRange::new(3, 6), Style::foreground("#dc322f"))
        .unwrap();

    let out = serialize_document(session.document());
    assert_eq!(out, "\u{1b}[1mfoo\u{1b}[0m\u{1b}[31mbar\u{1b}[0m");

    // No bold code anywhere over the recolored half.
    let recolored = out.split("\u{1b}[31m").nth(1).unwrap();
    assert!(!recolored.contains("\u{1b}[1m"));
}

#[test]
fn test_nested_composition_collapses_to_last_wrapper() {
    let mut session = StylerSession::with_text("text");
    session.apply(TextRange::new(0, 4), Style::bold()).unwrap();
    session
        .apply(TextRange::new(0, 4), Style::underline())
        .unwrap();
    session
        .apply(TextRange::new(0, 4), Style::foreground("#268bd2"))
        .unwrap();

    let out = serialize_document(session.document());
    assert_eq!(out, "\u{1b}[34mtext\u{1b}[0m");
    assert!(!out.contains("\u{1b}[1m"));
    assert!(!out.contains("\u{1b}[4m"));
}

#[test]
fn test_breaks_serialize_as_newlines() {
    let mut session = StylerSession::with_text("red\nblue");
    session
        .apply(TextRange::new(0, 3), Style::foreground("#dc322f"))
        .unwrap();
    session
        .apply(TextRange::new(4, 8), Style::foreground("#268bd2"))
        .unwrap();

    assert_eq!(
        serialize_document(session.document()),
        "\u{1b}[31mred\u{1b}[0m\n\u{1b}[34mblue\u{1b}[0m"
    );
}

#[test]
fn test_reset_serializes_to_plain_placeholder() {
    let mut session = StylerSession::with_text("styled");
    session
        .apply(TextRange::new(0, 6), Style::background("#6c71c4"))
        .unwrap();
    session.reset();

    let out = serialize_document(session.document());
    assert_eq!(out, styler_core::PLACEHOLDER_TEXT);
    assert!(!out.contains('\u{1b}'));
}

#[test]
fn test_export_outside_range_prefix_is_byte_identical() {
    let mut session = StylerSession::with_text("prefix middle suffix");
    session.apply(TextRange::new(0, 6), Style::bold()).unwrap();
    let before = serialize_document(session.document());

    session
        .apply(TextRange::new(7, 13), Style::foreground("#859900"))
        .unwrap();
    let after = serialize_document(session.document());

    // Styling the middle leaves the serialized prefix for [0, 7) untouched.
    let prefix = "\u{1b}[1mprefix\u{1b}[0m ";
    assert!(before.starts_with(prefix));
    assert!(after.starts_with(prefix));
    assert!(after.ends_with(" suffix"));
}

#[test]
fn test_export_document_is_read_only() {
    let mut session = StylerSession::with_text("hello");
    session.apply(TextRange::new(0, 5), Style::bold()).unwrap();
    let before = session.document().clone();

    let mut sink = String::new();
    export_document(session.document(), &mut sink).unwrap();
    assert_eq!(session.document(), &before);
    assert_eq!(sink, "```ansi\n\u{1b}[1mhello\u{1b}[0m\n```");
}
