use styler_core::{Style, StyleNode, StylerSession, TextRange};

fn main() {
    let mut session = StylerSession::with_text("hello world");

    // Bold the first word.
    session.apply(TextRange::new(0, 5), Style::bold()).unwrap();
    assert_eq!(session.document().nodes().len(), 2);

    // Recolor the last three characters of it; the bold is stripped there.
    session
        .apply(TextRange::new(2, 5), Style::foreground("#dc322f"))
        .unwrap();
    assert_eq!(
        session.document().nodes()[0],
        StyleNode::styled(Style::bold(), vec![StyleNode::leaf("he")])
    );

    // Text and ordering survive every restyle.
    assert_eq!(session.document().plain_text(), "hello world");

    // Reset discards everything.
    session.reset();
    assert!(session.document().is_placeholder());

    println!("final version: {}", session.version());
}
