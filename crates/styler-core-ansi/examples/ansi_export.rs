use styler_core::{Style, StylerSession, TextRange};
use styler_core_ansi::{export_document, serialize_document};

fn main() {
    let mut session = StylerSession::with_text("status: all systems go");

    session
        .apply(TextRange::new(0, 7), Style::bold())
        .unwrap();
    session
        .apply(TextRange::new(8, 22), Style::foreground("#859900"))
        .unwrap();
    session
        .apply(TextRange::new(12, 19), Style::underline())
        .unwrap();

    // Raw ANSI, as a terminal (or the chat client) would parse it.
    println!("{}", serialize_document(session.document()));

    // Fenced payload, as it would be pasted into a chat message.
    let mut clipboard = String::new();
    export_document(session.document(), &mut clipboard).unwrap();
    println!("{clipboard}");
}
