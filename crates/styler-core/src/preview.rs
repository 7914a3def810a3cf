//! Headless render snapshot.
//!
//! Host renderers do not walk the style tree; they consume a flat preview: one
//! [`PreviewLine`] per visual line (split at hard breaks), each a sequence of [`StyledRun`]s
//! carrying the active style stack and the run's terminal-cell width. The flattening is a pure
//! read of the document and never mutates it.

use crate::tree::{Document, Style, StyleNode};
use unicode_width::UnicodeWidthStr;

/// A maximal run of text under one active style stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledRun {
    /// Run text (never contains `'\n'`).
    pub text: String,
    /// Active styles, outermost wrapper first.
    pub styles: Vec<Style>,
    /// Visual width in terminal cells (CJK and emoji count as 2).
    pub width: usize,
}

/// One visual line of the preview.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PreviewLine {
    /// Runs in reading order.
    pub runs: Vec<StyledRun>,
}

impl PreviewLine {
    /// Total visual width of this line.
    pub fn visual_width(&self) -> usize {
        self.runs.iter().map(|run| run.width).sum()
    }

    /// Plain text of this line.
    pub fn text(&self) -> String {
        self.runs.iter().map(|run| run.text.as_str()).collect()
    }
}

/// Flatten a document into preview lines.
///
/// Runs break at every style transition and at hard breaks; adjacent text under an identical
/// style stack is merged into one run. An empty document still yields one empty line.
pub fn preview(document: &Document) -> Vec<PreviewLine> {
    let mut lines = vec![PreviewLine::default()];
    let mut stack = Vec::new();
    for node in document.nodes() {
        walk(node, &mut stack, &mut lines);
    }
    lines
}

fn walk(node: &StyleNode, stack: &mut Vec<Style>, lines: &mut Vec<PreviewLine>) {
    match node {
        StyleNode::Leaf(text) => {
            if text.is_empty() {
                return;
            }
            let line = lines.last_mut().expect("preview always has a line");
            match line.runs.last_mut() {
                Some(run) if run.styles == *stack => {
                    run.text.push_str(text);
                    run.width += UnicodeWidthStr::width(text.as_str());
                }
                _ => line.runs.push(StyledRun {
                    text: text.clone(),
                    styles: stack.clone(),
                    width: UnicodeWidthStr::width(text.as_str()),
                }),
            }
        }
        StyleNode::Break => lines.push(PreviewLine::default()),
        StyleNode::Styled { style, children } => {
            stack.push(style.clone());
            for child in children {
                walk(child, stack, lines);
            }
            stack.pop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::range::TextRange;

    #[test]
    fn test_empty_document_has_one_empty_line() {
        let lines = preview(&Document::from_text(""));
        assert_eq!(lines.len(), 1);
        assert!(lines[0].runs.is_empty());
        assert_eq!(lines[0].visual_width(), 0);
    }

    #[test]
    fn test_runs_split_at_style_transitions() {
        let mut doc = Document::from_text("foobar");
        doc.apply_to_range(TextRange::new(3, 6), Style::bold())
            .unwrap();
        let lines = preview(&doc);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].runs.len(), 2);
        assert_eq!(lines[0].runs[0].text, "foo");
        assert!(lines[0].runs[0].styles.is_empty());
        assert_eq!(lines[0].runs[1].text, "bar");
        assert_eq!(lines[0].runs[1].styles, vec![Style::bold()]);
    }

    #[test]
    fn test_styles_listed_outermost_first() {
        let mut doc = Document::from_text("ab");
        doc.apply_to_range(TextRange::new(0, 2), Style::bold())
            .unwrap();
        // Wrap the bold range again; flatten strips bold, so layer it back inside-out.
        doc.apply_to_range(TextRange::new(0, 2), Style::foreground("#268bd2"))
            .unwrap();
        let lines = preview(&doc);
        assert_eq!(lines[0].runs.len(), 1);
        assert_eq!(lines[0].runs[0].styles, vec![Style::foreground("#268bd2")]);

        // A hand-built nested tree reports the full chain, outermost first.
        let doc = Document::from_nodes(vec![StyleNode::styled(
            Style::underline(),
            vec![StyleNode::styled(Style::bold(), vec![StyleNode::leaf("x")])],
        )]);
        let lines = preview(&doc);
        assert_eq!(
            lines[0].runs[0].styles,
            vec![Style::underline(), Style::bold()]
        );
    }

    #[test]
    fn test_breaks_split_lines() {
        let lines = preview(&Document::from_text("a\n\nb"));
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].text(), "a");
        assert_eq!(lines[1].text(), "");
        assert_eq!(lines[2].text(), "b");
    }

    #[test]
    fn test_wide_characters_measure_two_cells() {
        let lines = preview(&Document::from_text("a日b"));
        assert_eq!(lines[0].visual_width(), 4);
    }

    #[test]
    fn test_adjacent_same_stack_runs_merge() {
        let doc = Document::from_nodes(vec![
            StyleNode::leaf("a"),
            StyleNode::leaf("b"),
            StyleNode::styled(Style::bold(), vec![StyleNode::leaf("c")]),
        ]);
        let lines = preview(&doc);
        assert_eq!(lines[0].runs.len(), 2);
        assert_eq!(lines[0].runs[0].text, "ab");
    }
}
