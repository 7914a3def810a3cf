use unicode_segmentation::UnicodeSegmentation;

pub(crate) fn byte_for_char(text: &str, char_offset: usize) -> usize {
    text.char_indices()
        .nth(char_offset)
        .map(|(byte, _)| byte)
        .unwrap_or(text.len())
}

/// Snap a `[start, end)` char-offset range outward so neither boundary falls inside a grapheme
/// cluster. Offsets already on a cluster boundary are returned unchanged.
pub(crate) fn snap_range_to_graphemes(text: &str, start: usize, end: usize) -> (usize, usize) {
    let mut snapped_start = start;
    let mut snapped_end = end;
    let mut pos = 0usize;

    for grapheme in text.graphemes(true) {
        let cluster_start = pos;
        let cluster_end = pos + grapheme.chars().count();
        if cluster_start < start && start < cluster_end {
            snapped_start = cluster_start;
        }
        if cluster_start < end && end < cluster_end {
            snapped_end = cluster_end;
        }
        if cluster_start >= end {
            break;
        }
        pos = cluster_end;
    }

    (snapped_start, snapped_end)
}
