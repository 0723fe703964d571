// Copyright 2026 The emmetconv Authors.
// This project is dual-licensed under Apache 2.0 and MIT terms.
// See LICENSE-APACHE and LICENSE-MIT for details.

//! Line break markers embedded in emmet verse text.
//!
//! Source lines may carry two kinds of marker: a hard break (`//`) which is always honoured and
//! separates blocks of a verse, and a soft break (`/`) which is only a presentation hint.

use crate::model::SongDocument;
use std::mem::take;

/// Marker forcing a presentation line break that is always honoured.
pub const HARD_BREAK_MARKER: &str = "//";

/// Marker suggesting a line break that the presentation layer may ignore.
pub const SOFT_BREAK_MARKER: &str = "/";

/// How [`preprocess`] treats soft line break markers.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SoftLineBreakStrategy {
    /// Remove the markers, leaving the surrounding text joined on one line.
    Ignore,
    /// Turn each marker into a real line boundary.
    Split,
}

/// Applies the soft line break strategy to every verse line of every language in the document.
///
/// Hard break markers are left in place either way; they are handled by
/// [`split_on_hard_breaks`] when the verse is rendered.
pub fn preprocess(document: &mut SongDocument, strategy: SoftLineBreakStrategy) {
    for lyrics in document.lyrics.values_mut() {
        for verse in &mut lyrics.verses {
            verse.lines = verse
                .lines
                .iter()
                .flat_map(|line| apply_soft_breaks(line, strategy))
                .collect();
        }
    }
}

fn apply_soft_breaks(line: &str, strategy: SoftLineBreakStrategy) -> Vec<String> {
    // A `/` inside `//` is not a soft break, so look for soft markers per hard segment.
    let mut segments = line.split(HARD_BREAK_MARKER);
    if segments.all(|segment| !segment.contains(SOFT_BREAK_MARKER)) {
        return vec![line.to_owned()];
    }

    let segments: Vec<Vec<&str>> = line
        .split(HARD_BREAK_MARKER)
        .map(|segment| {
            segment
                .split(SOFT_BREAK_MARKER)
                .map(str::trim)
                .filter(|piece| !piece.is_empty())
                .collect()
        })
        .collect();
    match strategy {
        SoftLineBreakStrategy::Ignore => {
            let joined = segments
                .iter()
                .map(|pieces| pieces.join(" "))
                .collect::<Vec<_>>()
                .join(HARD_BREAK_MARKER);
            if joined.is_empty() {
                vec![]
            } else {
                vec![joined]
            }
        }
        SoftLineBreakStrategy::Split => {
            let mut lines = Vec::new();
            for (i, pieces) in segments.iter().enumerate() {
                if i > 0 {
                    lines.push(HARD_BREAK_MARKER.to_owned());
                }
                lines.extend(pieces.iter().map(|piece| (*piece).to_owned()));
            }
            lines
        }
    }
}

/// Partitions the lines of a verse into parts at hard break markers.
///
/// Lines without a marker pass through untouched. A marker cuts the part at that point; the
/// marker token and the whitespace around it are dropped, so a marker at the edge of a line, or
/// a line holding only a marker, contributes no text of its own. A verse without any markers
/// comes back as a single part holding every line.
///
/// Verses are expected to have at least one line; an empty slice returns a single empty part.
pub fn split_on_hard_breaks(lines: &[String]) -> Vec<Vec<String>> {
    let mut parts = Vec::new();
    let mut current = Vec::new();
    for line in lines {
        if !line.contains(HARD_BREAK_MARKER) {
            current.push(line.clone());
            continue;
        }
        let mut pieces = line.split(HARD_BREAK_MARKER);
        if let Some(first) = pieces.next() {
            let first = first.trim_end();
            if !first.is_empty() {
                current.push(first.to_owned());
            }
        }
        for piece in pieces {
            // A marker with nothing before it (at the start of a verse, or doubled up) has no
            // part to close.
            if !current.is_empty() {
                parts.push(take(&mut current));
            }
            let piece = piece.trim();
            if !piece.is_empty() {
                current.push(piece.to_owned());
            }
        }
    }
    if !current.is_empty() || parts.is_empty() {
        parts.push(current);
    }
    parts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{SongLyrics, SourceVerse};

    fn lines(lines: &[&str]) -> Vec<String> {
        lines.iter().map(|line| (*line).to_string()).collect()
    }

    #[test]
    fn no_markers_single_part() {
        assert_eq!(
            split_on_hard_breaks(&lines(&["Jesus lives", "forever"])),
            vec![lines(&["Jesus lives", "forever"])]
        );
    }

    #[test]
    fn trailing_marker_cuts_between_lines() {
        assert_eq!(
            split_on_hard_breaks(&lines(&["First", "Second //", "Third", "Fourth"])),
            vec![lines(&["First", "Second"]), lines(&["Third", "Fourth"])]
        );
    }

    #[test]
    fn marker_on_its_own_line() {
        assert_eq!(
            split_on_hard_breaks(&lines(&["First", "//", "Second"])),
            vec![lines(&["First"]), lines(&["Second"])]
        );
    }

    #[test]
    fn marker_in_the_middle_of_a_line() {
        assert_eq!(
            split_on_hard_breaks(&lines(&["First // Second"])),
            vec![lines(&["First"]), lines(&["Second"])]
        );
    }

    #[test]
    fn marker_at_the_start_of_a_verse() {
        assert_eq!(
            split_on_hard_breaks(&lines(&["// Jesus lives", "forever"])),
            vec![lines(&["Jesus lives", "forever"])]
        );
    }

    #[test]
    fn marker_only_first_line() {
        assert_eq!(
            split_on_hard_breaks(&lines(&["//", "Jesus lives"])),
            vec![lines(&["Jesus lives"])]
        );
    }

    #[test]
    fn two_markers_three_parts() {
        let parts = split_on_hard_breaks(&lines(&["a", "b //", "c", "d //", "e"]));
        assert_eq!(
            parts,
            vec![lines(&["a", "b"]), lines(&["c", "d"]), lines(&["e"])]
        );
    }

    #[test]
    fn concatenation_reproduces_lines_without_markers() {
        let input = lines(&["a", "b //", "c", "//", "d"]);
        let parts = split_on_hard_breaks(&input);
        assert_eq!(parts.len(), 3);
        let rejoined: Vec<String> = parts.into_iter().flatten().collect();
        assert_eq!(rejoined, lines(&["a", "b", "c", "d"]));
    }

    fn document(verse_lines: &[&str]) -> SongDocument {
        SongDocument {
            books: Default::default(),
            lyrics: [(
                "emm_hu".to_string(),
                SongLyrics {
                    title: "Test".to_string(),
                    verses: vec![SourceVerse {
                        name: "v1".to_string(),
                        lines: lines(verse_lines),
                    }],
                },
            )]
            .into_iter()
            .collect(),
        }
    }

    fn verse_lines(document: &SongDocument) -> &[String] {
        &document.lyrics["emm_hu"].verses[0].lines
    }

    #[test]
    fn ignore_removes_soft_markers() {
        let mut document = document(&["Jesus lives, / forever", "No markers here"]);
        preprocess(&mut document, SoftLineBreakStrategy::Ignore);
        assert_eq!(
            verse_lines(&document),
            lines(&["Jesus lives, forever", "No markers here"])
        );
    }

    #[test]
    fn split_turns_soft_markers_into_lines() {
        let mut document = document(&["Jesus lives, / forever"]);
        preprocess(&mut document, SoftLineBreakStrategy::Split);
        assert_eq!(verse_lines(&document), lines(&["Jesus lives,", "forever"]));
    }

    #[test]
    fn preprocess_keeps_hard_markers() {
        let mut document = document(&["He is risen // He / lives"]);
        preprocess(&mut document, SoftLineBreakStrategy::Ignore);
        assert_eq!(verse_lines(&document), lines(&["He is risen//He lives"]));
        assert_eq!(
            split_on_hard_breaks(verse_lines(&document)),
            vec![lines(&["He is risen"]), lines(&["He lives"])]
        );
    }

    #[test]
    fn split_keeps_hard_markers_as_boundaries() {
        let mut document = document(&["He is risen // He / lives"]);
        preprocess(&mut document, SoftLineBreakStrategy::Split);
        assert_eq!(
            verse_lines(&document),
            lines(&["He is risen", "//", "He", "lives"])
        );
    }
}
