// Copyright 2026 The emmetconv Authors.
// This project is dual-licensed under Apache 2.0 and MIT terms.
// See LICENSE-APACHE and LICENSE-MIT for details.

//! Types deriving the appropriate serde traits to be used with
//! [`quick-xml`](https://crates.io/crates/quick-xml) for reading and writing
//! [OpenLyrics](https://docs.openlyrics.org/en/latest/) XML files, and some helper functions for
//! common tasks.
//!
//! [`types::Song`] is the top-level type, e.g.:
//!
//! ```
//! use openlyrics::types::{Song, Title};
//!
//! let mut song = Song::default();
//! song.properties.titles.titles.push(Title {
//!     title: "Amazing Grace".to_string(),
//!     ..Default::default()
//! });
//! let xml = quick_xml::se::to_string(&song).unwrap();
//! assert!(xml.starts_with("<song"));
//! ```

pub mod types;

use crate::types::VerseContent;

/// Converts the contents of a `lines` element to the lines of text it renders, one string per
/// visual line.
///
/// A `<br/>` starts a new line; a single newline at the start of a text node is cosmetic
/// serialization whitespace and is dropped.
pub fn rendered_lines(contents: &[VerseContent]) -> Vec<String> {
    let mut lines = Vec::new();
    for content in contents {
        match content {
            VerseContent::Text(text) => {
                if lines.is_empty() {
                    lines.push(String::new());
                }
                let text = text.strip_prefix('\n').unwrap_or(text);
                lines.last_mut().unwrap().push_str(text);
            }
            VerseContent::Br => {
                lines.push(String::new());
            }
        }
    }
    lines
}

/// Converts the contents of a `lines` element to the text it renders, with one `\n` per line
/// break.
pub fn rendered_text(contents: &[VerseContent]) -> String {
    rendered_lines(contents).join("\n")
}
