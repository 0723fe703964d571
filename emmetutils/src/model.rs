// Copyright 2026 The emmetconv Authors.
// This project is dual-licensed under Apache 2.0 and MIT terms.
// See LICENSE-APACHE and LICENSE-MIT for details.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One parsed emmet song document.
///
/// `books` records under which number the song appears in each songbook; `lyrics` holds the text
/// of the song in each language it has been translated to. Every book entry is expected to refer
/// to a language present in `lyrics`.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct SongDocument {
    #[serde(default)]
    pub books: BTreeMap<String, BookEntry>,
    #[serde(default)]
    pub lyrics: BTreeMap<String, SongLyrics>,
}

impl SongDocument {
    /// Returns the book entry under the given identifier, if the song appears in that book.
    pub fn book(&self, key: &str) -> Option<&BookEntry> {
        self.books.get(key)
    }

    /// Returns the lyrics of the song in the given language, if it has any.
    pub fn lyrics_for(&self, lang: &str) -> Option<&SongLyrics> {
        self.lyrics.get(lang)
    }
}

/// One songbook's numbering of the song: the language the book is in and the number the song is
/// printed under.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct BookEntry {
    pub lang: String,
    pub number: String,
}

/// The text of a song in one language.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct SongLyrics {
    pub title: String,
    #[serde(default)]
    pub verses: Vec<SourceVerse>,
}

/// A named verse of source lyrics, e.g. `v1` or `c1`.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct SourceVerse {
    pub name: String,
    #[serde(default)]
    pub lines: Vec<String>,
}

impl SourceVerse {
    /// Whether the verse is a chorus, by the `c` name prefix convention.
    pub fn is_chorus(&self) -> bool {
        self.name
            .chars()
            .next()
            .is_some_and(|first| first.eq_ignore_ascii_case(&'c'))
    }
}
