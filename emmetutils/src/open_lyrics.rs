// Copyright 2026 The emmetconv Authors.
// This project is dual-licensed under Apache 2.0 and MIT terms.
// See LICENSE-APACHE and LICENSE-MIT for details.

//! Conversion from [`SongDocument`] to an OpenLyrics song.

use crate::{
    breaks::split_on_hard_breaks,
    model::{BookEntry, SongDocument, SongLyrics, SourceVerse},
};
use chrono::Local;
use log::debug;
use openlyrics::types::{
    Lines, Lyrics, Properties, Song, Songbook, Songbooks, Title, Titles, Verse, VerseContent,
};
use thiserror::Error;

/// Book identifier whose entry decides whether, and under which number, a song is exported.
pub const PRIMARY_BOOK: &str = "emm_hu";

/// Songbook display name recorded in the generated files.
const SONGBOOK_NAME: &str = "Jézus él!";

/// Tool identifier recorded in the `createdIn` and `modifiedIn` attributes.
const TOOL_NAME: &str = "Emmet.yaml Converter";

/// Width song numbers are zero-padded to in OpenLP titles.
const SONG_NUMBER_WIDTH: usize = 3;

const ITALIC_OPEN: &str = "{it}";
const ITALIC_CLOSE: &str = "{/it}";

#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum ConvertError {
    /// A book entry refers to a language the document has no lyrics for. The document is
    /// inconsistent, so this is always surfaced rather than skipped.
    #[error("book entry refers to language {lang:?} but the document has no lyrics for it")]
    MissingLyrics { lang: String },
}

/// A converted song together with the file name it should be written under.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ConvertedSong {
    pub filename: String,
    pub song: Song,
}

/// Converts one song document to an OpenLyrics song.
///
/// Songs without a [`PRIMARY_BOOK`] entry are deliberately left out of the export; they come
/// back as `Ok(None)` rather than an error. Expects the document to already have been run
/// through [`preprocess`](crate::preprocess), so the only line break markers left in the text
/// are hard ones.
pub fn convert(
    document: &SongDocument,
    openlp: bool,
) -> Result<Option<ConvertedSong>, ConvertError> {
    let Some(book) = document.book(PRIMARY_BOOK) else {
        return Ok(None);
    };
    let lyrics = document
        .lyrics_for(&book.lang)
        .ok_or_else(|| ConvertError::MissingLyrics {
            lang: book.lang.clone(),
        })?;
    debug!("converting {:?} (number {})", lyrics.title, book.number);

    let modified_date = Local::now().format("%Y-%m-%dT%H:%M:%S%z").to_string();
    let song = build_song(book, lyrics, openlp, &modified_date);
    let filename = format!("{}-{}-{}.xml", book.number, book.lang, lyrics.title);
    Ok(Some(ConvertedSong { filename, song }))
}

fn build_song(book: &BookEntry, lyrics: &SongLyrics, openlp: bool, modified_date: &str) -> Song {
    let title = if openlp {
        // Padded numbers keep the song list sorted by book number in OpenLP.
        format!("{} {}", pad_song_number(&book.number), lyrics.title)
    } else {
        lyrics.title.clone()
    };
    Song {
        created_in: Some(TOOL_NAME.to_string()),
        modified_in: Some(TOOL_NAME.to_string()),
        modified_date: Some(modified_date.to_string()),
        properties: Properties {
            titles: Titles {
                titles: vec![Title {
                    lang: None,
                    title,
                }],
            },
            songbooks: Songbooks {
                songbooks: vec![Songbook {
                    name: SONGBOOK_NAME.to_string(),
                    entry: Some(book.number.clone()),
                }],
            },
        },
        lyrics: Lyrics {
            verses: lyrics
                .verses
                .iter()
                .map(|verse| verse_to_open_lyrics(verse, openlp))
                .collect(),
        },
        ..Default::default()
    }
}

fn verse_to_open_lyrics(verse: &SourceVerse, openlp: bool) -> Verse {
    let parts = split_on_hard_breaks(&verse.lines);
    // In OpenLP mode the whole chorus is wrapped in italic markers, however many parts and
    // lines it spans.
    let italics = openlp && verse.is_chorus();
    let last_part = parts.len() - 1;

    let lines = parts
        .iter()
        .enumerate()
        .map(|(part_index, part)| {
            let mut contents = Vec::new();
            for (line_index, line) in part.iter().enumerate() {
                let mut line = line.clone();
                if italics && part_index == 0 && line_index == 0 {
                    line = format!("{ITALIC_OPEN}{line}");
                }
                if italics && part_index == last_part && line_index == part.len() - 1 {
                    line = format!("{line}{ITALIC_CLOSE}");
                }
                if contents.is_empty() {
                    contents.push(VerseContent::Text(line));
                } else {
                    contents.push(VerseContent::Br);
                    // The newline is cosmetic, to keep the serialized file readable.
                    contents.push(VerseContent::Text(format!("\n{line}")));
                }
            }
            Lines {
                break_hint: (part_index < last_part).then(|| "optional".to_string()),
                contents,
            }
        })
        .collect();

    Verse {
        name: verse.name.clone(),
        lines,
    }
}

/// Renders a song number zero-padded for OpenLP titles, e.g. `"7"` to `"007"`.
fn pad_song_number(number: &str) -> String {
    format!("{number:0>width$}", width = SONG_NUMBER_WIDTH)
}
