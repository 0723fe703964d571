// Copyright 2026 The emmetconv Authors.
// This project is dual-licensed under Apache 2.0 and MIT terms.
// See LICENSE-APACHE and LICENSE-MIT for details.

//! Utilities for converting songs from the emmet YAML songbook format to other lyrics formats.

mod breaks;
mod model;
mod open_lyrics;

pub use crate::{
    breaks::{
        HARD_BREAK_MARKER, SOFT_BREAK_MARKER, SoftLineBreakStrategy, preprocess,
        split_on_hard_breaks,
    },
    model::{BookEntry, SongDocument, SongLyrics, SourceVerse},
    open_lyrics::{ConvertError, ConvertedSong, PRIMARY_BOOK, convert},
};
