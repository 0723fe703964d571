// Copyright 2026 The emmetconv Authors.
// This project is dual-licensed under Apache 2.0 and MIT terms.
// See LICENSE-APACHE and LICENSE-MIT for details.

use serde::{Deserialize, Serialize};

/// The OpenLyrics XML namespace, written as the default namespace of the root element so that
/// child elements need no prefix.
pub const NAMESPACE: &str = "http://openlyrics.info/namespace/2009/song";

/// The version of the OpenLyrics schema these types target.
pub const SCHEMA_VERSION: &str = "0.8";

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename = "song")]
pub struct Song {
    #[serde(rename = "@xmlns")]
    pub xmlns: String,
    #[serde(rename = "@version")]
    pub version: String,
    #[serde(rename = "@createdIn", skip_serializing_if = "Option::is_none")]
    pub created_in: Option<String>,
    #[serde(rename = "@modifiedIn", skip_serializing_if = "Option::is_none")]
    pub modified_in: Option<String>,
    #[serde(rename = "@modifiedDate", skip_serializing_if = "Option::is_none")]
    pub modified_date: Option<String>,
    pub properties: Properties,
    pub lyrics: Lyrics,
}

impl Default for Song {
    fn default() -> Self {
        Self {
            xmlns: NAMESPACE.to_string(),
            version: SCHEMA_VERSION.to_string(),
            created_in: None,
            modified_in: None,
            modified_date: None,
            properties: Default::default(),
            lyrics: Default::default(),
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct Properties {
    pub titles: Titles,
    #[serde(default, skip_serializing_if = "Songbooks::is_empty")]
    pub songbooks: Songbooks,
}

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct Titles {
    #[serde(rename = "title")]
    pub titles: Vec<Title>,
}

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct Title {
    #[serde(rename = "@lang", skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
    #[serde(rename = "$text")]
    pub title: String,
}

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct Songbooks {
    #[serde(rename = "songbook")]
    pub songbooks: Vec<Songbook>,
}

impl Songbooks {
    pub fn is_empty(&self) -> bool {
        self.songbooks.is_empty()
    }
}

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct Songbook {
    #[serde(rename = "@name")]
    pub name: String,
    #[serde(rename = "@entry", skip_serializing_if = "Option::is_none")]
    pub entry: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct Lyrics {
    #[serde(rename = "verse", default)]
    pub verses: Vec<Verse>,
}

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct Verse {
    #[serde(rename = "@name")]
    pub name: String,
    #[serde(default)]
    pub lines: Vec<Lines>,
}

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct Lines {
    /// The `break="optional"` hint telling the presentation layer it may split the slide before
    /// the following `lines` element.
    #[serde(rename = "@break", skip_serializing_if = "Option::is_none")]
    pub break_hint: Option<String>,
    #[serde(rename = "$value", default)]
    pub contents: Vec<VerseContent>,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum VerseContent {
    #[serde(rename = "$text")]
    Text(String),
    Br,
}
