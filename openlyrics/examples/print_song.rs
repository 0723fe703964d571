// Copyright 2026 The emmetconv Authors.
// This project is dual-licensed under Apache 2.0 and MIT terms.
// See LICENSE-APACHE and LICENSE-MIT for details.

use openlyrics::{rendered_lines, types::Song};
use quick_xml::de::from_reader;
use std::io::stdin;

fn main() {
    let song: Song = from_reader(stdin().lock()).unwrap();
    println!("= {} =", song.properties.titles.titles[0].title);
    for songbook in &song.properties.songbooks.songbooks {
        if let Some(entry) = &songbook.entry {
            println!("{}: {entry}", songbook.name);
        }
    }
    for verse in &song.lyrics.verses {
        println!("{}:", verse.name);
        for lines in &verse.lines {
            for line in rendered_lines(&lines.contents) {
                println!("{line}");
            }
            println!();
        }
    }
}
