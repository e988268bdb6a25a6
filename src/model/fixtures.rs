// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Linkarc-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Linkarc and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

#![allow(dead_code)]

// Shared deterministic test fixtures.

use smol_str::SmolStr;

use super::linkage::Link;
use super::sentence::{Dictionary, Disjunct, Sentence, SentenceWord};

fn chosen_word(unsplit: &str, token: &str, expression: &str) -> SentenceWord {
    let mut word = SentenceWord::new(unsplit);
    word.set_alternatives(vec![SmolStr::new(unsplit)]);
    word.set_chosen(Some(Disjunct::new(token, expression, 0.0)));
    word
}

/// `LEFT-WALL the cat ran . RIGHT-WALL`, every position chosen.
pub(crate) fn cat_sentence() -> Sentence {
    let mut sentence = Sentence::new(Dictionary::new(true, true));
    let mut wall = SentenceWord::synthetic();
    wall.set_chosen(Some(Disjunct::new("LEFT-WALL", "Wd+", 0.0)));
    sentence.push_word(wall);
    sentence.push_word(chosen_word("the", "the", "Ds+"));
    sentence.push_word(chosen_word("cat", "cat", "Ds- Ss+"));
    sentence.push_word(chosen_word("ran", "ran", "Ss- Xp+"));
    sentence.push_word(chosen_word(".", ".", "Xp-"));
    let mut wall = SentenceWord::synthetic();
    wall.set_chosen(Some(Disjunct::new("RIGHT-WALL", "RW-", 0.0)));
    sentence.push_word(wall);
    sentence
}

/// The single determiner link of [`cat_sentence`].
pub(crate) fn cat_links() -> Vec<Link> {
    vec![Link::new(1, 2, "Ds", "Ds", "Ds").expect("link")]
}

/// A fuller parse of [`cat_sentence`] touching both walls.
pub(crate) fn cat_links_with_walls() -> Vec<Link> {
    vec![
        Link::new(0, 3, "Wd", "Wd", "Wd").expect("link"),
        Link::new(1, 2, "Ds", "Ds", "Ds").expect("link"),
        Link::new(2, 3, "Ss", "Ss", "Ss").expect("link"),
        Link::new(3, 4, "Xp", "Xp", "Xp").expect("link"),
        Link::new(4, 5, "RW", "RW", "RW").expect("link"),
    ]
}

/// A split-word sentence: stem `run.v` followed by suffix `=.ed`.
pub(crate) fn stem_suffix_sentence() -> Sentence {
    let mut sentence = Sentence::new(Dictionary::new(false, false));
    sentence.push_word(chosen_word("he", "he", "Ss+"));
    sentence.push_word(chosen_word("runed", "run.v", "Ss- LL+"));
    sentence.push_word(chosen_word("runed", "=.ed", "LL-"));
    sentence
}

pub(crate) fn stem_suffix_links() -> Vec<Link> {
    vec![
        Link::new(0, 1, "Ss", "Ss", "Ss").expect("link"),
        Link::new(1, 2, "LL", "LL", "LL").expect("link"),
    ]
}

/// A Cyrillic sentence whose glyphs are two bytes each.
pub(crate) fn multibyte_sentence() -> Sentence {
    let mut sentence = Sentence::new(Dictionary::new(false, false));
    sentence.push_word(chosen_word("кошка", "кошка", "SS+"));
    sentence.push_word(chosen_word("бежала", "бежала", "SS- E+"));
    sentence.push_word(chosen_word("быстро", "быстро", "E-"));
    sentence
}

pub(crate) fn multibyte_links() -> Vec<Link> {
    vec![
        Link::new(0, 1, "SS", "SS", "SS").expect("link"),
        Link::new(1, 2, "E", "E", "E").expect("link"),
    ]
}
