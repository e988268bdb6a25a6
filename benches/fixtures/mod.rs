// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Linkarc-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Linkarc and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

#![allow(dead_code)]

// Shared deterministic benchmark fixtures (no RNG).

use smol_str::SmolStr;

use linkarc::model::{Dictionary, Disjunct, Link, Sentence, SentenceWord};

fn chosen_word(unsplit: &str, token: &str, expression: &str) -> SentenceWord {
    let mut word = SentenceWord::new(unsplit);
    word.set_alternatives(vec![SmolStr::new(unsplit)]);
    word.set_chosen(Some(Disjunct::new(token, expression, 0.0)));
    word
}

/// A flat `w0 w1 ... wN` sentence with a nested chain of links: adjacent
/// pairs at the bottom and progressively wider arcs above them.
pub fn nested_sentence(word_count: usize) -> (Sentence, Vec<Link>) {
    let mut sentence = Sentence::new(Dictionary::new(false, false));
    for i in 0..word_count {
        let surface = format!("word{i}");
        sentence.push_word(chosen_word(&surface, &surface, "X+"));
    }

    let mut links = Vec::new();
    for left in 0..word_count.saturating_sub(1) {
        links.push(Link::new(left, left + 1, "AB", "AB", "AB").expect("link"));
    }
    // Wider arcs, kept shallow enough to stay inside the height bound.
    for span in [2usize, 4, 8] {
        let mut left = 0;
        while left + span < word_count {
            links.push(Link::new(left, left + span, "CD", "CD", "CD").expect("link"));
            left += span;
        }
    }
    (sentence, links)
}
