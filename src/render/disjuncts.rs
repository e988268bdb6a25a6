// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Linkarc-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Linkarc and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Flat disjunct and sense listings.

use std::fmt::Write as _;

use crate::corpus::CorpusScorer;
use crate::model::Linkage;

/// Lists the chosen disjunct per word with its cost, and its corpus score
/// when a scorer is supplied. Walls and islands are skipped.
pub fn render_disjuncts(linkage: &Linkage<'_>, scorer: Option<&dyn CorpusScorer>) -> String {
    let mut out = String::new();
    let len = linkage.num_words();
    if len < 2 {
        return out;
    }
    for word in 1..len - 1 {
        let Some(disjunct) = linkage.sentence().words()[word].chosen() else {
            continue;
        };
        let token = disjunct.token().as_str();
        let cost = disjunct.cost();
        let expression = disjunct.expression();
        match scorer {
            Some(scorer) => {
                let score = scorer.disjunct_score(linkage, word);
                let _ = writeln!(out, "{token:>21}    {cost:5.1} {score:6.3} {expression}");
            }
            None => {
                let _ = writeln!(out, "{token:>21}    {cost:5.1}  {expression}");
            }
        }
    }
    out
}

/// Lists corpus sense annotations per word, or a fixed notice when no
/// scorer is available.
pub fn render_senses(linkage: &Linkage<'_>, scorer: Option<&dyn CorpusScorer>) -> String {
    let mut out = String::new();
    let Some(scorer) = scorer else {
        out.push_str("Corpus statistics is not enabled in this version\n");
        return out;
    };
    for word in 0..linkage.num_words() {
        for sense in scorer.word_senses(linkage, word) {
            let _ = writeln!(
                out,
                "{} {} dj={} sense={} score={:.6}",
                sense.index, sense.word, sense.disjunct, sense.sense, sense.score
            );
        }
    }
    out
}
