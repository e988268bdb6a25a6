// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Linkarc-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Linkarc and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Optional corpus-statistics capability.
//!
//! Corpus scoring is an external collaborator the embedder may or may not
//! supply. The listers take it as `Option<&dyn CorpusScorer>` and fall back
//! to a fixed "not enabled" response when it is absent.

use smol_str::SmolStr;

use crate::model::Linkage;

/// One sense annotation for a word position.
#[derive(Debug, Clone, PartialEq)]
pub struct WordSense {
    pub index: usize,
    pub word: SmolStr,
    pub disjunct: SmolStr,
    pub sense: SmolStr,
    pub score: f64,
}

/// Corpus-derived scores for a linkage.
pub trait CorpusScorer {
    /// Score of the disjunct chosen at `word`.
    fn disjunct_score(&self, linkage: &Linkage<'_>, word: usize) -> f64;

    /// Sense annotations for `word`, best first.
    fn word_senses(&self, linkage: &Linkage<'_>, word: usize) -> Vec<WordSense>;
}
