// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Linkarc-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Linkarc and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Parser-facing input model.
//!
//! A [`Sentence`] is the printing view of one parsed sentence: the original
//! tokenization per position, the disjunct the parser chose there (if any),
//! and the dictionary flags that matter for display. It is immutable for the
//! lifetime of any [`crate::model::Linkage`] borrowing it.

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use super::markers::Markers;

/// The disjunct chosen for one word position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Disjunct {
    token: SmolStr,
    #[serde(default)]
    expression: SmolStr,
    #[serde(default)]
    cost: f64,
}

impl Disjunct {
    pub fn new(token: impl Into<SmolStr>, expression: impl Into<SmolStr>, cost: f64) -> Self {
        Self {
            token: token.into(),
            expression: expression.into(),
            cost,
        }
    }

    /// The subscripted lexical string (`cat.n`, `=.ed`, ...).
    pub fn token(&self) -> &SmolStr {
        &self.token
    }

    /// The connector expression, as shown by the disjunct lister.
    pub fn expression(&self) -> &SmolStr {
        &self.expression
    }

    pub fn cost(&self) -> f64 {
        self.cost
    }
}

/// One sentence position: surface form, tokenization alternatives, and the
/// parser's choice. A position with no chosen disjunct is an *island*.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SentenceWord {
    unsplit: Option<SmolStr>,
    alternatives: Vec<SmolStr>,
    chosen: Option<Disjunct>,
}

impl SentenceWord {
    pub fn new(unsplit: impl Into<SmolStr>) -> Self {
        Self {
            unsplit: Some(unsplit.into()),
            alternatives: Vec::new(),
            chosen: None,
        }
    }

    /// A synthetic position with no surface form (walls, empty words).
    pub fn synthetic() -> Self {
        Self::default()
    }

    pub fn set_alternatives(&mut self, alternatives: Vec<SmolStr>) {
        self.alternatives = alternatives;
    }

    pub fn set_chosen(&mut self, chosen: Option<Disjunct>) {
        self.chosen = chosen;
    }

    pub fn unsplit(&self) -> Option<&SmolStr> {
        self.unsplit.as_ref()
    }

    pub fn alternatives(&self) -> &[SmolStr] {
        &self.alternatives
    }

    pub fn chosen(&self) -> Option<&Disjunct> {
        self.chosen.as_ref()
    }
}

/// Display-relevant dictionary facts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Dictionary {
    left_wall_defined: bool,
    right_wall_defined: bool,
    markers: Markers,
}

impl Dictionary {
    pub fn new(left_wall_defined: bool, right_wall_defined: bool) -> Self {
        Self {
            left_wall_defined,
            right_wall_defined,
            markers: Markers::default(),
        }
    }

    pub fn with_markers(mut self, markers: Markers) -> Self {
        self.markers = markers;
        self
    }

    pub fn left_wall_defined(&self) -> bool {
        self.left_wall_defined
    }

    pub fn right_wall_defined(&self) -> bool {
        self.right_wall_defined
    }

    pub fn markers(&self) -> &Markers {
        &self.markers
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Sentence {
    #[serde(default)]
    words: Vec<SentenceWord>,
    #[serde(default)]
    dict: Dictionary,
}

impl Sentence {
    pub fn new(dict: Dictionary) -> Self {
        Self {
            words: Vec::new(),
            dict,
        }
    }

    pub fn push_word(&mut self, word: SentenceWord) {
        self.words.push(word);
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn words(&self) -> &[SentenceWord] {
        &self.words
    }

    pub fn word(&self, index: usize) -> Option<&SentenceWord> {
        self.words.get(index)
    }

    pub fn dict(&self) -> &Dictionary {
        &self.dict
    }
}
