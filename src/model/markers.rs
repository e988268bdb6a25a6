// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Linkarc-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Linkarc and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Reserved lexical tokens, configured once per dictionary.
//!
//! Dictionaries that split words reserve a handful of magic tokens: the wall
//! display names and their suppressing connectors, the empty word and its
//! link label, and the suffix marker with its exceptions (equality-like
//! tokens of non-splitting dictionaries that must not classify as suffixes).

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Markers {
    left_wall_display: SmolStr,
    right_wall_display: SmolStr,
    left_wall_suppress: SmolStr,
    right_wall_suppress: SmolStr,
    empty_word: SmolStr,
    empty_word_suppress: SmolStr,
    suffix_marker: char,
    suffix_link_prefix: SmolStr,
    suffix_exceptions: Vec<SmolStr>,
    subscript_mark: char,
}

impl Default for Markers {
    fn default() -> Self {
        Self {
            left_wall_display: SmolStr::new_static("LEFT-WALL"),
            right_wall_display: SmolStr::new_static("RIGHT-WALL"),
            left_wall_suppress: SmolStr::new_static("Wd"),
            right_wall_suppress: SmolStr::new_static("RW"),
            empty_word: SmolStr::new_static("=.zzz"),
            empty_word_suppress: SmolStr::new_static("ZZZ"),
            suffix_marker: '=',
            suffix_link_prefix: SmolStr::new_static("LL"),
            suffix_exceptions: vec![
                SmolStr::new_static("=[!]"),
                SmolStr::new_static("=.v"),
                SmolStr::new_static("=.eq"),
            ],
            subscript_mark: '.',
        }
    }
}

impl Markers {
    pub fn left_wall_display(&self) -> &SmolStr {
        &self.left_wall_display
    }

    pub fn right_wall_display(&self) -> &SmolStr {
        &self.right_wall_display
    }

    pub fn left_wall_suppress(&self) -> &SmolStr {
        &self.left_wall_suppress
    }

    pub fn right_wall_suppress(&self) -> &SmolStr {
        &self.right_wall_suppress
    }

    pub fn empty_word(&self) -> &SmolStr {
        &self.empty_word
    }

    pub fn empty_word_suppress(&self) -> &SmolStr {
        &self.empty_word_suppress
    }

    pub fn suffix_marker(&self) -> char {
        self.suffix_marker
    }

    pub fn suffix_link_prefix(&self) -> &SmolStr {
        &self.suffix_link_prefix
    }

    pub fn subscript_mark(&self) -> char {
        self.subscript_mark
    }

    /// Whether `token` is a split-word suffix (`=ing.v`, `=.ed`, ...).
    ///
    /// A bare marker is an ordinary equals sign, and the fixed exception
    /// tokens stay words even though they start with the marker.
    pub fn is_suffix(&self, token: &str) -> bool {
        if !token.starts_with(self.suffix_marker) {
            return false;
        }
        if token.len() == self.suffix_marker.len_utf8() {
            return false;
        }
        !self.suffix_exceptions.iter().any(|exception| exception == token)
    }

    /// Whether `token` carries an idiom subscript (`.I` plus digits after
    /// the first subscript mark), as produced for multi-word expressions.
    pub fn is_idiom_word(&self, token: &str) -> bool {
        let Some(pos) = token.find(self.subscript_mark) else {
            return false;
        };
        let subscript = &token[pos + self.subscript_mark.len_utf8()..];
        let Some(rest) = subscript.strip_prefix('I') else {
            return false;
        };
        !rest.is_empty() && rest.bytes().all(|b| b.is_ascii_digit())
    }
}
