// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Linkarc-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Linkarc and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Display-word resolution.
//!
//! Turns the parser's per-position lexical choices into the words the
//! diagram actually shows: islands are bracketed, idiom subscripts stripped,
//! the empty word suppressed, split stem+suffix pairs merged into the stem's
//! slot, and wall positions overwritten with their display names.

use std::fmt;

use smol_str::SmolStr;

use crate::model::Sentence;
use crate::options::DisplayOptions;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// An idiom-classified token carries no subscript mark to truncate at.
    /// The parser contract guarantees this never happens; a violation is
    /// surfaced instead of mangling the word.
    MalformedIdiom { word: usize, token: SmolStr },
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedIdiom { word, token } => {
                write!(f, "idiom token at word {word} has no subscript mark: {token}")
            }
        }
    }
}

impl std::error::Error for ResolveError {}

/// Resolves the display word for every sentence position.
///
/// Always returns exactly `sentence.len()` entries. Merging is single-pass,
/// left to right: a stem slot is first blanked when its right neighbor is a
/// real suffix, then overwritten with the merged word while that neighbor is
/// processed, so the merged text always survives.
pub fn resolve_display_words(
    sentence: &Sentence,
    options: &DisplayOptions,
) -> Result<Vec<SmolStr>, ResolveError> {
    let dict = sentence.dict();
    let markers = dict.markers();
    let hide_suffix = !options.display_suffixes;
    let len = sentence.len();
    let mut words: Vec<SmolStr> = Vec::with_capacity(len);

    for (i, slot) in sentence.words().iter().enumerate() {
        let mut text: SmolStr = match slot.chosen() {
            // An island: neither half of a split word was linked, so show
            // the original unsplit word in brackets.
            None => match slot.unsplit() {
                Some(unsplit) => SmolStr::new(format!("[{unsplit}]")),
                None => SmolStr::default(),
            },
            Some(chosen) if options.display_word_subscripts => {
                let mut token = chosen.token().clone();
                if markers.is_idiom_word(&token) {
                    let cut = token.rfind(markers.subscript_mark()).ok_or_else(|| {
                        ResolveError::MalformedIdiom {
                            word: i,
                            token: token.clone(),
                        }
                    })?;
                    token = SmolStr::new(&token[..cut]);
                }
                if &token == markers.empty_word() {
                    token = SmolStr::default();
                }
                token
            }
            // Dead upstream: subscript display is effectively always on.
            // The fallback is the first alternative, unfiltered by what the
            // parse actually chose.
            Some(_) => slot.alternatives().first().cloned().unwrap_or_default(),
        };

        // Suffix handling belongs to the subscripted-choice branch only;
        // islands keep their brackets untouched.
        if hide_suffix && options.display_word_subscripts && slot.chosen().is_some() {
            if markers.is_suffix(&text) && i > 0 {
                if let Some(stem) = sentence.words()[i - 1].chosen() {
                    // The stem may lack a subscript mark when the sentence
                    // merely contained an equals sign; then nothing merges.
                    if let Some(cut) = stem.token().rfind(markers.subscript_mark()) {
                        let suffix_tail = &text[markers.suffix_marker().len_utf8()..];
                        words[i - 1] = SmolStr::new(format!(
                            "{}{}",
                            &stem.token()[..cut],
                            suffix_tail
                        ));
                        text = SmolStr::default();
                    }
                }
            }
            if let Some(next) = sentence.word(i + 1).and_then(|w| w.chosen()) {
                if markers.is_suffix(next.token()) && next.token() != markers.empty_word() {
                    text = SmolStr::default();
                }
            }
        }

        words.push(text);
    }

    if dict.left_wall_defined() && len > 0 {
        words[0] = markers.left_wall_display().clone();
    }
    if dict.right_wall_defined() && len > 0 {
        words[len - 1] = markers.right_wall_display().clone();
    }

    Ok(words)
}
