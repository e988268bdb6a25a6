// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Linkarc-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Linkarc and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Linkage and link types.
//!
//! A [`Linkage`] is one parse result: a borrowed [`Sentence`], the chosen
//! [`Link`]s, and the display options in force. Display words are resolved
//! lazily on the first print request and cached for the linkage's lifetime;
//! the cache is a [`OnceCell`], so a `Linkage` is deliberately not `Sync` —
//! concurrent first prints on a shared linkage must be serialized upstream.

use std::cell::OnceCell;
use std::fmt;

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use crate::options::DisplayOptions;
use crate::resolve::{resolve_display_words, ResolveError};

use super::sentence::Sentence;

/// Validated word-position endpoints of a link, `left < right`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkBounds {
    left: usize,
    right: usize,
}

impl LinkBounds {
    pub fn left(&self) -> usize {
        self.left
    }

    pub fn right(&self) -> usize {
        self.right
    }
}

/// A labeled edge between two word positions.
///
/// An *excluded* link (no bounds) is carried in the link list but skipped by
/// every printer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    #[serde(default)]
    bounds: Option<LinkBounds>,
    label: SmolStr,
    #[serde(default)]
    llabel: SmolStr,
    #[serde(default)]
    rlabel: SmolStr,
    #[serde(default)]
    domains: Vec<SmolStr>,
}

impl Link {
    pub fn new(
        left: usize,
        right: usize,
        label: impl Into<SmolStr>,
        llabel: impl Into<SmolStr>,
        rlabel: impl Into<SmolStr>,
    ) -> Result<Self, LinkError> {
        if left >= right {
            return Err(LinkError::ReversedBounds { left, right });
        }
        Ok(Self {
            bounds: Some(LinkBounds { left, right }),
            label: label.into(),
            llabel: llabel.into(),
            rlabel: rlabel.into(),
            domains: Vec::new(),
        })
    }

    /// A link excluded from rendering, kept for index stability.
    pub fn excluded(label: impl Into<SmolStr>) -> Self {
        Self {
            bounds: None,
            label: label.into(),
            llabel: SmolStr::default(),
            rlabel: SmolStr::default(),
            domains: Vec::new(),
        }
    }

    pub fn set_domains(&mut self, domains: Vec<SmolStr>) {
        self.domains = domains;
    }

    pub fn bounds(&self) -> Option<&LinkBounds> {
        self.bounds.as_ref()
    }

    pub fn is_excluded(&self) -> bool {
        self.bounds.is_none()
    }

    pub fn label(&self) -> &SmolStr {
        &self.label
    }

    pub fn llabel(&self) -> &SmolStr {
        &self.llabel
    }

    pub fn rlabel(&self) -> &SmolStr {
        &self.rlabel
    }

    /// Domain-type names, in post-processing order.
    pub fn domains(&self) -> &[SmolStr] {
        &self.domains
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkError {
    ReversedBounds { left: usize, right: usize },
    OutOfRange { right: usize, last_word: usize },
}

impl fmt::Display for LinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ReversedBounds { left, right } => {
                write!(f, "link bounds must satisfy left < right, got {left} >= {right}")
            }
            Self::OutOfRange { right, last_word } => {
                write!(f, "link right end {right} exceeds last word index {last_word}")
            }
        }
    }
}

impl std::error::Error for LinkError {}

/// One parse result, ready for printing.
#[derive(Debug, Clone)]
pub struct Linkage<'s> {
    sentence: &'s Sentence,
    links: Vec<Link>,
    options: DisplayOptions,
    violation: Option<SmolStr>,
    words: OnceCell<Vec<SmolStr>>,
}

impl<'s> Linkage<'s> {
    /// Validates every connected link against the sentence bounds.
    pub fn new(
        sentence: &'s Sentence,
        links: Vec<Link>,
        options: DisplayOptions,
    ) -> Result<Self, LinkError> {
        let last_word = sentence.len().saturating_sub(1);
        for link in &links {
            if let Some(bounds) = link.bounds() {
                if bounds.right() > last_word {
                    return Err(LinkError::OutOfRange {
                        right: bounds.right(),
                        last_word,
                    });
                }
            }
        }
        Ok(Self {
            sentence,
            links,
            options,
            violation: None,
            words: OnceCell::new(),
        })
    }

    pub fn sentence(&self) -> &'s Sentence {
        self.sentence
    }

    pub fn num_words(&self) -> usize {
        self.sentence.len()
    }

    pub fn links(&self) -> &[Link] {
        &self.links
    }

    pub fn options(&self) -> &DisplayOptions {
        &self.options
    }

    /// Post-processing rule violation, shown by the link/domain lister.
    pub fn violation(&self) -> Option<&str> {
        self.violation.as_deref()
    }

    pub fn set_violation(&mut self, violation: Option<SmolStr>) {
        self.violation = violation;
    }

    /// The resolved display words, one per sentence position.
    ///
    /// Resolved on first use and cached; later calls return the cached slice
    /// even if they race through the error path first.
    pub fn display_words(&self) -> Result<&[SmolStr], ResolveError> {
        if self.words.get().is_none() {
            let words = resolve_display_words(self.sentence, &self.options)?;
            let _ = self.words.set(words);
        }
        match self.words.get() {
            Some(words) => Ok(words.as_slice()),
            // set() above cannot have failed on an empty cell.
            None => unreachable!("display-word cache populated above"),
        }
    }
}
