// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Linkarc-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Linkarc and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Arc row packing.
//!
//! Links are packed greedily, narrowest center-span first, each into the
//! lowest row whose cells strictly between its endpoint columns are still
//! blank. Packing draws directly into a character grid (corner markers,
//! dash fill, connector label, vertical carries), because the drawn cells
//! are exactly the occupancy later links must respect.

use std::fmt;

use smallvec::SmallVec;
use smol_str::SmolStr;

use crate::model::{Linkage, Markers};
use crate::resolve::ResolveError;
use crate::text::text_len;

/// Maximum number of packed arc rows; the expanded diagram (words line,
/// tick rows) must also fit within this bound.
pub const MAX_HEIGHT: usize = 30;

/// A fixed-size blank-initialized character grid for the arc rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Picture {
    width: usize,
    rows: Vec<Vec<char>>,
}

impl Picture {
    fn new(width: usize) -> Self {
        Self {
            width,
            rows: vec![vec![' '; width]; MAX_HEIGHT],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn row(&self, row: usize) -> &[char] {
        &self.rows[row]
    }

    fn get(&self, row: usize, col: usize) -> char {
        self.rows[row][col]
    }

    fn set(&mut self, row: usize, col: usize, ch: char) {
        debug_assert!(row < MAX_HEIGHT && col < self.width);
        self.rows[row][col] = ch;
    }

    /// Whether every cell strictly between `left` and `right` is blank.
    fn is_blank_between(&self, row: usize, left: usize, right: usize) -> bool {
        self.rows[row][left + 1..right].iter().all(|&ch| ch == ' ')
    }
}

/// Whether the sentence-boundary positions take part in the display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WallVisibility {
    pub show_first: bool,
    pub show_last: bool,
}

/// Decides wall display per side.
///
/// A defined wall is shown when walls are forced on, when more than one link
/// touches it, or when its single link does not carry that side's suppress
/// connector. An undefined wall position is an ordinary word. The
/// wall-to-wall link never argues for showing the left wall.
pub fn wall_visibility(linkage: &Linkage<'_>) -> WallVisibility {
    let dict = linkage.sentence().dict();
    let markers = dict.markers();
    let options = linkage.options();
    let last = linkage.num_words().saturating_sub(1);

    let show_first = if dict.left_wall_defined() {
        let mut connectors = 0usize;
        let mut suppressor_used = false;
        if !options.display_walls {
            for link in linkage.links() {
                let Some(bounds) = link.bounds() else { continue };
                if bounds.left() != 0 || bounds.right() == last {
                    continue;
                }
                connectors += 1;
                if link.llabel() == markers.left_wall_suppress() {
                    suppressor_used = true;
                }
            }
        }
        (!suppressor_used && connectors != 0) || connectors > 1 || options.display_walls
    } else {
        true
    };

    let show_last = if dict.right_wall_defined() {
        let mut connectors = 0usize;
        let mut suppressor_used = false;
        for link in linkage.links() {
            let Some(bounds) = link.bounds() else { continue };
            if bounds.right() != last {
                continue;
            }
            connectors += 1;
            if link.llabel() == markers.right_wall_suppress() {
                suppressor_used = true;
            }
        }
        (!suppressor_used && connectors != 0) || connectors > 1 || options.display_walls
    } else {
        true
    };

    WallVisibility {
        show_first,
        show_last,
    }
}

/// The packed diagram layout, shared by the terminal and PostScript
/// renderers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArcLayout {
    show_first: bool,
    show_last: bool,
    words_to_print: usize,
    centers: Vec<usize>,
    link_rows: Vec<Option<usize>>,
    top_row: usize,
    picture: Picture,
}

impl ArcLayout {
    pub fn show_first(&self) -> bool {
        self.show_first
    }

    pub fn show_last(&self) -> bool {
        self.show_last
    }

    /// Number of leading word positions taking part in the display (a hidden
    /// right wall is cut off here; a hidden left wall stays in the count but
    /// is skipped by starting at index 1).
    pub fn words_to_print(&self) -> usize {
        self.words_to_print
    }

    /// Column of each word's center; hidden positions keep their default.
    pub fn centers(&self) -> &[usize] {
        &self.centers
    }

    /// Packed row per link, `None` for links the packer skipped.
    pub fn link_rows(&self) -> &[Option<usize>] {
        &self.link_rows
    }

    /// Highest packed row index.
    pub fn top_row(&self) -> usize {
        self.top_row
    }

    pub fn picture(&self) -> &Picture {
        &self.picture
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArcLayoutError {
    Resolve(ResolveError),
    /// The expanded diagram would not fit the fixed height bound.
    DiagramTooHigh { row: usize, max_height: usize },
}

impl fmt::Display for ArcLayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Resolve(err) => write!(f, "display-word resolution failed: {err}"),
            Self::DiagramTooHigh { row, max_height } => {
                write!(f, "link row {row} would exceed the diagram height bound {max_height}")
            }
        }
    }
}

impl std::error::Error for ArcLayoutError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Resolve(err) => Some(err),
            Self::DiagramTooHigh { .. } => None,
        }
    }
}

impl From<ResolveError> for ArcLayoutError {
    fn from(value: ResolveError) -> Self {
        Self::Resolve(value)
    }
}

/// Effective width of one rendered word slot in character columns,
/// including the separating space. A hidden suffix token gets a single
/// blank column and no text.
pub(crate) fn cell_width(word: &str, markers: &Markers, hide_suffix: bool) -> usize {
    if hide_suffix && markers.is_suffix(word) {
        1
    } else {
        text_len(word) + 1
    }
}

fn set_centers(
    words: &[SmolStr],
    markers: &Markers,
    hide_suffix: bool,
    show_first: bool,
    words_to_print: usize,
) -> Vec<usize> {
    let mut centers = vec![0usize; words.len()];
    let mut total = 0usize;
    let start = usize::from(!show_first);
    for i in start..words_to_print {
        let word = &words[i];
        if hide_suffix && markers.is_suffix(word) {
            centers[i] = total;
            total += 1;
            continue;
        }
        let len = text_len(word);
        centers[i] = total + len / 2;
        total += len + 1;
    }
    centers
}

/// The label drawn over an arc: the full connector name, or only its
/// leading uppercase part when link subscripts are off.
fn link_label(name: &str, display_link_subscripts: bool) -> &str {
    if display_link_subscripts {
        return name;
    }
    let upper_len: usize = name
        .chars()
        .take_while(|ch| ch.is_uppercase())
        .map(char::len_utf8)
        .sum();
    &name[..upper_len]
}

/// Packs the linkage's links into arc rows and draws them.
pub fn layout_arcs(linkage: &Linkage<'_>) -> Result<ArcLayout, ArcLayoutError> {
    let options = linkage.options();
    let markers = linkage.sentence().dict().markers();
    let hide_suffix = !options.display_suffixes;
    let words = linkage.display_words()?;
    let num_words = linkage.num_words();
    let last = num_words.saturating_sub(1);

    let visibility = wall_visibility(linkage);
    let mut words_to_print = num_words;
    if !visibility.show_last {
        words_to_print -= 1;
    }

    if words_to_print == 0 || (!visibility.show_first && words_to_print == 1) {
        return Ok(ArcLayout {
            show_first: visibility.show_first,
            show_last: visibility.show_last,
            words_to_print,
            centers: vec![0; num_words],
            link_rows: vec![None; linkage.links().len()],
            top_row: 0,
            picture: Picture::new(0),
        });
    }

    let centers = set_centers(words, markers, hide_suffix, visibility.show_first, words_to_print);
    let line_len = centers[words_to_print - 1] + 1;

    let mut picture = Picture::new(line_len);
    let mut link_rows = vec![None; linkage.links().len()];
    let mut top_row = 0usize;

    // Candidates in increasing center-span order, stable on link order.
    let mut order: SmallVec<[(usize, usize, usize); 16]> = SmallVec::new();
    for (j, link) in linkage.links().iter().enumerate() {
        let Some(bounds) = link.bounds() else { continue };
        if !visibility.show_first && bounds.left() == 0 {
            continue;
        }
        if !visibility.show_last && bounds.right() == last {
            continue;
        }
        if link.label() == markers.empty_word_suppress() {
            continue;
        }
        if hide_suffix && link.label().starts_with(markers.suffix_link_prefix().as_str()) {
            continue;
        }
        order.push((centers[bounds.left()], centers[bounds.right()], j));
    }
    order.sort_by_key(|&(left, right, _)| right - left);

    for &(left, right, j) in &order {
        let mut row = 0usize;
        while row < MAX_HEIGHT && !picture.is_blank_between(row, left, right) {
            row += 1;
        }
        if 2 * row + 2 > MAX_HEIGHT - 1 {
            return Err(ArcLayoutError::DiagramTooHigh {
                row,
                max_height: MAX_HEIGHT,
            });
        }
        link_rows[j] = Some(row);
        if row > top_row {
            top_row = row;
        }

        picture.set(row, left, '+');
        picture.set(row, right, '+');
        for col in left + 1..right {
            picture.set(row, col, '-');
        }

        let label = link_label(linkage.links()[j].label(), options.display_link_subscripts);
        let label_len = text_len(label);
        // Center the label over the span; left-justify after the corner when
        // centering would cross it.
        let centered = (left as isize + right as isize - label_len as isize) / 2 + 1;
        let mut pos = if centered <= left as isize {
            left + 1
        } else {
            (left + right + 2 - label_len) / 2
        };
        for ch in label.chars() {
            if pos >= right || picture.get(row, pos) != '-' {
                break;
            }
            picture.set(row, pos, ch);
            pos += 1;
        }

        // Carry both endpoints down to the words line.
        for below in 0..row {
            if picture.get(below, left) == ' ' {
                picture.set(below, left, '|');
            }
            if picture.get(below, right) == ' ' {
                picture.set(below, right, '|');
            }
        }
    }

    Ok(ArcLayout {
        show_first: visibility.show_first,
        show_last: visibility.show_last,
        words_to_print,
        centers,
        link_rows,
        top_row,
        picture,
    })
}
