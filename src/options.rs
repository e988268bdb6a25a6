// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Linkarc-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Linkarc and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Display options recognized by the printers.

use serde::{Deserialize, Serialize};

/// Default pagination budget, in character columns.
pub const DEFAULT_SCREEN_WIDTH: usize = 79;

/// Options controlling word resolution, row packing and pagination.
///
/// Defaults match the upstream parse options: subscripts shown, suffixes
/// hidden, walls hidden unless linked, collapsed connector-tick rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayOptions {
    /// Show sentence-boundary walls unconditionally.
    pub display_walls: bool,
    /// Show chosen tokens with their subscripts (idiom subscripts are still
    /// stripped). Effectively always on upstream.
    pub display_word_subscripts: bool,
    /// Show split stem/suffix tokens as-is instead of merging and hiding.
    pub display_suffixes: bool,
    /// Label arcs with the full connector name rather than its leading
    /// uppercase part.
    pub display_link_subscripts: bool,
    /// Collapse the per-row connector-tick lines into a single shared line.
    pub display_short: bool,
    /// Pagination budget, in character columns.
    pub screen_width: usize,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            display_walls: false,
            display_word_subscripts: true,
            display_suffixes: false,
            display_link_subscripts: true,
            display_short: true,
            screen_width: DEFAULT_SCREEN_WIDTH,
        }
    }
}
