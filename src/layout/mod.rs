// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Linkarc-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Linkarc and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Layout for the arc diagram: wall visibility, word centers and row
//! packing. The resulting [`arcs::ArcLayout`] is computed once and consumed
//! by both the terminal and the PostScript renderers.

pub mod arcs;

pub use arcs::{layout_arcs, wall_visibility, ArcLayout, ArcLayoutError, WallVisibility, MAX_HEIGHT};
