// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Linkarc-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Linkarc and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Renderers over a packed [`crate::layout::ArcLayout`]: the paginated
//! terminal diagram, the PostScript description, and the flat listers.
//!
//! Every renderer returns an owned, newline-terminated `String`.

pub mod diagram;
pub mod disjuncts;
pub mod links;
pub mod postscript;

pub use diagram::render_diagram;
pub use disjuncts::{render_disjuncts, render_senses};
pub use links::render_links_and_domains;
pub use postscript::{render_postscript, PostscriptMode};
