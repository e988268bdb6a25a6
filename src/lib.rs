// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Linkarc-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Linkarc and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Linkarc — arc-diagram and PostScript printing for linkage parse results.
//!
//! The parser and dictionary live elsewhere; this crate turns an in-memory
//! [`model::Linkage`] into terminal text (word resolution → row packing →
//! pagination) and into the secondary flat/PostScript serializations.

pub mod corpus;
pub mod layout;
pub mod model;
pub mod options;
pub mod render;
pub mod resolve;
mod text;
