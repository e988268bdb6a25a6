// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Linkarc-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Linkarc and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Input model: sentences, dictionaries, links and linkages.

pub(crate) mod fixtures;
pub mod linkage;
pub mod markers;
pub mod sentence;

pub use linkage::{Link, LinkBounds, LinkError, Linkage};
pub use markers::Markers;
pub use sentence::{Dictionary, Disjunct, Sentence, SentenceWord};
