// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types.
//!
//! Lookups that are allowed to miss (radio paths, summary sources, rows at a path)
//! return `Option` instead. These errors cover positional edits and remote loads.

use alloc::string::String;

/// A structural edit addressed something that does not exist.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TreeError {
    /// Section position past the end of the root.
    #[error("section index {index} out of bounds (root has {len} sections)")]
    SectionOutOfBounds {
        /// Requested position.
        index: usize,
        /// Number of sections.
        len: usize,
    },
    /// Row position past the end of a section.
    #[error("row index {index} out of bounds (section {section} has {len} rows)")]
    RowOutOfBounds {
        /// Section position.
        section: usize,
        /// Requested row position.
        index: usize,
        /// Number of rows in the section.
        len: usize,
    },
    /// The section handle refers to a removed section.
    #[error("stale section id")]
    StaleSection,
    /// The element handle refers to a removed element.
    #[error("stale element id")]
    StaleElement,
}

/// Failure reported by the host while loading a link row's page.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LoadError {
    /// The address could not be turned into a request.
    #[error("invalid address: {0}")]
    InvalidUrl(String),
    /// The request failed; carries the host's localized description.
    #[error("{0}")]
    Failed(String),
    /// The load was cancelled before it finished.
    #[error("the request was cancelled")]
    Cancelled,
}
