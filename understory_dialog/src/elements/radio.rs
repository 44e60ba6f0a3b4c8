// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Single-choice rows and the group state they share.
//!
//! ## Numbering
//!
//! Radio rows are numbered by [`RootElement::prepare`](crate::RootElement::prepare)
//! in flattened order: section order, then row order, counting only radio rows.
//! The group's [`RadioGroup::selected`] is an index into that numbering.
//!
//! ## Transitions
//!
//! A row is either selected (its index equals the group's selection) or not.
//! Tapping an unselected row clears the checkmark on the previously selected
//! row's visible cell, sets it on the tapped row's cell, and stores the new
//! index in the group. Only those two cells are touched.

use alloc::string::String;

use crate::element::{RenderCx, SelectCx};
use crate::elements::StringElement;
use crate::types::{Accessory, CellId, RecycleKey};

/// Selection state shared by every radio row under one root.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RadioGroup {
    key: Option<String>,
    selected: usize,
}

impl RadioGroup {
    /// A group with `selected` initially chosen.
    pub fn new(selected: usize) -> Self {
        Self {
            key: None,
            selected,
        }
    }

    /// A group carrying an opaque key for external persistence.
    pub fn with_key(key: impl Into<String>, selected: usize) -> Self {
        Self {
            key: Some(key.into()),
            selected,
        }
    }

    /// Opaque key; not interpreted by the tree.
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    /// Flattened index of the selected radio row.
    pub fn selected(&self) -> usize {
        self.selected
    }

    pub(crate) fn select(&mut self, index: usize) {
        self.selected = index;
    }
}

/// A caption row that participates in its root's [`RadioGroup`].
#[derive(Debug)]
pub struct RadioElement {
    base: StringElement,
    group: Option<String>,
    pub(crate) radio_index: Option<usize>,
}

impl RadioElement {
    /// Create a radio row.
    pub fn new(caption: impl Into<String>) -> Self {
        Self {
            base: StringElement::new(caption),
            group: None,
            radio_index: None,
        }
    }

    /// Create a radio row tagged with a group name.
    pub fn with_group(caption: impl Into<String>, group: impl Into<String>) -> Self {
        Self {
            group: Some(group.into()),
            ..Self::new(caption)
        }
    }

    /// Display label.
    pub fn caption(&self) -> Option<&str> {
        self.base.caption()
    }

    /// Group name given at construction.
    pub fn group(&self) -> Option<&str> {
        self.group.as_deref()
    }

    /// Position in the root's flattened radio numbering.
    ///
    /// Only meaningful after the owning root has been prepared; reading it
    /// earlier is a programming error (asserted in debug builds, `None` otherwise).
    pub fn radio_index(&self) -> Option<usize> {
        debug_assert!(
            self.radio_index.is_some(),
            "radio index read before RootElement::prepare"
        );
        self.radio_index
    }

    /// The caption.
    pub fn summary(&self) -> String {
        self.base.summary()
    }

    pub(crate) fn is_selected_in(&self, selected: Option<usize>) -> bool {
        self.radio_index.is_some() && self.radio_index == selected
    }

    pub(crate) fn render(&mut self, cx: &mut RenderCx<'_>) -> CellId {
        let accessory = if self.is_selected_in(cx.radio_selected) {
            Accessory::Checkmark
        } else {
            Accessory::None
        };
        self.base.render_with(cx, RecycleKey::Radio, accessory)
    }

    pub(crate) fn on_selected(&mut self, cx: &mut SelectCx<'_>) {
        self.base.on_selected(cx);
    }
}
