// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Caption/value row, optionally tappable.

use alloc::boxed::Box;
use alloc::string::String;

use crate::element::{RenderCx, SelectCx};
use crate::surface::{Context, dequeue_or_create};
use crate::types::{
    Accessory, CellContent, CellId, CellStyle, RecycleKey, SelectionStyle, TextAlignment,
};

type Tapped = Box<dyn FnMut(&mut dyn Context)>;

/// A row showing a caption and an optional value.
pub struct StringElement {
    caption: Option<String>,
    value: Option<String>,
    /// Alignment of the caption.
    pub alignment: TextAlignment,
    tapped: Option<Tapped>,
}

impl core::fmt::Debug for StringElement {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("StringElement")
            .field("caption", &self.caption)
            .field("value", &self.value)
            .field("alignment", &self.alignment)
            .field("tapped", &self.tapped.is_some())
            .finish()
    }
}

impl StringElement {
    /// A caption-only row.
    pub fn new(caption: impl Into<String>) -> Self {
        Self {
            caption: Some(caption.into()),
            value: None,
            alignment: TextAlignment::Left,
            tapped: None,
        }
    }

    /// A row with a caption and a value shown on the right.
    pub fn with_value(caption: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
            ..Self::new(caption)
        }
    }

    /// A caption-only row that runs `tapped` when selected.
    pub fn with_tapped(
        caption: impl Into<String>,
        tapped: impl FnMut(&mut dyn Context) + 'static,
    ) -> Self {
        Self {
            tapped: Some(Box::new(tapped)),
            ..Self::new(caption)
        }
    }

    /// Set the caption alignment.
    #[must_use]
    pub fn aligned(mut self, alignment: TextAlignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Display label.
    pub fn caption(&self) -> Option<&str> {
        self.caption.as_deref()
    }

    /// Value shown on the right.
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Replace the value. Rows switch cell style between valued and plain, so
    /// the surface must re-request the row after this changes presence.
    pub fn set_value(&mut self, value: Option<String>) {
        self.value = value;
    }

    /// The caption.
    pub fn summary(&self) -> String {
        self.caption.clone().unwrap_or_default()
    }

    pub(crate) fn recycle_key(&self) -> RecycleKey {
        if self.value.is_some() {
            RecycleKey::StringValue
        } else {
            RecycleKey::String
        }
    }

    /// Cell content for this row with the given accessory.
    pub(crate) fn content(&self, accessory: Accessory) -> CellContent {
        CellContent {
            text: self.caption.clone(),
            detail: self.value.clone(),
            alignment: self.alignment,
            accessory,
            selection: SelectionStyle::Highlight,
            control: None,
        }
    }

    /// Dequeue or create a cell under `key` and fill it.
    pub(crate) fn render_with(
        &self,
        cx: &mut RenderCx<'_>,
        key: RecycleKey,
        accessory: Accessory,
    ) -> CellId {
        let style = if self.value.is_some() {
            CellStyle::Value
        } else {
            CellStyle::Plain
        };
        let (cell, reused) = dequeue_or_create(cx.surface, key, style);
        tracing::trace!(cell = cell.get(), reused, key = key.as_str(), "render string row");
        cx.surface.update_cell(cell, self.content(accessory));
        cell
    }

    pub(crate) fn render(&mut self, cx: &mut RenderCx<'_>) -> CellId {
        self.render_with(cx, self.recycle_key(), Accessory::None)
    }

    pub(crate) fn on_selected(&mut self, cx: &mut SelectCx<'_>) {
        if let Some(tapped) = &mut self.tapped {
            tapped(&mut *cx.context);
        }
        cx.surface.deselect_row(cx.path, true);
    }
}
