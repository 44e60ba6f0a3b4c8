// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text entry row.
//!
//! Entry fields in one section share a horizontal offset so their left edges
//! line up. The offset is derived from the widest entry caption in the section
//! (capped at [`LayoutMetrics::entry_label_max_width`]) and cached on the
//! section by the owning root; it reaches the row through [`RenderCx`].
//!
//! Typed text stays in the field until the user submits. On submit the owning
//! root commits the text into the row's value and moves focus to the next entry
//! row of the same section, or resigns focus if there is none.
//!
//! [`LayoutMetrics::entry_label_max_width`]: crate::LayoutMetrics::entry_label_max_width

use alloc::boxed::Box;
use alloc::string::String;

use crate::element::RenderCx;
use crate::surface::{ControlView, dequeue_or_create};
use crate::types::{
    Autoresizing, CellContent, CellId, CellStyle, ControlKind, ControlSpec, ControlValue, Path,
    RecycleKey, SelectionStyle,
};

/// Where keyboard focus went after a submit.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FocusChange {
    /// Focus moved to the entry row at this path.
    Moved(Path),
    /// The next entry row at this path has no field yet (it was never
    /// scrolled into view). Focus stays where it was; scroll the row in and
    /// call [`ListAdapter::focus_entry`](crate::ListAdapter::focus_entry).
    Pending(Path),
    /// No later entry row exists; focus was resigned.
    Resigned,
}

/// A row with a caption and a single-line text field.
#[derive(Debug)]
pub struct EntryElement {
    caption: Option<String>,
    placeholder: Option<String>,
    value: String,
    password: bool,
    field: Option<Box<dyn ControlView>>,
}

impl EntryElement {
    /// Create a plain text entry.
    pub fn new(
        caption: impl Into<String>,
        placeholder: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        let placeholder = placeholder.into();
        Self {
            caption: Some(caption.into()),
            placeholder: (!placeholder.is_empty()).then_some(placeholder),
            value: value.into(),
            password: false,
            field: None,
        }
    }

    /// Create an entry whose contents are obscured.
    pub fn password(
        caption: impl Into<String>,
        placeholder: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            password: true,
            ..Self::new(caption, placeholder, value)
        }
    }

    /// Display label.
    pub fn caption(&self) -> Option<&str> {
        self.caption.as_deref()
    }

    /// Hint shown while the field is empty.
    pub fn placeholder(&self) -> Option<&str> {
        self.placeholder.as_deref()
    }

    /// Last committed text.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// True if the field obscures its contents.
    pub fn is_password(&self) -> bool {
        self.password
    }

    /// Replace the committed text, updating the field if it is materialized.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        if let Some(field) = &mut self.field {
            field.set_value(ControlValue::Text(self.value.clone()));
        }
    }

    /// The committed text.
    pub fn summary(&self) -> String {
        self.value.clone()
    }

    pub(crate) fn render(&mut self, cx: &mut RenderCx<'_>) -> CellId {
        let alignment = match cx.entry_alignment {
            Some(a) => a,
            None => {
                // Rendered outside a section; align against its own caption.
                let caption = self.caption.as_deref().unwrap_or_default();
                let size = cx.surface.measure_text(caption, cx.metrics.caption_font);
                cx.metrics.entry_alignment(size)
            }
        };
        let control = match &self.field {
            Some(field) => field.id(),
            None => {
                let field = cx.surface.create_control(ControlSpec {
                    kind: ControlKind::TextField {
                        placeholder: self.placeholder.clone(),
                        secure: self.password,
                    },
                    frame: cx.metrics.entry_frame(alignment),
                    value: ControlValue::Text(self.value.clone()),
                    autoresizing: Autoresizing::FLEXIBLE_WIDTH
                        | Autoresizing::FLEXIBLE_LEFT_MARGIN,
                });
                let id = field.id();
                tracing::trace!(
                    control = id.get(),
                    offset = alignment.width,
                    "materialized text field"
                );
                self.field = Some(field);
                id
            }
        };
        let (cell, reused) = dequeue_or_create(cx.surface, RecycleKey::Entry, CellStyle::Plain);
        tracing::trace!(cell = cell.get(), reused, "render entry row");
        cx.surface.update_cell(
            cell,
            CellContent {
                text: self.caption.clone(),
                selection: SelectionStyle::None,
                control: Some(control),
                ..CellContent::default()
            },
        );
        cell
    }

    /// Copy the field's in-progress text into the committed value.
    pub(crate) fn commit_text(&mut self) {
        if let Some(field) = &self.field {
            if let ControlValue::Text(text) = field.value() {
                self.value = text;
            }
        }
    }

    /// Focus the field. Returns false if it is not materialized.
    pub(crate) fn focus(&mut self) -> bool {
        match &mut self.field {
            Some(field) => {
                field.focus();
                true
            }
            None => false,
        }
    }

    pub(crate) fn resign_focus(&mut self) {
        if let Some(field) = &mut self.field {
            field.resign_focus();
        }
    }

    pub(crate) fn is_materialized(&self) -> bool {
        self.field.is_some()
    }

    pub(crate) fn dispose(&mut self) {
        self.field = None;
    }
}
