// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! On/off row backed by a switch.

use alloc::boxed::Box;
use alloc::string::String;

use crate::element::RenderCx;
use crate::surface::{ControlView, dequeue_or_create};
use crate::types::{
    Autoresizing, CellContent, CellId, CellStyle, ControlKind, ControlSpec, ControlValue,
    RecycleKey, SelectionStyle,
};

/// A row with a caption and a switch.
#[derive(Debug)]
pub struct BooleanElement {
    caption: Option<String>,
    pub(crate) value: bool,
    switch: Option<Box<dyn ControlView>>,
}

impl BooleanElement {
    /// Create a row with the switch initially at `value`.
    pub fn new(caption: impl Into<String>, value: bool) -> Self {
        Self {
            caption: Some(caption.into()),
            value,
            switch: None,
        }
    }

    /// Display label.
    pub fn caption(&self) -> Option<&str> {
        self.caption.as_deref()
    }

    /// Current state.
    pub fn value(&self) -> bool {
        self.value
    }

    /// Set the state, updating the switch if it is materialized.
    pub fn set_value(&mut self, value: bool) {
        self.value = value;
        if let Some(sw) = &mut self.switch {
            sw.set_value(ControlValue::Switch(value));
        }
    }

    /// `"On"` or `"Off"`.
    pub fn summary(&self) -> String {
        String::from(if self.value { "On" } else { "Off" })
    }

    pub(crate) fn render(&mut self, cx: &mut RenderCx<'_>) -> CellId {
        let control = match &mut self.switch {
            Some(sw) => {
                // The switch is the source of truth once it exists.
                if let ControlValue::Switch(on) = sw.value() {
                    self.value = on;
                }
                sw.id()
            }
            None => {
                let sw = cx.surface.create_control(ControlSpec {
                    kind: ControlKind::Switch,
                    frame: cx.metrics.switch_frame,
                    value: ControlValue::Switch(self.value),
                    autoresizing: Autoresizing::empty(),
                });
                let id = sw.id();
                tracing::trace!(control = id.get(), "materialized switch");
                self.switch = Some(sw);
                id
            }
        };
        let (cell, reused) = dequeue_or_create(cx.surface, RecycleKey::Boolean, CellStyle::Plain);
        tracing::trace!(cell = cell.get(), reused, "render boolean row");
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

    pub(crate) fn is_materialized(&self) -> bool {
        self.switch.is_some()
    }

    pub(crate) fn dispose(&mut self) {
        self.switch = None;
    }
}
