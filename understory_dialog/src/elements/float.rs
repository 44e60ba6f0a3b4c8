// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Numeric-range row backed by a continuous slider.

use alloc::boxed::Box;
use alloc::string::{String, ToString};

use crate::element::RenderCx;
use crate::surface::{ControlView, dequeue_or_create};
use crate::types::{
    Autoresizing, CellContent, CellId, CellStyle, ControlKind, ControlSpec, ControlValue,
    RecycleKey, SelectionStyle,
};

/// A row holding a slider over `[min, max]` (default `[0, 1]`).
#[derive(Debug)]
pub struct FloatElement {
    caption: Option<String>,
    pub(crate) value: f32,
    min: f32,
    max: f32,
    min_image: Option<String>,
    max_image: Option<String>,
    slider: Option<Box<dyn ControlView>>,
}

impl FloatElement {
    /// Create a slider row at `value` over `[0, 1]`.
    pub fn new(value: f32) -> Self {
        Self {
            caption: None,
            value,
            min: 0.0,
            max: 1.0,
            min_image: None,
            max_image: None,
            slider: None,
        }
    }

    /// Create a slider row with images at both ends.
    pub fn with_images(
        min_image: impl Into<String>,
        max_image: impl Into<String>,
        value: f32,
    ) -> Self {
        Self {
            min_image: Some(min_image.into()),
            max_image: Some(max_image.into()),
            ..Self::new(value)
        }
    }

    /// Set the range. Takes effect when the slider is next created.
    #[must_use]
    pub fn range(mut self, min: f32, max: f32) -> Self {
        debug_assert!(min <= max, "slider range must not be inverted");
        self.min = min;
        self.max = max;
        self
    }

    /// Display label. Slider rows have none unless one is set.
    pub fn caption(&self) -> Option<&str> {
        self.caption.as_deref()
    }

    /// Set the display label.
    #[must_use]
    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    /// Current value.
    pub fn value(&self) -> f32 {
        self.value
    }

    /// Lower and upper bound.
    pub fn bounds(&self) -> (f32, f32) {
        (self.min, self.max)
    }

    /// Set the value, updating the slider if it is materialized.
    pub fn set_value(&mut self, value: f32) {
        self.value = value;
        if let Some(slider) = &mut self.slider {
            slider.set_value(ControlValue::Slider(value));
        }
    }

    /// The value as text.
    pub fn summary(&self) -> String {
        self.value.to_string()
    }

    pub(crate) fn render(&mut self, cx: &mut RenderCx<'_>) -> CellId {
        let control = match &mut self.slider {
            Some(slider) => {
                if let ControlValue::Slider(v) = slider.value() {
                    self.value = v;
                }
                slider.id()
            }
            None => {
                let slider = cx.surface.create_control(ControlSpec {
                    kind: ControlKind::Slider {
                        min: self.min,
                        max: self.max,
                        continuous: true,
                        min_image: self.min_image.clone(),
                        max_image: self.max_image.clone(),
                    },
                    frame: cx.metrics.slider_frame,
                    value: ControlValue::Slider(self.value),
                    autoresizing: Autoresizing::empty(),
                });
                let id = slider.id();
                tracing::trace!(control = id.get(), "materialized slider");
                self.slider = Some(slider);
                id
            }
        };
        let (cell, reused) = dequeue_or_create(cx.surface, RecycleKey::Float, CellStyle::Plain);
        tracing::trace!(cell = cell.get(), reused, "render float row");
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
        self.slider.is_some()
    }

    pub(crate) fn dispose(&mut self) {
        self.slider = None;
    }
}
