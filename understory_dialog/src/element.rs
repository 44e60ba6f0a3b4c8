// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The row capability contract and the closed set of row kinds.
//!
//! ## Overview
//!
//! [`Element`] is a sum type over every row kind. Each variant knows how to
//! materialize itself into a surface cell ([`Element::render`] via the list
//! adapter), how to project its value into a short [`Element::summary`], and
//! how to react to a tap. Application-defined rows plug in through
//! [`CustomElement`].
//!
//! Rows that need state owned elsewhere in the tree (the section's entry
//! alignment, the root's radio selection) receive it through [`RenderCx`];
//! those lookups are resolved by the owning [`RootElement`].

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;
use kurbo::Size;

use crate::RootElement;
use crate::elements::{
    BooleanElement, EntryElement, FloatElement, HtmlElement, RadioElement, StringElement,
};
use crate::surface::{Context, ListSurface};
use crate::types::{CellId, ControlValue, LayoutMetrics, Path, RecycleKey};

/// Everything a row needs while materializing its cell.
pub struct RenderCx<'a> {
    /// The surface that owns cells and creates controls.
    pub surface: &'a mut dyn ListSurface,
    /// Layout constants of the surface.
    pub metrics: LayoutMetrics,
    pub(crate) entry_alignment: Option<Size>,
    pub(crate) radio_selected: Option<usize>,
}

impl core::fmt::Debug for RenderCx<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RenderCx")
            .field("metrics", &self.metrics)
            .field("entry_alignment", &self.entry_alignment)
            .field("radio_selected", &self.radio_selected)
            .finish_non_exhaustive()
    }
}

impl<'a> RenderCx<'a> {
    /// A context for rendering a row outside of any section or radio group.
    pub fn new(surface: &'a mut dyn ListSurface) -> Self {
        let metrics = surface.metrics();
        Self {
            surface,
            metrics,
            entry_alignment: None,
            radio_selected: None,
        }
    }
}

/// Everything a row needs while handling a tap.
pub struct SelectCx<'a> {
    /// The navigation host.
    pub context: &'a mut dyn Context,
    /// The surface that displays the tapped row.
    pub surface: &'a mut dyn ListSurface,
    /// Path of the tapped row within its root.
    pub path: Path,
    pub(crate) route: &'a [Path],
}

impl core::fmt::Debug for SelectCx<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SelectCx")
            .field("path", &self.path)
            .field("route", &self.route)
            .finish_non_exhaustive()
    }
}

impl<'a> SelectCx<'a> {
    /// A context for a row of the top-level root.
    pub fn new(
        context: &'a mut dyn Context,
        surface: &'a mut dyn ListSurface,
        path: Path,
    ) -> Self {
        Self {
            context,
            surface,
            path,
            route: &[],
        }
    }

    /// Route from the top-level root to the tapped row.
    pub fn route_to_row(&self) -> Vec<Path> {
        let mut route = Vec::with_capacity(self.route.len() + 1);
        route.extend_from_slice(self.route);
        route.push(self.path);
        route
    }
}

/// Extension point for application-defined row kinds.
pub trait CustomElement: core::fmt::Debug {
    /// Display label.
    fn caption(&self) -> Option<&str> {
        None
    }

    /// Key identifying this row kind in the surface's reuse pool.
    fn recycle_key(&self) -> RecycleKey;

    /// Produce or reuse a cell and fill every display field.
    fn render(&mut self, cx: &mut RenderCx<'_>) -> CellId;

    /// Short projection of the current value.
    fn summary(&self) -> String {
        String::new()
    }

    /// Handle a tap.
    fn on_selected(&mut self, cx: &mut SelectCx<'_>) {
        let _ = cx;
    }

    /// Apply a value reported by a hosted control.
    fn control_changed(&mut self, value: ControlValue) {
        let _ = value;
    }

    /// Release any materialized control. Must be idempotent.
    fn dispose(&mut self) {}
}

/// A row in a section.
#[derive(Debug)]
pub enum Element {
    /// On/off switch.
    Boolean(BooleanElement),
    /// Numeric range slider.
    Float(FloatElement),
    /// Link to remote content.
    Html(HtmlElement),
    /// Caption with an optional value, optionally tappable.
    String(StringElement),
    /// Choice in the root's single-choice group.
    Radio(RadioElement),
    /// Text entry.
    Entry(EntryElement),
    /// Nested root shown as a drill-down row.
    Root(Box<RootElement>),
    /// Application-defined row.
    Custom(Box<dyn CustomElement>),
}

impl Element {
    /// Display label.
    pub fn caption(&self) -> Option<&str> {
        match self {
            Self::Boolean(e) => e.caption(),
            Self::Float(e) => e.caption(),
            Self::Html(e) => e.caption(),
            Self::String(e) => e.caption(),
            Self::Radio(e) => e.caption(),
            Self::Entry(e) => e.caption(),
            Self::Root(e) => e.caption(),
            Self::Custom(e) => e.caption(),
        }
    }

    /// Key identifying this row's kind in the surface's reuse pool.
    pub fn recycle_key(&self) -> RecycleKey {
        match self {
            Self::Boolean(_) => RecycleKey::Boolean,
            Self::Float(_) => RecycleKey::Float,
            Self::Html(_) => RecycleKey::Html,
            Self::String(e) => e.recycle_key(),
            Self::Radio(_) => RecycleKey::Radio,
            Self::Entry(_) => RecycleKey::Entry,
            Self::Root(e) => e.recycle_key(),
            Self::Custom(e) => e.recycle_key(),
        }
    }

    /// Short textual projection of the current value, shown on ancestor rows.
    pub fn summary(&self) -> String {
        match self {
            Self::Boolean(e) => e.summary(),
            Self::Float(e) => e.summary(),
            Self::Html(_) => String::new(),
            Self::String(e) => e.summary(),
            Self::Radio(e) => e.summary(),
            Self::Entry(e) => e.summary(),
            Self::Root(e) => e.summary(),
            Self::Custom(e) => e.summary(),
        }
    }

    /// Produce or reuse a cell representing the current state.
    ///
    /// Every display field is written on each call since the cell may have been
    /// recycled from another row of the same kind.
    pub fn render(&mut self, cx: &mut RenderCx<'_>) -> CellId {
        match self {
            Self::Boolean(e) => e.render(cx),
            Self::Float(e) => e.render(cx),
            Self::Html(e) => e.render(cx),
            Self::String(e) => e.render(cx),
            Self::Radio(e) => e.render(cx),
            Self::Entry(e) => e.render(cx),
            Self::Root(e) => e.render(cx),
            Self::Custom(e) => e.render(cx),
        }
    }

    /// Interaction entry point. Radio group coordination happens in the owning root
    /// before this is called.
    pub fn on_selected(&mut self, cx: &mut SelectCx<'_>) {
        match self {
            Self::Html(e) => e.on_selected(cx),
            Self::String(e) => e.on_selected(cx),
            Self::Radio(e) => e.on_selected(cx),
            Self::Root(e) => e.on_selected(cx),
            Self::Custom(e) => e.on_selected(cx),
            Self::Boolean(_) | Self::Float(_) | Self::Entry(_) => {}
        }
    }

    /// Apply a value reported by the row's control. Returns true if the row took it.
    pub fn control_changed(&mut self, value: ControlValue) -> bool {
        match (self, value) {
            (Self::Boolean(e), ControlValue::Switch(on)) => {
                e.value = on;
                true
            }
            (Self::Float(e), ControlValue::Slider(v)) => {
                e.value = v;
                true
            }
            (Self::Custom(e), value) => {
                e.control_changed(value);
                true
            }
            // Entry text is committed on submit, not on every keystroke.
            _ => false,
        }
    }

    /// Release any materialized control. Idempotent.
    pub fn dispose(&mut self) {
        match self {
            Self::Boolean(e) => e.dispose(),
            Self::Float(e) => e.dispose(),
            Self::Entry(e) => e.dispose(),
            Self::Root(e) => e.dispose(),
            Self::Custom(e) => e.dispose(),
            Self::Html(_) | Self::String(_) | Self::Radio(_) => {}
        }
    }

    /// True if the row currently holds a materialized control.
    pub fn is_materialized(&self) -> bool {
        match self {
            Self::Boolean(e) => e.is_materialized(),
            Self::Float(e) => e.is_materialized(),
            Self::Entry(e) => e.is_materialized(),
            _ => false,
        }
    }

    /// The radio row, if this is one.
    pub fn as_radio(&self) -> Option<&RadioElement> {
        match self {
            Self::Radio(e) => Some(e),
            _ => None,
        }
    }

    /// The entry row, if this is one.
    pub fn as_entry(&self) -> Option<&EntryElement> {
        match self {
            Self::Entry(e) => Some(e),
            _ => None,
        }
    }

    /// The nested root, if this is one.
    pub fn as_root(&self) -> Option<&RootElement> {
        match self {
            Self::Root(e) => Some(&**e),
            _ => None,
        }
    }

    pub(crate) fn as_radio_mut(&mut self) -> Option<&mut RadioElement> {
        match self {
            Self::Radio(e) => Some(e),
            _ => None,
        }
    }

    pub(crate) fn as_entry_mut(&mut self) -> Option<&mut EntryElement> {
        match self {
            Self::Entry(e) => Some(e),
            _ => None,
        }
    }

    pub(crate) fn as_root_mut(&mut self) -> Option<&mut RootElement> {
        match self {
            Self::Root(e) => Some(&mut **e),
            _ => None,
        }
    }
}

impl From<BooleanElement> for Element {
    fn from(e: BooleanElement) -> Self {
        Self::Boolean(e)
    }
}

impl From<FloatElement> for Element {
    fn from(e: FloatElement) -> Self {
        Self::Float(e)
    }
}

impl From<HtmlElement> for Element {
    fn from(e: HtmlElement) -> Self {
        Self::Html(e)
    }
}

impl From<StringElement> for Element {
    fn from(e: StringElement) -> Self {
        Self::String(e)
    }
}

impl From<RadioElement> for Element {
    fn from(e: RadioElement) -> Self {
        Self::Radio(e)
    }
}

impl From<EntryElement> for Element {
    fn from(e: EntryElement) -> Self {
        Self::Entry(e)
    }
}

impl From<RootElement> for Element {
    fn from(e: RootElement) -> Self {
        Self::Root(Box::new(e))
    }
}

impl From<Box<dyn CustomElement>> for Element {
    fn from(e: Box<dyn CustomElement>) -> Self {
        Self::Custom(e)
    }
}
