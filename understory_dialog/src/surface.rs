// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Seams to the external collaborators: the list surface that paints rows and
//! the navigation context that presents detail surfaces.
//!
//! ## Overview
//!
//! The element tree never paints. It asks a [`ListSurface`] for cells keyed by
//! [`RecycleKey`], fills them with a complete [`CellContent`], and asks it to
//! create heavyweight [`ControlView`]s which rows then own.
//! Navigation requests go to a [`Context`].
//!
//! All calls happen on the single UI thread that delivers surface callbacks.

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;
use kurbo::Size;

use crate::elements::html::WebPage;
use crate::types::{
    Accessory, CellContent, CellId, CellStyle, ControlId, ControlSpec, ControlValue, Font,
    LayoutMetrics, Path, RecycleKey,
};

/// A virtualized, cell-recycling list provided by the widget toolkit.
pub trait ListSurface {
    /// Pop a previously released cell with the given key, if the pool has one.
    fn dequeue_reusable_cell(&mut self, key: RecycleKey) -> Option<CellId>;

    /// Create a fresh cell for `key`.
    fn create_cell(&mut self, key: RecycleKey, style: CellStyle) -> CellId;

    /// Replace every mutable display field of `cell`.
    fn update_cell(&mut self, cell: CellId, content: CellContent);

    /// Targeted update of a single cell's accessory.
    fn set_accessory(&mut self, cell: CellId, accessory: Accessory);

    /// The cell currently displayed at `path`, if that row is visible.
    fn cell_at(&self, path: Path) -> Option<CellId>;

    /// Clear the selection highlight of the row at `path`.
    fn deselect_row(&mut self, path: Path, animated: bool);

    /// Create a control. The returned view is owned by the row that asked for it;
    /// dropping it releases the native control.
    fn create_control(&mut self, spec: ControlSpec) -> Box<dyn ControlView>;

    /// Size of `text` rendered in `font`.
    fn measure_text(&self, text: &str, font: Font) -> Size;

    /// Layout constants for this surface.
    fn metrics(&self) -> LayoutMetrics {
        LayoutMetrics::default()
    }
}

/// A heavyweight control created by a [`ListSurface`].
///
/// User edits should be forwarded with
/// [`ListAdapter::control_value_changed`](crate::ListAdapter::control_value_changed)
/// so row values and summaries stay current. Switch and slider rows also read
/// [`ControlView::value`] back on every render, so an edit that was not
/// forwarded is never overwritten by a stale row value.
pub trait ControlView: core::fmt::Debug {
    /// Identifier the surface uses to host this control inside a cell.
    fn id(&self) -> ControlId;

    /// Current value shown by the control.
    fn value(&self) -> ControlValue;

    /// Bind a value without recreating the control.
    fn set_value(&mut self, value: ControlValue);

    /// Make this control the keyboard focus.
    fn focus(&mut self);

    /// Give up keyboard focus, closing the keyboard.
    fn resign_focus(&mut self);
}

/// How a list surface is presented.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum Presentation {
    /// The navigation root.
    #[default]
    Root,
    /// Pushed on top of another surface; shows a back affordance.
    Pushed,
}

/// Request to present a nested root as its own list surface.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListDetail {
    /// Paths from the top-level root down to the nested root, one per level.
    pub route: Vec<Path>,
    /// Navigation title.
    pub title: Option<String>,
    /// Always [`Presentation::Pushed`] for drill-down navigation.
    pub presentation: Presentation,
}

/// A surface the context is asked to push.
#[derive(Clone, Debug, PartialEq)]
pub enum Detail {
    /// Drill into a nested root.
    List(ListDetail),
    /// Show remote content for a link row.
    Web(WebPage),
}

/// The navigation host.
pub trait Context {
    /// Push a detail surface on the navigation stack.
    fn push_detail(&mut self, detail: Detail);

    /// Toggle the global network activity indicator.
    fn set_network_activity_indicator(&mut self, visible: bool);
}

/// Dequeue a cell for `key`, creating one with `style` when the pool is empty.
///
/// Returns the cell and whether it was recycled. Every built-in row starts its
/// render with this; [`CustomElement::render`](crate::CustomElement::render)
/// implementations should too, then overwrite the whole cell with
/// [`ListSurface::update_cell`].
pub fn dequeue_or_create(
    surface: &mut dyn ListSurface,
    key: RecycleKey,
    style: CellStyle,
) -> (CellId, bool) {
    match surface.dequeue_reusable_cell(key) {
        Some(cell) => (cell, true),
        None => (surface.create_cell(key, style), false),
    }
}
