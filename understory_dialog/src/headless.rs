// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-memory list surface and navigation context.
//!
//! [`HeadlessSurface`] keeps a per-key reuse pool, the set of visible cells by
//! path, and a registry of live controls. Controls it creates deregister
//! themselves when dropped, so [`HeadlessSurface::stats`] reflects exactly what
//! rows still hold.
//!
//! Text is measured as half the font size per character, with a line height of
//! the font size plus four.

use alloc::boxed::Box;
use alloc::collections::BTreeMap;
use alloc::rc::Rc;
use alloc::string::String;
use alloc::vec::Vec;
use core::cell::RefCell;
use kurbo::Size;

use crate::adapter::ListAdapter;
use crate::root::RootElement;
use crate::surface::{Context, ControlView, Detail, ListSurface};
use crate::types::{
    Accessory, CellContent, CellId, CellStyle, ControlId, ControlSpec, ControlValue, Font,
    LayoutMetrics, Path, RecycleKey,
};

/// A cell as the headless surface stores it.
#[derive(Clone, Debug, PartialEq)]
pub struct HeadlessCell {
    /// Key the cell was created for.
    pub key: RecycleKey,
    /// Layout chosen at creation.
    pub style: CellStyle,
    /// Last content written.
    pub content: CellContent,
}

/// Allocation counters.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SurfaceStats {
    /// Cells ever created.
    pub cells_created: usize,
    /// Controls ever created.
    pub controls_created: usize,
    /// Controls currently held by rows.
    pub controls_alive: usize,
}

#[derive(Debug, Default)]
struct Registry {
    controls: BTreeMap<ControlId, (ControlSpec, ControlValue)>,
    focused: Option<ControlId>,
}

/// A control created by [`HeadlessSurface`].
#[derive(Debug)]
pub struct HeadlessControl {
    id: ControlId,
    registry: Rc<RefCell<Registry>>,
}

impl ControlView for HeadlessControl {
    fn id(&self) -> ControlId {
        self.id
    }

    fn value(&self) -> ControlValue {
        self.registry
            .borrow()
            .controls
            .get(&self.id)
            .map(|(_, v)| v.clone())
            .unwrap_or(ControlValue::Switch(false))
    }

    fn set_value(&mut self, value: ControlValue) {
        if let Some((_, v)) = self.registry.borrow_mut().controls.get_mut(&self.id) {
            *v = value;
        }
    }

    fn focus(&mut self) {
        self.registry.borrow_mut().focused = Some(self.id);
    }

    fn resign_focus(&mut self) {
        let mut registry = self.registry.borrow_mut();
        if registry.focused == Some(self.id) {
            registry.focused = None;
        }
    }
}

impl Drop for HeadlessControl {
    fn drop(&mut self) {
        let mut registry = self.registry.borrow_mut();
        registry.controls.remove(&self.id);
        if registry.focused == Some(self.id) {
            registry.focused = None;
        }
    }
}

/// A [`ListSurface`] that records everything in memory.
#[derive(Debug, Default)]
pub struct HeadlessSurface {
    metrics: LayoutMetrics,
    cells: Vec<HeadlessCell>,
    pool: BTreeMap<RecycleKey, Vec<CellId>>,
    visible: BTreeMap<Path, CellId>,
    deselected: Vec<Path>,
    registry: Rc<RefCell<Registry>>,
    controls_created: usize,
}

impl HeadlessSurface {
    /// A surface with default metrics.
    pub fn new() -> Self {
        Self::default()
    }

    /// A surface with custom metrics.
    pub fn with_metrics(metrics: LayoutMetrics) -> Self {
        Self {
            metrics,
            ..Self::default()
        }
    }

    /// Scroll the row at `path` into view, releasing whatever cell showed it before.
    pub fn show(
        &mut self,
        adapter: &ListAdapter,
        root: &mut RootElement,
        path: Path,
    ) -> Option<CellId> {
        self.hide(path);
        let cell = adapter.view_for_row(root, self, path)?;
        self.visible.insert(path, cell);
        Some(cell)
    }

    /// Scroll the row at `path` out of view, returning its cell to the pool.
    pub fn hide(&mut self, path: Path) {
        if let Some(cell) = self.visible.get(&path).copied() {
            self.recycle(cell);
        }
    }

    /// Return `cell` to the reuse pool.
    pub fn recycle(&mut self, cell: CellId) {
        let Some(stored) = self.cells.get(cell.get() as usize) else {
            return;
        };
        self.visible.retain(|_, c| *c != cell);
        let pool = self.pool.entry(stored.key).or_default();
        if !pool.contains(&cell) {
            pool.push(cell);
        }
    }

    /// A cell by id.
    pub fn cell(&self, cell: CellId) -> Option<&HeadlessCell> {
        self.cells.get(cell.get() as usize)
    }

    /// Allocation counters.
    pub fn stats(&self) -> SurfaceStats {
        SurfaceStats {
            cells_created: self.cells.len(),
            controls_created: self.controls_created,
            controls_alive: self.registry.borrow().controls.len(),
        }
    }

    /// Current value of a live control.
    pub fn control_value(&self, control: ControlId) -> Option<ControlValue> {
        let registry = self.registry.borrow();
        registry.controls.get(&control).map(|(_, v)| v.clone())
    }

    /// Creation spec of a live control.
    pub fn control_spec(&self, control: ControlId) -> Option<ControlSpec> {
        let registry = self.registry.borrow();
        registry.controls.get(&control).map(|(s, _)| s.clone())
    }

    /// Simulate the user changing a control, without telling the tree.
    pub fn set_control_value(&mut self, control: ControlId, value: ControlValue) {
        if let Some((_, v)) = self.registry.borrow_mut().controls.get_mut(&control) {
            *v = value;
        }
    }

    /// Simulate typing into a text field.
    pub fn set_text(&mut self, control: ControlId, text: impl Into<String>) {
        self.set_control_value(control, ControlValue::Text(text.into()));
    }

    /// The control holding keyboard focus.
    pub fn focused(&self) -> Option<ControlId> {
        self.registry.borrow().focused
    }

    /// Paths deselected so far, oldest first.
    pub fn deselected(&self) -> &[Path] {
        &self.deselected
    }
}

impl ListSurface for HeadlessSurface {
    fn dequeue_reusable_cell(&mut self, key: RecycleKey) -> Option<CellId> {
        self.pool.get_mut(&key)?.pop()
    }

    fn create_cell(&mut self, key: RecycleKey, style: CellStyle) -> CellId {
        #[allow(
            clippy::cast_possible_truncation,
            reason = "headless surfaces never hold more than u32::MAX cells"
        )]
        let id = CellId::new(self.cells.len() as u32);
        self.cells.push(HeadlessCell {
            key,
            style,
            content: CellContent::default(),
        });
        id
    }

    fn update_cell(&mut self, cell: CellId, content: CellContent) {
        if let Some(stored) = self.cells.get_mut(cell.get() as usize) {
            stored.content = content;
        }
    }

    fn set_accessory(&mut self, cell: CellId, accessory: Accessory) {
        if let Some(stored) = self.cells.get_mut(cell.get() as usize) {
            stored.content.accessory = accessory;
        }
    }

    fn cell_at(&self, path: Path) -> Option<CellId> {
        self.visible.get(&path).copied()
    }

    fn deselect_row(&mut self, path: Path, _animated: bool) {
        self.deselected.push(path);
    }

    fn create_control(&mut self, spec: ControlSpec) -> Box<dyn ControlView> {
        #[allow(
            clippy::cast_possible_truncation,
            reason = "headless surfaces never create more than u32::MAX controls"
        )]
        let id = ControlId::new(self.controls_created as u32);
        self.controls_created += 1;
        let value = spec.value.clone();
        self.registry.borrow_mut().controls.insert(id, (spec, value));
        Box::new(HeadlessControl {
            id,
            registry: Rc::clone(&self.registry),
        })
    }

    fn measure_text(&self, text: &str, font: Font) -> Size {
        #[allow(clippy::cast_precision_loss, reason = "captions are short")]
        let chars = text.chars().count() as f64;
        Size::new(chars * font.size * 0.5, font.size + 4.0)
    }

    fn metrics(&self) -> LayoutMetrics {
        self.metrics
    }
}

/// A [`Context`] that records every request.
#[derive(Debug, Default)]
pub struct RecordingContext {
    /// Pushed detail surfaces, oldest first.
    pub pushed: Vec<Detail>,
    /// Activity indicator toggles, oldest first.
    pub activity: Vec<bool>,
}

impl RecordingContext {
    /// Whether the activity indicator is currently shown.
    pub fn indicator_visible(&self) -> bool {
        self.activity.last().copied().unwrap_or(false)
    }
}

impl Context for RecordingContext {
    fn push_detail(&mut self, detail: Detail) {
        self.pushed.push(detail);
    }

    fn set_network_activity_indicator(&mut self, visible: bool) {
        self.activity.push(visible);
    }
}
