// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Root element: ordered sections, index resolution and summary projection.
//!
//! ## Overview
//!
//! A [`RootElement`] owns its sections and their rows in a generational arena.
//! Rows are addressed positionally by [`Path`] (valid until the next structural
//! edit) or stably by [`ElementId`].
//!
//! The root resolves everything a row cannot see on its own:
//! - radio numbering and the single-choice transition ([`RootElement::prepare`],
//!   [`RootElement::select_radio`]),
//! - the per-section entry alignment used to line up text fields,
//! - focus chaining between entry rows on submit.
//!
//! A root nested inside another root's section appears there as a drill-down
//! row whose subtitle projects one of its rows' [`Element::summary`].
//!
//! ## Preparation
//!
//! Structural edits mark the root unprepared. Entry points that depend on radio
//! numbering (rendering, selection) re-run [`RootElement::prepare`] first, so
//! callers only need to call it themselves before reading
//! [`RadioElement::radio_index`](crate::RadioElement::radio_index) directly.

use alloc::string::String;
use alloc::vec::Vec;
use kurbo::Size;

use crate::element::{Element, RenderCx, SelectCx};
use crate::elements::{EntryElement, FocusChange, RadioGroup};
use crate::error::TreeError;
use crate::section::{Section, SectionNode, SectionRef};
use crate::surface::{Context, Detail, ListDetail, ListSurface, Presentation, dequeue_or_create};
use crate::tree::{NodeId, NodeKind, Tree};
use crate::types::{
    Accessory, CellContent, CellId, CellStyle, ControlValue, LayoutMetrics, Path, RecycleKey,
    SelectionStyle,
};

/// Stable handle of a section attached to a root.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct SectionId(pub(crate) NodeId);

/// Stable handle of a row attached to a root.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct ElementId(pub(crate) NodeId);

/// An ordered container of sections.
#[derive(Debug, Default)]
pub struct RootElement {
    caption: Option<String>,
    pub(crate) tree: Tree,
    sections: Vec<NodeId>,
    summary_source: Option<Path>,
    radio: Option<RadioGroup>,
    prepared: bool,
}

impl RootElement {
    /// An empty root.
    pub fn new(caption: impl Into<String>) -> Self {
        Self {
            caption: Some(caption.into()),
            ..Self::default()
        }
    }

    /// A root whose drill-down row shows the summary of the row at `(section, element)`.
    pub fn with_summary(caption: impl Into<String>, section: usize, element: usize) -> Self {
        Self {
            summary_source: Some(Path::new(section, element)),
            ..Self::new(caption)
        }
    }

    /// A root whose radio rows form a single-choice group.
    pub fn with_radio(caption: impl Into<String>, group: RadioGroup) -> Self {
        Self {
            radio: Some(group),
            ..Self::new(caption)
        }
    }

    /// Builder form of [`RootElement::add`].
    #[must_use]
    pub fn section(mut self, section: Section) -> Self {
        self.add(section);
        self
    }

    /// Display label, also used as the title of the drill-down surface.
    pub fn caption(&self) -> Option<&str> {
        self.caption.as_deref()
    }

    // --- structure -------------------------------------------------------

    /// Append a section, taking ownership of its rows.
    pub fn add(&mut self, section: Section) -> SectionId {
        let id = self.attach(section);
        self.sections.push(id.0);
        id
    }

    /// Insert a section at `index`.
    pub fn insert_section(
        &mut self,
        index: usize,
        section: Section,
    ) -> Result<SectionId, TreeError> {
        let len = self.sections.len();
        if index > len {
            return Err(TreeError::SectionOutOfBounds { index, len });
        }
        let id = self.attach(section);
        self.sections.insert(index, id.0);
        Ok(id)
    }

    fn attach(&mut self, section: Section) -> SectionId {
        let Section {
            header,
            footer,
            elements,
        } = section;
        let id = self
            .tree
            .insert(None, NodeKind::Section(SectionNode::new(header, footer)));
        let rows = elements.len();
        for element in elements {
            self.tree.insert(Some(id), NodeKind::Element(element));
        }
        self.prepared = false;
        tracing::debug!(rows, "attached section");
        SectionId(id)
    }

    /// Detach a section, disposing its rows' controls. Returns `None` for stale ids.
    pub fn remove_section(&mut self, id: SectionId) -> Option<Section> {
        let position = self.sections.iter().position(|s| *s == id.0)?;
        self.sections.remove(position);
        let children = self.tree.children(id.0).to_vec();
        let mut elements = Vec::with_capacity(children.len());
        for child in children {
            if let Some(NodeKind::Element(mut element)) = self.tree.take(child).map(|n| n.kind) {
                element.dispose();
                elements.push(element);
            }
        }
        self.prepared = false;
        tracing::debug!(position, rows = elements.len(), "removed section");
        match self.tree.take(id.0)?.kind {
            NodeKind::Section(s) => Some(Section {
                header: s.header,
                footer: s.footer,
                elements,
            }),
            NodeKind::Element(_) => None,
        }
    }

    /// Append a row to a section.
    pub fn add_element(
        &mut self,
        section: SectionId,
        element: impl Into<Element>,
    ) -> Result<ElementId, TreeError> {
        let len = self.section_len(section)?;
        self.insert_element(section, len, element)
    }

    /// Insert a row at `index` within a section.
    pub fn insert_element(
        &mut self,
        section: SectionId,
        index: usize,
        element: impl Into<Element>,
    ) -> Result<ElementId, TreeError> {
        let len = self.section_len(section)?;
        if index > len {
            return Err(TreeError::RowOutOfBounds {
                section: self.section_position(section).unwrap_or_default(),
                index,
                len,
            });
        }
        let element = element.into();
        let is_entry = element.as_entry().is_some();
        let id = self
            .tree
            .insert_at(section.0, index, NodeKind::Element(element));
        if is_entry {
            self.invalidate_layout(section.0);
        }
        self.prepared = false;
        tracing::debug!(index, is_entry, "inserted row");
        Ok(ElementId(id))
    }

    /// Detach a row, disposing its control and clearing its section back-reference.
    pub fn remove_element(&mut self, id: ElementId) -> Option<Element> {
        let parent = self.tree.parent(id.0);
        let node = self.tree.take(id.0)?;
        let NodeKind::Element(mut element) = node.kind else {
            return None;
        };
        element.dispose();
        if let Some(parent) = parent
            && element.as_entry().is_some()
        {
            self.invalidate_layout(parent);
        }
        self.prepared = false;
        tracing::debug!("removed row");
        Some(element)
    }

    /// Move a row to `section` at `index` (or the end), replacing its back-reference.
    pub fn move_element(
        &mut self,
        id: ElementId,
        section: SectionId,
        index: Option<usize>,
    ) -> Result<(), TreeError> {
        let is_entry = self
            .tree
            .element(id.0)
            .ok_or(TreeError::StaleElement)?
            .as_entry()
            .is_some();
        let len = self.section_len(section)?;
        if let Some(index) = index
            && index > len
        {
            return Err(TreeError::RowOutOfBounds {
                section: self.section_position(section).unwrap_or_default(),
                index,
                len,
            });
        }
        let from = self.tree.parent(id.0);
        self.tree.reparent(id.0, section.0, index);
        if is_entry {
            if let Some(from) = from {
                self.invalidate_layout(from);
            }
            self.invalidate_layout(section.0);
        }
        self.prepared = false;
        tracing::debug!(?index, "moved row");
        Ok(())
    }

    fn section_len(&self, section: SectionId) -> Result<usize, TreeError> {
        if self.tree.section(section.0).is_none() {
            return Err(TreeError::StaleSection);
        }
        Ok(self.tree.children(section.0).len())
    }

    fn section_position(&self, section: SectionId) -> Option<usize> {
        self.sections.iter().position(|s| *s == section.0)
    }

    fn invalidate_layout(&mut self, section: NodeId) {
        if let Some(s) = self.tree.section_mut(section) {
            s.invalidate_layout();
        }
    }

    // --- lookups ---------------------------------------------------------

    /// Sections in order.
    pub fn sections(&self) -> impl Iterator<Item = SectionRef<'_>> {
        self.sections
            .iter()
            .map(move |&id| SectionRef { root: self, id })
    }

    /// Section by handle.
    pub fn section_ref(&self, id: SectionId) -> Option<SectionRef<'_>> {
        let id = id.0;
        self.tree.section(id)?;
        Some(SectionRef { root: self, id })
    }

    /// Section by position.
    pub fn section_at(&self, index: usize) -> Option<SectionRef<'_>> {
        let id = *self.sections.get(index)?;
        Some(SectionRef { root: self, id })
    }

    /// Number of sections.
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// Number of rows in the section at `section`; zero if out of range.
    pub fn row_count(&self, section: usize) -> usize {
        self.sections
            .get(section)
            .map_or(0, |id| self.tree.children(*id).len())
    }

    /// Handle of the row at `path`.
    pub fn id_at(&self, path: Path) -> Option<ElementId> {
        let section = self.sections.get(path.section)?;
        let id = self.tree.children(*section).get(path.row)?;
        Some(ElementId(*id))
    }

    /// Current path of a row, resolved through its section back-reference.
    pub fn path_of(&self, id: ElementId) -> Option<Path> {
        let parent = self.tree.parent(id.0)?;
        let section = self.sections.iter().position(|s| *s == parent)?;
        let row = self.tree.children(parent).iter().position(|c| *c == id.0)?;
        Some(Path::new(section, row))
    }

    /// Handle of the section a row belongs to.
    pub fn section_of(&self, id: ElementId) -> Option<SectionId> {
        self.tree.parent(id.0).map(SectionId)
    }

    /// Row at `path`.
    pub fn element_at(&self, path: Path) -> Option<&Element> {
        self.tree.element(self.id_at(path)?.0)
    }

    /// Mutable row at `path`.
    pub fn element_at_mut(&mut self, path: Path) -> Option<&mut Element> {
        let id = self.id_at(path)?;
        self.tree.element_mut(id.0)
    }

    /// Row by handle.
    pub fn element(&self, id: ElementId) -> Option<&Element> {
        self.tree.element(id.0)
    }

    /// Mutable row by handle.
    pub fn element_mut(&mut self, id: ElementId) -> Option<&mut Element> {
        self.tree.element_mut(id.0)
    }

    /// Rows in flattened order (section-major, row-minor) with their paths.
    pub fn flattened(&self) -> impl Iterator<Item = (Path, &Element)> {
        self.sections
            .iter()
            .enumerate()
            .flat_map(move |(s, section)| {
                self.tree
                    .children(*section)
                    .iter()
                    .enumerate()
                    .filter_map(move |(r, id)| Some((Path::new(s, r), self.tree.element(*id)?)))
            })
    }

    /// The nested root reached by following `route` from this root.
    pub fn nested(&self, route: &[Path]) -> Option<&Self> {
        let mut current = self;
        for path in route {
            current = current.element_at(*path)?.as_root()?;
        }
        Some(current)
    }

    /// Mutable form of [`RootElement::nested`].
    pub fn nested_mut(&mut self, route: &[Path]) -> Option<&mut Self> {
        let mut current = self;
        for path in route {
            current = current.element_at_mut(*path)?.as_root_mut()?;
        }
        Some(current)
    }

    // --- radio -----------------------------------------------------------

    /// Number radio rows in flattened order. No-op without a radio group.
    ///
    /// Idempotent; safe to re-run after structural edits.
    pub fn prepare(&mut self) {
        self.prepared = true;
        if self.radio.is_none() {
            return;
        }
        let mut count = 0;
        for section in &self.sections {
            for id in self.tree.children(*section).to_vec() {
                if let Some(radio) = self.tree.element_mut(id).and_then(Element::as_radio_mut) {
                    radio.radio_index = Some(count);
                    count += 1;
                }
            }
        }
        tracing::debug!(radios = count, "prepared root");
    }

    /// True if no structural edit happened since the last [`RootElement::prepare`].
    pub fn is_prepared(&self) -> bool {
        self.prepared
    }

    pub(crate) fn ensure_prepared(&mut self) {
        if !self.prepared {
            self.prepare();
        }
    }

    /// Path of the `index`-th radio row in flattened order.
    pub fn path_for_radio(&self, index: usize) -> Option<Path> {
        self.flattened()
            .filter(|(_, e)| e.as_radio().is_some())
            .nth(index)
            .map(|(path, _)| path)
    }

    /// Number of radio rows.
    pub fn radio_count(&self) -> usize {
        self.flattened()
            .filter(|(_, e)| e.as_radio().is_some())
            .count()
    }

    /// The attached radio group.
    pub fn radio_group(&self) -> Option<&RadioGroup> {
        self.radio.as_ref()
    }

    /// Selected radio index, or `None` without a group.
    pub fn radio_selected(&self) -> Option<usize> {
        self.radio.as_ref().map(RadioGroup::selected)
    }

    /// Set the selected radio index. No-op without a group.
    ///
    /// Does not touch any cell; re-render visible radio rows afterwards.
    pub fn set_radio_selected(&mut self, index: usize) {
        if let Some(group) = &mut self.radio {
            group.select(index);
        }
    }

    /// Move the group's selection to the radio row at `path`.
    ///
    /// Clears the checkmark on the previously selected row's visible cell and
    /// sets it on the new one; no other cell is touched. Returns true if the
    /// selection changed.
    pub fn select_radio(&mut self, path: Path, surface: &mut dyn ListSurface) -> bool {
        debug_assert!(
            self.radio.is_some(),
            "radio selection on a root without a RadioGroup"
        );
        let Some(old) = self.radio_selected() else {
            return false;
        };
        self.ensure_prepared();
        let Some(new) = self
            .element_at(path)
            .and_then(Element::as_radio)
            .and_then(|r| r.radio_index)
        else {
            return false;
        };
        if new == old {
            return false;
        }
        if let Some(cell) = self.path_for_radio(old).and_then(|p| surface.cell_at(p)) {
            surface.set_accessory(cell, Accessory::None);
        }
        if let Some(cell) = surface.cell_at(path) {
            surface.set_accessory(cell, Accessory::Checkmark);
        }
        self.set_radio_selected(new);
        tracing::debug!(old, new, "radio selection changed");
        true
    }

    // --- as a row --------------------------------------------------------

    /// Summary shown as this root's subtitle when nested.
    ///
    /// With a radio group, the selected radio row's summary; otherwise the
    /// summary source row's summary. `None` if neither resolves.
    pub fn subtitle(&self) -> Option<String> {
        let path = match (&self.radio, self.summary_source) {
            (Some(group), _) => self.path_for_radio(group.selected())?,
            (None, Some(path)) => path,
            (None, None) => return None,
        };
        Some(self.element_at(path)?.summary())
    }

    /// The subtitle, or an empty string.
    pub fn summary(&self) -> String {
        self.subtitle().unwrap_or_default()
    }

    pub(crate) fn recycle_key(&self) -> RecycleKey {
        if self.radio.is_some() || self.summary_source.is_some() {
            RecycleKey::RootSummary
        } else {
            RecycleKey::Root
        }
    }

    pub(crate) fn render(&self, cx: &mut RenderCx<'_>) -> CellId {
        let key = self.recycle_key();
        let style = match key {
            RecycleKey::RootSummary => CellStyle::Value,
            _ => CellStyle::Plain,
        };
        let (cell, reused) = dequeue_or_create(cx.surface, key, style);
        tracing::trace!(cell = cell.get(), reused, "render root row");
        cx.surface.update_cell(
            cell,
            CellContent {
                text: self.caption.clone(),
                detail: self.subtitle(),
                accessory: Accessory::Disclosure,
                selection: SelectionStyle::None,
                ..CellContent::default()
            },
        );
        cell
    }

    pub(crate) fn on_selected(&mut self, cx: &mut SelectCx<'_>) {
        let route = cx.route_to_row();
        tracing::debug!(depth = route.len(), "drill down");
        cx.context.push_detail(Detail::List(ListDetail {
            route,
            title: self.caption.clone(),
            presentation: Presentation::Pushed,
        }));
    }

    /// Release every materialized control in the tree, nested roots included.
    pub fn dispose(&mut self) {
        for section in &self.sections {
            for id in self.tree.children(*section).to_vec() {
                if let Some(element) = self.tree.element_mut(id) {
                    element.dispose();
                }
            }
        }
        tracing::debug!(sections = self.sections.len(), "disposed root");
    }

    // --- surface entry points -------------------------------------------

    /// Materialize the row at `path`.
    pub(crate) fn render_row(
        &mut self,
        path: Path,
        surface: &mut dyn ListSurface,
    ) -> Option<CellId> {
        self.ensure_prepared();
        let section = *self.sections.get(path.section)?;
        let id = *self.tree.children(section).get(path.row)?;
        let metrics = surface.metrics();
        let entry_alignment = match self.tree.element(id)?.as_entry() {
            Some(_) => self.entry_alignment(section, &*surface, &metrics),
            None => None,
        };
        let radio_selected = self.radio_selected();
        let element = self.tree.element_mut(id)?;
        let mut cx = RenderCx {
            surface,
            metrics,
            entry_alignment,
            radio_selected,
        };
        Some(element.render(&mut cx))
    }

    /// Offset shared by the entry fields of `section`, computed once and cached.
    fn entry_alignment(
        &mut self,
        section: NodeId,
        surface: &dyn ListSurface,
        metrics: &LayoutMetrics,
    ) -> Option<Size> {
        if let Some(cached) = self.tree.section(section)?.entry_alignment {
            return Some(cached);
        }
        let widest = self
            .tree
            .children(section)
            .iter()
            .filter_map(|id| self.tree.element(*id)?.as_entry())
            .map(|e| {
                let caption = e.caption().unwrap_or_default();
                surface.measure_text(caption, metrics.caption_font)
            })
            // Seeded with `None` so empty captions still yield a line height.
            .fold(None, |widest: Option<Size>, size| match widest {
                Some(w) if w.width >= size.width => Some(w),
                _ => Some(size),
            })?;
        let alignment = metrics.entry_alignment(widest);
        tracing::debug!(offset = alignment.width, "computed entry alignment");
        self.tree.section_mut(section)?.entry_alignment = Some(alignment);
        Some(alignment)
    }

    /// Handle a tap on the row at `path`.
    pub(crate) fn select(
        &mut self,
        path: Path,
        route: &[Path],
        context: &mut dyn Context,
        surface: &mut dyn ListSurface,
    ) {
        self.ensure_prepared();
        let Some(id) = self.id_at(path) else {
            return;
        };
        if self.tree.element(id.0).and_then(Element::as_radio).is_some() {
            self.select_radio(path, surface);
        }
        if let Some(element) = self.tree.element_mut(id.0) {
            element.on_selected(&mut SelectCx {
                context,
                surface,
                path,
                route,
            });
        }
    }

    /// Forward a control's new value to the row at `path`.
    pub(crate) fn control_changed(&mut self, path: Path, value: ControlValue) -> bool {
        self.element_at_mut(path)
            .is_some_and(|e| e.control_changed(value))
    }

    /// Give keyboard focus to the entry row at `path`.
    ///
    /// Returns false if the row is not an entry or its field has not been
    /// rendered yet.
    pub fn focus_entry(&mut self, path: Path) -> bool {
        self.element_at_mut(path)
            .and_then(Element::as_entry_mut)
            .is_some_and(EntryElement::focus)
    }

    /// Commit the entry at `path` and chain focus to the next entry row of its section.
    pub(crate) fn submit_entry(&mut self, path: Path) -> Option<FocusChange> {
        let section = *self.sections.get(path.section)?;
        let children = self.tree.children(section).to_vec();
        let current = *children.get(path.row)?;
        self.tree.element_mut(current)?.as_entry_mut()?.commit_text();

        let next = children
            .iter()
            .enumerate()
            .skip(path.row + 1)
            .find(|(_, id)| self.tree.element(**id).and_then(Element::as_entry).is_some());
        let change = match next {
            Some((row, id)) => {
                let target = Path::new(path.section, row);
                let focused = self
                    .tree
                    .element_mut(*id)
                    .and_then(Element::as_entry_mut)
                    .is_some_and(EntryElement::focus);
                if focused {
                    FocusChange::Moved(target)
                } else {
                    FocusChange::Pending(target)
                }
            }
            None => {
                if let Some(entry) = self
                    .tree
                    .element_mut(current)
                    .and_then(Element::as_entry_mut)
                {
                    entry.resign_focus();
                }
                FocusChange::Resigned
            }
        };
        tracing::debug!(?path, ?change, "entry submitted");
        Some(change)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ListAdapter;
    use crate::elements::{BooleanElement, FloatElement, RadioElement, StringElement};
    use crate::headless::{HeadlessSurface, RecordingContext};
    use alloc::string::ToString;
    use alloc::vec;

    /// Two sections; radios at flattened indices 0,1 in the first and 2,3,4 in the second.
    fn themes(selected: usize) -> RootElement {
        RootElement::with_radio("Theme", RadioGroup::with_key("theme", selected))
            .section(
                Section::with_header("Built in")
                    .element(RadioElement::new("Light"))
                    .element(StringElement::new("Not a radio"))
                    .element(RadioElement::new("Dark")),
            )
            .section(
                Section::with_header("Custom")
                    .element(RadioElement::new("Solarized"))
                    .element(RadioElement::new("Gruvbox"))
                    .element(BooleanElement::new("Sync", true))
                    .element(RadioElement::new("Nord")),
            )
    }

    fn radio_indices(root: &RootElement) -> Vec<usize> {
        root.flattened()
            .filter_map(|(_, e)| e.as_radio())
            .filter_map(RadioElement::radio_index)
            .collect()
    }

    fn checkmarks(root: &RootElement, surface: &HeadlessSurface) -> usize {
        root.flattened()
            .filter(|(_, e)| e.as_radio().is_some())
            .filter_map(|(p, _)| surface.cell_at(p))
            .filter(|c| surface.cell(*c).unwrap().content.accessory == Accessory::Checkmark)
            .count()
    }

    #[test]
    fn prepare_numbers_radios_densely_in_flattened_order() {
        let mut root = themes(0);
        assert!(!root.is_prepared());
        root.prepare();
        assert_eq!(radio_indices(&root), [0, 1, 2, 3, 4]);
        root.prepare();
        assert_eq!(
            radio_indices(&root),
            [0, 1, 2, 3, 4],
            "re-running is idempotent"
        );
        assert_eq!(root.radio_count(), 5);
    }

    #[test]
    fn path_for_radio_resolves_in_flattened_order() {
        let root = themes(0);
        assert_eq!(root.path_for_radio(0), Some(Path::new(0, 0)));
        assert_eq!(root.path_for_radio(1), Some(Path::new(0, 2)));
        assert_eq!(root.path_for_radio(2), Some(Path::new(1, 0)));
        assert_eq!(root.path_for_radio(3), Some(Path::new(1, 1)));
        assert_eq!(root.path_for_radio(4), Some(Path::new(1, 3)));
        assert_eq!(root.path_for_radio(5), None);
        assert_eq!(root.path_for_radio(10), None);
    }

    #[test]
    fn selecting_moves_the_single_checkmark() {
        let mut root = themes(1);
        let mut surface = HeadlessSurface::new();
        let mut context = RecordingContext::default();
        let adapter = ListAdapter::new();
        for section in 0..root.section_count() {
            for row in 0..root.row_count(section) {
                surface.show(&adapter, &mut root, Path::new(section, row));
            }
        }
        assert_eq!(checkmarks(&root, &surface), 1);

        adapter.tap(&mut root, &mut context, &mut surface, Path::new(1, 3));
        assert_eq!(root.radio_selected(), Some(4));
        assert_eq!(checkmarks(&root, &surface), 1);
        let nord = surface.cell_at(Path::new(1, 3)).unwrap();
        assert_eq!(
            surface.cell(nord).unwrap().content.accessory,
            Accessory::Checkmark
        );
        assert!(surface.deselected().contains(&Path::new(1, 3)));

        // Tapping the selected row again changes nothing.
        assert!(!root.select_radio(Path::new(1, 3), &mut surface));
        assert_eq!(checkmarks(&root, &surface), 1);
    }

    #[test]
    fn stale_selection_clears_nothing() {
        let mut root = themes(10);
        let mut surface = HeadlessSurface::new();
        let adapter = ListAdapter::new();
        surface.show(&adapter, &mut root, Path::new(0, 0));
        assert!(root.select_radio(Path::new(0, 0), &mut surface));
        assert_eq!(root.radio_selected(), Some(0));
    }

    #[test]
    fn radio_selected_without_group_is_a_sentinel() {
        let mut root = RootElement::new("Plain");
        assert_eq!(root.radio_selected(), None);
        root.set_radio_selected(3);
        assert_eq!(root.radio_selected(), None);
        assert_eq!(root.radio_group(), None);
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "radio selection on a root without a RadioGroup")]
    fn radio_transition_without_group_fails_fast() {
        let mut root =
            RootElement::new("Plain").section(Section::new().element(RadioElement::new("x")));
        root.select_radio(Path::new(0, 0), &mut HeadlessSurface::new());
    }

    #[test]
    fn subtitle_projects_selected_radio_or_summary_source() {
        let root = themes(2);
        assert_eq!(root.subtitle().as_deref(), Some("Solarized"));

        let wifi = RootElement::with_summary("Network", 0, 1).section(
            Section::new()
                .element(StringElement::new("Name"))
                .element(BooleanElement::new("Wi-Fi", false)),
        );
        assert_eq!(wifi.summary(), "Off");
        assert_eq!(wifi.recycle_key(), RecycleKey::RootSummary);

        let dangling = RootElement::with_summary("Broken", 3, 0);
        assert_eq!(dangling.subtitle(), None);
        assert_eq!(dangling.summary(), "");

        let plain = RootElement::new("Plain");
        assert_eq!(plain.subtitle(), None);
        assert_eq!(plain.recycle_key(), RecycleKey::Root);
    }

    #[test]
    fn nested_root_row_shows_disclosure_and_subtitle() {
        let mut surface = HeadlessSurface::new();
        let mut outer = RootElement::new("Settings").section(Section::new().element(themes(3)));
        let cell = ListAdapter::new()
            .view_for_row(&mut outer, &mut surface, Path::new(0, 0))
            .unwrap();
        let cell = surface.cell(cell).unwrap();
        assert_eq!(cell.key, RecycleKey::RootSummary);
        assert_eq!(cell.style, CellStyle::Value);
        assert_eq!(cell.content.text.as_deref(), Some("Theme"));
        assert_eq!(cell.content.detail.as_deref(), Some("Gruvbox"));
        assert_eq!(cell.content.accessory, Accessory::Disclosure);
    }

    #[test]
    fn tapping_a_nested_root_pushes_it() {
        let mut surface = HeadlessSurface::new();
        let mut context = RecordingContext::default();
        let mut outer = RootElement::new("Settings").section(
            Section::new()
                .element(StringElement::new("About"))
                .element(themes(0)),
        );
        ListAdapter::new().tap(&mut outer, &mut context, &mut surface, Path::new(0, 1));
        let [Detail::List(detail)] = context.pushed.as_slice() else {
            panic!("expected a pushed list, got {:?}", context.pushed);
        };
        assert_eq!(detail.route, vec![Path::new(0, 1)]);
        assert_eq!(detail.title.as_deref(), Some("Theme"));
        assert_eq!(detail.presentation, Presentation::Pushed);
        assert_eq!(
            outer.nested(&detail.route).and_then(RootElement::caption),
            Some("Theme")
        );
    }

    #[test]
    fn entry_alignment_uses_widest_capped_caption_once() {
        let mut surface = HeadlessSurface::new();
        let mut root = RootElement::new("Login").section(
            Section::new()
                .element(EntryElement::new("User", "", ""))
                .element(EntryElement::new("Password", "", "")),
        );
        let adapter = ListAdapter::new();
        let a = surface.show(&adapter, &mut root, Path::new(0, 0)).unwrap();
        let b = surface.show(&adapter, &mut root, Path::new(0, 1)).unwrap();
        let frame = |cell| {
            let control = surface.cell(cell).and_then(|c| c.content.control).unwrap();
            surface.control_spec(control).unwrap().frame
        };
        assert_eq!(frame(a).x0, frame(b).x0);
        // "Password" is 8 chars at 17pt in the headless metrics.
        let expected = surface.measure_text("Password", LayoutMetrics::default().caption_font);
        assert_eq!(frame(a).x0, 25.0 + expected.width);
        assert!(root.section_at(0).unwrap().entry_alignment().is_some());
    }

    #[test]
    fn caption_less_entries_keep_the_measured_height() {
        let mut surface = HeadlessSurface::new();
        let mut root = RootElement::new("Notes").section(
            Section::new()
                .element(EntryElement::new("", "note", ""))
                .element(EntryElement::new("", "note", "")),
        );
        let cell = surface
            .show(&ListAdapter::new(), &mut root, Path::new(0, 1))
            .unwrap();
        let control = surface.cell(cell).and_then(|c| c.content.control).unwrap();
        let frame = surface.control_spec(control).unwrap().frame;
        let line = surface.measure_text("", LayoutMetrics::default().caption_font);
        assert_eq!(frame.x0, 25.0);
        assert!(frame.height() > 0.0, "field frame must not collapse");
        assert_eq!(frame.height(), line.height);

        let mut alone = EntryElement::new("", "note", "");
        let cell = alone.render(&mut RenderCx::new(&mut surface));
        let control = surface.cell(cell).and_then(|c| c.content.control).unwrap();
        assert_eq!(surface.control_spec(control).unwrap().frame, frame);
    }

    #[test]
    fn entry_edits_invalidate_alignment() {
        let mut surface = HeadlessSurface::new();
        let mut root = RootElement::new("Login");
        let section = root.add(Section::new().element(EntryElement::new("A", "", "")));
        let cached = |root: &RootElement| root.section_ref(section).unwrap().entry_alignment();
        surface.show(&ListAdapter::new(), &mut root, Path::new(0, 0));
        assert!(cached(&root).is_some());

        root.add_element(section, StringElement::new("plain")).unwrap();
        assert!(cached(&root).is_some(), "non-entry rows keep the cache");
        let entry = root
            .add_element(section, EntryElement::new("A much longer caption", "", ""))
            .unwrap();
        assert!(cached(&root).is_none());

        surface.show(&ListAdapter::new(), &mut root, Path::new(0, 0));
        root.remove_element(entry);
        assert!(cached(&root).is_none());
    }

    #[test]
    fn submit_chains_focus_to_next_entry_then_resigns() {
        let mut surface = HeadlessSurface::new();
        let mut root = RootElement::new("Account").section(
            Section::new()
                .element(EntryElement::new("A", "", ""))
                .element(StringElement::new("between"))
                .element(EntryElement::new("B", "", ""))
                .element(EntryElement::new("C", "", "")),
        );
        let adapter = ListAdapter::new();
        for row in 0..4 {
            surface.show(&adapter, &mut root, Path::new(0, row));
        }
        let control = |surface: &HeadlessSurface, row| {
            surface
                .cell_at(Path::new(0, row))
                .and_then(|c| surface.cell(c))
                .and_then(|c| c.content.control)
        };

        let a = control(&surface, 0).unwrap();
        surface.set_text(a, "typed");
        assert_eq!(
            adapter.submit(&mut root, Path::new(0, 0)),
            Some(FocusChange::Moved(Path::new(0, 2)))
        );
        assert_eq!(surface.focused(), control(&surface, 2));
        assert_eq!(root.element_at(Path::new(0, 0)).unwrap().summary(), "typed");

        assert_eq!(
            adapter.submit(&mut root, Path::new(0, 2)),
            Some(FocusChange::Moved(Path::new(0, 3)))
        );
        assert_eq!(
            adapter.submit(&mut root, Path::new(0, 3)),
            Some(FocusChange::Resigned)
        );
        assert_eq!(surface.focused(), None, "last entry closes the keyboard");

        assert_eq!(
            adapter.submit(&mut root, Path::new(0, 1)),
            None,
            "not an entry row"
        );
    }

    #[test]
    fn submit_to_an_unrendered_entry_is_pending_until_focused() {
        let mut surface = HeadlessSurface::new();
        let mut root = RootElement::new("Account").section(
            Section::new()
                .element(EntryElement::new("A", "", ""))
                .element(EntryElement::new("B", "", "")),
        );
        let adapter = ListAdapter::new();
        let a = surface.show(&adapter, &mut root, Path::new(0, 0)).unwrap();
        let a = surface.cell(a).and_then(|c| c.content.control);
        assert!(adapter.focus_entry(&mut root, Path::new(0, 0)));
        assert_eq!(surface.focused(), a);

        assert_eq!(
            adapter.submit(&mut root, Path::new(0, 0)),
            Some(FocusChange::Pending(Path::new(0, 1)))
        );
        assert_eq!(surface.focused(), a, "focus stays until the row is shown");
        assert!(!adapter.focus_entry(&mut root, Path::new(0, 1)));

        let b = surface.show(&adapter, &mut root, Path::new(0, 1)).unwrap();
        let b = surface.cell(b).and_then(|c| c.content.control);
        assert!(adapter.focus_entry(&mut root, Path::new(0, 1)));
        assert_eq!(surface.focused(), b);
    }

    #[test]
    fn structural_edits_require_preparation() {
        let mut root = themes(0);
        root.prepare();
        let custom = root.section_at(1).unwrap().id();
        let extra = root
            .insert_element(custom, 0, RadioElement::new("Dracula"))
            .unwrap();
        assert!(!root.is_prepared());
        assert_eq!(root.path_of(extra), Some(Path::new(1, 0)));

        let mut surface = HeadlessSurface::new();
        ListAdapter::new().view_for_row(&mut root, &mut surface, Path::new(1, 0));
        assert!(root.is_prepared());
        assert_eq!(radio_indices(&root), [0, 1, 2, 3, 4, 5]);
        let index = root
            .element(extra)
            .and_then(Element::as_radio)
            .and_then(RadioElement::radio_index);
        assert_eq!(index, Some(2));
    }

    #[test]
    fn edits_report_bad_positions() {
        let mut root = themes(0);
        assert_eq!(
            root.insert_section(5, Section::new()).unwrap_err(),
            TreeError::SectionOutOfBounds { index: 5, len: 2 }
        );
        let first = root.section_at(0).unwrap().id();
        assert_eq!(
            root.insert_element(first, 9, StringElement::new("x")).unwrap_err(),
            TreeError::RowOutOfBounds {
                section: 0,
                index: 9,
                len: 3,
            }
        );
        let removed = root.remove_section(first).unwrap();
        assert_eq!(removed.header(), Some("Built in"));
        assert_eq!(removed.len(), 3);
        assert_eq!(
            root.add_element(first, StringElement::new("x")).unwrap_err(),
            TreeError::StaleSection
        );
        assert_eq!(root.remove_section(first).map(|s| s.len()), None);
        assert_eq!(root.section_count(), 1);
        assert_eq!(root.path_for_radio(0), Some(Path::new(0, 0)));
    }

    #[test]
    fn moving_a_row_overwrites_its_section() {
        let mut root = themes(0);
        let from = root.section_at(0).unwrap().id();
        let to = root.section_at(1).unwrap().id();
        let light = root.id_at(Path::new(0, 0)).unwrap();
        root.move_element(light, to, None).unwrap();
        assert_eq!(root.section_of(light), Some(to));
        assert_eq!(root.path_of(light), Some(Path::new(1, 4)));
        assert_eq!(root.section_ref(from).unwrap().len(), 2);
        assert_eq!(
            root.move_element(light, to, Some(42)),
            Err(TreeError::RowOutOfBounds {
                section: 1,
                index: 42,
                len: 5,
            })
        );
    }

    #[test]
    fn removal_disposes_and_detaches() {
        let mut surface = HeadlessSurface::new();
        let mut root = RootElement::new("Controls").section(
            Section::new()
                .element(BooleanElement::new("On", true))
                .element(FloatElement::new(0.5)),
        );
        let adapter = ListAdapter::new();
        surface.show(&adapter, &mut root, Path::new(0, 0));
        surface.show(&adapter, &mut root, Path::new(0, 1));
        assert_eq!(surface.stats().controls_alive, 2);

        let id = root.id_at(Path::new(0, 0)).unwrap();
        let removed = root.remove_element(id).unwrap();
        assert!(!removed.is_materialized());
        assert_eq!(surface.stats().controls_alive, 1);
        assert_eq!(root.path_of(id), None);
        assert_eq!(root.section_of(id), None);
        assert!(root.element(id).is_none());

        root.dispose();
        root.dispose();
        assert_eq!(surface.stats().controls_alive, 0);
        surface.show(&adapter, &mut root, Path::new(0, 0));
        assert_eq!(
            surface.stats().controls_created,
            3,
            "render after dispose allocates anew"
        );
    }

    #[test]
    fn sections_iterate_in_order() {
        let root = themes(0);
        let headers: Vec<_> = root.sections().map(|s| s.header()).collect();
        assert_eq!(headers, [Some("Built in"), Some("Custom")]);
        let captions: Vec<_> = root
            .section_at(1)
            .unwrap()
            .elements()
            .map(|e| e.caption().map(ToString::to_string))
            .collect();
        assert_eq!(captions.len(), 4);
        assert_eq!(captions[3].as_deref(), Some("Nord"));
    }
}
