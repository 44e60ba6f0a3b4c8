// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Binding between one displayed root and a list surface.
//!
//! A [`ListAdapter`] does not own the tree. It records which root it shows as a
//! route from the top-level root, and each entry point resolves that route
//! against the tree it is handed. A route that no longer resolves (because an
//! edit removed or moved the nested root) makes the adapter report an empty
//! list instead of failing.

use alloc::vec::Vec;

use crate::elements::FocusChange;
use crate::root::RootElement;
use crate::surface::{Context, ListDetail, ListSurface, Presentation};
use crate::types::{CellId, ControlValue, Path};

/// Translates surface callbacks into tree operations for one displayed root.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListAdapter {
    route: Vec<Path>,
    presentation: Presentation,
}

impl ListAdapter {
    /// Adapter for the top-level root.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adapter for a drill-down surface requested through [`Context::push_detail`].
    pub fn from_detail(detail: &ListDetail) -> Self {
        Self {
            route: detail.route.clone(),
            presentation: detail.presentation,
        }
    }

    /// Paths from the top-level root to the displayed root.
    pub fn route(&self) -> &[Path] {
        &self.route
    }

    /// How the surface is presented.
    pub fn presentation(&self) -> Presentation {
        self.presentation
    }

    /// The displayed root.
    pub fn resolve<'r>(&self, root: &'r RootElement) -> Option<&'r RootElement> {
        root.nested(&self.route)
    }

    fn resolve_mut<'r>(&self, root: &'r mut RootElement) -> Option<&'r mut RootElement> {
        let shown = root.nested_mut(&self.route);
        if shown.is_none() {
            tracing::warn!(depth = self.route.len(), "route no longer resolves");
        }
        shown
    }

    /// Navigation title.
    pub fn title<'r>(&self, root: &'r RootElement) -> Option<&'r str> {
        self.resolve(root)?.caption()
    }

    /// Number of sections.
    pub fn section_count(&self, root: &RootElement) -> usize {
        self.resolve(root).map_or(0, RootElement::section_count)
    }

    /// Number of rows in `section`.
    pub fn row_count(&self, root: &RootElement, section: usize) -> usize {
        self.resolve(root).map_or(0, |r| r.row_count(section))
    }

    /// Header caption of `section`.
    pub fn header<'r>(&self, root: &'r RootElement, section: usize) -> Option<&'r str> {
        self.resolve(root)?.section_at(section)?.header()
    }

    /// Footer caption of `section`.
    pub fn footer<'r>(&self, root: &'r RootElement, section: usize) -> Option<&'r str> {
        self.resolve(root)?.section_at(section)?.footer()
    }

    /// Materialize the row at `path`, reusing a released cell of the same kind when possible.
    pub fn view_for_row(
        &self,
        root: &mut RootElement,
        surface: &mut dyn ListSurface,
        path: Path,
    ) -> Option<CellId> {
        self.resolve_mut(root)?.render_row(path, surface)
    }

    /// The user tapped the row at `path`.
    pub fn tap(
        &self,
        root: &mut RootElement,
        context: &mut dyn Context,
        surface: &mut dyn ListSurface,
        path: Path,
    ) {
        tracing::debug!(?path, "tap");
        if let Some(shown) = self.resolve_mut(root) {
            shown.select(path, &self.route, context, surface);
        }
    }

    /// A control hosted by the row at `path` reported a new value.
    pub fn control_value_changed(
        &self,
        root: &mut RootElement,
        path: Path,
        value: ControlValue,
    ) -> bool {
        self.resolve_mut(root)
            .is_some_and(|r| r.control_changed(path, value))
    }

    /// The user pressed return in the entry row at `path`.
    ///
    /// Returns `None` if `path` is not an entry row. On
    /// [`FocusChange::Pending`], scroll the target row into view and call
    /// [`ListAdapter::focus_entry`].
    pub fn submit(&self, root: &mut RootElement, path: Path) -> Option<FocusChange> {
        self.resolve_mut(root)?.submit_entry(path)
    }

    /// Give keyboard focus to the entry row at `path`.
    ///
    /// Returns false if the row is not an entry or has not been rendered yet.
    pub fn focus_entry(&self, root: &mut RootElement, path: Path) -> bool {
        self.resolve_mut(root).is_some_and(|r| r.focus_entry(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::{BooleanElement, FloatElement, RadioElement, RadioGroup, StringElement};
    use crate::headless::{HeadlessSurface, RecordingContext};
    use crate::section::Section;
    use crate::surface::Detail;
    use crate::types::RecycleKey;

    fn settings() -> RootElement {
        RootElement::new("Settings")
            .section(
                Section::with_header_footer("General", "Applies to every device")
                    .element(BooleanElement::new("Airplane Mode", false))
                    .element(FloatElement::new(0.5))
                    .element(StringElement::with_value("Version", "2.1")),
            )
            .section(
                Section::new().element(
                    RootElement::with_radio("Units", RadioGroup::new(0)).section(
                        Section::new()
                            .element(RadioElement::new("Metric"))
                            .element(RadioElement::new("Imperial")),
                    ),
                ),
            )
    }

    #[test]
    fn reports_structure() {
        let root = settings();
        let adapter = ListAdapter::new();
        assert_eq!(adapter.title(&root), Some("Settings"));
        assert_eq!(adapter.presentation(), Presentation::Root);
        assert_eq!(adapter.section_count(&root), 2);
        assert_eq!(adapter.row_count(&root, 0), 3);
        assert_eq!(adapter.row_count(&root, 7), 0);
        assert_eq!(adapter.header(&root, 0), Some("General"));
        assert_eq!(adapter.footer(&root, 0), Some("Applies to every device"));
        assert_eq!(adapter.header(&root, 1), None);
    }

    #[test]
    fn recycled_cells_of_matching_kind_reuse_the_control() {
        let mut root = settings();
        let mut surface = HeadlessSurface::new();
        let adapter = ListAdapter::new();
        let path = Path::new(0, 0);

        let first = surface.show(&adapter, &mut root, path).unwrap();
        surface.hide(path);
        let second = surface.show(&adapter, &mut root, path).unwrap();
        assert_eq!(first, second);
        assert_eq!(surface.stats().cells_created, 1);
        assert_eq!(surface.stats().controls_created, 1);

        // A released boolean cell is not handed to a slider row.
        surface.hide(path);
        let slider = surface.show(&adapter, &mut root, Path::new(0, 1)).unwrap();
        assert_ne!(slider, first);
        assert_eq!(surface.cell(slider).unwrap().key, RecycleKey::Float);
        assert_eq!(surface.stats().cells_created, 2);
    }

    #[test]
    fn drill_down_binds_a_pushed_adapter() {
        let mut root = settings();
        let mut surface = HeadlessSurface::new();
        let mut context = RecordingContext::default();
        ListAdapter::new().tap(&mut root, &mut context, &mut surface, Path::new(1, 0));
        let Some(Detail::List(detail)) = context.pushed.pop() else {
            panic!("expected a drill-down");
        };

        let units = ListAdapter::from_detail(&detail);
        assert_eq!(units.presentation(), Presentation::Pushed);
        assert_eq!(units.title(&root), Some("Units"));
        assert_eq!(units.row_count(&root, 0), 2);

        let mut inner = HeadlessSurface::new();
        units.view_for_row(&mut root, &mut inner, Path::new(0, 1));
        units.tap(&mut root, &mut context, &mut inner, Path::new(0, 1));
        let shown = units.resolve(&root).unwrap();
        assert_eq!(shown.radio_selected(), Some(1));
        assert_eq!(
            root.element_at(Path::new(1, 0)).unwrap().summary(),
            "Imperial",
            "parent row projects the new selection"
        );
    }

    #[test]
    fn control_changes_reach_the_row() {
        let mut root = settings();
        let adapter = ListAdapter::new();
        let switch = ControlValue::Switch(true);
        let slider = ControlValue::Slider(0.75);
        assert!(adapter.control_value_changed(&mut root, Path::new(0, 0), switch.clone()));
        assert!(adapter.control_value_changed(&mut root, Path::new(0, 1), slider));
        assert!(!adapter.control_value_changed(&mut root, Path::new(0, 9), switch));
        assert_eq!(root.element_at(Path::new(0, 0)).unwrap().summary(), "On");
        assert_eq!(root.element_at(Path::new(0, 1)).unwrap().summary(), "0.75");
    }

    #[test]
    fn stale_routes_show_an_empty_list() {
        let mut root = settings();
        let units = ListAdapter::from_detail(&ListDetail {
            route: alloc::vec![Path::new(1, 0)],
            title: None,
            presentation: Presentation::Pushed,
        });
        let section = root.section_at(1).unwrap().id();
        root.remove_section(section);
        assert_eq!(units.section_count(&root), 0);
        let cell = units.view_for_row(&mut root, &mut HeadlessSurface::new(), Path::new(0, 0));
        assert_eq!(cell, None);
    }
}
