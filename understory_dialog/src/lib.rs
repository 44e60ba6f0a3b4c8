// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Dialog: declarative, sectioned element trees that drive a virtualized list surface.
//!
//! Describe a screen of settings-style rows (switches, sliders, text entries, links,
//! single-choice groups, drill-down sub-screens) as a tree of plain values, and let
//! the tree answer the questions a cell-recycling list asks: how many sections and
//! rows, which cell to show at a path, and what to do when a row is tapped.
//!
//! - Only visible rows materialize cells. Rows that host a control create it on
//!   first render and reuse it for their lifetime.
//! - Cells are recycled by an explicit [`RecycleKey`] per row kind, and every
//!   render rewrites all display fields of the cell.
//! - Cross-row behavior lives in the owning [`RootElement`]: radio numbering and
//!   checkmark transitions, entry field alignment, and focus chaining on submit.
//! - A nested root shows up in its parent as a drill-down row whose subtitle is
//!   the [`Element::summary`] of a chosen child.
//!
//! ## Where this fits
//!
//! The crate does not paint and does not manage a navigation stack. The widget
//! toolkit implements [`ListSurface`] (cells, controls, text measurement) and the
//! host implements [`Context`] (push a detail surface, toggle the activity
//! indicator). A [`ListAdapter`] per displayed list translates surface callbacks
//! into tree operations.
//!
//! ## API overview
//!
//! - [`RootElement`]: ordered sections; owns rows in a generational arena.
//! - [`Section`]: header, footer and rows, built detached then added to a root.
//! - [`Element`]: the closed set of row kinds plus [`CustomElement`] for app rows.
//! - [`RadioGroup`]: the selected index shared by a root's radio rows.
//! - [`ListAdapter`]: `section_count`, `row_count`, `view_for_row`, `tap`, `submit`.
//!
//! ## Example
//!
//! ```rust
//! use understory_dialog::{
//!     BooleanElement, Path, RadioElement, RadioGroup, RootElement, Section, StringElement,
//! };
//!
//! let units = RootElement::with_radio("Units", RadioGroup::new(1)).section(
//!     Section::new()
//!         .element(RadioElement::new("Metric"))
//!         .element(RadioElement::new("Imperial")),
//! );
//!
//! let mut settings = RootElement::new("Settings")
//!     .section(
//!         Section::with_header("General")
//!             .element(BooleanElement::new("Airplane Mode", false))
//!             .element(StringElement::with_value("Version", "2.1")),
//!     )
//!     .section(Section::new().element(units));
//!
//! settings.prepare();
//! assert_eq!(settings.section_count(), 2);
//!
//! // The nested root's row shows its selected choice.
//! let row = settings.element_at(Path::new(1, 0)).unwrap();
//! assert_eq!(row.summary(), "Imperial");
//! assert_eq!(row.as_root().unwrap().path_for_radio(1), Some(Path::new(0, 1)));
//! ```
//!
//! The `headless` feature adds an in-memory surface and context; see the demos
//! for a full render and tap cycle.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod adapter;
pub mod element;
pub mod elements;
pub mod error;
#[cfg(any(test, feature = "headless"))]
pub mod headless;
pub mod root;
pub mod section;
pub mod surface;
mod tree;
pub mod types;

pub use adapter::ListAdapter;
pub use element::{CustomElement, Element, RenderCx, SelectCx};
pub use elements::{
    BooleanElement, EntryElement, FloatElement, FocusChange, HtmlElement, PageContent,
    RadioElement, RadioGroup, StringElement, WebPage,
};
pub use error::{LoadError, TreeError};
pub use root::{ElementId, RootElement, SectionId};
pub use section::{Section, SectionRef};
pub use surface::{
    Context, ControlView, Detail, ListDetail, ListSurface, Presentation, dequeue_or_create,
};
pub use types::{
    Accessory, Autoresizing, CellContent, CellId, CellStyle, ControlId, ControlKind, ControlSpec,
    ControlValue, Font, LayoutMetrics, Path, RecycleKey, SelectionStyle, TextAlignment,
};
