// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types shared by the element tree and the list surface: index paths,
//! handles, recycle keys, cell content, control specifications, and layout metrics.

use alloc::string::String;
use kurbo::{Rect, Size};

/// Index path addressing one row within a [`RootElement`](crate::RootElement).
///
/// Paths are positional: they stay valid only until the next structural edit of
/// the root they were obtained from. Use [`ElementId`] for a handle that survives edits.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Path {
    /// Section index within the root.
    pub section: usize,
    /// Row index within the section.
    pub row: usize,
}

impl Path {
    /// Create a path from a section and row index.
    pub const fn new(section: usize, row: usize) -> Self {
        Self { section, row }
    }
}

/// Identifier of a cell owned by the list surface.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct CellId(u32);

impl CellId {
    /// Wrap a surface-specific raw identifier.
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// The raw identifier.
    pub const fn get(self) -> u32 {
        self.0
    }
}

/// Identifier of a heavyweight control (switch, slider, text field) created by the surface.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct ControlId(u32);

impl ControlId {
    /// Wrap a surface-specific raw identifier.
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// The raw identifier.
    pub const fn get(self) -> u32 {
        self.0
    }
}

/// Row-kind identifier used to match a newly needed cell against the surface's
/// pool of released cells.
///
/// Every key implies exactly one [`CellStyle`], so a recycled cell always has
/// the layout its row kind expects.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub enum RecycleKey {
    /// On/off switch row.
    Boolean,
    /// Numeric-range slider row.
    Float,
    /// Link row that drills into a web page.
    Html,
    /// Text row without a value.
    String,
    /// Text row with a right-aligned value.
    StringValue,
    /// Single-choice row.
    Radio,
    /// Text entry row.
    Entry,
    /// Nested root without a subtitle.
    Root,
    /// Nested root that shows a summary subtitle.
    RootSummary,
    /// Application-defined row kind.
    Custom(&'static str),
}

impl RecycleKey {
    /// Stable name for logging and toolkit reuse identifiers.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Boolean => "BooleanElement",
            Self::Float => "FloatElement",
            Self::Html => "HtmlElement",
            Self::String => "StringElement",
            Self::StringValue => "StringElement.Value",
            Self::Radio => "RadioElement",
            Self::Entry => "EntryElement",
            Self::Root => "RootElement",
            Self::RootSummary => "RootElement.Summary",
            Self::Custom(name) => name,
        }
    }
}

/// Layout of the text labels inside a cell.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum CellStyle {
    /// A single left-aligned label.
    #[default]
    Plain,
    /// A label on the left and a detail label on the right.
    Value,
}

/// Trailing affordance drawn at the end of a row.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum Accessory {
    /// Nothing.
    #[default]
    None,
    /// Chevron indicating drill-down navigation.
    Disclosure,
    /// Checkmark indicating the selected choice.
    Checkmark,
}

/// Whether tapping a row paints a selection highlight.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum SelectionStyle {
    /// The row never highlights; used by rows hosting an interactive control.
    #[default]
    None,
    /// The row highlights while being tapped.
    Highlight,
}

/// Horizontal alignment of a row's main label.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum TextAlignment {
    /// Leading edge.
    #[default]
    Left,
    /// Centered.
    Center,
    /// Trailing edge.
    Right,
}

/// Every mutable display field of a cell.
///
/// Rows always hand the surface a complete value so that a recycled cell never
/// keeps text, detail, accessory or control from the row that used it before.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CellContent {
    /// Main label.
    pub text: Option<String>,
    /// Detail label (shown only by [`CellStyle::Value`] cells).
    pub detail: Option<String>,
    /// Alignment of the main label.
    pub alignment: TextAlignment,
    /// Trailing affordance.
    pub accessory: Accessory,
    /// Tap highlight behavior.
    pub selection: SelectionStyle,
    /// Control hosted in the cell's content area, if any.
    pub control: Option<ControlId>,
}

/// A font used for text measurement.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Font {
    /// Point size.
    pub size: f64,
    /// Bold weight.
    pub bold: bool,
}

impl Font {
    /// Regular system font.
    pub const fn system(size: f64) -> Self {
        Self { size, bold: false }
    }

    /// Bold system font.
    pub const fn bold_system(size: f64) -> Self {
        Self { size, bold: true }
    }
}

/// Current value of a control, as reported by or bound to the surface.
#[derive(Clone, Debug, PartialEq)]
pub enum ControlValue {
    /// Switch state.
    Switch(bool),
    /// Slider position.
    Slider(f32),
    /// Text field contents.
    Text(String),
}

/// The interaction kind of a control to create.
#[derive(Clone, Debug, PartialEq)]
pub enum ControlKind {
    /// Two-state switch.
    Switch,
    /// Slider over a closed range.
    Slider {
        /// Lower bound.
        min: f32,
        /// Upper bound.
        max: f32,
        /// Report value changes while the thumb moves.
        continuous: bool,
        /// Image shown at the minimum end.
        min_image: Option<String>,
        /// Image shown at the maximum end.
        max_image: Option<String>,
    },
    /// Single-line text field.
    TextField {
        /// Hint shown while the field is empty.
        placeholder: Option<String>,
        /// Obscure the contents.
        secure: bool,
    },
}

bitflags::bitflags! {
    /// How a control resizes when its cell's content area changes size.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Autoresizing: u8 {
        /// Width follows the container.
        const FLEXIBLE_WIDTH       = 0b0000_0001;
        /// Height follows the container.
        const FLEXIBLE_HEIGHT      = 0b0000_0010;
        /// The left margin absorbs size changes.
        const FLEXIBLE_LEFT_MARGIN = 0b0000_0100;
    }
}

/// Everything the surface needs to create a control.
#[derive(Clone, Debug, PartialEq)]
pub struct ControlSpec {
    /// Interaction kind.
    pub kind: ControlKind,
    /// Frame within the cell's content area.
    pub frame: Rect,
    /// Initial value.
    pub value: ControlValue,
    /// Resize behavior.
    pub autoresizing: Autoresizing,
}

/// Layout constants used when materializing rows.
///
/// Surfaces provide these through [`ListSurface::metrics`](crate::ListSurface::metrics).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LayoutMetrics {
    /// Width of a row's content area.
    pub row_width: f64,
    /// Height of a row's content area.
    pub row_height: f64,
    /// Gap added after the widest entry caption.
    pub entry_label_padding: f64,
    /// Captions wider than this do not push entry fields further right.
    pub entry_label_max_width: f64,
    /// Font used to measure entry captions.
    pub caption_font: Font,
    /// Frame of a boolean row's switch.
    pub switch_frame: Rect,
    /// Frame of a numeric-range row's slider.
    pub slider_frame: Rect,
}

impl Default for LayoutMetrics {
    fn default() -> Self {
        Self {
            row_width: 320.0,
            row_height: 44.0,
            entry_label_padding: 25.0,
            entry_label_max_width: 160.0,
            caption_font: Font::bold_system(17.0),
            switch_frame: Rect::from_origin_size((198.0, 12.0), (94.0, 27.0)),
            slider_frame: Rect::from_origin_size((10.0, 12.0), (280.0, 7.0)),
        }
    }
}

impl LayoutMetrics {
    /// Horizontal offset and height for entry fields, given the widest caption in a section.
    pub fn entry_alignment(&self, widest_caption: Size) -> Size {
        Size::new(
            self.entry_label_padding + widest_caption.width.min(self.entry_label_max_width),
            widest_caption.height,
        )
    }

    /// Frame of an entry field placed at `alignment`, vertically centered in the row.
    pub fn entry_frame(&self, alignment: Size) -> Rect {
        let y = (self.row_height - alignment.height) / 2.0 - 1.0;
        Rect::from_origin_size(
            (alignment.width, y),
            (self.row_width - alignment.width, alignment.height),
        )
    }
}
