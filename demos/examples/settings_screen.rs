// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A settings screen with switches, a slider, and a drill-down single-choice list.
//!
//! Renders the visible rows into a headless surface, drills into the nested
//! "Units" list, picks a different unit and shows how the parent row's subtitle
//! follows the selection.
//!
//! Run:
//! - `RUST_LOG=understory_dialog=debug cargo run -p understory_dialog_demos --example settings_screen`

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use understory_dialog::headless::{HeadlessSurface, RecordingContext};
use understory_dialog::{
    BooleanElement, Detail, FloatElement, ListAdapter, ListSurface, Path, RadioElement,
    RadioGroup, RootElement, Section, StringElement,
};

fn build() -> RootElement {
    let units = RootElement::with_radio("Units", RadioGroup::with_key("units", 0)).section(
        Section::with_header("Measurement")
            .element(RadioElement::new("Metric"))
            .element(RadioElement::new("Imperial"))
            .element(RadioElement::new("Nautical")),
    );

    RootElement::new("Settings")
        .section(
            Section::with_header_footer("General", "Changes apply immediately")
                .element(BooleanElement::new("Airplane Mode", false))
                .element(BooleanElement::new("Bluetooth", true))
                .element(
                    FloatElement::with_images("sun.min", "sun.max", 0.6).with_caption("Brightness"),
                ),
        )
        .section(
            Section::with_header("Regional")
                .element(units)
                .element(StringElement::with_value("Version", "2.1")),
        )
}

fn dump(label: &str, adapter: &ListAdapter, root: &RootElement, surface: &HeadlessSurface) {
    let title = adapter.title(root).unwrap_or("(untitled)");
    println!("== {label}: {title} ==");
    for section in 0..adapter.section_count(root) {
        if let Some(header) = adapter.header(root, section) {
            println!("  [{header}]");
        }
        for row in 0..adapter.row_count(root, section) {
            let shown = surface.cell_at(Path::new(section, row));
            let Some(cell) = shown.and_then(|c| surface.cell(c)) else {
                continue;
            };
            println!(
                "    {:<14} {:<10} {:?}",
                cell.content.text.as_deref().unwrap_or(""),
                cell.content.detail.as_deref().unwrap_or(""),
                cell.content.accessory,
            );
        }
    }
}

fn show_all(adapter: &ListAdapter, root: &mut RootElement, surface: &mut HeadlessSurface) {
    for section in 0..adapter.section_count(root) {
        for row in 0..adapter.row_count(root, section) {
            surface.show(adapter, root, Path::new(section, row));
        }
    }
}

fn main() {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let mut root = build();
    let mut context = RecordingContext::default();

    let top = ListAdapter::new();
    let mut surface = HeadlessSurface::new();
    show_all(&top, &mut root, &mut surface);
    dump("before", &top, &root, &surface);

    // The switch reports a change; the row takes the value directly.
    top.control_value_changed(
        &mut root,
        Path::new(0, 0),
        understory_dialog::ControlValue::Switch(true),
    );

    top.tap(&mut root, &mut context, &mut surface, Path::new(1, 0));
    let Some(Detail::List(detail)) = context.pushed.pop() else {
        panic!("tapping a nested root pushes a list");
    };

    let units = ListAdapter::from_detail(&detail);
    let mut pushed = HeadlessSurface::new();
    show_all(&units, &mut root, &mut pushed);
    dump("units", &units, &root, &pushed);

    units.tap(&mut root, &mut context, &mut pushed, Path::new(0, 2));
    dump("units after tap", &units, &root, &pushed);

    // Back on the parent surface, re-render the drill-down row.
    surface.show(&top, &mut root, Path::new(1, 0));
    surface.show(&top, &mut root, Path::new(0, 0));
    dump("after", &top, &root, &surface);

    let stats = surface.stats();
    println!(
        "cells created: {}, controls created: {}",
        stats.cells_created, stats.controls_created
    );
    assert_eq!(
        root.element_at(Path::new(1, 0)).map(|e| e.summary()).as_deref(),
        Some("Nautical")
    );
}
