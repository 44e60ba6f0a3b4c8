// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A login form: aligned entry fields and focus chaining on return.
//!
//! Run:
//! - `RUST_LOG=understory_dialog=debug cargo run -p understory_dialog_demos --example login_form`

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use understory_dialog::headless::HeadlessSurface;
use understory_dialog::{
    EntryElement, FocusChange, ListAdapter, ListSurface, Path, RootElement, Section,
};

fn main() {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let mut root = RootElement::new("Sign in").section(
        Section::with_header("Account")
            .element(EntryElement::new("Login", "you@example.com", ""))
            .element(EntryElement::password("Password", "required", ""))
            .element(EntryElement::new("Server", "", "example.com")),
    );
    let adapter = ListAdapter::new();
    let mut surface = HeadlessSurface::new();

    let mut fields = Vec::new();
    for row in 0..adapter.row_count(&root, 0) {
        let path = Path::new(0, row);
        surface.show(&adapter, &mut root, path);
        let control = surface
            .cell_at(path)
            .and_then(|c| surface.cell(c))
            .and_then(|c| c.content.control)
            .expect("entry rows host a text field");
        let frame = surface.control_spec(control).map(|s| s.frame).unwrap_or_default();
        let (x, width) = (frame.x0, frame.width());
        println!("row {row}: field at x={x:.0}, width {width:.0}");
        fields.push(control);
    }

    let typed = ["ada@example.com", "hunter2", "example.org"];
    let mut path = Path::new(0, 0);
    for (field, text) in fields.iter().zip(typed) {
        surface.set_text(*field, text);
        match adapter.submit(&mut root, path) {
            Some(FocusChange::Moved(next)) => {
                println!("submitted row {} -> focus row {}", path.row, next.row);
                path = next;
            }
            Some(FocusChange::Pending(next)) => {
                // The next field is off screen: show it, then focus it.
                surface.show(&adapter, &mut root, next);
                assert!(adapter.focus_entry(&mut root, next));
                let (from, to) = (path.row, next.row);
                println!("submitted row {from} -> focus row {to} after render");
                path = next;
            }
            Some(FocusChange::Resigned) => {
                println!("submitted row {} -> keyboard closed", path.row);
            }
            None => unreachable!("every row is an entry"),
        }
    }

    for row in 0..adapter.row_count(&root, 0) {
        let element = root.element_at(Path::new(0, row)).expect("row exists");
        let caption = element.caption().unwrap_or("");
        println!("{caption:<10} = {}", element.summary());
    }
}
