// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A link row pushing a web page whose load fails.
//!
//! Run:
//! - `cargo run -p understory_dialog_demos --example web_link`

use understory_dialog::headless::{HeadlessSurface, RecordingContext};
use understory_dialog::{
    Detail, HtmlElement, ListAdapter, LoadError, PageContent, Path, RootElement, Section,
};

fn main() {
    tracing_subscriber::fmt().with_max_level(tracing::Level::WARN).init();

    let notes = HtmlElement::new("Release notes", "https://example.invalid/notes");
    let mut root = RootElement::new("Help").section(Section::new().element(notes));
    let adapter = ListAdapter::new();
    let mut surface = HeadlessSurface::new();
    let mut context = RecordingContext::default();

    surface.show(&adapter, &mut root, Path::new(0, 0));
    adapter.tap(&mut root, &mut context, &mut surface, Path::new(0, 0));

    let Some(Detail::Web(mut page)) = context.pushed.pop() else {
        panic!("link rows push a web page");
    };
    println!("pushed {:?} for {}", page.title(), page.url());

    page.load_started(&mut context);
    println!("indicator visible: {}", context.indicator_visible());
    let message = "A server with the specified hostname could not be found.";
    page.load_failed(&mut context, &LoadError::Failed(message.into()));
    println!("indicator visible: {}", context.indicator_visible());

    if let PageContent::Html(markup) = page.content() {
        println!("{markup}");
    }
}
