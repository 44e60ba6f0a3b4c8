// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Link row and the web page detail it pushes.
//!
//! The row does not load anything itself. Tapping it pushes a [`WebPage`]
//! through the [`Context`]; the host performs the load and reports progress back
//! through [`WebPage::load_started`], [`WebPage::load_finished`] and
//! [`WebPage::load_failed`].

use alloc::format;
use alloc::string::String;

use crate::element::{RenderCx, SelectCx};
use crate::error::LoadError;
use crate::surface::{Context, Detail, dequeue_or_create};
use crate::types::{Accessory, CellContent, CellId, CellStyle, RecycleKey, SelectionStyle};

/// A row that drills into remote content addressed by a URL.
#[derive(Clone, Debug)]
pub struct HtmlElement {
    caption: Option<String>,
    url: String,
}

impl HtmlElement {
    /// Create a link row.
    pub fn new(caption: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            caption: Some(caption.into()),
            url: url.into(),
        }
    }

    /// Display label, also used as the page title.
    pub fn caption(&self) -> Option<&str> {
        self.caption.as_deref()
    }

    /// Address of the content.
    pub fn url(&self) -> &str {
        &self.url
    }

    pub(crate) fn render(&mut self, cx: &mut RenderCx<'_>) -> CellId {
        let (cell, reused) = dequeue_or_create(cx.surface, RecycleKey::Html, CellStyle::Plain);
        tracing::trace!(cell = cell.get(), reused, "render html row");
        cx.surface.update_cell(
            cell,
            CellContent {
                text: self.caption.clone(),
                accessory: Accessory::Disclosure,
                selection: SelectionStyle::Highlight,
                ..CellContent::default()
            },
        );
        cell
    }

    pub(crate) fn on_selected(&mut self, cx: &mut SelectCx<'_>) {
        tracing::debug!(url = %self.url, "push web page");
        cx.context
            .push_detail(Detail::Web(WebPage::new(self.caption.clone(), self.url.clone())));
    }
}

/// What a web page currently displays.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PageContent {
    /// Remote content at this address.
    Url(String),
    /// Inline markup, used for error reports.
    Html(String),
}

/// Detail surface showing remote content for a link row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WebPage {
    title: Option<String>,
    url: String,
    content: PageContent,
    loading: bool,
}

impl WebPage {
    /// A page that will load `url`.
    pub fn new(title: Option<String>, url: String) -> Self {
        Self {
            title,
            content: PageContent::Url(url.clone()),
            url,
            loading: false,
        }
    }

    /// Navigation title.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Requested address.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// What the page should display.
    pub fn content(&self) -> &PageContent {
        &self.content
    }

    /// True between [`WebPage::load_started`] and the matching finish or failure.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// The host started loading.
    pub fn load_started(&mut self, context: &mut dyn Context) {
        self.loading = true;
        context.set_network_activity_indicator(true);
    }

    /// The host finished loading.
    pub fn load_finished(&mut self, context: &mut dyn Context) {
        self.loading = false;
        context.set_network_activity_indicator(false);
    }

    /// The host failed to load; the page switches to an inline error report.
    pub fn load_failed(&mut self, context: &mut dyn Context, error: &LoadError) {
        tracing::warn!(url = %self.url, %error, "web page failed to load");
        self.loading = false;
        context.set_network_activity_indicator(false);
        self.content = PageContent::Html(error_markup(error));
    }
}

fn error_markup(error: &LoadError) -> String {
    format!(
        "<html><center><font size=+5 color='red'>An error occurred:<br>{error}</font></center></html>"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::headless::{HeadlessSurface, RecordingContext};
    use crate::types::Path;

    #[test]
    fn row_shows_disclosure_and_highlights() {
        let mut surface = HeadlessSurface::new();
        let mut row = HtmlElement::new("Docs", "https://example.com/docs");
        let cell = row.render(&mut RenderCx::new(&mut surface));
        let content = &surface.cell(cell).unwrap().content;
        assert_eq!(content.text.as_deref(), Some("Docs"));
        assert_eq!(content.accessory, Accessory::Disclosure);
        assert_eq!(content.selection, SelectionStyle::Highlight);
    }

    #[test]
    fn selecting_pushes_a_titled_page() {
        let mut surface = HeadlessSurface::new();
        let mut context = RecordingContext::default();
        let mut row = HtmlElement::new("Docs", "https://example.com/docs");
        row.on_selected(&mut SelectCx::new(&mut context, &mut surface, Path::new(0, 0)));
        let [Detail::Web(page)] = context.pushed.as_slice() else {
            panic!("expected one web page, got {:?}", context.pushed);
        };
        assert_eq!(page.title(), Some("Docs"));
        assert_eq!(
            page.content(),
            &PageContent::Url("https://example.com/docs".into())
        );
    }

    #[test]
    fn load_lifecycle_toggles_activity_indicator() {
        let mut context = RecordingContext::default();
        let mut page = WebPage::new(None, "https://example.com".into());
        page.load_started(&mut context);
        assert!(page.is_loading());
        page.load_finished(&mut context);
        assert!(!page.is_loading());
        assert_eq!(context.activity, [true, false]);
        assert!(!context.indicator_visible());
    }

    #[test]
    fn failure_is_reported_inline() {
        let mut context = RecordingContext::default();
        let mut page = WebPage::new(Some("Docs".into()), "https://example.invalid".into());
        page.load_started(&mut context);
        let error = LoadError::Failed("The host could not be found.".into());
        page.load_failed(&mut context, &error);
        assert_eq!(context.activity, [true, false]);
        assert_eq!(
            page.content(),
            &PageContent::Html(
                "<html><center><font size=+5 color='red'>An error occurred:<br>The host could not be found.</font></center></html>".into()
            )
        );
        assert_eq!(
            page.url(),
            "https://example.invalid",
            "the requested address is kept"
        );
    }
}
