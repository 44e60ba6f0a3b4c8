// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sections: ordered groups of rows with optional header and footer captions.
//!
//! A [`Section`] is built detached, then moved into a root with
//! [`RootElement::add`](crate::RootElement::add). Once attached, its rows live in
//! the root's arena and are reached through [`SectionRef`].

use alloc::string::String;
use alloc::vec::Vec;
use kurbo::Size;

use crate::element::Element;

/// A detached section under construction (or removed from a root).
#[derive(Debug, Default)]
pub struct Section {
    pub(crate) header: Option<String>,
    pub(crate) footer: Option<String>,
    pub(crate) elements: Vec<Element>,
}

impl Section {
    /// An untitled section.
    pub fn new() -> Self {
        Self::default()
    }

    /// A section with a header caption.
    pub fn with_header(header: impl Into<String>) -> Self {
        Self {
            header: Some(header.into()),
            ..Self::default()
        }
    }

    /// A section with header and footer captions.
    pub fn with_header_footer(header: impl Into<String>, footer: impl Into<String>) -> Self {
        Self {
            header: Some(header.into()),
            footer: Some(footer.into()),
            elements: Vec::new(),
        }
    }

    /// Append a row.
    pub fn add(&mut self, element: impl Into<Element>) -> &mut Self {
        self.elements.push(element.into());
        self
    }

    /// Append a row if one is given; `None` is ignored.
    pub fn add_opt(&mut self, element: Option<impl Into<Element>>) -> &mut Self {
        if let Some(element) = element {
            self.add(element);
        }
        self
    }

    /// Builder form of [`Section::add`].
    #[must_use]
    pub fn element(mut self, element: impl Into<Element>) -> Self {
        self.add(element);
        self
    }

    /// Header caption.
    pub fn header(&self) -> Option<&str> {
        self.header.as_deref()
    }

    /// Footer caption.
    pub fn footer(&self) -> Option<&str> {
        self.footer.as_deref()
    }

    /// Rows in insertion order.
    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.elements.iter()
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// True if the section has no rows.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Take the rows out of the section.
    pub fn into_elements(self) -> Vec<Element> {
        self.elements
    }
}

impl<E: Into<Element>> Extend<E> for Section {
    fn extend<I: IntoIterator<Item = E>>(&mut self, iter: I) {
        self.elements.extend(iter.into_iter().map(Into::into));
    }
}

impl<E: Into<Element>> FromIterator<E> for Section {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        let mut s = Self::new();
        s.extend(iter);
        s
    }
}

/// Per-section state kept in the arena once a section is attached.
#[derive(Debug, Default)]
pub(crate) struct SectionNode {
    pub(crate) header: Option<String>,
    pub(crate) footer: Option<String>,
    /// Entry field offset (width) and caption height shared by the section's entry rows.
    ///
    /// Computed on first use and kept until explicitly invalidated.
    pub(crate) entry_alignment: Option<Size>,
}

impl SectionNode {
    pub(crate) fn new(header: Option<String>, footer: Option<String>) -> Self {
        Self {
            header,
            footer,
            entry_alignment: None,
        }
    }

    /// Drop the cached entry alignment so the next entry render recomputes it.
    pub(crate) fn invalidate_layout(&mut self) {
        self.entry_alignment = None;
    }
}

/// Borrowed view of an attached section.
#[derive(Clone, Copy, Debug)]
pub struct SectionRef<'a> {
    pub(crate) root: &'a crate::RootElement,
    pub(crate) id: crate::tree::NodeId,
}

impl<'a> SectionRef<'a> {
    /// Stable handle of this section.
    pub fn id(&self) -> crate::SectionId {
        crate::SectionId(self.id)
    }

    /// Header caption.
    pub fn header(&self) -> Option<&'a str> {
        self.root.tree.section(self.id)?.header.as_deref()
    }

    /// Footer caption.
    pub fn footer(&self) -> Option<&'a str> {
        self.root.tree.section(self.id)?.footer.as_deref()
    }

    /// Rows in order.
    pub fn elements(self) -> impl Iterator<Item = &'a Element> {
        let tree = &self.root.tree;
        tree.children(self.id)
            .iter()
            .filter_map(move |id| tree.element(*id))
    }

    /// Handles of the rows in order.
    pub fn element_ids(self) -> impl Iterator<Item = crate::ElementId> {
        self.root
            .tree
            .children(self.id)
            .iter()
            .map(|id| crate::ElementId(*id))
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.root.tree.children(self.id).len()
    }

    /// True if the section has no rows.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Cached entry alignment, if an entry row has been rendered since the last invalidation.
    pub fn entry_alignment(&self) -> Option<Size> {
        self.root.tree.section(self.id)?.entry_alignment
    }
}
