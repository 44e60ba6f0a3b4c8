// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Concrete row kinds.
//!
//! Rows that host a control ([`BooleanElement`], [`FloatElement`], [`EntryElement`])
//! create it lazily on first render, keep it for their lifetime, and rebind it on
//! every render. [`Element::dispose`](crate::Element::dispose) drops the control,
//! so the next render creates a fresh one.

pub mod boolean;
pub mod entry;
pub mod float;
pub mod html;
pub mod radio;
pub mod string;

pub use boolean::BooleanElement;
pub use entry::{EntryElement, FocusChange};
pub use float::FloatElement;
pub use html::{HtmlElement, PageContent, WebPage};
pub use radio::{RadioElement, RadioGroup};
pub use string::StringElement;
