//! Page interaction controller for the breach-check results page.
//!
//! This crate is compiled to WebAssembly and runs in the browser once the
//! results page has been parsed. It wires the page's DOM listeners: the
//! submit spinner, the guidance modal, the mind-map click relay, and the
//! global error logger. The mind-map itself is drawn by an external library;
//! this crate only reacts to clicks on its nodes.
//!
//! All handler logic is written against the [`dom::DomElement`] and
//! [`dom::PageLookup`] traits so it can be tested without a browser. The
//! `hydrate` feature adds the `web-sys` implementations and the wasm entry
//! point in `browser`.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`controller`] | One-time handle resolution ([`controller::Wiring`]) |
//! | [`form`] | Submit button / spinner swap |
//! | [`modal`] | Guidance modal show/close |
//! | [`mindmap`] | Mind-map click relay into the modal |
//! | [`diagnostics`] | Uncaught error reports and results-object probe |
//! | [`guidance`] | Static mitigation and prevention points |
//! | [`config`] | Element ids and selectors, overridable from JSON |
//! | [`dom`] | DOM abstraction traits |
//! | [`error`] | Crate error type |
//! | [`consts`] | Default ids, tags and placeholders |

pub mod config;
pub mod consts;
pub mod controller;
pub mod diagnostics;
pub mod dom;
pub mod error;
pub mod form;
pub mod guidance;
pub mod mindmap;
pub mod modal;

#[cfg(feature = "hydrate")]
pub mod browser;

#[cfg(test)]
mod fake;
