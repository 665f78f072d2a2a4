//! # HTML builder generator
//!
//! Generates a typed builder API for HTML and SVG elements, plus a smoke test for every
//! element, from a fixed dataset of attribute and event catalogs.
//!
//! Each element entry names the attributes and events it supports by catalog key. Those keys
//! are resolved into descriptors, merged with the baseline sets shared by every HTML or SVG
//! element, sorted by display name and rendered as Rust source: a capability trait, a
//! constructor and a newtype per element.
//!
//! ## Runtime
//!
//! The generated builder only calls into a hand-written runtime module, imported from
//! [`Config::runtime_path`]. That module must provide:
//!
//! - `HtmlElement::new(tag: impl Into<String>, self_closing: bool)`
//! - `HtmlElement::set_attr(&mut self, name: impl Into<String>, value: AttrValue)`
//! - `HtmlElement::set_children(&mut self, children: Vec<Node>)`
//! - `HtmlElement::set_event_handler(&mut self, event: &str, handler: EventHandler)`
//! - `HtmlElement::set_xmlns(&mut self, namespace: impl Into<String>)`
//! - `AttrValue::{String, Bool, Int, Float}` with `From<i64>` and `From<&str>`
//! - `Node: From<HtmlElement>` and `text(impl Display) -> Node`
//! - `EventHandler: From<F>` for `F: Fn(Context, Event)`, along with `Context` and `Event`
//!
//! The test file is meant to be mounted as a child module of the builder module.

pub mod attributes;
pub mod catalog;
pub mod compose;
pub mod config;
mod data;
pub mod elements;
pub mod emit;
pub mod error;
pub mod events;
pub mod output;

pub use catalog::{Catalog, CatalogError, Catalogs};
pub use compose::Composer;
pub use config::Config;
pub use elements::{ElementDescriptor, ElementTable};
pub use error::{Error, Result};
pub use output::{Artifact, Artifacts};

use std::path::PathBuf;

use emit::EmitOptions;

/// Builds the element table from the built-in catalogs and renders both artifacts.
///
/// Nothing is written; see [`Artifacts::write`].
pub fn generate(config: &Config) -> Result<Artifacts> {
    let catalogs = Catalogs::builtin();
    let table = ElementTable::builtin(&catalogs)?;
    render(&table, config)
}

/// Renders both artifacts for an arbitrary table.
pub fn render(table: &ElementTable, config: &Config) -> Result<Artifacts> {
    let options = EmitOptions::new(config.parse_runtime_path()?);

    let builder = emit::builder::render(table, &options)?;
    let tests = emit::smoke::render(table)?;

    tracing::debug!(
        elements = table.len(),
        builder_bytes = builder.len(),
        test_bytes = tests.len(),
        "rendered artifacts"
    );

    Ok(Artifacts {
        builder: Artifact::new(config.builder_file.clone(), builder),
        tests: Artifact::new(config.test_file.clone(), tests),
    })
}

/// Generates and writes both files into [`Config::out_dir`].
pub fn run(config: &Config) -> Result<Vec<PathBuf>> {
    let artifacts = generate(config)?;
    artifacts.write(&config.out_dir)
}
