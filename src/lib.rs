//! A plugin package catalog rendered into documentation by a small
//! template engine.
//!
//! # Features
//!
//! ### Syntax
//!
//! - Expressions: `{{ name }}`
//! - Conditionals: `{% if owner_url %} ... {% endif %}`
//! - Loops: `{% for plugin in plugins %} ... {% endfor %}`
//!
//! Rendering is total: references that cannot be resolved and directives
//! that cannot be processed are removed from the output instead of raising
//! errors.
//!
//! ### Catalog
//!
//! - A single JSON document describing plugins and their components
//! - Add, update, remove, and validate operations that preserve fields
//!   they do not know about
//! - A documentation set rendered from the catalog plus the frontmatter of
//!   the component files it references
//!
//! # Getting started
//!
//! Your entry point is the [`Template`] struct. A template wraps its
//! source text; rendering substitutes values from a context and always
//! produces a [`String`].
//!
//! ```
//! let template = folio::Template::new("Hello {{ name }}!");
//! let result = template.render_value(&folio::value!({ name: "World" }));
//! assert_eq!(result, "Hello World!");
//! ```
//!
//! Any [`serde`] serializable type can be used as the context via
//! [`.render`][Template::render].
//!
//! ```
//! #[derive(serde::Serialize)]
//! struct Context { name: String }
//!
//! let ctx = Context { name: "World".into() };
//!
//! let result = folio::Template::new("Hello {{ name }}!").render(&ctx)?;
//! assert_eq!(result, "Hello World!");
//! # Ok::<(), folio::Error>(())
//! ```
//!
//! # Examples
//!
//! ### Loops over records
//!
//! Sequences of records are rendered with `{% for %}`; fields of the loop
//! variable are referenced with a dotted name.
//!
//! ```
//! let template = folio::Template::new(
//!     "{% for plugin in plugins %}- {{ plugin.name }}\n{% endfor %}",
//! );
//! let result = template.render_value(&folio::value!({
//!     plugins: [{ name: "alpha" }, { name: "beta" }],
//! }));
//! assert_eq!(result, "- alpha\n- beta\n");
//! ```
//!
//! ### Conditional sections
//!
//! `{% if %}` keeps its body when the named value is truthy and drops it
//! otherwise.
//!
//! ```
//! let template = folio::Template::new("{% if url %}<{{ url }}>{% endif %}");
//! assert_eq!(
//!     template.render_value(&folio::value!({ url: "https://example.org" })),
//!     "<https://example.org>",
//! );
//! assert_eq!(template.render_value(&folio::value!({ url: "" })), "");
//! ```
//!
//! ### The catalog
//!
//! The [`catalog::Catalog`] type loads and edits the JSON document, the
//! [`context`] module flattens it into render data, and
//! [`docs::Generator`] drives the full documentation set. The `folio`
//! binary wires these together behind `add`, `update`, `remove`,
//! `validate`, and `generate` subcommands.

pub mod catalog;
pub mod cli;
pub mod commands;
pub mod context;
pub mod docs;
mod error;
pub mod frontmatter;
mod macros;
mod render;
mod value;

pub use crate::error::{Error, Result};
pub use crate::render::Template;
pub use crate::value::{to_value, List, Map, Value};
