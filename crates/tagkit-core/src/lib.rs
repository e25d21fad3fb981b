//! tagkit-core - argument model, classification and markup escaping
//!
//! This crate provides the pieces shared by both construction modes of
//! `tagkit`: the argument union a builder accepts, the drain that
//! classifies and flattens those arguments, the escaper, and the string
//! assembly used by the markup builder. It knows nothing about any
//! particular document model; nodes are a type parameter.
//!
//! # Architecture
//!
//! ```text
//!                         ┌─────────┐  Item::Attrs ──▶ attributes
//! defaults ++ args ─────▶ │  Drain  │  Item::Text  ──▶ children / contents
//!   (Arg<N>, nested)      └─────────┘  Item::Node  ──▶ children / contents
//!                          flattens Arg::List, skips Arg::Absent
//! ```
//!
//! # Example
//!
//! ```rust
//! use tagkit_core::{args, attrs, Arg, Drain, Item, MarkupParts, Options};
//!
//! let args: Vec<Arg<()>> = args![attrs! { "href" => "/home" }, ["Go ", "home"]];
//!
//! let mut parts = MarkupParts::new();
//! for item in Drain::new(args) {
//!     match item {
//!         Item::Attrs(attrs) => parts.push_attrs(&attrs),
//!         Item::Text(text) => parts.push_text(&text),
//!         _ => {}
//!     }
//! }
//!
//! let markup = parts.finish("a", &Options::default());
//! assert_eq!(markup, "<a href=\"&#x2F;home\">Go home</a\n>");
//! ```

mod arg;
mod escape;
mod macros;
mod options;
mod render;

pub use arg::{Arg, ArgKind, AttrValue, Attrs, Drain, Item, Lazy, Number, Walk};
pub use escape::{escape, escape_display, escape_into};
pub use options::Options;
pub use render::MarkupParts;
