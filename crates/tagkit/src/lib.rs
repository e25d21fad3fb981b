//! # tagkit
//!
//! Build DOM nodes or escaped markup from plain function calls.
//!
//! A builder is bound to a tag name. Calling it with a flat, possibly
//! nested list of arguments (text, numbers, attribute maps, nodes, lists)
//! either constructs a live node or renders the equivalent markup.
//!
//! ## Design
//!
//! The document model is a collaborator behind the [`Document`] trait.
//! [`HtmlDocument`] is the bundled in-memory implementation producing
//! [`Node`] trees; any other model (a browser binding, a CDP tree) can be
//! plugged in by implementing the trait.
//!
//! - **Node mode**: [`NodeBuilder`] creates an element, applies attribute
//!   maps and appends children in argument order.
//! - **Markup mode**: [`MarkupBuilder`] binds arguments into a
//!   [`BoundMarkup`] which renders `<tag attr="v">content</tag\n>`.
//! - **Registry**: [`Html`] holds one builder per preset tag in each mode.
//!
//! ## Example (Node-based)
//!
//! ```rust
//! use tagkit::{args, attrs, Html};
//!
//! let html = Html::new();
//!
//! let p = html
//!     .build("p", args![attrs! { "class" => "lead" }, "hello ", 42])
//!     .unwrap();
//!
//! assert_eq!(p.attr("class"), Some("lead"));
//! assert_eq!(p.text_content(), "hello 42");
//! ```
//!
//! ## Example (Markup)
//!
//! ```rust
//! use tagkit::{args, attrs, Html};
//!
//! let html = Html::new();
//!
//! let link = html
//!     .render("a", args!["click here", attrs! { "href" => "#top" }])
//!     .unwrap();
//!
//! assert_eq!(link, "<a href=\"#top\">click here</a\n>");
//! ```

mod attrs;
mod dom;
mod element;
#[cfg(feature = "html")]
pub mod html;
mod markup;
pub mod node;
pub mod presets;
mod registry;

pub use attrs::apply_attrs;
pub use dom::{Document, HtmlDocument};
pub use element::{build_element, NodeBuilder};
#[cfg(feature = "html")]
pub use html::parse_html;
pub use markup::{BoundMarkup, MarkupBuilder};
pub use node::{Node, NodeType};
pub use registry::Html;

pub use tagkit_core::{
    args, attrs, escape, escape_display, Arg, ArgKind, AttrValue, Attrs, Drain, Item, Lazy,
    Number, Options, Walk,
};

/// Error type for tagkit operations
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("Invalid character in attribute name: {0:?}")]
    InvalidCharacter(String),

    #[error("Not an element: cannot set {name:?} on {node}")]
    NotAnElement { name: String, node: String },

    #[error("Hierarchy request error: {parent} cannot have children")]
    HierarchyRequest { parent: String },

    #[error("Unregistered tag: {0}")]
    UnregisteredTag(String),

    /// Failure reported by a foreign document model, passed through as is
    #[error(transparent)]
    Model(#[from] Box<dyn std::error::Error + Send + Sync>),
}

pub type Result<T> = std::result::Result<T, BuildError>;
