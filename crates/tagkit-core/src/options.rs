//! Configuration options shared by both construction modes

/// Options for node and markup builders
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Emit a newline before the `>` of every closing tag (`</p\n>`)
    pub closing_newline: bool,

    /// Mirror the `class` attribute into `className` on live nodes
    pub class_name_alias: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            closing_newline: true,
            class_name_alias: true,
        }
    }
}
