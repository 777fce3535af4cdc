//! Call arguments for fallible operations.

use std::collections::BTreeMap;
use std::fmt;

/// An ordered sequence of positional values plus a mapping of named values.
///
/// The named mapping is a `BTreeMap` so that rendering is deterministic:
/// the same arguments always produce the same text, which is what lets a
/// failure message be part of a checkable contract.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallArgs {
    positional: Vec<String>,
    named: BTreeMap<String, String>,
}

impl CallArgs {
    /// Creates an empty argument list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a positional argument.
    #[must_use]
    pub fn arg(mut self, value: impl Into<String>) -> Self {
        self.positional.push(value.into());
        self
    }

    /// Inserts a named argument. A repeated name overwrites the earlier value.
    #[must_use]
    pub fn kwarg(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.named.insert(name.into(), value.into());
        self
    }

    /// Returns the positional arguments in call order.
    #[must_use]
    pub fn positional(&self) -> &[String] {
        &self.positional
    }

    /// Returns the named arguments in sorted name order.
    #[must_use]
    pub const fn named(&self) -> &BTreeMap<String, String> {
        &self.named
    }

    /// Returns true if no arguments were supplied.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positional.is_empty() && self.named.is_empty()
    }

    /// Renders the positional sequence, e.g. `("a", "x")` or `()`.
    #[must_use]
    pub fn render_positional(&self) -> String {
        let mut out = String::from("(");
        for (i, value) in self.positional.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            out.push('"');
            out.push_str(value);
            out.push('"');
        }
        out.push(')');
        out
    }

    /// Renders the named mapping in sorted order, e.g. `{b: "c"}` or `{}`.
    #[must_use]
    pub fn render_named(&self) -> String {
        let mut out = String::from("{");
        for (i, (name, value)) in self.named.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            out.push_str(name);
            out.push_str(": \"");
            out.push_str(value);
            out.push('"');
        }
        out.push('}');
        out
    }
}

impl fmt::Display for CallArgs {
    /// Positional rendering immediately followed by the named rendering.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.render_positional(), self.render_named())
    }
}
