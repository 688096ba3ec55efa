//! Stable identities for substation elements.
//!
//! An identity names an element by its position in the substation tree, so it
//! stays the same across documents that describe the same plant.
//!
//! - A substation is identified by its name.
//! - Any other named element appends `>name` to its parent's identity:
//!   `XAT>220>B220>CB1`.
//! - Terminals and neutral points are not named in a useful way; they append
//!   `>` and their connectivity node path instead:
//!   `XAT>220>B220>CB1>XAT/220/B220/L1`.
//!
//! Identities double as edge labels in the topology graph.

/// Separator between identity segments.
pub const SEPARATOR: char = '>';

/// Identity of a named element below `parent`.
///
/// An empty `parent` means the element is a root (a substation).
///
/// # Examples
///
/// ```rust
/// use gridwalk::scl::identity::named;
///
/// assert_eq!(named("", "XAT"), "XAT");
/// assert_eq!(named("XAT>220", "B220"), "XAT>220>B220");
/// ```
#[must_use]
pub fn named(parent: &str, name: &str) -> String {
    if parent.is_empty() {
        name.to_string()
    } else {
        format!("{parent}{SEPARATOR}{name}")
    }
}

/// Identity of a terminal or neutral point below `parent`, attached to the
/// connectivity node `connectivity_node`.
#[must_use]
pub fn attached(parent: &str, connectivity_node: &str) -> String {
    format!("{parent}{SEPARATOR}{connectivity_node}")
}
