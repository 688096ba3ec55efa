//! Shared building blocks that are independent of substation semantics.

pub mod graph;
