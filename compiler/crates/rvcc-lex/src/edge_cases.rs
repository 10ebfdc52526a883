//! Boundary behaviors called out in spec.md §8 that don't fit naturally
//! inside `lexer/mod.rs`'s own unit tests.
