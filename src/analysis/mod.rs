// Text analysis: categorization, theme extraction, and quote selection.
//
// Everything in here is pure and synchronous: no I/O, no shared mutable
// state. Given the same issues, every function returns the same output.

pub mod categorizer;
pub mod filters;
pub mod lexicon;
pub mod models;
pub mod quotes;
pub mod themes;
pub mod traits;
