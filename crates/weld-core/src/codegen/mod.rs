//! # Weld Core Code Generation
//!
//! Produces the composition module that pulls every plugin into the build:
//! an entry point with one side-effect import per plugin, the dependency
//! manifest, and the replacement directives redirecting locally overridden
//! plugins to their source directories.
pub mod entry_point;
pub mod replacement;

pub use entry_point::EntryPoint;
pub use replacement::Replacement;

// Test module declaration
#[cfg(test)]
mod tests;
