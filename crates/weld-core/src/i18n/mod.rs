//! # Weld Core Resource Merging
//!
//! Plugins ship localized text under `<module>/i18n/*.yaml`, nested under a
//! single namespace key. After dependencies are vendored, the merger
//! gathers those translations across all plugins and appends them to the
//! matching files of the base application's own resource directory.
pub mod bundle;
pub mod merger;

pub use bundle::{decode_namespace, DecodeError, TranslationBundle, Translations};
pub use merger::{apply_bundle, collect_plugin_translations, merge_translations, MergeSummary};
