/// Application name
pub const APP_NAME: &str = "weld";

/// Application version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Import path of the base application every build extends
pub const DEFAULT_BASE_MODULE: &str = "github.com/answerdev/answer";

/// Module name of the generated composition module
pub const DEFAULT_ENTRY_MODULE: &str = "answer";

/// Language version directive written into the generated manifest
pub const DEFAULT_TOOLCHAIN_VERSION: &str = "1.19";

/// Import alias of the base application's command package
pub const DEFAULT_COMMAND_ALIAS: &str = "answercmd";

/// Toolchain executable
pub const DEFAULT_TOOLCHAIN_PROGRAM: &str = "go";

/// Name prefix of the ephemeral build workspace
pub const DEFAULT_WORKSPACE_PREFIX: &str = "answer_build";

/// Output file name used when the caller gives no output path
pub const DEFAULT_OUTPUT_NAME: &str = "new_answer";

/// Top-level key plugin translations are nested under
pub const DEFAULT_RESOURCE_NAMESPACE: &str = "plugin";

/// Generated entry point file name
pub const ENTRY_POINT_FILE: &str = "main.go";

/// Generated dependency manifest file name
pub const MANIFEST_FILE: &str = "go.mod";

/// Directory the toolchain vendors dependencies into
pub const VENDOR_DIR: &str = "vendor";

/// Resource directory name inside every module
pub const I18N_DIR: &str = "i18n";

/// Asset directory name inside the vendored base module
pub const UI_DIR: &str = "ui";

/// Base application's index resource, processed by name
pub const INDEX_RESOURCE: &str = "i18n.yaml";

/// Recognized text-resource extensions
pub const RESOURCE_EXTENSIONS: &[&str] = &["yaml"];
