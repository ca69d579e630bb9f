//! # Weld Core Kernel
//!
//! The `kernel` module ties the subsystems together into a build.
//!
//! ## Key Responsibilities & Components:
//!
//! - **Build Orchestration**: [`BinaryBuilder`](builder::BinaryBuilder) creates the
//!   ephemeral workspace and runs the standard stage pipeline against it.
//! - **Core Constants**: default module names, file names, and directory
//!   conventions live in the `constants` submodule.
//! - **Error Handling**: the crate-wide [`Error`](error::Error) and its
//!   `Result` alias live in the `error` submodule.
pub mod builder;
pub mod constants;
pub mod error;

pub use builder::{BinaryBuilder, BuildFailure, BuildReport, BuildRequest};
pub use error::{Error, Result};
