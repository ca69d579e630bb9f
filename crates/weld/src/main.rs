use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use log::{info, warn};

use weld_core::{
    AssetSource, BinaryBuilder, BuildConfig, BuildRequest, DirAssetSource, GoToolchain, KernelError,
    MemoryAssetSource, VersionInfo,
};

/// Weld: build a new binary from the base application plus plugins
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct CliArgs {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Build a new binary with the given plugins
    Build(BuildArgs),
    /// Print what a build would do without running it
    Plan(BuildArgs),
}

#[derive(Args, Debug)]
struct BuildArgs {
    /// Output binary path [default: ./new_answer]
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Plugin descriptor `<module>[@<version>][=<localPath>]`, repeatable
    #[arg(short, long = "with", value_name = "DESCRIPTOR")]
    with: Vec<String>,

    /// Build configuration file (json, yaml or toml)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Local source replacing the whole base module
    #[arg(long, env = "ANSWER_MODULE", value_name = "PATH")]
    base_module_replacement: Option<PathBuf>,

    /// Directory holding the static UI assets
    #[arg(long, value_name = "DIR")]
    ui_dir: Option<PathBuf>,

    /// Version stamped into the new binary
    #[arg(long, default_value = "")]
    stamp_version: String,

    /// Revision stamped into the new binary
    #[arg(long, default_value = "")]
    stamp_revision: String,

    /// Build time stamped into the new binary
    #[arg(long, default_value = "")]
    stamp_time: String,
}

impl BuildArgs {
    /// Load the configuration file, if any, and apply flag overrides
    fn config(&self) -> Result<BuildConfig, KernelError> {
        let mut config = match &self.config {
            Some(path) => BuildConfig::load(path)?,
            None => BuildConfig::default(),
        };
        if let Some(path) = &self.base_module_replacement {
            config.base_module_replacement = Some(path.clone());
        }
        if let Some(dir) = &self.ui_dir {
            config.ui_dir = Some(dir.clone());
        }
        Ok(config)
    }

    fn request(&self) -> BuildRequest {
        let mut request = BuildRequest::new(self.with.iter().cloned()).with_version_info(VersionInfo::new(
            self.stamp_version.as_str(),
            self.stamp_revision.as_str(),
            self.stamp_time.as_str(),
        ));
        request.output = self.output.clone();
        request
    }

    fn builder(&self) -> Result<BinaryBuilder, KernelError> {
        let config = self.config()?;
        let toolchain = GoToolchain::with_program(&config.toolchain_program);
        let assets: Box<dyn AssetSource> = match &config.ui_dir {
            Some(dir) => Box::new(DirAssetSource::new(dir)),
            None => {
                warn!("No UI directory given, the new binary ships without UI assets");
                Box::new(MemoryAssetSource::new())
            }
        };
        Ok(BinaryBuilder::new(config, Box::new(toolchain), assets))
    }
}

fn build(args: &BuildArgs) -> ExitCode {
    let builder = match args.builder() {
        Ok(builder) => builder,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match builder.build(args.request()) {
        Ok(report) => {
            info!("build new binary successfully: {}", report.output.display());
            println!("{}", report.output.display());
            ExitCode::SUCCESS
        }
        Err(failure) => {
            eprintln!("{}", failure);
            if let Some(workspace) = &failure.workspace {
                eprintln!("Build workspace kept at {}", workspace.display());
            }
            ExitCode::FAILURE
        }
    }
}

fn plan(args: &BuildArgs) -> ExitCode {
    let plan = args.builder().and_then(|builder| builder.plan(args.request()));
    match plan {
        Ok(steps) => {
            for (i, step) in steps.iter().enumerate() {
                println!("{}. {}", i + 1, step);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Failed to plan build: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = CliArgs::parse();
    match &args.command {
        Commands::Build(build_args) => build(build_args),
        Commands::Plan(plan_args) => plan(plan_args),
    }
}
