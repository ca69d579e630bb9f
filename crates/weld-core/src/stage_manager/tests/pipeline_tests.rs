use std::cell::RefCell;
use std::rc::Rc;

use tempfile::tempdir;

use super::material;
use crate::assets::MemoryAssetSource;
use crate::config::BuildConfig;
use crate::kernel::error::{Error, Result};
use crate::stage_manager::pipeline::StagePipeline;
use crate::stage_manager::{BuildState, Stage, StageContext};
use crate::testing::RecordingToolchain;
use crate::toolchain::ToolchainError;

// Test helper to track stage execution
type ExecutionTracker = Rc<RefCell<Vec<String>>>;

// Mock Stage implementation that uses the tracker
struct MockStage {
    id: String,
    state: BuildState,
    tracker: ExecutionTracker,
    error_message: Option<String>,
}

impl MockStage {
    fn new(id: &str, state: BuildState, tracker: ExecutionTracker) -> Self {
        Self {
            id: id.to_string(),
            state,
            tracker,
            error_message: None,
        }
    }

    // Configure the mock stage to return an error
    fn with_error(mut self, error_message: &str) -> Self {
        self.error_message = Some(error_message.to_string());
        self
    }
}

impl Stage for MockStage {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.id
    }

    fn description(&self) -> &str {
        "Mock stage"
    }

    fn state(&self) -> BuildState {
        self.state
    }

    fn execute(&self, context: &mut StageContext<'_>) -> Result<()> {
        assert_eq!(context.state(), self.state);
        self.tracker.borrow_mut().push(self.id.clone());
        match &self.error_message {
            Some(message) => Err(ToolchainError::CommandFailed {
                command: message.clone(),
                exit_code: Some(2),
            }
            .into()),
            None => Ok(()),
        }
    }

    fn dry_run_description(&self, _context: &StageContext<'_>) -> String {
        format!("Dry run: Would execute stage {}", self.id)
    }
}

fn pipeline_of(stages: Vec<MockStage>) -> StagePipeline {
    let mut pipeline = StagePipeline::new("test", "Test pipeline");
    for stage in stages {
        pipeline.add_stage(Box::new(stage));
    }
    pipeline
}

#[test]
fn test_pipeline_runs_stages_in_order() {
    let workspace = tempdir().unwrap();
    let tracker = ExecutionTracker::default();
    let pipeline = pipeline_of(vec![
        MockStage::new("first", BuildState::GenerateEntryPoint, tracker.clone()),
        MockStage::new("second", BuildState::ResolveDependencies, tracker.clone()),
        MockStage::new("third", BuildState::Compile, tracker.clone()),
    ]);

    let config = BuildConfig::default();
    let toolchain = RecordingToolchain::new();
    let assets = MemoryAssetSource::new();
    let mut context = StageContext::new_live(material(workspace.path(), &[]), &config, &toolchain, &assets);

    pipeline.execute(&mut context).unwrap();
    assert_eq!(*tracker.borrow(), vec!["first", "second", "third"]);
    assert_eq!(context.state(), BuildState::Done);
    assert_eq!(context.failed_at(), None);
}

#[test]
fn test_pipeline_aborts_on_first_failure() {
    let workspace = tempdir().unwrap();
    let tracker = ExecutionTracker::default();
    let pipeline = pipeline_of(vec![
        MockStage::new("generate", BuildState::GenerateEntryPoint, tracker.clone()),
        MockStage::new("resolve", BuildState::ResolveDependencies, tracker.clone()).with_error("tidy broke"),
        MockStage::new("compile", BuildState::Compile, tracker.clone()),
        MockStage::new("cleanup", BuildState::Cleanup, tracker.clone()),
    ]);

    let config = BuildConfig::default();
    let toolchain = RecordingToolchain::new();
    let assets = MemoryAssetSource::new();
    let mut context = StageContext::new_live(material(workspace.path(), &[]), &config, &toolchain, &assets);

    let err = pipeline.execute(&mut context).unwrap_err();
    match err {
        Error::Toolchain(ToolchainError::CommandFailed { command, exit_code }) => {
            assert_eq!(command, "tidy broke");
            assert_eq!(exit_code, Some(2));
        }
        other => panic!("expected the stage error unchanged, got {:?}", other),
    }
    assert_eq!(*tracker.borrow(), vec!["generate", "resolve"]);
    assert_eq!(context.state(), BuildState::Failed);
    assert_eq!(context.failed_at(), Some(BuildState::ResolveDependencies));
}

#[test]
fn test_dry_run_executes_nothing() {
    let workspace = tempdir().unwrap();
    let tracker = ExecutionTracker::default();
    let pipeline = pipeline_of(vec![
        MockStage::new("a", BuildState::GenerateEntryPoint, tracker.clone()),
        MockStage::new("b", BuildState::Compile, tracker.clone()),
    ]);

    let config = BuildConfig::default();
    let toolchain = RecordingToolchain::new();
    let assets = MemoryAssetSource::new();
    let mut context = StageContext::new_dry_run(material(workspace.path(), &[]), &config, &toolchain, &assets);

    pipeline.execute(&mut context).unwrap();
    assert!(tracker.borrow().is_empty());
    assert!(toolchain.calls().is_empty());
    assert_eq!(
        pipeline.plan(&context),
        vec!["Dry run: Would execute stage a", "Dry run: Would execute stage b"]
    );
}

#[test]
fn test_standard_pipeline_order() {
    let pipeline = StagePipeline::standard();
    assert_eq!(
        pipeline.stage_ids(),
        vec![
            "core::generate_entry_point",
            "core::resolve_dependencies",
            "core::install_assets",
            "core::merge_resources",
            "core::compile",
            "core::cleanup",
        ]
    );
    assert_eq!(pipeline.len(), 6);
}
