use std::fmt;

use log::{error, info};

use crate::kernel::error::Result;
use crate::stage_manager::core_stages::{
    CleanupStage, CompileStage, GenerateEntryPointStage, InstallAssetsStage, MergeResourcesStage,
    ResolveDependenciesStage,
};
use crate::stage_manager::{Stage, StageContext};

/// Ordered list of stages run one after another.
///
/// The first failing stage aborts the pipeline: its error is returned
/// unchanged and no later stage runs.
pub struct StagePipeline {
    /// Name of the pipeline
    name: String,
    /// Description of what this pipeline does
    description: String,
    stages: Vec<Box<dyn Stage>>,
}

impl StagePipeline {
    /// Create a new, empty stage pipeline
    pub fn new(name: &str, description: &str) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            stages: Vec::new(),
        }
    }

    /// The six build stages in their fixed order
    pub fn standard() -> Self {
        Self::new("build", "Compose plugins into a new binary")
            .with_stage(GenerateEntryPointStage)
            .with_stage(ResolveDependenciesStage)
            .with_stage(InstallAssetsStage)
            .with_stage(MergeResourcesStage)
            .with_stage(CompileStage)
            .with_stage(CleanupStage)
    }

    /// Append a stage to the pipeline
    pub fn add_stage(&mut self, stage: Box<dyn Stage>) {
        self.stages.push(stage);
    }

    pub fn with_stage<S: Stage + 'static>(mut self, stage: S) -> Self {
        self.add_stage(Box::new(stage));
        self
    }

    /// Run every stage in order. In dry run mode stages are only described.
    pub fn execute(&self, context: &mut StageContext<'_>) -> Result<()> {
        info!("Executing pipeline: {}", self.name);

        if context.is_dry_run() {
            for description in self.plan(context) {
                info!("{}", description);
            }
            return Ok(());
        }

        for stage in &self.stages {
            context.enter(stage.state());
            info!("Executing stage: {}", stage.name());
            if let Err(e) = stage.execute(context) {
                error!("Stage '{}' failed: {}", stage.id(), e);
                context.fail();
                return Err(e);
            }
        }

        context.finish();
        Ok(())
    }

    /// Describe what each stage would do, in order
    pub fn plan(&self, context: &StageContext<'_>) -> Vec<String> {
        self.stages
            .iter()
            .map(|stage| stage.dry_run_description(context))
            .collect()
    }

    /// Get the name of the pipeline
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the description of the pipeline
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Get the ids of the stages in order
    pub fn stage_ids(&self) -> Vec<&str> {
        self.stages.iter().map(|stage| stage.id()).collect()
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }
}

impl Default for StagePipeline {
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Debug for StagePipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StagePipeline")
            .field("name", &self.name)
            .field("stages", &self.stage_ids())
            .finish()
    }
}
