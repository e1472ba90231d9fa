//! `generate` command: one generation run.

use anyhow::Result;

use crate::config::Project;
use crate::generator::GenerationPipeline;
use crate::log;

pub fn run(project: &Project) -> Result<()> {
    let summary = GenerationPipeline::new(project).run()?;
    log!(
        "generate";
        "{} asset constants -> {}",
        summary.asset_count,
        project.root_relative(&summary.output_path).display()
    );
    Ok(())
}
