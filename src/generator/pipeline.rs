//! Full generation run: manifest → records → Dart source → disk.

use std::fs;
use std::path::PathBuf;

use crate::config::{GenerateError, GenerateResult, Project};

use super::{collect, emit};

/// Result of one completed generation run.
#[derive(Debug)]
pub struct RunSummary {
    /// Absolute path of the written file.
    pub output_path: PathBuf,
    /// Number of asset constants emitted.
    pub asset_count: usize,
}

/// Orchestrates one scan-build-emit-write cycle for a project.
///
/// Runs are sequential and stateless; re-running with unchanged inputs
/// produces byte-identical output, so overlapping triggers are safe under
/// last-writer-wins.
pub struct GenerationPipeline<'a> {
    project: &'a Project,
}

impl<'a> GenerationPipeline<'a> {
    pub fn new(project: &'a Project) -> Self {
        Self { project }
    }

    /// Execute the run. Any failure aborts it entirely.
    ///
    /// The output file is truncated first and rewritten second (two
    /// explicit writes: some file watchers key off the truncation event).
    /// If the second write fails a truncated file may remain; this window
    /// is a known limitation, kept rather than silently replaced with an
    /// atomic rename that would change watcher-visible event sequencing.
    pub fn run(&self) -> GenerateResult<RunSummary> {
        let project = self.project;
        let records = collect::build(&project.root, &project.asset_roots, &project.config)?;
        let source = emit::emit(&project.config.class_name, &records);

        let output_path = project.output_path();
        if let Some(parent) = output_path.parent() {
            fs::create_dir_all(parent)
                .map_err(|err| GenerateError::Io(parent.to_path_buf(), err))?;
        }

        if output_path.exists() {
            fs::write(&output_path, "")
                .map_err(|err| GenerateError::Io(output_path.clone(), err))?;
        }
        fs::write(&output_path, source)
            .map_err(|err| GenerateError::Io(output_path.clone(), err))?;

        Ok(RunSummary {
            output_path,
            asset_count: records.len(),
        })
    }
}

// ============================================================================
// tests
// ============================================================================
