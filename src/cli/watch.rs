//! `watch` command: regenerate on filesystem changes.
//!
//! A plain sync loop: notify events arrive on an mpsc channel, a short
//! `recv_timeout` drain coalesces the burst an editor save produces, then
//! the whole pipeline reruns. The manifest is reloaded before every run so
//! config and asset-root edits take effect without restarting.

use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::time::Duration;

use anyhow::Result;
use notify::{RecommendedWatcher, RecursiveMode, Watcher};

use crate::config::Project;
use crate::generator::GenerationPipeline;
use crate::log;
use crate::logger::WatchStatus;

/// How long to keep draining the channel after the first event.
const COALESCE_WINDOW: Duration = Duration::from_millis(200);

/// Watch-root attach state, re-synced when the manifest's roots change.
struct WatchRoots {
    watched: Vec<PathBuf>,
}

impl WatchRoots {
    fn new() -> Self {
        Self {
            watched: Vec::new(),
        }
    }

    /// Attach new roots, detach removed ones. Missing directories are
    /// skipped and retried on the next sync.
    fn sync(&mut self, watcher: &mut RecommendedWatcher, desired: &[PathBuf]) {
        for path in &self.watched {
            if !desired.contains(path) {
                let _ = watcher.unwatch(path);
            }
        }

        let mut next = Vec::new();
        for path in desired {
            if !path.is_dir() {
                continue;
            }
            if !self.watched.contains(path) {
                if let Err(err) = watcher.watch(path, RecursiveMode::Recursive) {
                    log!("watch"; "failed to watch {}: {}", path.display(), err);
                    continue;
                }
            }
            next.push(path.clone());
        }
        self.watched = next;
    }
}

pub fn run(mut project: Project) -> Result<()> {
    let mut status = WatchStatus::new();
    run_once(&project, &mut status);

    let (tx, rx) = mpsc::channel();
    let mut watcher = notify::recommended_watcher(move |res| {
        let _ = tx.send(res);
    })?;

    // The manifest itself is watched so root/config edits trigger a rerun
    watcher.watch(&project.manifest_path, RecursiveMode::NonRecursive)?;
    let mut roots = WatchRoots::new();
    roots.sync(&mut watcher, &desired_roots(&project));

    log!(
        "watch";
        "watching {} asset root(s) under {}, ctrl-c to stop",
        project.asset_roots.len(),
        project.root.display()
    );

    loop {
        let Ok(first) = rx.recv() else {
            break; // Watcher dropped
        };
        let output_path = project.output_path();
        let mut relevant = is_relevant(&first, &output_path);

        // Coalesce the event burst of one save/copy operation
        while let Ok(event) = rx.recv_timeout(COALESCE_WINDOW) {
            relevant |= is_relevant(&event, &output_path);
        }
        if !relevant {
            continue;
        }

        match Project::from_manifest_path(&project.manifest_path) {
            Ok(reloaded) => project = reloaded,
            Err(err) => {
                status.error("manifest reload failed", &err.to_string());
                continue;
            }
        }
        roots.sync(&mut watcher, &desired_roots(&project));
        run_once(&project, &mut status);
    }

    Ok(())
}

fn desired_roots(project: &Project) -> Vec<PathBuf> {
    project
        .asset_roots
        .iter()
        .map(|root| project.root_join(root))
        .collect()
}

fn run_once(project: &Project, status: &mut WatchStatus) {
    match GenerationPipeline::new(project).run() {
        Ok(summary) => status.success(&format!(
            "{} assets -> {}",
            summary.asset_count,
            project.root_relative(&summary.output_path).display()
        )),
        Err(err) => status.error("generation failed", &err.to_string()),
    }
}

/// Self-writes of the generated file must not retrigger a run.
fn is_relevant(event: &notify::Result<notify::Event>, output_path: &Path) -> bool {
    match event {
        Ok(event) => {
            event.paths.is_empty() || event.paths.iter().any(|path| path != output_path)
        }
        Err(err) => {
            log!("watch"; "notify error: {}", err);
            false
        }
    }
}

// ============================================================================
// tests
// ============================================================================
