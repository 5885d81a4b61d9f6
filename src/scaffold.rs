use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{bail, Context};

use crate::{
    error::Result,
    report::{Action, Event, Reporter, ScaffoldReport},
    tree::{Entry, Node},
};

/// Walks a path spec depth-first and materializes it under a base
/// directory. Existing files are skipped, never overwritten; existing
/// directories are reused. The first filesystem error aborts the walk,
/// which is safe because a re-run skips everything already created.
#[derive(Default)]
pub struct Scaffolder {
    reporters: Vec<Box<dyn Reporter>>,
    dry_run: bool,
}

impl Scaffolder {
    pub fn new() -> Scaffolder {
        Scaffolder::default()
    }

    pub fn with_reporter(&mut self, reporter: impl Reporter + 'static) -> &mut Self {
        self.reporters.push(Box::new(reporter));
        self
    }

    /// When enabled, walk and report without touching the filesystem.
    pub fn dry_run(&mut self, enabled: bool) -> &mut Self {
        self.dry_run = enabled;
        self
    }

    pub fn run(&self, base: impl Into<PathBuf>, tree: &Node) -> Result<ScaffoldReport> {
        let base = base.into();
        let Node::Directory(entries) = tree else {
            bail!("path spec root must be a directory");
        };

        if !self.dry_run {
            fs::create_dir_all(&base)
                .with_context(|| format!("Failed to create base directory {}", base.display()))?;
        }

        let mut report = ScaffoldReport::default();
        self.visit_directory(&base, entries, &mut report)?;

        Ok(report)
    }

    fn visit_directory(
        &self,
        path: &Path,
        entries: &[Entry],
        report: &mut ScaffoldReport,
    ) -> Result<()> {
        for entry in entries {
            let target = path.join(&entry.name);

            match &entry.node {
                Node::Directory(children) => {
                    self.ensure_directory(&target, report)?;
                    self.visit_directory(&target, children, report)?;
                }
                Node::File(content) => self.ensure_file(&target, content, report)?,
            }
        }

        Ok(())
    }

    fn ensure_directory(&self, path: &Path, report: &mut ScaffoldReport) -> Result<()> {
        if path.is_dir() {
            return Ok(());
        }

        if path.exists() {
            bail!(
                "{} already exists and is not a directory",
                path.display()
            );
        }

        if !self.dry_run {
            fs::create_dir_all(path)
                .with_context(|| format!("Failed to create directory {}", path.display()))?;
        }

        self.record(
            Event {
                action: Action::CreatedDirectory,
                path: path.to_path_buf(),
            },
            report,
        );

        Ok(())
    }

    fn ensure_file(&self, path: &Path, content: &str, report: &mut ScaffoldReport) -> Result<()> {
        let action = if path.exists() {
            Action::SkippedFile
        } else {
            if !self.dry_run {
                fs::write(path, content)
                    .with_context(|| format!("Failed to write file {}", path.display()))?;
            }

            Action::CreatedFile
        };

        self.record(
            Event {
                action,
                path: path.to_path_buf(),
            },
            report,
        );

        Ok(())
    }

    fn record(&self, event: Event, report: &mut ScaffoldReport) {
        for reporter in &self.reporters {
            reporter.report(&event);
        }

        report.record(event);
    }
}
