use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// What the scaffolder did with a single path.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Action {
    CreatedDirectory,
    CreatedFile,
    SkippedFile,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Event {
    pub action: Action,
    pub path: PathBuf,
}

/// Receives scaffolding events as they happen. Reporters are the
/// scaffolder's output seam; tests install a capturing implementation.
pub trait Reporter {
    fn name(&self) -> &str;

    fn report(&self, event: &Event);
}

/// Prints one human-readable line per event, matching the output of
/// the generator binaries.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn name(&self) -> &str {
        "console"
    }

    fn report(&self, event: &Event) {
        match event.action {
            Action::CreatedDirectory => {
                println!("Created directory: {}", event.path.display())
            }
            Action::CreatedFile => println!("Created: {}", event.path.display()),
            Action::SkippedFile => {
                println!("Skipped existing file: {}", event.path.display())
            }
        }
    }
}

/// Summary of a completed scaffolding run.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct ScaffoldReport {
    pub created_directories: usize,
    pub created_files: usize,
    pub skipped_files: usize,
    pub events: Vec<Event>,
}

impl ScaffoldReport {
    pub fn record(&mut self, event: Event) {
        match event.action {
            Action::CreatedDirectory => self.created_directories += 1,
            Action::CreatedFile => self.created_files += 1,
            Action::SkippedFile => self.skipped_files += 1,
        }

        self.events.push(event);
    }

    /// Total entries written to disk by the run.
    pub fn created(&self) -> usize {
        self.created_directories + self.created_files
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn tallies_events_by_action() {
        let mut report = ScaffoldReport::default();
        report.record(Event {
            action: Action::CreatedDirectory,
            path: PathBuf::from("content"),
        });
        report.record(Event {
            action: Action::CreatedFile,
            path: PathBuf::from("content/_index.md"),
        });
        report.record(Event {
            action: Action::SkippedFile,
            path: PathBuf::from("content/about.md"),
        });

        assert_eq!(1, report.created_directories);
        assert_eq!(1, report.created_files);
        assert_eq!(1, report.skipped_files);
        assert_eq!(2, report.created());
        assert_eq!(3, report.events.len());
    }
}
