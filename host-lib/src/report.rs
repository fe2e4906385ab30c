//! Report artifacts of a single test run


use std::{
    fmt::Debug,
    fs::{
        self,
        File,
    },
    io::{
        self,
        prelude::*,
    },
    path::{
        Path,
        PathBuf,
    },
};

use log::{
    warn,
    Level,
};


const PASSED: &str = "passed";
const FAILED: &str = "failed";


/// Collects the outcome of a test run
///
/// Opening a report creates the report directory of the test case. Every entry
/// is written to the log facade and to the test case's log file. Once the test
/// has finished, [`Report::finish`] writes a marker file named after the
/// outcome. If the report is dropped without being finished, for example
/// because the test panicked, the test is marked as failed.
pub struct Report {
    name:     String,
    dir:      PathBuf,
    log:      File,
    entries:  Vec<Entry>,
    finished: bool,
}

impl Report {
    /// Open the report for the test case `name` in `report_dir`
    pub fn open(report_dir: &Path, name: &str)
        -> Result<Self, ReportOpenError>
    {
        Self::open_inner(report_dir, name)
            .map_err(|err| ReportOpenError(err))
    }

    fn open_inner(report_dir: &Path, name: &str) -> io::Result<Self> {
        let dir = report_dir.join(name);
        fs::create_dir_all(&dir)?;

        // Markers left over from a previous run would contradict this one.
        for marker in &[PASSED, FAILED] {
            match fs::remove_file(dir.join(marker)) {
                Ok(()) => {}
                Err(err) if err.kind() == io::ErrorKind::NotFound => {}
                Err(err) => return Err(err),
            }
        }

        let log = File::create(dir.join(format!("{}.log", name)))?;

        Ok(
            Self {
                name:     name.to_owned(),
                dir,
                log,
                entries:  Vec::new(),
                finished: false,
            }
        )
    }

    /// The directory that the report artifacts are written to
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Record an informational message
    pub fn info(&mut self, message: impl Into<String>) {
        self.record(Level::Info, message.into());
    }

    /// Record an error
    ///
    /// A single error is enough for the test to fail, but the test keeps
    /// running.
    pub fn error(&mut self, message: impl Into<String>) {
        self.record(Level::Error, message.into());
    }

    /// All entries recorded so far
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// The number of errors recorded so far
    pub fn error_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|entry| entry.level == Level::Error)
            .count()
    }

    /// Finish the report, given how the test run ended
    ///
    /// An `Err` status means the test was aborted. It's recorded as an error,
    /// so the test fails.
    pub fn finish<E>(mut self, status: &Result<(), E>) -> Outcome
        where E: Debug
    {
        if let Err(err) = status {
            self.error(format!("Test aborted: {:?}", err));
        }

        let outcome = if self.error_count() == 0 {
            Outcome::Passed
        }
        else {
            Outcome::Failed
        };

        self.write_marker(outcome);
        self.finished = true;

        outcome
    }

    fn record(&mut self, level: Level, message: String) {
        log::log!(target: &self.name, level, "{}", message);

        if let Err(err) = writeln!(self.log, "[{}] {}", level, message) {
            warn!("Failed to write to log of {}: {}", self.name, err);
        }

        self.entries.push(Entry { level, message });
    }

    fn write_marker(&mut self, outcome: Outcome) {
        let marker = match outcome {
            Outcome::Passed => PASSED,
            Outcome::Failed => FAILED,
        };

        let result = File::create(self.dir.join(marker))
            .and_then(|mut file| writeln!(file, "{}", self.error_count()));
        if let Err(err) = result {
            warn!("Failed to write {} marker of {}: {}", marker, self.name, err);
        }
    }
}

impl Drop for Report {
    fn drop(&mut self) {
        if !self.finished {
            self.error("Test did not finish");
            self.write_marker(Outcome::Failed);
        }
    }
}


/// A message recorded in a report
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Entry {
    pub level:   Level,
    pub message: String,
}


/// The outcome of a test run that ran to completion
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Outcome {
    Passed,
    Failed,
}


/// Error creating the report artifacts
#[derive(Debug)]
pub struct ReportOpenError(pub io::Error);
