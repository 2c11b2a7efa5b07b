//! Registry Module
//!
//! The service layer that coordinates the id index and the ranking queue.
//!
//! ## Responsibilities
//! - Keep `StudentTree` and `RankingQueue` in sync on every mutation
//! - Load the records snapshot on startup
//! - Autosave after insert/delete (when configured)
//! - Route front-end `Command`s

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use parking_lot::RwLock;

use crate::command::{Command, Outcome, RankedStudent};
use crate::config::Config;
use crate::error::{GradebookError, Result};
use crate::index::StudentTree;
use crate::ranking::{RankEntry, RankingQueue};
use crate::snapshot::{read_snapshot, write_snapshot, SnapshotKind};
use crate::student::Student;

/// Both indexes over the same set of records
///
/// Invariant: every id in `tree` has exactly one entry in `ranking`
/// carrying that record's CGPA, and nothing else is in `ranking`.
#[derive(Default)]
struct State {
    tree: StudentTree,
    ranking: RankingQueue,
}

impl State {
    fn from_records(mut students: Vec<Student>) -> Result<Self> {
        students.sort_by_key(|s| s.id());
        let ranking = RankingQueue::from_entries(students.iter().map(RankEntry::from));
        let tree = StudentTree::from_sorted(students)?;
        Ok(Self { tree, ranking })
    }

    fn insert(&mut self, student: Student) -> Result<()> {
        let entry = RankEntry::from(&student);
        self.tree.insert(student)?;
        self.ranking.push(entry);
        Ok(())
    }

    fn remove(&mut self, id: u32) -> Option<Student> {
        let student = self.tree.remove(id)?;
        self.ranking.remove(id);
        Some(student)
    }
}

/// The records manager
///
/// ## Concurrency Model
/// All methods take `&self`. Queries share a read lock; insert, delete
/// and load take the write lock, and autosave runs while it is held so
/// the file always matches some committed state.
pub struct Registry {
    /// Registry configuration
    config: Config,

    /// Default snapshot location (`data_dir/records_file`)
    records_path: PathBuf,

    /// Id index + ranking queue
    state: RwLock<State>,
}

impl Registry {
    /// Open or create a registry with the given config
    ///
    /// On startup:
    /// 1. Validate config and create the data directory
    /// 2. Load the records snapshot if it exists
    /// 3. Rebuild the ranking queue from the loaded records
    pub fn open(config: Config) -> Result<Self> {
        config.validate()?;
        fs::create_dir_all(&config.data_dir)?;

        let records_path = config.records_path();
        let state = if records_path.exists() {
            let students: Vec<Student> = read_snapshot(&records_path, SnapshotKind::Records)?;
            let state = State::from_records(students)?;
            tracing::info!(
                "Loaded {} student records from {}",
                state.tree.len(),
                records_path.display()
            );
            state
        } else {
            tracing::info!("No records file at {}, starting empty", records_path.display());
            State::default()
        };

        Ok(Self {
            config,
            records_path,
            state: RwLock::new(state),
        })
    }

    /// Open with a path (convenience method)
    ///
    /// Uses default config with the specified data directory
    pub fn open_path(path: &Path) -> Result<Self> {
        Self::open(Config::builder().data_dir(path).build())
    }

    /// Execute a command
    ///
    /// Routes commands to appropriate handlers
    pub fn execute(&self, command: Command) -> Result<Outcome> {
        match command {
            Command::Add(student) => {
                let added = student.clone();
                self.add(student)?;
                Ok(Outcome::Added(added))
            }
            Command::Search { id } => Ok(match self.get(id) {
                Some(student) => Outcome::Found(student),
                None => Outcome::NotFound(id),
            }),
            Command::Delete { id } => match self.remove(id) {
                Ok(student) => Ok(Outcome::Deleted(student)),
                Err(GradebookError::StudentNotFound(id)) => Ok(Outcome::NotFound(id)),
                Err(e) => Err(e),
            },
            Command::Ranking => Ok(Outcome::Ranking(self.ranking())),
            Command::List => Ok(Outcome::Listing(self.students())),
            Command::Save { path } => {
                let path = path.unwrap_or_else(|| self.records_path.clone());
                let count = self.save_to(&path)?;
                Ok(Outcome::Saved { path, count })
            }
            Command::Load { path } => {
                let count = self.load_from(&path)?;
                Ok(Outcome::Loaded { path, count })
            }
        }
    }

    /// Insert a new record
    ///
    /// A duplicate id leaves both indexes untouched. If autosave fails the
    /// insert is rolled back and the I/O error is returned.
    pub fn add(&self, student: Student) -> Result<()> {
        let id = student.id();
        let mut state = self.state.write();

        if let Err(e) = state.insert(student) {
            tracing::warn!("Rejected student {}: {}", id, e);
            return Err(e);
        }

        if self.config.autosave {
            if let Err(e) = self.persist(&state, &self.records_path) {
                state.remove(id);
                tracing::warn!("Autosave failed, insert of {} rolled back: {}", id, e);
                return Err(e);
            }
        }

        tracing::info!("Added student {}", id);
        Ok(())
    }

    /// Look up a record by id
    pub fn get(&self, id: u32) -> Option<Student> {
        self.state.read().tree.get(id).cloned()
    }

    /// Delete a record by id
    pub fn remove(&self, id: u32) -> Result<Student> {
        let mut state = self.state.write();

        let student = state
            .remove(id)
            .ok_or(GradebookError::StudentNotFound(id))?;

        if self.config.autosave {
            if let Err(e) = self.persist(&state, &self.records_path) {
                state.insert(student)?;
                tracing::warn!("Autosave failed, delete of {} rolled back: {}", id, e);
                return Err(e);
            }
        }

        tracing::info!("Removed student {}", id);
        Ok(student)
    }

    /// All records ranked by CGPA (descending), ties by ascending id
    pub fn ranking(&self) -> Vec<RankedStudent> {
        let state = self.state.read();

        state
            .ranking
            .ranked()
            .into_iter()
            .filter_map(|entry| state.tree.get(entry.id).cloned())
            .enumerate()
            .map(|(i, student)| RankedStudent {
                rank: i + 1,
                student,
            })
            .collect()
    }

    /// All records in ascending id order
    pub fn students(&self) -> Vec<Student> {
        self.state.read().tree.iter().cloned().collect()
    }

    /// Write the current records to the configured records file
    pub fn save(&self) -> Result<usize> {
        self.save_to(&self.records_path)
    }

    /// Write the current records to `path`, returning how many were written
    pub fn save_to(&self, path: &Path) -> Result<usize> {
        let state = self.state.read();
        self.persist(&state, path)
    }

    /// Replace the current records with those in the snapshot at `path`
    ///
    /// The snapshot is fully decoded and indexed before anything is
    /// swapped in; on any error the current records are kept.
    pub fn load_from(&self, path: &Path) -> Result<usize> {
        let students: Vec<Student> = read_snapshot(path, SnapshotKind::Records)?;
        let loaded = State::from_records(students)?;
        let count = loaded.tree.len();

        *self.state.write() = loaded;

        tracing::info!("Loaded {} student records from {}", count, path.display());
        Ok(count)
    }

    fn persist(&self, state: &State, path: &Path) -> Result<usize> {
        let students: Vec<&Student> = state.tree.iter().collect();
        write_snapshot(path, SnapshotKind::Records, &students)?;
        Ok(students.len())
    }

    // =========================================================================
    // Accessors (for testing and debugging)
    // =========================================================================

    /// Number of records
    pub fn len(&self) -> usize {
        self.state.read().tree.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether the id index and the ranking queue describe the same records
    pub fn is_consistent(&self) -> bool {
        let state = self.state.read();

        if state.tree.len() != state.ranking.len() || !state.ranking.is_valid_heap() {
            return false;
        }

        let mut seen = HashSet::with_capacity(state.ranking.len());
        state.ranking.ranked().iter().all(|entry| {
            let cgpa_matches = state
                .tree
                .get(entry.id)
                .map(|s| s.cgpa().total_cmp(&entry.cgpa).is_eq())
                .unwrap_or(false);
            seen.insert(entry.id) && cgpa_matches
        })
    }

    /// Get the default records file path
    pub fn records_path(&self) -> &Path {
        &self.records_path
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}
