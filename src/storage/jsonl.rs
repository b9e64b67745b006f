//! JSONL storage for person records
//!
//! A tree file holds one JSON person object per line, in whatever order the
//! record keeper wrote them. Reads take a shared lock, writes go through a
//! temp file and an atomic rename.

use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use fs2::FileExt;

use crate::domain::{Pedigree, Person};

/// Store for person records in JSONL format
pub struct PersonStore {
    path: PathBuf,
}

impl PersonStore {
    /// Creates a store backed by the given tree file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the path to the tree file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads all records in file order
    pub fn read_all(&self) -> Result<Vec<Person>> {
        let file = File::open(&self.path)
            .with_context(|| format!("Failed to open tree file: {}", self.path.display()))?;

        file.lock_shared()
            .context("Failed to acquire read lock on tree file")?;

        let reader = BufReader::new(&file);
        let mut persons = Vec::new();

        for (line_num, line) in reader.lines().enumerate() {
            let line = line.with_context(|| format!("Failed to read line {}", line_num + 1))?;

            if line.trim().is_empty() {
                continue;
            }

            let person: Person = serde_json::from_str(&line).with_context(|| {
                format!(
                    "Failed to parse person record at {}:{}",
                    self.path.display(),
                    line_num + 1
                )
            })?;

            persons.push(person);
        }

        // Lock is released when file is dropped
        Ok(persons)
    }

    /// Reads the whole file into a pedigree
    pub fn read_pedigree(&self) -> Result<Pedigree> {
        let persons = self.read_all()?;
        Pedigree::from_persons(persons)
            .with_context(|| format!("Invalid tree file: {}", self.path.display()))
    }

    /// Writes all records, replacing the file atomically
    pub fn write_all(&self, persons: &[Person]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
            }
        }

        let temp_path = self.path.with_extension("jsonl.tmp");

        {
            let file = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .open(&temp_path)
                .with_context(|| format!("Failed to create temp file: {}", temp_path.display()))?;

            file.lock_exclusive()
                .context("Failed to acquire write lock on tree file")?;

            let mut writer = BufWriter::new(&file);
            for person in persons {
                let line = serde_json::to_string(person).context("Failed to serialize person")?;
                writeln!(writer, "{}", line).context("Failed to write person record")?;
            }
            writer.flush().context("Failed to flush tree file")?;
        }

        fs::rename(&temp_path, &self.path).with_context(|| {
            format!(
                "Failed to rename {} to {}",
                temp_path.display(),
                self.path.display()
            )
        })
    }
}
