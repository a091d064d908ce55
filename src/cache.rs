//! Concurrent distance cache with best-effort JSON persistence.

use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use dashmap::DashMap;

use crate::error::CacheError;
use crate::model::Coordinate;

/// Distances in kilometers keyed by travel mode and ordered coordinate pair.
#[derive(Debug, Default)]
pub struct DistanceCache {
    entries: DashMap<String, f64>,
    path: Option<PathBuf>,
}

impl DistanceCache {
    /// In-memory cache for one session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Cache backed by a JSON file. A missing file starts empty.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, CacheError> {
        let path = path.into();
        let entries = DashMap::new();

        if path.exists() {
            let reader = BufReader::new(File::open(&path)?);
            let stored: BTreeMap<String, f64> = serde_json::from_reader(reader)?;
            for (key, km) in stored {
                entries.insert(key, km);
            }
        }

        Ok(Self {
            entries,
            path: Some(path),
        })
    }

    pub fn key(mode: &str, from: Coordinate, to: Coordinate) -> String {
        format!(
            "{}:{:.6},{:.6};{:.6},{:.6}",
            mode, from.0, from.1, to.0, to.1
        )
    }

    pub fn get(&self, mode: &str, from: Coordinate, to: Coordinate) -> Option<f64> {
        self.entries
            .get(&Self::key(mode, from, to))
            .map(|entry| *entry.value())
    }

    /// Store `km` unless another writer got there first; returns the cached value.
    pub fn insert(&self, mode: &str, from: Coordinate, to: Coordinate, km: f64) -> f64 {
        *self
            .entries
            .entry(Self::key(mode, from, to))
            .or_insert(km)
            .value()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Write the cache to its file, if it has one.
    ///
    /// Writes go to a temporary file that is then renamed into place.
    pub fn persist(&self) -> Result<(), CacheError> {
        let Some(path) = &self.path else {
            return Ok(());
        };

        let snapshot: BTreeMap<String, f64> = self
            .entries
            .iter()
            .map(|entry| (entry.key().clone(), *entry.value()))
            .collect();

        if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let tmp_path = path.with_extension("tmp");
        let mut writer = BufWriter::new(File::create(&tmp_path)?);
        serde_json::to_writer(&mut writer, &snapshot)?;
        writer.flush()?;
        fs::rename(tmp_path, path)?;
        Ok(())
    }
}
