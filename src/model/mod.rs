//! Aggregation model: turn parsed result files into table rows.
//!
//! Two shapes exist:
//! - passthrough: one row per file, values in line order
//! - algo: one row per (trace group, frames) joining OPT, FIFO and AGING runs

use crate::config::{AlgoConfig, Algorithm};
use crate::error::ParseError;
use crate::log::ResultFile;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

pub const ALGO_HEADER: [&str; 8] = [
    "file_name",
    "frames",
    "opt disk writes",
    "opt page_faults",
    "fifo disk writes",
    "fifo page_faults",
    "aging disk writes",
    "aging page_faults",
];

/// Rows ready for emission. `header` is written first when present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Table {
    pub header: Option<Vec<String>>,
    pub rows: Vec<Vec<String>>,
}

/// One row per file: `[trace, values...]`, or `[trace, refresh_rate, values...]`.
pub fn passthrough_table(
    files: &[ResultFile],
    with_refresh_rate: bool,
) -> Result<Table, ParseError> {
    let mut rows = Vec::with_capacity(files.len());
    for file in files {
        let mut row = vec![file.name.trace.clone()];
        if with_refresh_rate {
            row.push(file.name.require_refresh_rate(&file.file_name)?.to_string());
        }
        row.extend(file.values().map(str::to_string));
        rows.push(row);
    }
    Ok(Table { header: None, rows })
}

/// Disk writes and page faults reported by one algorithm.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub disk: String,
    pub faults: String,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            disk: "0".to_string(),
            faults: "0".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Bucket {
    pub opt: Cell,
    pub fifo: Cell,
    pub aging: Cell,
    filled: BTreeSet<Algorithm>,
}

impl Bucket {
    #[cfg(test)]
    pub fn cell(&self, algo: Algorithm) -> &Cell {
        match algo {
            Algorithm::Opt => &self.opt,
            Algorithm::Fifo => &self.fifo,
            Algorithm::Aging => &self.aging,
        }
    }

    fn cell_mut(&mut self, algo: Algorithm) -> &mut Cell {
        match algo {
            Algorithm::Opt => &mut self.opt,
            Algorithm::Fifo => &mut self.fifo,
            Algorithm::Aging => &mut self.aging,
        }
    }

    pub fn missing(&self) -> Vec<Algorithm> {
        Algorithm::ALL
            .into_iter()
            .filter(|a| !self.filled.contains(a))
            .collect()
    }

    fn record(&self, group: &str, frames: u32) -> Vec<String> {
        vec![
            group.to_string(),
            frames.to_string(),
            self.opt.disk.clone(),
            self.opt.faults.clone(),
            self.fifo.disk.clone(),
            self.fifo.faults.clone(),
            // AGING disk writes are never emitted: this column repeats the faults value.
            self.aging.faults.clone(),
            self.aging.faults.clone(),
        ]
    }
}

/// Group name -> frames -> per-algorithm cells.
///
/// Every group is seeded with the configured buckets on first sight, so a
/// run missing for one algorithm leaves "0" rather than failing.
#[derive(Debug, Clone)]
pub struct AlgoTable {
    config: AlgoConfig,
    groups: BTreeMap<String, BTreeMap<u32, Bucket>>,
}

impl AlgoTable {
    pub fn new(config: AlgoConfig) -> Self {
        Self {
            config,
            groups: BTreeMap::new(),
        }
    }

    /// Route one file's `disk` and `faults` into the cell picked by its
    /// `frames` and `Algorithm` measurements.
    pub fn add(&mut self, file: &ResultFile) -> Result<(), ParseError> {
        let frames_str = file.require("frames")?;
        let algo_str = file.require("Algorithm")?;
        let disk = file.require("disk")?;
        let faults = file.require("faults")?;

        let frames: u32 = frames_str.parse().map_err(|_| ParseError::InvalidFrames {
            file: file.file_name.clone(),
            value: frames_str.to_string(),
        })?;
        let algo: Algorithm = algo_str.parse().map_err(|_| ParseError::UnknownAlgorithm {
            file: file.file_name.clone(),
            value: algo_str.to_string(),
        })?;

        let group = file.name.group_name();
        let seed = &self.config.frame_buckets;
        let buckets = self
            .groups
            .entry(group.clone())
            .or_insert_with(|| seed.iter().map(|&f| (f, Bucket::default())).collect());

        let bucket = buckets
            .get_mut(&frames)
            .ok_or_else(|| ParseError::UnknownFrameBucket {
                file: file.file_name.clone(),
                frames,
            })?;

        if !bucket.filled.insert(algo) {
            tracing::debug!(%group, frames, %algo, file = %file.file_name, "overwriting cell");
        }
        let cell = bucket.cell_mut(algo);
        cell.disk = disk.to_string();
        cell.faults = faults.to_string();

        Ok(())
    }

    #[cfg(test)]
    pub fn bucket(&self, group: &str, frames: u32) -> Option<&Bucket> {
        self.groups.get(group)?.get(&frames)
    }

    #[cfg(test)]
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Header plus rows sorted by group name, then ascending frames.
    pub fn table(&self) -> Table {
        let mut rows = Vec::new();
        for (group, buckets) in &self.groups {
            for (&frames, bucket) in buckets {
                let missing = bucket.missing();
                if !missing.is_empty() {
                    let missing: Vec<&str> = missing.iter().map(|a| a.label()).collect();
                    tracing::warn!(%group, frames, ?missing, "no result for algorithms, emitting 0");
                }
                rows.push(bucket.record(group, frames));
            }
        }

        Table {
            header: Some(ALGO_HEADER.iter().map(|h| h.to_string()).collect()),
            rows,
        }
    }
}

/// Build the multi-algorithm table from every file, in order.
pub fn algo_table(files: &[ResultFile], config: AlgoConfig) -> Result<Table, ParseError> {
    let mut table = AlgoTable::new(config);
    for file in files {
        table.add(file)?;
    }
    Ok(table.table())
}
