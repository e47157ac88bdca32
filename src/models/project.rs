// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Project records and the read-only catalog.
//!
//! A catalog is an ordered, immutable list of project records. Each record
//! is addressed by its `id`; the catalog keeps an id -> position index so
//! lookups never depend on ids matching their position.

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Lower bound of every score field.
pub const SCORE_MIN: f64 = 0.0;
/// Upper bound of every score field.
pub const SCORE_MAX: f64 = 5.0;

/// A single showcased project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord {
    pub id: u32,
    pub logo: String,
    pub title: String,
    pub description: String,
    pub background_image: String,
    #[serde(default)]
    pub background_card_image: String,
    pub video_thumbnail: String,
    pub video_src: String,
    pub rating: f64,
    #[serde(default)]
    pub quality: f64,
    #[serde(default)]
    pub schedule: f64,
    #[serde(default)]
    pub cost: f64,
    #[serde(default)]
    pub willing_to_refer: f64,
}

impl ProjectRecord {
    /// All score fields with their display names.
    pub fn scores(&self) -> [(&'static str, f64); 5] {
        [
            ("Rating", self.rating),
            ("Quality", self.quality),
            ("Schedule", self.schedule),
            ("Cost", self.cost),
            ("Willing to refer", self.willing_to_refer),
        ]
    }

    /// Whether every score lies within [`SCORE_MIN`, `SCORE_MAX`].
    pub fn scores_in_range(&self) -> bool {
        self.scores()
            .iter()
            .all(|(_, s)| (SCORE_MIN..=SCORE_MAX).contains(s))
    }
}

/// Ordered, immutable list of projects.
#[derive(Debug, Clone)]
pub struct ProjectCatalog {
    records: Vec<ProjectRecord>,
    positions: HashMap<u32, usize>,
}

impl ProjectCatalog {
    /// Build a catalog, rejecting empty lists, zero ids and duplicate ids.
    pub fn new(records: Vec<ProjectRecord>) -> Result<Self> {
        if records.is_empty() {
            bail!("project catalog must contain at least one record");
        }

        let mut positions = HashMap::with_capacity(records.len());
        for (position, record) in records.iter().enumerate() {
            if record.id == 0 {
                bail!("project at position {} has id 0, ids must be positive", position);
            }
            if positions.insert(record.id, position).is_some() {
                bail!("duplicate project id {}", record.id);
            }
            if !record.scores_in_range() {
                log::warn!(
                    "Project {} has scores outside [{}, {}], they will be clamped for display",
                    record.id,
                    SCORE_MIN,
                    SCORE_MAX
                );
            }
        }

        Ok(Self { records, positions })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Record at a 0-based position.
    pub fn at(&self, position: usize) -> Option<&ProjectRecord> {
        self.records.get(position)
    }

    /// Record with the given id.
    pub fn get(&self, id: u32) -> Option<&ProjectRecord> {
        self.position_of(id).and_then(|position| self.at(position))
    }

    /// The first record; catalogs are never empty.
    pub fn first(&self) -> &ProjectRecord {
        &self.records[0]
    }

    /// 0-based position of the record with the given id.
    pub fn position_of(&self, id: u32) -> Option<usize> {
        self.positions.get(&id).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ProjectRecord> {
        self.records.iter()
    }

    pub fn records(&self) -> &[ProjectRecord] {
        &self.records
    }
}

#[cfg(test)]
pub(crate) fn sample_record(id: u32) -> ProjectRecord {
    ProjectRecord {
        id,
        logo: format!("logo-{}.png", id),
        title: format!("Project {}", id),
        description: "Unity".to_string(),
        background_image: format!("bg-{}.jpg", id),
        background_card_image: format!("card-{}.jpg", id),
        video_thumbnail: format!("thumb-{}.jpg", id),
        video_src: format!("video-{}.mp4", id),
        rating: 4.5,
        quality: 4.0,
        schedule: 3.5,
        cost: 4.2,
        willing_to_refer: 5.0,
    }
}

/// Catalog with ids `1..=count`.
#[cfg(test)]
pub(crate) fn sample_catalog(count: u32) -> ProjectCatalog {
    ProjectCatalog::new((1..=count).map(sample_record).collect()).unwrap()
}
