// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Built-in project catalog.
//!
//! Used whenever no catalog file is configured. Initialized once and shared
//! read-only for the lifetime of the process.

use super::project::{ProjectCatalog, ProjectRecord};
use anyhow::Result;
use std::sync::{Arc, OnceLock};

static BUILTIN: OnceLock<Arc<ProjectCatalog>> = OnceLock::new();

const LOGO: &str = "/api/placeholder/32/32";
const BACKGROUND: &str = "/api/placeholder/1920/1080";
const CARD_BACKGROUND: &str = "/api/placeholder/290/320";
const THUMBNAIL: &str = "/api/placeholder/640/360";

/// Shared handle to the built-in catalog.
pub fn builtin() -> Result<Arc<ProjectCatalog>> {
    if let Some(catalog) = BUILTIN.get() {
        return Ok(Arc::clone(catalog));
    }
    let catalog = Arc::new(ProjectCatalog::new(builtin_records())?);
    Ok(Arc::clone(BUILTIN.get_or_init(|| catalog)))
}

/// `scores` is rating, quality, schedule, cost, willing-to-refer.
fn record(id: u32, title: &str, description: &str, video: u32, scores: [f64; 5]) -> ProjectRecord {
    let [rating, quality, schedule, cost, willing_to_refer] = scores;
    ProjectRecord {
        id,
        logo: LOGO.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        background_image: BACKGROUND.to_string(),
        background_card_image: CARD_BACKGROUND.to_string(),
        video_thumbnail: THUMBNAIL.to_string(),
        video_src: format!("/path/to/video{}.mp4", video),
        rating,
        quality,
        schedule,
        cost,
        willing_to_refer,
    }
}

fn builtin_records() -> Vec<ProjectRecord> {
    vec![
        record(1, "Create interactive and explorational flight operations experiences", "Unity", 1, [5.0, 4.9, 4.8, 4.6, 5.0]),
        record(2, "By leveraging the power of AI, we help make buildings safer, smarter and more secure.", "DUCLO", 2, [4.8, 4.7, 4.5, 4.4, 4.9]),
        record(3, "Create interactive and explorational flight operations experiences", "Unity", 3, [4.9, 4.8, 4.6, 4.5, 4.8]),
        record(4, "Create interactive and explorational flight operations experiences", "Unity", 4, [4.7, 4.6, 4.4, 4.3, 4.7]),
        record(5, "Create interactive and explorational flight operations experiences", "Unity", 5, [5.0, 5.0, 4.9, 4.7, 5.0]),
        record(6, "Create interactive and explorational flight operations experiences", "Unity", 1, [5.0, 4.9, 4.7, 4.6, 5.0]),
        record(7, "By leveraging the power of AI, we help make buildings safer, smarter and more secure.", "DUCLO", 2, [4.8, 4.7, 4.5, 4.4, 4.9]),
        record(8, "Create interactive and explorational flight operations experiences", "Unity", 3, [4.9, 4.8, 4.6, 4.5, 4.8]),
        record(9, "Create interactive and explorational flight operations experiences", "Unity", 4, [4.7, 4.6, 4.4, 4.3, 4.7]),
        record(10, "Create interactive and explorational flight operations experiences", "Unity", 5, [5.0, 5.0, 4.9, 4.7, 5.0]),
        record(11, "Create interactive and explorational flight operations experiences", "Unity", 1, [5.0, 4.9, 4.7, 4.6, 5.0]),
        record(12, "By leveraging the power of AI, we help make buildings safer, smarter and more secure.", "DUCLO", 2, [4.8, 4.7, 4.5, 4.4, 4.9]),
        record(13, "Create interactive and explorational flight operations experiences", "Unity", 3, [4.9, 4.8, 4.6, 4.5, 4.8]),
        record(14, "Create interactive and explorational flight operations experiences", "Unity", 4, [4.7, 4.6, 4.4, 4.3, 4.7]),
        record(15, "Create interactive and explorational flight operations experiences", "Unity", 5, [5.0, 5.0, 4.9, 4.7, 5.0]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_ids_match_positions() {
        let catalog = builtin().unwrap();
        assert_eq!(catalog.len(), 15);
        for (position, record) in catalog.iter().enumerate() {
            assert_eq!(record.id as usize, position + 1);
            assert!(record.scores_in_range());
        }
    }

    #[test]
    fn test_builtin_is_shared() {
        let a = builtin().unwrap();
        let b = builtin().unwrap();
        assert!(Arc::ptr_eq(&a, &b));
    }
}
