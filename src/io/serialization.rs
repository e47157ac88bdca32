// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Project catalog serialization and deserialization.
//!
//! This module handles importing project catalogs in YAML and JSON
//! formats. A catalog file is a plain list of project records.

use crate::models::project::{ProjectCatalog, ProjectRecord};
use anyhow::{bail, Context, Result};
use std::path::Path;

/// On-disk formats, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Yaml,
    Json,
}

impl CatalogFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path.extension().and_then(|s| s.to_str());
        match extension {
            Some("yaml") | Some("yml") => Ok(Self::Yaml),
            Some("json") => Ok(Self::Json),
            _ => bail!("Unsupported catalog extension: {:?}", extension),
        }
    }
}

/// Import a catalog, validating ids.
pub fn import_catalog(path: &Path) -> Result<ProjectCatalog> {
    let format = CatalogFormat::from_path(path)?;
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog {}", path.display()))?;

    let records: Vec<ProjectRecord> = match format {
        CatalogFormat::Yaml => serde_yaml::from_str(&text)?,
        CatalogFormat::Json => serde_json::from_str(&text)?,
    };

    let catalog = ProjectCatalog::new(records)
        .with_context(|| format!("Invalid catalog {}", path.display()))?;
    log::info!("Imported {} projects from {}", catalog.len(), path.display());
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::project::sample_catalog;

    #[test]
    fn test_json_uses_camel_case_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        std::fs::write(
            &path,
            r#"[{
                "id": 1,
                "logo": "logo.png",
                "title": "Flight operations",
                "description": "Unity",
                "backgroundImage": "bg.jpg",
                "videoThumbnail": "thumb.jpg",
                "videoSrc": "video1.mp4",
                "rating": 4.9,
                "willingToRefer": 5.0
            }]"#,
        )
        .unwrap();

        let catalog = import_catalog(&path).unwrap();
        let record = &catalog.records()[0];
        assert_eq!(record.video_src, "video1.mp4");
        assert_eq!(record.willing_to_refer, 5.0);
        assert_eq!(record.quality, 0.0);
        assert_eq!(record.background_card_image, "");
    }

    #[test]
    fn test_yaml_catalog_keeps_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.yaml");
        let records = sample_catalog(4).records().to_vec();
        std::fs::write(&path, serde_yaml::to_string(&records).unwrap()).unwrap();

        let loaded = import_catalog(&path).unwrap();
        assert_eq!(loaded.records(), records.as_slice());
        assert_eq!(loaded.position_of(3), Some(2));
    }

    #[test]
    fn test_duplicate_ids_rejected_on_import() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.yaml");
        let mut records = sample_catalog(2).records().to_vec();
        records[1].id = 1;
        std::fs::write(&path, serde_yaml::to_string(&records).unwrap()).unwrap();

        assert!(import_catalog(&path).is_err());
    }

    #[test]
    fn test_unsupported_extension() {
        assert!(CatalogFormat::from_path(Path::new("catalog.csv")).is_err());
        assert_eq!(
            CatalogFormat::from_path(Path::new("catalog.yml")).unwrap(),
            CatalogFormat::Yaml
        );
    }
}
