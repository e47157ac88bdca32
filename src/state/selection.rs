// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Currently selected project.

use crate::models::project::{ProjectCatalog, ProjectRecord};
use std::sync::Arc;

/// Points at one record of the catalog; never empty.
#[derive(Debug, Clone)]
pub struct SelectionModel {
    catalog: Arc<ProjectCatalog>,
    selected_id: u32,
}

impl SelectionModel {
    /// Start with the first project selected.
    pub fn new(catalog: Arc<ProjectCatalog>) -> Self {
        let selected_id = catalog.first().id;
        log::debug!("Initial selection is project {}", selected_id);
        Self {
            catalog,
            selected_id,
        }
    }

    pub fn catalog(&self) -> &ProjectCatalog {
        &self.catalog
    }

    pub fn selected(&self) -> &ProjectRecord {
        // The id is only ever set from a record of this catalog.
        self.catalog
            .get(self.selected_id)
            .unwrap_or_else(|| self.catalog.first())
    }

    /// 0-based catalog position of the selection.
    pub fn position(&self) -> usize {
        self.catalog.position_of(self.selected_id).unwrap_or(0)
    }

    pub fn is_selected(&self, id: u32) -> bool {
        self.selected_id == id
    }

    /// Select the project with `id`. Unknown ids leave the selection unchanged.
    pub fn select(&mut self, id: u32) -> bool {
        match self.catalog.get(id) {
            Some(record) => {
                if id != self.selected_id {
                    log::info!("Selected project {} ({})", id, record.description);
                }
                self.selected_id = id;
                true
            }
            None => {
                log::warn!("Ignoring selection of unknown project {}", id);
                false
            }
        }
    }

    /// Select by catalog position. Out-of-range positions are ignored.
    pub fn select_position(&mut self, position: usize) -> bool {
        match self.catalog.at(position) {
            Some(record) => {
                let id = record.id;
                self.select(id)
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::project::{sample_catalog, sample_record};

    #[test]
    fn test_starts_at_first_project() {
        let selection = SelectionModel::new(Arc::new(sample_catalog(9)));
        assert_eq!(selection.selected().id, 1);
        assert_eq!(selection.position(), 0);
    }

    #[test]
    fn test_select_known_and_unknown() {
        let mut selection = SelectionModel::new(Arc::new(sample_catalog(9)));

        assert!(selection.select(5));
        assert_eq!(selection.selected().id, 5);

        assert!(!selection.select(42));
        assert_eq!(selection.selected().id, 5);

        assert!(!selection.select_position(9));
        assert!(selection.select_position(8));
        assert!(selection.is_selected(9));
    }

    #[test]
    fn test_selection_follows_ids_in_any_order() {
        let catalog =
            ProjectCatalog::new(vec![sample_record(7), sample_record(3), sample_record(12)]).unwrap();
        let mut selection = SelectionModel::new(Arc::new(catalog));
        assert_eq!(selection.selected().id, 7);

        assert!(selection.select(12));
        assert_eq!(selection.position(), 2);
        assert!(selection.select_position(1));
        assert_eq!(selection.selected().id, 3);
    }
}
