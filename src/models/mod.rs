// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Data model: project records, the catalog and view models.

pub mod builtin;
pub mod project;
pub mod view;
