// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! UI components for the Showreel dashboard.

pub mod backdrop;
pub mod carousel;
pub mod hero;
pub mod modal;
pub mod sidebar;
pub mod skeleton;
pub mod theme;
