// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Layout and animation helpers shared by the state and UI layers.

pub mod animation;
pub mod geometry;
