// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! I/O: catalog files and the media playback backend.

pub mod media;
pub mod serialization;
