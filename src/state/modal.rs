// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Video overlay state.
//!
//! The video source is bound when the overlay opens and stays fixed until it
//! closes, even if the selected project changes underneath it.

use crate::io::media::MediaPlayback;
use crate::models::project::ProjectRecord;

/// Video bound to an open overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoSession {
    pub project_id: u32,
    pub video_src: String,
}

#[derive(Debug, Default)]
pub struct ModalController {
    session: Option<VideoSession>,
}

impl ModalController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&VideoSession> {
        self.session.as_ref()
    }

    /// Open the overlay for `record` and start playback. Opening an
    /// already-open overlay rebinds it to `record`.
    pub fn open(&mut self, record: &ProjectRecord, player: &mut dyn MediaPlayback) {
        let session = VideoSession {
            project_id: record.id,
            video_src: record.video_src.clone(),
        };
        log::info!("Opening video for project {}", session.project_id);
        player.play(&session.video_src);
        self.session = Some(session);
    }

    /// Close the overlay. Closing a closed overlay is a no-op.
    pub fn close(&mut self, player: &mut dyn MediaPlayback) {
        if let Some(session) = self.session.take() {
            log::info!("Closing video for project {}", session.project_id);
            player.stop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::media::PlaceholderPlayback;
    use crate::models::project::sample_record;

    #[test]
    fn test_open_close_twice() {
        let mut modal = ModalController::new();
        let mut player = PlaceholderPlayback::new();
        let record = sample_record(1);

        for _ in 0..2 {
            modal.open(&record, &mut player);
            assert!(modal.is_open());
            modal.close(&mut player);
        }
        modal.close(&mut player);

        assert!(!modal.is_open());
        assert!(player.active_source().is_none());
        assert_eq!(player.started(), 2);
    }

    #[test]
    fn test_reopen_rebinds() {
        let mut modal = ModalController::new();
        let mut player = PlaceholderPlayback::new();

        modal.open(&sample_record(1), &mut player);
        modal.open(&sample_record(2), &mut player);
        assert_eq!(modal.session().map(|s| s.project_id), Some(2));
        assert_eq!(player.active_source(), Some("video-2.mp4"));
    }
}
