// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Media playback collaborator.
//!
//! The dashboard only starts and stops playback when the video overlay
//! opens and closes; decoding and presentation belong to the backend.

/// A backend able to play a video given its source locator.
pub trait MediaPlayback {
    /// Start playing `source`, replacing anything already playing.
    fn play(&mut self, source: &str);

    /// Stop playback. Stopping an idle player is a no-op.
    fn stop(&mut self);

    /// Source currently playing, if any.
    fn active_source(&self) -> Option<&str>;
}

/// Playback backend that records the active source and logs transitions.
/// The view renders a placeholder surface for it.
#[derive(Debug, Default)]
pub struct PlaceholderPlayback {
    active: Option<String>,
    started: usize,
}

impl PlaceholderPlayback {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of times playback has been started.
    #[cfg(test)]
    pub fn started(&self) -> usize {
        self.started
    }
}

impl MediaPlayback for PlaceholderPlayback {
    fn play(&mut self, source: &str) {
        self.started += 1;
        log::info!("Playing {} (start #{})", source, self.started);
        self.active = Some(source.to_string());
    }

    fn stop(&mut self) {
        if let Some(source) = self.active.take() {
            log::info!("Stopped {}", source);
        }
    }

    fn active_source(&self) -> Option<&str> {
        self.active.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_play_then_stop() {
        let mut player = PlaceholderPlayback::new();
        assert!(player.active_source().is_none());

        player.play("/path/to/video1.mp4");
        assert_eq!(player.active_source(), Some("/path/to/video1.mp4"));

        player.stop();
        player.stop();
        assert!(player.active_source().is_none());
        assert_eq!(player.started(), 1);
    }
}
