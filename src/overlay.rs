use crate::error::SubpeekError;
use crate::selector::{compute_visible, VisibleRecord, WindowConfig};
use crate::srt::SubtitleTrack;

/// A notification from the playback clock. Regular progress and completed
/// seeks both carry the new position and are handled identically.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TimeEvent {
    Progressed(f64),
    SeekCompleted(f64),
}

impl TimeEvent {
    pub fn time(self) -> f64 {
        match self {
            TimeEvent::Progressed(t) | TimeEvent::SeekCompleted(t) => t,
        }
    }
}

/// One subtitle overlay: a label, a window configuration, and at most one
/// loaded track. The two overlays of a player ("original" and "translated")
/// are two independent instances of this type and share nothing.
///
/// An overlay is either unloaded (no track, every update yields an empty
/// view) or loaded. Loading a non-empty track moves it to loaded from either
/// state, discarding whatever was there before.
#[derive(Debug)]
pub struct Overlay {
    label: String,
    window: WindowConfig,
    track: Option<SubtitleTrack>,
}

impl Overlay {
    pub fn new(label: impl Into<String>, window: WindowConfig) -> Self {
        Self {
            label: label.into(),
            window,
            track: None,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_loaded(&self) -> bool {
        self.track.is_some()
    }

    /// Replaces the overlay's track. An empty track is the parser's way of
    /// signalling unparseable input, so it is rejected and the overlay keeps
    /// its previous state.
    pub fn load(&mut self, track: SubtitleTrack) -> Result<(), SubpeekError> {
        if track.is_empty() {
            return Err(SubpeekError::EmptyTrack);
        }
        self.track = Some(track);
        Ok(())
    }

    /// Recomputes the visible set for a time-change notification. The view
    /// is derived from scratch on every call; nothing is carried over from
    /// the previous update.
    pub fn update(&self, event: TimeEvent) -> Vec<VisibleRecord<'_>> {
        match &self.track {
            Some(track) => compute_visible(&self.window, track, event.time()),
            None => Vec::new(),
        }
    }
}
