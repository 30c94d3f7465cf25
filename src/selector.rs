use crate::srt::{SubtitleRecord, SubtitleTrack};

/// How far the visibility window extends around the playback position,
/// in seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowConfig {
    pub before: f64,
    pub after: f64,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            before: 1.0,
            after: 5.0,
        }
    }
}

/// One entry of the derived view: a record that falls inside the current
/// window, with its index in the track and whether the playback position
/// lies inside its own display interval.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibleRecord<'a> {
    pub index: usize,
    pub record: &'a SubtitleRecord,
    pub is_current: bool,
}

/// Computes the visible set for a playback position.
///
/// A record is visible when its start lies inside the window, its end lies
/// inside the window, or it spans the whole window. All bounds are
/// inclusive, and the three clauses are checked as written; boundary-equal
/// cases depend on it. Records are scanned and reported in track order,
/// never re-sorted by start time. The computation is pure: it holds no
/// state between calls and is rebuilt from scratch on every update.
pub fn compute_visible<'a>(
    config: &WindowConfig,
    track: &'a SubtitleTrack,
    current_time: f64,
) -> Vec<VisibleRecord<'a>> {
    let window_start = current_time - config.before;
    let window_end = current_time + config.after;

    let mut visible = Vec::new();
    for (index, record) in track.records().iter().enumerate() {
        let start_in_window =
            record.start_time >= window_start && record.start_time <= window_end;
        let end_in_window =
            record.end_time >= window_start && record.end_time <= window_end;
        let spans_window =
            record.start_time <= window_start && record.end_time >= window_end;

        if start_in_window || end_in_window || spans_window {
            visible.push(VisibleRecord {
                index,
                record,
                is_current: record.start_time <= current_time
                    && current_time <= record.end_time,
            });
        }
    }
    visible
}
