/// A single timed subtitle entry.
///
/// `start_time` and `end_time` are seconds. Both bounds are inclusive for
/// display purposes. The parser does not enforce `end_time >= start_time`;
/// inverted records coming from malformed files are passed through as-is.
#[derive(Debug, Clone, PartialEq)]
pub struct SubtitleRecord {
    pub start_time: f64,
    pub end_time: f64,
    pub text: String,
}

/// An ordered sequence of subtitle records, in order of appearance in the
/// source file. The order is not guaranteed to be chronological.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubtitleTrack {
    records: Vec<SubtitleRecord>,
}

impl SubtitleTrack {
    pub fn new(records: Vec<SubtitleRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[SubtitleRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Renders a time in seconds as an SRT clock value (`HH:MM:SS,mmm`).
/// Negative inputs are clamped to zero.
pub fn format_timestamp(seconds: f64) -> String {
    let millis = if seconds <= 0.0 {
        0
    } else {
        (seconds * 1000.0).round() as u64
    };
    let total_secs = millis / 1000;
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let secs = total_secs % 60;
    format!("{:02}:{:02}:{:02},{:03}", hours, minutes, secs, millis % 1000)
}
