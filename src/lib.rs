pub mod error;
pub mod overlay;
pub mod parser;
pub mod selector;
pub mod srt;

pub use error::SubpeekError;
pub use overlay::{Overlay, TimeEvent};
pub use parser::{ParseOutcome, Parser, SkipReason, SkippedBlock};
pub use selector::{compute_visible, VisibleRecord, WindowConfig};
pub use srt::{format_timestamp, SubtitleRecord, SubtitleTrack};
