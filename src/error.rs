use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum SubpeekError {
    /// A parse produced zero records, so there is nothing to load.
    EmptyTrack,
}

impl Error for SubpeekError {}

impl fmt::Display for SubpeekError {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SubpeekError::EmptyTrack => {
                write!(fmt, "the file did not contain any usable subtitles")
            }
        }
    }
}
