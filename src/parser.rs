use crate::srt::{SubtitleRecord, SubtitleTrack};

use nom::bytes::complete::{tag, take_while_m_n};
use nom::combinator::{map_res, opt};
use nom::error::VerboseError;
use nom::sequence::preceded;
use nom::IResult;
use regex::Regex;

const TIMING_PATTERN: &str =
    r"([0-9]{2}):([0-9]{2}):([0-9]{2}),([0-9]{3})\s*-->\s*([0-9]{2}):([0-9]{2}):([0-9]{2}),([0-9]{3})";

const BLOCK_SEPARATOR: &str = r"\r?\n\s*\n";

/// Why a block was left out of the parsed track.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The block had fewer than three lines, so it cannot carry an index
    /// line, a timing line and at least one text line.
    TooFewLines,
    /// The second line of the block did not contain a
    /// `HH:MM:SS,mmm --> HH:MM:SS,mmm` timing.
    BadTiming,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkippedBlock {
    /// Zero-based ordinal of the block in the source text.
    pub block: usize,
    pub reason: SkipReason,
}

/// The result of a parse. Parsing is best-effort and never fails outright;
/// an empty track is how unparseable input manifests, and `skipped` records
/// which blocks were dropped along the way.
#[derive(Debug, Clone, Default)]
pub struct ParseOutcome {
    pub track: SubtitleTrack,
    pub skipped: Vec<SkippedBlock>,
}

pub struct Parser {
    timing: Regex,
    separator: Regex,
}

impl Parser {
    pub fn new() -> Self {
        Self {
            timing: Regex::new(TIMING_PATTERN).unwrap(),
            separator: Regex::new(BLOCK_SEPARATOR).unwrap(),
        }
    }

    /// Parses SRT text into a track. Blocks that do not look like subtitle
    /// entries are skipped, not treated as a fatal error; callers should
    /// treat a fully empty track as a failed load.
    pub fn parse(&self, input: &str) -> ParseOutcome {
        let mut records = Vec::new();
        let mut skipped = Vec::new();

        let trimmed = input.trim();
        if trimmed.is_empty() {
            return ParseOutcome::default();
        }

        for (ordinal, block) in self.separator.split(trimmed).enumerate() {
            let lines: Vec<&str> = block.lines().collect();
            if lines.len() < 3 {
                skipped.push(SkippedBlock {
                    block: ordinal,
                    reason: SkipReason::TooFewLines,
                });
                continue;
            }

            // Line 0 is the sequence number. It is ignored entirely, and
            // deliberately not validated as numeric.
            match self.timing.captures(lines[1]) {
                Some(caps) => {
                    let start_time =
                        parse_timestamp(&caps[1], &caps[2], &caps[3], &caps[4]);
                    let end_time =
                        parse_timestamp(&caps[5], &caps[6], &caps[7], &caps[8]);
                    records.push(SubtitleRecord {
                        start_time,
                        end_time,
                        text: lines[2..].join("\n"),
                    });
                }
                None => skipped.push(SkippedBlock {
                    block: ordinal,
                    reason: SkipReason::BadTiming,
                }),
            }
        }

        ParseOutcome {
            track: SubtitleTrack::new(records),
            skipped,
        }
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

/// Converts the four captured timestamp fields to seconds. The fields are
/// expected to be plain decimal digits; anything else counts as zero.
pub fn parse_timestamp(hours: &str, minutes: &str, seconds: &str, millis: &str) -> f64 {
    let field = |s: &str| s.parse::<u64>().unwrap_or(0);
    field(hours) as f64 * 3600.0
        + field(minutes) as f64 * 60.0
        + field(seconds) as f64
        + field(millis) as f64 / 1000.0
}

/// Parses a command-line playback time. Accepts either plain seconds
/// (`83.25`) or an SRT-style clock value (`00:01:23,250`).
pub fn parse_time_arg(input: &str) -> Result<f64, String> {
    let input = input.trim();
    if let Ok(("", seconds)) = clock_time(input) {
        return Ok(seconds);
    }
    match input.parse::<f64>() {
        Ok(seconds) if seconds.is_finite() => Ok(seconds),
        _ => Err(format!(
            "invalid time '{}': expected seconds or HH:MM:SS,mmm",
            input
        )),
    }
}

fn clock_time(input: &str) -> IResult<&str, f64, VerboseError<&str>> {
    const MILLIS_MAX: usize = 3;
    let take_millis = map_res(
        take_while_m_n(0, MILLIS_MAX, |c: char| c.is_ascii_digit()),
        move |s: &str| {
            if s.len() < MILLIS_MAX {
                // `,2` means 200 milliseconds, so right-pad to three digits.
                format!("{:0<3}", s).parse()
            } else {
                s.parse()
            }
        },
    );

    let take_hms = || {
        map_res(
            take_while_m_n(1, 2, |c: char| c.is_ascii_digit()),
            |s: &str| s.parse(),
        )
    };

    let (input, hours): (_, u64) = take_hms()(input)?;
    let (input, _) = tag(":")(input)?;
    let (input, minutes) = take_hms()(input)?;
    let (input, _) = tag(":")(input)?;
    let (input, seconds) = take_hms()(input)?;
    let (input, millis): (_, Option<u64>) = opt(preceded(tag(","), take_millis))(input)?;

    Ok((
        input,
        (hours * 3600 + minutes * 60 + seconds) as f64
            + millis.unwrap_or(0) as f64 / 1000.0,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(input: &str) -> ParseOutcome {
        Parser::new().parse(input)
    }

    const WELL_FORMED: &str = "\
1
00:00:01,000 --> 00:00:03,500
First line.

2
00:01:02,003 --> 00:01:04,000
Second entry,
with a continuation line.

3
01:02:03,004 --> 01:02:05,000
Third.
";

    #[test]
    fn well_formed_blocks_parse_in_order() {
        let outcome = parse(WELL_FORMED);
        let records = outcome.track.records();

        assert_eq!(records.len(), 3);
        assert!(outcome.skipped.is_empty());

        assert_eq!(records[0].start_time, 1.0);
        assert_eq!(records[0].end_time, 3.5);
        assert_eq!(records[0].text, "First line.");

        assert_eq!(records[1].start_time, 62.003);
        assert_eq!(records[1].end_time, 64.0);
        assert_eq!(records[1].text, "Second entry,\nwith a continuation line.");

        assert_eq!(records[2].start_time, 3723.004);
        assert_eq!(records[2].end_time, 3725.0);
    }

    #[test]
    fn timestamp_conversion() {
        assert_eq!(parse_timestamp("01", "02", "03", "004"), 3723.004);
        assert_eq!(parse_timestamp("00", "00", "00", "000"), 0.0);
        assert_eq!(parse_timestamp("00", "09", "05", "500"), 545.5);
    }

    #[test]
    fn short_block_is_skipped() {
        let input = "\
1
00:00:01,000 --> 00:00:02,000
One.

2
00:00:03,000 --> 00:00:04,000

3
00:00:05,000 --> 00:00:06,000
Three.
";
        let outcome = parse(input);
        let records = outcome.track.records();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].text, "One.");
        assert_eq!(records[1].text, "Three.");
        assert_eq!(
            outcome.skipped,
            vec![SkippedBlock {
                block: 1,
                reason: SkipReason::TooFewLines
            }]
        );
    }

    #[test]
    fn missing_arrow_is_skipped() {
        let input = "\
1
00:00:01,000 00:00:02,000
Bad timing.

2
00:00:03,000 --> 00:00:04,000
Good.
";
        let outcome = parse(input);

        assert_eq!(outcome.track.len(), 1);
        assert_eq!(outcome.track.records()[0].text, "Good.");
        assert_eq!(
            outcome.skipped,
            vec![SkippedBlock {
                block: 0,
                reason: SkipReason::BadTiming
            }]
        );
    }

    #[test]
    fn index_line_is_not_validated() {
        let input = "\
not a number
00:00:01,000 --> 00:00:02,000
Still fine.
";
        let outcome = parse(input);

        assert_eq!(outcome.track.len(), 1);
        assert_eq!(outcome.track.records()[0].text, "Still fine.");
    }

    #[test]
    fn empty_input_yields_empty_track() {
        assert!(parse("").track.is_empty());
        assert!(parse("   \n\n  \t \n").track.is_empty());
    }

    #[test]
    fn inverted_interval_passes_through() {
        let input = "\
1
00:00:05,000 --> 00:00:02,000
Backwards.
";
        let outcome = parse(input);
        let records = outcome.track.records();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].start_time, 5.0);
        assert_eq!(records[0].end_time, 2.0);
        assert!(outcome.skipped.is_empty());
    }

    #[test]
    fn crlf_input_parses() {
        let input = "1\r\n00:00:01,000 --> 00:00:02,000\r\nWindows line endings.\r\n\r\n2\r\n00:00:03,000 --> 00:00:04,000\r\nSecond.\r\n";
        let outcome = parse(input);

        assert_eq!(outcome.track.len(), 2);
        assert_eq!(outcome.track.records()[0].text, "Windows line endings.");
    }

    #[test]
    fn source_order_is_preserved_even_when_unsorted() {
        let input = "\
2
00:01:00,000 --> 00:01:02,000
Later.

1
00:00:01,000 --> 00:00:02,000
Earlier.
";
        let records = parse(input).track.records().to_vec();

        assert_eq!(records[0].start_time, 60.0);
        assert_eq!(records[1].start_time, 1.0);
    }

    macro_rules! test_time_arg {
        ($($name:ident: $value:expr,)*) => {
        $(
            #[test]
            fn $name() {
                let (input, expected) = $value;

                assert_eq!(parse_time_arg(input).unwrap(), expected);
            }
        )*
        }
    }

    test_time_arg! {
        test_time_arg_0: ("83.25", 83.25),
        test_time_arg_1: ("0", 0.0),
        test_time_arg_2: ("00:01:23,250", 83.25),
        test_time_arg_3: ("00:01:23", 83.0),
        test_time_arg_4: ("1:2:3,2", 3723.2),
        test_time_arg_5: ("01:01:01,200", 3661.2),
        test_time_arg_6: (" 12.5 ", 12.5),
    }

    #[test]
    fn rejects_nonsense_time_arg() {
        assert!(parse_time_arg("abc").is_err());
        assert!(parse_time_arg("1:2").is_err());
        assert!(parse_time_arg("").is_err());
    }
}
