//! Sequence builders: inline argument, line stream and byte-frequency ingest.

use std::io::{self, BufRead, BufReader, Read};

use tracing::{debug, trace};

use crate::core::{
    config::Source,
    constants::{TXTFREQ_FIRST, TXTFREQ_LAST},
    error::{GraphError, ParseDataError, ParseErrorKind},
    sequence::Sequence,
};

/// Which histogram to build from stdin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Frequency {
    /// Case-folded printable characters `!`..=`Z`, labeled with the character.
    Text,
    /// Every byte value 0..=255, labeled with its decimal value.
    Binary,
}

// --- Helpers ---

/// Replace U+2212 MINUS SIGN (`E2 88 92`) with ASCII `-`, in place.
#[inline]
pub fn normalize_unicode_minus(buf: &mut Vec<u8>) {
    let (mut r, mut w) = (0, 0);
    while r < buf.len() {
        if r + 2 < buf.len() && buf[r] == 0xE2 && buf[r + 1] == 0x88 && buf[r + 2] == 0x92 {
            buf[w] = b'-';
            r += 3;
            w += 1;
        } else {
            if r != w {
                buf[w] = buf[r];
            }
            r += 1;
            w += 1;
        }
    }
    buf.truncate(w);
}

/// Stream token separator: ASCII whitespace plus vertical tab.
#[inline]
const fn is_space(b: &u8) -> bool {
    b.is_ascii_whitespace() || *b == 0x0B
}

/// Whole-token float parse; anything left over, or a non-finite result, fails.
#[inline]
fn parse_f64(bytes: &[u8]) -> Result<f64, ParseErrorKind> {
    let val = lexical_core::parse::<f64>(bytes).map_err(|_| ParseErrorKind::NotANumber)?;
    if val.is_finite() {
        Ok(val)
    } else {
        Err(ParseErrorKind::NonFinite)
    }
}

// --- Argument mode ---

/// Parse `1,2,3.4,5:label1,6:label2` into a sequence.
///
/// Each entry is split on its first `:`; the remainder (colons included) is
/// the label. Leading whitespace before a number is ignored and one trailing
/// comma is tolerated. An empty string is an empty sequence.
///
/// # Errors
/// The first entry whose number part is not a complete, finite float.
pub fn argument_to_sequence(arg: &str) -> Result<Sequence, ParseDataError> {
    let body = arg.strip_suffix(',').unwrap_or(arg);
    let mut seq = Sequence::new();
    if body.is_empty() {
        return Ok(seq);
    }

    for (i, entry) in body.split(',').enumerate() {
        let (number, label) = match entry.split_once(':') {
            Some((n, l)) => (n, Some(l)),
            None => (entry, None),
        };
        let value = parse_f64(number.trim_start().as_bytes()).map_err(|kind| ParseDataError {
            entry: i + 1,
            text: entry.to_owned(),
            kind,
        })?;
        seq.push(value, label.map(str::to_owned));
    }
    debug!(samples = seq.len(), labeled = seq.labeled_count(), "parsed argument data");
    Ok(seq)
}

// --- Stream mode ---

/// Tokenize one stream line: a number, then an optional one-word label.
///
/// Returns `None` for blank lines and for lines whose first token is not a
/// finite number. Tokens after the label are ignored.
#[must_use]
pub fn parse_stream_line(line: &[u8]) -> Option<(f64, Option<String>)> {
    let mut tokens = line
        .split(is_space)
        .filter(|t| !t.is_empty());
    let value = parse_f64(tokens.next()?).ok()?;
    let label = tokens
        .next()
        .map(|t| String::from_utf8_lossy(t).into_owned());
    Some((value, label))
}

const BUF_CAP: usize = 1 << 16; // 64 KiB

/// Read `src` to end of input, one sample per well-formed line.
///
/// Malformed lines are skipped, never reported.
///
/// # Errors
/// Only I/O failures of `src`.
pub fn datastream_to_sequence<R: Read>(src: R) -> io::Result<Sequence> {
    let mut rdr = BufReader::with_capacity(BUF_CAP, src);
    let mut buf = Vec::<u8>::with_capacity(256);
    let mut seq = Sequence::new();
    let mut line_no = 0usize;
    let mut skipped = 0usize;

    loop {
        buf.clear();
        if rdr.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        line_no += 1;
        normalize_unicode_minus(&mut buf);

        if let Some((value, label)) = parse_stream_line(&buf) {
            seq.push(value, label);
        } else if !buf.iter().all(is_space) {
            skipped += 1;
            trace!(line = line_no, "skipping malformed stream line");
        }
    }
    debug!(samples = seq.len(), skipped, "read data stream");
    Ok(seq)
}

// --- Frequency modes ---

/// Tally every byte of `src` and emit the histogram in ascending order.
///
/// # Errors
/// Only I/O failures of `src`.
pub fn file_freq_to_sequence<R: Read>(src: R, kind: Frequency) -> io::Result<Sequence> {
    let mut rdr = BufReader::with_capacity(BUF_CAP, src);
    let mut count = [0u64; 256];
    let mut total = 0usize;

    loop {
        let chunk = rdr.fill_buf()?;
        if chunk.is_empty() {
            break;
        }
        for &b in chunk {
            let b = match kind {
                Frequency::Text => b.to_ascii_uppercase(),
                Frequency::Binary => b,
            };
            count[usize::from(b)] += 1;
        }
        let n = chunk.len();
        total += n;
        rdr.consume(n);
    }

    #[allow(clippy::cast_precision_loss)]
    let seq: Sequence = match kind {
        Frequency::Binary => (0..=u8::MAX)
            .map(|b| (count[usize::from(b)] as f64, Some(b.to_string())))
            .collect(),
        Frequency::Text => (TXTFREQ_FIRST..=TXTFREQ_LAST)
            .map(|b| (count[usize::from(b)] as f64, Some(char::from(b).to_string())))
            .collect(),
    };
    debug!(bytes = total, samples = seq.len(), ?kind, "built frequency table");
    Ok(seq)
}

/// Build the sequence `source` describes, reading `input` when it needs to.
///
/// # Errors
/// Argument-mode format errors and input I/O failures.
pub fn build_sequence<R: Read>(source: &Source, input: R) -> Result<Sequence, GraphError> {
    Ok(match source {
        Source::Argument(data) => argument_to_sequence(data)?,
        Source::Stream => datastream_to_sequence(input)?,
        Source::TextFrequency => file_freq_to_sequence(input, Frequency::Text)?,
        Source::BinaryFrequency => file_freq_to_sequence(input, Frequency::Binary)?,
    })
}
