//! Sample containers + CSV loader with zero-allocation float parsing.

use std::{
    error::Error,
    fmt::{self, Display},
    io::{BufRead, BufReader, Read},
};

/// Discrete column height in `[0, height * LEVELS_PER_ROW]`.
pub type Level = usize;

/// Parallel `x` / weight columns.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Samples {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

impl Samples {
    #[must_use]
    pub fn with_capacity(n: usize) -> Self {
        Self {
            x: Vec::with_capacity(n),
            y: Vec::with_capacity(n),
        }
    }

    /// Every `x` counted once.
    #[must_use]
    pub fn unweighted(x: Vec<f64>) -> Self {
        let y = vec![1.0; x.len()];
        Self { x, y }
    }

    #[inline]
    pub fn push(&mut self, x: f64, weight: f64) {
        self.x.push(x);
        self.y.push(weight);
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.x.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}

// --- Error Handling ---
#[derive(Debug)]
pub struct ParseCsvError {
    pub line: usize,
    pub kind: ParseErrorKind,
}

#[derive(Debug)]
pub enum ParseErrorKind {
    Io(std::io::Error),
    BadColumnCount(usize),
    BadFloat { field: &'static str, text: String },
    NoSamples,
}

impl Display for ParseCsvError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ParseErrorKind::Io(e) => write!(f, "I/O error on line {}: {}", self.line, e),
            ParseErrorKind::BadColumnCount(n) => {
                write!(f, "line {}: expected 1–2 columns, got {}", self.line, n)
            }
            ParseErrorKind::BadFloat { field, text } => {
                write!(f, "line {}: invalid {} value '{}'", self.line, field, text)
            }
            ParseErrorKind::NoSamples => f.write_str("input contains no samples"),
        }
    }
}
impl Error for ParseCsvError {}

// --- Helpers ---

/// Rewrite U+2212 MINUS SIGN (`E2 88 92`) to ASCII `-` in place.
#[inline]
pub fn normalize_unicode_minus(buf: &mut Vec<u8>) {
    const MINUS: &[u8] = "\u{2212}".as_bytes();
    if !buf.windows(MINUS.len()).any(|w| w == MINUS) {
        return;
    }
    let mut out = Vec::with_capacity(buf.len());
    let mut rest = buf.as_slice();
    while !rest.is_empty() {
        if rest.starts_with(MINUS) {
            out.push(b'-');
            rest = &rest[MINUS.len()..];
        } else {
            out.push(rest[0]);
            rest = &rest[1..];
        }
    }
    *buf = out;
}

#[inline]
fn parse_f64(bytes: &[u8], line: usize, field: &'static str) -> Result<f64, ParseCsvError> {
    let bad = |text: String| ParseCsvError {
        line,
        kind: ParseErrorKind::BadFloat { field, text },
    };
    let val = lexical_core::parse::<f64>(bytes)
        .map_err(|_| bad(String::from_utf8_lossy(bytes).into_owned()))?;
    if val.is_finite() {
        Ok(val)
    } else {
        Err(bad(val.to_string()))
    }
}

// --- CSV ingest ---
const BUF_CAP: usize = 1 << 20; // 1 MiB

/// Read `x[,weight]` lines.  A missing or empty weight counts as 1.
///
/// Blank lines and `#` comments are skipped, and a first data line whose
/// first field is not numeric is taken as a header.
pub fn read_csv<R: Read>(src: R) -> Result<Samples, ParseCsvError> {
    let mut rdr = BufReader::with_capacity(BUF_CAP, src);
    let mut buf = Vec::<u8>::with_capacity(256);
    let mut samples = Samples::default();
    let mut saw_first = false;
    let mut line_no = 0usize;

    loop {
        buf.clear();
        let n = rdr.read_until(b'\n', &mut buf).map_err(|e| ParseCsvError {
            line: line_no,
            kind: ParseErrorKind::Io(e),
        })?;
        if n == 0 {
            break;
        }
        line_no += 1;

        normalize_unicode_minus(&mut buf);
        let line = buf.trim_ascii();
        if line.is_empty() || line[0] == b'#' {
            continue;
        }

        let mut cols = line.split(|&b| b == b',').map(<[u8]>::trim_ascii);
        let x_field = cols.next().unwrap_or_default();
        let weight_field = cols.next();
        let extra = cols.count();

        if !saw_first {
            saw_first = true;
            if lexical_core::parse::<f64>(x_field).is_err() {
                continue;
            }
        }

        if extra > 0 {
            return Err(ParseCsvError {
                line: line_no,
                kind: ParseErrorKind::BadColumnCount(2 + extra),
            });
        }

        let x = parse_f64(x_field, line_no, "x")?;
        let weight = match weight_field {
            Some(w) if !w.is_empty() => parse_f64(w, line_no, "weight")?,
            _ => 1.0,
        };
        samples.push(x, weight);
    }

    if samples.is_empty() {
        return Err(ParseCsvError {
            line: line_no,
            kind: ParseErrorKind::NoSamples,
        });
    }
    Ok(samples)
}

/// `-` reads stdin.
pub fn read_csv_from_path(path: &str) -> Result<Samples, ParseCsvError> {
    if path == "-" {
        read_csv(std::io::stdin().lock())
    } else {
        let file = std::fs::File::open(path).map_err(|e| ParseCsvError {
            line: 0,
            kind: ParseErrorKind::Io(e),
        })?;
        read_csv(file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Result<Samples, ParseCsvError> {
        read_csv(text.as_bytes())
    }

    #[test]
    fn weight_defaults_to_one() {
        let s = parse("0.5\n1.5,3\n2.5,\n").unwrap();
        assert_eq!(s.x, vec![0.5, 1.5, 2.5]);
        assert_eq!(s.y, vec![1.0, 3.0, 1.0]);
    }

    #[test]
    fn header_comments_and_blank_lines_are_skipped() {
        let s = parse("x,weight\r\n# a comment\n\n 1 , 2 \r\n").unwrap();
        assert_eq!(s.len(), 1);
        assert_eq!((s.x[0], s.y[0]), (1.0, 2.0));
    }

    #[test]
    fn unicode_minus_is_accepted() {
        let s = parse("\u{2212}1.25,\u{2212}2\n").unwrap();
        assert_eq!((s.x[0], s.y[0]), (-1.25, -2.0));
    }

    #[test]
    fn too_many_columns_reports_line() {
        let err = parse("1,2\n3,4,5\n").unwrap_err();
        assert_eq!(err.line, 2);
        assert!(matches!(err.kind, ParseErrorKind::BadColumnCount(3)));
    }

    #[test]
    fn bad_float_reports_field() {
        let err = parse("1\n2,abc\n").unwrap_err();
        assert_eq!(err.line, 2);
        assert!(matches!(
            err.kind,
            ParseErrorKind::BadFloat { field: "weight", .. }
        ));
        assert_eq!(err.to_string(), "line 2: invalid weight value 'abc'");
    }

    #[test]
    fn header_only_is_empty() {
        let err = parse("x,weight\n").unwrap_err();
        assert!(matches!(err.kind, ParseErrorKind::NoSamples));
    }

    #[test]
    fn normalize_leaves_plain_bytes_alone() {
        let mut buf = b"-1,2".to_vec();
        normalize_unicode_minus(&mut buf);
        assert_eq!(buf, b"-1,2");
    }

    #[test]
    fn unweighted_samples_count_once() {
        let s = Samples::unweighted(vec![1.0, 2.0]);
        assert_eq!(s.y, vec![1.0, 1.0]);
    }
}
