//! Text format: one emitter per line, `pos=<x,y,z>, r=<radius>`.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use beacon_geom::{COORD_LIMIT, Point};

use crate::emitter::Emitter;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseErrorKind {
    MissingField(&'static str),
    BadInteger { text: String, reason: ParseIntError },
    NegativeRadius(i64),
    /// A coordinate or radius beyond `±COORD_LIMIT`.
    OutOfRange(i64),
    TrailingInput(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseError {
    /// 1-based line number, set when parsing a whole document.
    pub line: Option<usize>,
    pub kind: ParseErrorKind,
}

impl ParseError {
    fn new(kind: ParseErrorKind) -> Self {
        Self { line: None, kind }
    }

    fn at_line(self, line: usize) -> Self {
        Self {
            line: Some(line),
            ..self
        }
    }
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseErrorKind::MissingField(what) => write!(f, "missing {}", what),
            ParseErrorKind::BadInteger { text, reason } => {
                write!(f, "bad integer {:?}: {}", text, reason)
            }
            ParseErrorKind::NegativeRadius(r) => write!(f, "negative radius {}", r),
            ParseErrorKind::OutOfRange(v) => {
                write!(f, "value {} outside ±{}", v, COORD_LIMIT)
            }
            ParseErrorKind::TrailingInput(rest) => write!(f, "unexpected trailing input {:?}", rest),
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line {
            Some(line) => write!(f, "line {}: {}", line, self.kind),
            None => fmt::Display::fmt(&self.kind, f),
        }
    }
}

impl std::error::Error for ParseError {}

fn int(text: &str) -> Result<i64, ParseError> {
    let text = text.trim();
    let v = text.parse::<i64>().map_err(|reason| {
        ParseError::new(ParseErrorKind::BadInteger {
            text: text.to_string(),
            reason,
        })
    })?;
    if v.unsigned_abs() > COORD_LIMIT as u64 {
        return Err(ParseError::new(ParseErrorKind::OutOfRange(v)));
    }
    Ok(v)
}

fn missing(what: &'static str) -> ParseError {
    ParseError::new(ParseErrorKind::MissingField(what))
}

impl FromStr for Emitter {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let body = s.strip_prefix("pos=<").ok_or_else(|| missing("`pos=<`"))?;
        let (coords, rest) = body.split_once('>').ok_or_else(|| missing("`>`"))?;

        let mut axes = coords.splitn(3, ',');
        let x = int(axes.next().ok_or_else(|| missing("x coordinate"))?)?;
        let y = int(axes.next().ok_or_else(|| missing("y coordinate"))?)?;
        let z = int(axes.next().ok_or_else(|| missing("z coordinate"))?)?;

        let rest = rest.trim_start();
        let rest = rest.strip_prefix(',').ok_or_else(|| missing("`,` after position"))?;
        let rest = rest.trim_start();
        let radius_text = rest.strip_prefix("r=").ok_or_else(|| missing("`r=`"))?;
        let radius_text = radius_text.trim_end();
        let digits_end = radius_text
            .char_indices()
            .find(|&(i, c)| !(c.is_ascii_digit() || (i == 0 && c == '-')))
            .map(|(i, _)| i)
            .unwrap_or(radius_text.len());
        let (radius_text, trailing) = match digits_end {
            0 => (radius_text, ""),
            n => radius_text.split_at(n),
        };
        if !trailing.is_empty() {
            return Err(ParseError::new(ParseErrorKind::TrailingInput(
                trailing.to_string(),
            )));
        }
        let radius = int(radius_text)?;
        if radius < 0 {
            return Err(ParseError::new(ParseErrorKind::NegativeRadius(radius)));
        }
        Ok(Emitter::new(Point::new(x, y, z), radius))
    }
}

/// Parse a whole document, skipping blank lines.
pub fn parse_emitters(text: &str) -> Result<Vec<Emitter>, ParseError> {
    let emitters = text
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| line.parse::<Emitter>().map_err(|e| e.at_line(idx + 1)))
        .collect::<Result<Vec<_>, _>>()?;
    log::debug!("parsed {} emitters", emitters.len());
    Ok(emitters)
}
