//! Path expressions and their segments.

use alloc::borrow::ToOwned;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

/// Separator between segments in a path expression.
pub(crate) const DELIMITER: char = '.';

/// A single step in a path through a value tree.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Segment {
    /// Navigate to an object member by name
    Key(String),
    /// Navigate to an array element by position, written `[n]`
    Index(usize),
}

impl Segment {
    /// Classify one raw piece of a path.
    ///
    /// A piece that is entirely `[`, one or more decimal digits, `]` is an
    /// [`Segment::Index`]. Everything else, including `[]` and indices too
    /// large for `usize`, is a [`Segment::Key`] carrying the literal text.
    pub fn classify(raw: &str) -> Self {
        match parse_index(raw) {
            Some(index) => Segment::Index(index),
            None => Segment::Key(raw.to_owned()),
        }
    }

    /// The member name this segment addresses when it lands on an object.
    ///
    /// Index segments that meet an object look up their bracketed text, so
    /// `[2]` on `{"[2]": true}` finds `true`.
    pub fn key_text(&self) -> String {
        match self {
            Segment::Key(key) => key.clone(),
            Segment::Index(index) => alloc::format!("[{index}]"),
        }
    }

    /// The array position this segment addresses, if any.
    ///
    /// Keys spelled as canonical decimals (`3`, not `03` or `+3`) address
    /// array elements too.
    pub(crate) fn position(&self) -> Option<usize> {
        match self {
            Segment::Index(index) => Some(*index),
            Segment::Key(key) => parse_position(key),
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Key(key) => f.write_str(key),
            Segment::Index(index) => write!(f, "[{index}]"),
        }
    }
}

/// Parse `[digits]` into an index.
fn parse_index(raw: &str) -> Option<usize> {
    let digits = raw.strip_prefix('[')?.strip_suffix(']')?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

/// Parse a canonical decimal array position.
pub(crate) fn parse_position(raw: &str) -> Option<usize> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if raw.len() > 1 && raw.starts_with('0') {
        return None;
    }
    raw.parse().ok()
}

/// A path through a value tree, recorded as a series of segments.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Path {
    segments: Vec<Segment>,
}

impl Path {
    /// Create a new empty path.
    pub const fn new() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    /// Parse a dot-delimited path expression.
    ///
    /// Empty pieces produced by leading, trailing or repeated delimiters are
    /// dropped, so `.a..b.` is the same path as `a.b`. Parsing never fails.
    pub fn parse(expr: &str) -> Self {
        Self::from_segments(expr.split(DELIMITER))
    }

    /// Build a path from pieces that have already been split.
    ///
    /// Pieces are classified but never split again, so `["a.b", "c"]`
    /// addresses the member `a.b`. Empty pieces are dropped.
    pub fn from_segments<I, S>(pieces: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let segments = pieces
            .into_iter()
            .filter(|piece| !piece.as_ref().is_empty())
            .map(|piece| Segment::classify(piece.as_ref()))
            .collect();
        Self { segments }
    }

    /// Push a segment onto the path.
    pub fn push(&mut self, segment: Segment) {
        self.segments.push(segment);
    }

    /// Pop the last segment from the path.
    pub fn pop(&mut self) -> Option<Segment> {
        self.segments.pop()
    }

    /// Get the segments in this path.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Iterate over the segments in this path.
    pub fn iter(&self) -> core::slice::Iter<'_, Segment> {
        self.segments.iter()
    }

    /// Get the length of this path.
    pub const fn len(&self) -> usize {
        self.segments.len()
    }

    /// Check if this path is empty.
    pub const fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// The path made of the first `len` segments.
    pub fn prefix(&self, len: usize) -> Path {
        let len = len.min(self.segments.len());
        Self {
            segments: self.segments[..len].to_vec(),
        }
    }

    /// Byte range of the segment at `index` in the [`Display`](fmt::Display) output.
    pub(crate) fn span_of(&self, index: usize) -> Option<(usize, usize)> {
        let mut offset = 0;
        for (i, segment) in self.segments.iter().enumerate() {
            let len = segment.to_string().len();
            if i == index {
                return Some((offset, len));
            }
            offset += len + DELIMITER.len_utf8();
        }
        None
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            return f.write_str("<root>");
        }
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                write!(f, "{DELIMITER}")?;
            }
            write!(f, "{segment}")?;
        }
        Ok(())
    }
}

impl FromStr for Path {
    type Err = core::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Path::parse(s))
    }
}

impl From<Vec<Segment>> for Path {
    fn from(segments: Vec<Segment>) -> Self {
        Self { segments }
    }
}

impl FromIterator<Segment> for Path {
    fn from_iter<I: IntoIterator<Item = Segment>>(iter: I) -> Self {
        Self {
            segments: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Segment;
    type IntoIter = core::slice::Iter<'a, Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}

/// Anything that can address a node: a path expression, a pre-split list of
/// pieces, or an already parsed [`Path`].
pub trait IntoPath {
    /// Convert into a parsed path.
    fn into_path(self) -> Path;
}

impl IntoPath for Path {
    fn into_path(self) -> Path {
        self
    }
}

impl IntoPath for &Path {
    fn into_path(self) -> Path {
        self.clone()
    }
}

impl IntoPath for &str {
    fn into_path(self) -> Path {
        Path::parse(self)
    }
}

impl IntoPath for String {
    fn into_path(self) -> Path {
        Path::parse(&self)
    }
}

impl IntoPath for &String {
    fn into_path(self) -> Path {
        Path::parse(self)
    }
}

impl<S: AsRef<str>> IntoPath for &[S] {
    fn into_path(self) -> Path {
        Path::from_segments(self)
    }
}

impl<S: AsRef<str>, const N: usize> IntoPath for [S; N] {
    fn into_path(self) -> Path {
        Path::from_segments(self)
    }
}

impl<S: AsRef<str>, const N: usize> IntoPath for &[S; N] {
    fn into_path(self) -> Path {
        Path::from_segments(self)
    }
}

impl<S: AsRef<str>> IntoPath for Vec<S> {
    fn into_path(self) -> Path {
        Path::from_segments(self)
    }
}
