//! Raw delimiter-based segmentation.
//!
//! Splits a source on lines made of exactly `---\n` without decoding
//! anything. Each delimiter line opens the segment that follows it, so
//! joining the segments gives back the source byte for byte.

use crate::error::Error;
use crate::DELIMITER;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::ops::Index;
use std::path::Path;

/// The raw byte segments of one source.
///
/// ```
/// use yaml_stream::Segments;
///
/// let input = "a: 1\n---\nb: 2";
/// let segments: Segments = input.parse().unwrap();
/// assert_eq!(segments.count(), 2);
/// assert_eq!(segments.get(1).unwrap(), b"---\nb: 2");
/// assert_eq!(segments.to_string(), input);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Segments {
    parts: Vec<Vec<u8>>,
}

impl Segments {
    pub fn new() -> Self {
        Segments::default()
    }

    /// Split `source` into segments, replacing any previous content.
    ///
    /// A source without delimiters is a single segment. A leading delimiter
    /// produces an empty first segment.
    pub fn read<R: Read>(&mut self, source: R) -> Result<(), Error> {
        let mut reader = BufReader::new(source);
        let mut parts = Vec::new();
        let mut current = Vec::new();
        let mut line = Vec::new();

        loop {
            line.clear();
            let n = reader
                .read_until(b'\n', &mut line)
                .map_err(|e| Error::Io(format!("unable to read: {}", e)))?;
            if n == 0 {
                break;
            }
            if line == DELIMITER.as_bytes() {
                log::trace!("delimiter closes segment {}", parts.len());
                parts.push(std::mem::take(&mut current));
            }
            current.extend_from_slice(&line);
        }
        parts.push(current);

        log::debug!("split source into {} segment(s)", parts.len());
        self.parts = parts;
        Ok(())
    }

    /// Open `path` and [`read`](Segments::read) its content.
    pub fn read_file<P: AsRef<Path>>(&mut self, path: P) -> Result<(), Error> {
        let path = path.as_ref();
        let file = File::open(path)
            .map_err(|e| Error::Io(format!("unable to open '{}': {}", path.display(), e)))?;
        self.read(file)
    }

    pub fn count(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Bytes of the segment at `index`, delimiter line included.
    pub fn get(&self, index: usize) -> Result<&[u8], Error> {
        self.parts
            .get(index)
            .map(Vec::as_slice)
            .ok_or(Error::Index {
                index,
                count: self.count(),
            })
    }

    pub fn iter(&self) -> impl Iterator<Item = &[u8]> {
        self.parts.iter().map(Vec::as_slice)
    }

    /// The original source.
    pub fn bytes(&self) -> Vec<u8> {
        self.parts.concat()
    }
}

impl std::str::FromStr for Segments {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut segments = Segments::new();
        segments.read(s.as_bytes())?;
        Ok(segments)
    }
}

impl Index<usize> for Segments {
    type Output = [u8];

    fn index(&self, index: usize) -> &[u8] {
        &self.parts[index]
    }
}

impl std::fmt::Display for Segments {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for part in &self.parts {
            f.write_str(&String::from_utf8_lossy(part))?;
        }
        Ok(())
    }
}
