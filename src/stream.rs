//! Decoded multi-document YAML streams.

use crate::document::Document;
use crate::error::Error;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_yaml::Value;
use std::fs::File;
use std::io::{BufReader, Read};
use std::ops::Index;
use std::path::Path;

// =============================================================================
// Read Options
// =============================================================================

/// How ingestion treats malformed content met after some documents decoded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReadMode {
    /// Fail the whole read and keep the previous state
    #[default]
    Strict,
    /// Stop at the malformed document and keep what decoded before it
    Lenient,
}

impl std::str::FromStr for ReadMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "strict" => Ok(ReadMode::Strict),
            "lenient" => Ok(ReadMode::Lenient),
            _ => Err(format!(
                "Invalid read mode '{}': expected strict or lenient",
                s
            )),
        }
    }
}

/// Options applied by [`Stream::read`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReadOptions {
    pub mode: ReadMode,
}

impl ReadOptions {
    pub fn strict() -> Self {
        ReadOptions {
            mode: ReadMode::Strict,
        }
    }

    pub fn lenient() -> Self {
        ReadOptions {
            mode: ReadMode::Lenient,
        }
    }
}

// =============================================================================
// Stream
// =============================================================================

/// An ordered sequence of [`Document`]s decoded from one byte source.
///
/// A new stream is empty. [`Stream::read`] populates it; reading again
/// replaces the documents instead of appending to them. The document count is
/// always the length of the sequence.
///
/// ```
/// use yaml_stream::Stream;
///
/// let stream: Stream = "a: 1\n---\nb: 2\n---\nc: 3\n".parse().unwrap();
/// assert_eq!(stream.count(), 3);
/// assert_eq!(stream.get(1).unwrap().to_string(), "---\nb: 2\n");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Stream {
    documents: Vec<Document>,
    options: ReadOptions,
}

impl Stream {
    /// An empty stream using strict ingestion.
    pub fn new() -> Self {
        Stream::default()
    }

    pub fn with_options(options: ReadOptions) -> Self {
        Stream {
            documents: Vec::new(),
            options,
        }
    }

    pub fn options(&self) -> ReadOptions {
        self.options
    }

    /// Drain `source` and decode every document it holds.
    ///
    /// Input without any document (empty, or comments only) yields a single
    /// empty document. On error the stream keeps its previous documents.
    pub fn read<R: Read>(&mut self, mut source: R) -> Result<(), Error> {
        let mut input = Vec::new();
        source
            .read_to_end(&mut input)
            .map_err(|e| Error::Io(format!("unable to read: {}", e)))?;
        log::debug!("read {} bytes from source", input.len());

        self.documents = decode_documents(&input, self.options.mode)?;
        log::debug!("stream holds {} document(s)", self.documents.len());
        Ok(())
    }

    /// Open `path` and [`read`](Stream::read) its content.
    pub fn read_file<P: AsRef<Path>>(&mut self, path: P) -> Result<(), Error> {
        let path = path.as_ref();
        let file = File::open(path)
            .map_err(|e| Error::Io(format!("unable to open '{}': {}", path.display(), e)))?;
        self.read(BufReader::new(file))
    }

    /// Number of documents.
    pub fn count(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Document at `index`, or [`Error::Index`] when out of range.
    ///
    /// Use `stream[index]` to skip the check once the index is known valid.
    pub fn get(&self, index: usize) -> Result<&Document, Error> {
        self.documents.get(index).ok_or(Error::Index {
            index,
            count: self.count(),
        })
    }

    /// Decode the document at `index` into `dest`.
    ///
    /// The destination must be a mutable reference; handing over a value
    /// would discard the result, so it does not compile:
    ///
    /// ```compile_fail
    /// use std::collections::HashMap;
    /// use yaml_stream::Stream;
    ///
    /// let stream: Stream = "a: 1\n".parse().unwrap();
    /// let dest: HashMap<String, i64> = HashMap::new();
    /// stream.get_unmarshal(0, dest).unwrap();
    /// ```
    pub fn get_unmarshal<T: DeserializeOwned>(
        &self,
        index: usize,
        dest: &mut T,
    ) -> Result<(), Error> {
        self.get(index)?.unmarshal(dest)
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Document> {
        self.documents.iter()
    }

    /// Every document re-serialized and concatenated.
    ///
    /// The result is a valid multi-document stream with one `---` per
    /// document, but not byte-identical to the source: formatting, comments
    /// and key quoting are not preserved. Use [`Segments`](crate::Segments)
    /// for the original bytes.
    pub fn bytes(&self) -> Vec<u8> {
        self.to_string().into_bytes()
    }
}

/// Run the streaming decoder over `input` until it is exhausted.
fn decode_documents(input: &[u8], mode: ReadMode) -> Result<Vec<Document>, Error> {
    let mut documents = Vec::new();

    for de in serde_yaml::Deserializer::from_slice(input) {
        match Value::deserialize(de) {
            Ok(value) => {
                log::trace!("decoded document {}", documents.len());
                documents.push(Document::new(value));
            }
            Err(e) => match mode {
                ReadMode::Strict => {
                    return Err(Error::Parse(format!(
                        "unable to decode document {}: {}",
                        documents.len(),
                        e
                    )));
                }
                ReadMode::Lenient => {
                    log::warn!(
                        "stopping after {} document(s), malformed content: {}",
                        documents.len(),
                        e
                    );
                    break;
                }
            },
        }
    }

    if documents.is_empty() {
        documents.push(Document::default());
    }
    Ok(documents)
}

impl std::str::FromStr for Stream {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut stream = Stream::new();
        stream.read(s.as_bytes())?;
        Ok(stream)
    }
}

impl Index<usize> for Stream {
    type Output = Document;

    fn index(&self, index: usize) -> &Document {
        &self.documents[index]
    }
}

impl<'a> IntoIterator for &'a Stream {
    type Item = &'a Document;
    type IntoIter = std::slice::Iter<'a, Document>;

    fn into_iter(self) -> Self::IntoIter {
        self.documents.iter()
    }
}

impl std::fmt::Display for Stream {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for document in &self.documents {
            write!(f, "{}", document)?;
        }
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
