//! Random access to the documents of a multi-document YAML stream.
//!
//! A byte source holding zero or more YAML documents separated by `---`
//! lines is ingested into a [`Stream`]. Each [`Document`] can then be fetched
//! by index, printed back as YAML, or decoded into any `serde` type.
//!
//! # Module Organization
//!
//! - [`document`]: a single decoded document
//! - [`stream`]: ingestion, indexed access and typed decode
//! - [`segment`]: raw, byte-identical splitting on delimiter lines
//!
//! ```
//! use serde::Deserialize;
//! use yaml_stream::Stream;
//!
//! #[derive(Deserialize)]
//! struct Spec {
//!     replicas: u32,
//! }
//!
//! #[derive(Deserialize)]
//! struct Manifest {
//!     spec: Spec,
//! }
//!
//! let bundle = "kind: Namespace\n---\nkind: Deployment\nspec:\n  replicas: 3\n";
//! let stream: Stream = bundle.parse().unwrap();
//!
//! let manifest: Manifest = stream.get(1).unwrap().decode().unwrap();
//! assert_eq!(manifest.spec.replicas, 3);
//! ```

pub mod document;
mod error;
pub mod segment;
pub mod stream;

pub use document::Document;
pub use error::Error;
pub use segment::Segments;
pub use stream::{ReadMode, ReadOptions, Stream};

// Re-export the dynamic value model documents are held in
pub use serde_yaml::{Mapping, Value};

/// Line separating two documents.
pub const DELIMITER: &str = "---\n";
