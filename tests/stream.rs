//! Integration tests for the library API
//!
//! Streams are read from the files under `testdata/` and from temporary
//! files, then queried by index and decoded into typed destinations.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use indoc::indoc;
use serde::Deserialize;
use similar::TextDiff;
use tempfile::TempDir;
use yaml_stream::{Error, ReadOptions, Segments, Stream, Value};

fn testdata(name: &str) -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("testdata");
    path.push(name);
    path
}

fn read(name: &str) -> Stream {
    let mut stream = Stream::new();
    stream
        .read_file(testdata(name))
        .expect("Failed to read test data");
    stream
}

fn assert_output_eq(actual: &str, expected: &str) {
    if actual != expected {
        let diff = TextDiff::from_lines(expected, actual);
        eprintln!();
        for line in diff
            .unified_diff()
            .header("expected", "actual")
            .to_string()
            .lines()
        {
            eprintln!("{}", line);
        }
        panic!("Output mismatch");
    }
}

#[derive(Debug, Deserialize)]
struct Metadata {
    name: String,
    namespace: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Spec {
    replicas: u32,
}

#[derive(Debug, Deserialize)]
struct Manifest {
    kind: String,
    metadata: Metadata,
    spec: Option<Spec>,
}

// =============================================================================
// Counting
// =============================================================================

#[test]
fn test_count_simple_file() {
    assert_eq!(read("simple.yaml").count(), 1);
}

#[test]
fn test_count_stream_file() {
    assert_eq!(read("simple_stream.yaml").count(), 3);
}

#[test]
fn test_count_is_delimiters_plus_one() {
    for k in 0..5 {
        let input = (0..=k)
            .map(|i| format!("doc: {}\n", i))
            .collect::<Vec<_>>()
            .join("---\n");
        let stream: Stream = input.parse().unwrap();
        assert_eq!(stream.count(), k + 1, "input: {:?}", input);
    }
}

// =============================================================================
// Indexed access
// =============================================================================

#[test]
fn test_get_each_document() {
    let stream = read("simple_stream.yaml");

    assert_output_eq(
        &stream.get(0).unwrap().to_string(),
        indoc! {"
            ---
            apiVersion: v1
            kind: Namespace
            metadata:
              name: demo
        "},
    );
    assert_output_eq(
        &stream.get(1).unwrap().to_string(),
        indoc! {"
            ---
            apiVersion: apps/v1
            kind: Deployment
            metadata:
              name: web
              namespace: demo
            spec:
              replicas: 3
        "},
    );
    assert_output_eq(
        &stream.get(2).unwrap().to_string(),
        indoc! {"
            ---
            stream_number: 1
        "},
    );
}

#[test]
fn test_get_past_last_index() {
    let stream = read("simple_stream.yaml");
    match stream.get(stream.count()) {
        Err(Error::Index { index, count }) => {
            assert_eq!(index, 3);
            assert_eq!(count, 3);
        }
        other => panic!("expected index error, got {:?}", other),
    }
}

#[test]
fn test_scenario_three_documents() {
    let stream: Stream = "a: 1\n---\nb: 2\n---\nc: 3\n".parse().unwrap();
    assert_eq!(stream.count(), 3);
    let mut dest: HashMap<String, i64> = HashMap::new();
    stream.get_unmarshal(1, &mut dest).unwrap();
    assert_eq!(dest, HashMap::from([("b".to_string(), 2)]));
}

#[test]
fn test_scenario_single_document() {
    let stream: Stream = "a: 1\n".parse().unwrap();
    assert_eq!(stream.count(), 1);
    let mut dest: HashMap<String, i64> = HashMap::new();
    stream.get_unmarshal(0, &mut dest).unwrap();
    assert_eq!(dest, HashMap::from([("a".to_string(), 1)]));
}

// =============================================================================
// Typed decode
// =============================================================================

#[test]
fn test_get_unmarshal_map() {
    let stream = read("simple_stream.yaml");
    let mut dest: HashMap<String, i64> = HashMap::new();
    stream.get_unmarshal(2, &mut dest).unwrap();
    assert_eq!(dest["stream_number"], 1);
}

#[test]
fn test_get_unmarshal_nested_struct() {
    let stream = read("simple_stream.yaml");
    let manifest: Manifest = stream.get(1).unwrap().decode().unwrap();
    assert_eq!(manifest.kind, "Deployment");
    assert_eq!(manifest.metadata.name, "web");
    assert_eq!(manifest.metadata.namespace.as_deref(), Some("demo"));
    assert_eq!(manifest.spec.map(|s| s.replicas), Some(3));
}

#[test]
fn test_get_unmarshal_shape_mismatch() {
    let stream = read("simple_stream.yaml");
    let mut dest: HashMap<String, String> = HashMap::new();
    let err = stream.get_unmarshal(1, &mut dest).unwrap_err();
    assert!(matches!(err, Error::Decode(_)), "got {:?}", err);
    assert!(dest.is_empty());
}

#[test]
fn test_get_unmarshal_out_of_range_leaves_dest() {
    let stream = read("simple.yaml");
    let mut dest: HashMap<String, String> = HashMap::new();
    let err = stream.get_unmarshal(4, &mut dest).unwrap_err();
    assert_eq!(err, Error::Index { index: 4, count: 1 });
    assert!(dest.is_empty());
}

// =============================================================================
// Re-serialization
// =============================================================================

#[test]
fn test_bytes_reads_back_to_same_count() {
    for name in ["simple.yaml", "simple_stream.yaml"] {
        let stream = read(name);
        let mut again = Stream::new();
        again.read(stream.bytes().as_slice()).unwrap();
        assert_eq!(again.count(), stream.count(), "{}", name);
        assert_eq!(again, stream, "{}", name);
    }
}

#[test]
fn test_bytes_adds_delimiter_to_first_document() {
    let stream = read("simple.yaml");
    let output = stream.to_string();
    assert!(output.starts_with("---\n"));
    assert_ne!(output.as_bytes(), fs::read(testdata("simple.yaml")).unwrap());
}

#[test]
fn test_empty_document_reads_back() {
    let stream: Stream = "a: 1\n---\n".parse().unwrap();
    assert_eq!(stream.count(), 2);
    assert_eq!(stream[1].value(), &Value::Null);
    let again: Stream = stream.to_string().parse().unwrap();
    assert_eq!(again.count(), 2);
}

// =============================================================================
// Read modes and files
// =============================================================================

#[test]
fn test_malformed_stream_strict_and_lenient() {
    let input = indoc! {"
        a: 1
        ---
        b: 2
        ---
        c: [unterminated
    "};

    let err = input.parse::<Stream>().unwrap_err();
    assert!(matches!(err, Error::Parse(_)), "got {:?}", err);

    let mut lenient = Stream::with_options(ReadOptions::lenient());
    lenient.read(input.as_bytes()).unwrap();
    assert_eq!(lenient.count(), 2);
}

#[test]
fn test_read_file_missing() {
    let dir = TempDir::new().unwrap();
    let mut stream = Stream::new();
    let err = stream.read_file(dir.path().join("absent.yaml")).unwrap_err();
    match err {
        Error::Io(msg) => assert!(msg.contains("absent.yaml"), "{}", msg),
        other => panic!("expected io error, got {:?}", other),
    }
    assert_eq!(stream.count(), 0);
}

#[test]
fn test_read_file_from_temp_dir() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bundle.yaml");
    fs::write(&path, "x: 1\n---\ny: 2\n").unwrap();

    let mut stream = Stream::new();
    stream.read_file(&path).unwrap();
    assert_eq!(stream.count(), 2);

    let mut segments = Segments::new();
    segments.read_file(&path).unwrap();
    assert_eq!(segments.count(), 2);
    assert_eq!(segments.bytes(), fs::read(&path).unwrap());
}

#[test]
fn test_segments_byte_identical_to_file() {
    for name in ["simple.yaml", "simple_stream.yaml"] {
        let mut segments = Segments::new();
        segments.read_file(testdata(name)).unwrap();
        assert_eq!(segments.bytes(), fs::read(testdata(name)).unwrap());
    }
}
