//! Tests for reading hobby definitions from disk.

use super::helpers::{ScoreInputs, write_json};
use super::*;
use harbour_scorer::{HobbyDefinitionSource, HobbySourceError};
use rstest::rstest;
use serde_json::json;

#[rstest]
#[tokio::test]
async fn reads_definitions_from_json_array() {
    let inputs = ScoreInputs::new();
    let path = inputs.path("hobbies.json");
    write_json(
        &path,
        &json!([
            { "name": "Pottery", "category": "crafts", "is_universal": false },
            { "name": "Reading", "is_universal": true, "aliases": ["books"] }
        ]),
    );
    let source = JsonFileHobbySource::new(path.clone());
    let definitions = source.fetch_definitions().await.expect("definitions");
    assert_eq!(definitions.len(), 2);
    assert_eq!(source.name(), path.as_str());
    assert_eq!(source.path(), path.as_path());
}

#[rstest]
#[tokio::test]
async fn missing_file_is_a_read_error() {
    let inputs = ScoreInputs::new();
    let source = JsonFileHobbySource::new(inputs.path("absent.json"));
    match source.fetch_definitions().await {
        Err(HobbySourceError::Read { .. }) => {}
        other => panic!("expected Read error, found {other:?}"),
    }
}

#[rstest]
#[tokio::test]
async fn malformed_file_is_a_decode_error() {
    let inputs = ScoreInputs::new();
    let path = inputs.path("hobbies.json");
    std::fs::write(&path, "{\"name\": 1}").expect("write");
    let source = JsonFileHobbySource::new(path);
    match source.fetch_definitions().await {
        Err(HobbySourceError::Decode { .. }) => {}
        other => panic!("expected Decode error, found {other:?}"),
    }
}
