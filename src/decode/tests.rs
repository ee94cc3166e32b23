//! Tests for decode module

use super::*;
use crate::error::Error;
use crate::models::{Game, Level, User};
use pretty_assertions::assert_eq;

#[test]
fn test_decode_single_envelope() {
    let body = br#"{"data": {"id": "zx7gd1yx", "names": {"international": "1"}}}"#;

    let envelope: Envelope<User> = decode(body).unwrap();
    assert_eq!(envelope.data.id, "zx7gd1yx");
    assert_eq!(envelope.into_inner().names.international, "1");
}

#[test]
fn test_decode_paged_envelope() {
    let body = br#"{
        "data": [{"id": "a"}, {"id": "b"}],
        "pagination": {"offset": 200, "max": 200, "size": 2, "links": [{"rel": "prev", "uri": "https://x"}]}
    }"#;

    let page: PagedEnvelope<User> = decode(body).unwrap();
    assert_eq!(page.len(), 2);
    let pagination = page.pagination.unwrap();
    assert_eq!(pagination.offset, 200);
    assert_eq!(pagination.size, 2);
    assert_eq!(pagination.links[0].rel, "prev");
}

#[test]
fn test_decode_paged_envelope_without_pagination() {
    let page: PagedEnvelope<User> = decode(br#"{"data": []}"#).unwrap();
    assert!(page.is_empty());
    assert!(page.pagination.is_none());
}

#[test]
fn test_decode_malformed_json() {
    let result: crate::Result<Envelope<User>> = decode(b"{not json");
    assert!(matches!(result, Err(Error::Deserialize(_))));
}

#[test]
fn test_decode_schema_mismatch() {
    let result: crate::Result<PagedEnvelope<User>> = decode(br#"{"data": {"id": "a"}}"#);
    assert!(matches!(result, Err(Error::Deserialize(_))));

    let result: crate::Result<Envelope<User>> = decode(br#"{"items": []}"#);
    assert!(matches!(result, Err(Error::Deserialize(_))));
}

#[test]
fn test_decode_into() {
    let mut envelope = ErrorEnvelope::default();
    decode_into(br#"{"message": "Not found"}"#, &mut envelope).unwrap();
    assert_eq!(envelope.message, "Not found");
}

#[test]
fn test_error_envelope_missing_message() {
    let envelope: ErrorEnvelope = decode(br#"{"status": 404}"#).unwrap();
    assert_eq!(envelope.message, "");
}

#[test]
fn test_embedded_resource() {
    let embedded: Embedded<Game> =
        decode(br#"{"data": {"id": "29d30dlp", "abbreviation": "sm64"}}"#).unwrap();
    assert_eq!(embedded.into_resource().unwrap().abbreviation, "sm64");
}

#[test]
fn test_embedded_null() {
    let embedded: Embedded<Level> = decode(br#"{"data": []}"#).unwrap();
    assert!(matches!(embedded, Embedded::Null { .. }));
    assert!(embedded.into_resource().is_none());
}

#[test]
fn test_embedded_id() {
    let embedded: Embedded<Game> = decode(br#""29d30dlp""#).unwrap();
    assert_eq!(embedded.id(), Some("29d30dlp"));
    assert!(embedded.into_resource().is_none());
}
