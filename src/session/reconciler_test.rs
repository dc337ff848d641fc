use super::*;
use crate::models::StructuredContent;

#[test]
fn test_reconcile_extracts_output_from_json_string() {
    let transcript = vec![
        TranscriptEntry::user("hi"),
        TranscriptEntry::assistant(r#"{"output":"hello"}"#),
    ];
    assert_eq!(reconcile(&transcript).as_deref(), Some("hello"));
}

#[test]
fn test_reconcile_uses_raw_string_when_not_json() {
    let transcript = vec![TranscriptEntry::assistant("plain reply")];
    assert_eq!(reconcile(&transcript).as_deref(), Some("plain reply"));
}

#[test]
fn test_reconcile_uses_raw_string_when_json_lacks_output() {
    let transcript = vec![TranscriptEntry::assistant(r#"{"other":"field"}"#)];
    assert_eq!(
        reconcile(&transcript).as_deref(),
        Some(r#"{"other":"field"}"#)
    );
}

#[test]
fn test_reconcile_structured_content_with_output() {
    let transcript = vec![TranscriptEntry {
        role: "assistant".to_string(),
        content: EntryContent::Structured(StructuredContent {
            kind: "function_result".to_string(),
            output: Some("the answer".to_string()),
            function: Some("lookup".to_string()),
            args: None,
        }),
    }];
    assert_eq!(reconcile(&transcript).as_deref(), Some("the answer"));
}

#[test]
fn test_reconcile_structured_content_without_output_renders_json() {
    let transcript = vec![TranscriptEntry {
        role: "assistant".to_string(),
        content: EntryContent::Structured(StructuredContent {
            kind: "function_call".to_string(),
            output: None,
            function: Some("lookup".to_string()),
            args: Some("{}".to_string()),
        }),
    }];
    let text = reconcile(&transcript).expect("no message");
    assert!(text.contains("function_call"));
    assert!(text.contains("lookup"));
}

#[test]
fn test_reconcile_skips_non_assistant_tail() {
    let transcript = vec![
        TranscriptEntry::assistant("earlier reply"),
        TranscriptEntry::user("hi"),
    ];
    assert_eq!(reconcile(&transcript), None);
}

#[test]
fn test_reconcile_empty_transcript() {
    assert_eq!(reconcile(&[]), None);
}
