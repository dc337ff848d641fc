use super::*;

#[test]
fn test_suggestions_rotate_on_message_count() {
    assert_eq!(suggestions_for(1), FOLLOW_UP_SUGGESTIONS.as_slice());
    assert_eq!(suggestions_for(2), OPINION_SUGGESTIONS.as_slice());
    assert_eq!(suggestions_for(3), DEFAULT_SUGGESTIONS.as_slice());
    assert_eq!(suggestions_for(4), FOLLOW_UP_SUGGESTIONS.as_slice());
    assert_eq!(suggestions_for(5), OPINION_SUGGESTIONS.as_slice());
    assert_eq!(suggestions_for(6), DEFAULT_SUGGESTIONS.as_slice());
}

#[test]
fn test_suggestions_for_empty_conversation() {
    assert_eq!(suggestions_for(0), DEFAULT_SUGGESTIONS.as_slice());
}
