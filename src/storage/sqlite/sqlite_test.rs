use super::*;

#[tokio::test]
async fn test_get_missing_key() {
    let db = Sqlite::new(None).await.unwrap();
    let value = db.get("conversations").await.unwrap();
    assert!(value.is_none());
}

#[tokio::test]
async fn test_set_then_get() {
    let db = Sqlite::new(None).await.unwrap();

    db.set("current_conversation", "convo-1").await.unwrap();

    let value = db.get("current_conversation").await.unwrap();
    assert_eq!(value.as_deref(), Some("convo-1"));
}

#[tokio::test]
async fn test_set_overwrites_existing_value() {
    let db = Sqlite::new(None).await.unwrap();

    db.set("current_conversation", "convo-1").await.unwrap();
    db.set("current_conversation", "convo-2").await.unwrap();

    let value = db.get("current_conversation").await.unwrap();
    assert_eq!(value.as_deref(), Some("convo-2"));
}

#[tokio::test]
async fn test_keys_are_independent() {
    let db = Sqlite::new(None).await.unwrap();

    db.set("conversations", "[]").await.unwrap();
    db.set("transcripts", "{}").await.unwrap();

    assert_eq!(db.get("conversations").await.unwrap().as_deref(), Some("[]"));
    assert_eq!(db.get("transcripts").await.unwrap().as_deref(), Some("{}"));
}
