use std::sync::Arc;

/// Id generation is injected so tests stay deterministic and rapid
/// sequential creation cannot collide.
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> String;
}

pub type ArcIdGenerator = Arc<dyn IdGenerator>;

#[derive(Debug, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next_id(&self) -> String {
        uuid::Uuid::new_v4().to_string()
    }
}

/// Sequential ids for tests: "1", "2", ...
#[derive(Debug, Default)]
pub struct SequentialGenerator {
    counter: std::sync::atomic::AtomicUsize,
}

impl IdGenerator for SequentialGenerator {
    fn next_id(&self) -> String {
        let n = self
            .counter
            .fetch_add(1, std::sync::atomic::Ordering::Relaxed);
        (n + 1).to_string()
    }
}
