use crate::domain::ports::EventEmitter;
use crate::utils::error::Result;
use async_trait::async_trait;
use serde_json::Value;
use std::io::Write;
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, PartialEq)]
pub struct EmittedEvent {
    pub block_id: String,
    pub payload: Value,
}

/// 把事件收集在記憶體中
#[derive(Debug, Default)]
pub struct MemoryEmitter {
    events: Mutex<Vec<EmittedEvent>>,
}

impl MemoryEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<EmittedEvent> {
        self.events
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn payloads(&self) -> Vec<Value> {
        self.events().into_iter().map(|event| event.payload).collect()
    }

    pub fn last(&self) -> Option<EmittedEvent> {
        self.events
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .last()
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.events
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl EventEmitter for MemoryEmitter {
    async fn emit(&self, block_id: &str, payload: &Value) -> Result<()> {
        self.events
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(EmittedEvent {
                block_id: block_id.to_string(),
                payload: payload.clone(),
            });
        Ok(())
    }
}

/// 每個事件輸出一行 JSON 到 stdout
#[derive(Debug, Clone, Default)]
pub struct StdoutEmitter {
    pretty: bool,
}

impl StdoutEmitter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

#[async_trait]
impl EventEmitter for StdoutEmitter {
    async fn emit(&self, _block_id: &str, payload: &Value) -> Result<()> {
        let rendered = if self.pretty {
            serde_json::to_string_pretty(payload)?
        } else {
            serde_json::to_string(payload)?
        };

        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{}", rendered)?;
        stdout.flush()?;
        Ok(())
    }
}

/// 只寫日誌，供直接取用 `BlockOutcome::output` 的宿主使用
#[derive(Debug, Clone, Copy, Default)]
pub struct LogEmitter;

#[async_trait]
impl EventEmitter for LogEmitter {
    async fn emit(&self, block_id: &str, payload: &Value) -> Result<()> {
        tracing::debug!("📤 {} emitted {}", block_id, payload);
        Ok(())
    }
}

#[async_trait]
impl<E: EventEmitter + ?Sized> EventEmitter for Arc<E> {
    async fn emit(&self, block_id: &str, payload: &Value) -> Result<()> {
        (**self).emit(block_id, payload).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_memory_emitter_collects_in_order() {
        let emitter = MemoryEmitter::new();
        assert!(emitter.is_empty());

        emitter.emit("get_project", &json!({ "key": "a" })).await.unwrap();
        emitter.emit("get_project", &json!({ "key": "b" })).await.unwrap();

        assert_eq!(emitter.len(), 2);
        assert_eq!(emitter.payloads(), vec![json!({ "key": "a" }), json!({ "key": "b" })]);
        assert_eq!(emitter.last().unwrap().block_id, "get_project");
    }

    #[test]
    fn test_shared_emitter_through_arc() {
        let emitter = Arc::new(MemoryEmitter::new());
        let shared = Arc::clone(&emitter);

        tokio_test::block_on(shared.emit("list_webhooks", &json!({ "items": [] }))).unwrap();
        assert_eq!(emitter.len(), 1);
    }
}
