use crate::utils::error::Result;
use async_trait::async_trait;
use serde_json::Value;

/// 接收 block 輸出的事件通道（宿主的 `events.emit`）
#[async_trait]
pub trait EventEmitter: Send + Sync {
    async fn emit(&self, block_id: &str, payload: &Value) -> Result<()>;
}

pub trait ConfigProvider: Send + Sync {
    fn api_key(&self) -> &str;
    fn base_url(&self) -> &str;
    fn timeout_seconds(&self) -> u64;
    fn forward_nulls(&self) -> bool;
}
