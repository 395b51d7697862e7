//! Block registry - holds every available block definition by id.

use crate::catalog;
use crate::core::block::BlockDefinition;
use crate::utils::error::{BlockError, Result};
use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

#[derive(Clone)]
pub struct BlockRegistry {
    blocks: HashMap<String, Arc<BlockDefinition>>,
}

impl BlockRegistry {
    /// Create a registry with the full LaunchDarkly catalog.
    pub fn new() -> Self {
        let mut registry = Self::empty();
        for block in catalog::all_blocks() {
            if let Err(e) = registry.register(block) {
                debug_assert!(false, "catalog block registered twice: {}", e);
                tracing::warn!("Skipping catalog block: {}", e);
            }
        }
        registry
    }

    /// Create an empty registry (for testing).
    pub fn empty() -> Self {
        Self {
            blocks: HashMap::new(),
        }
    }

    pub fn register(&mut self, block: BlockDefinition) -> Result<()> {
        if self.blocks.contains_key(&block.id) {
            return Err(BlockError::DuplicateBlockError { id: block.id });
        }
        self.blocks.insert(block.id.clone(), Arc::new(block));
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<Arc<BlockDefinition>> {
        self.blocks.get(id).cloned()
    }

    pub fn has(&self, id: &str) -> bool {
        self.blocks.contains_key(id)
    }

    /// All block ids, sorted.
    pub fn list(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.blocks.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    /// Blocks of one category, sorted by id.
    pub fn by_category(&self, category: &str) -> Vec<Arc<BlockDefinition>> {
        let mut blocks: Vec<_> = self
            .blocks
            .values()
            .filter(|block| block.category == category)
            .cloned()
            .collect();
        blocks.sort_by(|a, b| a.id.cmp(&b.id));
        blocks
    }

    pub fn categories(&self) -> Vec<&str> {
        self.blocks
            .values()
            .map(|block| block.category.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

impl Default for BlockRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::HttpMethod;

    #[test]
    fn test_registry_loads_catalog() {
        let registry = BlockRegistry::new();

        assert!(registry.has("get_feature_flag"));
        assert!(registry.has("create_segment"));
        assert!(registry.has("reset_token"));
        assert!(registry.has("create_experiment"));
        assert!(registry.len() >= 150);
    }

    #[test]
    fn test_registry_keeps_every_catalog_block() {
        // 目錄 id 重複時 debug build 會直接 panic，這裡再確認沒有 block 被略過
        assert_eq!(BlockRegistry::new().len(), catalog::all_blocks().len());
    }

    #[test]
    fn test_register_rejects_duplicates() {
        let mut registry = BlockRegistry::empty();
        let block = BlockDefinition::new("get_root", "Root", HttpMethod::Get, "/api/v2");

        registry.register(block.clone()).unwrap();
        assert!(matches!(
            registry.register(block),
            Err(BlockError::DuplicateBlockError { .. })
        ));
    }

    #[test]
    fn test_list_is_sorted() {
        let registry = BlockRegistry::new();
        let ids = registry.list();
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        assert_eq!(ids, sorted);
    }

    #[test]
    fn test_by_category() {
        let registry = BlockRegistry::new();
        let tokens = registry.by_category("access-tokens");
        assert!(!tokens.is_empty());
        assert!(tokens.iter().all(|block| block.category == "access-tokens"));
        assert!(registry.categories().contains(&"flags"));
    }
}
