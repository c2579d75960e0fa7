//! # 카탈로그 계약 어댑터
//!
//! [`ItemCatalog`] 계약을 [`ItemStore`] 에 위임하는 얇은 구현체입니다.
//! 어떤 로직도 추가하지 않으며, 로케이터가 저장소의 내부 표현에 의존하지
//! 않도록 둘 사이를 분리하는 역할만 합니다.
//!
//! 이 파일의 `inventory::submit!` 이 카탈로그 계약의 유일한 기본
//! 프로바이더 등록 지점입니다.

use std::sync::Arc;
use crate::core::contract::{ItemCatalog, ITEM_CATALOG_CONTRACT};
use crate::core::registry::ProviderRegistration;
use crate::domain::Item;
use crate::repositories::items::item_repo::ItemStore;

/// 기본 프로바이더의 등록 이름
pub const IN_MEMORY_PROVIDER: &str = "in_memory";

pub struct StoreBackedCatalog {
    name: &'static str,
    store: ItemStore,
}

impl StoreBackedCatalog {
    /// 기본 시드 데이터셋을 사용하는 어댑터
    ///
    /// 저장소는 아직 비어 있으며, 첫 호출 시점에 채워집니다.
    pub fn new(name: &'static str) -> Self {
        Self::with_store(name, ItemStore::new())
    }

    pub fn with_store(name: &'static str, store: ItemStore) -> Self {
        Self { name, store }
    }
}

impl ItemCatalog for StoreBackedCatalog {
    fn name(&self) -> &str {
        self.name
    }

    fn list_all(&self) -> Vec<Item> {
        self.store.list_all()
    }

    fn find_by_alias_prefix(&self, prefix: &str) -> Option<Item> {
        self.store.find_by_alias_prefix(prefix)
    }
}

fn construct_in_memory() -> Arc<dyn ItemCatalog> {
    Arc::new(StoreBackedCatalog::new(IN_MEMORY_PROVIDER))
}

inventory::submit! {
    ProviderRegistration::new(ITEM_CATALOG_CONTRACT, IN_MEMORY_PROVIDER, construct_in_memory)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::items::item_repo::seed_items;

    #[test]
    fn test_adapter_delegates_to_store() {
        let catalog = StoreBackedCatalog::new(IN_MEMORY_PROVIDER);

        assert_eq!(catalog.name(), "in_memory");
        assert_eq!(catalog.list_all(), seed_items());
        assert_eq!(
            catalog.find_by_alias_prefix("How").map(|item| item.id),
            Some(4)
        );
        assert_eq!(catalog.find_by_alias_prefix("Zzz"), None);
    }

    #[test]
    fn test_adapter_does_not_load_store_eagerly() {
        let catalog = StoreBackedCatalog::new(IN_MEMORY_PROVIDER);
        assert!(!catalog.store.is_loaded());

        catalog.list_all();
        assert!(catalog.store.is_loaded());
    }

    #[test]
    fn test_constructor_returns_trait_object() {
        let catalog = construct_in_memory();

        assert_eq!(catalog.name(), IN_MEMORY_PROVIDER);
        assert_eq!(catalog.find_by_alias_prefix("").map(|item| item.id), Some(1));
    }
}
