//! # Item Catalog Contract
//!
//! 클라이언트가 호출할 수 있는 기능 집합입니다. 클라이언트는 이 trait 만
//! 알고 있으며, 어떤 구현체가 선택되었는지나 데이터가 어디에 보관되는지는
//! 알 수 없습니다.

use crate::domain::Item;

/// 카탈로그 계약의 등록 이름
///
/// [`ProviderRegistration::contract`](crate::core::registry::ProviderRegistration)
/// 이 이 값과 같은 등록만 디스커버리 후보가 됩니다.
pub const ITEM_CATALOG_CONTRACT: &str = "item_catalog";

/// 카탈로그 계약
///
/// 구현체는 프로세스 전역에서 공유되므로 `Send + Sync` 여야 합니다.
pub trait ItemCatalog: Send + Sync {
    /// 등록된 프로바이더 이름
    fn name(&self) -> &str;

    /// 모든 아이템을 삽입 순서대로 반환합니다.
    ///
    /// 반환값은 호출자가 소유하는 스냅샷이며, 이를 수정해도 카탈로그
    /// 내부 상태에는 영향이 없습니다.
    fn list_all(&self) -> Vec<Item>;

    /// `alias` 가 `prefix` 로 시작하는 첫 번째 아이템을 반환합니다.
    ///
    /// 일치하는 아이템이 없으면 `None` 입니다. 빈 문자열은 모든 아이템과
    /// 일치하므로 첫 번째 아이템이 반환됩니다.
    fn find_by_alias_prefix(&self, prefix: &str) -> Option<Item>;
}
