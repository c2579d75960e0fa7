//! # 아이템 저장소 구현
//!
//! 카탈로그의 고정 데이터셋을 소유하는 인메모리 저장소입니다.
//!
//! ## 특징
//!
//! - **지연 초기화**: 첫 번째 조회 시점에 시드 목록으로 데이터셋 생성
//! - **단 한 번의 생성**: 동시에 여러 스레드가 처음 접근해도 `OnceCell` 이
//!   시드 함수를 한 번만 실행
//! - **불변 데이터**: 생성 이후 데이터셋은 변경되지 않으며, 읽기에는 락이 필요 없음
//! - **스냅샷 반환**: `list_all()` 은 내부 벡터의 복사본을 돌려줌

use std::collections::HashSet;
use log::{debug, error};
use once_cell::sync::OnceCell;
use crate::domain::Item;

/// 기본 시드 데이터셋
///
/// 순서가 곧 삽입 순서이며, 조회 결과의 순서를 결정합니다.
pub fn seed_items() -> Vec<Item> {
    vec![
        Item::new(1, "Johnny Galecki", "Leonard Hofstadter", "Experimental Physicist"),
        Item::new(2, "Jim Parsons", "Sheldon Cooper", "Theoretical Physicist"),
        Item::new(3, "Kaley Cuoco", "Penny", "Aspiring Actress"),
        Item::new(4, "Simon Helberg", "Howard Wolowitz", "Aerospace Engineer"),
        Item::new(5, "Kunal Nayyar", "Rajesh Koothrappali", "Astrophysicist"),
        Item::new(6, "Mayim Bialik", "Amy Farrah Fowler", "Neurobiologist"),
        Item::new(7, "Melissa Rauch", "Bernadette Rostenkowski", "Microbiologist"),
    ]
}

pub struct ItemStore {
    seed: fn() -> Vec<Item>,
    items: OnceCell<Vec<Item>>,
}

impl ItemStore {
    /// 기본 시드([`seed_items`])를 사용하는 저장소
    pub fn new() -> Self {
        Self::with_seed(seed_items)
    }

    /// 임의의 시드 함수를 사용하는 저장소
    ///
    /// 시드 함수는 첫 번째 조회 시점에 정확히 한 번 호출됩니다.
    pub fn with_seed(seed: fn() -> Vec<Item>) -> Self {
        Self {
            seed,
            items: OnceCell::new(),
        }
    }

    fn items(&self) -> &[Item] {
        self.items.get_or_init(|| Self::build(self.seed))
    }

    fn build(seed: fn() -> Vec<Item>) -> Vec<Item> {
        let mut seen = HashSet::new();
        let mut items = Vec::new();

        for item in seed() {
            // 중복 id 는 먼저 나온 레코드만 유지
            if seen.insert(item.id) {
                items.push(item);
            } else {
                error!("Duplicate item id {} in seed, dropping '{}'", item.id, item.alias);
            }
        }

        debug!("Item store built with {} items", items.len());
        items
    }

    /// 모든 아이템의 복사본을 삽입 순서대로 반환합니다.
    pub fn list_all(&self) -> Vec<Item> {
        self.items().to_vec()
    }

    /// 삽입 순서대로 스캔하여 `alias` 가 `prefix` 로 시작하는 첫 아이템을 찾습니다.
    pub fn find_by_alias_prefix(&self, prefix: &str) -> Option<Item> {
        self.items()
            .iter()
            .find(|item| item.alias_starts_with(prefix))
            .cloned()
    }

    pub fn find_by_id(&self, id: u32) -> Option<Item> {
        self.items().iter().find(|item| item.id == id).cloned()
    }

    /// 데이터셋이 이미 생성되었는지 여부 (생성을 유발하지 않음)
    pub fn is_loaded(&self) -> bool {
        self.items.get().is_some()
    }

    pub fn len(&self) -> usize {
        self.items().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items().is_empty()
    }
}

impl Default for ItemStore {
    fn default() -> Self {
        Self::new()
    }
}
