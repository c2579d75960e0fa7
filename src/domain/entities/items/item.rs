//! Item Entity Implementation
//!
//! 카탈로그가 제공하는 유일한 엔티티입니다.
//! 배우 이름, 극중 별칭(alias), 역할 설명을 하나의 레코드로 묶습니다.

use std::fmt;
use serde::{Deserialize, Serialize};

/// 카탈로그 아이템 엔티티
///
/// 데이터셋 안에서 `id` 는 유일하며, 생성 이후 값이 바뀌지 않습니다.
/// 조회 시에는 `alias` 접두사 매칭을 사용합니다.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    /// 고유 식별자
    pub id: u32,
    /// 표시 이름 (배우 이름)
    pub name: String,
    /// 조회에 사용하는 별칭 (극중 이름)
    pub alias: String,
    /// 역할 설명
    pub role: String,
}

impl Item {
    pub fn new(
        id: u32,
        name: impl Into<String>,
        alias: impl Into<String>,
        role: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            alias: alias.into(),
            role: role.into(),
        }
    }

    /// 별칭이 주어진 접두사로 시작하는지 확인합니다.
    ///
    /// 빈 접두사는 모든 아이템과 일치합니다.
    pub fn alias_starts_with(&self, prefix: &str) -> bool {
        self.alias.starts_with(prefix)
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} {} as {} ({})", self.id, self.name, self.alias, self.role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sheldon() -> Item {
        Item::new(2, "Jim Parsons", "Sheldon Cooper", "Theoretical Physicist")
    }

    #[test]
    fn test_alias_prefix_matching() {
        let item = sheldon();

        assert!(item.alias_starts_with("Sheldon"));
        assert!(item.alias_starts_with("S"));
        assert!(item.alias_starts_with("Sheldon Cooper"));
        assert!(item.alias_starts_with(""));

        // 대소문자 구분
        assert!(!item.alias_starts_with("sheldon"));
        assert!(!item.alias_starts_with("Cooper"));
    }

    #[test]
    fn test_display_format() {
        assert_eq!(
            sheldon().to_string(),
            "#2 Jim Parsons as Sheldon Cooper (Theoretical Physicist)"
        );
    }

    #[test]
    fn test_json_shape() {
        let value = serde_json::to_value(sheldon()).unwrap();

        assert_eq!(value["id"], 2);
        assert_eq!(value["name"], "Jim Parsons");
        assert_eq!(value["alias"], "Sheldon Cooper");
        assert_eq!(value["role"], "Theoretical Physicist");
    }
}
