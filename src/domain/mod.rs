//! # Domain Layer Module
//!
//! 도메인 계층은 카탈로그가 다루는 데이터의 형태만을 정의합니다.
//! 조회 규칙은 [`crate::core::contract`] 의 계약이, 데이터 보관은
//! [`crate::repositories`] 의 저장소가 담당합니다.
//!
//! ```text
//! Domain Layer (이 모듈)
//! └── Entities      - Item
//!      │
//!      ▼
//! Contract (ItemCatalog)
//!      │
//!      ▼
//! Backing Store (ItemStore)
//! ```

pub mod entities;

pub use entities::items::Item;
