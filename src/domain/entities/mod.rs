//! # Domain Entities Module
//!
//! 카탈로그 도메인의 핵심 엔티티를 정의합니다.
//!
//! ## 주요 역할
//!
//! - **도메인 모델링**: 카탈로그 레코드를 Rust 구조체로 표현
//! - **불변성**: 데이터셋이 만들어진 뒤에는 어떤 엔티티도 수정되지 않음
//! - **직렬화**: `serde` 를 통한 JSON 출력 지원
//!
//! ## 모듈 구조
//!
//! ```text
//! entities/
//! ├── mod.rs          ← 이 파일
//! └── items/          ← 카탈로그 아이템 엔티티
//!     ├── mod.rs
//!     └── item.rs     ← Item 엔티티
//! ```

pub mod items;
