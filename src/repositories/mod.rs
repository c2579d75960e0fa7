//! # Repository Layer
//!
//! 데이터를 실제로 소유하는 계층입니다. 이 크레이트에는 고정 데이터셋을
//! 메모리에 보관하는 [`items::item_repo::ItemStore`] 하나만 있습니다.
//!
//! 저장소는 계약([`crate::core::contract::ItemCatalog`])을 직접 구현하지
//! 않습니다. 계약 구현은 [`crate::services`] 의 어댑터가 맡고, 로케이터는
//! 저장소의 내부 표현을 알지 못합니다.

pub mod items;
