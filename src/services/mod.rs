//! # Service Layer
//!
//! 계약 구현체(프로바이더)가 위치하는 계층입니다.
//!
//! - [`catalog::catalog_service`] - 인메모리 저장소에 위임하는 기본 프로바이더
//!
//! 새로운 프로바이더를 추가하려면 [`crate::core::contract::ItemCatalog`] 를
//! 구현하고 `inventory::submit!` 으로 [`crate::core::registry::ProviderRegistration`]
//! 을 제출하면 됩니다. 선택 규칙은 [`crate::core::registry`] 문서를 참고하세요.

pub mod catalog;
