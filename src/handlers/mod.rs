//! # Client Handlers Module
//!
//! 로케이터에서 계약을 받아 실제 요청을 처리하는 소비자 계층입니다.
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   main.rs (명령행 인자, 출력)
//! ├─────────────────────────────────────────────┤
//!   Handlers (이 모듈) - CatalogClient          ← Client
//! ├─────────────────────────────────────────────┤
//!   ServiceLocator → dyn ItemCatalog            ← Contract
//! └─────────────────────────────────────────────┘
//! ```

pub mod catalog_client;
