//! 캐스트 카탈로그 로케이터
//!
//! 프로세스 안에서 카탈로그 계약의 구현체를 단 한 번 찾아 선택하고,
//! 고정된 인메모리 데이터셋을 조회하는 라이브러리입니다.
//!
//! # Features
//!
//! - **계약 기반 접근**: 클라이언트는 `ItemCatalog` trait 만 사용
//! - **링크 타임 등록**: `inventory` 로 프로바이더 자동 수집
//! - **resolve-once**: 첫 호출에서 선택된 프로바이더를 프로세스 수명 동안 캐싱
//! - **지연 데이터셋**: 첫 조회 시점에 한 번만 생성되는 불변 데이터
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │     Client      │ ← handlers::catalog_client
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ ServiceLocator  │ ← core::registry (디스커버리 + 캐시)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Contract       │ ← core::contract::ItemCatalog
//! │  Adapter        │ ← services::catalog::catalog_service
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Backing Store  │ ← repositories::items::item_repo
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use cast_locator::config::LocatorConfig;
//! use cast_locator::core::registry::ServiceLocator;
//! use cast_locator::handlers::catalog_client::CatalogClient;
//!
//! let locator = ServiceLocator::install(LocatorConfig::from_env()?)?;
//! let client = CatalogClient::new(locator);
//!
//! let sheldon = client.find("Sheldon")?;
//! ```

pub mod core;
pub mod config;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod handlers;
pub mod utils;
