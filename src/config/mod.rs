//! # Configuration Module
//!
//! 환경 변수 기반 설정을 한곳에서 관리합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 실행 환경, 출력 형식
//! - [`locator_config`] - 프로바이더 디스커버리 설정
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 프로파일 (.env.dev / .env.prod / .env)
//! export PROFILE="dev"
//!
//! # 실행 환경 (기본 로그 레벨 결정)
//! export ENVIRONMENT="development"  # development, test, staging, production
//!
//! # 디스커버리
//! export CATALOG_PROVIDER="in_memory"
//! export CATALOG_SELECTION="lexical"   # lexical, single
//!
//! # 출력
//! export CATALOG_OUTPUT="json"         # text, json
//! ```

pub mod data_config;
pub mod locator_config;

pub use data_config::*;
pub use locator_config::*;
