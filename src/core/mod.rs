//! # Core Framework Module
//!
//! 계약, 프로바이더 디스커버리, 에러 처리를 담당하는 핵심 모듈입니다.
//!
//! ## 모듈 구성
//!
//! ### [`contract`] - 기능 계약
//! - **ItemCatalog**: 클라이언트가 호출할 수 있는 유일한 인터페이스
//! - **ITEM_CATALOG_CONTRACT**: 프로바이더 등록 시 사용하는 계약 이름
//!
//! ### [`registry`] - 프로바이더 로케이터
//! - **ProviderRegistration**: `inventory` 기반 링크 타임 등록
//! - **Discovery**: 후보 수집, 사전순 정렬, 선택 정책 적용
//! - **ServiceLocator**: resolve-once 캐시와 프로세스 전역 설치
//!
//! ### [`errors`] - 통합 에러 처리
//! - **AppError**: `thiserror` 기반 애플리케이션 에러
//! - **ErrorContext**: 외부 에러에 문맥을 붙이는 확장 trait
//!
//! ## 초기화 지점
//!
//! 프로세스에는 두 개의 지연 초기화 지점이 있습니다.
//!
//! | 지점 | 트리거 | 보호 수단 |
//! |------|--------|-----------|
//! | 프로바이더 선택 | 첫 `ServiceLocator::resolve()` | `OnceCell::get_or_try_init` |
//! | 데이터셋 생성 | 첫 `list_all()` / `find_by_alias_prefix()` | `OnceCell::get_or_init` |
//!
//! 둘 다 초기화가 끝난 뒤에는 불변이며 읽기에 락이 필요 없습니다.
//!
//! ## 트러블슈팅
//!
//! ### 프로바이더 미등록
//! ```text
//! Error: No provider found for contract 'item_catalog': no providers are registered
//! ```
//! **해결**: 구현체 모듈에서 `inventory::submit!` 으로 등록했는지 확인
//!
//! ### 프로바이더 중복
//! ```text
//! Error: Multiple providers registered for contract 'item_catalog': alpha, beta
//! ```
//! **해결**: `CATALOG_PROVIDER` 로 하나를 지정하거나 `CATALOG_SELECTION=lexical` 사용

pub mod contract;
pub mod errors;
pub mod registry;

pub use contract::*;
pub use errors::*;
pub use registry::*;
