//! # Application Error Handling System
//!
//! 로케이터와 설정 계층에서 발생하는 에러를 하나의 열거형으로 모읍니다.
//!
//! ## 에러 분류
//!
//! | 변형 | 심각도 | 발생 지점 |
//! |------|--------|-----------|
//! | `ProviderNotFound` | 치명적 | 첫 번째 `resolve()` 시 후보 없음 |
//! | `AmbiguousProvider` | 치명적 | `single` 정책에서 후보가 둘 이상 |
//! | `AlreadyInstalled` | 호출자 오류 | `ServiceLocator::install()` 중복 호출 |
//! | `ConfigError` | 시작 실패 | 환경 변수 파싱 실패 |
//! | `InternalError` | 시스템 | 외부 에러 래핑 |
//!
//! 조회 실패(접두사 불일치)는 에러가 아닙니다. `find_by_alias_prefix` 는
//! `None` 을 돌려줄 뿐이며 이 타입을 사용하지 않습니다.
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use cast_locator::core::errors::{AppError, ErrorContext};
//!
//! let value = std::env::var("CATALOG_SELECTION")
//!     .context("CATALOG_SELECTION 읽기 실패")?;
//! ```

use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// `thiserror` 로 `Error` 와 `Display` 를 자동 구현합니다.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    #[error("No provider found for contract '{contract}': {detail}")]
    ProviderNotFound {
        contract: &'static str,
        detail: String,
    },

    #[error("Multiple providers registered for contract '{contract}': {}", .candidates.join(", "))]
    AmbiguousProvider {
        contract: &'static str,
        candidates: Vec<&'static str>,
    },

    #[error("Service locator is already installed")]
    AlreadyInstalled,

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 프로세스를 계속 진행할 수 없는 에러인지 여부
    ///
    /// 계약 구현체를 찾지 못했다면 클라이언트는 아무 작업도 할 수 없으므로
    /// 즉시 종료해야 합니다.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            AppError::ProviderNotFound { .. } | AppError::AmbiguousProvider { .. }
        )
    }
}

/// 애플리케이션 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 에러에 문맥 메시지를 붙여 `AppError::InternalError` 로 바꾸는 확장 trait
pub trait ErrorContext<T> {
    fn context(self, msg: &str) -> AppResult<T>;

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}
