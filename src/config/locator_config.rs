//! 프로바이더 디스커버리 설정
//!
//! 어떤 프로바이더를 선택할지, 후보가 여러 개일 때 어떻게 처리할지를
//! 환경 변수로 제어합니다.
//!
//! | 환경 변수 | 값 | 기본값 |
//! |-----------|----|--------|
//! | `CATALOG_PROVIDER` | 프로바이더 등록 이름 | (없음) |
//! | `CATALOG_SELECTION` | `lexical` / `single` | `lexical` |

use std::env;
use std::fmt;
use crate::core::errors::{AppError, AppResult};
use crate::utils::string_utils::clean_optional_string;

/// 후보가 여러 개일 때의 선택 정책
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionPolicy {
    /// 프로바이더 이름의 사전순으로 정렬해 첫 번째를 선택
    #[default]
    Lexical,
    /// 정확히 하나의 후보만 허용하고, 둘 이상이면 에러
    Single,
}

impl SelectionPolicy {
    pub fn parse(value: &str) -> AppResult<Self> {
        match value.trim().to_lowercase().as_str() {
            "lexical" => Ok(SelectionPolicy::Lexical),
            "single" => Ok(SelectionPolicy::Single),
            other => Err(AppError::ConfigError(format!(
                "CATALOG_SELECTION 값이 올바르지 않습니다: '{}' (lexical, single 중 하나)",
                other
            ))),
        }
    }
}

impl fmt::Display for SelectionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionPolicy::Lexical => write!(f, "lexical"),
            SelectionPolicy::Single => write!(f, "single"),
        }
    }
}

/// 로케이터 설정
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocatorConfig {
    /// 선호 프로바이더 이름. 지정되면 이 이름의 등록만 후보가 됩니다.
    pub provider: Option<String>,
    pub selection: SelectionPolicy,
}

impl LocatorConfig {
    /// 프로세스 환경 변수에서 설정을 읽습니다.
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 임의의 키-값 조회 함수로부터 설정을 만듭니다.
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let provider = clean_optional_string(lookup("CATALOG_PROVIDER"));
        let selection = match clean_optional_string(lookup("CATALOG_SELECTION")) {
            Some(value) => SelectionPolicy::parse(&value)?,
            None => SelectionPolicy::default(),
        };

        Ok(Self { provider, selection })
    }

    pub fn with_provider(mut self, name: impl Into<String>) -> Self {
        self.provider = Some(name.into());
        self
    }

    pub fn with_selection(mut self, selection: SelectionPolicy) -> Self {
        self.selection = selection;
        self
    }
}
