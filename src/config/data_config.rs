//! 실행 환경 및 출력 설정 관리 모듈
//!
//! 실행 환경(프로파일)과 클라이언트 출력 형식을 관리합니다.

use std::env;

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    /// 개발 환경 - 상세 로그 출력
    Development,
    /// 테스트 환경 - 자동화된 테스트용 설정
    Test,
    /// 스테이징 환경 - 프로덕션 유사 환경
    Staging,
    /// 프로덕션 환경
    Production,
}

impl Environment {
    /// 현재 실행 환경을 감지합니다.
    ///
    /// `ENVIRONMENT` 환경 변수를 확인하며, 설정되지 않은 경우
    /// `Production`을 기본값으로 사용합니다.
    pub fn current() -> Self {
        Self::parse(&env::var("ENVIRONMENT").unwrap_or_else(|_| "production".to_string()))
    }

    /// 문자열에서 Environment를 생성합니다.
    ///
    /// 알 수 없는 값인 경우 `Production`을 반환합니다.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }

    /// 환경별 기본 로그 필터
    ///
    /// `RUST_LOG` 가 지정되지 않았을 때 `env_logger` 에 전달됩니다.
    pub fn default_log_filter(&self) -> &'static str {
        match self {
            Environment::Development => "debug",
            Environment::Test => "warn",
            Environment::Staging | Environment::Production => "info",
        }
    }
}

/// 클라이언트 출력 형식
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// 사람이 읽기 좋은 표 형식
    #[default]
    Text,
    /// JSON 형식
    Json,
}

pub struct OutputConfig;

impl OutputConfig {
    /// `CATALOG_OUTPUT` 환경 변수에서 출력 형식을 읽습니다.
    ///
    /// 인식할 수 없는 값은 `Text` 로 처리합니다.
    pub fn format() -> OutputFormat {
        Self::format_from(env::var("CATALOG_OUTPUT").ok().as_deref())
    }

    pub fn format_from(value: Option<&str>) -> OutputFormat {
        match value.map(|v| v.trim().to_lowercase()).as_deref() {
            Some("json") => OutputFormat::Json,
            _ => OutputFormat::Text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_from_string() {
        assert_eq!(Environment::parse("development"), Environment::Development);
        assert_eq!(Environment::parse("DEV"), Environment::Development);
        assert_eq!(Environment::parse("test"), Environment::Test);
        assert_eq!(Environment::parse("stage"), Environment::Staging);
        assert_eq!(Environment::parse("production"), Environment::Production);
        assert_eq!(Environment::parse("unknown"), Environment::Production);
    }

    #[test]
    fn test_default_log_filter_for_each_environment() {
        assert_eq!(Environment::Development.default_log_filter(), "debug");
        assert_eq!(Environment::Test.default_log_filter(), "warn");
        assert_eq!(Environment::Staging.default_log_filter(), "info");
        assert_eq!(Environment::Production.default_log_filter(), "info");
    }

    #[test]
    fn test_output_format_parsing() {
        assert_eq!(OutputConfig::format_from(None), OutputFormat::Text);
        assert_eq!(OutputConfig::format_from(Some("json")), OutputFormat::Json);
        assert_eq!(OutputConfig::format_from(Some(" JSON ")), OutputFormat::Json);
        assert_eq!(OutputConfig::format_from(Some("yaml")), OutputFormat::Text);
    }
}
