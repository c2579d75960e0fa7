//! # Provider Registry - 단일 프로바이더 로케이터
//!
//! 이 모듈은 카탈로그 계약([`ItemCatalog`])의 구현체를 찾아내고, 그중 정확히
//! 하나를 선택해 프로세스 수명 동안 캐싱하는 로케이터를 담당합니다.
//!
//! ## 주요 구성 요소
//!
//! ### ProviderRegistration (프로바이더 매니페스트)
//! - **inventory 기반**: `inventory::submit!` 으로 링크 타임에 등록 정보 수집
//! - **계약 → 구현 매핑**: `contract` 이름과 프로바이더 `name`, 생성 함수로 구성
//!
//! ### Discovery (후보 탐색)
//! - 등록 정보 중 계약 이름이 일치하는 것만 후보로 선택
//! - `CATALOG_PROVIDER` 가 설정되어 있으면 해당 이름으로 후보를 한정
//! - 후보는 항상 프로바이더 이름의 사전순으로 정렬
//!
//! ### ServiceLocator (resolve-once 캐시)
//! - **지연 초기화**: 첫 `resolve()` 호출 시에만 디스커버리 실행
//! - **Thread-safe**: `OnceCell` 로 동시 첫 접근에서도 생성은 한 번만 수행
//! - **불변 캐시**: 한 번 선택된 프로바이더는 교체되지 않음
//!
//! ## 동작 원리
//!
//! ```text
//! 1. 링크 타임 (Registration)
//!    └─ inventory::submit! { ProviderRegistration::new(...) }
//!
//! 2. 시작 시점 (Install)
//!    └─ ServiceLocator::install(config) → 프로세스 전역 로케이터 1회 생성
//!
//! 3. 첫 번째 resolve()
//!    ├─ Discovery::select() → 후보 수집, 정렬, 정책 적용
//!    ├─ (registration.constructor)() → Arc<dyn ItemCatalog>
//!    └─ OnceCell 에 저장
//!
//! 4. 이후 resolve()
//!    └─ 캐시된 Arc 복제 후 반환 (락 없음)
//! ```
//!
//! ## 상태 전이
//!
//! ```text
//! {Unresolved} ──첫 resolve() 성공──▶ {Resolved, cached}
//! ```
//!
//! `Resolved` 에서 `Unresolved` 로 돌아가는 경로는 없습니다. 디스커버리가
//! 실패한 경우에는 캐시가 채워지지 않으며, 에러가 호출자에게 전달됩니다.
//!
//! ## 선택 정책
//!
//! | 후보 수 | `Lexical` | `Single` |
//! |---------|-----------|----------|
//! | 0 | `ProviderNotFound` | `ProviderNotFound` |
//! | 1 | 해당 후보 | 해당 후보 |
//! | 2+ | 사전순 첫 번째 (경고 로그) | `AmbiguousProvider` |
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use cast_locator::config::LocatorConfig;
//! use cast_locator::core::registry::ServiceLocator;
//!
//! let locator = ServiceLocator::install(LocatorConfig::from_env()?)?;
//! let catalog = locator.resolve()?;
//!
//! for item in catalog.list_all() {
//!     println!("{}", item);
//! }
//! ```

use std::sync::Arc;
use log::{debug, error, info, warn};
use once_cell::sync::{Lazy, OnceCell};
use crate::config::{LocatorConfig, SelectionPolicy};
use crate::core::contract::{ItemCatalog, ITEM_CATALOG_CONTRACT};
use crate::core::errors::{AppError, AppResult};

/// 프로바이더 등록 정보
///
/// `inventory::submit!` 으로 제출되어 링크 타임에 수집됩니다.
///
/// ```rust,ignore
/// inventory::submit! {
///     ProviderRegistration::new(ITEM_CATALOG_CONTRACT, "in_memory", construct)
/// }
/// ```
pub struct ProviderRegistration {
    /// 구현하는 계약의 이름
    pub contract: &'static str,
    /// 프로바이더의 고유 이름 (선택 및 정렬 키)
    pub name: &'static str,
    /// 인스턴스 생성 함수. 로케이터당 최대 한 번 호출됩니다.
    pub constructor: fn() -> Arc<dyn ItemCatalog>,
}

impl ProviderRegistration {
    pub const fn new(
        contract: &'static str,
        name: &'static str,
        constructor: fn() -> Arc<dyn ItemCatalog>,
    ) -> Self {
        Self {
            contract,
            name,
            constructor,
        }
    }
}

inventory::collect!(ProviderRegistration);

/// 링크된 모든 등록 정보 (이름순 정렬)
///
/// 첫 접근 시 한 번만 구성됩니다.
static REGISTERED_PROVIDERS: Lazy<Vec<&'static ProviderRegistration>> = Lazy::new(|| {
    let mut registrations: Vec<_> = inventory::iter::<ProviderRegistration>().collect();
    registrations.sort_by(|a, b| a.name.cmp(b.name));

    debug!("Provider registry loaded: {} registrations", registrations.len());
    registrations
});

/// 후보 프로바이더 탐색기
pub struct Discovery {
    registrations: Vec<&'static ProviderRegistration>,
}

impl Discovery {
    /// `inventory` 로 수집된 등록 정보를 사용합니다.
    pub fn from_inventory() -> Self {
        Self {
            registrations: REGISTERED_PROVIDERS.clone(),
        }
    }

    /// 명시적으로 주어진 등록 정보만 사용합니다.
    pub fn from_registrations(registrations: Vec<&'static ProviderRegistration>) -> Self {
        Self { registrations }
    }

    /// 계약에 등록된 프로바이더 이름 목록 (사전순)
    pub fn registered_names(&self, contract: &str) -> Vec<&'static str> {
        let mut names: Vec<_> = self
            .registrations
            .iter()
            .filter(|registration| registration.contract == contract)
            .map(|registration| registration.name)
            .collect();
        names.sort_unstable();
        names
    }

    /// 계약과 선호 이름에 맞는 후보를 사전순으로 반환합니다.
    pub fn candidates(
        &self,
        contract: &str,
        preferred: Option<&str>,
    ) -> Vec<&'static ProviderRegistration> {
        let mut candidates: Vec<_> = self
            .registrations
            .iter()
            .copied()
            .filter(|registration| registration.contract == contract)
            .filter(|registration| preferred.is_none_or(|name| registration.name == name))
            .collect();
        candidates.sort_by(|a, b| a.name.cmp(b.name));
        candidates
    }

    /// 설정에 따라 정확히 하나의 후보를 선택합니다.
    pub fn select(
        &self,
        contract: &'static str,
        config: &LocatorConfig,
    ) -> AppResult<&'static ProviderRegistration> {
        let preferred = config.provider.as_deref();
        let candidates = self.candidates(contract, preferred);

        let Some(first) = candidates.first().copied() else {
            let registered = self.registered_names(contract);
            let detail = match preferred {
                Some(name) if !registered.is_empty() => format!(
                    "configured provider '{}' is not registered (registered: {})",
                    name,
                    registered.join(", ")
                ),
                Some(name) => format!("configured provider '{}' is not registered", name),
                None => "no providers are registered".to_string(),
            };
            return Err(AppError::ProviderNotFound { contract, detail });
        };

        if candidates.len() > 1 {
            let names: Vec<_> = candidates.iter().map(|candidate| candidate.name).collect();

            match config.selection {
                SelectionPolicy::Single => {
                    return Err(AppError::AmbiguousProvider {
                        contract,
                        candidates: names,
                    });
                }
                SelectionPolicy::Lexical => {
                    warn!(
                        "{} providers registered for '{}' ({}), selecting '{}'",
                        names.len(),
                        contract,
                        names.join(", "),
                        first.name
                    );
                }
            }
        }

        Ok(first)
    }
}

/// 선택되어 캐시된 프로바이더
struct ResolvedProvider {
    name: &'static str,
    catalog: Arc<dyn ItemCatalog>,
}

/// 카탈로그 계약 로케이터
///
/// 첫 `resolve()` 에서 프로바이더를 하나 선택해 생성하고, 이후 모든 호출에
/// 같은 인스턴스를 돌려줍니다. 테스트나 내장 용도로는 값으로 직접 만들어
/// 쓸 수 있고, 애플리케이션에서는 [`ServiceLocator::install`] 로 프로세스
/// 전역 인스턴스를 한 번 만들어 소비자에게 참조로 넘깁니다.
pub struct ServiceLocator {
    config: LocatorConfig,
    discovery: Discovery,
    resolved: OnceCell<ResolvedProvider>,
}

static GLOBAL_LOCATOR: OnceCell<ServiceLocator> = OnceCell::new();

impl ServiceLocator {
    /// `inventory` 등록 정보를 사용하는 로케이터
    pub fn new(config: LocatorConfig) -> Self {
        Self::with_discovery(config, Discovery::from_inventory())
    }

    /// 주어진 등록 정보만 사용하는 로케이터
    pub fn with_registrations(
        config: LocatorConfig,
        registrations: Vec<&'static ProviderRegistration>,
    ) -> Self {
        Self::with_discovery(config, Discovery::from_registrations(registrations))
    }

    pub fn with_discovery(config: LocatorConfig, discovery: Discovery) -> Self {
        Self {
            config,
            discovery,
            resolved: OnceCell::new(),
        }
    }

    /// 프로세스 전역 로케이터를 설치합니다.
    ///
    /// 프로세스에서 단 한 번만 성공하며, 두 번째 호출부터는
    /// `AppError::AlreadyInstalled` 를 반환합니다. 동시에 호출되어도
    /// 하나의 호출만 설치에 성공합니다.
    pub fn install(config: LocatorConfig) -> AppResult<&'static ServiceLocator> {
        let mut installed = false;
        let locator = GLOBAL_LOCATOR.get_or_init(|| {
            installed = true;
            ServiceLocator::new(config)
        });

        if installed {
            info!("Service locator installed (selection: {})", locator.config.selection);
            Ok(locator)
        } else {
            Err(AppError::AlreadyInstalled)
        }
    }

    /// 설치된 전역 로케이터 (설치 전이면 `None`)
    pub fn global() -> Option<&'static ServiceLocator> {
        GLOBAL_LOCATOR.get()
    }

    /// 카탈로그 계약 구현체를 반환합니다.
    ///
    /// 첫 호출에서만 디스커버리와 생성이 수행됩니다. 여러 스레드가 동시에
    /// 처음 호출하면 하나의 스레드만 초기화를 실행하고 나머지는 완료를
    /// 기다린 뒤 같은 인스턴스를 받습니다.
    pub fn resolve(&self) -> AppResult<Arc<dyn ItemCatalog>> {
        if let Some(resolved) = self.resolved.get() {
            return Ok(Arc::clone(&resolved.catalog));
        }

        let resolved = self.resolved.get_or_try_init(|| {
            let registration = self
                .discovery
                .select(ITEM_CATALOG_CONTRACT, &self.config)
                .inspect_err(|e| error!("Provider resolution failed: {}", e))?;

            let catalog = (registration.constructor)();
            info!(
                "Resolved provider '{}' for contract '{}'",
                registration.name, registration.contract
            );

            Ok::<_, AppError>(ResolvedProvider {
                name: registration.name,
                catalog,
            })
        })?;

        Ok(Arc::clone(&resolved.catalog))
    }

    /// 선택된 프로바이더 이름 (아직 resolve 전이면 `None`)
    pub fn provider_name(&self) -> Option<&'static str> {
        self.resolved.get().map(|resolved| resolved.name)
    }

    pub fn is_resolved(&self) -> bool {
        self.resolved.get().is_some()
    }

    pub fn config(&self) -> &LocatorConfig {
        &self.config
    }
}
