//! # 카탈로그 클라이언트
//!
//! 로케이터로부터 계약을 얻어 호출하는 소비자 측 코드입니다.
//! 클라이언트는 [`ItemCatalog`](crate::core::contract::ItemCatalog) 만 다루며,
//! 구체적인 프로바이더나 저장소 타입을 참조하지 않습니다.

use serde::Serialize;
use crate::core::errors::{AppResult, ErrorContext};
use crate::core::registry::ServiceLocator;
use crate::domain::Item;

/// 클라이언트가 처리할 요청
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogRequest {
    /// 전체 목록
    ListAll,
    /// 접두사별 조회
    Lookup(Vec<String>),
}

impl CatalogRequest {
    /// 명령행 인자에서 요청을 만듭니다. 인자가 없으면 전체 목록입니다.
    pub fn from_args<I>(args: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let prefixes: Vec<String> = args.into_iter().collect();
        if prefixes.is_empty() {
            CatalogRequest::ListAll
        } else {
            CatalogRequest::Lookup(prefixes)
        }
    }
}

/// 접두사 조회 한 건의 결과
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LookupOutcome {
    pub prefix: String,
    pub item: Option<Item>,
}

pub struct CatalogClient<'a> {
    locator: &'a ServiceLocator,
}

impl<'a> CatalogClient<'a> {
    pub fn new(locator: &'a ServiceLocator) -> Self {
        Self { locator }
    }

    pub fn list_all(&self) -> AppResult<Vec<Item>> {
        Ok(self.locator.resolve()?.list_all())
    }

    pub fn find(&self, prefix: &str) -> AppResult<Option<Item>> {
        Ok(self.locator.resolve()?.find_by_alias_prefix(prefix))
    }

    pub fn lookup_all(&self, prefixes: &[String]) -> AppResult<Vec<LookupOutcome>> {
        let catalog = self.locator.resolve()?;

        Ok(prefixes
            .iter()
            .map(|prefix| LookupOutcome {
                prefix: prefix.clone(),
                item: catalog.find_by_alias_prefix(prefix),
            })
            .collect())
    }

    /// 요청 결과를 JSON 문자열로 만듭니다.
    pub fn to_json(&self, request: &CatalogRequest) -> AppResult<String> {
        match request {
            CatalogRequest::ListAll => serde_json::to_string_pretty(&self.list_all()?)
                .context("카탈로그 목록 직렬화 실패"),
            CatalogRequest::Lookup(prefixes) => serde_json::to_string_pretty(&self.lookup_all(prefixes)?)
                .context("조회 결과 직렬화 실패"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LocatorConfig;
    use crate::core::contract::ITEM_CATALOG_CONTRACT;
    use crate::core::errors::AppError;

    fn locator() -> ServiceLocator {
        ServiceLocator::new(LocatorConfig::default().with_provider("in_memory"))
    }

    #[test]
    fn test_request_from_args() {
        assert_eq!(CatalogRequest::from_args(Vec::<String>::new()), CatalogRequest::ListAll);
        assert_eq!(
            CatalogRequest::from_args(vec!["Sheldon".to_string()]),
            CatalogRequest::Lookup(vec!["Sheldon".to_string()])
        );
    }

    #[test]
    fn test_sheldon_scenario() {
        let locator = locator();
        let client = CatalogClient::new(&locator);

        let sheldon = Item::new(2, "Jim Parsons", "Sheldon Cooper", "Theoretical Physicist");
        assert_eq!(client.find("Sheldon").unwrap(), Some(sheldon.clone()));
        assert_eq!(client.find("Zzz").unwrap(), None);

        let all = client.list_all().unwrap();
        assert_eq!(all.len(), 7);
        assert_eq!(all[1], sheldon);
    }

    #[test]
    fn test_client_mutation_does_not_leak_into_catalog() {
        let locator = locator();
        let client = CatalogClient::new(&locator);

        let mut first = client.list_all().unwrap();
        first.reverse();
        first.truncate(1);

        let second = client.list_all().unwrap();
        assert_eq!(second.len(), 7);
        assert_eq!(second[0].id, 1);
    }

    #[test]
    fn test_lookup_all_preserves_prefix_order() {
        let locator = locator();
        let client = CatalogClient::new(&locator);

        let prefixes = vec!["Pen".to_string(), "Zzz".to_string(), "".to_string()];
        let outcomes = client.lookup_all(&prefixes).unwrap();

        assert_eq!(outcomes.len(), 3);
        assert_eq!(outcomes[0].item.as_ref().map(|item| item.id), Some(3));
        assert_eq!(outcomes[1].item, None);
        assert_eq!(outcomes[2].item.as_ref().map(|item| item.id), Some(1));
    }

    #[test]
    fn test_json_lookup_output() {
        let locator = locator();
        let client = CatalogClient::new(&locator);

        let json = client
            .to_json(&CatalogRequest::Lookup(vec!["Amy".to_string(), "Zzz".to_string()]))
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value[0]["prefix"], "Amy");
        assert_eq!(value[0]["item"]["name"], "Mayim Bialik");
        assert!(value[1]["item"].is_null());
    }

    #[test]
    fn test_json_list_output() {
        let locator = locator();
        let client = CatalogClient::new(&locator);

        let json = client.to_json(&CatalogRequest::ListAll).unwrap();
        let items: Vec<Item> = serde_json::from_str(&json).unwrap();

        assert_eq!(items, client.list_all().unwrap());
    }

    #[test]
    fn test_missing_provider_surfaces_error() {
        let locator = ServiceLocator::with_registrations(LocatorConfig::default(), Vec::new());
        let client = CatalogClient::new(&locator);

        assert!(matches!(
            client.list_all(),
            Err(AppError::ProviderNotFound { contract: ITEM_CATALOG_CONTRACT, .. })
        ));
    }
}
