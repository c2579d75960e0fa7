use std::process::ExitCode;
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};
use cast_locator::config::{Environment, LocatorConfig, OutputConfig, OutputFormat};
use cast_locator::core::errors::AppResult;
use cast_locator::core::registry::ServiceLocator;
use cast_locator::handlers::catalog_client::{CatalogClient, CatalogRequest};
use cast_locator::utils::display_terminal::{
    print_boxed_title, print_item_rows, print_lookup_result, print_provider_summary,
};

fn main() -> ExitCode {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    info!("🚀 캐스트 카탈로그 로케이터 시작중...");

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("❌ {}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> AppResult<()> {
    let config = LocatorConfig::from_env()?;
    let locator = ServiceLocator::install(config)?;

    // 프로바이더가 없으면 여기서 바로 실패
    let catalog = locator.resolve()?;
    info!("✅ 프로바이더 '{}' 선택 완료", catalog.name());

    let client = CatalogClient::new(locator);
    let request = CatalogRequest::from_args(std::env::args().skip(1));

    match OutputConfig::format() {
        OutputFormat::Json => println!("{}", client.to_json(&request)?),
        OutputFormat::Text => {
            print_boxed_title("📚 CAST CATALOG");
            match request {
                CatalogRequest::ListAll => {
                    let items = client.list_all()?;
                    print_provider_summary(catalog.name(), items.len());
                    print_item_rows(&items);
                }
                CatalogRequest::Lookup(prefixes) => {
                    for outcome in client.lookup_all(&prefixes)? {
                        print_lookup_result(&outcome.prefix, outcome.item.as_ref());
                    }
                }
            }
        }
    }

    Ok(())
}

fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    match profile.as_str() {
        "prod" => {
            if let Err(e) = dotenv::from_filename(".env.prod") {
                eprintln!(".env.prod 파일 로드 실패: {}", e);
            }
        }
        "dev" => {
            // 개발 프로파일의 .env.dev 는 선택 사항
            dotenv::from_filename(".env.dev").ok();
        }
        _ => {
            dotenv().ok();
        }
    }
}

fn init_logging() {
    let environment = Environment::current();
    env_logger::init_from_env(Env::default().default_filter_or(environment.default_log_filter()));
}
