//! 터미널 출력 포맷팅 유틸리티
//!
//! 클라이언트 바이너리가 카탈로그 내용을 출력할 때 사용하는 함수들입니다.
//! 문자열을 만드는 `format_*` 함수와 이를 표준 출력에 쓰는 `print_*` 함수로
//! 나뉩니다.

use crate::domain::Item;

/// 박스 내부 콘텐츠 너비
const CONTENT_WIDTH: usize = 50;

/// 박스 형태로 둘러싸인 제목을 만듭니다
///
/// ```text
/// ╔══════════════════════════════════════════════════╗
/// ║                   Cast Catalog                   ║
/// ╚══════════════════════════════════════════════════╝
/// ```
pub fn format_boxed_title(title: &str) -> String {
    let border = "═".repeat(CONTENT_WIDTH);
    let width = CONTENT_WIDTH;

    format!("╔{border}╗\n║{title:^width$}║\n╚{border}╝")
}

pub fn print_boxed_title(title: &str) {
    println!("{}", format_boxed_title(title));
}

/// 아이템 한 줄 출력 형식
pub fn format_item_row(item: &Item) -> String {
    format!(
        "   ├─ {:>2}  {:<16} {:<26} {}",
        item.id, item.name, item.alias, item.role
    )
}

pub fn print_item_rows(items: &[Item]) {
    for item in items {
        println!("{}", format_item_row(item));
    }
    println!("   └─ {} items", items.len());
}

/// 접두사 조회 결과 한 줄 출력 형식
pub fn format_lookup_result(prefix: &str, found: Option<&Item>) -> String {
    match found {
        Some(item) => format!("✓ '{}' → {}", prefix, item),
        None => format!("✗ '{}' → not found", prefix),
    }
}

pub fn print_lookup_result(prefix: &str, found: Option<&Item>) {
    println!("{}", format_lookup_result(prefix, found));
}

/// 로케이터가 선택한 프로바이더 요약
pub fn print_provider_summary(provider: &str, item_count: usize) {
    println!("   🔧 Provider: {}", provider);
    println!("   📦 Items: {}", item_count);
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boxed_title_is_centered() {
        let title = format_boxed_title("Cast Catalog");
        let lines: Vec<&str> = title.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with('╔') && lines[0].ends_with('╗'));
        assert!(lines[1].contains("Cast Catalog"));
        // 모든 줄의 문자 수가 동일해야 함
        assert_eq!(lines[0].chars().count(), lines[1].chars().count());
        assert_eq!(lines[1].chars().count(), lines[2].chars().count());
    }

    #[test]
    fn test_lookup_result_formats() {
        let item = Item::new(3, "Kaley Cuoco", "Penny", "Aspiring Actress");

        assert_eq!(
            format_lookup_result("Pen", Some(&item)),
            "✓ 'Pen' → #3 Kaley Cuoco as Penny (Aspiring Actress)"
        );
        assert_eq!(format_lookup_result("Zzz", None), "✗ 'Zzz' → not found");
    }

    #[test]
    fn test_item_row_contains_all_fields() {
        let item = Item::new(2, "Jim Parsons", "Sheldon Cooper", "Theoretical Physicist");
        let row = format_item_row(&item);

        assert!(row.contains(" 2"));
        assert!(row.contains("Jim Parsons"));
        assert!(row.contains("Sheldon Cooper"));
        assert!(row.ends_with("Theoretical Physicist"));
    }
}
