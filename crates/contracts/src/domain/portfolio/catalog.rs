//! Разбор каталога работ и фильтрация по категории/поиску.
//!
//! Формат файла: первая строка — заголовок, дальше по одной работе на
//! строку, поля разделены запятой, категории внутри четвёртого поля —
//! символом `、`. Кавычки и экранирование не поддерживаются: запятая
//! внутри значения ломает строку (известное ограничение формата).

use std::collections::BTreeSet;

use crate::domain::portfolio::aggregate::PortfolioItem;

/// Разделитель полей в строке каталога
pub const FIELD_DELIMITER: char = ',';

/// Разделитель категорий внутри четвёртого поля
pub const CATEGORY_DELIMITER: char = '、';

/// Служебное значение «все категории» (фильтр по категории выключен).
/// Как есть не показывается — селекторы подставляют человекочитаемую метку.
pub const CATEGORY_ALL: &str = "__all__";

/// Разбирает текст каталога в список работ, сохраняя порядок строк.
///
/// Строки, не прошедшие валидацию (меньше четырёх полей, пустое имя или
/// ссылка, пустой список категорий), отбрасываются молча — диагностика
/// уходит только в лог. Пустой результат — забота вызывающего: для
/// галереи это фатальная ошибка загрузки.
pub fn parse_catalog(text: &str) -> Vec<PortfolioItem> {
    let normalized = text.replace("\r\n", "\n").replace('\r', "\n");

    normalized
        .lines()
        .skip(1)
        .filter(|line| !line.trim().is_empty())
        .filter_map(parse_row)
        .collect()
}

fn parse_row(line: &str) -> Option<PortfolioItem> {
    let fields: Vec<&str> = line.split(FIELD_DELIMITER).collect();
    if fields.len() < 4 {
        log::debug!("строка каталога отброшена, полей меньше 4: {:?}", line);
        return None;
    }

    let name = fields[0].trim();
    let url = fields[1].trim();
    let image = fields[2].trim();

    // Поля после четвёртого игнорируются
    let categories: Vec<String> = fields[3]
        .split(CATEGORY_DELIMITER)
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(str::to_string)
        .collect();

    if name.is_empty() || url.is_empty() || categories.is_empty() {
        log::debug!("строка каталога отброшена, пустые обязательные поля: {:?}", line);
        return None;
    }

    Some(PortfolioItem {
        name: name.to_string(),
        url: url.to_string(),
        image_url: (!image.is_empty()).then(|| image.to_string()),
        categories,
    })
}

/// Список категорий для селекторов: уникальные значения по всем работам,
/// по возрастанию, с [`CATEGORY_ALL`] в начале.
///
/// Чистая функция от набора работ; инкрементально не поддерживается,
/// при необходимости просто пересчитывается.
pub fn extract_categories(items: &[PortfolioItem]) -> Vec<String> {
    let unique: BTreeSet<&str> = items
        .iter()
        .flat_map(|item| item.categories.iter())
        .map(String::as_str)
        .collect();

    let mut result = Vec::with_capacity(unique.len() + 1);
    result.push(CATEGORY_ALL.to_string());
    result.extend(unique.into_iter().map(str::to_string));
    result
}

/// Фильтрует работы по выбранной категории и строке поиска.
///
/// Категория сравнивается точно, с учётом регистра; поиск — по вхождению
/// подстроки в имя без учёта регистра. Предикаты независимы, порядок
/// применения на результат не влияет. Порядок выживших работ совпадает
/// с исходным.
pub fn filter_items(items: &[PortfolioItem], category: &str, search: &str) -> Vec<PortfolioItem> {
    let search_lower = search.to_lowercase();

    items
        .iter()
        .filter(|item| category == CATEGORY_ALL || item.categories.iter().any(|c| c == category))
        .filter(|item| search_lower.is_empty() || item.name.to_lowercase().contains(&search_lower))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "Название,Ссылка,Картинка,Категории\n\
        A,http://a,,Cat1、Cat2\n\
        B,http://b,img.jpg,Cat2\n";

    fn names(items: &[PortfolioItem]) -> Vec<&str> {
        items.iter().map(|i| i.name.as_str()).collect()
    }

    #[test]
    fn test_parse_basic() {
        let items = parse_catalog(SAMPLE);
        assert_eq!(names(&items), vec!["A", "B"]);
        assert_eq!(items[0].image_url, None);
        assert_eq!(items[0].categories, vec!["Cat1", "Cat2"]);
        assert_eq!(items[1].image_url.as_deref(), Some("img.jpg"));
    }

    #[test]
    fn test_parse_skips_short_rows() {
        let text = "h1,h2,h3,h4\nA,http://a,,Cat1\nтолько имя,и ссылка\nB,http://b,,Cat2\n";
        let items = parse_catalog(text);
        assert_eq!(names(&items), vec!["A", "B"]);
    }

    #[test]
    fn test_parse_skips_rows_without_categories() {
        let text = "h1,h2,h3,h4\nA,http://a,img.jpg,\nB,http://b,,   、 、\nC,http://c,,Cat1\n";
        let items = parse_catalog(text);
        assert_eq!(names(&items), vec!["C"]);
    }

    #[test]
    fn test_parse_skips_rows_without_name_or_url() {
        let text = "h1,h2,h3,h4\n  ,http://a,,Cat1\nB,   ,,Cat1\nC,http://c,,Cat1\n";
        let items = parse_catalog(text);
        assert_eq!(names(&items), vec!["C"]);
    }

    #[test]
    fn test_parse_trims_fields_and_normalizes_line_endings() {
        let text = "h1,h2,h3,h4\r\n  A  , http://a , img.jpg , Cat1 、 Cat2 \r\nB,http://b,,Cat2\r";
        let items = parse_catalog(text);
        assert_eq!(names(&items), vec!["A", "B"]);
        assert_eq!(items[0].url, "http://a");
        assert_eq!(items[0].image_url.as_deref(), Some("img.jpg"));
        assert_eq!(items[0].categories, vec!["Cat1", "Cat2"]);
    }

    #[test]
    fn test_parse_ignores_extra_fields() {
        let text = "h1,h2,h3,h4\nA,http://a,,Cat1,лишнее поле\n";
        let items = parse_catalog(text);
        assert_eq!(names(&items), vec!["A"]);
        assert_eq!(items[0].categories, vec!["Cat1"]);
    }

    #[test]
    fn test_parse_skips_blank_lines() {
        let text = "h1,h2,h3,h4\n\n   \nA,http://a,,Cat1\n\n";
        assert_eq!(parse_catalog(text).len(), 1);
    }

    #[test]
    fn test_header_only_yields_empty() {
        assert!(parse_catalog("Название,Ссылка,Картинка,Категории\n").is_empty());
        assert!(parse_catalog("").is_empty());
    }

    #[test]
    fn test_categories_sorted_unique_with_sentinel() {
        let items = parse_catalog(SAMPLE);
        let categories = extract_categories(&items);
        assert_eq!(categories, vec![CATEGORY_ALL, "Cat1", "Cat2"]);

        // Всего работ с категориями: Cat1, Cat2, Cat2 — дубликаты схлопнуты
        assert_eq!(categories.len(), 1 + 2);
    }

    #[test]
    fn test_categories_of_empty_set() {
        assert_eq!(extract_categories(&[]), vec![CATEGORY_ALL]);
    }

    #[test]
    fn test_filter_by_category() {
        let items = parse_catalog(SAMPLE);
        assert_eq!(names(&filter_items(&items, "Cat2", "")), vec!["A", "B"]);
        assert_eq!(names(&filter_items(&items, "Cat1", "")), vec!["A"]);
        assert!(filter_items(&items, "Cat3", "").is_empty());
    }

    #[test]
    fn test_filter_by_search_is_case_insensitive() {
        let items = parse_catalog(SAMPLE);
        assert_eq!(names(&filter_items(&items, CATEGORY_ALL, "b")), vec!["B"]);
        assert_eq!(names(&filter_items(&items, CATEGORY_ALL, "a")), vec!["A"]);
    }

    #[test]
    fn test_category_match_is_case_sensitive() {
        let items = parse_catalog(SAMPLE);
        assert!(filter_items(&items, "cat1", "").is_empty());
        assert_eq!(names(&filter_items(&items, "Cat1", "")), vec!["A"]);
    }

    #[test]
    fn test_sentinel_and_empty_search_keep_everything_in_order() {
        let items = parse_catalog(SAMPLE);
        assert_eq!(filter_items(&items, CATEGORY_ALL, ""), items);
    }

    #[test]
    fn test_filter_order_is_commutative() {
        let items = parse_catalog(SAMPLE);

        // Сначала категория, потом поиск — и наоборот
        let category_first = filter_items(&filter_items(&items, "Cat2", ""), CATEGORY_ALL, "b");
        let search_first = filter_items(&filter_items(&items, CATEGORY_ALL, "b"), "Cat2", "");
        assert_eq!(category_first, search_first);
        assert_eq!(names(&category_first), vec!["B"]);

        // И то же самое одним вызовом
        assert_eq!(filter_items(&items, "Cat2", "b"), category_first);
    }
}
