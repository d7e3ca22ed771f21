use contracts::domain::portfolio::aggregate::PortfolioItem;
use contracts::domain::portfolio::catalog::parse_catalog;
use gloo_net::http::Request;

/// Относительный путь к файлу каталога
const DATA_URL: &str = "data.csv";

/// Загрузить и разобрать каталог работ.
///
/// Единственная асинхронная операция галереи. Ошибка сети/HTTP и пустой
/// результат разбора фатальны для всего вида и различаются текстом
/// сообщения; повторных попыток нет.
pub async fn load_catalog() -> Result<Vec<PortfolioItem>, String> {
    let response = Request::get(DATA_URL)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    let text = response
        .text()
        .await
        .map_err(|e| format!("Failed to read response: {}", e))?;

    let items = parse_catalog(&text);
    if items.is_empty() {
        return Err("файл каталога пуст или имеет неизвестный формат".to_string());
    }

    log::info!("каталог загружен: {} работ", items.len());
    Ok(items)
}
