use serde::{Deserialize, Serialize};

/// Работа в портфолио (одна карточка галереи).
///
/// После разбора каталога запись не меняется; живёт до закрытия страницы.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioItem {
    pub name: String,

    /// Ссылка на саму работу
    pub url: String,

    /// Превью; `None` — показываем заглушку
    #[serde(rename = "imageUrl")]
    pub image_url: Option<String>,

    /// Минимум одна категория, порядок как в исходной строке
    pub categories: Vec<String>,
}
