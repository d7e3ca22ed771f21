use contracts::domain::portfolio::catalog::CATEGORY_ALL;
use leptos::prelude::*;

/// Общее состояние фильтров галереи.
///
/// Владелец — `GalleryPage`. Структура `Copy`, но сигналы внутри
/// указывают на одни и те же ячейки, так что оба селектора и рендерер
/// работают с одним состоянием и приватных копий ни у кого нет.
/// Меняется только из обработчиков пользовательского ввода.
#[derive(Clone, Copy)]
pub struct GalleryFilterState {
    /// Выбранная категория; по умолчанию — служебное «все»
    pub selected_category: RwSignal<String>,
    /// Текст поиска, читается вживую из строки поиска
    pub search_text: RwSignal<String>,
}

pub fn create_state() -> GalleryFilterState {
    GalleryFilterState {
        selected_category: RwSignal::new(CATEGORY_ALL.to_string()),
        search_text: RwSignal::new(String::new()),
    }
}
