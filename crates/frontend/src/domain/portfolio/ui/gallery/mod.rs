pub mod card;
pub mod search;
pub mod selector;
pub mod state;

use contracts::domain::portfolio::aggregate::PortfolioItem;
use contracts::domain::portfolio::catalog::{extract_categories, filter_items};
use leptos::prelude::*;

use self::card::PortfolioCard;
use self::search::SearchBar;
use self::selector::{CategoryDropdown, CategoryTagCloud};
use self::state::create_state;
use crate::domain::portfolio::api::load_catalog;

/// Страница галереи: контроллер, владеющий данными и состоянием фильтров.
///
/// Жизненный цикл: загрузка → разбор → селекторы и полный список →
/// дальше всё синхронно, по событиям ввода пересчитывается видимое
/// подмножество. Список перерисовывается целиком, без диффа.
#[component]
#[allow(non_snake_case)]
pub fn GalleryPage() -> impl IntoView {
    let state = create_state();
    let (items, set_items) = signal::<Vec<PortfolioItem>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(true);

    // Единственная асинхронная точка — начальная загрузка каталога
    wasm_bindgen_futures::spawn_local(async move {
        match load_catalog().await {
            Ok(v) => set_items.set(v),
            Err(e) => {
                log::error!("загрузка каталога: {}", e);
                set_error.set(Some(format!("Не удалось загрузить работы: {}", e)));
            }
        }
        set_loading.set(false);
    });

    // Набор работ меняется один раз за сессию, значит и список категорий
    // перестраивается один раз
    let categories = Memo::new(move |_| extract_categories(&items.get()));

    let filtered = move || {
        filter_items(
            &items.get(),
            &state.selected_category.get(),
            &state.search_text.get(),
        )
    };

    view! {
        <div class="content gallery">
            <div class="header">
                <h2>{"Портфолио"}</h2>
            </div>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}
            {move || loading.get().then(|| view! { <p class="gallery__loading">"Загрузка..."</p> })}

            <Show when=move || !loading.get() && error.get().is_none()>
                <div class="gallery__filters">
                    <SearchBar state=state />
                    <CategoryDropdown state=state categories=categories />
                </div>
                <CategoryTagCloud state=state categories=categories />

                {move || {
                    let visible = filtered();
                    if visible.is_empty() {
                        view! { <p class="gallery__empty">"Ничего не найдено."</p> }.into_any()
                    } else {
                        view! {
                            <div class="gallery__grid">
                                {visible
                                    .into_iter()
                                    .map(|item| view! { <PortfolioCard item=item /> })
                                    .collect_view()}
                            </div>
                        }
                        .into_any()
                    }
                }}
            </Show>
        </div>
    }
}
