use leptos::prelude::*;

use super::state::GalleryFilterState;
use crate::shared::icons::icon;

/// Строка поиска по названию работы.
///
/// Значение читается вживую: каждое событие ввода сразу пишется в общее
/// состояние и запускает перефильтрацию. Кнопка очистки сбрасывает
/// поиск, не трогая выбранную категорию.
#[component]
pub fn SearchBar(state: GalleryFilterState) -> impl IntoView {
    let clear = move |_| state.search_text.set(String::new());

    view! {
        <div class="search-bar">
            <span class="search-bar__icon">{icon("search")}</span>
            <input
                type="text"
                class="form__input search-bar__input"
                placeholder="Поиск по названию..."
                prop:value=move || state.search_text.get()
                on:input=move |ev| state.search_text.set(event_target_value(&ev))
            />
            {move || {
                (!state.search_text.get().is_empty()).then(|| {
                    view! {
                        <button class="search-bar__clear" on:click=clear title="Очистить">
                            {icon("x")}
                        </button>
                    }
                })
            }}
        </div>
    }
}
