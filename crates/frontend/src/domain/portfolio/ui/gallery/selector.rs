use contracts::domain::portfolio::catalog::CATEGORY_ALL;
use leptos::prelude::*;

use super::state::GalleryFilterState;

/// Метка категории для селекторов: служебное значение «все» получает
/// человекочитаемый текст, остальные категории показываются как есть.
pub fn category_label(value: &str) -> String {
    if value == CATEGORY_ALL {
        "Все категории".to_string()
    } else {
        value.to_string()
    }
}

/// Выпадающий список категорий.
///
/// `prop:value` привязан к общему состоянию: клик по тегу в облаке
/// принудительно обновляет и отображаемое значение списка. Источником
/// истины не является ни один из виджетов, только само состояние.
#[component]
pub fn CategoryDropdown(
    state: GalleryFilterState,
    /// Категории в порядке показа, включая служебную «все»
    #[prop(into)]
    categories: Signal<Vec<String>>,
) -> impl IntoView {
    view! {
        <select
            class="form__select gallery__dropdown"
            prop:value=move || state.selected_category.get()
            on:change=move |ev| {
                state.selected_category.set(event_target_value(&ev));
            }
        >
            <For
                each=move || categories.get()
                key=|value| value.clone()
                children=move |value| {
                    let label = category_label(&value);
                    let option_value = value.clone();
                    let is_selected = move || state.selected_category.get() == option_value;
                    view! {
                        <option value=value selected=is_selected>
                            {label}
                        </option>
                    }
                }
            />
        </select>
    }
}

/// Облако тегов — второй, равноправный селектор той же категории.
///
/// Активен ровно один тег: тот, чьё значение совпадает с общим
/// состоянием. Класс пересчитывается при любой смене выбора, независимо
/// от того, какой из виджетов её вызвал. Обработчик клика висит на
/// каждом теге отдельно.
#[component]
pub fn CategoryTagCloud(
    state: GalleryFilterState,
    /// Категории в порядке показа, включая служебную «все»
    #[prop(into)]
    categories: Signal<Vec<String>>,
) -> impl IntoView {
    view! {
        <div class="tag-cloud">
            <For
                each=move || categories.get()
                key=|value| value.clone()
                children=move |value| {
                    let label = category_label(&value);
                    let click_value = value.clone();
                    let active_value = value.clone();
                    let tag_class = move || {
                        if state.selected_category.get() == active_value {
                            "tag-cloud__tag tag-cloud__tag--active"
                        } else {
                            "tag-cloud__tag"
                        }
                    };
                    view! {
                        <span
                            class=tag_class
                            data-category=value
                            on:click=move |_| state.selected_category.set(click_value.clone())
                        >
                            {label}
                        </span>
                    }
                }
            />
        </div>
    }
}
