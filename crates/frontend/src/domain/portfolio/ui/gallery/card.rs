use contracts::domain::portfolio::aggregate::PortfolioItem;
use leptos::prelude::*;

/// Путь к картинке-заглушке
pub const PLACEHOLDER_IMAGE: &str = "images/placeholder.svg";

/// Адрес превью при первом показе карточки: своя картинка работы или
/// заглушка, если картинки у записи нет.
pub(crate) fn initial_image_src(item: &PortfolioItem) -> String {
    item.image_url
        .clone()
        .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string())
}

/// Карточка одной работы: целиком ссылка, открывается в новой вкладке.
///
/// Битое превью подменяется заглушкой локально, прямо в этой карточке;
/// остальная галерея этого не замечает.
#[component]
pub fn PortfolioCard(item: PortfolioItem) -> impl IntoView {
    let (src, set_src) = signal(initial_image_src(&item));

    let on_image_error = move |_| {
        // Заглушка сама могла не загрузиться — второй раз не подменяем
        if src.get_untracked() != PLACEHOLDER_IMAGE {
            set_src.set(PLACEHOLDER_IMAGE.to_string());
        }
    };

    view! {
        <a class="card" href=item.url.clone() target="_blank" rel="noopener noreferrer">
            <img
                class="card__image"
                src=move || src.get()
                alt=item.name.clone()
                on:error=on_image_error
            />
            <div class="card__content">
                <h3 class="card__title">{item.name.clone()}</h3>
            </div>
        </a>
    }
}
