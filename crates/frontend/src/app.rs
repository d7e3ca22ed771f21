use crate::domain::portfolio::ui::gallery::GalleryPage;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <GalleryPage />
    }
}
