use contracts::domain::a002_category::aggregate::{Category, CategoryId};
use contracts::domain::common::EntityId;
use contracts::projections::p001_product_catalog::FilterState;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub struct CategoryPickerItem {
    pub id: CategoryId,
    pub title: String,
}

impl From<&Category> for CategoryPickerItem {
    fn from(c: &Category) -> Self {
        Self {
            id: c.id,
            title: c.title.clone(),
        }
    }
}

/// Кнопки категорий. "All" снимает отбор по категориям, остальные переключают свою категорию.
#[component]
pub fn CategoryPicker(
    categories: Vec<CategoryPickerItem>,
    #[prop(into)] state: Signal<FilterState>,
    on_toggle: Callback<String>,
    on_clear: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="panel-block is-flex-wrap-wrap">
            <a
                href="#/"
                data-cy="AllCategories"
                class=move || {
                    if state.with(|s| !s.has_category_filter()) {
                        "button is-success mr-6"
                    } else {
                        "button is-success mr-6 is-outlined"
                    }
                }
                on:click=move |_| on_clear.run(())
            >
                "All"
            </a>
            {categories.into_iter().map(|category| {
                let title = category.title.clone();
                let is_selected = {
                    let title = title.clone();
                    move || state.with(|s| s.is_category_selected(&title))
                };
                view! {
                    <a
                        data-cy="Category"
                        data-id=category.id.as_string()
                        href="#/"
                        class=move || {
                            if is_selected() {
                                "button mr-2 my-1 is-info"
                            } else {
                                "button mr-2 my-1"
                            }
                        }
                        on:click=move |_| on_toggle.run(title.clone())
                    >
                        {category.title}
                    </a>
                }
            }).collect_view()}
        </div>
    }
}
