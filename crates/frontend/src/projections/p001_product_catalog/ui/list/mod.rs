mod table;

use crate::domain::a001_user::ui::picker::{UserPicker, UserPickerItem};
use crate::domain::a002_category::ui::picker::{CategoryPicker, CategoryPickerItem};
use crate::projections::p001_product_catalog::state::{apply, create_state};
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::icons::icon;
use crate::shared::list_utils::SearchInput;
use contracts::domain::a001_user::aggregate::UserId;
use contracts::projections::p001_product_catalog::{
    Catalog, FilterState, ProductRow, NO_MATCHING_MESSAGE,
};
use leptos::prelude::*;
use std::sync::Arc;
use table::ProductTable;

#[component]
#[allow(non_snake_case)]
pub fn ProductCatalogList(catalog: Arc<Catalog>) -> impl IntoView {
    let state = create_state();
    let is_expanded = RwSignal::new(true);

    // Видимые строки пересчитываются из состояния фильтров; соединение не повторяется
    let rows: Memo<Vec<ProductRow>> = {
        let catalog = Arc::clone(&catalog);
        Memo::new(move |_| state.with(|s| catalog.view(s)))
    };
    let has_results = move || rows.with(|r| !r.is_empty());

    let users: Vec<UserPickerItem> = catalog
        .users()
        .iter()
        .map(|u| UserPickerItem::from(u.as_ref()))
        .collect();
    let categories: Vec<CategoryPickerItem> = catalog
        .categories()
        .iter()
        .map(|c| CategoryPickerItem::from(c.as_ref()))
        .collect();

    let filter_state: Signal<FilterState> = state.into();
    let search_query = Signal::derive(move || state.with(|s| s.search_query().to_string()));
    let active_filters_count = Signal::derive(move || state.with(|s| s.active_filters_count()));
    let is_pristine = move || state.with(|s| s.is_pristine());

    view! {
        <div class="section">
            <div class="container">
                <h1 class="title">"Product Categories"</h1>

                <div class="block">
                    <FilterPanel is_expanded=is_expanded active_filters_count=active_filters_count>
                        <UserPicker
                            users=users
                            state=filter_state
                            on_select=Callback::new(move |id: Option<UserId>| apply(state, |s| s.select_user(id)))
                        />

                        <div class="panel-block">
                            <SearchInput
                                value=search_query
                                on_change=Callback::new(move |text: String| {
                                    apply(state, |s| s.set_search_query(text))
                                })
                                on_clear=Callback::new(move |_: ()| apply(state, |s| s.clear_search_query()))
                            />
                        </div>

                        <CategoryPicker
                            categories=categories
                            state=filter_state
                            on_toggle=Callback::new(move |title: String| {
                                apply(state, |s| s.toggle_category(title))
                            })
                            on_clear=Callback::new(move |_: ()| apply(state, |s| s.clear_categories()))
                        />

                        <div class="panel-block">
                            <button
                                data-cy="ResetAllButton"
                                class="button is-link is-outlined is-fullwidth"
                                disabled=is_pristine
                                on:click=move |_| apply(state, |s| s.reset_all())
                            >
                                {icon("refresh")}
                                "Reset all filters"
                            </button>
                        </div>
                    </FilterPanel>
                </div>

                <div class="box table-container">
                    {move || if has_results() {
                        view! { <ProductTable rows=rows /> }.into_any()
                    } else {
                        view! {
                            <p data-cy="NoMatchingMessage">{NO_MATCHING_MESSAGE}</p>
                        }.into_any()
                    }}
                </div>
            </div>
        </div>
    }
}
