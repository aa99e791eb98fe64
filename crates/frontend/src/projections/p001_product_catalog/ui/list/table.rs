use crate::shared::icons::icon;
use contracts::projections::p001_product_catalog::{ProductRow, COLUMNS};
use leptos::prelude::*;

/// Таблица товаров. Значки сортировки в заголовках декоративные.
#[component]
pub fn ProductTable(#[prop(into)] rows: Signal<Vec<ProductRow>>) -> impl IntoView {
    view! {
        <table data-cy="ProductTable" class="table is-striped is-narrow is-fullwidth">
            <thead>
                <tr>
                    {COLUMNS.into_iter().map(|column| view! {
                        <th>
                            <span class="is-flex is-flex-wrap-nowrap">
                                {column}
                                <span class="icon" data-cy="SortIcon">{icon("sort")}</span>
                            </span>
                        </th>
                    }).collect_view()}
                </tr>
            </thead>

            <tbody>
                {move || rows.get().into_iter().map(|row| view! {
                    <tr data-cy="Product">
                        <td class="has-text-weight-bold" data-cy="ProductId">
                            {row.id.value()}
                        </td>
                        <td data-cy="ProductName">{row.name}</td>
                        <td data-cy="ProductCategory">{row.category_label}</td>
                        <td data-cy="ProductUser" class=row.user_tone.css_class()>
                            {row.user_name}
                        </td>
                    </tr>
                }).collect_view()}
            </tbody>
        </table>
    }
}
