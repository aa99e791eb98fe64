use crate::projections::p001_product_catalog::ui::list::ProductCatalogList;
use contracts::projections::p001_product_catalog::Catalog;
use leptos::prelude::*;
use std::sync::Arc;

#[component]
pub fn App() -> impl IntoView {
    // The catalog is joined once per page session; filter changes only re-render.
    match Catalog::from_fixtures() {
        Ok(catalog) => {
            log::info!(
                "catalog loaded: {} users, {} categories, {} products",
                catalog.users().len(),
                catalog.categories().len(),
                catalog.products().len()
            );
            view! { <ProductCatalogList catalog=Arc::new(catalog) /> }.into_any()
        }
        Err(e) => {
            log::error!("catalog integrity check failed: {e}");
            view! {
                <div class="section">
                    <div class="container">
                        <div class="error" data-cy="CatalogError">
                            {format!("Failed to load catalog: {e}")}
                        </div>
                    </div>
                </div>
            }
            .into_any()
        }
    }
}
