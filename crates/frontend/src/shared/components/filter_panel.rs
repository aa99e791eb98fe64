use crate::shared::icons::icon;
use leptos::prelude::*;

/// FilterPanel component - collapsible filter panel with an active-filter badge
#[component]
pub fn FilterPanel(
    /// Whether the filter panel is expanded
    #[prop(into)]
    is_expanded: RwSignal<bool>,

    /// Number of active filters (for badge display)
    #[prop(into)]
    active_filters_count: Signal<usize>,

    /// Filter controls
    children: Children,
) -> impl IntoView {
    let toggle_expanded = move |_| {
        is_expanded.update(|e| *e = !*e);
    };

    view! {
        <nav class="panel">
            <p class="panel-heading filter-panel-header" on:click=toggle_expanded>
                <span
                    class=move || {
                        if is_expanded.get() {
                            "filter-panel__chevron filter-panel__chevron--expanded"
                        } else {
                            "filter-panel__chevron"
                        }
                    }
                >
                    {icon("chevron-down")}
                </span>
                {icon("filter")}
                <span class="filter-panel__title">"Filters"</span>
                {move || {
                    let count = active_filters_count.get();
                    if count > 0 {
                        view! {
                            <span class="tag is-info is-rounded ml-2" data-cy="ActiveFiltersCount">{count}</span>
                        }.into_any()
                    } else {
                        view! { <></> }.into_any()
                    }
                }}
            </p>

            <div class=move || {
                if is_expanded.get() {
                    "filter-panel__collapsible filter-panel__collapsible--expanded"
                } else {
                    "filter-panel__collapsible filter-panel__collapsible--collapsed"
                }
            }>
                {children()}
            </div>
        </nav>
    }
}
