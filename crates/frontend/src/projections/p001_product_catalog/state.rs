use contracts::projections::p001_product_catalog::FilterState;
use leptos::prelude::*;

// Create state within component scope instead of thread-local
// This ensures state is properly disposed when component unmounts
pub fn create_state() -> RwSignal<FilterState> {
    RwSignal::new(FilterState::default())
}

/// Применить переход `FilterState` к сигналу страницы
pub fn apply(state: RwSignal<FilterState>, transition: impl FnOnce(FilterState) -> FilterState) {
    state.update(|current| {
        let next = transition(std::mem::take(current));
        log::debug!(
            "filters: user={:?} categories={:?} query={:?}",
            next.selected_user_id(),
            next.selected_category_titles(),
            next.search_query()
        );
        *current = next;
    });
}
