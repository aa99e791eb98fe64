use super::filter_state::FilterState;
use super::join::EnrichedProduct;

/// Ступень отбора. Ступени независимы, результат не зависит от их порядка.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterStage {
    /// Владелец категории
    User,
    /// Принадлежность к одной из выбранных категорий (ИЛИ)
    Category,
    /// Подстрока в названии товара без учета регистра
    Search,
}

impl FilterStage {
    /// Порядок применения в `render`
    pub const PIPELINE: [FilterStage; 3] =
        [FilterStage::User, FilterStage::Category, FilterStage::Search];

    /// Пустое условие пропускает строки без изменений
    pub fn is_active(self, state: &FilterState) -> bool {
        match self {
            FilterStage::User => state.selected_user_id().is_some(),
            FilterStage::Category => state.has_category_filter(),
            FilterStage::Search => state.has_search_query(),
        }
    }

    /// Оставить строки, удовлетворяющие условию; относительный порядок сохраняется
    pub fn apply<'a>(
        self,
        rows: Vec<&'a EnrichedProduct>,
        state: &FilterState,
    ) -> Vec<&'a EnrichedProduct> {
        if !self.is_active(state) {
            return rows;
        }

        match self {
            FilterStage::User => rows
                .into_iter()
                .filter(|row| state.is_user_selected(Some(row.user.id)))
                .collect(),
            FilterStage::Category => rows
                .into_iter()
                .filter(|row| state.is_category_selected(&row.category.title))
                .collect(),
            FilterStage::Search => {
                let query = state.search_query().to_lowercase();
                rows.into_iter()
                    .filter(|row| row.name.to_lowercase().contains(&query))
                    .collect()
            }
        }
    }
}

/// Видимые строки каталога для текущего состояния фильтров
pub fn render<'a>(products: &'a [EnrichedProduct], state: &FilterState) -> Vec<&'a EnrichedProduct> {
    render_with_stages(products, state, &FilterStage::PIPELINE)
}

/// То же, что `render`, но с явным порядком ступеней
pub fn render_with_stages<'a>(
    products: &'a [EnrichedProduct],
    state: &FilterState,
    stages: &[FilterStage],
) -> Vec<&'a EnrichedProduct> {
    stages
        .iter()
        .fold(products.iter().collect(), |rows, stage| stage.apply(rows, state))
}
