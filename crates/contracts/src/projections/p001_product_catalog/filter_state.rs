use crate::domain::a001_user::aggregate::UserId;
use std::collections::BTreeSet;

/// Текущие условия отбора каталога.
///
/// Переходы возвращают новое состояние, поэтому их удобно применять
/// через `RwSignal::update` и проверять в тестах без окружения.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    selected_user_id: Option<UserId>,
    search_query: String,
    selected_category_titles: BTreeSet<String>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    // ------------------------------------------------------------------
    // Переходы
    // ------------------------------------------------------------------

    /// Выбрать владельца; `None` - "все пользователи"
    #[must_use]
    pub fn select_user(mut self, user_id: Option<UserId>) -> Self {
        self.selected_user_id = user_id;
        self
    }

    /// Добавить категорию в отбор или убрать, если она уже выбрана
    #[must_use]
    pub fn toggle_category(mut self, title: impl Into<String>) -> Self {
        let title = title.into();
        if !self.selected_category_titles.remove(&title) {
            self.selected_category_titles.insert(title);
        }
        self
    }

    #[must_use]
    pub fn clear_categories(mut self) -> Self {
        self.selected_category_titles.clear();
        self
    }

    /// Строка поиска сохраняется как есть, без trim
    #[must_use]
    pub fn set_search_query(mut self, query: impl Into<String>) -> Self {
        self.search_query = query.into();
        self
    }

    #[must_use]
    pub fn clear_search_query(self) -> Self {
        self.set_search_query(String::new())
    }

    #[must_use]
    pub fn reset_all(self) -> Self {
        Self::default()
    }

    // ------------------------------------------------------------------
    // Чтение
    // ------------------------------------------------------------------

    pub fn selected_user_id(&self) -> Option<UserId> {
        self.selected_user_id
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn selected_category_titles(&self) -> &BTreeSet<String> {
        &self.selected_category_titles
    }

    /// Активна ли вкладка пользователя (`None` - вкладка "All")
    pub fn is_user_selected(&self, user_id: Option<UserId>) -> bool {
        self.selected_user_id == user_id
    }

    pub fn is_category_selected(&self, title: &str) -> bool {
        self.selected_category_titles.contains(title)
    }

    pub fn has_category_filter(&self) -> bool {
        !self.selected_category_titles.is_empty()
    }

    pub fn has_search_query(&self) -> bool {
        !self.search_query.is_empty()
    }

    /// Количество включенных измерений отбора (0..=3) для бейджа панели
    pub fn active_filters_count(&self) -> usize {
        [
            self.selected_user_id.is_some(),
            self.has_category_filter(),
            self.has_search_query(),
        ]
        .into_iter()
        .filter(|active| *active)
        .count()
    }

    pub fn is_pristine(&self) -> bool {
        *self == Self::default()
    }
}
