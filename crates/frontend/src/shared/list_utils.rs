/// Утилиты для списков: поле поиска с кнопкой очистки
use leptos::prelude::*;

/// Поле поиска. Каждое изменение сразу уходит в `on_change`, без debounce.
#[component]
pub fn SearchInput(
    /// Текущее значение фильтра
    #[prop(into)]
    value: Signal<String>,
    /// Callback для обновления значения фильтра
    #[prop(into)]
    on_change: Callback<String>,
    /// Callback кнопки очистки
    #[prop(into)]
    on_clear: Callback<()>,
    /// Placeholder текст
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search".to_string()
    } else {
        placeholder
    };

    view! {
        <p class="control has-icons-left has-icons-right">
            <input
                data-cy="SearchField"
                type="text"
                class="input"
                placeholder={placeholder}
                prop:value=move || value.get()
                on:input=move |ev| on_change.run(event_target_value(&ev))
            />

            <span class="icon is-left">
                {crate::shared::icons::icon("search")}
            </span>

            // Кнопка очистки видна только при непустом запросе
            {move || if value.with(|v| !v.is_empty()) {
                view! {
                    <span class="icon is-right">
                        <button
                            data-cy="ClearButton"
                            type="button"
                            class="delete"
                            title="Clear"
                            on:click=move |_| on_clear.run(())
                        ></button>
                    </span>
                }.into_any()
            } else {
                view! { <></> }.into_any()
            }}
        </p>
    }
}
