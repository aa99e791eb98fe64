use contracts::domain::a001_user::aggregate::{User, UserId};
use contracts::domain::common::EntityId;
use contracts::projections::p001_product_catalog::FilterState;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub struct UserPickerItem {
    pub id: UserId,
    pub name: String,
}

impl From<&User> for UserPickerItem {
    fn from(u: &User) -> Self {
        Self {
            id: u.id,
            name: u.name.clone(),
        }
    }
}

fn tab_class(active: bool) -> &'static str {
    if active {
        "panel-tabs__item is-active"
    } else {
        "panel-tabs__item"
    }
}

/// Вкладки выбора владельца: "All" и по одной на пользователя
#[component]
pub fn UserPicker(
    users: Vec<UserPickerItem>,
    #[prop(into)] state: Signal<FilterState>,
    on_select: Callback<Option<UserId>>,
) -> impl IntoView {
    view! {
        <p class="panel-tabs has-text-weight-bold">
            <a
                data-cy="FilterAllUsers"
                href="#/"
                class=move || tab_class(state.with(|s| s.is_user_selected(None)))
                on:click=move |_| on_select.run(None)
            >
                "All"
            </a>
            {users.into_iter().map(|user| {
                let id = user.id;
                view! {
                    <a
                        data-cy="FilterUser"
                        data-id=id.as_string()
                        href="#/"
                        class=move || tab_class(state.with(|s| s.is_user_selected(Some(id))))
                        on:click=move |_| on_select.run(Some(id))
                    >
                        {user.name}
                    </a>
                }
            }).collect_view()}
        </p>
    }
}
