//! App composition: the two domain buttons followed by the shared list container.

use catalog_model::{app_layout, LayoutSlot, ListContainerState, LIST_CONTAINER_ID};
use leptos::*;

use crate::domain_list::DomainListButton;

#[component]
/// Shared `<ul>` whose inner markup mirrors `state`.
pub fn ListContainer(state: RwSignal<ListContainerState>) -> impl IntoView {
    view! {
        <ul
            id=LIST_CONTAINER_ID
            data-ui-kind="list-container"
            inner_html=move || state.with(|state| state.markup().to_string())
        ></ul>
    }
}

#[component]
/// Root view: one button per domain, then the list container they all write to.
pub fn CatalogApp() -> impl IntoView {
    let container = create_rw_signal(ListContainerState::default());

    app_layout()
        .into_iter()
        .map(|slot| match slot {
            LayoutSlot::DomainButton(domain) => {
                view! { <DomainListButton domain target=container /> }.into_view()
            }
            LayoutSlot::ListContainer => view! { <ListContainer state=container /> }.into_view(),
        })
        .collect_view()
}
