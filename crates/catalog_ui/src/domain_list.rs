use catalog_model::{Domain, ListContainerState, ShowList};
use leptos::*;

use crate::button::Button;

/// Applies `command` to the shared container, replacing whatever it showed before.
pub fn activate_domain(target: RwSignal<ListContainerState>, command: &ShowList) {
    target.update(|state| state.apply(command));
    logging::log!(
        "showing {} list ({} items)",
        command.domain,
        command.items.len()
    );
}

#[component]
/// Button for one domain; each click renders the domain's items into `target`.
pub fn DomainListButton(
    /// Domain whose items the button shows.
    domain: Domain,
    /// Shared list container owned by the composer.
    target: RwSignal<ListContainerState>,
) -> impl IntoView {
    let command = store_value(ShowList::for_domain(domain));
    let on_activate = Callback::new(move |()| {
        command.with_value(|command| activate_domain(target, command));
    });

    view! {
        <Button
            label=domain.label()
            data_domain=domain.id()
            layout_class="catalog-domain-button"
            on_activate
        />
    }
}
