use leptos::*;

fn merge_layout_class(base: &'static str, layout_class: Option<&'static str>) -> String {
    match layout_class {
        Some(layout_class) if !layout_class.is_empty() => format!("{base} {layout_class}"),
        _ => base.to_string(),
    }
}

#[component]
/// Button primitive whose text is `label` and which calls `on_activate` once per click.
///
/// The element is returned unattached; the caller decides where it is mounted.
pub fn Button(
    #[prop(into)] label: String,
    on_activate: Callback<()>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] data_domain: Option<String>,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class=merge_layout_class("ui-button", layout_class)
            data-ui-primitive="true"
            data-ui-kind="button"
            data-domain=data_domain
            on:click=move |_| on_activate.call(())
        >
            {label}
        </button>
    }
}
