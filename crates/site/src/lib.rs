pub use catalog_ui::CatalogApp;

/// Resolves the `#app` root and mounts the catalog into it.
///
/// A missing root is fatal: the error is logged and nothing is mounted.
#[cfg(all(feature = "csr", target_arch = "wasm32"))]
pub fn mount() {
    console_error_panic_hook::set_once();
    match catalog_ui::find_root_element(catalog_model::ROOT_ELEMENT_ID) {
        Ok(root) => catalog_ui::mount_catalog(root),
        Err(err) => leptos::logging::error!("catalog startup failed: {err}"),
    }
}
