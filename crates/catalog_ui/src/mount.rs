//! Root element lookup and mounting.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Startup failures; all of them are fatal for the page.
pub enum MountError {
    /// No browser `window` is available.
    #[error("browser window is unavailable")]
    MissingWindow,
    /// The window has no document.
    #[error("browser document is unavailable")]
    MissingDocument,
    /// The root element is absent or is not an HTML element.
    #[error("root element `#{id}` was not found")]
    MissingRoot {
        /// Id that was looked up.
        id: String,
    },
}

/// Looks up the HTML element with `id` in the current document.
///
/// # Errors
///
/// Returns a [`MountError`] when there is no window or document, or no HTML element has `id`.
/// Outside wasm32 this always returns [`MountError::MissingWindow`].
pub fn find_root_element(id: &str) -> Result<web_sys::HtmlElement, MountError> {
    imp::find_root_element(id)
}

/// Mounts [`CatalogApp`](crate::CatalogApp) as the last children of `root`.
#[cfg(all(feature = "csr", target_arch = "wasm32"))]
pub fn mount_catalog(root: web_sys::HtmlElement) {
    leptos::mount_to(root, || leptos::view! { <crate::CatalogApp /> });
    leptos::logging::log!("catalog mounted");
}

#[cfg(target_arch = "wasm32")]
mod imp {
    use wasm_bindgen::JsCast;

    use super::MountError;

    pub fn find_root_element(id: &str) -> Result<web_sys::HtmlElement, MountError> {
        let window = web_sys::window().ok_or(MountError::MissingWindow)?;
        let document = window.document().ok_or(MountError::MissingDocument)?;
        document
            .get_element_by_id(id)
            .and_then(|element| element.dyn_into::<web_sys::HtmlElement>().ok())
            .ok_or_else(|| MountError::MissingRoot { id: id.to_string() })
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod imp {
    use super::MountError;

    pub fn find_root_element(_id: &str) -> Result<web_sys::HtmlElement, MountError> {
        Err(MountError::MissingWindow)
    }
}
