//! Headless model for the catalog list page.
//!
//! The crate owns the per-domain item lists (baked in at build time from `catalog.toml`), the
//! list markup renderer, the shared list-container state with its `ShowList` command, and the
//! fixed startup layout. Nothing here touches the DOM; `catalog_ui` binds these types to Leptos
//! views.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod catalog;
pub mod container;
pub mod layout;
pub mod markup;

pub use catalog::{CatalogError, Domain, ItemList};
pub use container::{ListContainerState, ShowList};
pub use layout::{app_layout, LayoutSlot, LIST_CONTAINER_ID, ROOT_ELEMENT_ID};
pub use markup::render_list_markup;
