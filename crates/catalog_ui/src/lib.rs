//! Leptos views for the catalog list page.
//!
//! [`Button`] is the button factory, [`DomainListButton`] wires a domain's [`ShowList`] command to
//! the shared container signal, and [`CatalogApp`] composes both domains plus the
//! [`ListContainer`] in the order given by [`catalog_model::app_layout`]. The root element is
//! always injected; [`find_root_element`] is the only place that looks it up by id.
//!
//! [`ShowList`]: catalog_model::ShowList

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod app;
mod button;
mod domain_list;
mod mount;

pub use app::{CatalogApp, ListContainer};
pub use button::Button;
pub use domain_list::{activate_domain, DomainListButton};
pub use mount::{find_root_element, MountError};

#[cfg(all(feature = "csr", target_arch = "wasm32"))]
pub use mount::mount_catalog;
