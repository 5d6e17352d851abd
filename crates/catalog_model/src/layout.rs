//! Fixed startup layout of the root element.

use crate::catalog::Domain;

/// Id of the pre-existing page element the app mounts into.
pub const ROOT_ELEMENT_ID: &str = "app";

/// Id given to the shared list container element.
pub const LIST_CONTAINER_ID: &str = "listContainer";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// One child of the root element.
pub enum LayoutSlot {
    /// A domain's button.
    DomainButton(Domain),
    /// The shared list container.
    ListContainer,
}

/// Root children in mount order: the user button, the product button, then the list container.
pub fn app_layout() -> [LayoutSlot; 3] {
    [
        LayoutSlot::DomainButton(Domain::Users),
        LayoutSlot::DomainButton(Domain::Products),
        LayoutSlot::ListContainer,
    ]
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn buttons_precede_list_container() {
        assert_eq!(
            app_layout(),
            [
                LayoutSlot::DomainButton(Domain::Users),
                LayoutSlot::DomainButton(Domain::Products),
                LayoutSlot::ListContainer,
            ]
        );
    }

    #[test]
    fn every_domain_gets_exactly_one_button() {
        let buttons: Vec<Domain> = app_layout()
            .into_iter()
            .filter_map(|slot| match slot {
                LayoutSlot::DomainButton(domain) => Some(domain),
                LayoutSlot::ListContainer => None,
            })
            .collect();
        assert_eq!(buttons, Domain::ALL.to_vec());
    }
}
