//! Shared list-container state and the command that replaces its content.

use crate::{
    catalog::{Domain, ItemList},
    markup::render_list_markup,
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Content of the single shared list container.
///
/// At most one domain's list is shown at a time; the last applied [`ShowList`] wins.
pub enum ListContainerState {
    /// Initial state: nothing rendered.
    #[default]
    Empty,
    /// A domain's list is rendered.
    Showing {
        /// Domain whose button last fired.
        domain: Domain,
        /// Rendered `<li>` markup for that domain's items.
        markup: String,
    },
}

impl ListContainerState {
    /// Returns the container's inner markup (empty before any activation).
    pub fn markup(&self) -> &str {
        match self {
            Self::Empty => "",
            Self::Showing { markup, .. } => markup,
        }
    }

    /// Returns the domain currently shown, if any.
    pub fn shown_domain(&self) -> Option<Domain> {
        match self {
            Self::Empty => None,
            Self::Showing { domain, .. } => Some(*domain),
        }
    }

    /// Replaces the whole container content with the rendering of `command`.
    pub fn apply(&mut self, command: &ShowList) {
        *self = Self::Showing {
            domain: command.domain,
            markup: command.render(),
        };
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Button action value: which domain's list to render into the container it is applied to.
pub struct ShowList {
    /// Domain being shown.
    pub domain: Domain,
    /// Items rendered for the domain.
    pub items: ItemList,
}

impl ShowList {
    /// Builds a command over an explicit item list.
    pub fn new(domain: Domain, items: ItemList) -> Self {
        Self { domain, items }
    }

    /// Builds a command over the domain's configured item list.
    pub fn for_domain(domain: Domain) -> Self {
        Self::new(domain, domain.items().clone())
    }

    /// Renders the command's items as list markup.
    pub fn render(&self) -> String {
        render_list_markup(&self.items)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn users() -> ShowList {
        ShowList::new(Domain::Users, ItemList::new(["alice", "bob"]))
    }

    fn products() -> ShowList {
        ShowList::new(Domain::Products, ItemList::new(["pen", "notebook"]))
    }

    #[test]
    fn starts_empty() {
        let state = ListContainerState::default();
        assert_eq!(state.markup(), "");
        assert_eq!(state.shown_domain(), None);
    }

    #[test]
    fn apply_replaces_content_regardless_of_prior_state() {
        let mut fresh = ListContainerState::default();
        fresh.apply(&users());

        let mut dirty = ListContainerState::Showing {
            domain: Domain::Products,
            markup: "<li>stale</li>".to_string(),
        };
        dirty.apply(&users());

        assert_eq!(fresh, dirty);
        assert_eq!(fresh.markup(), "<li>alice</li><li>bob</li>");
        assert_eq!(fresh.shown_domain(), Some(Domain::Users));
    }

    #[test]
    fn repeated_apply_is_idempotent() {
        let mut state = ListContainerState::default();
        state.apply(&products());
        let first = state.clone();
        state.apply(&products());
        assert_eq!(state, first);
    }

    #[test]
    fn later_domain_fully_replaces_earlier_one() {
        let mut state = ListContainerState::default();
        state.apply(&users());
        state.apply(&products());

        assert_eq!(state.markup(), "<li>pen</li><li>notebook</li>");
        assert!(!state.markup().contains("alice"));
        assert!(!state.markup().contains("bob"));
        assert_eq!(state.shown_domain(), Some(Domain::Products));
    }

    #[test]
    fn for_domain_uses_configured_items() {
        assert_eq!(
            ShowList::for_domain(Domain::Users).render(),
            "<li>alice</li><li>bob</li>"
        );
    }
}
