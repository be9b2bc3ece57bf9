//! ==============================================================================
//! lib.rs - shared site model for the shinigami script wizard front end
//! ==============================================================================
//!
//! purpose:
//!     plain data describing the site header: the menu visibility state,
//!     the navigation links, and the static assets the header draws.
//!     nothing here touches the dom, so all of it is testable natively.
//!
//! relationships:
//!     - used by: frontend (Header component renders these types)
//!
//! ==============================================================================

use serde::{Deserialize, Serialize};

// ==============================================================================
// site constants
// ==============================================================================

pub const SITE_TITLE: &str = "Shinigami Script Wizard";
pub const LOGO_ALT: &str = "Shinigami";
pub const HOME_PATH: &str = "/";
pub const REPOSITORY_URL: &str = "https://github.com/keep-starknet-strange/shinigami";
pub const ABOUT_LABEL: &str = "About";
pub const GITHUB_LABEL: &str = "Github";

/// intrinsic logo size in css pixels
pub const LOGO_SIZE: u32 = 25;

// ==============================================================================
// static assets
// ==============================================================================

/// images the header references by identifier
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Asset {
    Logo,
    Github,
    Menu,
    Close,
}

impl Asset {
    /// path the asset pipeline serves this image from
    pub fn path(self) -> &'static str {
        match self {
            Asset::Logo => "/logo.png",
            Asset::Github => "/images/github.svg",
            Asset::Menu => "/images/menu.svg",
            Asset::Close => "/images/x-circle.svg",
        }
    }

    pub fn alt(self) -> &'static str {
        match self {
            Asset::Logo => LOGO_ALT,
            // decorative, the label next to it carries the meaning
            Asset::Github => "",
            Asset::Menu => "open menu",
            Asset::Close => "close menu",
        }
    }

    /// (width, height) when the header needs to reserve space up front
    pub fn dimensions(self) -> Option<(u32, u32)> {
        match self {
            Asset::Logo => Some((LOGO_SIZE, LOGO_SIZE)),
            _ => None,
        }
    }
}

// ==============================================================================
// navigation
// ==============================================================================

/// browsing context a link opens in
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum LinkTarget {
    SameContext,
    NewContext,
}

impl LinkTarget {
    /// value for the anchor's `target` attribute
    pub fn attr(self) -> Option<&'static str> {
        match self {
            LinkTarget::SameContext => None,
            LinkTarget::NewContext => Some("_blank"),
        }
    }

    /// value for the anchor's `rel` attribute
    pub fn rel(self) -> Option<&'static str> {
        match self {
            LinkTarget::SameContext => None,
            LinkTarget::NewContext => Some("noopener noreferrer"),
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
    pub target: LinkTarget,
}

impl NavLink {
    /// brand link back to the site root
    pub fn home() -> Self {
        Self {
            label: SITE_TITLE,
            href: HOME_PATH,
            target: LinkTarget::SameContext,
        }
    }

    /// link to the project repository, always in a new context
    pub fn repository() -> Self {
        Self {
            label: GITHUB_LABEL,
            href: REPOSITORY_URL,
            target: LinkTarget::NewContext,
        }
    }

    pub fn is_external(&self) -> bool {
        self.href.starts_with("http://") || self.href.starts_with("https://")
    }
}

// ==============================================================================
// mobile menu
// ==============================================================================

/// visibility of the mobile overlay menu
///
/// owned by a single header instance and only changed through
/// [`MenuState::open`] and [`MenuState::close`].
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    pub fn open(&mut self) {
        *self = MenuState::Open;
    }

    pub fn close(&mut self) {
        *self = MenuState::Closed;
    }

    pub fn is_open(self) -> bool {
        self == MenuState::Open
    }

    /// overlay to render for this state, `None` while closed
    pub fn overlay(self) -> Option<OverlayMenu> {
        self.is_open().then(OverlayMenu::new)
    }
}

/// one row in the overlay panel
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub enum MenuEntry {
    /// static label without a destination
    Label(&'static str),
    Link(NavLink),
}

/// render model of the open mobile panel
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct OverlayMenu {
    pub home: NavLink,
    pub close_icon: Asset,
    pub entries: Vec<MenuEntry>,
}

impl OverlayMenu {
    fn new() -> Self {
        Self {
            home: NavLink::home(),
            close_icon: Asset::Close,
            entries: vec![
                MenuEntry::Label(ABOUT_LABEL),
                MenuEntry::Link(NavLink::repository()),
            ],
        }
    }

    pub fn links(&self) -> impl Iterator<Item = &NavLink> {
        std::iter::once(&self.home).chain(self.entries.iter().filter_map(|e| match e {
            MenuEntry::Link(link) => Some(link),
            MenuEntry::Label(_) => None,
        }))
    }
}

// ==============================================================================
// tests
// ==============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_starts_closed() {
        let state = MenuState::default();
        assert_eq!(state, MenuState::Closed);
        assert!(state.overlay().is_none());
    }

    #[test]
    fn test_open_shows_overlay() {
        let mut state = MenuState::default();
        state.open();
        assert!(state.is_open());
        assert!(state.overlay().is_some());
    }

    #[test]
    fn test_close_after_open_hides_overlay() {
        let mut state = MenuState::default();
        state.open();
        state.close();
        assert!(!state.is_open());
        assert!(state.overlay().is_none());
    }

    #[test]
    fn test_open_is_idempotent() {
        let mut state = MenuState::default();
        state.open();
        state.open();
        assert_eq!(state, MenuState::Open);

        state.close();
        state.close();
        assert_eq!(state, MenuState::Closed);
    }

    #[test]
    fn test_repository_link_opens_new_context() {
        let link = NavLink::repository();
        assert_eq!(link.href, "https://github.com/keep-starknet-strange/shinigami");
        assert_eq!(link.target.attr(), Some("_blank"));
        assert_eq!(link.target.rel(), Some("noopener noreferrer"));
        assert!(link.is_external());
    }

    #[test]
    fn test_home_link_targets_root_in_every_state() {
        assert_eq!(NavLink::home().href, "/");
        assert_eq!(NavLink::home().target.attr(), None);
        assert!(!NavLink::home().is_external());

        let mut state = MenuState::default();
        state.open();
        let overlay = state.overlay().unwrap();
        assert_eq!(overlay.home.href, HOME_PATH);
        // overlay duplicates the repository link too
        let hrefs: Vec<_> = overlay.links().map(|l| l.href).collect();
        assert_eq!(hrefs, vec![HOME_PATH, REPOSITORY_URL]);
    }

    #[test]
    fn test_only_logo_has_intrinsic_size() {
        assert_eq!(Asset::Logo.dimensions(), Some((25, 25)));
        assert_eq!(Asset::Menu.dimensions(), None);
        assert_eq!(Asset::Close.path(), "/images/x-circle.svg");
    }

    #[test]
    fn test_menu_state_serialization() {
        let json = serde_json::to_string(&MenuState::Open).unwrap();
        assert_eq!(json, "\"Open\"");
    }
}
