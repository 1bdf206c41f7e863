//! Responsive layout shell.
//!
//! The shell holds one navigation state (which screen is highlighted) and
//! projects it into exactly one chrome: a side panel on wide viewports or a
//! bottom bar on narrow ones.

use serde::{Deserialize, Serialize};

use crate::navigation::{NavTarget, ROOT_PATH};

/// Viewports at least this wide get the side panel.
pub const BREAKPOINT_PX: u32 = 1024;

/// Query parameter selecting a screen on the root route.
pub const SCREEN_QUERY_PARAM: &str = "screen";

/// Logical screens reachable from the navigation chrome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Screen {
    Events,
    Bands,
    Chat,
    Profile,
}

impl Screen {
    pub const ALL: [Screen; 4] = [Screen::Events, Screen::Bands, Screen::Chat, Screen::Profile];

    pub fn as_str(self) -> &'static str {
        match self {
            Screen::Events => "events",
            Screen::Bands => "bands",
            Screen::Chat => "chat",
            Screen::Profile => "profile",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Screen::Events => "Events",
            Screen::Bands => "Bands",
            Screen::Chat => "Chat",
            Screen::Profile => "Profile",
        }
    }

    /// Events and bands only exist in the root page's screen switcher.
    pub fn lives_on_root(self) -> bool {
        matches!(self, Screen::Events | Screen::Bands)
    }

    fn root_target(self) -> NavTarget {
        NavTarget::new(ROOT_PATH).with_query(SCREEN_QUERY_PARAM, self.as_str())
    }
}

/// Which navigation affordance is mounted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Chrome {
    SidePanel,
    BottomBar,
}

impl Chrome {
    pub fn for_width(viewport_width: u32) -> Self {
        if viewport_width >= BREAKPOINT_PX {
            Chrome::SidePanel
        } else {
            Chrome::BottomBar
        }
    }
}

/// Result of selecting a screen from the chrome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "target", rename_all = "snake_case")]
pub enum ShellAction {
    /// Switch screens inside the shell.
    Activate(Screen),
    /// Leave the shell with a full route transition.
    Navigate(NavTarget),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub screen: Screen,
    pub label: &'static str,
    pub active: bool,
    /// Set for screens that leave the shell.
    pub href: Option<String>,
}

/// Navigation state projected into the mounted chrome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShellView {
    pub chrome: Chrome,
    pub items: Vec<NavItem>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutShell {
    active: Option<Screen>,
}

impl LayoutShell {
    /// Profile is highlighted by default, unless the viewer is looking at
    /// someone else's profile.
    pub fn new(is_current_user: bool) -> Self {
        Self {
            active: is_current_user.then_some(Screen::Profile),
        }
    }

    pub fn active(&self) -> Option<Screen> {
        self.active
    }

    pub fn select(&mut self, screen: Screen) -> ShellAction {
        if screen.lives_on_root() {
            return ShellAction::Navigate(screen.root_target());
        }
        self.active = Some(screen);
        ShellAction::Activate(screen)
    }

    pub fn project(&self, viewport_width: u32) -> ShellView {
        let items = Screen::ALL
            .iter()
            .map(|&screen| NavItem {
                screen,
                label: screen.label(),
                active: self.active == Some(screen),
                href: screen.lives_on_root().then(|| screen.root_target().href()),
            })
            .collect();

        ShellView {
            chrome: Chrome::for_width(viewport_width),
            items,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn active_screens(view: &ShellView) -> Vec<Screen> {
        view.items.iter().filter(|i| i.active).map(|i| i.screen).collect()
    }

    #[test]
    fn wide_viewport_mounts_side_panel() {
        assert_eq!(LayoutShell::new(true).project(1200).chrome, Chrome::SidePanel);
        assert_eq!(Chrome::for_width(BREAKPOINT_PX), Chrome::SidePanel);
    }

    #[test]
    fn narrow_viewport_mounts_bottom_bar() {
        assert_eq!(LayoutShell::new(true).project(800).chrome, Chrome::BottomBar);
        assert_eq!(Chrome::for_width(BREAKPOINT_PX - 1), Chrome::BottomBar);
    }

    #[test]
    fn projection_is_identical_across_chromes() {
        let shell = LayoutShell::new(true);
        assert_eq!(shell.project(1200).items, shell.project(800).items);
    }

    #[test]
    fn profile_highlight_depends_on_viewer() {
        assert_eq!(active_screens(&LayoutShell::new(true).project(1200)), vec![Screen::Profile]);
        assert!(active_screens(&LayoutShell::new(false).project(1200)).is_empty());
    }

    #[test]
    fn events_and_bands_navigate_to_root() {
        let mut shell = LayoutShell::new(true);
        let action = shell.select(Screen::Events);
        assert_matches!(action, ShellAction::Navigate(ref t) if t.href() == "/?screen=events");
        assert_matches!(shell.select(Screen::Bands), ShellAction::Navigate(_));
        assert_eq!(shell.active(), Some(Screen::Profile));
    }

    #[test]
    fn chat_switches_in_shell() {
        let mut shell = LayoutShell::new(false);
        assert_eq!(shell.select(Screen::Chat), ShellAction::Activate(Screen::Chat));
        assert_eq!(active_screens(&shell.project(500)), vec![Screen::Chat]);
    }

    #[test]
    fn root_screens_carry_hrefs() {
        let view = LayoutShell::new(true).project(1200);
        let hrefs: Vec<_> = view.items.iter().map(|i| i.href.as_deref()).collect();
        assert_eq!(
            hrefs,
            vec![Some("/?screen=events"), Some("/?screen=bands"), None, None]
        );
    }
}
