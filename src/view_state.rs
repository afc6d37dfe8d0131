use crate::profile::{Profile, SectionContent};
use crate::theme::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Section {
    #[default]
    Profile,
    Portfolio,
    Contact,
}

impl Section {
    /// Navigator order.
    pub const ALL: [Section; 3] = [Section::Profile, Section::Portfolio, Section::Contact];

    pub fn slug(self) -> &'static str {
        match self {
            Section::Profile => "profile",
            Section::Portfolio => "portfolio",
            Section::Contact => "contact",
        }
    }
}

/// The two hoverable link tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkGroup {
    Social,
    Contact,
}

/// Identifies the hovered link: which table, and its position in it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HoverKey {
    pub group: LinkGroup,
    pub index: usize,
}

/// Everything that decides what the page shows at a given instant.
///
/// Lives for as long as the page is mounted and starts over on every mount.
/// `hovered` always names an entry of the list currently on screen: picking a
/// section drops any hover, and hovers on lists that aren't shown are refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewState {
    active: Section,
    hovered: Option<HoverKey>,
    theme: Theme,
    theme_pinned: bool,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Section {
        self.active
    }

    pub fn hovered(&self) -> Option<HoverKey> {
        self.hovered
    }

    pub fn hovered_index(&self) -> Option<usize> {
        self.hovered.map(|k| k.index)
    }

    pub fn is_hovered(&self, key: HoverKey) -> bool {
        self.hovered == Some(key)
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn content<'a>(&self, profile: &'a Profile) -> SectionContent<'a> {
        profile.content(self.active)
    }

    pub fn select(&mut self, section: Section) {
        if self.active != section {
            log::debug!("section {:?} -> {:?}", self.active, section);
            self.hovered = None;
        }
        self.active = section;
    }

    /// Marks `key` as hovered. Returns false, leaving the state alone, when
    /// the key doesn't point into the list currently on screen.
    pub fn hover_enter(&mut self, profile: &Profile, key: HoverKey) -> bool {
        let content = self.content(profile);
        if content.link_group() != Some(key.group) || key.index >= content.len() {
            log::debug!("ignoring hover on {key:?} while {:?} is shown", self.active);
            return false;
        }
        self.hovered = Some(key);
        true
    }

    pub fn hover_leave(&mut self, key: HoverKey) {
        // a late leave from the previous link mustn't wipe the next one
        if self.hovered == Some(key) {
            self.hovered = None;
        }
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        self.theme_pinned = true;
        log::debug!("theme -> {}", self.theme.name());
    }

    /// Follows the host's colour-scheme preference until the visitor picks a
    /// theme by hand.
    pub fn adopt_ambient(&mut self, ambient: Option<Theme>) {
        if self.theme_pinned {
            return;
        }
        if let Some(theme) = ambient {
            self.theme = theme;
        }
    }
}
