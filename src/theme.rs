/// Colour scheme of the page. Dark unless the host asks for light.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

/// Class strings for every themed surface of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub page: &'static str,
    pub card: &'static str,
    pub nav_border: &'static str,
    pub nav_active: &'static str,
    pub nav_idle: &'static str,
    pub heading: &'static str,
    pub body: &'static str,
    pub project_card: &'static str,
    pub project_title: &'static str,
    pub muted: &'static str,
    pub particle: &'static str,
    pub toggle: &'static str,
}

const DARK: Palette = Palette {
    page: "from-gray-900 to-black",
    card: "bg-gray-800/70 border-gray-700",
    nav_border: "border-gray-700",
    nav_active: "bg-gradient-to-r from-cyan-500 to-blue-600 text-white",
    nav_idle: "text-gray-400 hover:bg-gray-700",
    heading: "text-white",
    body: "text-gray-300",
    project_card: "bg-gray-700/50 hover:bg-gray-700/70",
    project_title: "text-white",
    muted: "text-gray-400 group-hover:text-white",
    particle: "bg-white/10",
    toggle: "text-gray-300 hover:bg-gray-700",
};

const LIGHT: Palette = Palette {
    page: "from-slate-100 to-white",
    card: "bg-white/80 border-slate-200",
    nav_border: "border-slate-200",
    nav_active: "bg-gradient-to-r from-cyan-400 to-blue-500 text-white",
    nav_idle: "text-slate-500 hover:bg-slate-100",
    heading: "text-slate-900",
    body: "text-slate-600",
    project_card: "bg-slate-100 hover:bg-slate-200",
    project_title: "text-slate-900",
    muted: "text-slate-400 group-hover:text-slate-900",
    particle: "bg-slate-900/10",
    toggle: "text-slate-600 hover:bg-slate-100",
};

impl Theme {
    pub fn from_prefers_dark(prefers_dark: bool) -> Self {
        if prefers_dark {
            Self::Dark
        } else {
            Self::Light
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn palette(self) -> &'static Palette {
        match self {
            Self::Light => &LIGHT,
            Self::Dark => &DARK,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_twice_is_identity() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_ne!(theme.toggled(), theme);
            assert_eq!(theme.toggled().toggled(), theme);
        }
    }

    #[test]
    fn test_ambient_preference_mapping() {
        assert_eq!(Theme::from_prefers_dark(true), Theme::Dark);
        assert_eq!(Theme::from_prefers_dark(false), Theme::Light);
        assert_eq!(Theme::default(), Theme::Dark);
    }

    #[test]
    fn test_palettes_differ() {
        assert_ne!(Theme::Light.palette(), Theme::Dark.palette());
    }
}
