use web_sys::window;

const THEME_KEY: &str = "theme";

/// Visual theme preference, persisted as the literal `"dark"` or `"light"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn from_str(value: &str) -> Option<Theme> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }
}

/// Stored preference wins; otherwise fall back to the OS-reported color
/// scheme. Runs before the first paint, so there is no theme flash.
pub fn resolve() -> Theme {
    if let Some(stored) = read_stored() {
        return stored;
    }
    if system_prefers_dark() {
        Theme::Dark
    } else {
        Theme::Light
    }
}

/// Idempotent: writing the same literal twice is the same as once.
pub fn persist(theme: Theme) {
    if let Some(storage) = window().and_then(|w| w.local_storage().ok()).flatten() {
        let _ = storage.set_item(THEME_KEY, theme.as_str());
    }
}

/// Reflect the theme on the document element, where the stylesheets look
/// for the `dark` class.
pub fn apply(theme: Theme) {
    let root = window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element());
    if let Some(root) = root {
        let class_list = root.class_list();
        let result = if theme.is_dark() {
            class_list.add_1("dark")
        } else {
            class_list.remove_1("dark")
        };
        let _ = result;
    }
}

fn read_stored() -> Option<Theme> {
    let storage = window()?.local_storage().ok().flatten()?;
    let value = storage.get_item(THEME_KEY).ok().flatten()?;
    Theme::from_str(&value)
}

fn system_prefers_dark() -> bool {
    window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok())
        .flatten()
        .map(|query| query.matches())
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literals_round_trip() {
        assert_eq!(Theme::from_str("dark"), Some(Theme::Dark));
        assert_eq!(Theme::from_str("light"), Some(Theme::Light));
        assert_eq!(Theme::from_str(Theme::Dark.as_str()), Some(Theme::Dark));
        assert_eq!(Theme::from_str("solarized"), None);
    }

    #[test]
    fn toggle_flips_and_returns() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
    }
}
