//! Light/dark theme and info-bubble dismissal, persisted in a [`KeyValueStore`].

mod store;

pub use store::{FileStore, KeyValueStore, MemoryStore, StoreError};

const THEME_KEY: &str = "theme";
const INFO_BUBBLE_KEY: &str = "infobubble_dismiss_ts";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Theme stored at startup; anything but `"dark"` is light.
    pub fn load(store: &dyn KeyValueStore) -> Self {
        match store.get(THEME_KEY).as_deref() {
            Some("dark") => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Bootstrap stylesheet for this theme.
    pub fn stylesheet(self) -> &'static str {
        match self {
            Theme::Light => "/static/css/bootstrap.min.css",
            Theme::Dark => "/static/css/bootstrap-dark.min.css",
        }
    }

    /// Class added to `<body>`, if any.
    pub fn body_class(self) -> Option<&'static str> {
        match self {
            Theme::Light => None,
            Theme::Dark => Some("dark"),
        }
    }
}

/// Flips the stored theme and returns the new one.
pub fn toggle_theme(store: &mut dyn KeyValueStore) -> Result<Theme, StoreError> {
    let next = Theme::load(store).toggled();
    store.set(THEME_KEY, next.as_str())?;
    tracing::debug!("theme switched to {}", next.as_str());
    Ok(next)
}

/// The bubble is shown until the reader dismisses this revision (`bubble_ts`)
/// or a newer one. A missing or blank stored value counts as never dismissed;
/// a non-numeric one never compares lower, so the bubble stays hidden.
pub fn info_bubble_visible(store: &dyn KeyValueStore, bubble_ts: i64) -> bool {
    let dismissed = match store.get(INFO_BUBBLE_KEY) {
        None => 0.0,
        Some(v) if v.trim().is_empty() => 0.0,
        Some(v) => v.trim().parse::<f64>().unwrap_or(f64::NAN),
    };
    dismissed < bubble_ts as f64
}

pub fn dismiss_info_bubble(store: &mut dyn KeyValueStore, bubble_ts: i64) -> Result<(), StoreError> {
    store.set(INFO_BUBBLE_KEY, &bubble_ts.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_light() {
        let store = MemoryStore::new();
        assert_eq!(Theme::load(&store), Theme::Light);
    }

    #[test]
    fn unknown_value_is_light() {
        let mut store = MemoryStore::new();
        store.set("theme", "sepia").unwrap();
        assert_eq!(Theme::load(&store), Theme::Light);
    }

    #[test]
    fn toggle_persists() {
        let mut store = MemoryStore::new();
        assert_eq!(toggle_theme(&mut store).unwrap(), Theme::Dark);
        assert_eq!(store.get("theme").as_deref(), Some("dark"));
        assert_eq!(toggle_theme(&mut store).unwrap(), Theme::Light);
        assert_eq!(store.get("theme").as_deref(), Some("light"));
    }

    #[test]
    fn theme_assets() {
        assert_eq!(Theme::Dark.stylesheet(), "/static/css/bootstrap-dark.min.css");
        assert_eq!(Theme::Light.stylesheet(), "/static/css/bootstrap.min.css");
        assert_eq!(Theme::Dark.body_class(), Some("dark"));
        assert_eq!(Theme::Light.body_class(), None);
    }

    #[test]
    fn info_bubble_dismissal() {
        let mut store = MemoryStore::new();
        assert!(info_bubble_visible(&store, 100));
        dismiss_info_bubble(&mut store, 100).unwrap();
        assert!(!info_bubble_visible(&store, 100));
        assert!(info_bubble_visible(&store, 101));
    }

    #[test]
    fn garbage_dismissal_hides_bubble() {
        let mut store = MemoryStore::new();
        store.set("infobubble_dismiss_ts", "soon").unwrap();
        assert!(!info_bubble_visible(&store, 1));
        assert!(!info_bubble_visible(&store, i64::MAX));
    }

    #[test]
    fn blank_dismissal_counts_as_zero() {
        let mut store = MemoryStore::new();
        store.set("infobubble_dismiss_ts", " ").unwrap();
        assert!(info_bubble_visible(&store, 1));
        assert!(!info_bubble_visible(&store, 0));
    }
}
