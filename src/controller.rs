//! Theme controller: owns the current theme, reflects it onto the page,
//! and persists it.

use tracing::{debug, warn};

use crate::store::{PreferenceStore, STORAGE_KEY};
use crate::surface::ThemeSurface;
use crate::theme::Theme;

/// Owns the logical theme state for one page view.
///
/// The current theme is held as an explicit field and is the single source
/// of truth for transitions; it is never re-derived from the surface's
/// class set, so logical and visual state cannot drift apart.
pub struct ThemeController<S, D> {
    store: S,
    surface: D,
    current: Theme,
}

impl<S: PreferenceStore, D: ThemeSurface> ThemeController<S, D> {
    /// Construct in the default light state. Nothing is applied to the
    /// surface until [`init`](Self::init) or [`apply`](Self::apply) runs.
    pub fn new(store: S, surface: D) -> Self {
        Self {
            store,
            surface,
            current: Theme::default(),
        }
    }

    /// Restore the persisted preference and establish the initial visual
    /// state. Absent or unrecognized values resolve to light. Runs once per
    /// page load, after the DOM contract has been wired up.
    pub fn init(&mut self) {
        let resolved = self
            .store
            .get(STORAGE_KEY)
            .map(|saved| Theme::parse(&saved))
            .unwrap_or_default();
        debug!(theme = %resolved, "restoring persisted theme");
        self.apply(resolved);
    }

    /// Reflect `theme` onto the surface and persist it.
    ///
    /// Adds the target class before removing the other, so the body always
    /// carries at least one theme class. Sets the toggle glyph, then writes
    /// the string name under the `theme` key. A failed write is logged and
    /// swallowed: the visual effect stands, only persistence is lost.
    pub fn apply(&mut self, theme: Theme) {
        self.surface.add_class(theme.css_class());
        self.surface.remove_class(theme.toggled().css_class());
        self.surface.set_toggle_text(theme.glyph());
        if let Err(err) = self.store.set(STORAGE_KEY, theme.as_str()) {
            warn!(%err, "theme preference not persisted");
        }
        self.current = theme;
    }

    /// Click handler: flip to the complement of the current theme.
    pub fn handle_click(&mut self) {
        let next = self.current.toggled();
        debug!(from = %self.current, to = %next, "toggle clicked");
        self.apply(next);
    }

    /// Current logical theme.
    pub fn theme(&self) -> Theme {
        self.current
    }
}
