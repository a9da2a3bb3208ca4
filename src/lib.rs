//! Light/dark page theme toggle with local-storage persistence.
//!
//! This library provides:
//! - A two-state `Theme` model (light/dark) with its persisted wire form
//! - A `ThemeController` that reflects the theme onto a page surface and
//!   persists the choice across reloads
//! - Injectable seams for the key-value store and the document surface, so
//!   the controller runs unchanged against a real browser or in-memory fakes
//! - Browser bindings (localStorage + DOM) for the `wasm32` target

pub mod controller;
#[cfg(target_arch = "wasm32")]
pub mod dom;
pub mod error;
pub mod store;
pub mod surface;
pub mod theme;

pub use controller::ThemeController;
pub use error::{SetupError, StorageError};
pub use store::{MemoryStore, PreferenceStore, STORAGE_KEY};
pub use surface::ThemeSurface;
pub use theme::Theme;
