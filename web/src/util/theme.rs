//! Theme resolution and application.
//!
//! Resolves the active theme from the stored preference, falling back to the
//! OS color-scheme media query on first run, and applies it as a class on
//! `<body>`. Requires a browser environment for the `Browser*`/`Body*`
//! collaborators; everything else runs natively.
//!
//! TRADE-OFFS
//! ==========
//! The first resolution is persisted, so later page loads never re-query the
//! media query and a changed OS preference is ignored once a value is stored.
//! Switching clears every known theme class rather than only the previous
//! one, which also repairs a body that carries several theme classes.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::collections::BTreeSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, PoisonError};

use crate::state::theme::Theme;
use crate::util::local_storage::{BrowserStorage, KeyValueStore, LocalStorageService, StorageError, StorageKey};

/// Media query reporting an OS-level dark preference.
pub const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("document unavailable: {0}")]
    Document(String),
}

// =============================================================================
// COLLABORATORS
// =============================================================================

/// Source of the OS color-scheme preference.
pub trait ColorSchemePreference {
    fn prefers_dark(&self) -> bool;
}

/// Class list of the element that carries the theme class.
pub trait ClassList {
    /// # Errors
    ///
    /// Returns an error if the element is missing or rejects the token.
    fn add_class(&self, class: &str) -> Result<(), ThemeError>;

    /// # Errors
    ///
    /// Returns an error if the element is missing or rejects the token.
    fn remove_class(&self, class: &str) -> Result<(), ThemeError>;

    fn contains(&self, class: &str) -> bool;
}

/// `window.matchMedia`. Unsupported or failing queries count as "not dark".
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserColorScheme;

impl ColorSchemePreference for BrowserColorScheme {
    fn prefers_dark(&self) -> bool {
        #[cfg(feature = "hydrate")]
        {
            web_sys::window()
                .and_then(|w| w.match_media(DARK_SCHEME_QUERY).ok().flatten())
                .map_or(false, |mq| mq.matches())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            false
        }
    }
}

/// Settable preference for tests and non-browser embeddings.
#[derive(Debug, Default)]
pub struct FixedColorScheme {
    dark: AtomicBool,
}

impl FixedColorScheme {
    #[must_use]
    pub fn new(dark: bool) -> Self {
        Self { dark: AtomicBool::new(dark) }
    }

    pub fn set(&self, dark: bool) {
        self.dark.store(dark, Ordering::Relaxed);
    }
}

impl ColorSchemePreference for FixedColorScheme {
    fn prefers_dark(&self) -> bool {
        self.dark.load(Ordering::Relaxed)
    }
}

/// `document.body.classList`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BodyClassList;

#[cfg(feature = "hydrate")]
fn body_class_list() -> Result<web_sys::DomTokenList, ThemeError> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| ThemeError::Document("no window document".to_owned()))?;
    let body = document.body().ok_or_else(|| ThemeError::Document("no <body> element".to_owned()))?;
    Ok(body.class_list())
}

impl ClassList for BodyClassList {
    fn add_class(&self, class: &str) -> Result<(), ThemeError> {
        #[cfg(feature = "hydrate")]
        {
            body_class_list()?
                .add_1(class)
                .map_err(|e| ThemeError::Document(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = class;
            Ok(())
        }
    }

    fn remove_class(&self, class: &str) -> Result<(), ThemeError> {
        #[cfg(feature = "hydrate")]
        {
            body_class_list()?
                .remove_1(class)
                .map_err(|e| ThemeError::Document(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = class;
            Ok(())
        }
    }

    fn contains(&self, class: &str) -> bool {
        #[cfg(feature = "hydrate")]
        {
            body_class_list().map_or(false, |list| list.contains(class))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = class;
            false
        }
    }
}

/// In-process class set.
#[derive(Debug, Default)]
pub struct MemoryClassList {
    classes: Mutex<BTreeSet<String>>,
}

impl MemoryClassList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing set of classes.
    pub fn with_classes<I, T>(classes: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self { classes: Mutex::new(classes.into_iter().map(Into::into).collect()) }
    }

    /// Current classes in sorted order.
    pub fn classes(&self) -> Vec<String> {
        self.classes.lock().unwrap_or_else(PoisonError::into_inner).iter().cloned().collect()
    }
}

impl ClassList for MemoryClassList {
    fn add_class(&self, class: &str) -> Result<(), ThemeError> {
        self.classes.lock().unwrap_or_else(PoisonError::into_inner).insert(class.to_owned());
        Ok(())
    }

    fn remove_class(&self, class: &str) -> Result<(), ThemeError> {
        self.classes.lock().unwrap_or_else(PoisonError::into_inner).remove(class);
        Ok(())
    }

    fn contains(&self, class: &str) -> bool {
        self.classes.lock().unwrap_or_else(PoisonError::into_inner).contains(class)
    }
}

// =============================================================================
// SERVICE
// =============================================================================

/// Resolves, applies and persists the active theme.
#[derive(Debug, Default)]
pub struct ThemeService<S, C, P> {
    storage: LocalStorageService<S>,
    body: C,
    color_scheme: P,
}

/// Theme service wired to the real browser.
pub type BrowserThemeService = ThemeService<BrowserStorage, BodyClassList, BrowserColorScheme>;

impl BrowserThemeService {
    #[must_use]
    pub fn browser() -> Self {
        Self::new(LocalStorageService::new(BrowserStorage), BodyClassList, BrowserColorScheme)
    }
}

impl<S, C, P> ThemeService<S, C, P>
where
    S: KeyValueStore,
    C: ClassList,
    P: ColorSchemePreference,
{
    pub fn new(storage: LocalStorageService<S>, body: C, color_scheme: P) -> Self {
        Self { storage, body, color_scheme }
    }

    pub fn storage(&self) -> &LocalStorageService<S> {
        &self.storage
    }

    pub fn body(&self) -> &C {
        &self.body
    }

    pub fn color_scheme(&self) -> &P {
        &self.color_scheme
    }

    /// Replace whatever theme class `<body>` carries with `theme`'s and
    /// persist `theme`.
    ///
    /// # Errors
    ///
    /// Returns an error if the class list cannot be updated or the preference
    /// cannot be written.
    pub fn switch_theme(&self, theme: Theme) -> Result<(), ThemeError> {
        for known in Theme::ALL {
            self.body.remove_class(known.css_class())?;
        }
        self.body.add_class(theme.css_class())?;
        self.storage.set_value(StorageKey::EnabledTheme.as_str(), theme)?;
        log::debug!("theme switched to {theme}");
        Ok(())
    }

    /// The stored theme, or the OS preference resolved and stored on first
    /// run. A stored `null`, `false`, `0` or `""` counts as no preference.
    ///
    /// # Errors
    ///
    /// Returns an error if the stored preference is not a known theme or the
    /// resolved value cannot be written.
    pub fn current_theme(&self) -> Result<Theme, ThemeError> {
        let key = StorageKey::EnabledTheme.as_str();
        if let Some(stored) = self.storage.get_value::<serde_json::Value>(key)? {
            if !is_unset(&stored) {
                return serde_json::from_value(stored)
                    .map_err(|source| StorageError::Deserialize { key: key.to_owned(), source }.into());
            }
        }

        let theme = if self.color_scheme.prefers_dark() { Theme::Dark } else { Theme::Light };
        self.storage.set_value(key, theme)?;
        log::debug!("no stored theme; resolved {theme} from color-scheme preference");
        Ok(theme)
    }
}

/// Stored values that mean "no preference": `null`, `false`, `0`, `""`.
fn is_unset(value: &serde_json::Value) -> bool {
    match value {
        serde_json::Value::Null => true,
        serde_json::Value::Bool(b) => !b,
        serde_json::Value::Number(n) => n.as_f64() == Some(0.0),
        serde_json::Value::String(s) => s.is_empty(),
        serde_json::Value::Array(_) | serde_json::Value::Object(_) => false,
    }
}
