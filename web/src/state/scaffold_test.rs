use super::*;
use crate::util::local_storage::{LocalStorageService, MemoryStorage, StorageKey};
use crate::util::theme::{FixedColorScheme, MemoryClassList};

type TestThemeService = ThemeService<MemoryStorage, MemoryClassList, FixedColorScheme>;

fn themes(prefers_dark: bool) -> TestThemeService {
    ThemeService::new(
        LocalStorageService::new(MemoryStorage::new()),
        MemoryClassList::new(),
        FixedColorScheme::new(prefers_dark),
    )
}

fn stored_theme(themes: &TestThemeService) -> Option<Theme> {
    themes.storage().get_value(StorageKey::EnabledTheme.as_str()).unwrap()
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_sidenav_closed_and_switch_off() {
    let state = ScaffoldState::default();
    assert!(!state.is_sidenav_open.get_untracked());
    assert_eq!(state.dark_theme_toggle.get_untracked(), Some(false));
}

#[test]
fn toggle_sidenav_flips_flag() {
    let state = ScaffoldState::default();
    state.toggle_sidenav();
    assert!(state.is_sidenav_open.get_untracked());
    state.toggle_sidenav();
    assert!(!state.is_sidenav_open.get_untracked());
}

// =============================================================
// seed_theme_toggle
// =============================================================

#[test]
fn seed_turns_switch_on_for_os_dark_preference() {
    let themes = themes(true);
    let state = ScaffoldState::default();

    assert!(state.seed_theme_toggle(&themes));

    assert_eq!(state.dark_theme_toggle.get_untracked(), Some(true));
    assert_eq!(stored_theme(&themes), Some(Theme::Dark));
}

#[test]
fn seed_turns_switch_off_for_stored_light_theme() {
    let themes = themes(true);
    themes.switch_theme(Theme::Light).unwrap();
    let state = ScaffoldState::default();
    state.dark_theme_toggle.set(None);

    assert!(state.seed_theme_toggle(&themes));

    assert_eq!(state.dark_theme_toggle.get_untracked(), Some(false));
}

#[test]
fn seed_does_not_touch_body_classes() {
    let themes = themes(true);
    ScaffoldState::default().seed_theme_toggle(&themes);
    assert!(themes.body().classes().is_empty());
}

#[test]
fn unresolvable_theme_leaves_switch_unchanged() {
    let themes = themes(false);
    themes
        .storage()
        .store()
        .set_item(StorageKey::EnabledTheme.as_str(), "\"sepia-theme\"")
        .unwrap();
    let state = ScaffoldState::default();
    state.dark_theme_toggle.set(None);

    assert!(!state.seed_theme_toggle(&themes));

    assert_eq!(state.dark_theme_toggle.get_untracked(), None);
}

// =============================================================
// apply_theme_toggle
// =============================================================

#[test]
fn switch_on_persists_dark_and_applies_class() {
    let themes = themes(false);
    apply_theme_toggle(&themes, Some(true));

    assert_eq!(stored_theme(&themes), Some(Theme::Dark));
    assert!(themes.body().contains("dark-theme"));
    assert!(!themes.body().contains("light-theme"));
}

#[test]
fn switch_off_persists_light_and_applies_class() {
    let themes = themes(true);
    apply_theme_toggle(&themes, Some(true));
    apply_theme_toggle(&themes, Some(false));

    assert_eq!(stored_theme(&themes), Some(Theme::Light));
    assert_eq!(themes.body().classes(), vec!["light-theme".to_owned()]);
}

#[test]
fn unset_switch_value_maps_to_light() {
    let themes = themes(true);
    apply_theme_toggle(&themes, None);
    assert_eq!(stored_theme(&themes), Some(Theme::Light));
}

#[test]
fn logout_is_callable() {
    ScaffoldState::default().logout();
}
