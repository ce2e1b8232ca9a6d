use super::*;
use serde::Deserialize;
use serde_json::json;

fn service() -> LocalStorageService<MemoryStorage> {
    LocalStorageService::new(MemoryStorage::new())
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Draft {
    title: String,
    tags: Vec<String>,
    pinned: bool,
}

// =============================================================
// StorageKey
// =============================================================

#[test]
fn enabled_theme_key_is_namespaced() {
    assert_eq!(StorageKey::EnabledTheme.as_str(), "taskrs.enabled-theme");
    assert_eq!(StorageKey::EnabledTheme.to_string(), "taskrs.enabled-theme");
}

// =============================================================
// set_value / get_value
// =============================================================

#[test]
fn set_value_returns_original_value() {
    let svc = service();
    let returned = svc.set_value("k", 42_u32).unwrap();
    assert_eq!(returned, 42);
}

#[test]
fn set_value_stores_json_text() {
    let svc = service();
    svc.set_value("k", "dark-theme").unwrap();
    assert_eq!(svc.store().raw("k").as_deref(), Some("\"dark-theme\""));
}

#[test]
fn get_value_missing_key_is_none() {
    let svc = service();
    let value: Option<String> = svc.get_value("missing").unwrap();
    assert_eq!(value, None);
}

#[test]
fn get_value_returns_deep_equal_struct() {
    let svc = service();
    let draft = Draft {
        title: "Ship it".to_owned(),
        tags: vec!["web".to_owned(), "ui".to_owned()],
        pinned: true,
    };
    svc.set_value("draft", draft.clone()).unwrap();
    assert_eq!(svc.get_value::<Draft>("draft").unwrap(), Some(draft));
}

#[test]
fn get_value_returns_deep_equal_json_value() {
    let svc = service();
    let value = json!({ "a": [1, 2, { "b": null }], "c": "text", "d": 1.5 });
    svc.set_value("v", &value).unwrap();
    assert_eq!(svc.get_value::<serde_json::Value>("v").unwrap(), Some(value));
}

#[test]
fn set_value_overwrites_previous_entry() {
    let svc = service();
    svc.set_value("k", "first").unwrap();
    svc.set_value("k", "second").unwrap();
    assert_eq!(svc.get_value::<String>("k").unwrap().as_deref(), Some("second"));
    assert_eq!(svc.store().len(), 1);
}

#[test]
fn get_value_propagates_invalid_json() {
    let svc = service();
    svc.store().set_item("k", "{not json").unwrap();
    let err = svc.get_value::<serde_json::Value>("k").unwrap_err();
    assert!(matches!(err, StorageError::Deserialize { ref key, .. } if key == "k"));
}

#[test]
fn get_value_rejects_mismatched_type() {
    let svc = service();
    svc.set_value("k", "text").unwrap();
    assert!(svc.get_value::<u32>("k").is_err());
}

// =============================================================
// remove_value
// =============================================================

#[test]
fn remove_value_returns_prior_value_and_clears_key() {
    let svc = service();
    svc.set_value("k", vec![1, 2, 3]).unwrap();
    let removed: Option<Vec<i32>> = svc.remove_value("k").unwrap();
    assert_eq!(removed, Some(vec![1, 2, 3]));
    assert_eq!(svc.get_value::<Vec<i32>>("k").unwrap(), None);
    assert!(svc.store().is_empty());
}

#[test]
fn remove_value_on_missing_key_is_none() {
    let svc = service();
    let removed: Option<String> = svc.remove_value("missing").unwrap();
    assert_eq!(removed, None);
}

#[test]
fn remove_value_keeps_key_when_stored_text_is_corrupt() {
    let svc = service();
    svc.store().set_item("k", "][").unwrap();
    assert!(svc.remove_value::<serde_json::Value>("k").is_err());
    assert_eq!(svc.store().raw("k").as_deref(), Some("]["));
}

// =============================================================
// BrowserStorage outside the browser
// =============================================================

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_storage_is_empty_and_discards_writes_without_hydrate() {
    let svc = LocalStorageService::new(BrowserStorage);
    svc.set_value("k", true).unwrap();
    assert_eq!(svc.get_value::<bool>("k").unwrap(), None);
    assert_eq!(svc.remove_value::<bool>("k").unwrap(), None);
}
