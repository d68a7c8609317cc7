use pretty_assertions::assert_eq;
use preferred::{
    MemoryContext, Preferences, PreferencesBuilder, PreferencesError, PreferencesSlot, StringSet,
    Value,
};
use std::collections::BTreeMap;

const PREFS_NAME: &str = "testPrefs";
const KEY: &str = "key";

fn preferences() -> Preferences {
    PreferencesBuilder::new()
        .set_store_name(PREFS_NAME)
        .set_context(MemoryContext::new("com.example.preferred"))
        .set_use_default_name(false)
        .build()
        .unwrap()
}

fn string_set(items: &[&str]) -> StringSet {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn put_then_get_returns_value_for_every_type() {
    let prefs = preferences();

    assert!(prefs.put_string(KEY, "someString"));
    assert_eq!(prefs.get_string(KEY), "someString");

    assert!(prefs.put_int(KEY, 150));
    assert_eq!(prefs.get_int(KEY), 150);

    assert!(prefs.put_boolean(KEY, true));
    assert!(prefs.get_boolean(KEY));

    assert!(prefs.put_long(KEY, 15));
    assert_eq!(prefs.get_long(KEY), 15);

    assert!(prefs.put_float(KEY, 15.0));
    assert_eq!(prefs.get_float(KEY), 15.0);

    let set = string_set(&["String 1", "String 2"]);
    assert!(prefs.put_string_set(KEY, set.clone()));
    assert_eq!(prefs.get_string_set(KEY), set);
}

#[test]
fn missing_values_return_zero_values() {
    let prefs = preferences();

    assert_eq!(prefs.get_string(KEY), "");
    assert_eq!(prefs.get_int(KEY), 0);
    assert!(!prefs.get_boolean(KEY));
    assert_eq!(prefs.get_long(KEY), 0);
    assert_eq!(prefs.get_float(KEY), 0.0);
    assert_eq!(prefs.get_string_set(KEY), StringSet::new());
}

#[test]
fn all_entries_returns_every_preference() {
    let prefs = preferences();
    assert!(prefs.put_string("key1", "someString"));
    assert!(prefs.put_int("key2", 150));
    assert!(prefs.put_boolean("key3", true));
    assert!(prefs.put_long("key4", 15));

    let expected = BTreeMap::from([
        ("key1".to_string(), Value::String("someString".to_string())),
        ("key2".to_string(), Value::Int(150)),
        ("key3".to_string(), Value::Boolean(true)),
        ("key4".to_string(), Value::Long(15)),
    ]);
    assert_eq!(prefs.all_entries(), expected);
}

#[test]
fn contains_tracks_writes_and_removals() {
    let prefs = preferences();
    assert!(!prefs.contains(KEY));

    assert!(prefs.put_string(KEY, "someString"));
    assert!(prefs.contains(KEY));

    assert!(prefs.remove(KEY));
    assert!(!prefs.contains(KEY));
    assert_eq!(prefs.get_string(KEY), "");
}

#[test]
fn clear_empties_the_store() {
    let prefs = preferences();
    assert!(prefs.put_string("key", "someString"));
    assert!(prefs.put_boolean("flag", true));

    assert!(prefs.clear());

    assert!(prefs.all_entries().is_empty());
    assert!(!prefs.contains("key"));
    assert!(!prefs.contains("flag"));
    assert_eq!(prefs.get_string("key"), "");
}

#[test]
fn editor_commits_a_batch_at_once() {
    let prefs = preferences();
    assert!(prefs.put_string("stale", "value"));

    let committed = prefs
        .edit()
        .clear()
        .put_string("theme", "dark")
        .put_int("font_size", 14)
        .commit();

    assert!(committed);
    assert!(!prefs.contains("stale"));
    assert_eq!(prefs.get_string("theme"), "dark");
    assert_eq!(prefs.get_int("font_size"), 14);
}

#[test]
fn raw_store_sees_facade_writes() {
    let prefs = preferences();
    assert!(prefs.put_long("started_at", 1_700_000_000));

    assert_eq!(
        prefs.store().get("started_at"),
        Some(Value::Long(1_700_000_000))
    );
}

#[test]
fn accessing_before_install_is_an_initialization_error() {
    let slot = PreferencesSlot::new();
    assert!(matches!(
        slot.get_or_fail(),
        Err(PreferencesError::NotInitialized)
    ));

    PreferencesBuilder::new()
        .set_store_name(PREFS_NAME)
        .set_context(MemoryContext::new("com.example.preferred"))
        .install(&slot)
        .unwrap();

    let prefs = slot.get_or_fail().unwrap();
    assert_eq!(prefs.name(), PREFS_NAME);
}

#[test]
fn build_without_context_is_a_configuration_error() {
    let err = PreferencesBuilder::new()
        .set_store_name(PREFS_NAME)
        .build()
        .unwrap_err();

    assert!(matches!(err, PreferencesError::MissingContext));
}
