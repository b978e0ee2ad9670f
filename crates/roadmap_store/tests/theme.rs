use std::sync::Arc;

use roadmap_store::{KeyValueStore, MemoryStore, Theme, ThemeStore};

#[test]
fn falls_back_to_system_preference() {
    let kv = Arc::new(MemoryStore::new());
    let themes = ThemeStore::new(kv.clone(), "fpc_theme");

    assert_eq!(themes.get(Theme::Light), Theme::Light);
    assert_eq!(themes.get(Theme::Dark), Theme::Dark);

    kv.set("fpc_theme", "sepia").unwrap();
    assert_eq!(themes.get(Theme::Light), Theme::Light);
}

#[test]
fn toggle_persists_bare_theme_name() {
    let kv = Arc::new(MemoryStore::new());
    let themes = ThemeStore::new(kv.clone(), "fpc_theme");

    assert_eq!(themes.toggle(Theme::Dark), Theme::Light);
    assert_eq!(kv.get("fpc_theme").unwrap().as_deref(), Some("light"));
    assert_eq!(themes.get(Theme::Dark), Theme::Light);
    assert_eq!(themes.toggle(Theme::Dark), Theme::Dark);
}
