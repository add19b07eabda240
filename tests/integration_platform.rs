use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use blockprint::model::{Block, BlockContent, Template, TextContent};
use blockprint::platform::{
    copy_with_fallback, Favorites, JsonFileStore, KeyValueStore, KvTemplateStore, MemoryClipboard, MemoryKvStore,
    TemplateStore, FAVORITES_KEY, TEMPLATES_KEY,
};

fn scratch_path() -> std::path::PathBuf {
    std::env::temp_dir().join(format!("blockprint-it-{}.json", uuid::Uuid::new_v4().simple()))
}

fn sample(id: &str) -> Template {
    Template::new(id, format!("Template {id}")).with_blocks(vec![Block::new(
        "b1",
        BlockContent::Text(TextContent {
            content: "stored".into(),
        }),
    )])
}

#[test]
fn templates_persist_across_reopen() {
    let path = scratch_path();
    {
        let kv: Arc<dyn KeyValueStore> = Arc::new(JsonFileStore::open(&path).expect("open store"));
        let store = KvTemplateStore::new(kv.clone());
        store.put(sample("t1")).unwrap();
        store.put(sample("t2")).unwrap();
        Favorites::new(kv).add("t2").unwrap();
    }

    let kv: Arc<dyn KeyValueStore> = Arc::new(JsonFileStore::open(&path).expect("reopen store"));
    let store = KvTemplateStore::new(kv.clone());
    let ids: Vec<String> = store.list().unwrap().into_iter().map(|t| t.id).collect();
    assert_eq!(ids, vec!["t1".to_string(), "t2".to_string()]);
    assert_eq!(store.get("t1").unwrap().unwrap().blocks, sample("t1").blocks);
    assert!(Favorites::new(kv).contains("t2").unwrap());

    let _ = std::fs::remove_file(&path);
}

#[test]
fn template_writes_notify_subscribers() {
    let kv = Arc::new(MemoryKvStore::new());
    let hits = Arc::new(AtomicUsize::new(0));
    let seen = hits.clone();
    let sub = kv.subscribe(Arc::new(move |ev| {
        if ev.key == TEMPLATES_KEY {
            seen.fetch_add(1, Ordering::SeqCst);
        }
    }));

    let store = KvTemplateStore::new(kv.clone());
    store.put(sample("t1")).unwrap();
    store.delete("t1").unwrap();
    store.delete("missing").unwrap();
    assert_eq!(hits.load(Ordering::SeqCst), 2);

    drop(sub);
    store.put(sample("t2")).unwrap();
    assert_eq!(hits.load(Ordering::SeqCst), 2);
}

#[test]
fn favorites_toggle_and_share_the_store() {
    let kv: Arc<dyn KeyValueStore> = Arc::new(MemoryKvStore::new());
    let favorites = Favorites::new(kv.clone());
    assert!(favorites.toggle("prospect-1").unwrap());
    assert!(favorites.toggle("prospect-2").unwrap());
    assert!(!favorites.toggle("prospect-1").unwrap());
    assert_eq!(favorites.list().unwrap(), vec!["prospect-2".to_string()]);
    assert!(kv.get(FAVORITES_KEY).unwrap().is_some());
}

#[test]
fn clipboard_falls_back_to_second_strategy() {
    let denied = MemoryClipboard::failing("platform", "not allowed");
    let selection = MemoryClipboard::new("selection");
    let html = blockprint::render(&sample("t1")).html;

    let outcome = copy_with_fallback(&[&denied, &selection], &html).unwrap();
    assert_eq!(outcome.strategy, "selection");
    assert_eq!(selection.contents(), Some(html));
}
