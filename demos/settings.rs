//! Demonstration of a JSON-backed settings store

use fluxcell::Store;
use serde_json::json;

fn main() {
    println!("=== Settings Store ===\n");

    // Build the store from a JSON object; non-object values are rejected
    let store = Store::from_json(&json!({
        "theme": "dark",
        "font_size": 14,
        "autosave": true,
    }))
    .unwrap();

    println!("1. Fields: {:?}", store.fields());

    println!("2. Watching for changes");
    store.state().subscribe(|snapshot| {
        println!("   [settings] {}", json!(snapshot));
    });

    println!("3. Switching theme");
    store.set("theme", json!("light"));

    println!("4. Bumping font size");
    store.set("font_size", json!(16));

    // Snapshots are independent copies of the settings
    let snapshot = store.state().value();
    println!("\nLatest snapshot: {}", json!(snapshot));
}
