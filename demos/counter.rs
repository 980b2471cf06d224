//! Demonstration of a small counter store with an observable state stream

use fluxcell::Store;

fn main() {
    println!("=== Counter Store ===\n");

    // Create a store with two fields
    let store = Store::new([("count", 0), ("step", 1)]).unwrap();

    // Subscribe to the combined stream: the current snapshot is replayed
    // immediately, then one fresh snapshot arrives per field write
    println!("1. Subscribing to state");
    store.state().subscribe(|snapshot| {
        println!(
            "   [state] count = {}, step = {}",
            snapshot["count"], snapshot["step"]
        );
    });

    println!("2. Incrementing");
    let step = store.get("step").unwrap();
    store.update("count", |count| *count += step);

    println!("3. Changing the step size");
    store.set("step", 10);

    println!("4. Incrementing again");
    let step = store.get("step").unwrap();
    store.update("count", |count| *count += step);

    println!("\nFinal count: {}", store.get("count").unwrap());
}
