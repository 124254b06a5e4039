//! set-tour
//!
//! Walks through every `Set` operation on integer and string sets and logs
//! the results.
//!
//! # Usage
//!
//! ```bash
//! RUST_LOG=set_tour=info,setwise=trace cargo run -p set-tour
//! ```

use anyhow::Context;
use setwise::collection::Set;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "set_tour=info,setwise=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut numbers = Set::new();
    numbers.insert(10);
    numbers.insert(20);
    numbers.insert(30);
    numbers.insert(20);
    tracing::info!("numbers: {numbers}");

    numbers.remove(&10);
    tracing::info!("after remove(10): {numbers}");
    tracing::info!(
        contains_20 = numbers.contains(&20),
        contains_10 = numbers.contains(&10),
        len = numbers.len(),
        "membership"
    );
    tracing::info!("elements: {:?}", numbers.elements());

    let copy = numbers.clone();
    tracing::info!("clone: {copy}");

    let other = Set::from([20, 40, 50]);
    let union = numbers.union(&other);
    let intersection = numbers.intersection(&other);
    let difference = numbers.difference(&other);
    tracing::info!("union: {union}");
    tracing::info!("intersection: {intersection}");
    tracing::info!("difference: {difference}");

    tracing::info!(
        is_subset = intersection.is_subset(&union),
        is_superset = union.is_superset(&intersection),
        "relations"
    );
    tracing::info!(
        equals_clone = numbers == copy,
        equals_other = numbers == other,
        "equality"
    );

    let json = numbers.to_json().context("encoding numbers")?;
    tracing::info!("json: {json}");

    let decoded: Set<i32> = Set::from_json(&json).context("decoding numbers")?;
    tracing::info!("decoded: {decoded}");

    if let Err(error) = Set::<i32>::from_json(r#"{"not": "an array"}"#) {
        tracing::warn!(%error, "malformed input rejected");
    }

    numbers.clear();
    tracing::info!("after clear: {numbers}");

    let fruits = Set::from(["apple", "banana", "cherry"]);
    tracing::info!("fruits: {fruits}");
    for subset in fruits.power_set() {
        tracing::info!("subset: {subset}");
    }

    let subsets = serde_json::to_string(&fruits.power_set()).context("encoding power set")?;
    tracing::info!("power set json: {subsets}");

    Ok(())
}
