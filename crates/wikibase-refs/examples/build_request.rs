//! Builds sample reference requests and prints their wire parameters.

use serde_json::json;
use wikibase_refs::{reference, ReferenceRequest, Snak, SnakType};

fn print_request(label: &str, request: ReferenceRequest) {
    println!("== {label} ==");
    println!("action={}", request.action());
    for (key, value) in request.into_params() {
        println!("{key}={value}");
    }
    println!();
}

fn main() -> Result<(), wikibase_refs::Error> {
    let claim_id = "Q2$8C67587E-79D5-4E8C-972C-A3C5F7ED06B3";

    let add = reference::add(
        claim_id,
        "P854",
        Some(json!("https://example.com")),
        Some("url"),
        SnakType::Value,
        Some(0),
    )?;
    print_request("add", add);

    let update = reference::update(
        claim_id,
        "9d5f29a997ad9ced2b1138556a896734148c4a0c",
        [
            Snak::value("P854", json!("https://example.com/archive"), Some("url")),
            Snak::value("P813", json!("+2024-01-01T00:00:00Z"), Some("time")),
            Snak::no_value("P1065"),
        ],
        None,
    )?;
    print_request("update", update);

    let remove = reference::remove(
        claim_id,
        [
            "9d5f29a997ad9ced2b1138556a896734148c4a0c",
            "0b0ca37729a3f637c100832d2a30fe9d867ef385",
        ],
    );
    print_request("remove", remove);

    Ok(())
}
