//! Print the plain-object view of a document as JSON.
//!
//! Run with: cargo run --example plain_object

use actdef::parse;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let tree = parse(
        "user.get    // Fetch a user\n    id required\n    @options\n    [fields=\"*\"]\n",
    )?;

    let json = serde_json::to_string_pretty(&tree.to_plain_object())?;
    println!("{}", json);

    Ok(())
}
