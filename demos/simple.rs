//! Parse a definition document and print it back.
//!
//! Run with: cargo run --example simple

use actdef::parse;
use std::error::Error;

const TEXT: &str = "\
user.profile.update    // Updates a profile
    username    maxLength=\"32\"
    password?

order.create    // Place an order
    sku
    [qty=\"1\"] min=1
";

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let tree = parse(TEXT)?;

    for record in tree.list_records() {
        println!(
            "{} ({}): {} field(s)",
            record.full_name(),
            record.verb().map_or("-", |verb| verb.as_str()),
            record.list_sections().map(|section| section.len()).sum::<usize>()
        );
    }

    let text = tree.serialize();
    println!("\nSerialized:\n{}", text);

    assert_eq!(parse(&text)?, tree);
    println!("✓ Round-trip successful");

    Ok(())
}
