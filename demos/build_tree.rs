//! Build a tree in code, with sections, defaults and attributes.
//!
//! Run with: cargo run --example build_tree

use actdef::{Field, Tree};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let mut tree = Tree::new();

    let record = tree.add_record("server", Some("http"), Some("setPort"), Some("Configure the listener"))?;
    record.add_field(
        Field::optional("port", Some("8080"))?
            .with_attribute("min", 1)
            .with_attribute("max", 65535)
            .with_description("Port number"),
    )?;
    record.add_field_to("tls", Field::optional("cert", None)?)?;
    record.add_field_to("tls", Field::optional("key", None)?)?;

    tree.add_record("server", None, Some("listConnections"), None)?;

    // Adding the same record twice is refused.
    if let Err(err) = tree.add_record("server", None, Some("listConnections"), None) {
        println!("Refused: {}", err);
    }

    println!("{}", tree.serialize());
    Ok(())
}
