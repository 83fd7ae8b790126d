//! Customizing the serialized layout.
//!
//! Run with: cargo run --example custom_options

use actdef::{parse, to_string_with_options, SerializeOptions};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let tree = parse("user.delete // Remove a user\n    id\n    @confirm\n    force?\n")?;

    println!("Default:\n{}", tree.serialize());

    let compact = SerializeOptions::new().with_indent(2).with_comment_padding(1);
    let text = to_string_with_options(&tree, compact);
    println!("Compact:\n{}", text);

    assert_eq!(parse(&text)?, tree);
    Ok(())
}
