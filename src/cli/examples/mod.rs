//! Examples command - prints the example catalog

use crate::domain::{EXAMPLE_SENTENCES, USAGE_TIPS};

/// Print example sentences and usage tips
pub async fn run() -> anyhow::Result<()> {
    println!("Example sentences:");
    for example in EXAMPLE_SENTENCES.iter() {
        println!("  - {}", example.sentence);
    }

    println!();
    println!("Tips:");
    for tip in USAGE_TIPS {
        println!("  - {}", tip);
    }

    Ok(())
}
