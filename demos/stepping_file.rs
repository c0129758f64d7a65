//! File windowing example.
//!
//! Run with:
//!     cargo run --example stepping_file -- /path/to/file

use std::env;
use std::fs::File;

use windowrs::{WindowConfig, Windower};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let path = env::args()
        .nth(1)
        .unwrap_or_else(|| "Cargo.toml".to_string());

    println!("Windowing file: {}\n", path);

    let file = File::open(&path)?;
    let metadata = file.metadata()?;

    // 256-byte windows overlapping by half
    let config = WindowConfig::stepping(256, 128)?;
    println!(
        "File size: {} bytes, expecting {} windows\n",
        metadata.len(),
        config.window_count(metadata.len())
    );

    let mut total_windows = 0;
    for window in Windower::new(config).windows(file) {
        let window = window?;
        total_windows += 1;
        println!(
            "Window {}: range={:?}, partial={}",
            total_windows,
            window.range(),
            window.is_partial(config.window_size())
        );
    }

    println!("\nTotal: {} windows", total_windows);

    Ok(())
}
