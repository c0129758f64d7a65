//! Basic rolling window example.
//!
//! Computes a naive byte-sum over every 4-byte window of a small buffer.
//!
//! Run with:
//!     cargo run --example rolling_basic

use std::io::Cursor;

use windowrs::{LogSink, WindowReader};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let data = b"the quick brown fox jumps over the lazy dog".to_vec();
    let window_size = 4;

    println!("Rolling {} bytes with a {}-byte window...\n", data.len(), window_size);

    // RUST_LOG=windowrs::ring=debug shows the ring after every window
    let mut reader =
        WindowReader::rolling(Cursor::new(data), window_size)?.with_diagnostics(LogSink::default());

    let mut buf = vec![0u8; window_size];
    loop {
        let n = reader.read_window(&mut buf)?;
        if n == 0 {
            break;
        }
        let sum: u32 = buf[..n].iter().map(|&b| b as u32).sum();
        println!(
            "Window {:>2}: offset={:>2}, {:?}, sum={}",
            reader.windows_produced(),
            reader.window_offset().unwrap_or(0),
            String::from_utf8_lossy(&buf[..n]),
            sum
        );
    }

    println!("\nTotal: {} windows", reader.windows_produced());

    Ok(())
}
