//! Async windowing over tokio readers.
//!
//! Windows several in-memory streams concurrently through `tokio_util::compat`.
//!
//! Run with:
//!     cargo run --example async_tokio --features async-io

use futures_util::StreamExt;
use tokio_util::compat::TokioAsyncReadCompatExt;
use windowrs::{WindowConfig, window_async};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let streams: Vec<Vec<u8>> = vec![
        (0..50_000).map(|i| (i % 256) as u8).collect(),
        (50_000..100_000).map(|i| (i % 256) as u8).collect(),
        (100_000..150_001).map(|i| (i % 256) as u8).collect(),
    ];

    println!("Processing {} streams concurrently...\n", streams.len());

    let config = WindowConfig::stepping(4096, 1024)?;

    let handles: Vec<_> = streams
        .into_iter()
        .enumerate()
        .map(|(stream_id, data)| tokio::spawn(process_stream(stream_id, data, config)))
        .collect();

    for handle in handles {
        let (stream_id, window_count, last_len) = handle.await??;
        println!(
            "Stream {}: {} windows, last window {} bytes",
            stream_id, window_count, last_len
        );
    }

    Ok(())
}

async fn process_stream(
    stream_id: usize,
    data: Vec<u8>,
    config: WindowConfig,
) -> Result<(usize, usize, usize), windowrs::WindowError> {
    let reader = tokio::io::BufReader::new(std::io::Cursor::new(data)).compat();
    let mut stream = window_async(reader, config);

    let mut window_count = 0;
    let mut last_len = 0;
    while let Some(window) = stream.next().await {
        let window = window?;
        window_count += 1;
        last_len = window.len();
    }

    Ok((stream_id, window_count, last_len))
}
