#![no_main]

use std::io::Cursor;

use libfuzzer_sys::fuzz_target;
use windowrs::{WindowConfig, WindowReader, Windower};

fuzz_target!(|input: (u8, u8, Vec<u8>)| {
    let (window, step, data) = input;
    let window = window as usize % 64 + 1;
    let step = step as usize % window + 1;

    let config = WindowConfig::stepping(window, step).unwrap();
    let mut reader = WindowReader::new(Cursor::new(data.clone()), config);
    let mut buf = vec![0u8; window];
    let mut windows = Vec::new();

    loop {
        let n = reader.read_window(&mut buf).unwrap();
        if n == 0 {
            break;
        }
        windows.push(buf[..n].to_vec());
    }

    // Verify: window i covers [i*step, min(i*step + window, len))
    for (i, w) in windows.iter().enumerate() {
        let start = i * step;
        let end = (start + window).min(data.len());
        assert_eq!(&w[..], &data[start..end]);
        if i + 1 < windows.len() {
            assert_eq!(w.len(), window);
        }
    }

    // Verify: count matches the closed form
    assert_eq!(windows.len() as u64, config.window_count(data.len() as u64));

    // Verify: end-of-stream is sticky
    assert_eq!(reader.read_window(&mut buf).unwrap(), 0);

    // Verify: in-memory slicing agrees
    let sliced = Windower::new(config).window_bytes(data);
    assert_eq!(sliced.len(), windows.len());
    for (a, b) in sliced.iter().zip(windows.iter()) {
        assert_eq!(&a.data[..], &b[..]);
    }
});
