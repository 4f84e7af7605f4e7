//! Staging buffer fed in pieces and drained record by record.
//!
//! Run with:
//!     RUST_LOG=growbuf=trace cargo run --example stream_drain

use growbuf::GrowableBuffer;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Length-prefixed records split across arbitrary read boundaries
    let mut wire = Vec::new();
    for i in 0..20u8 {
        let body = vec![b'a' + i; (i as usize % 5) + 1];
        wire.push(body.len() as u8);
        wire.extend_from_slice(&body);
    }

    let mut staging = GrowableBuffer::<u8, 64>::new();
    let mut records = 0;

    for piece in wire.chunks(7) {
        staging.append_slice(piece)?;

        // Consume every complete record at the front
        while let Some(&len) = staging.as_slice().first() {
            let len = len as usize;
            if staging.size() < len + 1 {
                break;
            }
            let body = &staging.as_slice()[1..=len];
            println!("record {:2}: {}", records, String::from_utf8_lossy(body));
            records += 1;
            staging.drain_front(len + 1);
        }

        println!(
            "  staged {} bytes, capacity {}",
            staging.size(),
            staging.capacity()
        );
    }

    println!("\nTotal records: {}", records);
    Ok(())
}
