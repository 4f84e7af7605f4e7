//! Length-bounded formatted text in narrow and wide buffers.
//!
//! Run with:
//!     cargo run --example formatted

use growbuf::{CharBuffer, TCharBuffer, WideBuffer, fmt_buffer};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let narrow: CharBuffer = fmt_buffer!(32, "pid={} port={}", 4242, 8080)?;
    println!("narrow: {:?} ({} units)", narrow.text(), narrow.size());

    let wide: WideBuffer = fmt_buffer!(32, "naïve {}", '✓')?;
    println!("wide:   {:?} ({} units)", wide.text(), wide.size());

    // Output longer than the bound is cut silently
    let cut: TCharBuffer = fmt_buffer!(8, "{}", "a rather long message")?;
    println!("cut:    {:?} ({} units)", cut.text(), cut.size());

    Ok(())
}
