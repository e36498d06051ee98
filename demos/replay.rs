//! Replays a captured NMEA 0183 stream and prints every new fix.
//!
//! ```text
//! RUST_LOG=debug cargo run --example replay < capture.nmea
//! ```

use std::io::{self, Read};

use log::info;
use nmea0183_fix::Decoder;

fn main() -> io::Result<()> {
    env_logger::init();

    let mut decoder = Decoder::new();
    let mut stdin = io::stdin().lock();
    let mut chunk = [0u8; 64];

    loop {
        let read = stdin.read(&mut chunk)?;
        if read == 0 {
            break;
        }

        decoder.feed_all(chunk[..read].iter().copied());

        if decoder.take_new_data() {
            let fix = decoder.fix();
            println!(
                "{:08} {:>11.6} {:>11.6} {:>6}m  sats {:>2}  hdop {:>4.1}  {:?}",
                fix.time,
                fix.latitude_degrees(),
                fix.longitude_degrees(),
                fix.altitude,
                fix.satellites,
                fix.horizontal_dilution(),
                fix.quality,
            );
        }
    }

    let diagnostics = decoder.diagnostics();
    info!(
        "{} sentences framed, {} accepted, {} rejected, {} overflowed",
        diagnostics.sentences,
        diagnostics.accepted,
        diagnostics.rejected(),
        diagnostics.overflows
    );

    Ok(())
}
