//! Example of resuming traversal byte by byte from a shared prefix.
//!
//! cargo run --package reimu --example incremental

use reimu::{Cursor, build};

fn main() -> Result<(), reimu::Error> {
    let lexicon = build([("cat", 10), ("car", 20), ("cart", 25), ("dog", 30)])?;

    // Walk the shared prefix "ca" once, then branch off the same cursor.
    let mut prefix = Cursor::new();
    let _ = lexicon.traverse(b"ca", &mut prefix);

    for rest in [&b"t"[..], b"r", b"rt"] {
        let mut cursor = prefix;
        match lexicon.traverse(rest, &mut cursor) {
            Some(value) => println!("ca{} -> {value}", String::from_utf8_lossy(rest)),
            None => println!("ca{} -> (no entry)", String::from_utf8_lossy(rest)),
        }
    }

    Ok(())
}
