//! Binary file format for saving and loading lexicons.
//!
//! All integers are little-endian; fields stream in declaration order:
//!
//! | Field              | Bytes            | Content                        |
//! |--------------------|------------------|--------------------------------|
//! | Magic header       | 12               | ASCII `REIMU_Lex.v1`           |
//! | `num_slots`        | 4                | i32, slot count                |
//! | `num_suffix`       | 4                | i32, tail entry count          |
//! | `num_suffix_bytes` | 4                | i32, tail blob length          |
//! | slots              | `num_slots * 8`  | `(base: i32, check: i32)` pairs|
//! | `suffix_index`     | `num_suffix * 4` | i32 offsets                    |
//! | `suffix_value`     | `num_suffix * 4` | i32 values                     |
//! | `suffix_bytes`     | `num_suffix_bytes` | raw tail blob                |
//!
//! A reader rejects anything whose header differs from the magic, whose
//! counts are negative, or whose declared section lengths do not sum to
//! the file size.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use crate::error::{Error, Result};
use crate::lexicon::Lexicon;
use crate::slot::Slot;

/// Magic bytes at the start of every lexicon file.
const MAGIC: &[u8; 12] = b"REIMU_Lex.v1";

/// Header plus the three count fields.
const PREAMBLE_SIZE: u64 = 12 + 3 * 4;

fn write_i32(w: &mut impl Write, value: i32) -> std::io::Result<()> {
    w.write_all(&value.to_le_bytes())
}

fn read_i32(r: &mut impl Read) -> std::io::Result<i32> {
    let mut buf = [0u8; 4];
    r.read_exact(&mut buf)?;
    Ok(i32::from_le_bytes(buf))
}

impl Lexicon {
    /// Write the lexicon to `path`, replacing any existing file.
    ///
    /// # Errors
    ///
    /// Returns `Error::Io` when the file cannot be created or written.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let file = File::create(path)?;
        let mut w = BufWriter::new(file);

        w.write_all(MAGIC)?;
        write_i32(&mut w, self.slots.len() as i32)?;
        write_i32(&mut w, self.suffix_index.len() as i32)?;
        write_i32(&mut w, self.suffix_bytes.len() as i32)?;

        for slot in &self.slots {
            write_i32(&mut w, slot.base)?;
            write_i32(&mut w, slot.check)?;
        }
        for &offset in &self.suffix_index {
            write_i32(&mut w, offset)?;
        }
        for &value in &self.suffix_value {
            write_i32(&mut w, value)?;
        }
        w.write_all(&self.suffix_bytes)?;

        w.flush()?;
        Ok(())
    }

    /// Read a lexicon from `path`.
    ///
    /// # Errors
    ///
    /// Returns `Error::Io` for underlying read failures and
    /// `Error::Corrupted` when the header or the declared section lengths
    /// do not check out; no slot array is materialized in that case.
    pub fn read(path: impl AsRef<Path>) -> Result<Lexicon> {
        let file = File::open(path)?;
        let file_size = file.metadata()?.len();
        if file_size < PREAMBLE_SIZE {
            return Err(Error::Corrupted {
                reason: "file too small for header",
            });
        }
        let mut r = BufReader::new(file);

        let mut magic = [0u8; MAGIC.len()];
        r.read_exact(&mut magic)?;
        if &magic != MAGIC {
            return Err(Error::Corrupted {
                reason: "magic header mismatch",
            });
        }

        let num_slots = read_i32(&mut r)?;
        let num_suffix = read_i32(&mut r)?;
        let num_suffix_bytes = read_i32(&mut r)?;
        if num_slots < 0 || num_suffix < 0 || num_suffix_bytes < 0 {
            return Err(Error::Corrupted {
                reason: "negative section count",
            });
        }

        let expected = PREAMBLE_SIZE
            + num_slots as u64 * 8
            + num_suffix as u64 * 8
            + num_suffix_bytes as u64;
        if expected != file_size {
            return Err(Error::Corrupted {
                reason: "section lengths do not add up to file size",
            });
        }

        let mut slots = Vec::with_capacity(num_slots as usize);
        for _ in 0..num_slots {
            slots.push(Slot {
                base: read_i32(&mut r)?,
                check: read_i32(&mut r)?,
            });
        }

        let mut suffix_index = Vec::with_capacity(num_suffix as usize);
        for _ in 0..num_suffix {
            suffix_index.push(read_i32(&mut r)?);
        }
        let mut suffix_value = Vec::with_capacity(num_suffix as usize);
        for _ in 0..num_suffix {
            suffix_value.push(read_i32(&mut r)?);
        }

        let mut suffix_bytes = vec![0u8; num_suffix_bytes as usize];
        r.read_exact(&mut suffix_bytes)?;

        Ok(Lexicon::from_parts(
            slots,
            suffix_index,
            suffix_value,
            suffix_bytes,
        ))
    }
}
