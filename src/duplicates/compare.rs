//! Byte-for-byte file comparison.
//!
//! The comparison is a single linear scan over both files in matched-size
//! blocks: the first mismatching byte resolves "not duplicate", simultaneous
//! end-of-file resolves "duplicate". Both handles are scoped to one call and
//! closed on every path out of it.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// Block size for streaming comparison.
const BLOCK_SIZE: usize = 64 * 1024;

/// Compare two files byte for byte.
///
/// Returns `Ok(true)` only when both files reach end-of-file together with
/// every byte equal, so two zero-length files compare equal on the first
/// read. Callers are expected to have matched sizes already, but a length
/// mismatch is still detected and resolves `Ok(false)`.
///
/// # Errors
///
/// Propagates the underlying I/O error if either file cannot be opened or
/// read. Callers degrade that to "not a duplicate" rather than aborting.
pub fn files_identical(a: &Path, b: &Path) -> io::Result<bool> {
    let mut reader_a = File::open(a)?;
    let mut reader_b = File::open(b)?;

    let mut buf_a = vec![0u8; BLOCK_SIZE];
    let mut buf_b = vec![0u8; BLOCK_SIZE];

    loop {
        let n_a = read_block(&mut reader_a, &mut buf_a)?;
        let n_b = read_block(&mut reader_b, &mut buf_b)?;

        if n_a != n_b {
            // One file ended before the other
            return Ok(false);
        }
        if n_a == 0 {
            // Simultaneous EOF: every byte matched
            return Ok(true);
        }
        if buf_a[..n_a] != buf_b[..n_b] {
            return Ok(false);
        }
    }
}

/// Fill `buf` as far as possible, returning the number of bytes read.
///
/// Loops over short reads so both sides always see equally sized blocks
/// until end-of-file.
fn read_block(reader: &mut impl Read, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}
