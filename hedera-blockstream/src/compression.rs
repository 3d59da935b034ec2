use std::io::Read;

use flate2::read::GzDecoder;

use crate::error::Error;

const GZIP_MAGIC: [u8; 2] = [0x1F, 0x8B];
const INFLATE_CHUNK: usize = 32 * 1024;

/// True exactly when `payload` starts with the gzip magic bytes.
pub fn is_gzip(payload: &[u8]) -> bool {
    payload.len() >= 2 && payload[0] == GZIP_MAGIC[0] && payload[1] == GZIP_MAGIC[1]
}

/// Inflates `payload` through a 32 KiB read buffer if it is gzip-compressed;
/// otherwise returns a copy unchanged. A truncated or corrupt gzip stream
/// surfaces [`Error::Decompression`] rather than a partial result.
pub fn decompress(payload: &[u8]) -> Result<Vec<u8>, Error> {
    if !is_gzip(payload) {
        return Ok(payload.to_vec());
    }

    let mut decoder = GzDecoder::new(payload);
    let mut out = Vec::with_capacity(payload.len() * 2);
    let mut chunk = [0u8; INFLATE_CHUNK];

    loop {
        let n = decoder
            .read(&mut chunk)
            .map_err(|e| Error::Decompression(e.to_string()))?;
        if n == 0 {
            break;
        }
        out.extend_from_slice(&chunk[..n]);
    }

    Ok(out)
}
