//! Whole-file input and output. A path of "-" binds to the standard streams.

use std::fs::File;
use std::io::{self, Read, Write};

use log::debug;

use crate::error::{Error, Result};

pub const STD_STREAM: &str = "-";

/// Read all of `path` (or stdin) into memory.
pub fn read_input(path: &str) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    if path == STD_STREAM {
        io::stdin().lock().read_to_end(&mut buf)?;
    } else {
        let mut fin = File::open(path).map_err(|source| Error::Open {
            path: path.into(),
            source,
        })?;
        fin.read_to_end(&mut buf)?;
    }
    debug!("Read {} bytes from {}", buf.len(), path);
    Ok(buf)
}

/// Write `data` to `path` (or stdout), replacing any existing file.
pub fn write_output(path: &str, data: &[u8]) -> Result<()> {
    if path == STD_STREAM {
        let mut out = io::stdout().lock();
        out.write_all(data)?;
        out.flush()?;
    } else {
        let mut f_out = File::create(path)?;
        f_out.write_all(data)?;
        f_out.flush()?;
    }
    debug!("Wrote {} bytes to {}", data.len(), path);
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn missing_input_test() {
        let err = read_input("/definitely/not/here.bin").unwrap_err();
        assert!(matches!(err, Error::Open { .. }));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn file_roundtrip_test() {
        let path = std::env::temp_dir().join(format!("hufflzw_io_{}.bin", std::process::id()));
        let path = path.to_str().unwrap();
        write_output(path, b"some bytes").unwrap();
        assert_eq!(read_input(path).unwrap(), b"some bytes");
        std::fs::remove_file(path).unwrap();
    }
}
