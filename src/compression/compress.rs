use log::info;

use crate::error::{Codec, Result};
use crate::huffman_coding::huffman::huf_encode;
use crate::lzw_coding::lzw::lzw_encode;
use crate::tools::cli::Opts;
use crate::tools::data_io::{read_input, write_output};

/// Compress `data` with `codec`.
pub fn compress_bytes(codec: Codec, data: &[u8]) -> Vec<u8> {
    match codec {
        Codec::Huffman => huf_encode(data),
        Codec::Lzw => lzw_encode(data),
    }
}

/// Compress the input file named in opts into the output file.
pub fn compress(opts: &Opts) -> Result<()> {
    let data = read_input(&opts.input)?;
    let packed = compress_bytes(opts.codec, &data);
    write_output(&opts.output, &packed)?;
    info!(
        "Compressed {} ({} bytes) to {} ({} bytes)",
        opts.input,
        data.len(),
        opts.output,
        packed.len()
    );
    Ok(())
}
