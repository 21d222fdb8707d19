use log::info;

use crate::error::{Codec, Result};
use crate::huffman_coding::huffman::huf_decode;
use crate::lzw_coding::lzw::lzw_decode;
use crate::tools::cli::Opts;
use crate::tools::data_io::{read_input, write_output};

/// Decompress `data` that was produced by `codec`.
pub fn decompress_bytes(codec: Codec, data: &[u8]) -> Result<Vec<u8>> {
    match codec {
        Codec::Huffman => huf_decode(data),
        Codec::Lzw => lzw_decode(data),
    }
}

/// Decompress the input file named in opts into the output file.
pub fn decompress(opts: &Opts) -> Result<()> {
    let packed = read_input(&opts.input)?;
    let data = decompress_bytes(opts.codec, &packed)?;
    write_output(&opts.output, &data)?;
    info!(
        "Decompressed {} ({} bytes) to {} ({} bytes)",
        opts.input,
        packed.len(),
        opts.output,
        data.len()
    );
    Ok(())
}
