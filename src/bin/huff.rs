//Enable more cargo lint tests
#![warn(rust_2018_idioms)]

use std::process::ExitCode;

use hufflzw::tools::cli::launch;
use hufflzw::Codec;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

fn main() -> ExitCode {
    launch(Codec::Huffman)
}
