/*++

Licensed under the Apache-2.0 license.

File Name:

    bin2data.rs

Abstract:

    Converts a raw firmware image into the one-word-per-line binary text
    format loaded by the HDL testbench memory.

--*/

use anyhow::{bail, Context};
use std::fs;
use std::path::{Path, PathBuf};

/// Extension of the testbench memory file
pub const DATA_EXTENSION: &str = "data";

const WORD_SIZE: usize = core::mem::size_of::<u32>();

/// Render `image` as little-endian 32-bit words, one zero padded binary
/// string per line.
pub fn bin_to_data(image: &[u8]) -> anyhow::Result<String> {
    if image.len() % WORD_SIZE != 0 {
        bail!(
            "image length {} is not a multiple of {WORD_SIZE} bytes",
            image.len()
        );
    }
    let mut out = String::with_capacity(image.len() / WORD_SIZE * 33);
    for chunk in image.chunks_exact(WORD_SIZE) {
        let word = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        out.push_str(&format!("{word:032b}\n"));
    }
    Ok(out)
}

/// `input` with its extension swapped for `.data`
pub fn default_output_path(input: &Path) -> PathBuf {
    input.with_extension(DATA_EXTENSION)
}

/// Convert the image at `input` and write the result to `out`, or next to
/// the input when `out` is `None`. Returns the path written.
pub fn convert(input: &Path, out: Option<&Path>) -> anyhow::Result<PathBuf> {
    let image = fs::read(input).with_context(|| format!("reading {}", input.display()))?;
    let data = bin_to_data(&image).with_context(|| format!("converting {}", input.display()))?;

    let out = out.map_or_else(|| default_output_path(input), Path::to_path_buf);
    fs::write(&out, data).with_context(|| format!("writing {}", out.display()))?;
    log::info!(
        "wrote {} words from {} to {}",
        image.len() / WORD_SIZE,
        input.display(),
        out.display()
    );
    Ok(out)
}
