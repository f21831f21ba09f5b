//! Serializes box objects into a Java `ModelBase` source file.
//!
//! Export is one synchronous pass over an in-memory snapshot. Only the output sink can fail.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use cube_model::{SourceObject, TextureAtlas};
use tracing::info;

mod animated;
mod emit;
mod error;
mod options;
mod static_model;

pub use animated::*;
pub use emit::*;
pub use error::*;
pub use options::*;
pub use static_model::export_static;

/// Static or animated export, as selected by `options.animated`.
pub fn export(objects: &[SourceObject], texture: TextureAtlas, options: &ExportOptions) -> String {
    if options.animated {
        export_animated(objects, texture, options)
    } else {
        export_static(objects, texture, options)
    }
}

pub fn write_export<W: Write>(
    mut writer: W,
    objects: &[SourceObject],
    texture: TextureAtlas,
    options: &ExportOptions,
) -> Result<(), ExportError> {
    let text = export(objects, texture, options);
    writer.write_all(text.as_bytes())?;
    writer.flush()?;
    Ok(())
}

pub fn write_export_file(
    path: &Path,
    objects: &[SourceObject],
    texture: TextureAtlas,
    options: &ExportOptions,
) -> Result<(), ExportError> {
    let file = File::create(path).map_err(|source| ExportError::Create {
        path: path.to_path_buf(),
        source,
    })?;
    write_export(BufWriter::new(file), objects, texture, options)?;
    info!("wrote {} to {}", options.class_name(), path.display());
    Ok(())
}
