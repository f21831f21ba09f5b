use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Fatal export failures. Everything scene-related is recovered before this point.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("cannot create output file `{}`", path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write model output")]
    Io(#[from] io::Error),
}
