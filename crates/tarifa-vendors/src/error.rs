use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum VendorError {
    #[error("read manifest {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parse manifest: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("manifest for {vendor} names unknown column role `{role}`")]
    UnknownRole { vendor: String, role: String },
    #[error(
        "header fingerprint mismatch for {vendor} (manifest v{version}): \
         the source file's column layout changed"
    )]
    FingerprintMismatch { vendor: String, version: u32 },
}
