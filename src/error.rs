use thiserror::Error;

/// Errors surfaced by a generation request
///
/// Both kinds are propagated synchronously to the caller; the core never
/// retries and never falls back to a different error correction level or
/// output destination.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// The text could not be encoded as a QR symbol (e.g. exceeds capacity)
    #[error("QR encoding failed: {0}")]
    Encode(#[from] qrcode::types::QrError),

    /// The output SVG could not be written to its destination
    #[error("failed to write SVG output: {0}")]
    Write(#[from] std::io::Error),
}
