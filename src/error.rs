use crate::infoheader::Compression;
use std::io;

//===========================================================================//

/// Result type for ICO decoding operations.
pub type Result<T> = std::result::Result<T, DecodeError>;

/// Errors that can occur while decoding an ICO file.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum DecodeError {
    /// The data does not start with the ICO signature.  [`try_decode`]
    /// reports this as `Ok(None)` instead; only the non-sniffing entry points
    /// return it as an error.
    ///
    /// [`try_decode`]: crate::try_decode
    #[error("not an ICO file (signature mismatch)")]
    NotRecognized,

    /// A directory entry declares a color palette (indexed color).
    #[error(
        "unsupported color palette in directory entry {index} \
         ({colors} colors, but must be 0)"
    )]
    UnsupportedColorPalette {
        /// Position of the offending entry in the directory table.
        index: usize,
        /// The palette color count the entry declared.
        colors: u8,
    },

    /// An embedded bitmap uses something other than uncompressed RGB.
    #[error("unsupported bitmap compression: {0:?}")]
    UnsupportedCompression(Compression),

    /// An embedded bitmap has a bit depth that can't be decoded.
    #[error("unsupported bit depth {bit_count} (supported: {supported:?})")]
    UnsupportedBitDepth {
        /// The bit count from the embedded bitmap header.
        bit_count: u16,
        /// The bit counts this decoder accepts.
        supported: &'static [u16],
    },

    /// The stream ended before a read could be satisfied.
    #[error("unexpected end of stream")]
    TruncatedStream,

    /// A directory entry points past the end of the stream.
    #[error("seek to offset {offset} is past end of stream ({len} bytes)")]
    SeekOutOfBounds {
        /// The requested absolute offset.
        offset: u64,
        /// The total length of the stream.
        len: u64,
    },

    /// Structurally malformed data.
    #[error("invalid data: {0}")]
    InvalidData(String),

    /// A configured [`Limits`](crate::Limits) value was exceeded.
    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    /// Any other failure from the underlying stream.
    #[error(transparent)]
    Io(io::Error),
}

impl From<io::Error> for DecodeError {
    fn from(error: io::Error) -> DecodeError {
        if error.kind() == io::ErrorKind::UnexpectedEof {
            DecodeError::TruncatedStream
        } else {
            DecodeError::Io(error)
        }
    }
}

//===========================================================================//


//===========================================================================//
