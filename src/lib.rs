//! A library for decoding the images stored in ICO files.
//!
//! An ICO file holds a directory table followed by one or more embedded
//! images.  This crate decodes entries stored as uncompressed 24 bpp (BGR) or
//! 32 bpp (BGRA) bitmaps, returning their raw pixel data in top-down row
//! order.  PNG-encoded entries, palette images, and compressed bitmaps are
//! reported as errors.
//!
//! ```no_run
//! use std::fs::File;
//!
//! let file = File::open("app.ico").unwrap();
//! match ico_bmp::try_decode(file).unwrap() {
//!     Some(images) => {
//!         for image in images {
//!             let image = image.unwrap();
//!             println!("{}x{} {:?}", image.width(), image.height(),
//!                      image.format());
//!         }
//!     }
//!     None => println!("not an ICO file"),
//! }
//! ```

#![warn(missing_docs)]

#[macro_use]
mod macros;

mod decoder;
mod direntry;
mod error;
mod image;
mod infoheader;
mod limits;
mod pixel;
mod reader;
mod rows;

pub use crate::decoder::{IcoDecoder, IcoImages};
pub use crate::direntry::IcoDirEntry;
pub use crate::error::{DecodeError, Result};
pub use crate::image::{DecodedImage, IcoMetadata};
pub use crate::infoheader::{BitmapInfoHeader, Compression};
pub use crate::limits::Limits;
pub use crate::pixel::{PixelFormat, SUPPORTED_BIT_COUNTS};
pub use crate::reader::IcoReader;
pub use crate::rows::{read_rows, RowOrder};

use std::io::{Read, Seek};

//===========================================================================//

/// Checks for an ICO signature and, if present, returns an iterator over the
/// file's images.  Returns `Ok(None)` if the data isn't an ICO file, so that
/// callers can try another decoder.  Uses no resource limits.
pub fn try_decode<R: Read + Seek>(reader: R) -> Result<Option<IcoImages<R>>> {
    IcoDecoder::new().try_decode(reader)
}

/// Decodes every image in an ICO file, stopping at the first error.
pub fn decode_all<R: Read + Seek>(reader: R) -> Result<Vec<DecodedImage>> {
    IcoDecoder::new().decode_all(reader)
}

//===========================================================================//
