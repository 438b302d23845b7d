use crate::error::{DecodeError, Result};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

//===========================================================================//

/// The bit counts that can be decoded.
pub const SUPPORTED_BIT_COUNTS: &[u16] = &[24, 32];

//===========================================================================//

/// The memory layout of one pixel in a decoded image.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub enum PixelFormat {
    /// Three bytes per pixel: blue, green, red.
    Bgr8,
    /// Four bytes per pixel: blue, green, red, alpha.
    Bgra8,
}

impl PixelFormat {
    /// Resolves the pixel format for a bitmap bit count.  Returns an error
    /// for anything other than 24 or 32 bits per pixel.
    pub fn from_bit_count(bit_count: u16) -> Result<PixelFormat> {
        match bit_count {
            24 => Ok(PixelFormat::Bgr8),
            32 => Ok(PixelFormat::Bgra8),
            _ => Err(DecodeError::UnsupportedBitDepth {
                bit_count,
                supported: SUPPORTED_BIT_COUNTS,
            }),
        }
    }

    /// Returns the bit count this format is stored with.
    pub fn bit_count(&self) -> u16 {
        match *self {
            PixelFormat::Bgr8 => 24,
            PixelFormat::Bgra8 => 32,
        }
    }

    /// Returns the number of bytes each pixel occupies.
    pub fn bytes_per_pixel(&self) -> usize {
        match *self {
            PixelFormat::Bgr8 => 3,
            PixelFormat::Bgra8 => 4,
        }
    }

    /// Returns true if the format carries an alpha channel.
    pub fn has_alpha(&self) -> bool {
        *self == PixelFormat::Bgra8
    }
}

//===========================================================================//


//===========================================================================//
