use crate::error::Result;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

//===========================================================================//

/// Resource limits applied while decoding.
///
/// All fields default to `None` (no limit).  Entries in an ICO file are at
/// most 256x256 pixels, so these mostly matter for capping the directory size
/// and total memory of untrusted input.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct Limits {
    /// Maximum number of directory entries.
    pub max_entries: Option<u16>,
    /// Maximum image width, in pixels.
    pub max_width: Option<u32>,
    /// Maximum image height, in pixels.
    pub max_height: Option<u32>,
    /// Maximum pixel count (width * height) of a single image.
    pub max_pixels: Option<u64>,
    /// Maximum bytes for a single image's pixel buffer.
    pub max_memory_bytes: Option<u64>,
}

impl Limits {
    pub(crate) fn check_entries(&self, num_entries: u16) -> Result<()> {
        if let Some(max_entries) = self.max_entries {
            if num_entries > max_entries {
                limit_exceeded!(
                    "entry count {} exceeds limit {}",
                    num_entries,
                    max_entries
                );
            }
        }
        Ok(())
    }

    pub(crate) fn check_dimensions(&self, width: u32, height: u32) -> Result<()> {
        if let Some(max_width) = self.max_width {
            if width > max_width {
                limit_exceeded!("width {} exceeds limit {}", width, max_width);
            }
        }
        if let Some(max_height) = self.max_height {
            if height > max_height {
                limit_exceeded!(
                    "height {} exceeds limit {}",
                    height,
                    max_height
                );
            }
        }
        if let Some(max_pixels) = self.max_pixels {
            let pixels = u64::from(width) * u64::from(height);
            if pixels > max_pixels {
                limit_exceeded!(
                    "pixel count {} exceeds limit {}",
                    pixels,
                    max_pixels
                );
            }
        }
        Ok(())
    }

    pub(crate) fn check_memory(&self, bytes: usize) -> Result<()> {
        if let Some(max_memory) = self.max_memory_bytes {
            if bytes as u64 > max_memory {
                limit_exceeded!(
                    "allocation of {} bytes exceeds memory limit {}",
                    bytes,
                    max_memory
                );
            }
        }
        Ok(())
    }
}

//===========================================================================//


//===========================================================================//
