use crate::error::Result;
use crate::reader::IcoReader;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::io::{Read, Seek};

//===========================================================================//

/// The size of an ICONDIRENTRY struct, in bytes.
pub const DIR_ENTRY_LEN: u64 = 16;

//===========================================================================//

/// One entry in the directory table of an ICO file, describing a single
/// embedded image.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct IcoDirEntry {
    width_byte: u8,
    height_byte: u8,
    num_colors: u8,
    reserved: u8,
    color_planes: u16,
    bits_per_pixel: u16,
    data_size: u32,
    data_offset: u32,
}

impl IcoDirEntry {
    /// Reads one 16-byte directory entry from the current position.  No
    /// field is validated here.
    pub fn read<R: Read + Seek>(
        reader: &mut IcoReader<R>,
    ) -> Result<IcoDirEntry> {
        let width_byte = reader.u8()?;
        let height_byte = reader.u8()?;
        let num_colors = reader.u8()?;
        let reserved = reader.u8()?;
        let color_planes = reader.u16()?;
        let bits_per_pixel = reader.u16()?;
        let data_size = reader.u32()?;
        let data_offset = reader.u32()?;
        Ok(IcoDirEntry {
            width_byte,
            height_byte,
            num_colors,
            reserved,
            color_planes,
            bits_per_pixel,
            data_size,
            data_offset,
        })
    }

    /// Returns the width of the image, in pixels.  A width byte of zero
    /// stands for 256.
    pub fn width(&self) -> u32 {
        if self.width_byte == 0 {
            256
        } else {
            self.width_byte as u32
        }
    }

    /// Returns the height of the image, in pixels.  A height byte of zero
    /// stands for 256.
    pub fn height(&self) -> u32 {
        if self.height_byte == 0 {
            256
        } else {
            self.height_byte as u32
        }
    }

    /// Returns the raw (width, height) bytes as stored in the directory.
    pub fn size_bytes(&self) -> (u8, u8) {
        (self.width_byte, self.height_byte)
    }

    /// Returns the number of colors in the image's palette, which is zero for
    /// images that don't use one.
    pub fn num_colors(&self) -> u8 {
        self.num_colors
    }

    /// Returns the reserved byte, which should be zero but isn't checked.
    pub fn reserved(&self) -> u8 {
        self.reserved
    }

    /// Returns the number of color planes.
    pub fn color_planes(&self) -> u16 {
        self.color_planes
    }

    /// Returns the bits-per-pixel declared in the directory.  This is only
    /// informational; the embedded bitmap header is authoritative.
    pub fn bits_per_pixel(&self) -> u16 {
        self.bits_per_pixel
    }

    /// Returns the size of the image data, in bytes.
    pub fn data_size(&self) -> u32 {
        self.data_size
    }

    /// Returns the offset of the image data from the start of the file.
    pub fn data_offset(&self) -> u32 {
        self.data_offset
    }
}

//===========================================================================//


//===========================================================================//
