use crate::error::Result;
use crate::reader::IcoReader;
use crate::rows::RowOrder;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::io::{Read, Seek};

//===========================================================================//

/// The size of a BITMAPINFOHEADER struct, in bytes.
pub const BMP_HEADER_LEN: u32 = 40;

//===========================================================================//

/// The compression method declared by a BITMAPINFOHEADER.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub enum Compression {
    /// Uncompressed RGB.
    Rgb,
    /// Run-length encoded, 8 bpp.
    Rle8,
    /// Run-length encoded, 4 bpp.
    Rle4,
    /// RGB with channel bit masks.
    Bitfields,
    /// Embedded JPEG stream.
    Jpeg,
    /// Embedded PNG stream.
    Png,
    /// RGBA with channel bit masks.
    AlphaBitfields,
    /// Uncompressed CMYK.
    Cmyk,
    /// CMYK, run-length encoded, 8 bpp.
    CmykRle8,
    /// CMYK, run-length encoded, 4 bpp.
    CmykRle4,
    /// A value not defined by any known bitmap header version.
    Unknown(u32),
}

impl Compression {
    pub(crate) fn from_number(number: u32) -> Compression {
        match number {
            0 => Compression::Rgb,
            1 => Compression::Rle8,
            2 => Compression::Rle4,
            3 => Compression::Bitfields,
            4 => Compression::Jpeg,
            5 => Compression::Png,
            6 => Compression::AlphaBitfields,
            11 => Compression::Cmyk,
            12 => Compression::CmykRle8,
            13 => Compression::CmykRle4,
            other => Compression::Unknown(other),
        }
    }

    /// Returns the numeric value stored in the header for this method.
    pub fn number(&self) -> u32 {
        match *self {
            Compression::Rgb => 0,
            Compression::Rle8 => 1,
            Compression::Rle4 => 2,
            Compression::Bitfields => 3,
            Compression::Jpeg => 4,
            Compression::Png => 5,
            Compression::AlphaBitfields => 6,
            Compression::Cmyk => 11,
            Compression::CmykRle8 => 12,
            Compression::CmykRle4 => 13,
            Compression::Unknown(number) => number,
        }
    }
}

//===========================================================================//

/// The BITMAPINFOHEADER that precedes the pixel data of a BMP-encoded icon.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct BitmapInfoHeader {
    header_size: u32,
    width: i32,
    height: i32,
    planes: u16,
    bit_count: u16,
    compression: Compression,
    image_size: u32,
    x_pixels_per_meter: i32,
    y_pixels_per_meter: i32,
    colors_used: u32,
    colors_important: u32,
}

impl BitmapInfoHeader {
    /// Reads a header from the current position, consuming exactly 40 bytes.
    /// Returns an error if the header's own size field isn't 40.
    pub fn read<R: Read + Seek>(
        reader: &mut IcoReader<R>,
    ) -> Result<BitmapInfoHeader> {
        let header_size = reader.u32()?;
        if header_size != BMP_HEADER_LEN {
            invalid_data!(
                "Invalid BMP header size (was {}, must be {})",
                header_size,
                BMP_HEADER_LEN
            );
        }
        let width = reader.i32()?;
        let height = reader.i32()?;
        let planes = reader.u16()?;
        let bit_count = reader.u16()?;
        let compression = Compression::from_number(reader.u32()?);
        let image_size = reader.u32()?;
        let x_pixels_per_meter = reader.i32()?;
        let y_pixels_per_meter = reader.i32()?;
        let colors_used = reader.u32()?;
        let colors_important = reader.u32()?;
        Ok(BitmapInfoHeader {
            header_size,
            width,
            height,
            planes,
            bit_count,
            compression,
            image_size,
            x_pixels_per_meter,
            y_pixels_per_meter,
            colors_used,
            colors_important,
        })
    }

    /// Returns the header's own size field (always 40 once read).
    pub fn header_size(&self) -> u32 {
        self.header_size
    }

    /// Returns the signed width field.  Its sign determines the row order.
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Returns the signed height field.  For icons this counts the rows of
    /// both the color data and the AND mask.
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Returns the number of color planes.
    pub fn planes(&self) -> u16 {
        self.planes
    }

    /// Returns the bits-per-pixel of the color data.
    pub fn bit_count(&self) -> u16 {
        self.bit_count
    }

    /// Returns the declared compression method.
    pub fn compression(&self) -> Compression {
        self.compression
    }

    /// Returns the declared size of the pixel data, which may be zero for
    /// uncompressed bitmaps.
    pub fn image_size(&self) -> u32 {
        self.image_size
    }

    /// Returns the (horizontal, vertical) resolution in pixels per meter.
    pub fn pixels_per_meter(&self) -> (i32, i32) {
        (self.x_pixels_per_meter, self.y_pixels_per_meter)
    }

    /// Returns the number of palette colors in use.
    pub fn colors_used(&self) -> u32 {
        self.colors_used
    }

    /// Returns the number of palette colors required to display the image.
    pub fn colors_important(&self) -> u32 {
        self.colors_important
    }

    /// Returns the order the pixel rows are stored in.  A non-negative width
    /// means bottom-up storage.
    pub fn row_order(&self) -> RowOrder {
        if self.width >= 0 {
            RowOrder::BottomUp
        } else {
            RowOrder::TopDown
        }
    }
}

//===========================================================================//


//===========================================================================//
