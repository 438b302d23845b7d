use crate::direntry::IcoDirEntry;
use crate::infoheader::BitmapInfoHeader;
use crate::pixel::PixelFormat;
use crate::rows::buffer_len;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

//===========================================================================//

/// Where a decoded image came from: its directory entry and the bitmap header
/// found at the entry's offset.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct IcoMetadata {
    entry: IcoDirEntry,
    info: BitmapInfoHeader,
}

impl IcoMetadata {
    /// Bundles a directory entry with its bitmap header.
    pub fn new(entry: IcoDirEntry, info: BitmapInfoHeader) -> IcoMetadata {
        IcoMetadata { entry, info }
    }

    /// Returns the directory entry the image was decoded from.
    pub fn entry(&self) -> &IcoDirEntry {
        &self.entry
    }

    /// Returns the embedded bitmap header.
    pub fn info(&self) -> &BitmapInfoHeader {
        &self.info
    }
}

//===========================================================================//

/// A decoded image.  The pixel data is uncompressed and in row-major order
/// from top to bottom.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DecodedImage {
    format: PixelFormat,
    width: u32,
    height: u32,
    data: Vec<u8>,
    metadata: Option<IcoMetadata>,
}

impl DecodedImage {
    /// Creates a new image from raw pixel data.  `data` must have
    /// `width * height * format.bytes_per_pixel()` bytes.  Panics if it is
    /// the wrong length.
    pub fn new(
        format: PixelFormat,
        width: u32,
        height: u32,
        data: Vec<u8>,
    ) -> DecodedImage {
        let expected_len = buffer_len(width, height, format.bytes_per_pixel());
        if expected_len != Some(data.len()) {
            panic!(
                "Invalid data length (was {}, but must be {:?} for {}x{} \
                 {:?} image)",
                data.len(),
                expected_len,
                width,
                height,
                format
            );
        }
        DecodedImage { format, width, height, data, metadata: None }
    }

    /// Attaches decoder metadata to the image.
    pub fn with_metadata(mut self, metadata: IcoMetadata) -> DecodedImage {
        self.metadata = Some(metadata);
        self
    }

    /// Drops any attached decoder metadata.
    pub fn without_metadata(mut self) -> DecodedImage {
        self.metadata = None;
        self
    }

    /// Returns the pixel layout of the image data.
    pub fn format(&self) -> PixelFormat {
        self.format
    }

    /// Returns the width of the image, in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the height of the image, in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns the raw pixel data.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Returns the number of bytes in one row of pixel data.
    pub fn stride(&self) -> usize {
        self.width as usize * self.format.bytes_per_pixel()
    }

    /// Returns the pixel data of one row, counting from the top, or `None`
    /// if `row` is out of range.
    pub fn row(&self, row: u32) -> Option<&[u8]> {
        if row >= self.height {
            return None;
        }
        let stride = self.stride();
        let start = row as usize * stride;
        Some(&self.data[start..(start + stride)])
    }

    /// Returns the directory entry and bitmap header this image was decoded
    /// from, if attached.
    pub fn metadata(&self) -> Option<&IcoMetadata> {
        self.metadata.as_ref()
    }

    /// Consumes the image, returning its pixel data.
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }
}

//===========================================================================//

#[cfg(test)]
mod tests {
    use super::DecodedImage;
    use crate::pixel::PixelFormat;

    #[test]
    fn rows_are_top_down() {
        let data = b"\x01\x02\x03\x04\x05\x06\x07\x08".to_vec();
        let image = DecodedImage::new(PixelFormat::Bgra8, 1, 2, data);
        assert_eq!(image.stride(), 4);
        assert_eq!(image.row(0), Some(&b"\x01\x02\x03\x04"[..]));
        assert_eq!(image.row(1), Some(&b"\x05\x06\x07\x08"[..]));
        assert_eq!(image.row(2), None);
        assert!(image.metadata().is_none());
    }

    #[test]
    #[should_panic(expected = "Invalid data length")]
    fn new_rejects_wrong_length() {
        DecodedImage::new(PixelFormat::Bgr8, 2, 2, vec![0; 16]);
    }

    #[test]
    fn into_data_returns_pixels() {
        let image = DecodedImage::new(PixelFormat::Bgr8, 1, 1, vec![7, 8, 9]);
        assert_eq!(image.into_data(), vec![7, 8, 9]);
    }
}

//===========================================================================//
