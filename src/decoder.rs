use crate::direntry::{IcoDirEntry, DIR_ENTRY_LEN};
use crate::error::{DecodeError, Result};
use crate::image::{DecodedImage, IcoMetadata};
use crate::infoheader::{BitmapInfoHeader, Compression};
use crate::limits::Limits;
use crate::pixel::PixelFormat;
use crate::reader::IcoReader;
use crate::rows::{buffer_len, read_rows};
use log::{debug, trace};
use std::io::{self, Read, Seek};
use std::iter::FusedIterator;

//===========================================================================//

// Reserved field (0) followed by resource type 1 (icon).
const ICO_SIGNATURE: &[u8; 4] = b"\x00\x00\x01\x00";

// The signature plus the image count.
const ICONDIR_LEN: u64 = 6;

//===========================================================================//

/// Decodes ICO files whose images are stored as uncompressed 24 or 32 bpp
/// bitmaps.
#[derive(Clone, Debug, Default)]
pub struct IcoDecoder {
    limits: Limits,
}

impl IcoDecoder {
    /// Creates a decoder with no limits.
    pub fn new() -> IcoDecoder {
        IcoDecoder::default()
    }

    /// Sets the resource limits applied to each decode.
    pub fn with_limits(mut self, limits: Limits) -> IcoDecoder {
        self.limits = limits;
        self
    }

    /// Returns the resource limits applied to each decode.
    pub fn limits(&self) -> &Limits {
        &self.limits
    }

    /// Checks the ICO signature and reads the whole directory table.
    ///
    /// Returns `Ok(None)` if the stream doesn't start with an ICO signature,
    /// in which case the stream position is unspecified.  Otherwise returns
    /// an iterator that decodes one image per directory entry, in directory
    /// order, each time it is advanced.  Every directory entry is validated
    /// before this returns, so a bad entry anywhere in the table means no
    /// images at all.
    pub fn try_decode<R: Read + Seek>(
        &self,
        mut reader: R,
    ) -> Result<Option<IcoImages<R>>> {
        let mut signature = [0u8; 4];
        match reader.read_exact(&mut signature) {
            Ok(()) => {}
            Err(error) if error.kind() == io::ErrorKind::UnexpectedEof => {
                debug!("stream too short for an ICO signature");
                return Ok(None);
            }
            Err(error) => return Err(error.into()),
        }
        if &signature != ICO_SIGNATURE {
            debug!("not an ICO signature: {:02x?}", signature);
            return Ok(None);
        }
        let mut reader = IcoReader::new(reader)?;
        let num_entries = reader.u16()?;
        self.limits.check_entries(num_entries)?;
        let mut entries = Vec::with_capacity(num_entries as usize);
        for index in 0..(num_entries as usize) {
            let entry = IcoDirEntry::read(&mut reader)?;
            if entry.num_colors() != 0 {
                return Err(DecodeError::UnsupportedColorPalette {
                    index,
                    colors: entry.num_colors(),
                });
            }
            entries.push(entry);
        }
        debug!(
            "read ICO directory: {} entries, {} bytes",
            num_entries,
            ICONDIR_LEN + DIR_ENTRY_LEN * u64::from(num_entries)
        );
        Ok(Some(IcoImages {
            reader,
            entries: entries.into_iter(),
            limits: self.limits.clone(),
            next_index: 0,
            finished: false,
        }))
    }

    /// Like [`try_decode`](IcoDecoder::try_decode), but treats a missing
    /// signature as [`DecodeError::NotRecognized`].
    pub fn decode<R: Read + Seek>(&self, reader: R) -> Result<IcoImages<R>> {
        self.try_decode(reader)?.ok_or(DecodeError::NotRecognized)
    }

    /// Decodes every image in the file, stopping at the first error.
    pub fn decode_all<R: Read + Seek>(
        &self,
        reader: R,
    ) -> Result<Vec<DecodedImage>> {
        self.decode(reader)?.collect()
    }
}

//===========================================================================//

/// The images of an ICO file, decoded lazily in directory order.
///
/// The iterator owns the stream for its whole lifetime.  After it yields an
/// error it is exhausted; images yielded before the error remain valid.
pub struct IcoImages<R> {
    reader: IcoReader<R>,
    entries: std::vec::IntoIter<IcoDirEntry>,
    limits: Limits,
    next_index: usize,
    finished: bool,
}

impl<R: Read + Seek> IcoImages<R> {
    /// Returns the directory entries that haven't been decoded yet.
    pub fn remaining_entries(&self) -> &[IcoDirEntry] {
        if self.finished {
            &[]
        } else {
            self.entries.as_slice()
        }
    }

    /// Stops decoding and returns the underlying stream.
    pub fn into_inner(self) -> R {
        self.reader.into_inner()
    }

    fn decode_entry(
        &mut self,
        index: usize,
        entry: IcoDirEntry,
    ) -> Result<DecodedImage> {
        trace!("entry {}: seeking to offset {}", index, entry.data_offset());
        self.reader.seek(u64::from(entry.data_offset()))?;
        let info = BitmapInfoHeader::read(&mut self.reader)?;
        if info.compression() != Compression::Rgb {
            return Err(DecodeError::UnsupportedCompression(info.compression()));
        }
        let format = PixelFormat::from_bit_count(info.bit_count())?;
        // The directory entry decides the size, not the bitmap header.
        let width = entry.width();
        let height = entry.height();
        if info.width().unsigned_abs() != width {
            debug!(
                "entry {}: bitmap width {} differs from directory width {}",
                index,
                info.width(),
                width
            );
        }
        self.limits.check_dimensions(width, height)?;
        let bytes_per_pixel = format.bytes_per_pixel();
        if let Some(len) = buffer_len(width, height, bytes_per_pixel) {
            self.limits.check_memory(len)?;
        }
        let data = read_rows(
            &mut self.reader,
            width,
            height,
            bytes_per_pixel,
            info.row_order(),
        )?;
        debug!(
            "entry {}: decoded {}x{} {:?} image ({:?})",
            index,
            width,
            height,
            format,
            info.row_order()
        );
        let metadata = IcoMetadata::new(entry, info);
        Ok(DecodedImage::new(format, width, height, data)
            .with_metadata(metadata))
    }
}

impl<R: Read + Seek> Iterator for IcoImages<R> {
    type Item = Result<DecodedImage>;

    fn next(&mut self) -> Option<Result<DecodedImage>> {
        if self.finished {
            return None;
        }
        let entry = self.entries.next()?;
        let index = self.next_index;
        self.next_index += 1;
        match self.decode_entry(index, entry) {
            Ok(image) => Some(Ok(image)),
            Err(error) => {
                debug!("entry {}: decode failed: {}", index, error);
                self.finished = true;
                Some(Err(error))
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining_entries().len();
        (remaining.min(1), Some(remaining))
    }
}

impl<R: Read + Seek> FusedIterator for IcoImages<R> {}

//===========================================================================//


//===========================================================================//
