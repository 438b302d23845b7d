use crate::error::Result;
use crate::reader::IcoReader;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::io::{Read, Seek};

//===========================================================================//

/// The order in which a bitmap's pixel rows are stored.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub enum RowOrder {
    /// The last visual row comes first in the stream.
    BottomUp,
    /// The first visual row comes first in the stream.
    TopDown,
}

//===========================================================================//

/// Returns the size in bytes of a `width` x `height` pixel buffer, or `None`
/// if it doesn't fit in memory.
pub(crate) fn buffer_len(
    width: u32,
    height: u32,
    bytes_per_pixel: usize,
) -> Option<usize> {
    (width as usize)
        .checked_mul(height as usize)?
        .checked_mul(bytes_per_pixel)
}

/// Reads `height` rows of `width * bytes_per_pixel` bytes each and returns
/// them in top-down order, whichever order they are stored in.  Rows are
/// assumed to carry no padding.
pub fn read_rows<R: Read + Seek>(
    reader: &mut IcoReader<R>,
    width: u32,
    height: u32,
    bytes_per_pixel: usize,
    order: RowOrder,
) -> Result<Vec<u8>> {
    let row_len = match (width as usize).checked_mul(bytes_per_pixel) {
        Some(len) => len,
        None => invalid_data!("Row of {} pixels is too large", width),
    };
    let total_len = match buffer_len(width, height, bytes_per_pixel) {
        Some(len) => len,
        None => invalid_data!("Width * Height is too large"),
    };
    match order {
        RowOrder::TopDown => reader.read_bytes(total_len),
        RowOrder::BottomUp => {
            let mut data = vec![0u8; total_len];
            for row in 0..(height as usize) {
                let start = (height as usize - row - 1) * row_len;
                reader.read_into(&mut data[start..(start + row_len)])?;
            }
            Ok(data)
        }
    }
}

//===========================================================================//


//===========================================================================//
