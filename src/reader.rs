use crate::error::{DecodeError, Result};
use byteorder::{LittleEndian, ReadBytesExt};
use std::io::{Read, Seek, SeekFrom};

//===========================================================================//

/// A seekable, little-endian reader over the bytes of an ICO file.
///
/// Reads past the end of the stream fail with
/// [`DecodeError::TruncatedStream`], and seeks past the end fail with
/// [`DecodeError::SeekOutOfBounds`] (plain `Seek` implementations happily
/// move beyond the end).
pub struct IcoReader<R> {
    inner: R,
    len: u64,
}

impl<R: Read + Seek> IcoReader<R> {
    /// Wraps a stream, leaving its cursor where it was.
    pub fn new(mut inner: R) -> Result<IcoReader<R>> {
        let position = inner.stream_position()?;
        let len = inner.seek(SeekFrom::End(0))?;
        inner.seek(SeekFrom::Start(position))?;
        Ok(IcoReader { inner, len })
    }

    /// Returns the total length of the underlying stream, in bytes.
    pub fn stream_len(&self) -> u64 {
        self.len
    }

    /// Returns the current absolute position of the cursor.
    pub fn position(&mut self) -> Result<u64> {
        Ok(self.inner.stream_position()?)
    }

    /// Moves the cursor to an absolute offset from the start of the stream.
    pub fn seek(&mut self, offset: u64) -> Result<()> {
        if offset > self.len {
            return Err(DecodeError::SeekOutOfBounds { offset, len: self.len });
        }
        self.inner.seek(SeekFrom::Start(offset))?;
        Ok(())
    }

    /// Reads exactly `num_bytes` bytes.
    pub fn read_bytes(&mut self, num_bytes: usize) -> Result<Vec<u8>> {
        let mut buffer = vec![0u8; num_bytes];
        self.read_into(&mut buffer)?;
        Ok(buffer)
    }

    /// Fills `buffer` completely from the stream.
    pub fn read_into(&mut self, buffer: &mut [u8]) -> Result<()> {
        self.inner.read_exact(buffer)?;
        Ok(())
    }

    /// Reads an unsigned byte.
    pub fn u8(&mut self) -> Result<u8> {
        Ok(self.inner.read_u8()?)
    }

    /// Reads a signed byte.
    pub fn i8(&mut self) -> Result<i8> {
        Ok(self.inner.read_i8()?)
    }

    /// Reads a little-endian `u16`.
    pub fn u16(&mut self) -> Result<u16> {
        Ok(self.inner.read_u16::<LittleEndian>()?)
    }

    /// Reads a little-endian `u32`.
    pub fn u32(&mut self) -> Result<u32> {
        Ok(self.inner.read_u32::<LittleEndian>()?)
    }

    /// Reads a little-endian `i32`.
    pub fn i32(&mut self) -> Result<i32> {
        Ok(self.inner.read_i32::<LittleEndian>()?)
    }

    /// Unwraps this reader, returning the underlying stream.
    pub fn into_inner(self) -> R {
        self.inner
    }
}

//===========================================================================//


//===========================================================================//
