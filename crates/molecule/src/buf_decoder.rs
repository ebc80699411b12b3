//! Bounds-checked reads over a borrowed buffer.

use crate::errors::CodecError;

/// Zero-copy view over a molecule buffer.
///
/// Every read is checked against the end of the buffer and reports a
/// [`CodecError::BufferTooShort`] instead of panicking.  Sub-slices borrow
/// from the original buffer so nested containers are never copied.
#[derive(Copy, Clone, Debug)]
pub struct BufDecoder<'b> {
    buf: &'b [u8],
}

impl<'b> BufDecoder<'b> {
    /// Constructs a new instance wrapping a buffer.
    pub fn new(buf: &'b [u8]) -> Self {
        Self { buf }
    }

    /// Returns the length of the underlying buffer.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Returns if the underlying buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Returns the whole underlying buffer.
    pub fn as_slice(&self) -> &'b [u8] {
        self.buf
    }

    /// Returns the bytes in `start..end`.
    pub fn slice(&self, start: usize, end: usize) -> Result<&'b [u8], CodecError> {
        self.buf.get(start..end).ok_or(CodecError::BufferTooShort {
            offset: start,
            needed: end.saturating_sub(start),
            available: self.len().saturating_sub(start),
        })
    }

    /// Returns the bytes from `start` to the end of the buffer.
    pub fn rest(&self, start: usize) -> Result<&'b [u8], CodecError> {
        self.slice(start, self.len())
    }

    /// Reads a little endian `u32` at `at`.
    pub fn read_u32_at(&self, at: usize) -> Result<u32, CodecError> {
        let arr = self.read_arr_at::<4>(at)?;
        Ok(u32::from_le_bytes(arr))
    }

    /// Reads a little endian `u32` header value at `at` as a size.
    pub fn read_len_at(&self, at: usize) -> Result<usize, CodecError> {
        self.read_u32_at(at).map(|v| v as usize)
    }

    /// Reads `N` bytes at `at`.
    pub fn read_arr_at<const N: usize>(&self, at: usize) -> Result<[u8; N], CodecError> {
        let bytes = self.slice(at, at.saturating_add(N))?;
        let mut arr = [0; N];
        arr.copy_from_slice(bytes);
        Ok(arr)
    }

    /// Checks that the buffer is exactly `expected` bytes long.
    pub fn expect_len(&self, what: &'static str, expected: usize) -> Result<(), CodecError> {
        if self.len() != expected {
            return Err(CodecError::SizeMismatch {
                what,
                expected,
                actual: self.len(),
            });
        }
        Ok(())
    }

    /// Reads the whole buffer as an `N` byte array, failing if the buffer
    /// has any other length.
    pub fn exact_arr<const N: usize>(&self, what: &'static str) -> Result<[u8; N], CodecError> {
        self.expect_len(what, N)?;
        self.read_arr_at(0)
    }
}
