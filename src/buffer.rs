//! Growable accumulator for a response body of unknown length

use log::trace;

/// Byte buffer that grows monotonically as chunks arrive
/// Exclusively owned by the transport for one call, then handed
/// to the decoder
#[derive(Debug, Default)]
pub struct ResponseBuffer
{   data: Vec<u8>
}

impl ResponseBuffer
{   /// Create an empty buffer
    pub fn new() -> Self
    {   ResponseBuffer
        {   data: Vec::new()
        }
    }

    /// Append one received chunk to the end of the buffer
    /// Returns the number of bytes consumed, which always equals
    /// the chunk size so the transport keeps delivering
    pub fn append(&mut self, chunk: &[u8]) -> usize
    {   self.data.extend_from_slice(chunk);
        trace!(
          "Buffer grew by {} bytes to {}",
          chunk.len(),
          self.data.len()
        );
        chunk.len()
    }

    /// Total bytes received so far
    pub fn len(&self) -> usize
    {   self.data.len()
    }

    /// True before the first chunk arrives
    pub fn is_empty(&self) -> bool
    {   self.data.is_empty()
    }

    /// The accumulated content
    pub fn as_bytes(&self) -> &[u8]
    {   &self.data
    }
}

impl From<&[u8]> for ResponseBuffer
{   fn from(bytes: &[u8]) -> Self
    {   let mut buffer = ResponseBuffer::new();
        buffer.append(bytes);
        buffer
    }
}
