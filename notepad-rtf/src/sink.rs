use std::io::Write;

use crate::{Error, Result};

/// Destination of transcoded bytes that can take back what it was given
/// most recently.
pub trait Sink {
    fn write_all(&mut self, bytes: &[u8]) -> Result<()>;

    /// Drop the last `count` bytes written.
    fn trim_end(&mut self, count: usize) -> Result<()>;

    /// Push everything still buffered to the destination.
    fn finish(&mut self) -> Result<()> {
        Ok(())
    }
}

impl Sink for Vec<u8> {
    fn write_all(&mut self, bytes: &[u8]) -> Result<()> {
        self.extend_from_slice(bytes);
        Ok(())
    }

    fn trim_end(&mut self, count: usize) -> Result<()> {
        let Some(len) = self.len().checked_sub(count) else {
            return Err(Error::TrimOverflow {
                requested: count,
                available: self.len(),
            });
        };

        self.truncate(len);
        Ok(())
    }
}

/// Streams into any [`Write`] while holding back the most recent bytes, so
/// that up to `holdback` of them can still be trimmed.
#[derive(Debug)]
pub struct HoldbackWriter<W: Write> {
    inner: W,
    tail: Vec<u8>,
    holdback: usize,
}

impl<W: Write> HoldbackWriter<W> {
    pub fn new(inner: W, holdback: usize) -> Self {
        Self {
            inner,
            tail: Vec::with_capacity(holdback * 2),
            holdback,
        }
    }

    /// Number of bytes not yet passed to the inner writer.
    #[inline]
    pub fn pending(&self) -> usize {
        self.tail.len()
    }

    /// Return the inner writer. Bytes still held back are lost unless
    /// [`Sink::finish`] was called first.
    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> Sink for HoldbackWriter<W> {
    fn write_all(&mut self, bytes: &[u8]) -> Result<()> {
        self.tail.extend_from_slice(bytes);

        let ready = self.tail.len().saturating_sub(self.holdback);
        if ready > 0 {
            self.inner.write_all(&self.tail[..ready])?;
            self.tail.drain(..ready);
        }

        Ok(())
    }

    fn trim_end(&mut self, count: usize) -> Result<()> {
        let Some(len) = self.tail.len().checked_sub(count) else {
            return Err(Error::TrimOverflow {
                requested: count,
                available: self.tail.len(),
            });
        };

        self.tail.truncate(len);
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.inner.write_all(&self.tail)?;
        self.tail.clear();
        self.inner.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vec_trim() {
        let mut sink: Vec<u8> = Vec::new();
        Sink::write_all(&mut sink, b"hello").unwrap();
        sink.trim_end(2).unwrap();
        assert_eq!(sink, b"hel");

        assert!(matches!(
            sink.trim_end(4),
            Err(Error::TrimOverflow {
                requested: 4,
                available: 3
            })
        ));
    }

    #[test]
    fn holdback_keeps_tail() {
        let mut sink = HoldbackWriter::new(Vec::<u8>::new(), 2);
        sink.write_all(b"abc").unwrap();
        sink.write_all(b"d").unwrap();
        assert_eq!(sink.pending(), 2);

        sink.trim_end(2).unwrap();
        sink.write_all(b"}").unwrap();
        sink.finish().unwrap();
        assert_eq!(sink.into_inner(), b"ab}");
    }

    #[test]
    fn holdback_cannot_trim_flushed_bytes() {
        let mut sink = HoldbackWriter::new(Vec::<u8>::new(), 2);
        sink.write_all(b"abcdef").unwrap();

        assert!(matches!(
            sink.trim_end(3),
            Err(Error::TrimOverflow {
                requested: 3,
                available: 2
            })
        ));
    }

    #[test]
    fn holdback_matches_vec() {
        let chunks: [&[u8]; 4] = [b"x", b"", b"longer chunk", b"yz"];
        let mut buffered: Vec<u8> = Vec::new();
        let mut streamed = HoldbackWriter::new(Vec::<u8>::new(), 2);

        for chunk in chunks {
            Sink::write_all(&mut buffered, chunk).unwrap();
            streamed.write_all(chunk).unwrap();
        }
        buffered.trim_end(2).unwrap();
        streamed.trim_end(2).unwrap();
        streamed.finish().unwrap();

        assert_eq!(streamed.into_inner(), buffered);
    }
}
