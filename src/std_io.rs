use crate::GrowVec;
use std::io::{IoSlice, Write};

impl Write for GrowVec<u8> {
    /// Appends the whole buffer, growing capacity as needed.
    ///
    /// Never fails and never writes partially.
    #[inline]
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.reserve_for_append(buf.len());
        self.extend(buf.iter().copied());
        Ok(buf.len())
    }

    #[inline]
    fn write_vectored(&mut self, bufs: &[IoSlice<'_>]) -> std::io::Result<usize> {
        let total: usize = bufs.iter().map(|b| b.len()).sum();
        self.reserve_for_append(total);
        for buf in bufs {
            self.extend(buf.iter().copied());
        }
        Ok(total)
    }

    #[inline]
    fn write_all(&mut self, buf: &[u8]) -> std::io::Result<()> {
        Write::write(self, buf)?;
        Ok(())
    }

    #[inline]
    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl GrowVec<u8> {
    /// Grows ahead of an append of `additional` bytes, following the doubling
    /// rule so interleaved `push` calls keep their amortized cost.
    fn reserve_for_append(&mut self, additional: usize) {
        let needed = self.len() + additional;
        if needed > self.capacity() {
            self.reserve(needed.max(self.capacity() * 2));
        }
    }
}
