//! Deterministic random sources for unit tests.

use rand_core::{CryptoRng, RngCore};

/// Replays a fixed byte script, then fails.
///
/// A request larger than the remaining script fails without consuming
/// anything, mirroring an all-or-nothing OS read.
pub(crate) struct ScriptedRng {
    bytes: Vec<u8>,
    pos: usize,
}

impl ScriptedRng {
    pub(crate) fn new(bytes: Vec<u8>) -> Self {
        Self { bytes, pos: 0 }
    }

    /// A source that fails on the first read.
    pub(crate) fn failing() -> Self {
        Self::new(Vec::new())
    }

    pub(crate) fn consumed(&self) -> usize {
        self.pos
    }
}

impl RngCore for ScriptedRng {
    fn next_u32(&mut self) -> u32 {
        let mut buf = [0u8; 4];
        self.fill_bytes(&mut buf);
        u32::from_le_bytes(buf)
    }

    fn next_u64(&mut self) -> u64 {
        let mut buf = [0u8; 8];
        self.fill_bytes(&mut buf);
        u64::from_le_bytes(buf)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.try_fill_bytes(dest).expect("scripted bytes exhausted");
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
        let end = self.pos + dest.len();
        if end > self.bytes.len() {
            return Err(rand_core::Error::new("scripted bytes exhausted"));
        }
        dest.copy_from_slice(&self.bytes[self.pos..end]);
        self.pos = end;
        Ok(())
    }
}

impl CryptoRng for ScriptedRng {}
