//! Binary codec for cross-chain payloads.
//!
//! The layout follows the packing rules the paired chain's decoder uses:
//! - fixed-width integers are little-endian
//! - strings and byte vectors carry a varuint32 length prefix
//!   (unsigned LEB128, at most 5 bytes) followed by the raw bytes
//!
//! There is no padding and no framing; a decoder must consume the input
//! exactly.

use cosmwasm_std::{StdError, StdResult};

/// Maximum encoded width of a varuint32.
const MAX_VARUINT32_BYTES: usize = 5;

/// Append-only writer for the canonical encoding.
#[derive(Debug, Default)]
pub struct Encoder {
    buf: Vec<u8>,
}

impl Encoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn varuint32(&mut self, mut value: u32) -> &mut Self {
        loop {
            let mut byte = (value & 0x7f) as u8;
            value >>= 7;
            if value != 0 {
                byte |= 0x80;
            }
            self.buf.push(byte);
            if value == 0 {
                return self;
            }
        }
    }

    pub fn u8(&mut self, value: u8) -> &mut Self {
        self.buf.push(value);
        self
    }

    pub fn u64(&mut self, value: u64) -> &mut Self {
        self.buf.extend_from_slice(&value.to_le_bytes());
        self
    }

    pub fn u128(&mut self, value: u128) -> &mut Self {
        self.buf.extend_from_slice(&value.to_le_bytes());
        self
    }

    /// Length-prefixed byte vector.
    ///
    /// Payloads longer than `u32::MAX` cannot be represented by the paired
    /// chain; callers only pass transaction-sized data.
    pub fn bytes(&mut self, data: &[u8]) -> &mut Self {
        self.varuint32(data.len() as u32);
        self.buf.extend_from_slice(data);
        self
    }

    pub fn str(&mut self, value: &str) -> &mut Self {
        self.bytes(value.as_bytes())
    }

    pub fn finish(&mut self) -> Vec<u8> {
        std::mem::take(&mut self.buf)
    }
}

/// Cursor over an encoded payload.
///
/// `target` names the type being decoded and is carried into every error.
pub struct Decoder<'a> {
    data: &'a [u8],
    pos: usize,
    target: &'static str,
}

impl<'a> Decoder<'a> {
    pub fn new(target: &'static str, data: &'a [u8]) -> Self {
        Self {
            data,
            pos: 0,
            target,
        }
    }

    fn err(&self, msg: impl ToString) -> StdError {
        StdError::parse_err(self.target, msg)
    }

    fn take(&mut self, n: usize) -> StdResult<&'a [u8]> {
        let remaining = self.data.len() - self.pos;
        if remaining < n {
            return Err(self.err(format!(
                "unexpected end of input at byte {}: need {}, have {}",
                self.pos, n, remaining
            )));
        }
        let slice = &self.data[self.pos..self.pos + n];
        self.pos += n;
        Ok(slice)
    }

    pub fn varuint32(&mut self) -> StdResult<u32> {
        let mut result: u64 = 0;
        for i in 0..MAX_VARUINT32_BYTES {
            let byte = self.take(1)?[0];
            result |= u64::from(byte & 0x7f) << (7 * i);
            if byte & 0x80 == 0 {
                if byte == 0 && i > 0 {
                    return Err(self.err("varuint32 is not minimally encoded"));
                }
                return u32::try_from(result).map_err(|_| self.err("varuint32 out of range"));
            }
        }
        Err(self.err("varuint32 longer than 5 bytes"))
    }

    pub fn u8(&mut self) -> StdResult<u8> {
        Ok(self.take(1)?[0])
    }

    pub fn u64(&mut self) -> StdResult<u64> {
        let mut raw = [0u8; 8];
        raw.copy_from_slice(self.take(8)?);
        Ok(u64::from_le_bytes(raw))
    }

    pub fn u128(&mut self) -> StdResult<u128> {
        let mut raw = [0u8; 16];
        raw.copy_from_slice(self.take(16)?);
        Ok(u128::from_le_bytes(raw))
    }

    pub fn bytes(&mut self) -> StdResult<&'a [u8]> {
        let len = self.varuint32()? as usize;
        self.take(len)
    }

    pub fn string(&mut self) -> StdResult<String> {
        let raw = self.bytes()?;
        String::from_utf8(raw.to_vec()).map_err(|_| self.err("invalid utf-8 in string field"))
    }

    /// Fails if any input is left unread.
    pub fn finish(self) -> StdResult<()> {
        if self.pos != self.data.len() {
            return Err(self.err(format!(
                "{} trailing bytes after payload",
                self.data.len() - self.pos
            )));
        }
        Ok(())
    }
}
