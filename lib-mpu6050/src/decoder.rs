use crate::RegisterBus;

/// How a raw 16 bit register word is turned into a signed reading.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SignDecoding {
    /// Bit compatible with the readings the block library has always produced: only words
    /// strictly above `0x8000` are negative, so `0x8000` itself decodes to `+32768`.
    #[default]
    Legacy,

    /// Plain two's complement, `0x8000` decodes to `-32768`.
    TwosComplement,
}

impl SignDecoding {

    pub fn decode(&self, word: u16) -> i32 {
        match self {
            Self::Legacy => {
                if word > 0x8000 {
                    -((65535 - word as i32) + 1)
                } else {
                    word as i32
                }
            }
            Self::TwosComplement => (word as i16) as i32,
        }
    }
}

/// Reads the word stored in `register` (high byte) and `register + 1` (low byte), one byte read
/// per register. Only call this for registers that actually have a low byte after them.
///
pub fn read_word<B: RegisterBus>(bus: &mut B, address: u8, register: u8) -> Result<u16, B::Error> {
    let high = bus.read_register(address, register)?;
    let low = bus.read_register(address, register.wrapping_add(1))?;
    Ok(((high as u16) << 8) | (low as u16))
}

/// Same as [`read_word`] but decodes the result into a signed value.
///
pub fn read_word_signed<B: RegisterBus>(
    bus: &mut B,
    address: u8,
    register: u8,
    decoding: SignDecoding,
) -> Result<i32, B::Error> {
    Ok(decoding.decode(read_word(bus, address, register)?))
}
