use crate::{Address, SignDecoding};

/// Driver configuration, the default targets address 0x68 and decodes words the legacy way.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Config {
    /// Address used by the methods that do not take one explicitly.
    pub address: Address,
    pub decoding: SignDecoding,
}

impl Config {

    pub fn with_address(mut self, address: Address) -> Self {
        self.address = address;
        self
    }

    pub fn with_decoding(mut self, decoding: SignDecoding) -> Self {
        self.decoding = decoding;
        self
    }
}
