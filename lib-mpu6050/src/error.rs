use core::fmt;

/// Errors returned by the strict API of the driver.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error<E> {
    /// The underlying i2c bus failed, nothing is retried.
    Bus(E),
    /// The requested address is neither 0x68 nor 0x69, no bus transaction took place.
    InvalidAddress(u8),
    /// The axis selector is not one of 1, 2 or 3, no bus transaction took place.
    InvalidAxis(u8),
}

impl<E> Error<E> {

    /// Returns the bus error if this is one, or `None` for rejected input.
    ///
    pub fn into_bus(self) -> Option<E> {
        match self {
            Self::Bus(err) => Some(err),
            _ => None,
        }
    }
}

impl<E: fmt::Debug> fmt::Display for Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bus(err) => write!(f, "i2c bus error: {:?}", err),
            Self::InvalidAddress(address) => write!(f, "invalid MPU6050 address: {:#04x}", address),
            Self::InvalidAxis(axis) => write!(f, "invalid axis selector: {}", axis),
        }
    }
}

impl<E: fmt::Debug> core::error::Error for Error<E> {}
