use crate::MPU6050_DEFAULT_I2C_ADDR;

/// One of the two i2c addresses an MPU6050 can answer on, selected with the AD0 pin.
///
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Address {
    /// AD0 pulled low (or left floating).
    #[default]
    Addr0x68 = MPU6050_DEFAULT_I2C_ADDR,
    /// AD0 pulled high.
    Addr0x69 = 0x69,
}

impl Address {

    /// Checks if the given raw 7 bit address is one the MPU6050 can be configured to use.
    ///
    pub fn is_valid(raw: u8) -> bool {
        Self::try_from(raw).is_ok()
    }

    pub fn as_u8(&self) -> u8 {
        (*self) as u8
    }
}

impl TryFrom<u8> for Address {
    type Error = u8;

    /// Fails with the rejected value if it is neither 0x68 nor 0x69.
    ///
    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        match raw {
            0x68 => Ok(Address::Addr0x68),
            0x69 => Ok(Address::Addr0x69),
            other => Err(other),
        }
    }
}

impl From<Address> for u8 {
    fn from(address: Address) -> Self {
        address.as_u8()
    }
}
