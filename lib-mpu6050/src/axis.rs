use crate::registers::*;

/// Measurement axis, the discriminants are the selector values used by callers that pass the axis
/// around as a plain number.
///
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X = 1,
    Y = 2,
    Z = 3,
}

impl Axis {

    /// High byte register of the accelerometer reading for this axis.
    ///
    pub fn accel_register(&self) -> u8 {
        match self {
            Self::X => ACCEL_XOUT_H,
            Self::Y => ACCEL_YOUT_H,
            Self::Z => ACCEL_ZOUT_H,
        }
    }

    /// High byte register of the gyroscope reading for this axis.
    ///
    pub fn gyro_register(&self) -> u8 {
        match self {
            Self::X => GYRO_XOUT_H,
            Self::Y => GYRO_YOUT_H,
            Self::Z => GYRO_ZOUT_H,
        }
    }
}

impl TryFrom<u8> for Axis {
    type Error = u8;

    fn try_from(selector: u8) -> Result<Self, Self::Error> {
        match selector {
            1 => Ok(Axis::X),
            2 => Ok(Axis::Y),
            3 => Ok(Axis::Z),
            other => Err(other),
        }
    }
}
