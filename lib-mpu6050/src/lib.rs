#![cfg_attr(not(test), no_std)]

pub mod address;
pub use address::*;

pub mod axis;
pub use axis::*;

pub mod bus;
pub use bus::*;

pub mod config;
pub use config::*;

pub mod decoder;
pub use decoder::*;

pub mod error;
pub use error::*;

pub mod lenient;
pub use lenient::*;

pub mod shared;
pub use shared::*;

pub mod registers;

pub mod mpu6050;
pub use mpu6050::*;

#[cfg(test)]
mod tests;

/// Default i2c address of the MPU 6050 chip.
///
pub const MPU6050_DEFAULT_I2C_ADDR: u8 = 0x68;

/// The default device ID of a MPU6050 chip.
///
pub const MPU6050_DEVICE_ID: u8 = 0x034;
