//! Register offsets of the MPU6050 that this driver touches. Every `*_H` register holds the high
//! byte of a 16 bit big-endian measurement, the low byte lives at the next offset.

pub const ACCEL_XOUT_H: u8 = 0x03B;
pub const ACCEL_XOUT_L: u8 = 0x03C;
pub const ACCEL_YOUT_H: u8 = 0x03D;
pub const ACCEL_YOUT_L: u8 = 0x03E;
pub const ACCEL_ZOUT_H: u8 = 0x03F;
pub const ACCEL_ZOUT_L: u8 = 0x040;

pub const TEMP_OUT_H: u8 = 0x041;
pub const TEMP_OUT_L: u8 = 0x042;

pub const GYRO_XOUT_H: u8 = 0x043;
pub const GYRO_XOUT_L: u8 = 0x044;
pub const GYRO_YOUT_H: u8 = 0x045;
pub const GYRO_YOUT_L: u8 = 0x046;
pub const GYRO_ZOUT_H: u8 = 0x047;
pub const GYRO_ZOUT_L: u8 = 0x048;

pub const PWR_MGMT_1: u8 = 0x06B; //[7] DEVICE_RESET, [6] SLEEP, [2:0] CLKSEL

pub const WHO_AM_I: u8 = 0x075; //[6:1] WHO_AM_I
