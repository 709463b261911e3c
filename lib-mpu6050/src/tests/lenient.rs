use embedded_hal::i2c::ErrorKind;
use embedded_hal_mock::eh1::i2c::{Mock, Transaction};

use crate::*;
use super::*;

#[test]
fn test_invalid_address_is_silent() {
    let mut mpu = Mpu6050::new(Mock::new(&[]));
    let mut lenient = mpu.lenient();
    assert_eq!(lenient.initialize(0x70), Ok(()));
    assert_eq!(lenient.reset(0x70), Ok(()));
    assert_eq!(lenient.set_address(0x70), Ok(()));
    assert_eq!(lenient.read_temperature(0x70), Ok(0.0));
    assert_eq!(lenient.acceleration(0x70, 1), Ok(0));
    assert_eq!(lenient.angular_rate(0x70, 1), Ok(0));
    assert!(!mpu.is_initialized());
    mpu.release().done();
}

#[test]
fn test_invalid_axis_reads_zero() {
    let mut mpu = Mpu6050::new(Mock::new(&[]));
    assert_eq!(mpu.lenient().acceleration(0x68, 7), Ok(0));
    assert_eq!(mpu.lenient().angular_rate(0x69, 0), Ok(0));
    mpu.release().done();
}

#[test]
fn test_valid_requests_pass_through() {
    let mut expectations = vec![ expect_power_write(0x68, 0) ];
    expectations.extend(expect_read_word(0x68, 0x3B, 0x01, 0x00));
    expectations.extend(expect_read_word(0x68, 0x47, 0xFF, 0xFF));
    expectations.extend(expect_read_word(0x68, 0x45, 0x00, 0x02));
    expectations.push(expect_read_byte(0x68, 0x75, 0x68));
    let mut mpu = Mpu6050::new(Mock::new(&expectations));
    let mut lenient = mpu.lenient();
    assert_eq!(lenient.initialize(0x68), Ok(()));
    assert_eq!(lenient.acceleration(0x68, 1), Ok(256));
    assert_eq!(lenient.angular_rate(0x68, 3), Ok(-1));
    assert_eq!(lenient.angular_rate_active(Axis::Y), Ok(2));
    assert_eq!(lenient.read_raw_register(0x75), Ok(0x68));
    assert!(mpu.is_initialized());
    mpu.release().done();
}

#[test]
fn test_bus_errors_are_not_hidden() {
    let mut mpu = Mpu6050::new(Mock::new(&[
        Transaction::write_read(0x69, vec![ 0x41 ], vec![ 0 ]).with_error(ErrorKind::NoAcknowledge(
            embedded_hal::i2c::NoAcknowledgeSource::Address,
        )),
    ]));
    let result = mpu.lenient().read_temperature(0x69);
    assert_eq!(result, Err(ErrorKind::NoAcknowledge(embedded_hal::i2c::NoAcknowledgeSource::Address)));
    mpu.release().done();
}
