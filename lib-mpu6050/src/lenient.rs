use crate::{Axis, Error, Mpu6050, RegisterBus};

/// Borrowed view of an [`Mpu6050`] with the forgiving error policy of the block library: an
/// invalid address or axis turns writes into no-ops and reads into zero. Bus errors are still
/// reported, callers just cannot tell a rejected request from a sensor that reads zero.
///
pub struct Lenient<'a, B: RegisterBus> {
    mpu: &'a mut Mpu6050<B>,
}

impl<'a, B: RegisterBus> Lenient<'a, B> {

    pub fn new(mpu: &'a mut Mpu6050<B>) -> Self {
        Lenient { mpu }
    }

    pub fn initialize(&mut self, address: u8) -> Result<(), B::Error> {
        or_zero(self.mpu.initialize_at(address))
    }

    pub fn reset(&mut self, address: u8) -> Result<(), B::Error> {
        or_zero(self.mpu.reset_at(address))
    }

    pub fn set_address(&mut self, address: u8) -> Result<(), B::Error> {
        or_zero(self.mpu.set_address(address))
    }

    pub fn read_temperature(&mut self, address: u8) -> Result<f32, B::Error> {
        or_zero(self.mpu.read_temperature_at(address))
    }

    pub fn acceleration(&mut self, address: u8, axis: u8) -> Result<i32, B::Error> {
        or_zero(self.mpu.acceleration_at(address, axis))
    }

    pub fn angular_rate(&mut self, address: u8, axis: u8) -> Result<i32, B::Error> {
        or_zero(self.mpu.angular_rate_at(address, axis))
    }

    /// Accelerometer reading of the active device.
    ///
    pub fn acceleration_active(&mut self, axis: Axis) -> Result<i32, B::Error> {
        or_zero(self.mpu.acceleration(axis))
    }

    /// Gyroscope reading of the active device.
    ///
    pub fn angular_rate_active(&mut self, axis: Axis) -> Result<i32, B::Error> {
        or_zero(self.mpu.angular_rate(axis))
    }

    pub fn read_raw_register(&mut self, register: u8) -> Result<u8, B::Error> {
        or_zero(self.mpu.read_raw_register(register))
    }
}

fn or_zero<T: Default, E>(result: Result<T, Error<E>>) -> Result<T, E> {
    match result {
        Ok(value) => Ok(value),
        Err(Error::Bus(err)) => Err(err),
        Err(Error::InvalidAddress(_) | Error::InvalidAxis(_)) => Ok(T::default()),
    }
}
