use crate::registers::*;
use crate::decoder::*;
use crate::{Address, Axis, Config, Error, Lenient, RegisterBus, MPU6050_DEVICE_ID};

/// Value written to `PWR_MGMT_1` to wake the chip up.
///
pub const POWER_ON: u8 = 0x00;

/// Value written to `PWR_MGMT_1` by [`Mpu6050::reset`].
///
pub const POWER_RESET: u8 = 0x01;

/// Whether a power on write has been issued through this driver yet.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceState {
    Uninitialized,
    Initialized,
}

pub struct Mpu6050<B: RegisterBus>
{
    /// i2c bus that we actually use to communicate with the MPU6050 chip.
    bus: B,

    /// i2c address used by the methods that do not take one as argument.
    address: Address,

    decoding: SignDecoding,

    // Only ever goes from false to true, `reset` leaves it alone.
    initialized: bool,
}

impl<B: RegisterBus> Mpu6050<B>
{
    /// Create a new MPU 6050 driver with the default configuration. Nothing is sent over the bus
    /// until the device is initialized or read from.
    ///
    pub fn new(bus: B) -> Self {
        Self::with_config(bus, Config::default())
    }

    pub fn with_config(bus: B, config: Config) -> Self {
        Mpu6050 {
            bus,
            address: config.address,
            decoding: config.decoding,
            initialized: false,
        }
    }

    /// Gives back the bus, dropping the driver.
    ///
    pub fn release(self) -> B {
        self.bus
    }

    pub fn address(&self) -> Address {
        self.address
    }

    pub fn decoding(&self) -> SignDecoding {
        self.decoding
    }

    pub fn state(&self) -> DeviceState {
        if self.initialized { DeviceState::Initialized } else { DeviceState::Uninitialized }
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// View of this driver that keeps the old silent behaviour: invalid input is ignored and
    /// reads return zero instead of an error.
    ///
    pub fn lenient(&mut self) -> Lenient<'_, B> {
        Lenient::new(self)
    }

    // Stateless API, every call names the device address it targets.
    // ============================================================================================

    /// Wakes up the device at `address` by clearing `PWR_MGMT_1`.
    ///
    pub fn initialize_at(&mut self, address: u8) -> Result<(), Error<B::Error>> {
        let address = Self::check_address(address)?;
        self.power_on(address)
    }

    /// Writes the reset value into `PWR_MGMT_1` of the device at `address`. Note that the driver
    /// still considers the device initialized afterwards.
    ///
    pub fn reset_at(&mut self, address: u8) -> Result<(), Error<B::Error>> {
        let address = Self::check_address(address)?;
        log::debug!("Resetting MPU6050 at {:#04x}", address.as_u8());
        self.bus.write_register(address.as_u8(), PWR_MGMT_1, POWER_RESET).map_err(Error::Bus)
    }

    /// Get temperature of the on chip temperature sensor at `address`, result is returned in
    /// degrees celsius.
    ///
    pub fn read_temperature_at(&mut self, address: u8) -> Result<f32, Error<B::Error>> {
        let address = Self::check_address(address)?;
        self.temperature_of(address)
    }

    /// Raw accelerometer reading (LSB) for the axis with the given selector (1 = X, 2 = Y, 3 = Z).
    ///
    pub fn acceleration_at(&mut self, address: u8, axis: u8) -> Result<i32, Error<B::Error>> {
        let address = Self::check_address(address)?;
        let axis = Self::check_axis(axis)?;
        self.signed_word(address, axis.accel_register())
    }

    /// Raw gyroscope reading (LSB) for the axis with the given selector (1 = X, 2 = Y, 3 = Z).
    ///
    pub fn angular_rate_at(&mut self, address: u8, axis: u8) -> Result<i32, Error<B::Error>> {
        let address = Self::check_address(address)?;
        let axis = Self::check_axis(axis)?;
        self.signed_word(address, axis.gyro_register())
    }

    // Stateful API, works on the address stored in the driver.
    // ============================================================================================

    /// Makes `address` the active device address. The first time a valid address is set on a
    /// driver that was never initialized, the device at the new address is also powered on.
    ///
    pub fn set_address(&mut self, address: u8) -> Result<(), Error<B::Error>> {
        let address = Self::check_address(address)?;
        log::debug!("Active MPU6050 address set to {:#04x}", address.as_u8());
        self.address = address;
        if !self.initialized {
            self.power_on(address)?;
        }
        Ok(())
    }

    pub fn initialize(&mut self) -> Result<(), Error<B::Error>> {
        self.power_on(self.address)
    }

    pub fn reset(&mut self) -> Result<(), Error<B::Error>> {
        self.reset_at(self.address.as_u8())
    }

    pub fn read_temperature(&mut self) -> Result<f32, Error<B::Error>> {
        self.temperature_of(self.address)
    }

    pub fn acceleration(&mut self, axis: Axis) -> Result<i32, Error<B::Error>> {
        self.signed_word(self.address, axis.accel_register())
    }

    pub fn angular_rate(&mut self, axis: Axis) -> Result<i32, Error<B::Error>> {
        self.signed_word(self.address, axis.gyro_register())
    }

    /// Reads a single byte from any register of the active device, mostly useful for debugging.
    ///
    pub fn read_raw_register(&mut self, register: u8) -> Result<u8, Error<B::Error>> {
        self.bus.read_register(self.address.as_u8(), register).map_err(Error::Bus)
    }

    /// Gets the device ID of the active MPU6050 chip, practically speaking this just gets the
    /// contents of the `WHO_AM_I` register.
    ///
    pub fn read_device_id(&mut self) -> Result<u8, Error<B::Error>> {
        let value = self.read_raw_register(WHO_AM_I)?;
        Ok((value & 0b0111_1110) >> 1)
    }

    /// Checks if the i2c connection with the MPU6050 chip is working as expected, practically
    /// speaking this function just checks if it can read the device ID and if the device ID is
    /// the expected value.
    ///
    pub fn connection_okay(&mut self) -> bool {
        self.read_device_id().map(|id| id == MPU6050_DEVICE_ID).unwrap_or(false)
    }

    fn power_on(&mut self, address: Address) -> Result<(), Error<B::Error>> {
        log::debug!("Powering on MPU6050 at {:#04x}", address.as_u8());
        self.bus.write_register(address.as_u8(), PWR_MGMT_1, POWER_ON).map_err(Error::Bus)?;
        self.initialized = true;
        Ok(())
    }

    fn temperature_of(&mut self, address: Address) -> Result<f32, Error<B::Error>> {
        let raw = self.signed_word(address, TEMP_OUT_H)?;
        // Formula from page 30 of register map data sheet.
        Ok(36.53 + (raw as f32) / 340.0)
    }

    fn signed_word(&mut self, address: Address, register: u8) -> Result<i32, Error<B::Error>> {
        read_word_signed(&mut self.bus, address.as_u8(), register, self.decoding).map_err(Error::Bus)
    }

    fn check_address(address: u8) -> Result<Address, Error<B::Error>> {
        Address::try_from(address).map_err(|rejected| {
            log::warn!("Ignoring request for invalid MPU6050 address {:#04x}", rejected);
            Error::InvalidAddress(rejected)
        })
    }

    fn check_axis(axis: u8) -> Result<Axis, Error<B::Error>> {
        Axis::try_from(axis).map_err(|rejected| {
            log::warn!("Ignoring request for invalid axis selector {}", rejected);
            Error::InvalidAxis(rejected)
        })
    }
}
