use embedded_hal::i2c::I2c;

/// Register level access to a device on an i2c bus. Neither the address nor the register are
/// validated here, and errors from the underlying bus are handed back untouched.
///
pub trait RegisterBus {
    type Error;

    /// Writes `value` into `register` as a single `[register, value]` write transaction.
    ///
    fn write_register(&mut self, address: u8, register: u8, value: u8) -> Result<(), Self::Error>;

    /// Selects `register` and reads a single byte back from it.
    ///
    fn read_register(&mut self, address: u8, register: u8) -> Result<u8, Self::Error>;
}

impl<I: I2c> RegisterBus for I {
    type Error = I::Error;

    fn write_register(&mut self, address: u8, register: u8, value: u8) -> Result<(), Self::Error> {
        self.write(address, &[ register, value ])
    }

    fn read_register(&mut self, address: u8, register: u8) -> Result<u8, Self::Error> {
        let mut state = [ 0u8 ];
        self.write_read(address, &[ register ], &mut state)?;
        Ok(state[0])
    }
}
