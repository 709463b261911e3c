use core::cell::RefCell;
use critical_section::Mutex;

use crate::{Mpu6050, RegisterBus};

/// Slot for an [`Mpu6050`] that can live in a `static` and be used from both the main loop and
/// interrupt handlers. Every access runs inside a critical section, so bus transactions of
/// different callers never interleave.
///
/// ```ignore
/// static MPU: SharedMpu6050<I2c<'static, Blocking>> = SharedMpu6050::new();
///
/// MPU.install(Mpu6050::new(i2c));
/// let temp = MPU.lock(|mpu| mpu.read_temperature());
/// ```
///
pub struct SharedMpu6050<B: RegisterBus> {
    mpu: Mutex<RefCell<Option<Mpu6050<B>>>>,
}

impl<B: RegisterBus> SharedMpu6050<B> {

    pub const fn new() -> Self {
        SharedMpu6050 { mpu: Mutex::new(RefCell::new(None)) }
    }

    /// Puts `mpu` in the slot, returning the driver that was there before.
    ///
    pub fn install(&self, mpu: Mpu6050<B>) -> Option<Mpu6050<B>> {
        critical_section::with(|cs| self.mpu.borrow_ref_mut(cs).replace(mpu))
    }

    pub fn take(&self) -> Option<Mpu6050<B>> {
        critical_section::with(|cs| self.mpu.borrow_ref_mut(cs).take())
    }

    /// Runs `f` with exclusive access to the driver, or returns `None` if none is installed.
    ///
    pub fn lock<R>(&self, f: impl FnOnce(&mut Mpu6050<B>) -> R) -> Option<R> {
        critical_section::with(|cs| self.mpu.borrow_ref_mut(cs).as_mut().map(f))
    }
}

impl<B: RegisterBus> Default for SharedMpu6050<B> {
    fn default() -> Self {
        Self::new()
    }
}
