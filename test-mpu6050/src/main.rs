#![no_std]
#![no_main]

use esp_backtrace as _;
use esp_hal::{delay::Delay, i2c::master::{Config, I2c}, prelude::*, Blocking};
use mpu6050::{Axis, Error, Mpu6050, SharedMpu6050};

/// The sensor is shared through a critical section so it could also be polled from an interrupt
/// handler.
///
static MPU: SharedMpu6050<I2c<'static, Blocking>> = SharedMpu6050::new();

/// Second sensor on the bus, wired with AD0 high.
///
const SECOND_ADDRESS: u8 = 0x69;

fn log_readings(mpu: &mut Mpu6050<I2c<'static, Blocking>>) -> Result<(), Error<esp_hal::i2c::master::Error>> {
    let temp = mpu.read_temperature()?;
    let accel = [ mpu.acceleration(Axis::X)?, mpu.acceleration(Axis::Y)?, mpu.acceleration(Axis::Z)? ];
    let gyro = [ mpu.angular_rate(Axis::X)?, mpu.angular_rate(Axis::Y)?, mpu.angular_rate(Axis::Z)? ];
    log::info!("temp: {:.2}, accel: {:?}, gyro: {:?}", temp, accel, gyro);

    // The block library style API silently reads zero when nothing answers on this address.
    match mpu.lenient().acceleration(SECOND_ADDRESS, Axis::X as u8) {
        Ok(x) => log::debug!("second sensor accel x: {}", x),
        Err(err) => log::debug!("second sensor not reachable: {:?}", err),
    }
    Ok(())
}

#[entry]
fn main() -> ! {
    esp_println::logger::init_logger(log::LevelFilter::Debug);

    let peripherals = esp_hal::init(esp_hal::Config::default());


    // Initialize I2C connection for the MPU6050
    // ============================================================================================
    let i2c = I2c::new(peripherals.I2C0, Config::default())
        .with_sda(peripherals.GPIO1)
        .with_scl(peripherals.GPIO2);


    // Wake up the MPU6050
    // ============================================================================================
    let delay = Delay::new();
    let mut mpu = Mpu6050::new(i2c);
    if let Err(err) = mpu.initialize() {
        log::error!("Failed to power on MPU6050: {}", err);
    }
    delay.delay_millis(350);
    log::info!("Connection okay: {}", mpu.connection_okay());
    MPU.install(mpu);


    // Log readings
    // ============================================================================================
    loop {
        match MPU.lock(log_readings) {
            Some(Err(err)) => log::error!("error: {}", err),
            Some(Ok(())) => {},
            None => log::warn!("MPU6050 driver missing"),
        }
        delay.delay_millis(500);
    }
}
