use embedded_hal_mock::eh1::i2c::Transaction;

mod decoder;
mod lenient;

/// Expected traffic for a single register read returning `value`.
///
fn expect_read_byte(address: u8, register: u8, value: u8) -> Transaction {
    Transaction::write_read(address, vec![register], vec![value])
}

/// Expected traffic for a word read, high byte first.
///
fn expect_read_word(address: u8, register: u8, high: u8, low: u8) -> Vec<Transaction> {
    vec![
        expect_read_byte(address, register, high),
        expect_read_byte(address, register + 1, low),
    ]
}

fn expect_power_write(address: u8, value: u8) -> Transaction {
    Transaction::write(address, vec![0x6B, value])
}
