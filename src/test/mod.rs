
pub(crate) use i2c_mock::{mock_sensor_at_address, I2cOperation};
