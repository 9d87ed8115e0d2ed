//! Named helpers for each registered sensor type.
//!
//! Each helper is a fixed-arity wrapper over [`Frame::add`].

use std::time::{SystemTime, UNIX_EPOCH};

use lppkit_types::registry::*;

use crate::error::Result;
use crate::frame::Frame;

macro_rules! scalar_adders {
    ($($(#[$doc:meta])* $fn_name:ident => $type_id:expr;)+) => {
        $(
            $(#[$doc])*
            pub fn $fn_name(&mut self, channel: u8, value: f64) -> Result<()> {
                self.add($type_id.into(), channel, &[value])
            }
        )+
    };
}

impl Frame {
    scalar_adders! {
        /// Digital input (1 byte).
        add_digital_input => DIGITAL_INPUT;
        /// Digital output (1 byte).
        add_digital_output => DIGITAL_OUTPUT;
        /// Analog input, 0.01 resolution, signed.
        add_analog_input => ANALOG_INPUT;
        /// Analog output, 0.01 resolution, signed.
        add_analog_output => ANALOG_OUTPUT;
        /// Generic 4-byte unsigned integer.
        add_generic => GENERIC;
        /// Illuminance in lux.
        add_luminosity => ILLUMINANCE;
        add_presence => PRESENCE;
        /// Temperature in °C, 0.1 resolution.
        add_temperature => TEMPERATURE;
        /// Relative humidity in %, 0.5 resolution.
        add_humidity => HUMIDITY;
        /// Barometric pressure in hPa, 0.1 resolution.
        add_barometer => BAROMETER;
        /// Same as [`add_barometer`](Self::add_barometer).
        add_pressure => BAROMETER;
        /// Voltage in V, 0.01 resolution.
        add_voltage => VOLTAGE;
        /// Current in A, 0.001 resolution.
        add_current => CURRENT;
        /// Frequency in Hz.
        add_frequency => FREQUENCY;
        add_percentage => PERCENTAGE;
        /// Altitude in m, signed.
        add_altitude => ALTITUDE;
        /// Load in kg, 0.001 resolution, signed.
        add_load => LOAD;
        /// Concentration in ppm.
        add_concentration => CONCENTRATION;
        /// Power in W.
        add_power => POWER;
        /// Distance in m, 0.001 resolution.
        add_distance => DISTANCE;
        /// Energy in kWh, 0.001 resolution.
        add_energy => ENERGY;
        /// Direction in degrees.
        add_direction => DIRECTION;
        /// Unix time in whole seconds.
        add_unix_time => UNIX_TIME;
        add_switch => SWITCH;
    }

    /// Accelerometer in G, 0.001 resolution per axis.
    pub fn add_accelerometer(&mut self, channel: u8, x: f64, y: f64, z: f64) -> Result<()> {
        self.add(ACCELEROMETER.into(), channel, &[x, y, z])
    }

    /// Gyrometer in °/s, 0.01 resolution per axis.
    pub fn add_gyrometer(&mut self, channel: u8, x: f64, y: f64, z: f64) -> Result<()> {
        self.add(GYROMETER.into(), channel, &[x, y, z])
    }

    pub fn add_colour(&mut self, channel: u8, red: f64, green: f64, blue: f64) -> Result<()> {
        self.add(COLOUR.into(), channel, &[red, green, blue])
    }

    /// GPS position: latitude and longitude in degrees (0.0001), altitude
    /// in m (0.01).
    pub fn add_gps(&mut self, channel: u8, lat: f64, lon: f64, alt: f64) -> Result<()> {
        self.add(GPS_LOCATION.into(), channel, &[lat, lon, alt])
    }

    /// Same as [`add_gps`](Self::add_gps).
    pub fn add_location(&mut self, channel: u8, lat: f64, lon: f64, alt: f64) -> Result<()> {
        self.add_gps(channel, lat, lon, alt)
    }

    /// Add a wall-clock time as a Unix Time item.
    ///
    /// Sub-second precision is dropped. Times before the epoch are rejected
    /// as negative values.
    pub fn add_timestamp(&mut self, channel: u8, time: SystemTime) -> Result<()> {
        let seconds = match time.duration_since(UNIX_EPOCH) {
            Ok(elapsed) => elapsed.as_secs() as f64,
            Err(err) => -err.duration().as_secs_f64(),
        };
        self.add_unix_time(channel, seconds)
    }
}
