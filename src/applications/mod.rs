//! Real-world uses of trigonometry
//!
//! Each submodule applies one closed-form model:
//! - [`navigation`]: wind drift on an aircraft's course
//! - [`electrical`]: sinusoidal AC voltage, RMS and average power
//! - [`solar`]: the sun's declination and hours of daylight through the year

pub mod electrical;
pub mod navigation;
pub mod solar;

pub use electrical::{ac_voltage, average_power, rms_voltage, sample_ac_voltage};
pub use navigation::{wind_triangle_drift, WindTriangle};
pub use solar::{day_of_year, daylight_hours, sample_declination, solar_declination};
