//! Trigonometry Series Export Tool
//!
//! Runs one lesson computation and prints the result as JSON, ready to be fed
//! to a charting front end.
//!
//! Usage:
//!   cargo run --bin trig_series -- circle --angle 135 --unit degrees
//!   cargo run --bin trig_series -- wave --amplitude 2 --frequency 3 --samples 50
//!   cargo run --bin trig_series -- sinc --start -20 --end 20 --unit degrees
//!   cargo run --bin trig_series -- solar --latitude 51.5 --date 2024-06-21

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use serde_json::json;

use trigcraft::applications::{
    electrical, navigation,
    solar::{self, sample_daylight_hours},
};
use trigcraft::circle::{circle_outline, read_angle};
use trigcraft::constants::{DEFAULT_SAMPLE_COUNT, TAU};
use trigcraft::{
    limits, right_triangle_sides, sample_wave, Angle, AngleUnit, SampleDomain, WaveParameters,
    Waveform,
};

/// Type alias for the error type used throughout this module
type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Trigonometry lesson calculator
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Computes trigonometry lesson values and plot series as JSON",
    long_about = None
)]
struct Args {
    /// Print compact JSON instead of pretty JSON
    #[arg(long)]
    compact: bool,

    #[command(subcommand)]
    lesson: Lesson,
}

/// Unit flag accepted on the command line
#[derive(Debug, Clone, Copy, ValueEnum)]
enum UnitArg {
    Degrees,
    Radians,
}

impl From<UnitArg> for AngleUnit {
    fn from(unit: UnitArg) -> Self {
        match unit {
            UnitArg::Degrees => AngleUnit::Degrees,
            UnitArg::Radians => AngleUnit::Radians,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum WaveformArg {
    Sin,
    Cos,
}

impl From<WaveformArg> for Waveform {
    fn from(waveform: WaveformArg) -> Self {
        match waveform {
            WaveformArg::Sin => Waveform::Sin,
            WaveformArg::Cos => Waveform::Cos,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Lesson {
    /// Convert an angle between degrees and radians
    Convert {
        #[arg(long, allow_hyphen_values = true)]
        angle: f64,
        #[arg(long, value_enum, default_value = "degrees")]
        unit: UnitArg,
    },

    /// Point, tangent and outline of the unit circle at an angle
    Circle {
        #[arg(long, default_value_t = 90.0, allow_hyphen_values = true)]
        angle: f64,
        #[arg(long, value_enum, default_value = "degrees")]
        unit: UnitArg,
        /// Points used for the circle outline
        #[arg(long, default_value_t = 361)]
        samples: usize,
    },

    /// Sample A·f(B·x + C) + D
    Wave {
        /// JSON file with wave parameters; flags are ignored when given
        #[arg(long)]
        params: Option<PathBuf>,
        #[arg(long, default_value_t = 1.0, allow_hyphen_values = true)]
        amplitude: f64,
        #[arg(long, default_value_t = 1.0, allow_hyphen_values = true)]
        frequency: f64,
        /// Phase offset in radians
        #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
        phase: f64,
        #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
        shift: f64,
        #[arg(long, value_enum, default_value = "sin")]
        waveform: WaveformArg,
        #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
        start: f64,
        #[arg(long, default_value_t = TAU, allow_hyphen_values = true)]
        end: f64,
        #[arg(long, default_value_t = DEFAULT_SAMPLE_COUNT)]
        samples: usize,
    },

    /// Sample sin(x)/x around zero
    Sinc {
        #[arg(long, default_value_t = -10.0, allow_hyphen_values = true)]
        start: f64,
        #[arg(long, default_value_t = 10.0, allow_hyphen_values = true)]
        end: f64,
        #[arg(long, default_value_t = 201)]
        samples: usize,
        #[arg(long, value_enum, default_value = "radians")]
        unit: UnitArg,
    },

    /// Sides of a right triangle from hypotenuse and angle
    Triangle {
        #[arg(long, allow_hyphen_values = true)]
        hypotenuse: f64,
        #[arg(long, allow_hyphen_values = true)]
        angle: f64,
        #[arg(long, value_enum, default_value = "degrees")]
        unit: UnitArg,
    },

    /// Drift angle and ground speed in a crosswind
    Wind {
        #[arg(long, allow_hyphen_values = true)]
        airspeed: f64,
        #[arg(long, allow_hyphen_values = true)]
        wind_speed: f64,
        /// Wind direction relative to the course, in degrees
        #[arg(long, allow_hyphen_values = true)]
        direction: f64,
    },

    /// AC voltage waveform, RMS and average power
    Ac {
        #[arg(long, default_value_t = 170.0)]
        peak_voltage: f64,
        /// Supply frequency in hertz
        #[arg(long, default_value_t = 60.0)]
        hz: f64,
        /// Phase offset in radians
        #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
        phase: f64,
        /// Peak current, enables the average power figure
        #[arg(long)]
        peak_current: Option<f64>,
        /// Number of cycles to sample
        #[arg(long, default_value_t = 2.0)]
        cycles: f64,
        #[arg(long, default_value_t = DEFAULT_SAMPLE_COUNT)]
        samples: usize,
    },

    /// Solar declination and day length through the year
    Solar {
        #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
        latitude: f64,
        /// Date (YYYY-MM-DD) to evaluate; defaults to the June solstice
        #[arg(long)]
        date: Option<NaiveDate>,
        #[arg(long, default_value_t = 365)]
        samples: usize,
    },
}

fn run(lesson: Lesson) -> Result<serde_json::Value> {
    let value = match lesson {
        Lesson::Convert { angle, unit } => to_json(Angle::new(angle, unit.into()).convert())?,

        Lesson::Circle {
            angle,
            unit,
            samples,
        } => {
            let reading = read_angle(Angle::new(angle, unit.into()))?;
            json!({
                "reading": reading,
                "arm": reading.point.arm(),
                "outline": circle_outline(1.0, samples)?,
            })
        }

        Lesson::Wave {
            params,
            amplitude,
            frequency,
            phase,
            shift,
            waveform,
            start,
            end,
            samples,
        } => {
            let params = match params {
                Some(path) => load_wave_parameters(&path)?,
                None => WaveParameters::new(amplitude, frequency, phase, shift, waveform.into()),
            };
            let series = sample_wave(&params, &SampleDomain::new(start, end, samples))?;
            json!({
                "params": params,
                "period": params.period().value(),
                "range": params.range(),
                "series": series,
            })
        }

        Lesson::Sinc {
            start,
            end,
            samples,
            unit,
        } => {
            let unit = AngleUnit::from(unit);
            let series = limits::sample_sinc(&SampleDomain::new(start, end, samples), unit)?;
            json!({
                "unit": unit,
                "limit": limits::sinc_limit(unit),
                "series": series,
            })
        }

        Lesson::Triangle {
            hypotenuse,
            angle,
            unit,
        } => {
            let triangle =
                right_triangle_sides(hypotenuse, Angle::new(angle, unit.into()).to_radians())?;
            json!({
                "sides": triangle,
                "sin": triangle.sin().to_string(),
                "cos": triangle.cos().to_string(),
                "tan": triangle.tan().to_string(),
                "area": triangle.area(),
            })
        }

        Lesson::Wind {
            airspeed,
            wind_speed,
            direction,
        } => to_json(navigation::wind_triangle_drift(
            airspeed,
            wind_speed,
            Angle::from_degrees(direction).to_radians(),
        )?)?,

        Lesson::Ac {
            peak_voltage,
            hz,
            phase,
            peak_current,
            cycles,
            samples,
        } => {
            if hz <= 0.0 {
                return Err(format!("frequency must be positive, got {}", hz).into());
            }
            let omega = electrical::angular_frequency_hz(hz);
            let domain = SampleDomain::new(0.0, cycles / hz, samples);
            json!({
                "rms_voltage": electrical::rms_voltage(peak_voltage),
                "average_power": peak_current
                    .map(|current| electrical::average_power(peak_voltage, current, phase)),
                "series": electrical::sample_ac_voltage(peak_voltage, omega, phase, &domain)?,
            })
        }

        Lesson::Solar {
            latitude,
            date,
            samples,
        } => {
            let day = f64::from(date.map_or(172, solar::day_of_year));
            json!({
                "day_of_year": day,
                "declination_degrees": solar::solar_declination(day),
                "daylight_hours": solar::daylight_hours(latitude, day)?,
                "declination": solar::sample_declination(samples)?,
                "daylight": sample_daylight_hours(latitude, samples)?,
            })
        }
    };
    Ok(value)
}

fn to_json<T: Serialize>(value: T) -> Result<serde_json::Value> {
    Ok(serde_json::to_value(value)?)
}

/// Read wave parameters from a JSON file; missing fields take their defaults
fn load_wave_parameters(path: &Path) -> Result<WaveParameters> {
    log::debug!("loading wave parameters from {}", path.display());
    let text = fs::read_to_string(path)
        .map_err(|e| format!("failed to read {}: {}", path.display(), e))?;
    Ok(serde_json::from_str(&text)?)
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    log::debug!("running {:?}", args.lesson);

    let output = run(args.lesson).and_then(|value| {
        let text = if args.compact {
            serde_json::to_string(&value)?
        } else {
            serde_json::to_string_pretty(&value)?
        };
        Ok(text)
    });

    match output {
        Ok(text) => println!("{}", text),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
