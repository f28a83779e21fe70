use std::path::{Path, PathBuf};
use std::{fs, io};

use chrono::{DateTime, Utc};
use hifitime::Epoch;
use serde::Deserialize;
use thiserror::Error;

use crate::ephemeris::{Body, EphemerisSelector};
use crate::grid::{GridError, TimeGrid};
use crate::site::ObserverSite;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] io::Error),
    #[error("{0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("invalid step duration: {0}")]
    InvalidStep(String),
    #[error(transparent)]
    Grid(#[from] GridError),
    #[error("start JD {start} is after end JD {end}")]
    StartAfterEnd { start: f64, end: f64 },
    #[error("latitude {0} is outside [-90, 90] degrees")]
    LatitudeOutOfRange(f64),
    #[error("unsupported ephemeris selector: {0}")]
    UnsupportedEphemeris(String),
}

/// A run configuration, parsed from YAML and validated before any ephemeris
/// query is issued.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RunConfig {
    pub start: InstantSpec,
    pub end: InstantSpec,
    pub step: StepSpec,
    pub site: ObserverSite,
    pub bodies: Vec<Body>,
    #[serde(default = "default_ephemeris")]
    pub ephemeris: String,
    #[serde(default)]
    pub eop_file: Option<PathBuf>,
    pub output: PathBuf,
    #[serde(default)]
    pub include_itrs: bool,
}

fn default_ephemeris() -> String {
    "builtin".to_string()
}

/// An instant given either as a raw UTC Julian Date or as an RFC 3339
/// timestamp.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(untagged)]
pub enum InstantSpec {
    JulianDate(f64),
    Timestamp(DateTime<Utc>),
}

impl InstantSpec {
    pub fn to_jd_utc(self) -> f64 {
        match self {
            InstantSpec::JulianDate(jd) => jd,
            InstantSpec::Timestamp(dt) => {
                let seconds =
                    dt.timestamp() as f64 + f64::from(dt.timestamp_subsec_nanos()) * 1e-9;
                Epoch::from_unix_seconds(seconds).to_jde_utc_days()
            }
        }
    }
}

/// A step size given either as fractional days or as a humantime duration
/// string such as `7days` or `12h`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum StepSpec {
    Days(f64),
    Text(String),
}

impl StepSpec {
    pub fn to_days(&self) -> Result<f64, ConfigError> {
        match self {
            StepSpec::Days(days) => Ok(*days),
            StepSpec::Text(text) => humantime::parse_duration(text.trim())
                .map(|d| d.as_secs_f64() / 86_400.0)
                .map_err(|e| ConfigError::InvalidStep(format!("{text}: {e}"))),
        }
    }
}

impl RunConfig {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let yaml = fs::read_to_string(path)?;
        Self::from_str(&yaml)
    }

    pub fn from_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: RunConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        // The grid itself rejects a non-positive step; building it here
        // surfaces that before any query.
        let grid = self.grid()?;
        if grid.is_empty() && !self.bodies.is_empty() {
            return Err(ConfigError::StartAfterEnd {
                start: grid.start_jd(),
                end: grid.end_jd(),
            });
        }
        if !(-90.0..=90.0).contains(&self.site.latitude_deg) {
            return Err(ConfigError::LatitudeOutOfRange(self.site.latitude_deg));
        }
        self.selector()?;
        Ok(())
    }

    pub fn selector(&self) -> Result<EphemerisSelector, ConfigError> {
        EphemerisSelector::parse(&self.ephemeris)
            .ok_or_else(|| ConfigError::UnsupportedEphemeris(self.ephemeris.clone()))
    }

    pub fn grid(&self) -> Result<TimeGrid, ConfigError> {
        let grid = TimeGrid::new(
            self.start.to_jd_utc(),
            self.end.to_jd_utc(),
            self.step.to_days()?,
        )?;
        Ok(grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const REFERENCE: &str = r#"
start: 2444239.5
end: 2458849.5
step: 7.0
site:
  latitude_deg: 61.4945763
  longitude_deg: 23.8283
  height_m: 121.9157
bodies: [mercury, venus, sun, mars, jupiter, saturn, uranus, neptune]
output: astropy_jplephem_data.json
"#;

    #[test]
    fn parses_the_reference_configuration() {
        let config = RunConfig::from_str(REFERENCE).unwrap();
        assert_eq!(config.bodies.len(), 8);
        assert_eq!(config.ephemeris, "builtin");
        assert!(!config.include_itrs);
        let grid = config.grid().unwrap();
        assert_eq!(grid.len(), 2088);
    }

    #[test]
    fn accepts_timestamps_for_instants() {
        let yaml = r#"
start: 1980-01-01T00:00:00Z
end: 2020-01-01T00:00:00Z
step: 7days
site: { latitude_deg: 61.4945763, longitude_deg: 23.8283, height_m: 121.9157 }
bodies: [sun]
output: out.json
"#;
        let config = RunConfig::from_str(yaml).unwrap();
        let grid = config.grid().unwrap();
        assert!((grid.start_jd() - 2444239.5).abs() < 1e-6);
        assert!((grid.end_jd() - 2458849.5).abs() < 1e-6);
        assert!((grid.step_days() - 7.0).abs() < 1e-12);
    }

    #[test]
    fn rejects_unknown_bodies_before_any_query() {
        let yaml = REFERENCE.replace("mercury", "pluto");
        assert!(matches!(
            RunConfig::from_str(&yaml),
            Err(ConfigError::Yaml(_))
        ));
    }

    #[test]
    fn rejects_non_positive_steps() {
        let yaml = REFERENCE.replace("step: 7.0", "step: 0.0");
        assert!(matches!(
            RunConfig::from_str(&yaml),
            Err(ConfigError::Grid(_))
        ));
        let yaml = REFERENCE.replace("step: 7.0", "step: -1.0");
        assert!(matches!(
            RunConfig::from_str(&yaml),
            Err(ConfigError::Grid(_))
        ));
    }

    #[test]
    fn rejects_start_after_end_when_bodies_are_listed() {
        let yaml = REFERENCE
            .replace("start: 2444239.5", "start: 2458849.5")
            .replace("end: 2458849.5", "end: 2444239.5");
        assert!(matches!(
            RunConfig::from_str(&yaml),
            Err(ConfigError::StartAfterEnd { .. })
        ));
    }

    #[test]
    fn start_after_end_is_fine_with_no_bodies() {
        let yaml = REFERENCE
            .replace("start: 2444239.5", "start: 2458849.5")
            .replace("end: 2458849.5", "end: 2444239.5")
            .replace(
                "bodies: [mercury, venus, sun, mars, jupiter, saturn, uranus, neptune]",
                "bodies: []",
            );
        let config = RunConfig::from_str(&yaml).unwrap();
        assert!(config.grid().unwrap().is_empty());
    }

    #[test]
    fn rejects_out_of_range_latitude() {
        let yaml = REFERENCE.replace("latitude_deg: 61.4945763", "latitude_deg: 91.0");
        assert!(matches!(
            RunConfig::from_str(&yaml),
            Err(ConfigError::LatitudeOutOfRange(_))
        ));
    }

    #[test]
    fn rejects_unsupported_ephemeris_selectors() {
        let yaml = format!("{REFERENCE}ephemeris: horizons\n");
        assert!(matches!(
            RunConfig::from_str(&yaml),
            Err(ConfigError::UnsupportedEphemeris(_))
        ));
    }

    #[test]
    fn accepts_spk_selectors() {
        let yaml = format!("{REFERENCE}ephemeris: spk:/data/de440s.bsp\n");
        let config = RunConfig::from_str(&yaml).unwrap();
        assert_eq!(
            config.selector().unwrap(),
            EphemerisSelector::Spk(PathBuf::from("/data/de440s.bsp"))
        );
    }

    #[test]
    fn humantime_steps_convert_to_fractional_days() {
        let yaml = REFERENCE.replace("step: 7.0", "step: 12h");
        let config = RunConfig::from_str(&yaml).unwrap();
        assert!((config.step.to_days().unwrap() - 0.5).abs() < 1e-12);
    }
}
