use hifitime::ut1::Ut1Provider;
use hifitime::Epoch;
use thiserror::Error;

use crate::config::{ConfigError, RunConfig};
use crate::ephemeris::{AlmanacSource, Body, EphemerisError, EphemerisSource};
use crate::grid::TimeGrid;
use crate::projector::Projector;
use crate::series::{BodySeries, Dataset};

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("failed to load earth orientation data: {0}")]
    EarthOrientation(String),
    #[error(transparent)]
    Ephemeris(#[from] EphemerisError),
}

/// The batch run: bodies one at a time, instants in increasing order, each
/// query projected and accumulated. The first unrecoverable error aborts
/// the whole run.
pub struct Pipeline {
    grid: TimeGrid,
    bodies: Vec<Body>,
    include_itrs: bool,
    source: Box<dyn EphemerisSource>,
    projector: Projector,
}

impl Pipeline {
    /// Build the production pipeline: the configured almanac pinned for the
    /// whole run, and earth orientation data from the configured EOP file
    /// (or downloaded from JPL when none is given).
    pub fn from_config(config: &RunConfig) -> Result<Self, PipelineError> {
        let source = AlmanacSource::load(&config.selector()?)?;
        let projector = Projector::new(config.site, ut1_provider(config)?);
        Self::with_source(config, Box::new(source), projector)
    }

    /// Seam for tests: any `EphemerisSource` and a prebuilt projector.
    pub fn with_source(
        config: &RunConfig,
        source: Box<dyn EphemerisSource>,
        projector: Projector,
    ) -> Result<Self, PipelineError> {
        Ok(Self {
            grid: config.grid()?,
            bodies: config.bodies.clone(),
            include_itrs: config.include_itrs,
            source,
            projector,
        })
    }

    pub fn run(&self) -> Result<Dataset, PipelineError> {
        let mut dataset = Dataset::new();
        for &body in &self.bodies {
            log::info!(
                "computing positions for {body} ({} samples)",
                self.grid.len()
            );
            let mut series = BodySeries::with_capacity(self.grid.len(), self.include_itrs);
            for jd in self.grid.iter() {
                let epoch = Epoch::from_jde_utc(jd);
                let raw = self.source.query(body, epoch)?;
                series.push(&self.projector.project(&raw));
            }
            dataset.insert(body.to_string(), series);
        }
        Ok(dataset)
    }
}

fn ut1_provider(config: &RunConfig) -> Result<Ut1Provider, PipelineError> {
    match &config.eop_file {
        Some(path) => {
            log::debug!("loading earth orientation data from {}", path.display());
            Ut1Provider::from_eop_file(&path.to_string_lossy())
                .map_err(|e| PipelineError::EarthOrientation(e.to_string()))
        }
        None => {
            log::debug!("downloading earth orientation data from JPL");
            Ut1Provider::download_from_jpl("latest_eop2.long")
                .map_err(|e| PipelineError::EarthOrientation(e.to_string()))
        }
    }
}
