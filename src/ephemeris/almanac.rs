use anise::almanac::Almanac;
use anise::astro::Aberration;
use anise::constants::frames::{EARTH_J2000, IAU_EARTH_FRAME, SSB_J2000};
use anise::prelude::Frame;
use hifitime::Epoch;

use crate::ephemeris::{Body, EphemerisError, EphemerisSelector, EphemerisSource, RawPosition};

/// Ephemeris adapter over an ANISE almanac.
///
/// The kernel set is fixed at construction and never changes during a run,
/// so every query across all bodies samples the same underlying model.
pub struct AlmanacSource {
    almanac: Almanac,
}

impl AlmanacSource {
    pub fn load(selector: &EphemerisSelector) -> Result<Self, EphemerisError> {
        log::debug!("loading ephemeris kernels ({selector})");
        let almanac = Almanac::until_2035().map_err(|e| EphemerisError::Load(e.to_string()))?;
        let almanac = match selector {
            EphemerisSelector::Builtin => almanac,
            EphemerisSelector::Spk(path) => almanac
                .load(&path.to_string_lossy())
                .map_err(|e| EphemerisError::Load(e.to_string()))?,
        };
        Ok(Self { almanac })
    }

    /// Light-time corrected position of `body` in `observer_frame`, km.
    fn position_km(
        &self,
        body: Body,
        observer_frame: Frame,
        epoch: Epoch,
    ) -> Result<[f64; 3], EphemerisError> {
        let state = self
            .almanac
            .transform(body.frame(), observer_frame, epoch, Aberration::LT)
            .map_err(|e| EphemerisError::Query {
                body,
                epoch,
                message: e.to_string(),
            })?;
        Ok([state.radius_km.x, state.radius_km.y, state.radius_km.z])
    }
}

impl EphemerisSource for AlmanacSource {
    fn query(&self, body: Body, epoch: Epoch) -> Result<RawPosition, EphemerisError> {
        Ok(RawPosition {
            epoch,
            barycentric_km: self.position_km(body, SSB_J2000, epoch)?,
            geocentric_km: self.position_km(body, EARTH_J2000, epoch)?,
            body_fixed_km: self.position_km(body, IAU_EARTH_FRAME, epoch)?,
        })
    }
}
