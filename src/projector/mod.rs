pub mod frames;
pub mod horizontal;
pub mod timescale;

use hifitime::ut1::Ut1Provider;

use crate::ephemeris::RawPosition;
use crate::site::ObserverSite;

/// All derived quantities for one (body, instant) sample.
///
/// Every field is computed from the same `RawPosition`, so they all refer to
/// the identical physical event. Angles are degrees, times are Julian Dates.
#[derive(Debug, Clone, Copy)]
pub struct ProjectedSample {
    pub utc: f64,
    pub ut1: f64,
    pub tdb: f64,
    pub icrs_ra: f64,
    pub icrs_dec: f64,
    pub gcrs_ra: f64,
    pub gcrs_dec: f64,
    pub enu_az: f64,
    pub enu_alt: f64,
    /// Earth-fixed Cartesian position, kept as an optional diagnostic.
    pub itrs_km: [f64; 3],
}

/// Converts one queried position into the full set of output quantities.
pub struct Projector {
    site: ObserverSite,
    ut1: Ut1Provider,
}

impl Projector {
    pub fn new(site: ObserverSite, ut1: Ut1Provider) -> Self {
        Self { site, ut1 }
    }

    pub fn project(&self, raw: &RawPosition) -> ProjectedSample {
        let (icrs_ra, icrs_dec) = frames::radec_deg(raw.barycentric_km);
        let (gcrs_ra, gcrs_dec) = frames::radec_deg(raw.geocentric_km);
        let (enu_az, enu_alt) = horizontal::azimuth_altitude(raw.body_fixed_km, &self.site);

        ProjectedSample {
            utc: timescale::utc_jd(raw.epoch),
            ut1: timescale::ut1_jd(raw.epoch, &self.ut1),
            tdb: timescale::tdb_jd(raw.epoch),
            icrs_ra,
            icrs_dec,
            gcrs_ra,
            gcrs_dec,
            enu_az,
            enu_alt,
            itrs_km: raw.body_fixed_km,
        }
    }
}
