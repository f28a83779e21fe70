use serde::Deserialize;

/// Fixed geodetic observing site shared by every sample in a run.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ObserverSite {
    pub latitude_deg: f64,
    pub longitude_deg: f64,
    #[serde(default)]
    pub height_m: f64,
}

impl ObserverSite {
    pub fn lat_rad(&self) -> f64 {
        self.latitude_deg.to_radians()
    }

    pub fn lon_rad(&self) -> f64 {
        self.longitude_deg.to_radians()
    }

    pub fn position_ecef_km(&self) -> [f64; 3] {
        // WGS-84 constants
        let a = 6378.137;
        let e2 = 0.00669437999014;
        let lat = self.lat_rad();
        let lon = self.lon_rad();
        let sin_lat = lat.sin();
        let cos_lat = lat.cos();
        let sin_lon = lon.sin();
        let cos_lon = lon.cos();
        let n = a / (1.0 - e2 * sin_lat * sin_lat).sqrt();
        let height_km = self.height_m / 1000.0;
        let x = (n + height_km) * cos_lat * cos_lon;
        let y = (n + height_km) * cos_lat * sin_lon;
        let z = (n * (1.0 - e2) + height_km) * sin_lat;
        [x, y, z]
    }
}
