use crate::site::ObserverSite;

/// Topocentric azimuth/altitude of an Earth-fixed position, in degrees.
///
/// Azimuth is measured from north through east and normalized to [0, 360);
/// altitude is the geometric elevation above the horizon. No refraction
/// correction is applied anywhere in this path.
pub fn azimuth_altitude(body_fixed_km: [f64; 3], site: &ObserverSite) -> (f64, f64) {
    let sta = site.position_ecef_km();
    let dr = [
        body_fixed_km[0] - sta[0],
        body_fixed_km[1] - sta[1],
        body_fixed_km[2] - sta[2],
    ];
    let range_km = (dr[0] * dr[0] + dr[1] * dr[1] + dr[2] * dr[2]).sqrt();

    let (east, north, up) = ecef_to_enu(dr, site.lat_rad(), site.lon_rad());
    let azimuth = east.atan2(north).to_degrees().rem_euclid(360.0);
    let altitude = if range_km > 0.0 {
        (up / range_km).clamp(-1.0, 1.0).asin().to_degrees()
    } else {
        0.0
    };

    (azimuth, altitude)
}

fn ecef_to_enu(dr: [f64; 3], lat_rad: f64, lon_rad: f64) -> (f64, f64, f64) {
    let sin_lat = lat_rad.sin();
    let cos_lat = lat_rad.cos();
    let sin_lon = lon_rad.sin();
    let cos_lon = lon_rad.cos();

    let east = -sin_lon * dr[0] + cos_lon * dr[1];
    let north = -sin_lat * cos_lon * dr[0] - sin_lat * sin_lon * dr[1] + cos_lat * dr[2];
    let up = cos_lat * cos_lon * dr[0] + cos_lat * sin_lon * dr[1] + sin_lat * dr[2];
    (east, north, up)
}
