/// Direction angles of a Cartesian position, in degrees.
///
/// Right ascension is normalized to [0, 360); declination is in [-90, 90].
pub fn radec_deg(position_km: [f64; 3]) -> (f64, f64) {
    let [x, y, z] = position_km;
    let r = (x * x + y * y + z * z).sqrt();
    let ra = y.atan2(x).to_degrees().rem_euclid(360.0);
    let dec = if r > 0.0 {
        (z / r).clamp(-1.0, 1.0).asin().to_degrees()
    } else {
        0.0
    };
    (ra, dec)
}
