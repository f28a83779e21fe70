use hifitime::ut1::Ut1Provider;
use hifitime::Epoch;

/// The instant as a UTC Julian Date.
pub fn utc_jd(epoch: Epoch) -> f64 {
    epoch.to_jde_utc_days()
}

/// The instant as a UT1 Julian Date.
///
/// hifitime folds the provider's TAI-UT1 offset into the epoch, so the
/// TAI-days readout of the shifted epoch is the UT1 value.
pub fn ut1_jd(epoch: Epoch, provider: &Ut1Provider) -> f64 {
    epoch.to_ut1(provider.clone()).to_jde_tai_days()
}

/// The instant as a TDB Julian Date.
pub fn tdb_jd(epoch: Epoch) -> f64 {
    epoch.to_jde_tdb_days()
}
