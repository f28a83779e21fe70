use anise::prelude::Frame;
use serde::{Deserialize, Serialize};

/// Solar-system bodies the generator knows how to sample.
///
/// The set is fixed; which of them a run actually samples comes from the
/// configuration's body list.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum_macros::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Body {
    Mercury,
    Venus,
    Sun,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
}

impl Body {
    /// NAIF identifier queried from the ephemeris kernels.
    ///
    /// Planet centers where DE440s carries them; planetary barycenters for
    /// Mars and the outer planets (the barycenter is what the kernels
    /// provide, and what the reference data queried).
    pub fn naif_id(&self) -> i32 {
        match self {
            Body::Mercury => 199,
            Body::Venus => 299,
            Body::Sun => 10,
            Body::Mars => 4,
            Body::Jupiter => 5,
            Body::Saturn => 6,
            Body::Uranus => 7,
            Body::Neptune => 8,
        }
    }

    pub fn frame(&self) -> Frame {
        Frame::from_ephem_j2000(self.naif_id())
    }
}
