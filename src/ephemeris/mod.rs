mod almanac;
mod body;

pub use almanac::AlmanacSource;
pub use body::Body;

use std::fmt;
use std::path::PathBuf;

use hifitime::Epoch;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EphemerisError {
    #[error("failed to load ephemeris kernels: {0}")]
    Load(String),
    #[error("ephemeris query failed for {body} at {epoch}: {message}")]
    Query {
        body: Body,
        epoch: Epoch,
        message: String,
    },
}

/// One queried position: the instant plus the same physical event expressed
/// about three origins/axes. Consumed immediately by the projector.
#[derive(Debug, Clone, Copy)]
pub struct RawPosition {
    pub epoch: Epoch,
    /// ICRF axes, solar-system barycenter origin, km.
    pub barycentric_km: [f64; 3],
    /// ICRF axes, geocenter origin, km.
    pub geocentric_km: [f64; 3],
    /// Earth body-fixed (rotating) frame, km.
    pub body_fixed_km: [f64; 3],
}

/// External ephemeris model, pinned once per run.
///
/// Implementations must be deterministic for a fixed kernel set: the same
/// (body, epoch) query always returns the same position.
pub trait EphemerisSource {
    fn query(&self, body: Body, epoch: Epoch) -> Result<RawPosition, EphemerisError>;
}

/// Which kernel set backs the run: the embedded DE440s, or a user SPK file
/// layered on top of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EphemerisSelector {
    Builtin,
    Spk(PathBuf),
}

impl EphemerisSelector {
    /// Parse a selector string: `builtin`, or `spk:<path>`.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if s == "builtin" {
            return Some(EphemerisSelector::Builtin);
        }
        s.strip_prefix("spk:")
            .filter(|path| !path.is_empty())
            .map(|path| EphemerisSelector::Spk(PathBuf::from(path)))
    }
}

impl fmt::Display for EphemerisSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EphemerisSelector::Builtin => write!(f, "builtin"),
            EphemerisSelector::Spk(path) => write!(f, "spk:{}", path.display()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_builtin_selector() {
        assert_eq!(
            EphemerisSelector::parse("builtin"),
            Some(EphemerisSelector::Builtin)
        );
    }

    #[test]
    fn parses_spk_selector() {
        assert_eq!(
            EphemerisSelector::parse("spk:/data/de440s.bsp"),
            Some(EphemerisSelector::Spk(PathBuf::from("/data/de440s.bsp")))
        );
    }

    #[test]
    fn rejects_unknown_selectors() {
        assert_eq!(EphemerisSelector::parse("horizons"), None);
        assert_eq!(EphemerisSelector::parse("spk:"), None);
        assert_eq!(EphemerisSelector::parse(""), None);
    }
}
