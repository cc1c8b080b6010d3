use {
    crate::utils::{pct01, stable_rand_0_1},
    std::str::FromStr,
};

/// How often the feeds are regenerated. Longer cadences swing harder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cadence {
    #[default]
    Daily,
    TPlus3,
    Weekly,
}

impl Cadence {
    /// Name mixed into every stable-random key.
    pub const fn key(&self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::TPlus3 => "tplus3",
            Self::Weekly => "weekly",
        }
    }

    /// Label written into the feed documents.
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::TPlus3 => "t+3",
            Self::Weekly => "weekly",
        }
    }

    /// Lenient parse used by the CLI: unknown names fall back to daily.
    pub fn parse_or_daily(raw: &str) -> Self {
        raw.parse().unwrap_or_else(|_| {
            log::warn!("Unknown cadence {:?}, falling back to daily", raw);
            Self::Daily
        })
    }

    /// Nudge `base` by a key-stable factor whose spread depends on the cadence.
    pub fn boost(&self, keybase: &str, base: f64) -> f64 {
        let r = stable_rand_0_1(&format!("{}|{}", keybase, self.key()));
        let factor = match self {
            Self::Weekly => 0.85 + 0.40 * r,
            Self::TPlus3 => 0.90 + 0.20 * r,
            Self::Daily => 0.95 + 0.10 * r,
        };
        pct01(base * factor)
    }

    /// Stage-promotion threshold for one run. Daily runs never promote.
    pub const fn promotion_above(&self) -> Option<f64> {
        match self {
            Self::Daily => None,
            Self::TPlus3 => Some(0.70),
            Self::Weekly => Some(0.55),
        }
    }
}

impl std::fmt::Display for Cadence {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct UnknownCadence(pub String);

impl std::fmt::Display for UnknownCadence {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "unknown cadence '{}' (expected daily, tplus3 or weekly)", self.0)
    }
}

impl std::error::Error for UnknownCadence {}

impl FromStr for Cadence {
    type Err = UnknownCadence;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "daily" => Ok(Self::Daily),
            "tplus3" | "t+3" => Ok(Self::TPlus3),
            "weekly" => Ok(Self::Weekly),
            other => Err(UnknownCadence(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_names() {
        assert_eq!("daily".parse::<Cadence>(), Ok(Cadence::Daily));
        assert_eq!(" Weekly ".parse::<Cadence>(), Ok(Cadence::Weekly));
        assert_eq!("t+3".parse::<Cadence>(), Ok(Cadence::TPlus3));
        assert_eq!("TPLUS3".parse::<Cadence>(), Ok(Cadence::TPlus3));
        assert!("hourly".parse::<Cadence>().is_err());
        assert_eq!(Cadence::parse_or_daily("hourly"), Cadence::Daily);
    }

    #[test]
    fn tags() {
        assert_eq!(Cadence::TPlus3.tag(), "t+3");
        assert_eq!(Cadence::TPlus3.key(), "tplus3");
        assert_eq!(Cadence::Weekly.to_string(), "weekly");
    }

    #[test]
    fn boost_stays_within_cadence_band() {
        for cadence in [Cadence::Daily, Cadence::TPlus3, Cadence::Weekly] {
            for key in ["a", "b", "Karak|1000x", "L1_supply"] {
                let v = cadence.boost(key, 0.5);
                let (lo, hi) = match cadence {
                    Cadence::Daily => (0.475, 0.525),
                    Cadence::TPlus3 => (0.45, 0.55),
                    Cadence::Weekly => (0.425, 0.625),
                };
                assert!(v >= lo && v < hi, "{cadence} {key}: {v}");
            }
        }
    }

    #[test]
    fn boost_clamps_to_unit_interval() {
        assert!(Cadence::Weekly.boost("x", 1.0) <= 1.0);
        assert_eq!(Cadence::Daily.boost("x", 0.0), 0.0);
    }
}
