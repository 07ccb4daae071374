use std::fmt;
use std::str::FromStr;

/// Page-replacement policy a result file was produced by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Algorithm {
    Opt,
    Fifo,
    Aging,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [Algorithm::Opt, Algorithm::Fifo, Algorithm::Aging];

    /// Label as it appears in the `Algorithm:` measurement.
    pub fn label(self) -> &'static str {
        match self {
            Algorithm::Opt => "OPT",
            Algorithm::Fifo => "FIFO",
            Algorithm::Aging => "AGING",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Algorithm {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::ALL
            .into_iter()
            .find(|a| a.label() == s)
            .ok_or(())
    }
}

/// Frame buckets every trace group is seeded with before any file is read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlgoConfig {
    pub frame_buckets: Vec<u32>,
}

impl Default for AlgoConfig {
    fn default() -> Self {
        Self {
            frame_buckets: vec![8, 16, 32, 64],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_parse_exactly() {
        assert_eq!("OPT".parse::<Algorithm>(), Ok(Algorithm::Opt));
        assert_eq!("FIFO".parse::<Algorithm>(), Ok(Algorithm::Fifo));
        assert_eq!("AGING".parse::<Algorithm>(), Ok(Algorithm::Aging));
        assert!("opt".parse::<Algorithm>().is_err());
        assert!("LRU".parse::<Algorithm>().is_err());
    }

    #[test]
    fn default_buckets() {
        assert_eq!(AlgoConfig::default().frame_buckets, vec![8, 16, 32, 64]);
    }
}
