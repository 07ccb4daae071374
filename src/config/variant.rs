use clap::ValueEnum;
use std::fmt;

/// Which aggregation to run. Input directory and output file are fixed per variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Variant {
    /// One row per file: trace, refresh rate, then every measured value.
    Aging,
    /// One row per file: trace, then every measured value.
    Fifo,
    /// One row per (trace, frames) joining the OPT, FIFO and AGING runs.
    Algo,
}

impl Variant {
    pub fn input_dir(self) -> &'static str {
        match self {
            Variant::Aging => "./rate",
            Variant::Fifo => "./fifo",
            Variant::Algo => "./algo",
        }
    }

    pub fn output_file(self) -> &'static str {
        match self {
            Variant::Aging => "data_aging.csv",
            Variant::Fifo => "data_fifo.csv",
            Variant::Algo => "data.csv",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Variant::Aging => "aging",
            Variant::Fifo => "fifo",
            Variant::Algo => "algo",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_paths_per_variant() {
        assert_eq!(Variant::Aging.input_dir(), "./rate");
        assert_eq!(Variant::Aging.output_file(), "data_aging.csv");
        assert_eq!(Variant::Fifo.input_dir(), "./fifo");
        assert_eq!(Variant::Fifo.output_file(), "data_fifo.csv");
        assert_eq!(Variant::Algo.input_dir(), "./algo");
        assert_eq!(Variant::Algo.output_file(), "data.csv");
    }
}
