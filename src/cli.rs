use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "titan",
    about = "Titan numerics: complex algebra, dense linear algebra and the FFT",
    version,
    propagate_version = true,
    disable_help_subcommand = true
)]
pub struct TitanCli {
    /// Global: enable Titan library debug output (same as TITAN_DEBUG=1)
    #[arg(long = "debug-titan", action = ArgAction::SetTrue, global = true)]
    pub debug_titan: bool,

    /// Global: path to config (TOML); default: ~/.titan/numerics.toml
    #[arg(long = "config", value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Global: print results as JSON
    #[arg(long = "json", action = ArgAction::SetTrue, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Spectrum of a real sequence whose length is a power of two
    ///
    /// Examples:
    ///   titan fft 1 1 1 1 0 0 0 0
    Fft {
        #[arg(value_name = "SAMPLES", required = true, allow_negative_numbers = true)]
        samples: Vec<f64>,
    },

    /// Determinant of a square matrix
    ///
    /// Examples:
    ///   titan det --matrix '[[4,6],[3,8]]'
    Det {
        /// Matrix as JSON rows
        #[arg(long = "matrix", value_name = "JSON")]
        matrix: String,
    },

    /// Inverse via Gauss-Jordan elimination
    Inverse {
        #[arg(long = "matrix", value_name = "JSON")]
        matrix: String,
        /// Fail on a singular matrix instead of printing a degenerate result
        #[arg(long = "checked", action = ArgAction::SetTrue)]
        checked: bool,
    },

    /// LU decomposition with partial pivoting (prints L, U and P)
    Lup {
        #[arg(long = "matrix", value_name = "JSON")]
        matrix: String,
    },

    /// Reduced row-echelon form
    Rref {
        #[arg(long = "matrix", value_name = "JSON")]
        matrix: String,
        /// Pivot threshold (overrides config `elimination_epsilon`)
        #[arg(long = "epsilon", value_name = "EPS")]
        epsilon: Option<f64>,
    },

    /// Vector or matrix norm
    ///
    /// Examples:
    ///   titan norm --vector '[3,4]' --order 2
    ///   titan norm --matrix '[[1,2],[3,4]]' --order inf
    Norm {
        #[arg(long = "matrix", value_name = "JSON", conflicts_with = "vector", required_unless_present = "vector")]
        matrix: Option<String>,
        #[arg(long = "vector", value_name = "JSON")]
        vector: Option<String>,
        /// A real p, `inf`, `-inf`, or `fro` (matrices only)
        #[arg(long = "order", value_name = "P", allow_hyphen_values = true)]
        order: Option<String>,
    },

    /// n×n zig-zag matrix
    Zigzag {
        #[arg(value_name = "N")]
        n: usize,
        /// Starting corner: TL, TR, BL or BR
        #[arg(long = "corner", default_value = "BR")]
        corner: String,
        /// First step: H or V
        #[arg(long = "axis", default_value = "H")]
        axis: String,
    },

    /// Principal n-th roots of a complex number
    Roots {
        #[arg(value_name = "RE", allow_negative_numbers = true)]
        re: f64,
        #[arg(value_name = "IM", allow_negative_numbers = true)]
        im: f64,
        #[arg(value_name = "N")]
        n: usize,
    },
}
