use clap::Parser; // trait import enables TitanCli::parse()
use colored::Colorize;

use titan_numerics::cli::{Command, TitanCli};
use titan_numerics::commands::{complex, linalg, spectral, Output};
use titan_numerics::config::{resolve_config_path, TitanConfig};
use titan_numerics::core::debug;

fn run(args: TitanCli) -> anyhow::Result<()> {
    if args.debug_titan {
        debug::enable();
    }

    let cfg_path = resolve_config_path(&args.config);
    let cfg = TitanConfig::load(cfg_path.as_deref())?;
    titan_numerics::debug_log!("config: {:?}", cfg);
    let out = Output::new(args.json, cfg.precision, cfg.comparison_epsilon);

    match args.cmd {
        Command::Fft { samples } => spectral::fft(&samples, &out),
        Command::Det { matrix } => linalg::determinant(&matrix, &out),
        Command::Inverse { matrix, checked } => linalg::inverse(&matrix, checked, &cfg, &out),
        Command::Lup { matrix } => linalg::lup(&matrix, &out),
        Command::Rref { matrix, epsilon } => linalg::rref(&matrix, epsilon, &cfg, &out),
        Command::Norm {
            matrix,
            vector,
            order,
        } => linalg::norm(matrix.as_deref(), vector.as_deref(), order.as_deref(), &out),
        Command::Zigzag { n, corner, axis } => linalg::zigzag(n, &corner, &axis, &out),
        Command::Roots { re, im, n } => complex::roots(re, im, n, &out),
    }
}

fn main() {
    if let Err(e) = run(TitanCli::parse()) {
        eprintln!("{} {:#}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}
