//! cvd - colour-blindness simulation, correction, and LUT generation.

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use cvd_ops::{dispatch, DispatchOptions, RenderPath};
use cvd_sim::{Deficiency, Operation, Selection};

#[derive(Parser)]
#[command(name = "cvd")]
#[command(version, about = "Colour-blindness simulation, correction, and LUT generation")]
#[command(arg_required_else_help = true)]
#[command(long_about = "
Models colour-vision deficiency: simulates how dichromats perceive colours,
daltonizes/corrects images for them, and exports the resulting colour
mapping as a cube LUT (CSV plus packed 12-bit binary).

Examples:
  cvd -s                              # simulation LUTs for all three subtypes
  cvd -f photo.png -d protanope -sxy  # simulate, daltonize, correct photo.png
  cvd -f photo.png -s --no-lut        # transform pixels directly, skip LUT lookup
  cvd -s -m 0.6                       # partial (60%) deficiency
")]
struct Cli {
    /// Input image to process (PNG). Without it, only LUTs are emitted.
    #[arg(short = 'f', long)]
    input: Option<PathBuf>,

    /// Deficiency subtype to target
    #[arg(short, long, value_enum, default_value = "all")]
    deficiency: DeficiencyArg,

    /// Strength of the deficiency to model, in [0, 1]
    #[arg(short = 'm', long, default_value_t = 1.0)]
    strength: f32,

    /// Cube LUT size per axis
    #[arg(long, default_value_t = cvd_lut::DEFAULT_SIZE)]
    lut_size: usize,

    /// Transform image pixels directly instead of through the baked LUT
    #[arg(long)]
    no_lut: bool,

    /// Path for the packed 12-bit binary LUT
    #[arg(long, default_value = cvd_lut::packed::DEFAULT_FILENAME)]
    packed_out: PathBuf,

    /// Directory for generated files
    #[arg(short, long, default_value = ".")]
    out_dir: PathBuf,

    /// Simulate the given type of colour-blindness
    #[arg(short = 's', long)]
    simulate: bool,

    /// Daltonize (Fidaner) for the given type of colour-blindness
    #[arg(short = 'x', long)]
    daltonize: bool,

    /// Daltonize, then simulate the result
    #[arg(short = 'X', long)]
    daltonize_simulate: bool,

    /// Correct for the given type of colour-blindness
    #[arg(short = 'y', long)]
    correct: bool,

    /// Correct, then simulate the result
    #[arg(short = 'Y', long)]
    correct_simulate: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum DeficiencyArg {
    All,
    Protanope,
    Deuteranope,
    Tritanope,
}

impl From<DeficiencyArg> for Selection {
    fn from(arg: DeficiencyArg) -> Self {
        match arg {
            DeficiencyArg::All => Selection::All,
            DeficiencyArg::Protanope => Selection::Single(Deficiency::Protanope),
            DeficiencyArg::Deuteranope => Selection::Single(Deficiency::Deuteranope),
            DeficiencyArg::Tritanope => Selection::Single(Deficiency::Tritanope),
        }
    }
}

impl Cli {
    fn operations(&self) -> Vec<Operation> {
        let flags = [
            (self.simulate, Operation::Simulate),
            (self.daltonize, Operation::Daltonize),
            (self.daltonize_simulate, Operation::DaltonizeThenSimulate),
            (self.correct, Operation::Correct),
            (self.correct_simulate, Operation::CorrectThenSimulate),
        ];
        flags
            .into_iter()
            .filter_map(|(enabled, op)| enabled.then_some(op))
            .collect()
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let operations = cli.operations();
    if operations.is_empty() {
        bail!("no operation requested (try --simulate, --daltonize, or --correct)");
    }

    // Decode before any dispatch: an unreadable input is fatal up front.
    let (image, base_name) = match &cli.input {
        Some(path) => {
            let image = cvd_io::png::read(path)
                .with_context(|| format!("couldn't read {}", path.display()))?;
            let base = path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("unknown")
                .to_string();
            (Some(image), base)
        }
        None => (None, String::from("unknown")),
    };

    let opts = DispatchOptions {
        strength: cli.strength,
        lut_size: cli.lut_size,
        render_path: if cli.no_lut {
            RenderPath::Direct
        } else {
            RenderPath::Lut
        },
        out_dir: cli.out_dir.clone(),
        packed_name: cli.packed_out.clone(),
    };

    let selection: Selection = cli.deficiency.into();
    for op in operations {
        let written = dispatch(op, selection, image.as_ref(), &base_name, &opts)
            .with_context(|| format!("{} failed", op.label()))?;
        for path in written {
            println!("Saved {}", path.display());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn operations_collect_in_canonical_order() {
        let cli = Cli::parse_from(["cvd", "-s", "-x", "-Y"]);
        assert_eq!(
            cli.operations(),
            vec![
                Operation::Simulate,
                Operation::Daltonize,
                Operation::CorrectThenSimulate
            ]
        );
    }

    #[test]
    fn combined_short_flags_parse() {
        let cli = Cli::parse_from(["cvd", "-sxy", "-d", "protanope"]);
        assert_eq!(cli.operations().len(), 3);
        assert!(matches!(
            Selection::from(cli.deficiency),
            Selection::Single(Deficiency::Protanope)
        ));
    }
}
