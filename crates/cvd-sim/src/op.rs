//! Processing operations and transform composition.

use cvd_core::Color;

use crate::simulate::{correct, daltonize, simulate};
use crate::Deficiency;

/// Which colour-blind processing operation to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Render how a dichromat perceives the input.
    Simulate,
    /// Redistribute invisible error into visible channels (Fidaner).
    Daltonize,
    /// Correct using the blue-weighted redistribution.
    Correct,
    /// Daltonize, then simulate the dichromat's view of the result.
    DaltonizeThenSimulate,
    /// Correct, then simulate the dichromat's view of the result.
    CorrectThenSimulate,
}

impl Operation {
    /// Lowercase label used in output file names.
    pub fn label(self) -> &'static str {
        match self {
            Operation::Simulate => "simulate",
            Operation::Daltonize => "daltonize",
            Operation::Correct => "correct",
            Operation::DaltonizeThenSimulate => "simulate_daltonized",
            Operation::CorrectThenSimulate => "simulate_corrected",
        }
    }
}

/// Builds the per-colour transform for an operation.
///
/// The two composed operations clamp the intermediate result into [0, 1]
/// per channel before re-simulating, so out-of-gamut correction output
/// cannot feed back into the simulation stage.
///
/// The returned closure is the single shape every downstream consumer
/// (LUT baking, bulk pixel transform) works with.
pub fn transform_for(
    op: Operation,
    deficiency: Deficiency,
    strength: f32,
) -> impl Fn(Color) -> Color + Copy + Send + Sync {
    move |c| match op {
        Operation::Simulate => simulate(c, deficiency, strength),
        Operation::Daltonize => daltonize(c, deficiency, strength),
        Operation::Correct => correct(c, deficiency, strength),
        Operation::DaltonizeThenSimulate => {
            simulate(daltonize(c, deficiency, strength).clamp_unit(), deficiency, strength)
        }
        Operation::CorrectThenSimulate => {
            simulate(correct(c, deficiency, strength).clamp_unit(), deficiency, strength)
        }
    }
}
