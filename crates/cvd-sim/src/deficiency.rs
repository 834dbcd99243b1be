//! Dichromat deficiency types and the run selector.

use std::fmt;

/// A dichromat subtype, named by the missing cone class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Deficiency {
    /// Long-wavelength (red) cone absent.
    Protanope,
    /// Medium-wavelength (green) cone absent.
    Deuteranope,
    /// Short-wavelength (blue) cone absent.
    Tritanope,
}

impl Deficiency {
    /// All subtypes, in the fixed fan-out order used for "all" runs.
    pub const ALL: [Deficiency; 3] = [
        Deficiency::Protanope,
        Deficiency::Deuteranope,
        Deficiency::Tritanope,
    ];

    /// Lowercase label used in output file names.
    pub fn label(self) -> &'static str {
        match self {
            Deficiency::Protanope => "protanope",
            Deficiency::Deuteranope => "deuteranope",
            Deficiency::Tritanope => "tritanope",
        }
    }
}

impl fmt::Display for Deficiency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Which deficiencies a run targets.
///
/// "All" is a property of the run, not of a transform: the dispatcher
/// expands it into the three concrete subtypes, and transform builders only
/// ever receive a [`Deficiency`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// Run for each subtype in [`Deficiency::ALL`] order.
    All,
    /// Run for a single subtype.
    Single(Deficiency),
}

impl Selection {
    /// Expands the selection into concrete subtypes, in dispatch order.
    pub fn expand(self) -> Vec<Deficiency> {
        match self {
            Selection::All => Deficiency::ALL.to_vec(),
            Selection::Single(d) => vec![d],
        }
    }
}
