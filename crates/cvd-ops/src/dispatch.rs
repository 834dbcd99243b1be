//! Operation dispatch: fan-out, output naming, and routing.
//!
//! A dispatch takes one [`Operation`] and a deficiency [`Selection`] and
//! turns them into concrete runs, one per deficiency subtype. Each run
//! bakes a fresh cube LUT for the composed transform and always exports it
//! (CSV plus packed binary). If an input image was supplied, the run also
//! renders and writes the transformed image via the configured
//! [`RenderPath`]; without one, the baked cube itself is written as a PNG
//! strip so the mapping can be inspected visually.
//!
//! Output naming is deterministic:
//!
//! - image: `<base>_<deficiency>_<operation>.png`
//! - LUT strip (no input image): `<base>_<deficiency>_<operation>_lut.png`
//! - CSV:   `<base>_<deficiency>_lut.csv`
//! - binary: a single configurable path (default
//!   [`packed::DEFAULT_FILENAME`]), overwritten by every run.

use std::path::{Path, PathBuf};

use cvd_core::ImageBuf;
use cvd_lut::{bake, csv, packed, DEFAULT_SIZE};
use cvd_sim::{transform_for, Deficiency, Operation, Selection};
use tracing::{debug, info};

use crate::transform::{produce_image, RenderPath};
use crate::OpsResult;

/// Settings shared by every run of a dispatch.
#[derive(Debug, Clone)]
pub struct DispatchOptions {
    /// Deficiency strength in [0, 1].
    pub strength: f32,
    /// Cube LUT size per axis.
    pub lut_size: usize,
    /// How output images are produced.
    pub render_path: RenderPath,
    /// Directory all outputs are written into.
    pub out_dir: PathBuf,
    /// Packed binary LUT path, resolved against `out_dir` when relative.
    pub packed_name: PathBuf,
}

impl Default for DispatchOptions {
    fn default() -> Self {
        Self {
            strength: 1.0,
            lut_size: DEFAULT_SIZE,
            render_path: RenderPath::Lut,
            out_dir: PathBuf::from("."),
            packed_name: PathBuf::from(packed::DEFAULT_FILENAME),
        }
    }
}

/// Runs one operation for every selected deficiency subtype.
///
/// `Selection::All` expands to Protanope, Deuteranope, Tritanope in that
/// order; there is no combined all-in-one LUT. Returns the written file
/// paths in write order.
pub fn dispatch(
    op: Operation,
    selection: Selection,
    image: Option<&ImageBuf>,
    base_name: &str,
    opts: &DispatchOptions,
) -> OpsResult<Vec<PathBuf>> {
    let mut written = Vec::new();
    for deficiency in selection.expand() {
        run_one(op, deficiency, image, base_name, opts, &mut written)?;
    }
    Ok(written)
}

fn run_one(
    op: Operation,
    deficiency: Deficiency,
    image: Option<&ImageBuf>,
    base_name: &str,
    opts: &DispatchOptions,
    written: &mut Vec<PathBuf>,
) -> OpsResult<()> {
    let xform = transform_for(op, deficiency, opts.strength);

    let lut = bake(opts.lut_size, xform)?;
    debug!(
        deficiency = deficiency.label(),
        operation = op.label(),
        size = opts.lut_size,
        "baked cube LUT"
    );

    if let Some(image) = image {
        let out = produce_image(opts.render_path, xform, &lut, image)?;
        let path = opts.out_dir.join(format!(
            "{}_{}_{}.png",
            base_name,
            deficiency.label(),
            op.label()
        ));
        cvd_io::png::write(&path, &out)?;
        info!(path = %path.display(), "wrote image");
        written.push(path);
    } else {
        // Without an input image the cube itself is the visual output:
        // one r-slice per row, columns g * size + b.
        let n = opts.lut_size;
        let strip = ImageBuf::from_pixels((n * n) as u32, n as u32, lut.data().to_vec())?;
        let path = opts.out_dir.join(format!(
            "{}_{}_{}_lut.png",
            base_name,
            deficiency.label(),
            op.label()
        ));
        cvd_io::png::write(&path, &strip)?;
        info!(path = %path.display(), "wrote LUT strip");
        written.push(path);
    }

    let csv_path = opts
        .out_dir
        .join(format!("{}_{}_lut.csv", base_name, deficiency.label()));
    csv::write_csv(&csv_path, &lut)?;
    info!(path = %csv_path.display(), "wrote CSV LUT");
    written.push(csv_path);

    let packed_path = resolve_packed_path(&opts.out_dir, &opts.packed_name);
    packed::write_packed(&packed_path, &lut)?;
    info!(path = %packed_path.display(), "wrote packed LUT");
    written.push(packed_path);

    Ok(())
}

fn resolve_packed_path(out_dir: &Path, packed_name: &Path) -> PathBuf {
    // PathBuf::join keeps an absolute override intact.
    out_dir.join(packed_name)
}
