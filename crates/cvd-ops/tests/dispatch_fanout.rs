//! Dispatcher fan-out and output routing.

use std::path::PathBuf;

use cvd_core::{ImageBuf, Rgba8};
use cvd_ops::{dispatch, DispatchOptions, RenderPath};
use cvd_sim::{Deficiency, Operation, Selection};

fn options_into(dir: &std::path::Path) -> DispatchOptions {
    DispatchOptions {
        lut_size: 8,
        out_dir: dir.to_path_buf(),
        ..DispatchOptions::default()
    }
}

fn file_names(paths: &[PathBuf]) -> Vec<String> {
    paths
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect()
}

#[test]
fn all_selection_fans_out_in_fixed_order() {
    let dir = tempfile::tempdir().expect("tempdir");
    let written = dispatch(
        Operation::Simulate,
        Selection::All,
        None,
        "unknown",
        &options_into(dir.path()),
    )
    .expect("dispatch");

    // Per subtype: LUT strip, CSV, packed binary, subtypes in P, D, T order.
    assert_eq!(
        file_names(&written),
        vec![
            "unknown_protanope_simulate_lut.png",
            "unknown_protanope_lut.csv",
            "3dlut.bin",
            "unknown_deuteranope_simulate_lut.png",
            "unknown_deuteranope_lut.csv",
            "3dlut.bin",
            "unknown_tritanope_simulate_lut.png",
            "unknown_tritanope_lut.csv",
            "3dlut.bin",
        ]
    );
    for path in &written {
        assert!(path.exists(), "{} missing", path.display());
    }
}

#[test]
fn lut_only_run_writes_cube_strip() {
    let dir = tempfile::tempdir().expect("tempdir");
    let written = dispatch(
        Operation::Correct,
        Selection::Single(Deficiency::Protanope),
        None,
        "unknown",
        &options_into(dir.path()),
    )
    .expect("dispatch");

    // The strip lays the 8^3 cube out as one r-slice per row.
    let strip = cvd_io::png::read(&written[0]).expect("read strip");
    assert_eq!((strip.width(), strip.height()), (64, 8));
    assert!(strip.pixels().iter().all(|p| p.a == 255));
}

#[test]
fn image_run_writes_image_and_lut_exports() {
    let dir = tempfile::tempdir().expect("tempdir");
    let image = ImageBuf::from_pixels(
        2,
        2,
        vec![
            Rgba8::opaque(255, 0, 0),
            Rgba8::opaque(0, 255, 0),
            Rgba8::opaque(0, 0, 255),
            Rgba8::new(128, 128, 128, 17),
        ],
    )
    .unwrap();

    let written = dispatch(
        Operation::Daltonize,
        Selection::Single(Deficiency::Deuteranope),
        Some(&image),
        "photo",
        &options_into(dir.path()),
    )
    .expect("dispatch");

    assert_eq!(
        file_names(&written),
        vec![
            "photo_deuteranope_daltonize.png",
            "photo_deuteranope_lut.csv",
            "3dlut.bin",
        ]
    );

    // The rendered image keeps dimensions and alpha.
    let out = cvd_io::png::read(&written[0]).expect("read output image");
    assert_eq!((out.width(), out.height()), (2, 2));
    assert_eq!(out.pixels()[3].a, 17);
}

#[test]
fn direct_path_also_exports_the_lut() {
    let dir = tempfile::tempdir().expect("tempdir");
    let image = ImageBuf::from_pixels(1, 1, vec![Rgba8::opaque(200, 40, 90)]).unwrap();

    let opts = DispatchOptions {
        render_path: RenderPath::Direct,
        ..options_into(dir.path())
    };
    let written = dispatch(
        Operation::Simulate,
        Selection::Single(Deficiency::Protanope),
        Some(&image),
        "swatch",
        &opts,
    )
    .expect("dispatch");

    // The no-LUT render path still bakes and exports the LUT.
    assert_eq!(
        file_names(&written),
        vec![
            "swatch_protanope_simulate.png",
            "swatch_protanope_lut.csv",
            "3dlut.bin",
        ]
    );
}

#[test]
fn operation_labels_keep_outputs_distinct() {
    let dir = tempfile::tempdir().expect("tempdir");
    let image = ImageBuf::from_pixels(1, 1, vec![Rgba8::opaque(10, 20, 30)]).unwrap();
    let opts = options_into(dir.path());

    for op in [
        Operation::Simulate,
        Operation::Daltonize,
        Operation::Correct,
        Operation::DaltonizeThenSimulate,
        Operation::CorrectThenSimulate,
    ] {
        dispatch(
            op,
            Selection::Single(Deficiency::Tritanope),
            Some(&image),
            "base",
            &opts,
        )
        .expect("dispatch");
    }

    let pngs = std::fs::read_dir(dir.path())
        .unwrap()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().extension().is_some_and(|x| x == "png"))
        .count();
    assert_eq!(pngs, 5);
}
