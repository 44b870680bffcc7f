use rand::Rng;
use std::fs::File;
use std::io::Write;

/// Writes a random, well-formed maze-router input file: a `width x
/// height` grid, a scattering of single-cell obstructions, and
/// `num_nets` two-pin nets with randomly placed pins.
///
/// Intended for ad hoc stress-testing, in the same spirit as the
/// teacher's `generate_random_def` benchmark generator.
pub fn generate_random_input(
    filename: &str,
    width: u32,
    height: u32,
    via_penalty: u32,
    wrong_direction_penalty: u32,
    num_obstructions: usize,
    num_nets: usize,
) -> std::io::Result<()> {
    let mut file = File::create(filename)?;
    let mut rng = rand::thread_rng();

    writeln!(
        file,
        "{},{},{},{}",
        width, height, via_penalty, wrong_direction_penalty
    )?;

    log::info!(
        "Generating random input: {}x{} grid, {} obstructions, {} nets",
        width,
        height,
        num_obstructions,
        num_nets
    );

    for _ in 0..num_obstructions {
        let layer = rng.gen_range(1..=2u8);
        let x = rng.gen_range(0..width);
        let y = rng.gen_range(0..height);
        writeln!(file, "OBS ({}, {}, {})", layer, x, y)?;
    }

    for i in 0..num_nets {
        let layer = rng.gen_range(1..=2u8);
        let x1 = rng.gen_range(0..width);
        let y1 = rng.gen_range(0..height);
        let x2 = rng.gen_range(0..width);
        let y2 = rng.gen_range(0..height);
        writeln!(
            file,
            "net{} ({}, {}, {}) ({}, {}, {})",
            i + 1,
            layer,
            x1,
            y1,
            layer,
            x2,
            y2
        )?;
    }

    Ok(())
}
