mod report;

use beamflex::{analyze, BeamConfig};
use report::render_summary;
use std::error::Error;
use std::fs;

fn main() -> Result<(), Box<dyn Error>> {
    // Take the reference scenario unless a JSON configuration file was
    // supplied on the command line; the file may override any subset of the
    // fields.
    let config: BeamConfig = match std::env::args().nth(1) {
        Some(path) => serde_json::from_str(&fs::read_to_string(path)?)?,
        None => BeamConfig::default(),
    };

    // Discretize the beam and solve for the nodal deflections. The element
    // formulation follows classical small-deflection bending theory; see
    // https://en.wikipedia.org/wiki/Euler%E2%80%93Bernoulli_beam_theory.
    let solution = analyze(&config)?;

    // Render a human-friendly report comparing the finite-element result
    // against the closed-form tip deflection, and print it for the CLI user.
    let report = render_summary(&solution);
    print!("{report}");

    Ok(())
}
