use serde::Deserialize;

/// Ambient tunables that live outside the wire format. The input file's
/// header always carries the via/wrong-direction penalties (the grammar
/// makes that line mandatory), so there is no "missing value" for a
/// config-file default to fill in; penalty precedence is CLI override
/// over the header, full stop. This file is limited to things the
/// header genuinely has no opinion on, like the viz cell size. Log
/// level is controlled by `RUST_LOG`, not by this file.
#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default = "default_viz_size")]
    pub viz_size: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            viz_size: default_viz_size(),
        }
    }
}

fn default_viz_size() -> u32 {
    800
}
