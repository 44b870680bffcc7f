use crate::geom::point::Point;
use std::fmt::Write as _;
use std::fs::File;
use std::io::Write;

/// Writes one line per successfully routed net: `<name> (l, x, y) (l,
/// x, y) ...`. Unrouted nets (empty path) are omitted, matching the
/// reference behavior named in the output file format.
pub fn write_results(filename: &str, routes: &[(String, Vec<Point>)]) -> std::io::Result<()> {
    let mut file = File::create(filename)?;
    for (name, path) in routes {
        if path.is_empty() {
            continue;
        }
        let mut line = name.clone();
        for p in path {
            let _ = write!(line, " ({}, {}, {})", p.layer, p.x, p.y);
        }
        writeln!(file, "{}", line)?;
    }
    Ok(())
}
