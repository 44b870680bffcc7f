use crate::error::{ConfigError, ConfigResult};
use crate::geom::net::Net;
use crate::geom::point::Point;
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};

/// The parsed, validated contents of a maze-router input file.
pub struct RouterInput {
    pub width: u32,
    pub height: u32,
    pub via_penalty: u32,
    pub wrong_direction_penalty: u32,
    pub obstructions: Vec<Point>,
    pub nets: Vec<Net>,
}

/// Parses and validates a maze-router input file (see the input file
/// format in the crate's external-interfaces documentation). All
/// configuration errors (§7) are caught here, before any routing is
/// attempted.
pub fn parse(filename: &str) -> ConfigResult<RouterInput> {
    let file = File::open(filename)?;
    let reader = BufReader::new(file);
    let mut lines = reader.lines();

    let header = lines
        .next()
        .ok_or_else(|| ConfigError::Malformed {
            line_no: 1,
            text: "missing header line".to_string(),
        })?
        .map_err(ConfigError::Io)?;
    let (width, height, via_penalty, wrong_direction_penalty) = parse_header(&header, 1)?;

    let mut obstructions = Vec::new();
    let mut nets = Vec::new();
    let mut seen_names: HashSet<String> = HashSet::new();

    for (idx, line) in lines.enumerate() {
        let line_no = idx + 2;
        let line = line.map_err(ConfigError::Io)?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        if let Some(rest) = trimmed.strip_prefix("OBS") {
            let triples = parse_triples(rest, line_no)?;
            let (layer, x, y) = *triples.first().ok_or_else(|| ConfigError::Malformed {
                line_no,
                text: line.clone(),
            })?;
            let point = validate_point(layer, x, y, width, height)?;
            obstructions.push(point);
            continue;
        }

        let name = trimmed
            .split_whitespace()
            .next()
            .ok_or_else(|| ConfigError::Malformed {
                line_no,
                text: line.clone(),
            })?
            .to_string();

        if !seen_names.insert(name.clone()) {
            return Err(ConfigError::DuplicateNetName { name });
        }

        let triples = parse_triples(trimmed, line_no)?;
        if triples.len() < 2 {
            return Err(ConfigError::NetTooFewPins {
                name,
                count: triples.len(),
            });
        }

        let mut pins = Vec::with_capacity(triples.len());
        for (layer, x, y) in triples {
            pins.push(validate_point(layer, x, y, width, height)?);
        }
        nets.push(Net::new(name, pins));
    }

    Ok(RouterInput {
        width,
        height,
        via_penalty,
        wrong_direction_penalty,
        obstructions,
        nets,
    })
}

fn parse_header(line: &str, line_no: usize) -> ConfigResult<(u32, u32, u32, u32)> {
    let parts: Vec<i64> = line
        .trim()
        .split(',')
        .map(|s| {
            s.trim().parse::<i64>().map_err(|_| ConfigError::Malformed {
                line_no,
                text: line.to_string(),
            })
        })
        .collect::<ConfigResult<_>>()?;

    if parts.len() != 4 {
        return Err(ConfigError::Malformed {
            line_no,
            text: line.to_string(),
        });
    }
    let (width, height, via_penalty, wrong_direction_penalty) =
        (parts[0], parts[1], parts[2], parts[3]);

    if width <= 0 || height <= 0 {
        return Err(ConfigError::NonPositiveDimension { width, height });
    }
    if via_penalty < 0 || wrong_direction_penalty < 0 {
        return Err(ConfigError::NegativePenalty {
            via: via_penalty,
            wrong_direction: wrong_direction_penalty,
        });
    }

    Ok((
        width as u32,
        height as u32,
        via_penalty as u32,
        wrong_direction_penalty as u32,
    ))
}

fn validate_point(layer: i64, x: i64, y: i64, width: u32, height: u32) -> ConfigResult<Point> {
    if !(1..=2).contains(&layer) || x < 0 || y < 0 || x >= width as i64 || y >= height as i64 {
        return Err(ConfigError::OutOfBounds {
            layer,
            x,
            y,
            width,
            height,
        });
    }
    Ok(Point::new(layer as u8, x as u32, y as u32))
}

/// Extracts every `(a, b, c)` triple of integers appearing in `text`,
/// in left-to-right order. Mirrors the original source's regex-based
/// triple extraction without pulling in a regex dependency.
fn parse_triples(text: &str, line_no: usize) -> ConfigResult<Vec<(i64, i64, i64)>> {
    let malformed = || ConfigError::Malformed {
        line_no,
        text: text.to_string(),
    };

    let mut triples = Vec::new();
    let mut rest = text;
    while let Some(start) = rest.find('(') {
        let end = rest[start..].find(')').ok_or_else(malformed)? + start;
        let inner = &rest[start + 1..end];
        let nums: Vec<i64> = inner
            .split(',')
            .map(|s| s.trim().parse::<i64>().map_err(|_| malformed()))
            .collect::<ConfigResult<_>>()?;
        if nums.len() != 3 {
            return Err(malformed());
        }
        triples.push((nums[0], nums[1], nums[2]));
        rest = &rest[end + 1..];
    }
    Ok(triples)
}
