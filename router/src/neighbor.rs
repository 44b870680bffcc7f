use eda_common::geom::point::Point;

/// Via and wrong-direction penalties for a routing session, configured
/// once and shared by every net's search.
#[derive(Clone, Copy, Debug)]
pub struct Penalties {
    pub via: u32,
    pub wrong_direction: u32,
}

/// M1 is horizontally preferred, M2 vertically preferred. A step on
/// the non-preferred axis is legal but costs an extra `wrong_direction`
/// on top of the unit step.
const PREFERRED_HORIZONTAL_LAYER: u8 = 1;
const PREFERRED_VERTICAL_LAYER: u8 = 2;

/// Enumerates up to five candidate successors of `p` with their move
/// cost, filtered only by grid bounds — blockage is the caller's
/// (`PathFinder`'s) concern, not this module's.
///
/// Candidates, in a fixed order so callers relaxing them in sequence
/// behave deterministically: `-x`, `+x`, `-y`, `+y`, via.
pub fn candidates(p: Point, width: u32, height: u32, penalties: Penalties) -> Vec<(Point, u64)> {
    let mut out = Vec::with_capacity(5);
    let horizontal_cost = step_cost(p.layer, PREFERRED_HORIZONTAL_LAYER, penalties);
    let vertical_cost = step_cost(p.layer, PREFERRED_VERTICAL_LAYER, penalties);

    if p.x > 0 {
        out.push((Point::new(p.layer, p.x - 1, p.y), horizontal_cost));
    }
    if p.x + 1 < width {
        out.push((Point::new(p.layer, p.x + 1, p.y), horizontal_cost));
    }
    if p.y > 0 {
        out.push((Point::new(p.layer, p.x, p.y - 1), vertical_cost));
    }
    if p.y + 1 < height {
        out.push((Point::new(p.layer, p.x, p.y + 1), vertical_cost));
    }

    let other_layer = if p.layer == 1 { 2 } else { 1 };
    let via_point = Point::new(other_layer, p.x, p.y);
    out.push((via_point, 1 + penalties.via as u64));

    out
}

#[inline]
fn step_cost(layer: u8, preferred_layer: u8, penalties: Penalties) -> u64 {
    if layer == preferred_layer {
        1
    } else {
        1 + penalties.wrong_direction as u64
    }
}
