use crate::grid::Grid;
use crate::neighbor::Penalties;
use crate::pathfinder::PathFinder;
use eda_common::geom::net::Net;
use eda_common::geom::point::Point;
use std::collections::HashSet;

/// The outcome of attempting to route one net.
#[derive(Debug)]
pub enum RoutingOutcome {
    Routed {
        path: Vec<Point>,
        wire_length: u32,
        via_count: u32,
    },
    Unrouted,
}

/// Owns the session's [`Grid`] and routes nets against it in the
/// caller's supplied order. Later nets see the committed paths of
/// earlier nets as obstacles; there is no rip-up or reordering.
pub struct Router {
    grid: Grid,
    penalties: Penalties,
}

impl Router {
    pub fn new(width: u32, height: u32, penalties: Penalties) -> Self {
        Self {
            grid: Grid::new(width, height),
            penalties,
        }
    }

    pub fn block_obstruction(&mut self, p: Point) {
        self.grid.block(p);
    }

    /// Routes every net in `nets`, in order, returning one outcome per
    /// net (same length and order as `nets`). Each net's commits
    /// become visible to the grid before the next net's search begins.
    pub fn route_all(&mut self, nets: &[Net]) -> Vec<RoutingOutcome> {
        let mut outcomes = Vec::with_capacity(nets.len());
        for (idx, net) in nets.iter().enumerate() {
            let outcome = self.route_net(idx, net, nets);
            if let RoutingOutcome::Unrouted = outcome {
                log::warn!("net '{}' is unroutable, skipping", net.name);
            }
            outcomes.push(outcome);
        }
        outcomes
    }

    /// Chains per-segment searches between consecutive pins of `net`,
    /// staging each segment's path. Only on full success are the
    /// staged, non-pin points committed to the grid — an atomic-per-net
    /// commit, adopted in place of the reference's segment-by-segment
    /// commit (a partial commit of a net that ultimately fails would
    /// otherwise wrongly block later nets).
    fn route_net(&mut self, net_index: usize, net: &Net, all_nets: &[Net]) -> RoutingOutcome {
        let own: HashSet<Point> = net.pins.iter().copied().collect();
        let foreign: HashSet<Point> = all_nets
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != net_index)
            .flat_map(|(_, other)| other.pins.iter().copied())
            .filter(|p| !own.contains(p))
            .collect();

        let mut full_path: Vec<Point> = Vec::new();
        for pair in net.pins.windows(2) {
            let (from, to) = (pair[0], pair[1]);
            let segment = match PathFinder::find(&self.grid, from, to, &own, &foreign, self.penalties) {
                Some(segment) => segment,
                None => {
                    log::debug!(
                        "net '{}': no path between {} and {}",
                        net.name,
                        from,
                        to
                    );
                    return RoutingOutcome::Unrouted;
                }
            };

            if full_path.is_empty() {
                full_path.extend(segment);
            } else {
                full_path.extend(segment.into_iter().skip(1));
            }
        }

        let (wire_length, via_count) = tally(&full_path);

        for &p in &full_path {
            if !own.contains(&p) {
                self.grid.block(p);
            }
        }

        log::info!(
            "net '{}' routed: {} points, wire_length={}, vias={}",
            net.name,
            full_path.len(),
            wire_length,
            via_count
        );

        RoutingOutcome::Routed {
            path: full_path,
            wire_length,
            via_count,
        }
    }
}

/// I3: wire_length counts same-layer unit moves; via_count counts
/// layer-changing moves.
fn tally(path: &[Point]) -> (u32, u32) {
    let mut wire_length = 0u32;
    let mut via_count = 0u32;
    for pair in path.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        if a.layer != b.layer {
            via_count += 1;
        } else {
            wire_length += a.x.abs_diff(b.x) + a.y.abs_diff(b.y);
        }
    }
    (wire_length, via_count)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn penalties(via: u32, wrong: u32) -> Penalties {
        Penalties {
            via,
            wrong_direction: wrong,
        }
    }

    #[test]
    fn trivial_straight_route() {
        let mut router = Router::new(3, 3, penalties(5, 2));
        let net = Net::new("net1".into(), vec![Point::new(1, 0, 0), Point::new(1, 2, 0)]);
        let outcomes = router.route_all(&[net]);
        match &outcomes[0] {
            RoutingOutcome::Routed {
                path,
                wire_length,
                via_count,
            } => {
                assert_eq!(
                    *path,
                    vec![Point::new(1, 0, 0), Point::new(1, 1, 0), Point::new(1, 2, 0)]
                );
                assert_eq!(*wire_length, 2);
                assert_eq!(*via_count, 0);
            }
            RoutingOutcome::Unrouted => panic!("expected a route"),
        }
    }

    #[test]
    fn second_net_is_blocked_by_first_and_must_via_around() {
        let mut router = Router::new(5, 5, penalties(2, 2));
        let net1 = Net::new(
            "net1".into(),
            vec![Point::new(1, 0, 0), Point::new(1, 4, 0)],
        );
        let net2 = Net::new(
            "net2".into(),
            vec![Point::new(1, 2, 0), Point::new(1, 2, 4)],
        );
        let nets = [net1, net2];
        let outcomes = router.route_all(&nets);

        let net2_vias = match &outcomes[1] {
            RoutingOutcome::Routed { via_count, .. } => *via_count,
            RoutingOutcome::Unrouted => panic!("net2 should still be routable"),
        };
        assert_eq!(net2_vias, 2);
    }

    #[test]
    fn multi_pin_chain_visits_pins_in_order() {
        let mut router = Router::new(5, 5, penalties(1, 1));
        let net = Net::new(
            "net1".into(),
            vec![
                Point::new(1, 0, 0),
                Point::new(1, 4, 0),
                Point::new(1, 4, 4),
            ],
        );
        let outcomes = router.route_all(&[net]);
        match &outcomes[0] {
            RoutingOutcome::Routed { path, .. } => {
                assert_eq!(path[0], Point::new(1, 0, 0));
                assert_eq!(path[path.len() - 1], Point::new(1, 4, 4));
                assert!(path.contains(&Point::new(1, 4, 0)));
            }
            RoutingOutcome::Unrouted => panic!("expected a route"),
        }
    }

    #[test]
    fn fully_blocked_column_is_unroutable() {
        let mut router = Router::new(3, 3, penalties(1, 1));
        for y in 0..3 {
            router.block_obstruction(Point::new(1, 1, y));
            router.block_obstruction(Point::new(2, 1, y));
        }
        let net = Net::new(
            "net1".into(),
            vec![Point::new(1, 0, 1), Point::new(1, 2, 1)],
        );
        let outcomes = router.route_all(&[net]);
        assert!(matches!(outcomes[0], RoutingOutcome::Unrouted));
    }

    #[test]
    fn failed_net_does_not_commit_partial_segments() {
        // A 1-tall grid rules out any y-axis detour, so fully blocking
        // both layers at a single non-pin x strictly between the 2nd
        // and 3rd pins leaves the last segment genuinely unreachable:
        // the first segment (pin 1 -> pin 2) succeeds and passes
        // through a non-pin intermediate cell, the second (pin 2 ->
        // pin 3) cannot cross x=3 on either layer, so the whole net
        // fails and that intermediate cell must not end up committed.
        let mut router = Router::new(6, 1, penalties(1, 1));
        router.block_obstruction(Point::new(1, 3, 0));
        router.block_obstruction(Point::new(2, 3, 0));
        let failing = Net::new(
            "bad".into(),
            vec![
                Point::new(1, 0, 0),
                Point::new(1, 2, 0),
                Point::new(1, 5, 0),
            ],
        );
        let outcomes = router.route_all(&[failing]);
        assert!(matches!(outcomes[0], RoutingOutcome::Unrouted));
        assert!(!router.grid.is_blocked(Point::new(1, 1, 0)));
    }
}
