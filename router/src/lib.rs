pub mod grid;
pub mod neighbor;
pub mod pathfinder;
pub mod router;

pub use neighbor::Penalties;
pub use pathfinder::PathFinder;
pub use router::{Router, RoutingOutcome};

use eda_common::io::parser::RouterInput;

/// Routes every net in `input`, in input order, against a fresh
/// session grid seeded with `input`'s obstructions. `overrides`, if
/// given, take precedence over the penalties carried in the input
/// file header (CLI override > file header, per the external
/// interfaces' penalty-override rule).
pub fn route(input: &RouterInput, overrides: Option<Penalties>) -> Vec<(String, RoutingOutcome)> {
    let penalties = overrides.unwrap_or(Penalties {
        via: input.via_penalty,
        wrong_direction: input.wrong_direction_penalty,
    });

    log::info!(
        "routing {} net(s) on a {}x{} grid (via={}, wrong_direction={})",
        input.nets.len(),
        input.width,
        input.height,
        penalties.via,
        penalties.wrong_direction
    );

    let mut router = Router::new(input.width, input.height, penalties);
    for &obstruction in &input.obstructions {
        router.block_obstruction(obstruction);
    }

    let outcomes = router.route_all(&input.nets);
    input
        .nets
        .iter()
        .map(|net| net.name.clone())
        .zip(outcomes)
        .collect()
}
