use clap::{Parser, Subcommand};
use eda_common::io::{parser, writer};
use eda_common::util::config::Config;
use eda_common::util::{generator, logger, visualization};
use eda_router::Penalties;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input file describing grid dimensions, penalties, obstructions and nets.
    input_file: Option<PathBuf>,

    /// Output file to write the routed nets to.
    output_file: Option<PathBuf>,

    /// Overrides the via penalty carried in the input file header.
    #[arg(long)]
    via_penalty: Option<u32>,

    /// Overrides the wrong-direction penalty carried in the input file header.
    #[arg(long)]
    wrong_direction_penalty: Option<u32>,

    /// Optional TOML config carrying ambient tunables (penalty defaults, viz cell size).
    #[arg(short, long, value_name = "FILE", default_value = "config.toml")]
    config: PathBuf,

    /// Optional PNG path to render the routed design to.
    #[arg(long, value_name = "FILE.png")]
    viz: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Emits a random, well-formed maze-router input file for stress-testing.
    Generate {
        #[arg(long, default_value_t = 40)]
        width: u32,
        #[arg(long, default_value_t = 40)]
        height: u32,
        #[arg(long, default_value_t = 2)]
        via_penalty: u32,
        #[arg(long, default_value_t = 2)]
        wrong_direction_penalty: u32,
        #[arg(long, default_value_t = 20)]
        obstructions: usize,
        #[arg(long, default_value_t = 10)]
        nets: usize,
        #[arg(long, default_value = "inputs/random.txt")]
        output: String,
    },
}

fn main() {
    logger::init();
    let args = Args::parse();

    if let Err(err) = run(args) {
        log::error!("{err:#}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    if let Some(Commands::Generate {
        width,
        height,
        via_penalty,
        wrong_direction_penalty,
        obstructions,
        nets,
        output,
    }) = args.command
    {
        if let Some(parent) = PathBuf::from(&output).parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        generator::generate_random_input(
            &output,
            width,
            height,
            via_penalty,
            wrong_direction_penalty,
            obstructions,
            nets,
        )?;
        log::info!("generated random input: {output}");
        return Ok(());
    }

    let input_file = args
        .input_file
        .ok_or_else(|| anyhow::anyhow!("missing required argument <INPUT_FILE>"))?;
    let output_file = args
        .output_file
        .ok_or_else(|| anyhow::anyhow!("missing required argument <OUTPUT_FILE>"))?;

    let config = if args.config.exists() {
        log::info!("loading configuration from {:?}", args.config);
        let text = std::fs::read_to_string(&args.config)?;
        toml::from_str(&text)
            .map_err(|e| anyhow::anyhow!("failed to parse config TOML: {e}"))?
    } else {
        log::debug!("no config file at {:?}, using built-in defaults", args.config);
        Config::default()
    };

    log::info!("parsing input: {:?}", input_file);
    let input = parser::parse(
        input_file
            .to_str()
            .ok_or_else(|| anyhow::anyhow!("input path is not valid UTF-8"))?,
    )
    .map_err(|e| anyhow::anyhow!("invalid input in '{}': {e}", input_file.display()))?;

    // CLI override > input file header; the header is mandatory, so a
    // config-file default would never have a gap to fill.
    let via_penalty = args.via_penalty.unwrap_or(input.via_penalty);
    let wrong_direction_penalty = args
        .wrong_direction_penalty
        .unwrap_or(input.wrong_direction_penalty);

    let overrides = Penalties {
        via: via_penalty,
        wrong_direction: wrong_direction_penalty,
    };

    let results = eda_router::route(&input, Some(overrides));

    let routed_count = results
        .iter()
        .filter(|(_, outcome)| matches!(outcome, eda_router::RoutingOutcome::Routed { .. }))
        .count();
    log::info!(
        "routed {}/{} net(s)",
        routed_count,
        input.nets.len()
    );

    let routes: Vec<(String, Vec<eda_common::geom::Point>)> = results
        .into_iter()
        .map(|(name, outcome)| match outcome {
            eda_router::RoutingOutcome::Routed { path, .. } => (name, path),
            eda_router::RoutingOutcome::Unrouted => (name, Vec::new()),
        })
        .collect();

    let output_path = output_file
        .to_str()
        .ok_or_else(|| anyhow::anyhow!("output path is not valid UTF-8"))?;
    writer::write_results(output_path, &routes)?;
    log::info!("wrote results: {:?}", output_file);

    if let Some(viz_path) = args.viz {
        log::info!("rendering visualization: {:?}", viz_path);
        visualization::draw_routed_design(
            input.width,
            input.height,
            &input.obstructions,
            &routes,
            (config.viz_size / input.width.max(input.height).max(1)).max(1),
            viz_path
                .to_str()
                .ok_or_else(|| anyhow::anyhow!("viz path is not valid UTF-8"))?,
        );
    }

    Ok(())
}
