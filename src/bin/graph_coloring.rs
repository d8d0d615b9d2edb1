use std::time::Instant;

use anyhow::{anyhow, Result};
use clap::{App, load_yaml};
use log::info;
use serde_json::{json, Value};

use graphcoloring::color::{Colors, GraphColor};
use graphcoloring::search::dsatur::Dsatur;
use graphcoloring::search::hybrid::{Hybrid, HybridDsatur, HybridLmxrlf};
use graphcoloring::search::lmxrlf::Lmxrlf;
use graphcoloring::search::mcs::Mcs;
use graphcoloring::search::tabucol::Tabucol;
use graphcoloring::util::{export_results, init_logger, parse_arg, read_params, read_tabucol_params};

/// outcome of a coloring algorithm
struct Run {
    colors: Colors,
    valid: bool,
    time_searched: f32,
    /// algorithm specific statistics
    details: Value,
}

/// runs the algorithm and measures its running time
fn solve(solver:&mut dyn GraphColor) -> Run {
    let start = Instant::now();
    let colors = solver.color();
    let time_searched = start.elapsed().as_secs_f32();
    info!("{} took {:.3} seconds. Nb colors: {}", solver.name(), time_searched, solver.nb_colors());
    Run { colors, valid:solver.is_valid(), time_searched, details:Value::Null }
}

/** colors an instance using the algorithm given as subcommand */
pub fn main() -> Result<()> {
    init_logger();
    // parse arguments
    let yaml = load_yaml!("graph_coloring.yml");
    let main_args = App::from_yaml(yaml).get_matches();
    let params = read_params(&main_args)?;
    let inst = params.graph.instance();

    // solve it
    let (algorithm, args) = main_args.subcommand();
    let args = args.ok_or_else(|| anyhow!("no algorithm given"))?;
    let mut k_requested = None;
    let run = match algorithm {
        "dsatur" => solve(&mut Dsatur::new(inst)),
        "mcs" => solve(&mut Mcs::new(inst)),
        "lmxrlf" => solve(&mut Lmxrlf::new(inst)),
        "tabucol" => {
            let k:usize = parse_arg(args, "k")?.ok_or_else(|| anyhow!("missing number of colors (--k)"))?;
            k_requested = Some(k);
            let mut solver = Tabucol::with_params(inst, k, read_tabucol_params(args)?);
            let mut run = solve(&mut solver);
            run.details = json!({
                "k": k,
                "params": solver.params(),
                "stats": solver.stats(),
            });
            run
        },
        "hybrid_dsatur" => {
            let mut solver = HybridDsatur::with_constructor(Dsatur::new(inst), read_tabucol_params(args)?);
            let mut run = solve(&mut solver);
            run.details = hybrid_details(&solver);
            run
        },
        "hybrid_lmxrlf" => {
            let mut solver = HybridLmxrlf::with_constructor(Lmxrlf::new(inst), read_tabucol_params(args)?);
            let mut run = solve(&mut solver);
            run.details = hybrid_details(&solver);
            run
        },
        _ => return Err(anyhow!("unknown algorithm '{}'", algorithm)),
    };

    // export results
    let stats = json!({
        "inst_name": params.inst_filename,
        "algorithm": algorithm,
        "nb_colors": graphcoloring::color::nb_colors(&run.colors),
        "valid": run.valid,
        "time_searched": run.time_searched,
        "details": run.details,
    });
    export_results(
        &params.graph, &run.colors, &stats,
        params.perf_file.as_deref(), params.sol_file.as_deref()
    )?;
    if !run.valid {
        if let Some(k) = k_requested {
            return Err(anyhow!("graph cannot be colored with {} colors", k));
        }
        return Err(anyhow!("{} produced an invalid coloring", algorithm));
    }
    Ok(())
}

fn hybrid_details<C:GraphColor>(solver:&Hybrid<C>) -> Value {
    json!({
        "params": solver.params(),
        "history": solver.history(),
    })
}
