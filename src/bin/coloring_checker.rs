use std::fs;

use anyhow::{anyhow, Context, Result};
use clap::{App, load_yaml};

use graphcoloring::color::{checker, CheckerResult};
use graphcoloring::util::{init_logger, read_instance};

/** checks a coloring: prints its number of colors, or the first error found */
pub fn main() -> Result<()> {
    init_logger();
    // parse arguments
    let yaml = load_yaml!("coloring_checker.yml");
    let main_args = App::from_yaml(yaml).get_matches();
    let inst_filename = main_args.value_of("instance").ok_or_else(|| anyhow!("missing instance file"))?;
    let instance_type = main_args.value_of("type").unwrap_or("dimacs");
    let sol_filename = main_args.value_of("solution").ok_or_else(|| anyhow!("missing solution file"))?;
    // read files
    let graph = read_instance(inst_filename, instance_type)?;
    let sol_str = fs::read_to_string(sol_filename)
        .with_context(|| format!("unable to read solution {}", sol_filename))?;
    let solution = graph.solution_from_str(&sol_str)
        .with_context(|| format!("unable to parse solution {}", sol_filename))?;
    // call checker
    match checker(graph.instance().as_ref(), &solution) {
        CheckerResult::Ok(n) => {
            println!("{}", n);
        },
        CheckerResult::VertexAddedTwice(v) => {
            println!("ERROR: vertex {} colored twice", graph.label(v));
        },
        CheckerResult::VertexNotColored(v) => {
            println!("ERROR: vertex {} not colored", graph.label(v));
        },
        CheckerResult::UnknownVertex(v) => {
            println!("ERROR: unknown vertex {}", v);
        },
        CheckerResult::ConflictingEdge(a, b) => {
            println!("ERROR: vertices {} and {} are adjacent and share a color", graph.label(a), graph.label(b));
        },
    };
    Ok(())
}
