use std::fs;
use std::str::FromStr;

use anyhow::{anyhow, Context, Result};
use clap::ArgMatches;
use log::{info, warn};
use serde_json::Value;

use crate::color::{checker, colors_to_solution, CheckerResult};
use crate::labelled_graph::LabelledGraph;
use crate::search::tabucol::TabucolParams;

/// command line parameters shared by every algorithm
#[derive(Debug)]
pub struct Params {
    /// instance file name
    pub inst_filename: String,
    /// instance
    pub graph: LabelledGraph<String>,
    /// file in which the coloring is written
    pub sol_file: Option<String>,
    /// file in which the statistics are written
    pub perf_file: Option<String>,
}

/// initializes the logger (default level: info, see RUST_LOG)
pub fn init_logger() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}

/// reads an instance given its format ("dimacs" or "json")
pub fn read_instance(filename:&str, instance_type:&str) -> Result<LabelledGraph<String>> {
    let graph = match instance_type {
        "dimacs" => LabelledGraph::from_dimacs_file(filename),
        "json" => LabelledGraph::from_json_file(filename),
        _ => return Err(anyhow!("instance type unknown {} (valid: 'dimacs', 'json')", instance_type)),
    }.with_context(|| format!("unable to read instance {}", filename))?;
    Ok(graph)
}

/** parses an optional command line value */
pub fn parse_arg<T>(args:&ArgMatches, name:&str) -> Result<Option<T>>
where T:FromStr, T::Err: std::error::Error+Send+Sync+'static {
    match args.value_of(name) {
        None => Ok(None),
        Some(s) => s.parse::<T>().map(Some)
            .with_context(|| format!("unable to parse {} (given: {})", name, s)),
    }
}

/** reads command line input and returns the instance name, instance, solution_filename, stats_filename */
pub fn read_params(main_args:&ArgMatches) -> Result<Params> {
    let inst_filename = main_args.value_of("instance")
        .ok_or_else(|| anyhow!("missing instance file"))?;
    let instance_type = main_args.value_of("type").unwrap_or("dimacs");
    // read value of the solution filename
    let sol_file = main_args.value_of("solution").map(|e| e.to_string());
    if let Some(e) = &sol_file { info!("printing solutions in: {}", e); }
    // read value of the performance logs filename
    let perf_file = main_args.value_of("perf").map(|e| e.to_string());
    if let Some(e) = &perf_file { info!("printing perfs in: {}", e); }
    info!("reading instance: {}...", inst_filename);
    let graph = read_instance(inst_filename, instance_type)?;
    graph.instance().display_statistics();
    info!("=======================");
    Ok(Params { inst_filename:inst_filename.to_string(), graph, sol_file, perf_file })
}

/** reads the TabuCol tunables (--tabu-size, --rep, --nbmax, --seed), missing ones take their default value */
pub fn read_tabucol_params(args:&ArgMatches) -> Result<TabucolParams> {
    let default = TabucolParams::default();
    Ok(TabucolParams {
        tabu_size: parse_arg(args, "tabu_size")?.unwrap_or(default.tabu_size),
        rep: parse_arg(args, "rep")?.unwrap_or(default.rep),
        nbmax: parse_arg(args, "nbmax")?.unwrap_or(default.nbmax),
        seed: parse_arg(args, "seed")?,
    })
}

/// exports search results to files (statistics as JSON, coloring one color per line)
pub fn export_results(
    graph:&LabelledGraph<String>,
    colors:&[usize],
    stats:&Value,
    perf_file:Option<&str>,
    sol_file:Option<&str>,
) -> Result<()> {
    // export statistics
    if let Some(filename) = perf_file {
        fs::write(filename, serde_json::to_string(stats)?)
            .with_context(|| format!("couldn't write {}", filename))?;
    }
    // export solution
    if let Some(filename) = sol_file {
        let solution = colors_to_solution(colors);
        match checker(graph.instance().as_ref(), &solution) {
            CheckerResult::Ok(_) => {},
            checker_result => { warn!("invalid solution (reason: {:?})", checker_result) },
        };
        fs::write(filename, graph.solution_to_string(&solution))
            .with_context(|| format!("write_solution: unable to write the solution in {}", filename))?;
    }
    Ok(())
}


#[cfg(test)]
mod tests {
    use super::*;

    use clap::{App, load_yaml};

    fn matches(argv:&[&str]) -> ArgMatches<'static> {
        let yaml = load_yaml!("bin/graph_coloring.yml");
        // the yaml definition is leaked so that the matches can outlive this function
        let app = App::from_yaml(Box::leak(Box::new(yaml.clone())));
        app.get_matches_from_safe(argv.to_vec()).unwrap()
    }

    #[test]
    fn test_tabucol_args() {
        let m = matches(&["graph_coloring", "-i", "g.col", "tabucol", "-k", "3", "--rep", "7", "--seed", "12"]);
        let (name, sub) = m.subcommand();
        assert_eq!(name, "tabucol");
        let sub = sub.unwrap();
        assert_eq!(parse_arg::<usize>(sub, "k").unwrap(), Some(3));
        let params = read_tabucol_params(sub).unwrap();
        assert_eq!(params, TabucolParams { tabu_size:25, rep:7, nbmax:1000, seed:Some(12) });
    }

    #[test]
    fn test_invalid_arg() {
        let m = matches(&["graph_coloring", "-i", "g.col", "hybrid_dsatur", "--nbmax", "many"]);
        let sub = m.subcommand_matches("hybrid_dsatur").unwrap();
        assert!(read_tabucol_params(sub).is_err());
    }

    #[test]
    fn test_read_params() {
        let inst_file = std::env::temp_dir().join(format!("graphcoloring-params-{}.json", std::process::id()));
        fs::write(&inst_file, r#"{"a": ["b"], "b": [], "c": ["b"]}"#).unwrap();
        let inst_name = inst_file.to_str().unwrap();
        let m = matches(&["graph_coloring", "-i", inst_name, "-t", "json", "-s", "out.sol", "dsatur"]);
        let params = read_params(&m).unwrap();
        assert_eq!(params.inst_filename, inst_name);
        assert_eq!(params.graph.nb_vertices(), 3);
        assert_eq!(params.graph.instance().nb_edges(), 2);
        assert_eq!(params.sol_file.as_deref(), Some("out.sol"));
        assert_eq!(params.perf_file, None);
        fs::remove_file(inst_file).unwrap();
    }

    #[test]
    fn test_read_instance_errors() {
        assert!(read_instance("g.col", "xml").is_err());
        assert!(read_instance("does/not/exist.col", "dimacs").is_err());
    }

    #[test]
    fn test_export_results() {
        let graph = LabelledGraph::from_json_str(r#"{"a": ["b"], "b": ["a"], "c": []}"#).unwrap();
        let dir = std::env::temp_dir();
        let sol_file = dir.join(format!("graphcoloring-test-{}.sol", std::process::id()));
        let perf_file = dir.join(format!("graphcoloring-test-{}.json", std::process::id()));
        let stats = serde_json::json!({ "nb_colors": 2 });
        export_results(
            &graph, &[0,1,0], &stats,
            perf_file.to_str(), sol_file.to_str()
        ).unwrap();
        assert_eq!(fs::read_to_string(&sol_file).unwrap(), "a c\nb\n");
        let read:Value = serde_json::from_str(&fs::read_to_string(&perf_file).unwrap()).unwrap();
        assert_eq!(read, stats);
        fs::remove_file(sol_file).unwrap();
        fs::remove_file(perf_file).unwrap();
    }
}
