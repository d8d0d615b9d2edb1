use std::collections::BTreeMap;

use graphcoloring::color::{nb_colors, ColoringInstance, GraphColor};
use graphcoloring::{
    Dsatur, GraphError, HybridDsatur, HybridLmxrlf, LabelledGraph, Lmxrlf, Mcs, Tabucol, TabucolParams,
};

fn graph(json:&str) -> LabelledGraph<String> {
    LabelledGraph::from_json_str(json).unwrap()
}

/// every algorithm with its default settings
fn all_algorithms(g:&LabelledGraph<String>) -> Vec<Box<dyn GraphColor>> {
    vec![
        Box::new(Dsatur::new(g.instance())),
        Box::new(Mcs::new(g.instance())),
        Box::new(Lmxrlf::new(g.instance())),
        Box::new(HybridDsatur::new(g.instance())),
        Box::new(HybridLmxrlf::new(g.instance())),
    ]
}

#[test]
fn triangle_needs_three_colors() {
    let g = graph(r#"{"a": ["b", "c"], "b": ["a", "c"], "c": ["a", "b"]}"#);
    for mut solver in all_algorithms(&g) {
        let colors = solver.color();
        let labelled = g.labelled_coloring(&colors);
        assert_eq!(labelled.len(), 3);
        assert_ne!(labelled["a"], labelled["b"]);
        assert_ne!(labelled["a"], labelled["c"]);
        assert_ne!(labelled["b"], labelled["c"]);
        assert!(solver.is_valid(), "{} is invalid", solver.name());
    }
    let mut solver = Tabucol::new(g.instance(), 2);
    solver.color();
    assert!(!solver.is_valid());
    let mut solver = Tabucol::new(g.instance(), 3);
    let colors = solver.color();
    assert!(solver.is_valid());
    assert_eq!(nb_colors(&colors), 3);
}

#[test]
fn isolated_vertices_share_one_color() {
    let g = graph(r#"{"x": [], "y": [], "z": [], "w": []}"#);
    for mut solver in all_algorithms(&g) {
        let colors = solver.color();
        assert_eq!(colors, vec![0 ; 4], "{}", solver.name());
    }
}

#[test]
fn even_cycle_is_bipartite() {
    let g = graph(r#"{"1": ["2", "4"], "2": ["1", "3"], "3": ["2", "4"], "4": ["3", "1"]}"#);
    for mut solver in all_algorithms(&g) {
        solver.color();
        assert!(solver.is_valid());
        assert_eq!(solver.nb_colors(), 2, "{}", solver.name());
    }
    let params = TabucolParams { seed:Some(7), ..TabucolParams::default() };
    let mut solver = Tabucol::with_params(g.instance(), 2, params);
    solver.color();
    assert!(solver.is_valid());
}

#[test]
fn irregular_bipartite_graph_gets_two_colors() {
    // sides {a,b,c,d} and {w,x,y,z}, uneven degrees, a 4-cycle a-w-c-x and a pendant path c-z-d
    let g = graph(r#"{
        "a": ["w", "x", "y"], "b": ["w"], "c": ["x", "z", "w"], "d": [],
        "w": ["a", "b"], "x": ["a", "c"], "y": ["a"], "z": ["c", "d"]
    }"#);
    for algorithm in &["dsatur", "mcs"] {
        let mut solver:Box<dyn GraphColor> = match *algorithm {
            "dsatur" => Box::new(Dsatur::new(g.instance())),
            _ => Box::new(Mcs::new(g.instance())),
        };
        solver.color();
        assert!(solver.is_valid());
        assert_eq!(solver.nb_colors(), 2, "{}", algorithm);
    }
}

#[test]
fn star_center_differs_from_leaves() {
    let g = graph(r#"{"c": ["l1", "l2", "l3", "l4", "l5"], "l1": [], "l2": [], "l3": [], "l4": [], "l5": []}"#);
    for mut solver in all_algorithms(&g) {
        let colors = solver.color();
        let labelled = g.labelled_coloring(&colors);
        assert_eq!(solver.nb_colors(), 2, "{}", solver.name());
        for leaf in &["l1", "l2", "l3", "l4", "l5"] {
            assert_ne!(labelled["c"], labelled[*leaf]);
        }
    }
}

#[test]
fn integer_labels() {
    let mut adjacency:BTreeMap<u32, Vec<u32>> = BTreeMap::new();
    adjacency.insert(10, vec![20]);
    adjacency.insert(20, vec![30]);
    adjacency.insert(30, vec![]);
    let g = LabelledGraph::from_adjacency(&adjacency).unwrap();
    assert_eq!(g.nb_vertices(), 3);
    let mut solver = Dsatur::new(g.instance());
    let labelled = g.labelled_coloring(&solver.color());
    assert_ne!(labelled[&10], labelled[&20]);
    assert_ne!(labelled[&20], labelled[&30]);
    assert_eq!(g.colors_from_labels(&labelled), solver.coloring().cloned());
}

#[test]
fn empty_graph() {
    let g = graph("{}");
    for mut solver in all_algorithms(&g) {
        assert!(solver.color().is_empty());
        assert!(solver.is_valid());
        assert_eq!(solver.nb_colors(), 0);
    }
    let mut solver = Tabucol::new(g.instance(), 0);
    assert!(solver.color().is_empty());
    assert!(solver.is_valid());
}

#[test]
fn structural_errors() {
    match LabelledGraph::from_json_str(r#"{"a": ["b"]}"#) {
        Err(GraphError::UnknownVertex { vertex, neighbor }) => {
            assert_eq!(vertex, "a");
            assert_eq!(neighbor, "b");
        },
        other => panic!("unexpected result {:?}", other),
    }
    match LabelledGraph::from_json_str(r#"{"a": ["a"]}"#) {
        Err(GraphError::SelfLoop { vertex }) => assert_eq!(vertex, "a"),
        other => panic!("unexpected result {:?}", other),
    }
    assert!(matches!(LabelledGraph::from_json_str("[1, 2]"), Err(GraphError::Parse { .. })));
}

#[test]
fn one_sided_edges_are_symmetrized() {
    let g = graph(r#"{"a": ["b"], "b": []}"#);
    let mut solver = Mcs::new(g.instance());
    let colors = solver.color();
    assert_ne!(colors[0], colors[1]);
    assert_eq!(g.instance().nb_edges(), 1);
}

#[test]
fn solution_round_trip_through_text() {
    let g = graph(r#"{"a": ["b"], "b": ["c"], "c": []}"#);
    let mut solver = Lmxrlf::new(g.instance());
    let colors = solver.color();
    let text = g.solution_to_string(&graphcoloring::color::colors_to_solution(&colors));
    let read = g.solution_from_str(&text).unwrap();
    assert!(graphcoloring::color::checker(g.instance().as_ref(), &read).is_ok());
    assert!(g.solution_from_str("a\nb d\n").is_err());
}
