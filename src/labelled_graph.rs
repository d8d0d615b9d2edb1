/*
Maps caller-defined vertex labels (integers, strings, ...) to the index space
used by the algorithms, and colorings back to labels.
*/
use std::collections::BTreeMap;
use std::fmt::Display;
use std::fs;
use std::rc::Rc;

use crate::color::{ColoringInstance, Colors, Solution, VertexId};
use crate::compact_instance::CompactInstance;
use crate::dimacs::read_from_file;
use crate::error::GraphError;

/** graph whose vertices are identified by labels.
labels[i] is the label of vertex i. Labels are indexed in increasing order.
*/
#[derive(Debug, Clone)]
pub struct LabelledGraph<V> {
    /// labels[i]: label of vertex i
    labels: Vec<V>,
    /// index of each label
    index: BTreeMap<V, VertexId>,
    /// underlying compact instance
    inst: Rc<CompactInstance>,
}

impl<V:Ord+Clone+Display> LabelledGraph<V> {

    /** builds a graph from a mapping vertex -> neighbors.
    Every neighbor must be a key of the mapping. Self-loops are rejected.
    */
    pub fn from_adjacency(adjacency:&BTreeMap<V, Vec<V>>) -> Result<Self, GraphError> {
        let labels:Vec<V> = adjacency.keys().cloned().collect();
        let index:BTreeMap<V, VertexId> = labels.iter().cloned()
            .enumerate().map(|(i,l)| (l,i)).collect();
        let mut adj_list = Vec::with_capacity(labels.len());
        for (vertex, neighbors) in adjacency {
            let mut l = Vec::with_capacity(neighbors.len());
            for neighbor in neighbors {
                if neighbor == vertex {
                    return Err(GraphError::SelfLoop { vertex: vertex.to_string() });
                }
                match index.get(neighbor) {
                    None => return Err(GraphError::UnknownVertex {
                        vertex: vertex.to_string(),
                        neighbor: neighbor.to_string(),
                    }),
                    Some(i) => l.push(*i),
                }
            }
            adj_list.push(l);
        }
        let inst = Rc::new(CompactInstance::new(adj_list)?);
        Ok(Self { labels, index, inst })
    }

    /// instance used by the coloring algorithms
    pub fn instance(&self) -> Rc<dyn ColoringInstance> { self.inst.clone() }

    /// number of vertices
    pub fn nb_vertices(&self) -> usize { self.labels.len() }

    /// label of vertex i
    pub fn label(&self, i:VertexId) -> &V { &self.labels[i] }

    /// vertex index of a label
    pub fn vertex(&self, label:&V) -> Option<VertexId> { self.index.get(label).copied() }

    /// maps a coloring onto the labels
    pub fn labelled_coloring(&self, colors:&[usize]) -> BTreeMap<V, usize> {
        self.labels.iter().cloned().zip(colors.iter().copied()).collect()
    }

    /// maps a labelled coloring onto vertex indices (None if some vertex is missing)
    pub fn colors_from_labels(&self, coloring:&BTreeMap<V, usize>) -> Option<Colors> {
        self.labels.iter().map(|l| coloring.get(l).copied()).collect()
    }

    /** writes a string encoding the solution (one line per color, labels separated by spaces) */
    pub fn solution_to_string(&self, solution:&[Vec<VertexId>]) -> String {
        let mut res = String::default();
        for e in solution {
            let line:Vec<String> = e.iter().map(|v| self.labels[*v].to_string()).collect();
            res += line.join(" ").as_str();
            res += "\n";
        }
        res
    }
}


impl LabelledGraph<String> {

    /// reads a JSON object mapping each vertex label to the list of its neighbor labels
    pub fn from_json_str(s:&str) -> Result<Self, GraphError> {
        let adjacency:BTreeMap<String, Vec<String>> = serde_json::from_str(s)
            .map_err(|e| GraphError::Parse { line: e.line(), reason: e.to_string() })?;
        Self::from_adjacency(&adjacency)
    }

    /// reads a JSON adjacency file (see `from_json_str`)
    pub fn from_json_file(filename:&str) -> Result<Self, GraphError> {
        let s = fs::read_to_string(filename)?;
        Self::from_json_str(&s)
    }

    /// reads a DIMACS file, vertex i is labelled "i" (indices start at 1 in the DIMACS format)
    pub fn from_dimacs_file(filename:&str) -> Result<Self, GraphError> {
        let (n, _, adj_list) = read_from_file(filename)?;
        let inst = Rc::new(CompactInstance::new(adj_list)?);
        let labels:Vec<String> = (1..=n).map(|i| i.to_string()).collect();
        let index = labels.iter().cloned().enumerate().map(|(i,l)| (l,i)).collect();
        // labels "1".."n" are not in lexicographic order, vertex i keeps index i-1
        Ok(Self { labels, index, inst })
    }

    /** reads a solution string (one line per color, labels separated by whitespace)
    returns an error if a label is unknown
    */
    pub fn solution_from_str(&self, s:&str) -> Result<Solution, GraphError> {
        let mut res = Vec::new();
        for (i,line) in s.lines().enumerate() {
            let mut class = Vec::new();
            for label in line.split_whitespace() {
                match self.index.get(label) {
                    None => return Err(GraphError::Parse {
                        line: i+1, reason: format!("unknown vertex {}", label)
                    }),
                    Some(v) => class.push(*v),
                }
            }
            if !class.is_empty() { res.push(class); }
        }
        Ok(res)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    use crate::color::checker;

    fn adjacency(edges:&[(&str,&str)], isolated:&[&str]) -> BTreeMap<String, Vec<String>> {
        let mut res:BTreeMap<String, Vec<String>> = BTreeMap::new();
        for v in isolated { res.entry(v.to_string()).or_default(); }
        for (a,b) in edges {
            res.entry(a.to_string()).or_default().push(b.to_string());
            res.entry(b.to_string()).or_default().push(a.to_string());
        }
        res
    }

    #[test]
    fn test_from_adjacency() {
        let g = LabelledGraph::from_adjacency(&adjacency(&[("b","a"),("b","c")], &["z"])).unwrap();
        assert_eq!(g.nb_vertices(), 4);
        assert_eq!(g.vertex(&"a".to_string()), Some(0));
        assert_eq!(g.label(3), "z");
        let inst = g.instance();
        assert_eq!(inst.nb_edges(), 2);
        assert_eq!(inst.degree(1), 2);
        assert_eq!(inst.degree(3), 0);
    }

    #[test]
    fn test_integer_labels() {
        let mut adj:BTreeMap<u32, Vec<u32>> = BTreeMap::new();
        adj.insert(10, vec![2]);
        adj.insert(2, vec![10]);
        let g = LabelledGraph::from_adjacency(&adj).unwrap();
        assert_eq!(g.label(0), &2);
        let coloring = g.labelled_coloring(&[0,1]);
        assert_eq!(coloring[&2], 0);
        assert_eq!(coloring[&10], 1);
        assert_eq!(g.colors_from_labels(&coloring), Some(vec![0,1]));
    }

    #[test]
    fn test_unknown_neighbor() {
        let mut adj = adjacency(&[("a","b")], &[]);
        adj.get_mut("a").unwrap().push("x".to_string());
        assert_eq!(
            LabelledGraph::from_adjacency(&adj).unwrap_err(),
            GraphError::UnknownVertex { vertex:"a".to_string(), neighbor:"x".to_string() }
        );
    }

    #[test]
    fn test_self_loop() {
        let mut adj = adjacency(&[("a","b")], &[]);
        adj.get_mut("b").unwrap().push("b".to_string());
        assert_eq!(
            LabelledGraph::from_adjacency(&adj).unwrap_err(),
            GraphError::SelfLoop { vertex:"b".to_string() }
        );
    }

    #[test]
    fn test_json() {
        let g = LabelledGraph::from_json_str(r#"{"1": ["2", "3"], "2": ["1"], "3": ["1"]}"#).unwrap();
        assert_eq!(g.instance().nb_edges(), 2);
        assert!(matches!(
            LabelledGraph::from_json_str("[1, 2]"), Err(GraphError::Parse { .. })
        ));
    }

    #[test]
    fn test_solution_string() {
        let g = LabelledGraph::from_adjacency(&adjacency(&[("a","b"),("b","c")], &[])).unwrap();
        let sol = vec![vec![0,2], vec![1]];
        let s = g.solution_to_string(&sol);
        assert_eq!(s, "a c\nb\n");
        let read = g.solution_from_str(&s).unwrap();
        assert_eq!(read, sol);
        assert_eq!(checker(g.instance().as_ref(), &read).is_ok(), true);
        assert!(g.solution_from_str("a d\n").is_err());
    }
}
