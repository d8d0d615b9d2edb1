use std::fmt::Debug;
use std::ops::Range;
use std::rc::Rc;

use bit_set::BitSet;
use log::info;

/** Vertex Id */
pub type VertexId = usize;

/** Coloring of a graph: colors[v] is the (0-based) color of vertex v */
pub type Colors = Vec<usize>;

/** Solution of a graph coloring problem
(represented as a partition).
*/
pub type Solution = Vec<Vec<VertexId>>;

/** models a Graph Coloring instance. Vertices are indexed from 0 to n-1. */
pub trait ColoringInstance: Debug {
    /// number of vertices
    fn nb_vertices(&self) -> usize;

    /// number of (undirected) edges
    fn nb_edges(&self) -> usize;

    /// list of vertices adjacent to u
    fn neighbors(&self, u:VertexId) -> &[VertexId];

    /// degree of u
    fn degree(&self, u:VertexId) -> usize { self.neighbors(u).len() }

    /// edge list (u < v for each edge)
    fn edges(&self) -> &[(VertexId, VertexId)];

    /// vertices of the graph
    fn vertices(&self) -> Range<VertexId> { 0..self.nb_vertices() }

    /// maximum degree Δ(G) (0 for an empty graph)
    fn max_degree(&self) -> usize {
        self.vertices().map(|u| self.degree(u)).max().unwrap_or(0)
    }

    /// logs some statistics of the instance
    fn display_statistics(&self) {
        let degrees:Vec<usize> = self.vertices().map(|i| self.degree(i)).collect();
        info!("\t{} \t vertices", self.nb_vertices());
        info!("\t{} \t edges", self.nb_edges());
        info!("\t{} \t min degree", degrees.iter().min().unwrap_or(&0));
        info!("\t{} \t max degree", degrees.iter().max().unwrap_or(&0));
    }
}


/** Common interface of every coloring algorithm.
An algorithm is bound to an instance, `color` computes (and stores) a coloring,
`is_valid` checks the last computed one.
*/
pub trait GraphColor {
    /// algorithm name (used in logs and statistics)
    fn name(&self) -> &'static str;

    /// instance being colored
    fn instance(&self) -> &Rc<dyn ColoringInstance>;

    /// computes a coloring of the instance, stores it and returns it
    fn color(&mut self) -> Colors;

    /// last coloring computed (None if `color` was never called)
    fn coloring(&self) -> Option<&Colors>;

    /// true iff a coloring has been computed, covers every vertex and has no conflicting edge
    fn is_valid(&self) -> bool {
        match self.coloring() {
            None => false,
            Some(colors) => {
                let inst = self.instance();
                if colors.len() != inst.nb_vertices() { return false; }
                checker(inst.as_ref(), &colors_to_solution(colors)).is_ok()
            }
        }
    }

    /// number of distinct colors used by the last coloring (0 if none)
    fn nb_colors(&self) -> usize {
        self.coloring().map_or(0, |colors| nb_colors(colors))
    }
}


/// number of distinct colors used by a coloring
pub fn nb_colors(colors:&[usize]) -> usize {
    let mut used = BitSet::new();
    for c in colors { used.insert(*c); }
    used.len()
}

/// converts a coloring into a partition (empty color classes are removed)
pub fn colors_to_solution(colors:&[usize]) -> Solution {
    let nb_classes = colors.iter().max().map_or(0, |c| c+1);
    let mut res:Solution = vec![vec![] ; nb_classes];
    for (v,c) in colors.iter().enumerate() {
        res[*c].push(v);
    }
    res.into_iter().filter(|e| !e.is_empty()).collect()
}

/** converts a partition into a coloring.
returns None if some vertex is not covered (or is covered twice)
*/
pub fn solution_to_colors(n:usize, sol:&[Vec<VertexId>]) -> Option<Colors> {
    let mut colors:Vec<Option<usize>> = vec![None ; n];
    for (c,class) in sol.iter().enumerate() {
        for v in class {
            match colors.get(*v) {
                Some(None) => colors[*v] = Some(c),
                _ => return None,
            }
        }
    }
    colors.into_iter().collect()
}


/** result of the solution checker */
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum CheckerResult {
    /// the solution is valid, returns the number of colors used
    Ok(usize),
    /// the vertex is colored twice
    VertexAddedTwice(VertexId),
    /// the vertex is not colored
    VertexNotColored(VertexId),
    /// the vertex does not belong to the instance
    UnknownVertex(VertexId),
    /// the two vertices are adjacent and share a color
    ConflictingEdge(VertexId, VertexId),
}

impl CheckerResult {
    /// true iff the solution is valid
    pub fn is_ok(&self) -> bool { matches!(self, CheckerResult::Ok(_)) }
}

/**
checks a solution given as a partition.
returns the number of (non-empty) colors if feasible, the first defect found otherwise.
Conflicts are checked from both endpoints of each adjacency list.
*/
pub fn checker(inst:&dyn ColoringInstance, sol:&[Vec<VertexId>]) -> CheckerResult {
    let n = inst.nb_vertices();
    // check that all vertices are added exactly once
    let mut colors:Vec<Option<usize>> = vec![None ; n];
    for (c,class) in sol.iter().enumerate() {
        for v in class {
            if *v >= n { return CheckerResult::UnknownVertex(*v); }
            if colors[*v].is_some() { return CheckerResult::VertexAddedTwice(*v); }
            colors[*v] = Some(c);
        }
    }
    if let Some(v) = colors.iter().position(|c| c.is_none()) {
        return CheckerResult::VertexNotColored(v);
    }
    // check conflicts
    for u in inst.vertices() {
        for v in inst.neighbors(u) {
            if colors[u] == colors[*v] {
                return CheckerResult::ConflictingEdge(u.min(*v), u.max(*v));
            }
        }
    }
    // if ok: return the number of colors
    CheckerResult::Ok(sol.iter().filter(|e| !e.is_empty()).count())
}
