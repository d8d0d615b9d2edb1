use std::cmp::{Ordering, Ord};
use std::rc::Rc;

use priority_queue::PriorityQueue;
use bit_set::BitSet;
use log::{info, trace};

use crate::color::{ColoringInstance, Colors, GraphColor, VertexId};

#[derive(PartialEq, Eq)]
struct DSatInfo {
    dsat: usize,
    degree: usize,
    vertex: VertexId,
}

impl Ord for DSatInfo {
    fn cmp(&self, other: &Self) -> Ordering {
        self.dsat.cmp(&other.dsat)
            .then_with(|| self.degree.cmp(&other.degree))
            .then_with(|| other.vertex.cmp(&self.vertex)) // smallest index first
    }
}

// `PartialOrd` needs to be implemented as well.
impl PartialOrd for DSatInfo {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/** implements a greedy DSATUR algorithm.
    1. choose an uncolored node that sees the most colors
       (break ties by the largest degree, then by the smallest index)
    2. add the vertex to the first color available
    3. mark all its neighbors seeing this color
    4. repeat until a proper coloring is found
Uses at most Δ(G)+1 colors.
*/
pub fn dsatur(inst:&dyn ColoringInstance) -> Colors {
    let n:usize = inst.nb_vertices();
    let mut remaining_vertices:PriorityQueue<VertexId, DSatInfo> = PriorityQueue::new();
    for i in inst.vertices() {
        remaining_vertices.push(i, DSatInfo { dsat:0, degree:inst.degree(i), vertex:i });
    }
    let mut colors:Vec<Option<usize>> = vec![None ; n]; // colors[v] -> color assigned to vertex v
    let mut adj_colors:Vec<BitSet> = vec![BitSet::default() ; n]; // adj_colors[n] -> colors n sees
    let mut nb_colored:usize = 0;
    while let Some((current_vertex,_)) = remaining_vertices.pop() {
        if nb_colored % 1000 == 0 { trace!("dsatur: colored {} / {}...", nb_colored, n); }
        // assign it a color
        let mut color:usize = 0;
        while adj_colors[current_vertex].contains(color) { color += 1; }
        colors[current_vertex] = Some(color);
        nb_colored += 1;
        // update saturation degree information
        for conflict_vertex in inst.neighbors(current_vertex).iter()
        .filter(|conflict_vertex| colors[**conflict_vertex].is_none()) {
            if !adj_colors[*conflict_vertex].contains(color) {
                adj_colors[*conflict_vertex].insert(color);
                remaining_vertices.change_priority_by(conflict_vertex, |p| { p.dsat += 1; });
            }
        }
    }
    // every vertex has been popped once
    colors.into_iter().map(|c| c.unwrap_or(0)).collect()
}


/// DSATUR coloring algorithm bound to an instance
#[derive(Debug)]
pub struct Dsatur {
    /// instance to color
    inst: Rc<dyn ColoringInstance>,
    /// last coloring computed
    colors: Option<Colors>,
}

impl Dsatur {
    /// creates a DSATUR solver for an instance
    pub fn new(inst:Rc<dyn ColoringInstance>) -> Self {
        Self { inst, colors:None }
    }
}

impl GraphColor for Dsatur {
    fn name(&self) -> &'static str { "dsatur" }

    fn instance(&self) -> &Rc<dyn ColoringInstance> { &self.inst }

    fn color(&mut self) -> Colors {
        let colors = dsatur(self.inst.as_ref());
        info!("DSATUR: {} colors", crate::color::nb_colors(&colors));
        self.colors = Some(colors.clone());
        colors
    }

    fn coloring(&self) -> Option<&Colors> { self.colors.as_ref() }
}
