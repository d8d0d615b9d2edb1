use std::cmp::Reverse;
use std::rc::Rc;

use bit_set::BitSet;
use priority_queue::PriorityQueue;
use log::info;

use crate::color::{ColoringInstance, Colors, GraphColor, VertexId};

/** Maximum Cardinality Search ordering.
Repeatedly visits the unvisited vertex with the largest number of visited neighbors
(ties broken by the smallest index, so the search starts at vertex 0 and
each new connected component starts at its smallest vertex).
On a chordal graph, the reverse of this order is a perfect elimination ordering:
the visited neighbors of each vertex form a clique.
*/
pub fn mcs_ordering(inst:&dyn ColoringInstance) -> Vec<VertexId> {
    // priority: (number of visited neighbors, smallest index first)
    let mut unvisited:PriorityQueue<VertexId, (usize, Reverse<VertexId>)> = PriorityQueue::new();
    for v in inst.vertices() {
        unvisited.push(v, (0, Reverse(v)));
    }
    let mut visited = BitSet::with_capacity(inst.nb_vertices());
    let mut order = Vec::with_capacity(inst.nb_vertices());
    while let Some((v,_)) = unvisited.pop() {
        visited.insert(v);
        order.push(v);
        for u in inst.neighbors(v) {
            if !visited.contains(*u) {
                unvisited.change_priority_by(u, |p| { p.0 += 1; });
            }
        }
    }
    order
}

/** colors the vertices greedily (first available color) following a given order */
pub fn greedy_with_order(inst:&dyn ColoringInstance, order:&[VertexId]) -> Colors {
    let mut colors:Vec<Option<usize>> = vec![None ; inst.nb_vertices()];
    for v in order {
        let mut forbidden = BitSet::new();
        for u in inst.neighbors(*v) {
            if let Some(c) = colors[*u] { forbidden.insert(c); }
        }
        let mut color = 0;
        while forbidden.contains(color) { color += 1; }
        colors[*v] = Some(color);
    }
    colors.into_iter().map(|c| c.unwrap_or(0)).collect()
}

/** MCS coloring: colors the vertices greedily in the MCS visitation order.
Optimal on chordal graphs (the colored neighbors of a vertex form a clique) and on
bipartite graphs (the visited part of a component stays connected), uses at most Δ(G)+1 colors.
*/
pub fn mcs(inst:&dyn ColoringInstance) -> Colors {
    let order = mcs_ordering(inst);
    greedy_with_order(inst, &order)
}


/// Maximum Cardinality Search coloring algorithm bound to an instance
#[derive(Debug)]
pub struct Mcs {
    /// instance to color
    inst: Rc<dyn ColoringInstance>,
    /// last coloring computed
    colors: Option<Colors>,
}

impl Mcs {
    /// creates a MCS solver for an instance
    pub fn new(inst:Rc<dyn ColoringInstance>) -> Self {
        Self { inst, colors:None }
    }
}

impl GraphColor for Mcs {
    fn name(&self) -> &'static str { "mcs" }

    fn instance(&self) -> &Rc<dyn ColoringInstance> { &self.inst }

    fn color(&mut self) -> Colors {
        let colors = mcs(self.inst.as_ref());
        info!("MCS: {} colors", crate::color::nb_colors(&colors));
        self.colors = Some(colors.clone());
        colors
    }

    fn coloring(&self) -> Option<&Colors> { self.colors.as_ref() }
}
