use std::rc::Rc;

use bit_set::BitSet;
use log::{info, trace};

use crate::color::{ColoringInstance, Colors, GraphColor, VertexId};

/** implements a least-constraining / most-constrained RLF variant. Colors vertices one color at a time
    1. selects the uncolored vertex with the largest degree in the uncolored subgraph
       (most constrained) and adds it to the current color
    2. marks its uncolored neighbors excluded
    3. adds the candidate (uncolored, not excluded) vertex that has the fewest edges
       towards the other candidates (least constraining). Ties are broken by the
       largest number of edges towards excluded vertices, then by the smallest index
    4. when there are no candidates left, start over with a new color
*/
pub fn lmxrlf(inst:&dyn ColoringInstance) -> Colors {
    let n:usize = inst.nb_vertices();
    let mut colors:Vec<Option<usize>> = vec![None ; n];
    // uncolored_degree[v]: number of uncolored neighbors of v
    let mut uncolored_degree:Vec<usize> = inst.vertices().map(|u| inst.degree(u)).collect();
    let mut nb_colored:usize = 0;
    let mut current_color:usize = 0;
    while nb_colored < n { // add a new color until everything is colored
        // seed: most constrained uncolored vertex
        let seed = inst.vertices()
            .filter(|v| colors[*v].is_none())
            .max_by(|a,b| {
                uncolored_degree[*a].cmp(&uncolored_degree[*b]).then_with(|| b.cmp(a))
            });
        let seed = match seed {
            None => break,
            Some(v) => v,
        };
        // candidates: uncolored vertices that can join the class, all of them at first
        let mut candidates = BitSet::with_capacity(n);
        for v in inst.vertices().filter(|v| colors[*v].is_none()) {
            candidates.insert(v);
        }
        // candidate_degree[v]: number of neighbors of v in candidates
        // excluded_degree[v]: number of neighbors of v excluded from the class
        // (both are maintained for every vertex, not only for candidates)
        let mut candidate_degree:Vec<usize> = uncolored_degree.clone();
        let mut excluded_degree:Vec<usize> = vec![0 ; n];
        let mut next_vertex = Some(seed);
        while let Some(current_vertex) = next_vertex {
            if nb_colored % 1000 == 0 { trace!("lmxrlf: colored {} / {}...", nb_colored, n); }
            colors[current_vertex] = Some(current_color);
            nb_colored += 1;
            candidates.remove(current_vertex);
            for v in inst.neighbors(current_vertex) {
                uncolored_degree[*v] -= 1;
                candidate_degree[*v] -= 1;
            }
            // mark its candidate neighbors excluded
            for v in inst.neighbors(current_vertex) {
                if candidates.contains(*v) {
                    candidates.remove(*v);
                    for w in inst.neighbors(*v) {
                        candidate_degree[*w] -= 1;
                        excluded_degree[*w] += 1;
                    }
                }
            }
            next_vertex = select_least_constraining(&candidates, &candidate_degree, &excluded_degree);
        }
        current_color += 1;
    }
    colors.into_iter().map(|c| c.unwrap_or(0)).collect()
}

/// candidate with the fewest candidate neighbors (then the most excluded neighbors, then the smallest index)
fn select_least_constraining(
    candidates:&BitSet,
    candidate_degree:&[usize],
    excluded_degree:&[usize],
) -> Option<VertexId> {
    candidates.iter().min_by(|a,b| {
        candidate_degree[*a].cmp(&candidate_degree[*b])
            .then_with(|| excluded_degree[*b].cmp(&excluded_degree[*a]))
            .then_with(|| a.cmp(b))
    })
}


/// LMXRLF coloring algorithm bound to an instance
#[derive(Debug)]
pub struct Lmxrlf {
    /// instance to color
    inst: Rc<dyn ColoringInstance>,
    /// last coloring computed
    colors: Option<Colors>,
}

impl Lmxrlf {
    /// creates a LMXRLF solver for an instance
    pub fn new(inst:Rc<dyn ColoringInstance>) -> Self {
        Self { inst, colors:None }
    }
}

impl GraphColor for Lmxrlf {
    fn name(&self) -> &'static str { "lmxrlf" }

    fn instance(&self) -> &Rc<dyn ColoringInstance> { &self.inst }

    fn color(&mut self) -> Colors {
        let colors = lmxrlf(self.inst.as_ref());
        info!("LMXRLF: {} colors", crate::color::nb_colors(&colors));
        self.colors = Some(colors.clone());
        colors
    }

    fn coloring(&self) -> Option<&Colors> { self.colors.as_ref() }
}
