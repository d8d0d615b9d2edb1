use std::rc::Rc;

use fastrand::Rng;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::color::{ColoringInstance, Colors, GraphColor, VertexId};

/** TabuCol tunables */
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabucolParams {
    /// number of iterations a (vertex, previous color) move stays tabu
    pub tabu_size: usize,
    /// number of non-improving iterations before a perturbation
    pub rep: usize,
    /// maximum number of iterations
    pub nbmax: usize,
    /// random seed (None: seeded from the system)
    pub seed: Option<u64>,
}

impl Default for TabucolParams {
    fn default() -> Self {
        Self { tabu_size: 25, rep: 100, nbmax: 1000, seed: None }
    }
}

/** statistics of a TabuCol run */
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TabucolStats {
    /// number of moves performed
    pub nb_iter: usize,
    /// best number of conflicting edges found
    pub best_nb_conflicts: usize,
    /// number of perturbations performed
    pub nb_perturbations: usize,
}

/** result of a TabuCol run */
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabucolResult {
    /// best coloring found (colors in 0..k)
    pub colors: Colors,
    /// true iff the coloring has no conflicting edge
    pub valid: bool,
    /// run statistics
    pub stats: TabucolStats,
}


/**
Decision of changing the color of vertex v by c
*/
#[derive(Debug,Clone,Copy,Hash,Eq,PartialEq)]
struct Decision {
    /// vertex to color
    v: VertexId,
    /// previously used color for v
    c_prev: usize,
    /// color to use
    c_next: usize,
}


/** tabu list of the graph coloring.
decisions[v*k+c]: first iteration in which moving v to c is allowed again.
*/
#[derive(Debug)]
struct TabuColTenure {
    /// number of iterations a move stays tabu
    tabu_size: usize,
    /// number of colors
    k: usize,
    /// decisions[v*k+c]: expiry iteration of the move (v,c)
    decisions: Vec<usize>,
}

impl TabuColTenure {
    /** creates a tabucol tenure given:
     - tabu_size: number of iterations a move stays tabu
     - n: the number of vertices in the graph
     - k: the number of colors
    */
    fn new(tabu_size:usize, n:usize, k:usize) -> Self {
        Self { tabu_size, k, decisions: vec![0 ; n*k] }
    }

    /// forbids coloring v with c for the next tabu_size iterations
    fn insert(&mut self, v:VertexId, c:usize, nb_iter:usize) {
        self.decisions[v*self.k+c] = nb_iter + 1 + self.tabu_size;
    }

    /// true iff coloring v with c is forbidden at iteration nb_iter
    fn contains(&self, v:VertexId, c:usize, nb_iter:usize) -> bool {
        nb_iter < self.decisions[v*self.k+c]
    }
}


/** (see https://doi.org/10.1007/BF02239976)
Implements a local search procedure for the graph coloring (TabuCol) with a fixed number of colors k.
It makes changes in the coloring to minimize the number of conflicting edges.

main procedure:
 1. every vertex incident to a conflicting edge is a move candidate
 2. for each candidate, try every other color and keep the best non-tabu move
    (a tabu move is accepted if it leads to a new best number of conflicts)
*/
#[derive(Debug)]
struct SearchState {
    /// reference instance
    inst: Rc<dyn ColoringInstance>,
    /// number of colors
    k: usize,
    /// colors[v]: color of the vertex v
    colors: Vec<usize>,
    /// nb_neigh_colors[v*k+c]: number of neighbors of v that are assigned color c
    nb_neigh_colors: Vec<usize>,
    /// number of conflicting edges
    nb_conflicting_edges: usize,
    /// random number generator
    rng: Rng,
}

impl SearchState {

    /** creates the initial state (k >= 1).
    Vertices keep their initial color when it survives `keep_largest_classes`,
    the other ones take the first color unused by their already colored neighbors
    (or the least used one, ties broken randomly).
    */
    fn initialize(inst:Rc<dyn ColoringInstance>, k:usize, initial:Option<&[usize]>, rng:Rng) -> Self {
        let n = inst.nb_vertices();
        let mut partial:Vec<Option<usize>> = match initial {
            None => vec![None ; n],
            Some(colors) => keep_largest_classes(colors, k),
        };
        for v in inst.vertices() {
            if partial[v].is_some() { continue; }
            let mut counts = vec![0 ; k];
            for u in inst.neighbors(v) {
                if let Some(c) = partial[*u] { counts[c] += 1; }
            }
            let min_count = counts.iter().copied().min().unwrap_or(0);
            let color = if min_count == 0 {
                counts.iter().position(|e| *e == 0).unwrap_or(0)
            } else {
                let least_used:Vec<usize> = (0..k).filter(|c| counts[*c] == min_count).collect();
                least_used[rng.usize(0..least_used.len())]
            };
            partial[v] = Some(color);
        }
        let colors:Vec<usize> = partial.into_iter().map(|c| c.unwrap_or(0)).collect();
        // compute nb neigh colors & conflicts
        let mut nb_neigh_colors = vec![0 ; n*k];
        let mut nb_conflicting_edges = 0;
        for u in inst.vertices() {
            for v in inst.neighbors(u) {
                nb_neigh_colors[*v*k + colors[u]] += 1;
                if u < *v && colors[u] == colors[*v] { nb_conflicting_edges += 1; }
            }
        }
        Self { inst, k, colors, nb_neigh_colors, nb_conflicting_edges, rng }
    }

    /// number of conflicting edges incident to v
    fn vertex_nb_conflicts(&self, v:VertexId) -> usize {
        self.nb_neigh_colors[v*self.k + self.colors[v]]
    }

    /// vertices incident to a conflicting edge
    fn conflicting_vertices(&self) -> Vec<VertexId> {
        self.inst.vertices().filter(|v| self.vertex_nb_conflicts(*v) > 0).collect()
    }

    /// change the color of vertex v, to color c
    fn change_vertex_color(&mut self, v:VertexId, next_color:usize) {
        let previous_color = self.colors[v];
        if previous_color == next_color { return; }
        let k = self.k;
        for neigh in self.inst.neighbors(v) {
            self.nb_neigh_colors[neigh*k + previous_color] -= 1;
            self.nb_neigh_colors[neigh*k + next_color] += 1;
            if self.colors[*neigh] == previous_color { // remove conflict
                self.nb_conflicting_edges -= 1;
            }
            if self.colors[*neigh] == next_color { // add conflict
                self.nb_conflicting_edges += 1;
            }
        }
        self.colors[v] = next_color;
    }

    /// a random color different from the current color of v (k >= 2)
    fn random_other_color(&mut self, v:VertexId) -> usize {
        (self.colors[v] + 1 + self.rng.usize(0..self.k-1)) % self.k
    }

    /** best move among the candidates (ties broken randomly).
    A tabu move is accepted if it leads to strictly less than best_nb_conflicts.
    If every move is tabu, a random move is returned. Returns None if there is no move (k = 1).
    */
    fn best_decision(&mut self, tabu:&TabuColTenure, nb_iter:usize, best_nb_conflicts:usize) -> Option<Decision> {
        if self.k < 2 { return None; }
        let mut best_nodes:Vec<Decision> = Vec::new();
        let mut best_delta = i64::MAX;
        let conflicting_vertices = self.conflicting_vertices();
        for v in conflicting_vertices.iter().copied() {
            let c_prev = self.colors[v];
            let own = self.vertex_nb_conflicts(v) as i64;
            for c_next in (0..self.k).filter(|c| *c != c_prev) {
                let delta = self.nb_neigh_colors[v*self.k + c_next] as i64 - own;
                let nb_conflicts = self.nb_conflicting_edges as i64 + delta;
                if tabu.contains(v, c_next, nb_iter) && nb_conflicts >= best_nb_conflicts as i64 {
                    continue; // tabu and does not satisfy the aspiration criterion
                }
                if delta < best_delta {
                    best_nodes.clear();
                    best_delta = delta;
                }
                if delta == best_delta {
                    best_nodes.push(Decision { v, c_prev, c_next });
                }
            }
        }
        if best_nodes.is_empty() {
            if conflicting_vertices.is_empty() { return None; }
            let v = conflicting_vertices[self.rng.usize(0..conflicting_vertices.len())];
            let c_next = self.random_other_color(v);
            return Some(Decision { v, c_prev: self.colors[v], c_next });
        }
        Some(best_nodes[self.rng.usize(0..best_nodes.len())])
    }

    /// recolors a random subset of the conflicting vertices (at least one)
    fn perturb(&mut self) {
        if self.k < 2 { return; }
        let conflicting_vertices = self.conflicting_vertices();
        let mut nb_changed = 0;
        for v in conflicting_vertices.iter().copied() {
            if self.rng.bool() {
                let c = self.random_other_color(v);
                self.change_vertex_color(v, c);
                nb_changed += 1;
            }
        }
        if nb_changed == 0 && !conflicting_vertices.is_empty() {
            let v = conflicting_vertices[self.rng.usize(0..conflicting_vertices.len())];
            let c = self.random_other_color(v);
            self.change_vertex_color(v, c);
        }
    }
}


/** keeps the k largest color classes of a coloring (ties: smallest color first)
and renumbers them 0..k. Vertices of the other classes are left uncolored.
*/
pub fn keep_largest_classes(colors:&[usize], k:usize) -> Vec<Option<usize>> {
    let nb_classes = colors.iter().max().map_or(0, |c| c+1);
    let mut sizes = vec![0 ; nb_classes];
    for c in colors { sizes[*c] += 1; }
    let mut ranked:Vec<usize> = (0..nb_classes).filter(|c| sizes[*c] > 0).collect();
    ranked.sort_by(|a,b| sizes[*b].cmp(&sizes[*a]).then_with(|| a.cmp(b)));
    let mut new_color:Vec<Option<usize>> = vec![None ; nb_classes];
    for (i,c) in ranked.iter().take(k).enumerate() {
        new_color[*c] = Some(i);
    }
    colors.iter().map(|c| new_color[*c]).collect()
}


/**
Runs TabuCol with k colors. Stops as soon as a coloring without conflicts is found or
after params.nbmax iterations. After params.rep consecutive iterations without improving
the best number of conflicts, a random subset of the conflicting vertices is recolored.

An initial coloring can be given (for instance, a feasible coloring with more than k colors):
its k largest classes are kept, the remaining vertices are recolored greedily.

Returns the best coloring found, valid iff it has no conflicting edge.
*/
pub fn tabucol(
    inst:Rc<dyn ColoringInstance>,
    k:usize,
    params:&TabucolParams,
    initial:Option<&[usize]>,
) -> TabucolResult {
    let n = inst.nb_vertices();
    if n == 0 {
        return TabucolResult { colors: Vec::new(), valid: true, stats: TabucolStats::default() };
    }
    if k == 0 {
        warn!("tabucol: cannot color {} vertices with 0 colors", n);
        return TabucolResult { colors: vec![0 ; n], valid: false, stats: TabucolStats::default() };
    }
    let initial = match initial {
        Some(colors) if colors.len() != n => {
            warn!("tabucol: ignoring initial coloring of size {} (expected {})", colors.len(), n);
            None
        },
        _ => initial,
    };
    let rng = match params.seed {
        None => Rng::new(),
        Some(seed) => Rng::with_seed(seed),
    };
    let mut state = SearchState::initialize(inst, k, initial, rng);
    let mut tabu = TabuColTenure::new(params.tabu_size, n, k);
    let mut stats = TabucolStats::default();
    let mut best_nb_conflicts = state.nb_conflicting_edges;
    let mut best_colors = state.colors.clone();
    let mut nb_non_improving:usize = 0;
    debug!("tabucol: k={}\t initial conflicts: {}", k, best_nb_conflicts);
    while state.nb_conflicting_edges > 0 && stats.nb_iter < params.nbmax {
        let decision = match state.best_decision(&tabu, stats.nb_iter, best_nb_conflicts) {
            None => break,
            Some(d) => d,
        };
        tabu.insert(decision.v, decision.c_prev, stats.nb_iter); // make the decision tabu
        state.change_vertex_color(decision.v, decision.c_next);
        stats.nb_iter += 1;
        if state.nb_conflicting_edges < best_nb_conflicts {
            best_nb_conflicts = state.nb_conflicting_edges;
            best_colors = state.colors.clone();
            nb_non_improving = 0;
            debug!("tabucol: iter {}\t conflicts: {}", stats.nb_iter, best_nb_conflicts);
            continue;
        }
        nb_non_improving += 1;
        if params.rep > 0 && nb_non_improving >= params.rep {
            state.perturb();
            stats.nb_perturbations += 1;
            nb_non_improving = 0;
            debug!("tabucol: iter {}\t perturbation ({} conflicts)", stats.nb_iter, state.nb_conflicting_edges);
            if state.nb_conflicting_edges < best_nb_conflicts {
                best_nb_conflicts = state.nb_conflicting_edges;
                best_colors = state.colors.clone();
            }
        }
    }
    stats.best_nb_conflicts = best_nb_conflicts;
    TabucolResult { colors: best_colors, valid: best_nb_conflicts == 0, stats }
}


/// TabuCol algorithm bound to an instance and a number of colors
#[derive(Debug)]
pub struct Tabucol {
    /// instance to color
    inst: Rc<dyn ColoringInstance>,
    /// number of colors
    k: usize,
    /// tunables
    params: TabucolParams,
    /// optional initial coloring
    initial: Option<Colors>,
    /// last run
    result: Option<TabucolResult>,
}

impl Tabucol {
    /// creates a TabuCol solver with the default tunables
    pub fn new(inst:Rc<dyn ColoringInstance>, k:usize) -> Self {
        Self::with_params(inst, k, TabucolParams::default())
    }

    /// creates a TabuCol solver
    pub fn with_params(inst:Rc<dyn ColoringInstance>, k:usize, params:TabucolParams) -> Self {
        Self { inst, k, params, initial:None, result:None }
    }

    /// starts the search from a given coloring
    pub fn with_initial_solution(mut self, colors:Colors) -> Self {
        self.initial = Some(colors);
        self
    }

    /// target number of colors
    pub fn k(&self) -> usize { self.k }

    /// tunables
    pub fn params(&self) -> &TabucolParams { &self.params }

    /// statistics of the last run
    pub fn stats(&self) -> Option<&TabucolStats> { self.result.as_ref().map(|r| &r.stats) }
}

impl GraphColor for Tabucol {
    fn name(&self) -> &'static str { "tabucol" }

    fn instance(&self) -> &Rc<dyn ColoringInstance> { &self.inst }

    fn color(&mut self) -> Colors {
        let result = tabucol(self.inst.clone(), self.k, &self.params, self.initial.as_deref());
        if result.valid {
            info!("TabuCol: found a {}-coloring in {} iterations", self.k, result.stats.nb_iter);
        } else {
            info!(
                "TabuCol: no {}-coloring found in {} iterations (best: {} conflicts)",
                self.k, result.stats.nb_iter, result.stats.best_nb_conflicts
            );
        }
        let colors = result.colors.clone();
        self.result = Some(result);
        colors
    }

    fn coloring(&self) -> Option<&Colors> { self.result.as_ref().map(|r| &r.colors) }

    fn is_valid(&self) -> bool { self.result.as_ref().map_or(false, |r| r.valid) }
}
