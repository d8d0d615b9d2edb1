//! small graph families used by the unit tests

use std::rc::Rc;

use crate::color::{ColoringInstance, VertexId};
use crate::compact_instance::CompactInstance;

fn build(n:usize, edges:&[(VertexId,VertexId)]) -> Rc<dyn ColoringInstance> {
    Rc::new(CompactInstance::from_edges(n, edges).unwrap())
}

/// n vertices, no edge
pub fn empty(n:usize) -> Rc<dyn ColoringInstance> { build(n, &[]) }

/// complete graph K_n
pub fn complete(n:usize) -> Rc<dyn ColoringInstance> {
    let mut edges = Vec::new();
    for i in 0..n {
        for j in 0..i { edges.push((j,i)); }
    }
    build(n, &edges)
}

/// cycle C_n
pub fn cycle(n:usize) -> Rc<dyn ColoringInstance> {
    let edges:Vec<_> = (0..n).map(|i| (i, (i+1)%n)).collect();
    build(n, &edges)
}

/// star: vertex 0 is the center, m leaves
pub fn star(m:usize) -> Rc<dyn ColoringInstance> {
    let edges:Vec<_> = (1..=m).map(|i| (0,i)).collect();
    build(m+1, &edges)
}

/// complete bipartite graph K_{a,b}
pub fn complete_bipartite(a:usize, b:usize) -> Rc<dyn ColoringInstance> {
    let mut edges = Vec::new();
    for i in 0..a {
        for j in a..a+b { edges.push((i,j)); }
    }
    build(a+b, &edges)
}

/// Petersen graph (χ = 3)
pub fn petersen() -> Rc<dyn ColoringInstance> {
    let mut edges = Vec::new();
    for i in 0..5 {
        edges.push((i, (i+1)%5)); // outer cycle
        edges.push((i, i+5)); // spokes
        edges.push((5+i, 5+(i+2)%5)); // inner pentagram
    }
    build(10, &edges)
}

/// chordal graph: a triangle strip (fan) with a pendant vertex (χ = 3)
pub fn triangle_strip(n:usize) -> Rc<dyn ColoringInstance> {
    let mut edges = Vec::new();
    for i in 1..n {
        edges.push((i-1, i));
        if i >= 2 { edges.push((i-2, i)); }
    }
    edges.push((0, n));
    build(n+1, &edges)
}

/// random graph G(n,p) generated with a seeded RNG
pub fn random(n:usize, p:f64, seed:u64) -> Rc<dyn ColoringInstance> {
    let rng = fastrand::Rng::with_seed(seed);
    let mut edges = Vec::new();
    for i in 0..n {
        for j in 0..i {
            if rng.f64() < p { edges.push((j,i)); }
        }
    }
    build(n, &edges)
}

/// random tree: vertex i > 0 is attached to a random vertex in 0..i
pub fn random_tree(n:usize, seed:u64) -> Rc<dyn ColoringInstance> {
    let rng = fastrand::Rng::with_seed(seed);
    let edges:Vec<_> = (1..n).map(|i| (rng.usize(0..i), i)).collect();
    build(n, &edges)
}

/** random k-tree on n >= k+1 vertices (chordal, χ = k+1):
starts from K_{k+1}, then each new vertex is attached to a random k-clique.
*/
pub fn random_ktree(k:usize, n:usize, seed:u64) -> Rc<dyn ColoringInstance> {
    let rng = fastrand::Rng::with_seed(seed);
    let mut edges = Vec::new();
    for i in 0..=k {
        for j in 0..i { edges.push((j,i)); }
    }
    // k-cliques of the initial K_{k+1}
    let mut cliques:Vec<Vec<VertexId>> = (0..=k)
        .map(|skip| (0..=k).filter(|v| *v != skip).collect())
        .collect();
    for v in k+1..n {
        let clique = cliques[rng.usize(0..cliques.len())].clone();
        for u in &clique { edges.push((*u, v)); }
        for skip in 0..clique.len() {
            let mut new_clique = clique.clone();
            new_clique[skip] = v;
            cliques.push(new_clique);
        }
    }
    build(n, &edges)
}

/// random bipartite graph: sides 0..a and a..a+b, each edge across present with probability p
pub fn random_bipartite(a:usize, b:usize, p:f64, seed:u64) -> Rc<dyn ColoringInstance> {
    let rng = fastrand::Rng::with_seed(seed);
    let mut edges = Vec::new();
    for i in 0..a {
        for j in a..a+b {
            if rng.f64() < p { edges.push((i,j)); }
        }
    }
    build(a+b, &edges)
}

/// a few graphs of different shapes (used for properties that hold on every graph)
pub fn zoo() -> Vec<Rc<dyn ColoringInstance>> {
    vec![
        empty(0), empty(5), complete(1), complete(6), cycle(4), cycle(7), star(6),
        complete_bipartite(3,4), petersen(), triangle_strip(8),
        random(30, 0.1, 1), random(40, 0.3, 2), random(60, 0.5, 3),
        random_tree(15, 4), random_ktree(3, 20, 5), random_bipartite(8, 5, 0.4, 6),
    ]
}
