use crate::color::{ColoringInstance, VertexId};
use crate::error::GraphError;

/** models a Graph Coloring instance (adjacency lists over vertex indices).
Built once, never mutated by the algorithms.
*/
#[derive(Debug, Clone)]
pub struct CompactInstance {
    /// nb vertices
    n: usize,
    /// edges of the graph (u < v)
    edges: Vec<(VertexId,VertexId)>,
    /// adj_list[i]: list of vertices adjacent to i
    adj_list: Vec<Vec<VertexId>>,
}

impl ColoringInstance for CompactInstance {
    fn nb_vertices(&self) -> usize { self.n }

    fn nb_edges(&self) -> usize { self.edges.len() }

    fn neighbors(&self, u:VertexId) -> &[VertexId] { &self.adj_list[u] }

    fn edges(&self) -> &[(VertexId, VertexId)] { &self.edges }
}


impl CompactInstance {

    /// builds the edge list
    fn build_edges(adj_list:&[Vec<VertexId>]) -> Vec<(VertexId,VertexId)> {
        let mut res = Vec::new();
        for (i,l) in adj_list.iter().enumerate() {
            for j in l {
                if i < *j {
                    res.push((i,*j));
                }
            }
        }
        res
    }

    /** constructor using an adjacency list.
    An edge listed in one direction only is added in the other direction,
    duplicates are removed (first occurrence kept).
    Fails on self-loops and on neighbors outside of 0..n.
    */
    pub fn new(adj_list:Vec<Vec<VertexId>>) -> Result<Self, GraphError> {
        let n = adj_list.len();
        for (u,l) in adj_list.iter().enumerate() {
            for v in l {
                if *v >= n {
                    return Err(GraphError::NeighborOutOfRange { vertex:u, neighbor:*v, n });
                }
                if *v == u {
                    return Err(GraphError::SelfLoop { vertex:u.to_string() });
                }
            }
        }
        // symmetrize
        let mut sym = adj_list.clone();
        for (u,l) in adj_list.iter().enumerate() {
            for v in l {
                sym[*v].push(u);
            }
        }
        // remove duplicates (last_seen[v] == u+1 iff v already in the list of u)
        let mut last_seen = vec![0 ; n];
        for (u,l) in sym.iter_mut().enumerate() {
            l.retain(|v| {
                let keep = last_seen[*v] != u+1;
                last_seen[*v] = u+1;
                keep
            });
        }
        let edges = Self::build_edges(&sym);
        Ok(Self { n, edges, adj_list:sym })
    }

    /// creates an instance from an edge list over n vertices
    pub fn from_edges(n:usize, edges:&[(VertexId,VertexId)]) -> Result<Self, GraphError> {
        let mut adj_list = vec![Vec::new() ; n];
        for (u,v) in edges {
            if let Some(w) = [*u, *v].iter().find(|w| **w >= n) {
                return Err(GraphError::VertexOutOfRange { vertex:*w, n });
            }
            adj_list[*u].push(*v);
        }
        Self::new(adj_list)
    }
}
