//! NDFA construction from a transducer (`spec.md` §4.6): each transducer edge
//! of output length `k` becomes a chain of `k-1` fresh intermediate nodes
//! joined by single-symbol arcs; length-1 edges are copied directly. Built on
//! `petgraph::graph::DiGraph` so the DFA subset construction and DOT
//! rendering reuse its traversal rather than hand-rolled adjacency lists.

use petgraph::graph::{DiGraph, NodeIndex};

use padic_ifs::{IfsMap, Residue, Transducer};

/// An NDFA over the digit alphabet: nodes carry a display label (derived
/// from the transducer state they came from, or blank for intermediates),
/// edges carry the single digit symbol they're labelled with.
pub struct Ndfa<M: IfsMap> {
    graph: DiGraph<String, <M::Residue as Residue>::Digit>,
    initial: NodeIndex,
}

impl<M: IfsMap> Ndfa<M> {
    /// Expands every transducer edge into single-symbol arcs.
    pub fn build(transducer: &Transducer<M>) -> Self {
        let mut graph = DiGraph::new();
        let state_nodes: Vec<NodeIndex> = transducer
            .states()
            .iter()
            .map(|(residue, orientation)| graph.add_node(format!("({residue}, {orientation})")))
            .collect();

        for edge in transducer.edges() {
            let tail = state_nodes[edge.from];
            let head = state_nodes[edge.to];
            match edge.digits.as_slice() {
                [] => {
                    // k = 0 never occurs (maps require k >= 1), but an empty
                    // output would mean tail and head are the same state
                    // with no symbol consumed; nothing to add.
                }
                [only] => {
                    graph.add_edge(tail, head, *only);
                }
                digits => {
                    let mut prev = tail;
                    for &digit in &digits[..digits.len() - 1] {
                        let mid = graph.add_node(String::new());
                        graph.add_edge(prev, mid, digit);
                        prev = mid;
                    }
                    graph.add_edge(prev, head, *digits.last().unwrap());
                }
            }
        }

        Ndfa { graph, initial: state_nodes[transducer.initial_index()] }
    }

    pub fn graph(&self) -> &DiGraph<String, <M::Residue as Residue>::Digit> {
        &self.graph
    }

    pub fn initial(&self) -> NodeIndex {
        self.initial
    }
}
