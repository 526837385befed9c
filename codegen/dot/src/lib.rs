//! Graphviz DOT rendering for transducers, NDFAs, and DFAs, grounded on the
//! teacher's `codegen/ace/src/dot.rs`: a hand-rolled `writeln!`-based emitter,
//! no graph-rendering dependency. Matches how
//! `original_source/transducer_viewer.py` builds up its `graphviz.Digraph`
//! (one node declaration per state, one edge declaration per arc).

use std::fmt::Write;

use petgraph::graph::DiGraph;
use petgraph::visit::{EdgeRef, IntoEdgeReferences};

use padic_automaton::{Dfa, Ndfa};
use padic_ifs::{IfsMap, Residue, Transducer};

/// `digraph G { ... }` source for a transducer: one node per `(residue,
/// orientation)` state, one labelled edge per map application.
pub fn transducer_to_dot<M: IfsMap>(transducer: &Transducer<M>) -> String
where
    M::Residue: Residue,
{
    let mut out = String::new();
    let _ = writeln!(out, "digraph G {{");
    for (index, (residue, orientation)) in transducer.states().iter().enumerate() {
        let _ = writeln!(out, "    s{index} [label=\"({residue}, {orientation})\"]");
    }
    for edge in transducer.edges() {
        let label: String = edge
            .digits
            .iter()
            .map(|&digit| <M::Residue as Residue>::digit_label(digit))
            .collect::<Vec<_>>()
            .join("");
        let map_name = transducer.maps()[edge.map_index].name();
        let _ = writeln!(out, "    s{} -> s{} [label=\"{}/{}\"]", edge.from, edge.to, map_name, label);
    }
    let _ = writeln!(out, "}}");
    out
}

/// `digraph G { ... }` source for an NDFA: nodes keep their transducer-state
/// labels (or blank, for digit-chain intermediates), edges carry one digit
/// symbol each.
pub fn ndfa_to_dot<M: IfsMap>(ndfa: &Ndfa<M>) -> String
where
    M::Residue: Residue,
{
    graph_to_dot(ndfa.graph(), |digit| <M::Residue as Residue>::digit_label(digit))
}

fn graph_to_dot<N: std::fmt::Display, E: Copy>(
    graph: &DiGraph<N, E>,
    label: impl Fn(E) -> String,
) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "digraph G {{");
    for node in graph.node_indices() {
        let _ = writeln!(out, "    n{} [label=\"{}\"]", node.index(), graph[node]);
    }
    for edge in graph.edge_references() {
        let _ =
            writeln!(out, "    n{} -> n{} [label=\"{}\"]", edge.source().index(), edge.target().index(), label(*edge.weight()));
    }
    let _ = writeln!(out, "}}");
    out
}

/// `digraph G { ... }` source for a DFA: nodes are subset indices, edges
/// carry one digit symbol each (DFA edges are already deterministic, so no
/// parallel-edge collapsing is needed for the drawing itself). Takes a
/// labelling closure rather than requiring `Sym: Display`, since a complex
/// map's symbol type (a Gaussian digit pair) has no natural `Display`.
pub fn dfa_to_dot<Sym: Copy + Eq + Ord + std::hash::Hash>(
    dfa: &Dfa<Sym>,
    label: impl Fn(Sym) -> String,
) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "digraph G {{");
    for index in 0..dfa.states().len() {
        let _ = writeln!(out, "    d{index} [label=\"{index}\"]");
    }
    for &(from, to, symbol) in dfa.edges() {
        let _ = writeln!(out, "    d{from} -> d{to} [label=\"{}\"]", label(symbol));
    }
    let _ = writeln!(out, "}}");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use padic_core::PAdic;
    use padic_ifs::RealMap;

    #[test]
    fn transducer_dot_has_one_node_per_state_and_one_edge_per_map() {
        let p = 2;
        let f0 = RealMap::new("A", PAdic::zero(p), 1, 1).unwrap();
        let f1 = RealMap::new("B", PAdic::from_rational(p, 1, 1).unwrap(), 1, 1).unwrap();
        let t = Transducer::build(p, vec![f0, f1], 64).unwrap();
        let dot = transducer_to_dot(&t);
        assert!(dot.starts_with("digraph G {"));
        assert_eq!(dot.matches("-> s").count(), t.edges().len());
    }

    #[test]
    fn dfa_dot_has_one_node_per_state() {
        let p = 2;
        let f0 = RealMap::new("A", PAdic::zero(p), 1, 1).unwrap();
        let f1 = RealMap::new("B", PAdic::from_rational(p, 1, 1).unwrap(), 1, 1).unwrap();
        let t = Transducer::build(p, vec![f0, f1], 64).unwrap();
        let ndfa = Ndfa::build(&t);
        let dfa = Dfa::build(&ndfa);
        let dot = dfa_to_dot(&dfa, |digit: u64| digit.to_string());
        assert_eq!(dot.matches("[label=").count(), dfa.states().len() + dfa.edges().len());
    }
}
