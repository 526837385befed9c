//! DFA construction by classical subset construction over an [`Ndfa`]
//! (`spec.md` §4.6): DFA states are subsets of NDFA nodes, keyed by their
//! sorted node-index tuple so state identity (and therefore state-index
//! reuse) is independent of discovery order within a BFS round, while the
//! BFS itself stays insertion-ordered for reproducible indices.

use std::collections::{BTreeMap, BTreeSet, HashMap, VecDeque};

use petgraph::graph::NodeIndex;

use padic_ifs::{IfsMap, Residue};

use crate::ndfa::Ndfa;

/// A determinised automaton: `states[i]` is the sorted NDFA subset that DFA
/// state `i` stands for; `edges` has exactly one entry per `(state, symbol)`
/// pair with a non-empty successor.
pub struct Dfa<Sym> {
    states: Vec<Vec<NodeIndex>>,
    edges: Vec<(usize, usize, Sym)>,
    initial: usize,
}

impl<Sym: Copy + Eq + Ord + std::hash::Hash> Dfa<Sym> {
    /// Subset-constructs a DFA from `ndfa`'s nodes and single-symbol edges.
    pub fn build<M>(ndfa: &Ndfa<M>) -> Self
    where
        M: IfsMap,
        M::Residue: Residue<Digit = Sym>,
    {
        let graph = ndfa.graph();
        let initial_subset = vec![ndfa.initial()];

        let mut states: Vec<Vec<NodeIndex>> = vec![initial_subset.clone()];
        let mut index_of: HashMap<Vec<NodeIndex>, usize> = HashMap::new();
        index_of.insert(initial_subset, 0);
        let mut worklist: VecDeque<usize> = VecDeque::from([0usize]);
        let mut edges = Vec::new();

        while let Some(idx) = worklist.pop_front() {
            let subset = states[idx].clone();
            let mut successors: BTreeMap<Sym, BTreeSet<NodeIndex>> = BTreeMap::new();
            for &node in &subset {
                for edge in graph.edges(node) {
                    successors.entry(*edge.weight()).or_default().insert(edge.target());
                }
            }
            for (symbol, targets) in successors {
                if targets.is_empty() {
                    continue;
                }
                let target_vec: Vec<NodeIndex> = targets.into_iter().collect();
                let to = match index_of.get(&target_vec) {
                    Some(&existing) => existing,
                    None => {
                        let new_idx = states.len();
                        states.push(target_vec.clone());
                        index_of.insert(target_vec, new_idx);
                        worklist.push_back(new_idx);
                        new_idx
                    }
                };
                edges.push((idx, to, symbol));
            }
        }

        Dfa { states, edges, initial: 0 }
    }

    pub fn states(&self) -> &[Vec<NodeIndex>] {
        &self.states
    }

    pub fn edges(&self) -> &[(usize, usize, Sym)] {
        &self.edges
    }

    pub fn initial(&self) -> usize {
        self.initial
    }

    /// `M[i][j]` is the number of symbols for which DFA state `i` transitions
    /// to DFA state `j` (`spec.md` §4.6's "counts parallel labelled edges").
    pub fn adjacency_matrix(&self) -> Vec<Vec<u64>> {
        let n = self.states.len();
        let mut matrix = vec![vec![0u64; n]; n];
        for &(from, to, _) in &self.edges {
            matrix[from][to] += 1;
        }
        matrix
    }

    /// For every state, at most one successor per symbol (`spec.md` §8
    /// invariant 10). Exposed for tests and the CLI's own sanity checks.
    pub fn is_deterministic(&self) -> bool {
        let mut seen: BTreeSet<(usize, Sym)> = BTreeSet::new();
        self.edges.iter().all(|&(from, _, symbol)| seen.insert((from, symbol)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use padic_core::PAdic;
    use padic_ifs::{RealMap, Transducer};

    #[test]
    fn s4_binary_ifs_is_a_single_state_two_loop_dfa() {
        let p = 2;
        let f0 = RealMap::new("A", PAdic::zero(p), 1, 1).unwrap();
        let f1 = RealMap::new("B", PAdic::from_rational(p, 1, 1).unwrap(), 1, 1).unwrap();
        let t = Transducer::build(p, vec![f0, f1], 64).unwrap();
        let ndfa = Ndfa::build(&t);
        let dfa = Dfa::build(&ndfa);
        assert_eq!(dfa.states().len(), 1);
        assert_eq!(dfa.adjacency_matrix(), vec![vec![2]]);
        assert!(dfa.is_deterministic());
    }

    #[test]
    fn dfa_is_always_deterministic() {
        let p = 3;
        let a = RealMap::new("A", PAdic::from_rational(p, 1, 2).unwrap(), 1, 1).unwrap();
        let b = RealMap::new("B", PAdic::from_rational(p, -1, 2).unwrap(), 1, -1).unwrap();
        let t = Transducer::build(p, vec![a, b], 256).unwrap();
        let ndfa = Ndfa::build(&t);
        let dfa = Dfa::build(&ndfa);
        assert!(dfa.is_deterministic());
    }
}
