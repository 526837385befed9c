//! The transducer built by chasing digit-shift residues of an IFS (`spec.md`
//! §3.4/§4.5): a state is `(residue, orientation)`; exploring from the
//! initial state with a deterministic, insertion-ordered worklist produces a
//! finite state set and, for each state and map, exactly one outgoing edge.

use std::collections::{HashMap, VecDeque};

use crate::error::IfsError;
use crate::ifs_map::IfsMap;
use crate::residue::{shift, Residue};

/// `(residue, orientation)`, per `spec.md` §3.4.
pub type State<M> = (<M as IfsMap>::Residue, <M as IfsMap>::Orientation);

/// One transducer transition: `states[from] --maps[map_index]/digits--> states[to]`.
#[derive(Debug, Clone)]
pub struct Edge<M: IfsMap> {
    pub from: usize,
    pub to: usize,
    pub map_index: usize,
    pub digits: Vec<<M::Residue as Residue>::Digit>,
}

/// The explored transducer: states in discovery order, and one edge per
/// `(state, map)` pair, also in discovery order.
pub struct Transducer<M: IfsMap> {
    p: u64,
    maps: Vec<M>,
    states: Vec<State<M>>,
    edges: Vec<Edge<M>>,
}

impl<M: IfsMap> Transducer<M> {
    /// Explores the transducer reachable from `(0, initial_orientation)`,
    /// failing with [`IfsError::Unbounded`] if the state set would exceed
    /// `cap` (the finiteness invariant of `spec.md` §3.4(i) is assumed to
    /// hold for well-formed contracting IFSs; `cap` is the enforcement
    /// mechanism for ill-formed ones per `spec.md` §7).
    pub fn build(p: u64, maps: Vec<M>, cap: usize) -> Result<Self, IfsError> {
        let initial: State<M> = (M::Residue::zero(p), M::initial_orientation());
        let mut states = vec![initial.clone()];
        let mut index_of: HashMap<State<M>, usize> = HashMap::new();
        index_of.insert(initial, 0);
        let mut worklist: VecDeque<usize> = VecDeque::new();
        worklist.push_back(0);
        let mut edges = Vec::new();

        while let Some(state_idx) = worklist.pop_front() {
            let (residue, orientation) = states[state_idx].clone();
            for (map_index, map) in maps.iter().enumerate() {
                let sum = residue.add(map.constant())?;
                let y = map.orient(&sum, orientation);
                let (next_residue, digits) = shift(&y, map.k())?;
                let next_orientation = map.compose_orientation(orientation);
                let next_state: State<M> = (next_residue, next_orientation);

                let to = match index_of.get(&next_state) {
                    Some(&idx) => idx,
                    None => {
                        let idx = states.len();
                        if idx >= cap {
                            return Err(IfsError::Unbounded(cap));
                        }
                        states.push(next_state.clone());
                        index_of.insert(next_state, idx);
                        worklist.push_back(idx);
                        idx
                    }
                };
                edges.push(Edge { from: state_idx, to, map_index, digits });
            }
        }

        Ok(Transducer { p, maps, states, edges })
    }

    pub fn p(&self) -> u64 {
        self.p
    }

    pub fn maps(&self) -> &[M] {
        &self.maps
    }

    pub fn states(&self) -> &[State<M>] {
        &self.states
    }

    pub fn edges(&self) -> &[Edge<M>] {
        &self.edges
    }

    pub fn initial_index(&self) -> usize {
        0
    }
}
