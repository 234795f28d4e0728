use hashbrown::HashMap;
use itertools::Itertools;
use petgraph::graph::NodeIndex;

use crate::{
    automaton::{Automaton, Label},
    error::{AutomatonError, Stage},
};

/// The partition of states used in Moore's minimization algorithm.
///
/// `table[state][i]` is the destination of `state` under the `i`-th letter of
/// the alphabet, so the refinement never has to go back to the graph.
/// Blocks keep their states in ascending order.
#[derive(Debug, Clone)]
struct Partition {
    table: Vec<Vec<usize>>,
    blocks: Vec<Vec<usize>>,
    block_of: Vec<usize>,
}

impl Partition {
    /// Starts with the accepting states and the non-accepting states as the
    /// two blocks, dropping whichever one is empty.
    fn new(table: Vec<Vec<usize>>, accepting: &[bool]) -> Self {
        let (finals, non_finals): (Vec<usize>, Vec<usize>) =
            (0..table.len()).partition(|&state| accepting[state]);

        let blocks = [finals, non_finals]
            .into_iter()
            .filter(|block| !block.is_empty())
            .collect_vec();

        let mut partition = Partition {
            block_of: vec![0; table.len()],
            table,
            blocks,
        };
        partition.index_blocks();
        partition
    }

    fn index_blocks(&mut self) {
        for (index, block) in self.blocks.iter().enumerate() {
            for &state in block {
                self.block_of[state] = index;
            }
        }
    }

    /// The block indices reached from `state`, one per letter.
    fn signature(&self, state: usize) -> Vec<usize> {
        self.table[state]
            .iter()
            .map(|&target| self.block_of[target])
            .collect_vec()
    }

    /// Runs one refinement pass over all blocks. Returns whether any block
    /// was split.
    fn refine(&mut self) -> bool {
        let mut next_blocks = Vec::with_capacity(self.blocks.len());
        let mut split = false;

        for block in &self.blocks {
            // sub-blocks in order of first appearance, for reproducible ids
            let mut classes: Vec<Vec<usize>> = vec![];
            let mut class_of_signature: HashMap<Vec<usize>, usize> = HashMap::new();

            for &state in block {
                let class = *class_of_signature
                    .entry(self.signature(state))
                    .or_insert_with(|| {
                        classes.push(vec![]);
                        classes.len() - 1
                    });
                classes[class].push(state);
            }

            if classes.len() > 1 {
                split = true;
            }
            next_blocks.extend(classes);
        }

        self.blocks = next_blocks;
        self.index_blocks();

        split
    }

    /// Moves the block containing state `0` to the front.
    fn pin_initial_block(&mut self) {
        let initial_block = self.block_of[0];
        self.blocks.swap(0, initial_block);
        self.index_blocks();
    }
}

impl Automaton {
    /// Minimizes a complete deterministic automaton with Moore's partition
    /// refinement.
    ///
    /// The result has one state per block of the coarsest stable partition.
    /// The block holding the initial state becomes state `0`.
    pub fn minimize(&self) -> Result<Automaton, AutomatonError> {
        if !self.is_deterministic() {
            return Err(AutomatonError::precondition(
                Stage::Minimization,
                "the automaton is not deterministic",
            ));
        }

        let mut table = Vec::with_capacity(self.state_count());
        for state in self.graph.node_indices() {
            let row = self
                .alphabet
                .letters()
                .iter()
                .map(|&letter| {
                    self.successor(state, letter)
                        .map(|target| target.index())
                        .ok_or_else(|| {
                            AutomatonError::precondition(
                                Stage::Minimization,
                                format!(
                                    "state {} has no transition for letter {:?}",
                                    state.index(),
                                    letter
                                ),
                            )
                        })
                })
                .collect::<Result<Vec<_>, _>>()?;
            table.push(row);
        }

        let accepting = self
            .graph
            .node_indices()
            .map(|state| self.graph[state].accepting)
            .collect_vec();

        let mut partition = Partition::new(table, &accepting);
        let mut rounds = 0;
        while partition.refine() {
            rounds += 1;
            tracing::trace!(
                "Refinement round {} produced {} blocks",
                rounds,
                partition.blocks.len()
            );
        }
        partition.pin_initial_block();

        let mut result = Automaton::with_states(
            self.alphabet.clone(),
            partition.blocks.len(),
            self.name.clone(),
        );

        for (index, block) in partition.blocks.iter().enumerate() {
            let from = NodeIndex::new(index);
            // blocks never mix accepting and non-accepting states
            let representative = block[0];
            result.graph[from].accepting = accepting[representative];

            let mut trap = !accepting[representative];
            for (position, &letter) in self.alphabet.letters().iter().enumerate() {
                let to = partition.block_of[partition.table[representative][position]];
                result.push_transition(from, Label::Letter(letter), NodeIndex::new(to));
                if to != index {
                    trap = false;
                }
            }

            if trap {
                result.set_trap(from);
            }
        }

        tracing::debug!(
            "Minimized {} states into {} states after {} refinement rounds",
            self.state_count(),
            result.state_count(),
            rounds
        );

        Ok(result)
    }
}
