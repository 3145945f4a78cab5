// src/graph/scc.rs
//! Strongly connected components via Tarjan's algorithm.
//!
//! Cycle membership falls out of the components: a node is in a cycle
//! iff its component has more than one member. Self-edges never exist
//! in our graphs (the builder excludes them), so single-node components
//! are always acyclic.

/// Computes the strongly connected components of a graph with nodes
/// `0..node_count` and the given forward adjacency lists.
///
/// Components come back in Tarjan's reverse-topological discovery order,
/// which is deterministic for a fixed input.
#[must_use]
pub fn components(node_count: usize, adjacency: &[Vec<usize>]) -> Vec<Vec<usize>> {
    let mut state = TarjanState {
        index: vec![None; node_count],
        lowlink: vec![0; node_count],
        on_stack: vec![false; node_count],
        stack: Vec::new(),
        next_index: 0,
        components: Vec::new(),
    };

    for node in 0..node_count {
        if state.index[node].is_none() {
            strongconnect(node, adjacency, &mut state);
        }
    }

    state.components
}

/// Marks every node that belongs to a component of size > 1.
#[must_use]
pub fn cycle_members(node_count: usize, adjacency: &[Vec<usize>]) -> Vec<bool> {
    let mut in_cycle = vec![false; node_count];
    for component in components(node_count, adjacency) {
        if component.len() > 1 {
            for node in component {
                in_cycle[node] = true;
            }
        }
    }
    in_cycle
}

struct TarjanState {
    index: Vec<Option<usize>>,
    lowlink: Vec<usize>,
    on_stack: Vec<bool>,
    stack: Vec<usize>,
    next_index: usize,
    components: Vec<Vec<usize>>,
}

fn strongconnect(node: usize, adjacency: &[Vec<usize>], state: &mut TarjanState) {
    state.index[node] = Some(state.next_index);
    state.lowlink[node] = state.next_index;
    state.next_index += 1;
    state.stack.push(node);
    state.on_stack[node] = true;

    for &next in &adjacency[node] {
        if state.index[next].is_none() {
            strongconnect(next, adjacency, state);
            state.lowlink[node] = state.lowlink[node].min(state.lowlink[next]);
        } else if state.on_stack[next] {
            if let Some(next_index) = state.index[next] {
                state.lowlink[node] = state.lowlink[node].min(next_index);
            }
        }
    }

    if state.lowlink[node] == state.index[node].unwrap_or(usize::MAX) {
        let mut component = Vec::new();
        while let Some(member) = state.stack.pop() {
            state.on_stack[member] = false;
            component.push(member);
            if member == node {
                break;
            }
        }
        state.components.push(component);
    }
}
