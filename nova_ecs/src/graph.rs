use std::collections::{HashMap, HashSet};

use crate::{Bitset, EcsError, Label, Ordering};

/// Anything that can participate in the dependency graph: a system
/// descriptor or a stage, both of which carry a label list and an ordering.
pub trait GraphNode {
    fn labels(&self) -> &[Label];
    fn ordering(&self) -> &Ordering;
}

/// `graph[i][j]` holds the labels that caused the edge `i -> j`, meaning
/// "node `j` must run before node `i`" (`i` depends on `j`).
pub type Graph = HashMap<usize, HashMap<usize, HashSet<Label>>>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownLabelError(pub Label);

/// Builds the dependency graph for `nodes`, per §4.4: every `after(L)`
/// constraint on node `i` adds an edge from `i` to each node also labeled
/// `L`; every `before(L)` constraint adds an edge the other way.
pub fn build_dependency_graph<N: GraphNode>(nodes: &[N]) -> Result<Graph, UnknownLabelError> {
    let mut label_index: HashMap<Label, Bitset> = HashMap::new();
    for (index, node) in nodes.iter().enumerate() {
        for label in node.labels() {
            label_index.entry(label.clone()).or_default().insert(index);
        }
    }

    let mut graph: Graph = HashMap::new();
    for index in 0..nodes.len() {
        graph.entry(index).or_default();
    }

    for (index, node) in nodes.iter().enumerate() {
        for label in &node.ordering().after {
            let dependents = label_index
                .get(label)
                .ok_or_else(|| UnknownLabelError(label.clone()))?;
            for dependency in dependents.ones() {
                graph
                    .entry(index)
                    .or_default()
                    .entry(dependency)
                    .or_default()
                    .insert(label.clone());
            }
        }
        for label in &node.ordering().before {
            let dependents = label_index
                .get(label)
                .ok_or_else(|| UnknownLabelError(label.clone()))?;
            for successor in dependents.ones() {
                graph
                    .entry(successor)
                    .or_default()
                    .entry(index)
                    .or_default()
                    .insert(label.clone());
            }
        }
    }

    Ok(graph)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphCyclesError {
    /// The cycle, as a sequence of node indices along the path, closed back
    /// to the first index.
    pub cycle: Vec<usize>,
}

impl GraphCyclesError {
    /// Renders the cycle as the human-readable trace required by §7: a
    /// header naming the first node, then for each subsequent node in the
    /// cycle a `` - `{name}` `` line followed by `  wants to be after`, and a
    /// final `` - `{name}` `` line closing the loop back to the first node.
    pub fn render(&self, names: impl Fn(usize) -> String) -> String {
        let Some(&first) = self.cycle.first() else {
            return String::new();
        };
        let mut message = format!("Found a dependency cycle in {}:\n", names(first));
        for &index in &self.cycle[1..] {
            message.push_str(&format!("- `{}`\n  wants to be after\n", names(index)));
        }
        message.push_str(&format!("- `{}`\n", names(first)));
        message
    }
}

/// Depth-first topological sort with cycle detection, per §4.4.
///
/// Unvisited nodes are always processed starting from the smallest remaining
/// index, which is what gives nodes with no ordering constraints their
/// input-order tie-break (P2).
pub fn topological_order(graph: &Graph, node_count: usize) -> Result<Vec<usize>, GraphCyclesError> {
    let mut visited = vec![false; node_count];
    let mut sorted = Vec::with_capacity(node_count);
    let mut path: Vec<usize> = Vec::new();

    for start in 0..node_count {
        if !visited[start] {
            visit(start, graph, &mut visited, &mut path, &mut sorted)?;
        }
    }

    Ok(sorted)
}

fn visit(
    node: usize,
    graph: &Graph,
    visited: &mut [bool],
    path: &mut Vec<usize>,
    sorted: &mut Vec<usize>,
) -> Result<(), GraphCyclesError> {
    if let Some(position) = path.iter().position(|&n| n == node) {
        let mut cycle = path[position..].to_vec();
        cycle.push(node);
        return Err(GraphCyclesError { cycle });
    }
    if visited[node] {
        return Ok(());
    }

    path.push(node);
    if let Some(dependencies) = graph.get(&node) {
        let mut dependency_indices: Vec<usize> = dependencies.keys().copied().collect();
        dependency_indices.sort_unstable();
        for dependency in dependency_indices {
            visit(dependency, graph, visited, path, sorted)?;
        }
    }
    path.pop();

    visited[node] = true;
    sorted.push(node);
    Ok(())
}

/// Reorders `nodes` according to `order`, a permutation of `0..nodes.len()`.
///
/// Used to apply a [`topological_order`] result back onto the `Vec` it was
/// computed from, without requiring `N: Clone`.
pub fn reorder<N>(nodes: Vec<N>, order: &[usize]) -> Vec<N> {
    let mut slots: Vec<Option<N>> = nodes.into_iter().map(Some).collect();
    order
        .iter()
        .map(|&index| slots[index].take().expect("topological order visits each index once"))
        .collect()
}

/// Builds the dependency graph for `nodes` and returns them reordered
/// topologically, converting any failure into the scheduler's public error
/// type. `name_of` is used only to render a [`GraphCyclesError`]'s trace.
pub fn sort<N: GraphNode>(nodes: Vec<N>, name_of: impl Fn(&N) -> String) -> Result<Vec<N>, EcsError> {
    let graph = build_dependency_graph(&nodes).map_err(|UnknownLabelError(label)| EcsError::UnknownLabel(label))?;
    let order = topological_order(&graph, nodes.len()).map_err(|err| {
        let message = err.render(|index| name_of(&nodes[index]));
        EcsError::DependencyCycle {
            cycle: err.cycle,
            message,
        }
    })?;
    Ok(reorder(nodes, &order))
}
