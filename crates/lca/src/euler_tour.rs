use crate::RootedTree;

/// Vertices and depths seen by a depth-first walk, recorded on entry to a
/// vertex and again on every return to it from a child.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EulerTour {
    pub vertices: Vec<usize>,
    pub depths: Vec<usize>,
}

impl EulerTour {
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}

/// Walks `tree` from its root and returns the `2n - 1` step tour.
///
/// Panics if a vertex is reached twice or some vertex is unreachable from
/// the root, i.e. the input is not a single rooted tree.
pub fn euler_tour(tree: &RootedTree) -> EulerTour {
    let Some(root) = tree.root() else {
        return EulerTour::default();
    };
    let n = tree.vertex_count();
    let len = 2 * n - 1;

    let mut vertices = Vec::with_capacity(len);
    let mut depths = Vec::with_capacity(len);
    let mut visited = vec![false; n];
    let mut reached = 1_usize;
    // (vertex, position of the next child to descend into)
    let mut stack: Vec<(usize, usize)> = Vec::with_capacity(n);

    visited[root] = true;
    vertices.push(root);
    depths.push(0);
    stack.push((root, 0));

    while let Some(top) = stack.last_mut() {
        let (v, next) = *top;
        let children = tree.children(v);
        if next < children.len() {
            top.1 += 1;
            let child = children[next];
            assert!(!visited[child], "vertex {child} reached twice; input is not a tree");
            visited[child] = true;
            reached += 1;
            vertices.push(child);
            depths.push(stack.len());
            stack.push((child, 0));
        } else {
            stack.pop();
            if let Some(&(parent, _)) = stack.last() {
                vertices.push(parent);
                depths.push(stack.len() - 1);
            }
        }
    }

    assert!(
        reached == n,
        "{} of {n} vertices unreachable from root {root}",
        n - reached
    );
    debug_assert_eq!(vertices.len(), len);

    EulerTour { vertices, depths }
}
