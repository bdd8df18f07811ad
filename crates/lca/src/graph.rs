/// Rooted tree stored as compressed child lists.
///
/// Children keep the order their edges were supplied in, which fixes the
/// order of the Euler tour.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RootedTree {
    root: Option<usize>,
    offsets: Vec<usize>,
    children: Vec<usize>,
}

impl RootedTree {
    pub fn empty() -> Self {
        Self {
            root: None,
            offsets: vec![0],
            children: Vec::new(),
        }
    }

    /// Builds a tree rooted at vertex 0 from `(parent, child)` edges.
    pub fn from_edges(vertex_count: usize, edges: &[(usize, usize)]) -> Self {
        Self::with_root(vertex_count, 0, edges)
    }

    pub fn with_root(vertex_count: usize, root: usize, edges: &[(usize, usize)]) -> Self {
        if vertex_count == 0 {
            assert!(edges.is_empty(), "edges given for a tree without vertices");
            return Self::empty();
        }
        assert!(root < vertex_count, "root out of range");

        let mut out_deg = vec![0_usize; vertex_count];
        for &(parent, child) in edges {
            assert!(parent < vertex_count, "parent vertex out of range");
            assert!(child < vertex_count, "child vertex out of range");
            out_deg[parent] += 1;
        }

        let mut offsets = vec![0_usize; vertex_count + 1];
        for v in 0..vertex_count {
            offsets[v + 1] = offsets[v] + out_deg[v];
        }

        let mut children = vec![0_usize; edges.len()];
        let mut cursor = offsets[..vertex_count].to_vec();
        for &(parent, child) in edges {
            children[cursor[parent]] = child;
            cursor[parent] += 1;
        }

        Self {
            root: Some(root),
            offsets,
            children,
        }
    }

    /// Builds a tree from a parent array; the single `None` entry is the root.
    pub fn from_parents(parents: &[Option<usize>]) -> Self {
        if parents.is_empty() {
            return Self::empty();
        }
        let mut root = None;
        let mut edges = Vec::with_capacity(parents.len() - 1);
        for (v, parent) in parents.iter().enumerate() {
            match *parent {
                Some(p) => edges.push((p, v)),
                None => {
                    assert!(root.is_none(), "more than one root");
                    root = Some(v);
                }
            }
        }
        let root = root.unwrap_or_else(|| panic!("no root in parent array"));
        Self::with_root(parents.len(), root, &edges)
    }

    #[inline]
    pub fn root(&self) -> Option<usize> {
        self.root
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.offsets.len() - 1
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertex_count() == 0
    }

    #[inline]
    pub fn edge_count(&self) -> usize {
        self.children.len()
    }

    #[inline]
    pub fn children(&self, v: usize) -> &[usize] {
        &self.children[self.offsets[v]..self.offsets[v + 1]]
    }

    #[inline]
    pub fn out_degree(&self, v: usize) -> usize {
        self.offsets[v + 1] - self.offsets[v]
    }
}

impl Default for RootedTree {
    fn default() -> Self {
        Self::empty()
    }
}
