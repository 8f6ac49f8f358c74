/// Per-depth context inherited down the tree during a walk.
///
/// A value pushed with `open` for a node at depth `d` is what every node at
/// depth `d + 1` below it sees from `current`. Frames left behind by a branch
/// that has been fully walked are discarded by `enter`, so a node whose
/// parent opened nothing (a pass-through node) inherits from the nearest
/// ancestor that did.
#[derive(Debug)]
pub struct DepthStack<T> {
    root: T,
    frames: Vec<(usize, T)>,
}

impl<T> DepthStack<T> {
    /// Stack whose depth 0 context is `root`
    pub fn new(root: T) -> Self {
        DepthStack {
            root,
            frames: Vec::new(),
        }
    }

    /// Move to a node visited at `depth`
    pub fn enter(&mut self, depth: usize) {
        while matches!(self.frames.last(), Some((d, _)) if *d > depth) {
            self.frames.pop();
        }
    }

    pub fn current(&self) -> &T {
        self.frames.last().map_or(&self.root, |(_, value)| value)
    }

    /// Set the context for the children of the node entered at `depth`
    pub fn open(&mut self, depth: usize, value: T) {
        self.enter(depth);
        self.frames.push((depth + 1, value));
    }
}
