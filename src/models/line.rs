/// Marker placed directly before a line's label.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Connector {
    /// More siblings follow at this level.
    Branch,
    /// Last sibling at this level.
    Terminal,
}

impl Connector {
    /// Whether descendants of this line still sit beside later siblings.
    pub fn has_more(self) -> bool {
        self == Connector::Branch
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum LineLabel<'a> {
    Entry(&'a str),
    PermissionDenied,
    Unreadable(String),
}

/// One output line. `ancestors` holds, outermost first, whether each
/// enclosing directory has further siblings below it; it is only turned
/// into indentation when the line is written.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TreeLine<'a> {
    pub ancestors: &'a [bool],
    pub connector: Connector,
    pub label: LineLabel<'a>,
}
