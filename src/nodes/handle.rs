//! Connection handles on a node

/// Which end of an edge a handle accepts
///
/// Flow is vertical: the target handle sits on top of a node, the source
/// handle on the bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandleKind {
    Target,
    Source,
}

impl HandleKind {
    /// Checks if this handle receives edges
    pub fn is_target(&self) -> bool {
        matches!(self, HandleKind::Target)
    }

    /// Checks if this handle emits edges
    pub fn is_source(&self) -> bool {
        matches!(self, HandleKind::Source)
    }

    /// The handle kind an edge started here must end on
    pub fn opposite(&self) -> Self {
        match self {
            HandleKind::Target => HandleKind::Source,
            HandleKind::Source => HandleKind::Target,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handle_kinds() {
        assert!(HandleKind::Target.is_target());
        assert!(!HandleKind::Target.is_source());
        assert!(HandleKind::Source.is_source());
        assert_eq!(HandleKind::Source.opposite(), HandleKind::Target);
        assert_eq!(HandleKind::Target.opposite().opposite(), HandleKind::Target);
    }
}
