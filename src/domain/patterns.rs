/// A stamp placed at the click origin. The origin cell is always part of
/// the stamp; `offsets` lists the remaining cells relative to it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Pattern {
    #[default]
    Cell,
    Blinker,
    Glider,
    Block,
}

impl Pattern {
    pub fn all() -> [Pattern; 4] {
        [Pattern::Cell, Pattern::Blinker, Pattern::Glider, Pattern::Block]
    }

    /// Display name for the pattern buttons
    pub fn name(&self) -> &'static str {
        match self {
            Pattern::Cell => "Cell",
            Pattern::Blinker => "Blinker",
            Pattern::Glider => "Glider",
            Pattern::Block => "Block",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Pattern::Cell => "Single cell",
            Pattern::Blinker => "Oscillator (period 2)",
            Pattern::Glider => "Moves diagonally (period 4)",
            Pattern::Block => "Still life",
        }
    }

    /// Offsets (dx, dy) from the origin, y growing downwards
    pub fn offsets(&self) -> &'static [(i32, i32)] {
        match self {
            Pattern::Cell => &[],
            Pattern::Blinker => &[(0, -1), (0, 1)],
            Pattern::Glider => &[(1, 1), (1, 2), (0, 2), (-1, 2)],
            Pattern::Block => &[(1, 0), (1, 1), (0, 1)],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offsets_never_include_origin() {
        for pattern in Pattern::all() {
            assert!(!pattern.offsets().contains(&(0, 0)), "{}", pattern.name());
        }
    }

    #[test]
    fn test_stamp_sizes() {
        let sizes: Vec<_> = Pattern::all().iter().map(|p| p.offsets().len() + 1).collect();
        assert_eq!(sizes, vec![1, 3, 5, 4]);
    }

    #[test]
    fn test_names_are_unique() {
        let mut names: Vec<_> = Pattern::all().iter().map(|p| p.name()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), 4);
    }
}
