/// What happens when the times factor reaches a domain bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EndBehaviour {
    /// Stop the engine and keep the factor at the bound.
    Pause,
    /// Jump back to the domain minimum and keep going.
    Repeat,
    /// Reverse direction and bounce between the bounds.
    #[default]
    Cycle,
}

impl EndBehaviour {
    pub const ALL: &'static [EndBehaviour] =
        &[EndBehaviour::Pause, EndBehaviour::Repeat, EndBehaviour::Cycle];

    #[must_use]
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Pause => "Pause",
            Self::Repeat => "Repeat",
            Self::Cycle => "Cycle",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::EndBehaviour;

    #[test]
    fn default_is_cycle() {
        assert_eq!(EndBehaviour::default(), EndBehaviour::Cycle);
    }

    #[test]
    fn display_names_are_distinct() {
        let names: Vec<_> = EndBehaviour::ALL.iter().map(|b| b.display_name()).collect();

        assert_eq!(names, vec!["Pause", "Repeat", "Cycle"]);
    }
}
