use std::fmt::Display;

/// A step of the generation pipeline that can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Building,
    Fetching,
    Extracting,
    CleaningUp,
}

impl Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Stage::Building => "building the request URL",
            Stage::Fetching => "downloading the project archive",
            Stage::Extracting => "extracting the project",
            Stage::CleaningUp => "removing the temporary archive",
        };
        write!(f, "{s}")
    }
}

/// Where a generation run currently is.
///
/// `Idle -> Building -> Fetching -> Extracting -> CleaningUp -> Done`, with
/// `Failed` absorbing any error raised before clean-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationState {
    Idle,
    Building,
    Fetching,
    Extracting,
    CleaningUp,
    Done,
    Failed(Stage),
}

impl GenerationState {
    /// The step this state stands for, if it is one that can fail.
    pub fn stage(&self) -> Option<Stage> {
        match self {
            GenerationState::Building => Some(Stage::Building),
            GenerationState::Fetching => Some(Stage::Fetching),
            GenerationState::Extracting => Some(Stage::Extracting),
            GenerationState::CleaningUp => Some(Stage::CleaningUp),
            _ => None,
        }
    }

    /// Whether the pipeline may move from `self` to `next`.
    pub fn can_transition_to(&self, next: &GenerationState) -> bool {
        use GenerationState::*;
        match (self, next) {
            (Idle, Building)
            | (Building, Fetching)
            | (Fetching, Extracting)
            | (Extracting, CleaningUp)
            | (CleaningUp, Done) => true,
            (Building, Failed(Stage::Building))
            | (Fetching, Failed(Stage::Fetching))
            | (Extracting, Failed(Stage::Extracting)) => true,
            _ => false,
        }
    }
}

impl From<Stage> for GenerationState {
    fn from(stage: Stage) -> Self {
        match stage {
            Stage::Building => GenerationState::Building,
            Stage::Fetching => GenerationState::Fetching,
            Stage::Extracting => GenerationState::Extracting,
            Stage::CleaningUp => GenerationState::CleaningUp,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn happy_path_transitions_are_allowed() {
        let path = [
            GenerationState::Idle,
            GenerationState::Building,
            GenerationState::Fetching,
            GenerationState::Extracting,
            GenerationState::CleaningUp,
            GenerationState::Done,
        ];
        for pair in path.windows(2) {
            assert!(pair[0].can_transition_to(&pair[1]), "{:?} -> {:?}", pair[0], pair[1]);
        }
    }

    #[test]
    fn failure_only_from_its_own_stage() {
        assert!(GenerationState::Fetching
            .can_transition_to(&GenerationState::Failed(Stage::Fetching)));
        assert!(!GenerationState::Fetching
            .can_transition_to(&GenerationState::Failed(Stage::Extracting)));
        assert!(!GenerationState::CleaningUp
            .can_transition_to(&GenerationState::Failed(Stage::CleaningUp)));
        assert!(!GenerationState::Failed(Stage::Building)
            .can_transition_to(&GenerationState::Building));
    }

    #[test]
    fn stage_round_trips_through_state() {
        for stage in [Stage::Building, Stage::Fetching, Stage::Extracting, Stage::CleaningUp] {
            assert_eq!(GenerationState::from(stage).stage(), Some(stage));
        }
        assert_eq!(GenerationState::Done.stage(), None);
    }

    #[test]
    fn skipping_stages_is_rejected() {
        assert!(!GenerationState::Idle.can_transition_to(&GenerationState::Fetching));
        assert!(!GenerationState::Building.can_transition_to(&GenerationState::Done));
    }
}
