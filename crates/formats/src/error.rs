/// Reasons a tour description is rejected.
#[derive(Debug, Clone, PartialEq)]
pub enum TourDataError {
    Parse(String),
    MissingDefaultScene(String),
    EmptyHotspot { scene: String, index: usize },
    PositionOutOfRange { scene: String, index: usize },
    MissingFloorOrder(String),
}

impl std::fmt::Display for TourDataError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TourDataError::Parse(msg) => write!(f, "tour data is not valid JSON: {msg}"),
            TourDataError::MissingDefaultScene(key) => {
                write!(f, "default scene '{key}' is not defined")
            }
            TourDataError::EmptyHotspot { scene, index } => {
                write!(f, "scene '{scene}': hotspot #{index} has no entries")
            }
            TourDataError::PositionOutOfRange { scene, index } => {
                write!(f, "scene '{scene}': hotspot #{index} position is outside 0..=100%")
            }
            TourDataError::MissingFloorOrder(scene) => {
                write!(f, "scene '{scene}' has a floor group but no floor order")
            }
        }
    }
}

impl std::error::Error for TourDataError {}
