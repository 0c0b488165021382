//! Camera identities for the multicam edit.

use serde::{Deserialize, Serialize};

/// One of the three cameras the edit can cut to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Camera {
    /// Two-shot covering both speakers.
    Wide,
    /// Close-up on speaker 1.
    Closeup1,
    /// Close-up on speaker 2.
    Closeup2,
}

impl Camera {
    /// All cameras in canonical enumeration order.
    ///
    /// The order is load-bearing: exact score ties during optimization are
    /// broken by it (wide shot first), so it must stay stable.
    pub const ALL: [Camera; 3] = [Camera::Wide, Camera::Closeup1, Camera::Closeup2];

    /// Position of this camera within [`Camera::ALL`].
    pub fn index(self) -> usize {
        match self {
            Camera::Wide => 0,
            Camera::Closeup1 => 1,
            Camera::Closeup2 => 2,
        }
    }

    /// Human-readable camera name.
    pub fn label(self) -> &'static str {
        match self {
            Camera::Wide => "Wide",
            Camera::Closeup1 => "Close-up 1",
            Camera::Closeup2 => "Close-up 2",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_matches_enumeration_order() {
        for (i, camera) in Camera::ALL.iter().enumerate() {
            assert_eq!(camera.index(), i);
        }
    }

    #[test]
    fn test_serializes_snake_case() {
        assert_eq!(serde_json::to_string(&Camera::Wide).unwrap(), "\"wide\"");
        assert_eq!(
            serde_json::to_string(&Camera::Closeup1).unwrap(),
            "\"closeup1\""
        );
        assert_eq!(
            serde_json::from_str::<Camera>("\"closeup2\"").unwrap(),
            Camera::Closeup2
        );
    }

    #[test]
    fn test_labels() {
        assert_eq!(Camera::Wide.label(), "Wide");
        assert_eq!(Camera::Closeup1.label(), "Close-up 1");
        assert_eq!(Camera::Closeup2.label(), "Close-up 2");
    }
}
