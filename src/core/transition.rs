use serde::{Deserialize, Serialize};

/// Declarative animation contract handed to every leaf primitive.
///
/// There are exactly two states: defer to the animation engine's defaults,
/// or hard-disable all motion. This is the single source of truth for
/// animation across a series; no leaf may animate when it says disabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransitionConfig {
    /// Use the leaf/engine default spring or tween.
    EngineDefaults,
    /// Zero duration, zero delay, no entrance/exit motion.
    Disabled,
}

impl TransitionConfig {
    #[must_use]
    pub fn resolve(animated: bool) -> Self {
        if animated {
            Self::EngineDefaults
        } else {
            Self::Disabled
        }
    }

    #[must_use]
    pub fn is_disabled(self) -> bool {
        self == Self::Disabled
    }
}

/// Derives the series-wide transition from the `animated` flag.
#[must_use]
pub fn resolve_transition(animated: bool) -> TransitionConfig {
    TransitionConfig::resolve(animated)
}
