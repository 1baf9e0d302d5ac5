//! Move and action types

use super::pokemon_type::Type;

/// Strategic effect category of a move without base power
///
/// Attached to every move definition so status moves can be valued
/// without looking at their display names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EffectCategory {
    /// Raises the user's stats (Swords Dance, Dragon Dance)
    StatBoost,
    /// Puts the target to sleep (Hypnosis, Sleep Powder)
    Sleep,
    /// Screens and other defensive boosts (Reflect, Light Screen)
    Screen,
    /// Does nothing at all (Splash)
    NoOp,
    /// Any other status effect
    #[default]
    Other,
}

impl EffectCategory {
    /// Best-effort category for a well-known move name
    ///
    /// For hosts whose engine does not tag moves. Unknown names map to
    /// [`EffectCategory::Other`].
    pub fn from_move_name(name: &str) -> Self {
        let normalized = name.to_lowercase().replace([' ', '-', '\''], "");

        match normalized.as_str() {
            "swordsdance" | "dragondance" | "nastyplot" | "calmmind" | "bulkup" | "agility"
            | "growth" | "shellsmash" | "quiverdance" => EffectCategory::StatBoost,
            "hypnosis" | "sleeppowder" | "spore" | "sing" | "lovelykiss" | "grasswhistle"
            | "darkvoid" => EffectCategory::Sleep,
            "reflect" | "lightscreen" | "auroraveil" | "barrier" | "irondefense" | "acidarmor"
            | "amnesia" => EffectCategory::Screen,
            "splash" | "celebrate" | "holdhands" => EffectCategory::NoOp,
            _ => EffectCategory::Other,
        }
    }
}

/// A move as seen by the agent at decision time
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveSnapshot {
    /// Display name
    pub name: String,

    /// Elemental type of the move
    pub move_type: Type,

    /// Base power (`None` for status moves)
    pub power: Option<u32>,

    /// Accuracy percentage (100 = never misses)
    pub accuracy: u32,

    /// Critical-hit ratio (0.0 = no boosted crit chance)
    pub critical_hit_ratio: f64,

    /// Effect category, consulted only when `power` is `None`
    pub effect: EffectCategory,
}

impl MoveSnapshot {
    /// Damaging move with perfect accuracy and no crit boost
    pub fn damaging(name: impl Into<String>, move_type: Type, power: u32) -> Self {
        Self {
            name: name.into(),
            move_type,
            power: Some(power),
            accuracy: 100,
            critical_hit_ratio: 0.0,
            effect: EffectCategory::Other,
        }
    }

    /// Status move (no base power) of the given effect category
    pub fn status(name: impl Into<String>, move_type: Type, effect: EffectCategory) -> Self {
        Self {
            name: name.into(),
            move_type,
            power: None,
            accuracy: 100,
            critical_hit_ratio: 0.0,
            effect,
        }
    }

    /// Set the accuracy percentage
    pub fn with_accuracy(mut self, accuracy: u32) -> Self {
        self.accuracy = accuracy;
        self
    }

    /// Set the critical-hit ratio
    pub fn with_crit_ratio(mut self, ratio: f64) -> Self {
        self.critical_hit_ratio = ratio;
        self
    }
}

/// One legal choice for a side's active creature
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionOption {
    /// Use one of the active creature's usable moves
    Attack(MoveSnapshot),
    /// Switch to the non-fainted bench creature at this index
    Switch(usize),
}

impl ActionOption {
    /// The move, for attack actions
    pub fn as_move(&self) -> Option<&MoveSnapshot> {
        match self {
            ActionOption::Attack(m) => Some(m),
            ActionOption::Switch(_) => None,
        }
    }

    /// Whether this is a switch
    pub fn is_switch(&self) -> bool {
        matches!(self, ActionOption::Switch(_))
    }
}

impl std::fmt::Display for ActionOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ActionOption::Attack(m) => write!(f, "{}", m.name),
            ActionOption::Switch(idx) => write!(f, "switch {}", idx),
        }
    }
}
