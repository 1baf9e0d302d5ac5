//! Stats and per-stat current/initial values

/// Permanent stats tracked for a creature
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Stat {
    Hp = 0,
    Atk = 1,
    Def = 2,
    Spa = 3,
    Spd = 4,
    Spe = 5,
}

impl Stat {
    pub const ALL: [Stat; 6] = [Stat::Hp, Stat::Atk, Stat::Def, Stat::Spa, Stat::Spd, Stat::Spe];
}

/// Current and initial (battle-start) value of every stat
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatBlock {
    current: [u32; 6],
    initial: [u32; 6],
}

impl StatBlock {
    /// All stats at zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Block with only HP filled in (current / initial)
    pub fn with_hp(current: u32, initial: u32) -> Self {
        let mut block = Self::new();
        block.set(Stat::Hp, current, initial);
        block
    }

    /// Current value of a stat
    pub fn current(&self, stat: Stat) -> u32 {
        self.current[stat as usize]
    }

    /// Value of a stat at the start of the battle
    pub fn initial(&self, stat: Stat) -> u32 {
        self.initial[stat as usize]
    }

    /// Set both values of a stat
    pub fn set(&mut self, stat: Stat, current: u32, initial: u32) {
        self.current[stat as usize] = current;
        self.initial[stat as usize] = initial;
    }

    /// Set only the current value of a stat
    pub fn set_current(&mut self, stat: Stat, current: u32) {
        self.current[stat as usize] = current;
    }

    /// current / initial for a stat; `None` when the initial value is zero
    pub fn ratio(&self, stat: Stat) -> Option<f64> {
        let initial = self.initial(stat);
        if initial == 0 {
            return None;
        }
        Some(self.current(stat) as f64 / initial as f64)
    }
}
