//! Host-side battle state shared by the integration tests
//!
//! These types stand in for a simulation engine: they keep their own
//! representation and only expose it through the view traits.

#![allow(dead_code)]

use foresight_battle::{BattleView, CreatureView, MoveView, SideIndex, SideView, Stat, Status, Type};

pub struct HostMove {
    pub name: &'static str,
    pub move_type: Type,
    pub power: Option<u32>,
    pub accuracy: u32,
}

impl HostMove {
    pub fn attack(name: &'static str, move_type: Type, power: u32) -> Self {
        Self {
            name,
            move_type,
            power: Some(power),
            accuracy: 100,
        }
    }

    pub fn status(name: &'static str, move_type: Type) -> Self {
        Self {
            name,
            move_type,
            power: None,
            accuracy: 100,
        }
    }
}

impl MoveView for HostMove {
    fn name(&self) -> &str {
        self.name
    }

    fn move_type(&self) -> Type {
        self.move_type
    }

    fn power(&self) -> Option<u32> {
        self.power
    }

    fn accuracy(&self) -> u32 {
        self.accuracy
    }

    fn critical_hit_ratio(&self) -> f64 {
        0.0
    }
}

pub struct HostCreature {
    pub name: &'static str,
    pub types: (Type, Option<Type>),
    pub hp: u32,
    pub max_hp: u32,
    pub status: Option<Status>,
    pub moves: Vec<HostMove>,
}

impl HostCreature {
    pub fn new(name: &'static str, primary: Type, hp: u32, max_hp: u32) -> Self {
        Self {
            name,
            types: (primary, None),
            hp,
            max_hp,
            status: None,
            moves: Vec::new(),
        }
    }

    pub fn knows(mut self, m: HostMove) -> Self {
        self.moves.push(m);
        self
    }
}

impl CreatureView for HostCreature {
    type Move = HostMove;

    fn name(&self) -> &str {
        self.name
    }

    fn current_stat(&self, stat: Stat) -> u32 {
        match stat {
            Stat::Hp => self.hp,
            _ => 100,
        }
    }

    fn initial_stat(&self, stat: Stat) -> u32 {
        match stat {
            Stat::Hp => self.max_hp,
            _ => 100,
        }
    }

    fn primary_type(&self) -> Type {
        self.types.0
    }

    fn secondary_type(&self) -> Option<Type> {
        self.types.1
    }

    fn status(&self) -> Option<Status> {
        self.status
    }

    fn has_fainted(&self) -> bool {
        self.hp == 0
    }

    fn available_moves(&self) -> Vec<&HostMove> {
        self.moves.iter().collect()
    }
}

pub struct HostSide {
    pub team: Vec<HostCreature>,
    pub active: Option<usize>,
}

impl SideView for HostSide {
    type Creature = HostCreature;

    fn creatures(&self) -> Vec<&HostCreature> {
        self.team.iter().collect()
    }

    fn active_index(&self) -> Option<usize> {
        self.active
    }
}

pub struct HostBattle {
    pub players: Vec<HostSide>,
}

impl BattleView for HostBattle {
    type Side = HostSide;

    fn side(&self, side: SideIndex) -> Option<&HostSide> {
        self.players.get(side.index())
    }
}

/// Fire attacker at half HP against a Grass defender at 80%
pub fn fire_vs_grass() -> HostBattle {
    let attacker = HostCreature::new("Charmeleon", Type::Fire, 50, 100)
        .knows(HostMove::attack("Flamethrower", Type::Fire, 90))
        .knows(HostMove::status("Leer", Type::Normal));
    let bench = HostCreature::new("Wartortle", Type::Water, 100, 100)
        .knows(HostMove::attack("Water Gun", Type::Water, 40));
    let defender = HostCreature::new("Ivysaur", Type::Grass, 80, 100)
        .knows(HostMove::attack("Razor Leaf", Type::Grass, 55))
        .knows(HostMove::status("Growth", Type::Normal));

    HostBattle {
        players: vec![
            HostSide {
                team: vec![attacker, bench],
                active: Some(0),
            },
            HostSide {
                team: vec![defender],
                active: Some(0),
            },
        ],
    }
}
