//! Duel Example
//!
//! Two agents fight a small scripted battle. The battle is advanced by a
//! toy damage model that doubles as the agents' lookahead transition.
//!
//! Run with `RUST_LOG=foresight_agent=debug` to see the search at work.

use std::time::Duration;

use anyhow::{Result, anyhow};
use foresight_agent::{Agent, AgentConfig, OpponentModel, Transition};
use foresight_battle::query::matchup_multiplier;
use foresight_battle::{
    ActionOption, BattleSnapshot, CreatureSnapshot, EffectCategory, MoveSnapshot, SideIndex,
    SideSnapshot, Type,
};

/// Attacks remove HP in proportion to power and effectiveness
struct ToyDamage;

impl Transition for ToyDamage {
    fn successor(
        &self,
        snapshot: &BattleSnapshot,
        side: SideIndex,
        action: &ActionOption,
    ) -> Option<BattleSnapshot> {
        match action {
            ActionOption::Attack(m) => {
                let power = m.power?;
                let target_side = side.opponent();
                let mut next = snapshot.side(target_side).clone();
                let idx = next.active_index?;
                let target = next.creatures[idx].clone();

                let damage = (power as f64 * matchup_multiplier(m, &target) * 0.4) as u32;
                let hp = target.hp().saturating_sub(damage);
                next.creatures[idx] = if hp == 0 {
                    target.fainted()
                } else {
                    target.with_hp(hp)
                };
                Some(snapshot.with_side(target_side, next))
            }
            ActionOption::Switch(idx) => {
                let next = snapshot.side(side).clone().with_active(Some(*idx));
                Some(snapshot.with_side(side, next))
            }
        }
    }
}

fn team_red() -> SideSnapshot {
    SideSnapshot::new()
        .with_creature(
            CreatureSnapshot::new("Charizard", Type::Fire, 150)
                .with_secondary_type(Type::Flying)
                .with_move(MoveSnapshot::damaging("Flamethrower", Type::Fire, 90))
                .with_move(MoveSnapshot::damaging("Air Slash", Type::Flying, 75).with_accuracy(95))
                .with_move(MoveSnapshot::status(
                    "Swords Dance",
                    Type::Normal,
                    EffectCategory::StatBoost,
                )),
        )
        .with_creature(
            CreatureSnapshot::new("Pikachu", Type::Electric, 90)
                .with_move(MoveSnapshot::damaging("Thunderbolt", Type::Electric, 90))
                .with_move(MoveSnapshot::damaging("Quick Attack", Type::Normal, 40)),
        )
}

fn team_blue() -> SideSnapshot {
    SideSnapshot::new()
        .with_creature(
            CreatureSnapshot::new("Venusaur", Type::Grass, 160)
                .with_secondary_type(Type::Poison)
                .with_move(MoveSnapshot::damaging("Giga Drain", Type::Grass, 75))
                .with_move(MoveSnapshot::damaging("Sludge Bomb", Type::Poison, 90))
                .with_move(MoveSnapshot::status(
                    "Sleep Powder",
                    Type::Grass,
                    EffectCategory::Sleep,
                )),
        )
        .with_creature(
            CreatureSnapshot::new("Blastoise", Type::Water, 158)
                .with_move(MoveSnapshot::damaging("Surf", Type::Water, 90))
                .with_move(MoveSnapshot::damaging("Ice Beam", Type::Ice, 90)),
        )
}

/// Send in the next creature after a faint; false when the side is out
fn replace_fainted(agent: &Agent<ToyDamage>, battle: &mut BattleSnapshot) -> bool {
    let side = agent.side();
    let current = battle.side(side);
    if current.active_creature().is_some_and(|c| c.is_alive()) {
        return true;
    }

    match agent.choose_switch_target(current) {
        Some(idx) => {
            let name = &current.creatures[idx].name;
            println!("{} sends out {}", side, name);
            let next = current.clone().with_active(Some(idx));
            *battle = battle.with_side(side, next);
            true
        }
        None => false,
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = AgentConfig::default()
        .with_max_depth(3)
        .with_max_thinking_time(Duration::from_secs(2));

    let red = Agent::with_transition(SideIndex::P1, config.clone(), ToyDamage)?;
    let blue = Agent::with_transition(
        SideIndex::P2,
        config.with_opponent_model(OpponentModel::WorstCase),
        ToyDamage,
    )?;

    let mut battle = BattleSnapshot::new(team_red(), team_blue());

    for turn in 1..=30 {
        println!("--- Turn {} ---", turn);

        for agent in [&red, &blue] {
            let side = agent.side();
            let action = agent
                .next_action(&battle)
                .await
                .ok_or_else(|| anyhow!("{} has no action", side))?;

            let actor = battle
                .active_creature(side)
                .map(|c| c.name.clone())
                .unwrap_or_default();
            println!("{} ({}) uses {}", side, actor, action);

            if let Some(next) = ToyDamage.successor(&battle, side, &action) {
                battle = next;
            }

            for player in [&red, &blue] {
                if !replace_fainted(player, &mut battle) {
                    let winner = player.side().opponent();
                    println!("{} wins on turn {}", winner, turn);
                    return Ok(());
                }
            }
        }

        for (side, state) in battle.sides() {
            if let Some(active) = state.active_creature() {
                println!("  {}: {} {}/{}", side, active.name, active.hp(), active.max_hp());
            }
        }
    }

    println!("Draw after 30 turns");
    Ok(())
}
