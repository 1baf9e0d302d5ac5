mod common;

use std::thread;
use std::time::{Duration, Instant};

use common::{HostCreature, HostMove, HostSide, fire_vs_grass};
use foresight_agent::{
    Agent, AgentConfig, CancelToken, OpponentModel, SearchEngine, SwitchCandidates, Transition,
    Unchanged, candidate_actions, scorer,
};
use foresight_battle::{ActionOption, BattleSnapshot, SideIndex, Type};

/// Takes a fixed time per successor and never changes the battle
struct SlowSimulator(Duration);

impl Transition for SlowSimulator {
    fn successor(
        &self,
        _: &BattleSnapshot,
        _: SideIndex,
        _: &ActionOption,
    ) -> Option<BattleSnapshot> {
        thread::sleep(self.0);
        None
    }
}

fn move_name(action: &Option<ActionOption>) -> Option<&str> {
    action.as_ref().and_then(|a| a.as_move()).map(|m| m.name.as_str())
}

#[tokio::test]
async fn test_super_effective_attack_is_chosen() {
    let host = fire_vs_grass();
    let snapshot = BattleSnapshot::capture(&host);
    let target = snapshot.active_creature(SideIndex::P2);
    let actions = candidate_actions(&snapshot, SideIndex::P1, SwitchCandidates::Exclude);

    let flamethrower = scorer::score(&actions[0], target);
    let leer = scorer::score(&actions[1], target);
    assert!(flamethrower > leer);

    let agent = Agent::new(SideIndex::P1, AgentConfig::default()).unwrap();
    let action = agent.next_action(&host).await;
    assert_eq!(move_name(&action), Some("Flamethrower"));
}

#[tokio::test]
async fn test_chosen_action_is_legal() {
    let host = fire_vs_grass();
    let snapshot = BattleSnapshot::capture(&host);

    for (model, switches) in [
        (OpponentModel::Collapsed, SwitchCandidates::Exclude),
        (OpponentModel::WorstCase, SwitchCandidates::Include),
        (OpponentModel::Expectation, SwitchCandidates::Include),
    ] {
        let config = AgentConfig::default()
            .with_opponent_model(model)
            .with_switch_candidates(switches);
        let agent = Agent::new(SideIndex::P1, config).unwrap();

        let action = agent.next_action(&host).await.unwrap();
        assert!(candidate_actions(&snapshot, SideIndex::P1, switches).contains(&action));
    }
}

#[tokio::test]
async fn test_no_action_without_active_creature_or_legal_actions() {
    let agent = Agent::new(SideIndex::P1, AgentConfig::default()).unwrap();

    let mut host = fire_vs_grass();
    host.players[0].active = None;
    assert_eq!(agent.next_action(&host).await, None);

    // Moveless with a living bench creature: the switch is the only legal action
    let mut host = fire_vs_grass();
    host.players[0].team[0].moves.clear();
    assert_eq!(agent.next_action(&host).await, Some(ActionOption::Switch(1)));

    host.players[0].team[1].hp = 0;
    assert_eq!(agent.next_action(&host).await, None);

    let mut host = fire_vs_grass();
    host.players.clear();
    assert_eq!(agent.next_action(&host).await, None);
}

#[tokio::test]
async fn test_timeout_returns_first_legal_action() {
    let config = AgentConfig::default().with_max_thinking_time(Duration::from_millis(10));
    let agent = Agent::with_transition(
        SideIndex::P1,
        config,
        SlowSimulator(Duration::from_millis(25)),
    )
    .unwrap();

    let started = Instant::now();
    let action = agent.next_action(&fire_vs_grass()).await;

    assert!(started.elapsed() < Duration::from_secs(1));
    assert_eq!(move_name(&action), Some("Flamethrower"));
}

#[test]
fn test_depth_bound() {
    let snapshot = BattleSnapshot::capture(&fire_vs_grass());

    for max_depth in 1..=4 {
        let config = AgentConfig::default().with_max_depth(max_depth);
        let mut engine = SearchEngine::new(SideIndex::P1, &config, &Unchanged, CancelToken::new());
        engine.decide(&snapshot).unwrap();

        assert!(engine.stats().deepest_ply <= max_depth);
        assert!(engine.stats().nodes > 0);
    }
}

#[test]
fn test_blocking_api() {
    let agent = Agent::new(SideIndex::P1, AgentConfig::default()).unwrap();
    let action = agent.next_action_blocking(&fire_vs_grass());
    assert_eq!(move_name(&action), Some("Flamethrower"));
}

#[test]
fn test_blocking_timeout_does_not_wait_for_worker() {
    let config = AgentConfig::default().with_max_thinking_time(Duration::from_millis(10));
    let agent = Agent::with_transition(
        SideIndex::P1,
        config,
        SlowSimulator(Duration::from_secs(2)),
    )
    .unwrap();

    let started = Instant::now();
    let action = agent.next_action_blocking(&fire_vs_grass());

    assert!(started.elapsed() < Duration::from_millis(500));
    assert_eq!(move_name(&action), Some("Flamethrower"));
}

#[tokio::test]
async fn test_untagged_boost_move_beats_weak_attack() {
    // The host does not tag effects, so "Swords Dance" is categorized by name
    let attacker = HostCreature::new("Scyther", Type::Bug, 100, 100)
        .knows(HostMove::attack("Tackle", Type::Normal, 40))
        .knows(HostMove::status("Swords Dance", Type::Normal));
    let defender = HostCreature::new("Rattata", Type::Normal, 100, 100)
        .knows(HostMove::attack("Tackle", Type::Normal, 40));

    let host = common::HostBattle {
        players: vec![
            HostSide {
                team: vec![attacker],
                active: Some(0),
            },
            HostSide {
                team: vec![defender],
                active: Some(0),
            },
        ],
    };

    let agent = Agent::new(SideIndex::P1, AgentConfig::default()).unwrap();
    let action = agent.next_action(&host).await;
    assert_eq!(move_name(&action), Some("Swords Dance"));
}

#[test]
fn test_choose_switch_target_after_faint() {
    let agent = Agent::new(SideIndex::P1, AgentConfig::default()).unwrap();

    let mut host = fire_vs_grass();
    host.players[0].team[0].hp = 0;
    assert_eq!(agent.choose_switch_target(&host.players[0]), Some(1));

    host.players[0].team[1].hp = 0;
    assert_eq!(agent.choose_switch_target(&host.players[0]), None);
}
