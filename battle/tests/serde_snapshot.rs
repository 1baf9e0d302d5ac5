#![cfg(feature = "serde")]

use foresight_battle::{
    ActionOption, BattleSnapshot, CreatureSnapshot, EffectCategory, MoveSnapshot, SideIndex,
    SideSnapshot, Status, Type,
};

fn battle() -> BattleSnapshot {
    let gengar = CreatureSnapshot::new("Gengar", Type::Ghost, 120)
        .with_secondary_type(Type::Poison)
        .with_hp(61)
        .with_status(Status::Sleep)
        .with_move(MoveSnapshot::damaging("Shadow Ball", Type::Ghost, 80))
        .with_move(
            MoveSnapshot::status("Hypnosis", Type::Psychic, EffectCategory::Sleep)
                .with_accuracy(60),
        );
    let snorlax = CreatureSnapshot::new("Snorlax", Type::Normal, 220)
        .with_move(MoveSnapshot::damaging("Body Slam", Type::Normal, 85));

    BattleSnapshot::new(
        SideSnapshot::new().with_creature(gengar),
        SideSnapshot::new().with_creature(snorlax),
    )
}

#[test]
fn test_snapshot_survives_json() {
    let original = battle();
    let json = serde_json::to_string(&original).unwrap();
    let restored: BattleSnapshot = serde_json::from_str(&json).unwrap();

    assert_eq!(restored, original);

    let gengar = restored.active_creature(SideIndex::P1).unwrap();
    assert_eq!(gengar.hp(), 61);
    assert_eq!(gengar.status, Some(Status::Sleep));
    assert_eq!(gengar.moves[1].effect, EffectCategory::Sleep);
}

#[test]
fn test_action_json_shape() {
    let json = serde_json::to_value(ActionOption::Switch(2)).unwrap();
    assert_eq!(json, serde_json::json!({ "Switch": 2 }));
}
