//! Full games driven from deal to termination, checking card conservation at
//! every observable point along the way.

use std::collections::HashSet;
use std::sync::Arc;

use war_table::{
    Command, Deck, EngineConfig, GameEngine, InstantChoreographer, Phase, PlayerId, TimingConfig,
    TurnOutcome, ZoneRef,
};

fn engine(num_players: usize, seed: u64) -> GameEngine {
    let _ = env_logger::builder().is_test(true).try_init();
    let config = EngineConfig::new(num_players)
        .with_seed(seed)
        .with_timing(TimingConfig::instant());
    GameEngine::new(config, Arc::new(InstantChoreographer))
}

/// Every card in every zone, as (rank, suit) tokens. Duplicates collapse, so
/// a 52-element result proves both conservation and uniqueness.
fn observed_cards(engine: &GameEngine, num_players: usize) -> HashSet<(u8, u8)> {
    let mut seen = HashSet::new();
    let mut zones = vec![ZoneRef::DrawPile];
    for player in PlayerId::all(num_players) {
        zones.push(ZoneRef::Hand(player));
        zones.push(ZoneRef::Table(player));
    }
    for zone in zones {
        for card in engine.zone(zone).iter() {
            seen.insert((card.rank() as u8, card.suit() as u8));
        }
    }
    seen
}

#[tokio::test]
async fn two_player_game_drains_both_hands() {
    let mut engine = engine(2, 17);
    engine.start_game().await.unwrap();

    // 26 cards each; without a resolution rule nothing returns to the hands,
    // so the game lasts exactly 26 rounds before both hands empty at once.
    for round in 1..=26u32 {
        let outcome = engine.run_turn().await.unwrap();
        assert!(
            matches!(outcome, TurnOutcome::Played { .. }),
            "round {}",
            round
        );
        assert_eq!(observed_cards(&engine, 2).len(), 52, "round {}", round);
        assert_eq!(engine.in_flight(), 0, "round {}", round);
        assert_eq!(engine.round(), round);
    }

    for player in PlayerId::all(2) {
        assert!(engine.zone(ZoneRef::Hand(player)).is_empty());
        assert_eq!(engine.zone(ZoneRef::Table(player)).len(), 26);
    }

    // Both hands empty is not a lone-survivor state, so play continues
    // harmlessly: nothing moves, and the standing tops are re-revealed.
    let outcome = engine.run_turn().await.unwrap();
    let TurnOutcome::Played { revealed, .. } = outcome else {
        panic!("expected a played round");
    };
    assert_eq!(revealed.len(), 2);
    assert_eq!(engine.phase(), Phase::TurnInProgress);
    assert_eq!(observed_cards(&engine, 2).len(), 52);
    for player in PlayerId::all(2) {
        assert_eq!(engine.zone(ZoneRef::Table(player)).len(), 26);
    }
}

#[tokio::test]
async fn three_player_game_finishes_with_the_larger_hand() {
    let mut engine = engine(3, 9);
    engine.start_game().await.unwrap();

    // 18/17/17 split: player 0 outlasts the table by one card.
    let mut rounds = 0u32;
    let winner = loop {
        match engine.run_turn().await.unwrap() {
            TurnOutcome::Played { .. } => {
                rounds += 1;
                assert_eq!(observed_cards(&engine, 3).len(), 52);
                assert!(rounds <= 17, "game ran past the hand sizes");
            }
            TurnOutcome::Finished { winner } => break winner,
        }
    };

    assert_eq!(rounds, 17);
    assert_eq!(winner, PlayerId::new(0));
    assert_eq!(engine.phase(), Phase::Finished);
    assert_eq!(engine.winner(), Some(winner));
    assert_eq!(observed_cards(&engine, 3).len(), 52);
}

#[tokio::test]
async fn commands_drive_a_full_session() {
    let mut engine = engine(3, 4);

    engine.handle(Command::Start).await.unwrap();
    assert_eq!(engine.phase(), Phase::TurnInProgress);

    while engine.phase() != Phase::Finished {
        engine.run_turn().await.unwrap();
    }

    engine.handle(Command::Reset).await.unwrap();
    assert_eq!(engine.phase(), Phase::Idle);
    assert_eq!(*engine.zone(ZoneRef::DrawPile), Deck::standard());

    // The session restarts cleanly on the same engine.
    engine.handle(Command::Start).await.unwrap();
    assert_eq!(engine.phase(), Phase::TurnInProgress);
    assert_eq!(observed_cards(&engine, 3).len(), 52);
}

#[tokio::test]
async fn snapshot_tracks_the_game_as_it_runs() {
    let mut engine = engine(2, 6);

    let idle = engine.snapshot();
    assert_eq!(idle.phase, Phase::Idle);
    assert_eq!(idle.draw_pile.len(), 52);

    engine.start_game().await.unwrap();
    let dealt = engine.snapshot();
    assert_eq!(dealt.phase, Phase::TurnInProgress);
    assert!(dealt.draw_pile.is_empty());
    assert!(dealt.hands.iter().all(|hand| hand.len() == 26));
    assert_eq!(dealt.in_flight, 0);

    engine.run_turn().await.unwrap();
    let after_turn = engine.snapshot();
    assert_eq!(after_turn.round, 1);
    assert!(after_turn.hands.iter().all(|hand| hand.len() == 25));
    assert!(after_turn.table_piles.iter().all(|pile| pile.len() == 1));
    assert_eq!(after_turn.winner, None);
}
