//! Turn semantics: reveals, termination, reset, and settle behavior under
//! overlapping animations.

use std::sync::Arc;
use std::time::Duration;

use war_table::{
    Deck, DelayedChoreographer, EngineConfig, GameEngine, InstantChoreographer, Phase, PlayerId,
    ResolutionRule, Reveal, TimingConfig, TurnOutcome, ZoneRef,
};

fn engine(num_players: usize, seed: u64) -> GameEngine {
    let _ = env_logger::builder().is_test(true).try_init();
    let config = EngineConfig::new(num_players)
        .with_seed(seed)
        .with_timing(TimingConfig::instant());
    GameEngine::new(config, Arc::new(InstantChoreographer))
}

#[tokio::test]
async fn turn_reveals_one_card_per_player() {
    let mut engine = engine(4, 3);
    engine.start_game().await.unwrap();

    let outcome = engine.run_turn().await.unwrap();
    let TurnOutcome::Played { revealed, .. } = outcome else {
        panic!("expected a played round");
    };

    assert_eq!(revealed.len(), 4);
    for (index, reveal) in revealed.iter().enumerate() {
        // Reveals come back in player-index order.
        assert_eq!(reveal.player, PlayerId::new(index as u8));
        let table = engine.zone(ZoneRef::Table(reveal.player));
        let top = table.peek_top().unwrap();
        assert!(top.is_face_up());
        assert_eq!(top.token(), reveal.card);
    }
}

#[tokio::test]
async fn hands_stay_face_down_while_reveals_accumulate() {
    let mut engine = engine(2, 5);
    engine.start_game().await.unwrap();

    engine.run_turn().await.unwrap();
    engine.run_turn().await.unwrap();

    for player in PlayerId::all(2) {
        let hand = engine.zone(ZoneRef::Hand(player));
        assert!(hand.iter().all(|card| !card.is_face_up()));

        // Earlier reveals stay face-up where they lie under later cards.
        let table = engine.zone(ZoneRef::Table(player));
        assert_eq!(table.len(), 2);
        assert!(table.iter().all(|card| card.is_face_up()));
    }
}

#[tokio::test]
async fn empty_handed_players_are_skipped() {
    // N=3 splits 52 as 18/17/17, so hands drain unevenly: after 17 rounds
    // only player 0 holds a card, and the next turn ends the game without
    // moving anything for the empty hands.
    let mut engine = engine(3, 11);
    engine.start_game().await.unwrap();

    for round in 1..=17u32 {
        let outcome = engine.run_turn().await.unwrap();
        assert!(
            matches!(outcome, TurnOutcome::Played { .. }),
            "round {}",
            round
        );
        assert_eq!(engine.total_cards(), 52, "round {}", round);
    }

    assert_eq!(engine.zone(ZoneRef::Hand(PlayerId::new(0))).len(), 1);
    assert!(engine.zone(ZoneRef::Hand(PlayerId::new(1))).is_empty());
    assert!(engine.zone(ZoneRef::Hand(PlayerId::new(2))).is_empty());

    let outcome = engine.run_turn().await.unwrap();
    assert_eq!(
        outcome,
        TurnOutcome::Finished {
            winner: PlayerId::new(0)
        }
    );
    assert_eq!(engine.phase(), Phase::Finished);
    // Termination moved no cards: the surviving card is still in hand.
    assert_eq!(engine.zone(ZoneRef::Hand(PlayerId::new(0))).len(), 1);
}

#[tokio::test]
async fn reset_from_finished_restores_idle() {
    let mut engine = engine(3, 11);
    engine.start_game().await.unwrap();
    while engine.phase() != Phase::Finished {
        engine.run_turn().await.unwrap();
    }

    engine.reset();

    assert_eq!(engine.phase(), Phase::Idle);
    assert_eq!(engine.winner(), None);
    assert_eq!(*engine.zone(ZoneRef::DrawPile), Deck::standard());
    for player in PlayerId::all(3) {
        assert!(engine.zone(ZoneRef::Hand(player)).is_empty());
        assert!(engine.zone(ZoneRef::Table(player)).is_empty());
    }
}

#[tokio::test]
async fn reset_allows_a_new_game() {
    let mut engine = engine(2, 1);
    engine.start_game().await.unwrap();
    engine.run_turn().await.unwrap();

    engine.reset();
    assert!(engine.start_game().await.unwrap());
    assert_eq!(engine.phase(), Phase::TurnInProgress);
    assert_eq!(engine.total_cards(), 52);
}

/// With real (if short) animation durations and a stagger, moves overlap in
/// flight; the settle step still lands every card before the phase turns.
#[tokio::test]
async fn overlapping_animations_settle_before_the_phase_turns() {
    let timing = TimingConfig {
        move_duration: Duration::from_millis(10),
        stagger: Duration::from_millis(1),
        settle: Duration::ZERO,
        animation_timeout: Duration::from_secs(1),
    };
    let config = EngineConfig::new(2).with_seed(8).with_timing(timing);
    let mut engine = GameEngine::new(config, Arc::new(DelayedChoreographer));

    assert!(engine.start_game().await.unwrap());

    assert_eq!(engine.phase(), Phase::TurnInProgress);
    assert_eq!(engine.in_flight(), 0);
    assert_eq!(engine.total_cards(), 52);
    for player in PlayerId::all(2) {
        assert_eq!(engine.zone(ZoneRef::Hand(player)).len(), 26);
    }

    let outcome = engine.run_turn().await.unwrap();
    assert!(matches!(outcome, TurnOutcome::Played { .. }));
    assert_eq!(engine.in_flight(), 0);
    assert_eq!(engine.total_cards(), 52);
}

/// A custom rule sees the reveals in player order; its verdict is reported
/// but the engine moves no cards on its behalf.
#[tokio::test]
async fn custom_resolution_rule_sees_every_reveal() {
    struct CountingRule;
    impl ResolutionRule for CountingRule {
        fn judge(&self, reveals: &[Reveal]) -> Option<PlayerId> {
            assert!(!reveals.is_empty());
            reveals.first().map(|r| r.player)
        }
    }

    let config = EngineConfig::new(3)
        .with_seed(2)
        .with_timing(TimingConfig::instant());
    let mut engine =
        GameEngine::new(config, Arc::new(InstantChoreographer)).with_resolution(CountingRule);
    engine.start_game().await.unwrap();

    let outcome = engine.run_turn().await.unwrap();
    let TurnOutcome::Played {
        revealed,
        round_winner,
    } = outcome
    else {
        panic!("expected a played round");
    };

    assert_eq!(revealed.len(), 3);
    assert_eq!(round_winner, Some(PlayerId::new(0)));
    for player in PlayerId::all(3) {
        assert_eq!(engine.zone(ZoneRef::Table(player)).len(), 1);
    }
}
