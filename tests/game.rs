//! Round engine integration tests.

use std::collections::HashSet;

use tealeaf::{
    ActionError, DECK_SIZE, DealError, DealerError, Deck, Face, HoleCard, InvalidDecision, Outcome,
    Role, RoundEngine, RoundState, Suit, TableOptions,
};

/// Builds an engine whose deck deals `draws` first, in order.
///
/// Opening deal order is player, player, dealer, dealer.
fn stacked_with(options: TableOptions, draws: &[(Face, Suit)]) -> RoundEngine {
    let mut deck = Deck::new(7);
    deck.arrange(draws).unwrap();
    RoundEngine::with_deck(options, deck)
}

fn stacked(draws: &[(Face, Suit)]) -> RoundEngine {
    stacked_with(TableOptions::default(), draws)
}

fn assert_full_deck(engine: &RoundEngine) {
    let deck = engine.deck();
    assert_eq!(deck.len(), DECK_SIZE);
    let unique: HashSet<(Face, Suit)> = deck.iter().map(|card| (card.face, card.suit)).collect();
    assert_eq!(unique.len(), DECK_SIZE);
}

#[test]
fn deal_hides_first_dealer_card() {
    let mut engine = stacked(&[
        (Face::Eight, Suit::Hearts), // player
        (Face::Seven, Suit::Diamonds), // player
        (Face::Ten, Suit::Spades), // dealer hole
        (Face::Six, Suit::Clubs), // dealer up
    ]);

    assert_eq!(engine.deal(), Ok(RoundState::PlayerTurn));

    let player = engine.player().hand();
    assert_eq!(player.len(), 2);
    assert!(player.cards().iter().all(|card| card.face_up));
    assert_eq!(player.final_value(), 15);

    let dealer = engine.dealer().hand();
    assert_eq!(dealer.len(), 2);
    assert!(!dealer.cards()[0].face_up);
    assert!(dealer.cards()[1].face_up);
    assert_eq!(dealer.final_value(), 6);

    let messages = engine.messages();
    assert_eq!(messages.player_tally, "15");
    assert_eq!(messages.dealer_tally, "6");
    assert!(messages.game_status.contains("Hit or stay"));
}

#[test]
fn deal_can_hide_second_dealer_card() {
    let options = TableOptions::default().with_hole_card(HoleCard::Second);
    let mut engine = stacked_with(
        options,
        &[
            (Face::Eight, Suit::Hearts),
            (Face::Seven, Suit::Diamonds),
            (Face::Ten, Suit::Spades),
            (Face::Six, Suit::Clubs), // dealer hole
        ],
    );

    engine.deal().unwrap();
    let dealer = engine.dealer().hand();
    assert!(dealer.cards()[0].face_up);
    assert!(!dealer.cards()[1].face_up);
    assert_eq!(dealer.final_value(), 10);
}

#[test]
fn deal_next_hands_out_one_card_per_call() {
    let mut engine = stacked(&[
        (Face::Eight, Suit::Hearts),
        (Face::Seven, Suit::Diamonds),
        (Face::Ten, Suit::Spades), // dealer hole
        (Face::Six, Suit::Clubs),
    ]);

    let mut seen = Vec::new();
    while engine.state() == RoundState::Dealing {
        let card = engine.deal_next().unwrap();
        seen.push((
            card.face,
            engine.player().hand().len(),
            engine.dealer().hand().len(),
        ));
    }

    assert_eq!(
        seen,
        [
            (Face::Eight, 1, 0),
            (Face::Seven, 2, 0),
            (Face::Ten, 2, 1),
            (Face::Six, 2, 2),
        ]
    );
    assert_eq!(engine.state(), RoundState::PlayerTurn);
    assert!(!engine.dealer().hand().cards()[0].face_up);
    assert_eq!(engine.messages().player_tally, "15");
    assert_eq!(engine.deal_next(), Err(DealError::InvalidState));
}

#[test]
fn deal_twice_is_rejected() {
    let mut engine = RoundEngine::new(TableOptions::default(), 1);
    engine.deal().unwrap();
    assert_eq!(engine.deal(), Err(DealError::InvalidState));
}

#[test]
fn player_blackjack_resolves_on_deal() {
    let mut engine = stacked(&[
        (Face::Ace, Suit::Spades),
        (Face::King, Suit::Spades),
        (Face::Nine, Suit::Hearts), // dealer hole
        (Face::Queen, Suit::Hearts),
    ]);

    assert_eq!(engine.deal(), Ok(RoundState::Resolved));
    assert!(!engine.dealer().hand().has_hidden());

    let result = engine.result().unwrap();
    assert_eq!(result.outcome, Outcome::PlayerWins);
    assert!(result.player_blackjack);
    assert_eq!(result.dealer_value, 19);
    assert_eq!(engine.messages().player_status, "Blackjack!");
    assert_eq!(engine.messages().player_tally, "21");
}

#[test]
fn two_blackjacks_push() {
    let mut engine = stacked(&[
        (Face::Ace, Suit::Spades),
        (Face::King, Suit::Spades),
        (Face::Ace, Suit::Hearts), // dealer hole
        (Face::Queen, Suit::Hearts),
    ]);

    engine.deal().unwrap();
    let result = engine.result().unwrap();
    assert_eq!(result.outcome, Outcome::Push);
    assert!(result.dealer_blackjack);
}

#[test]
fn hit_below_21_keeps_turn() {
    let mut engine = stacked(&[
        (Face::Two, Suit::Spades),
        (Face::Three, Suit::Spades),
        (Face::Nine, Suit::Hearts),
        (Face::Seven, Suit::Hearts),
        (Face::Four, Suit::Clubs), // hit
    ]);

    engine.deal().unwrap();
    let card = engine.hit().unwrap();
    assert_eq!(card.face, Face::Four);
    assert_eq!(engine.state(), RoundState::PlayerTurn);
    assert_eq!(engine.player().hand().final_value(), 9);
}

#[test]
fn bust_resolves_for_dealer() {
    let mut engine = stacked(&[
        (Face::Ten, Suit::Spades),
        (Face::Six, Suit::Spades),
        (Face::Nine, Suit::Hearts), // dealer hole
        (Face::Seven, Suit::Hearts),
        (Face::King, Suit::Clubs), // hit
    ]);

    engine.deal().unwrap();
    assert_eq!(engine.apply("hit"), Ok(tealeaf::Decision::Hit));

    assert_eq!(engine.state(), RoundState::Resolved);
    assert!(!engine.dealer().hand().has_hidden());
    let result = engine.result().unwrap();
    assert_eq!(result.outcome, Outcome::DealerWins);
    assert!(result.player_bust());
    assert_eq!(engine.messages().player_status, "Bust!");
    assert_eq!(engine.messages().game_status, "Dealer wins!");
}

#[test]
fn invalid_input_does_not_advance() {
    let mut engine = stacked(&[
        (Face::Ten, Suit::Spades),
        (Face::Six, Suit::Spades),
        (Face::Nine, Suit::Hearts),
        (Face::Seven, Suit::Hearts),
    ]);
    engine.deal().unwrap();
    let before = engine.player().hand().clone();

    assert_eq!(
        engine.apply("double"),
        Err(ActionError::InvalidDecision(InvalidDecision))
    );
    assert_eq!(engine.state(), RoundState::PlayerTurn);
    assert_eq!(engine.player().hand(), &before);
    assert!(engine.messages().game_status.contains("didn't get that"));

    assert_eq!(engine.apply("S"), Ok(tealeaf::Decision::Stay));
    assert_eq!(engine.state(), RoundState::RevealDealer);
}

#[test]
fn dealer_blackjack_on_reveal() {
    let mut engine = stacked(&[
        (Face::Ten, Suit::Spades),
        (Face::Nine, Suit::Spades),
        (Face::Ace, Suit::Hearts), // dealer hole
        (Face::King, Suit::Hearts),
    ]);

    engine.deal().unwrap();
    engine.stay().unwrap();
    assert_eq!(engine.reveal_dealer(), Ok(RoundState::Resolved));
    assert_eq!(engine.result().unwrap().outcome, Outcome::DealerWins);
}

#[test]
fn dealer_blackjack_beats_three_card_21() {
    let mut engine = stacked(&[
        (Face::Five, Suit::Spades),
        (Face::Six, Suit::Spades),
        (Face::Ace, Suit::Hearts), // dealer hole
        (Face::Jack, Suit::Hearts),
        (Face::Ten, Suit::Clubs), // hit
    ]);

    engine.deal().unwrap();
    engine.hit().unwrap();
    assert_eq!(engine.player().hand().final_value(), 21);
    engine.stay().unwrap();

    let result = engine.advance().unwrap().unwrap();
    assert_eq!(result.outcome, Outcome::DealerWins);
    assert_eq!(result.player_value, 21);
    assert!(result.dealer_blackjack);
}

#[test]
fn dealer_draws_to_17() {
    let mut engine = stacked(&[
        (Face::Ten, Suit::Spades),
        (Face::Eight, Suit::Spades),
        (Face::Ten, Suit::Hearts), // dealer hole
        (Face::Two, Suit::Hearts),
        (Face::Three, Suit::Clubs), // dealer draws
        (Face::Four, Suit::Clubs),  // dealer draws
    ]);

    engine.deal().unwrap();
    engine.stay().unwrap();
    assert_eq!(engine.reveal_dealer(), Ok(RoundState::DealerTurn));

    let drawn = engine.dealer_play().unwrap();
    assert_eq!(drawn.len(), 2);
    assert_eq!(engine.state(), RoundState::Resolved);

    let result = engine.result().unwrap();
    assert_eq!(result.dealer_value, 19);
    assert_eq!(result.outcome, Outcome::DealerWins);
}

#[test]
fn dealer_stands_on_soft_17() {
    let mut engine = stacked(&[
        (Face::Ten, Suit::Spades),
        (Face::Eight, Suit::Spades),
        (Face::Six, Suit::Hearts), // dealer hole
        (Face::Ace, Suit::Hearts),
    ]);

    engine.deal().unwrap();
    assert_eq!(engine.messages().dealer_tally, "1/11");
    engine.stay().unwrap();
    engine.reveal_dealer().unwrap();

    assert_eq!(engine.dealer_hit(), Ok(None));
    let result = engine.result().unwrap();
    assert_eq!(result.dealer_value, 17);
    assert_eq!(result.outcome, Outcome::PlayerWins);
    assert_eq!(engine.messages().dealer_tally, "17");
}

#[test]
fn equal_totals_push() {
    let mut engine = stacked(&[
        (Face::Ten, Suit::Spades),
        (Face::King, Suit::Spades),
        (Face::Queen, Suit::Hearts), // dealer hole
        (Face::Jack, Suit::Hearts),
    ]);

    engine.deal().unwrap();
    engine.stay().unwrap();
    let result = engine.advance().unwrap().unwrap();
    assert_eq!(result.outcome, Outcome::Push);
    assert_eq!(engine.messages().game_status, "Push. Nobody wins.");
}

#[test]
fn dealer_bust_pays_player() {
    let mut engine = stacked(&[
        (Face::Ten, Suit::Spades),
        (Face::Two, Suit::Spades),
        (Face::Ten, Suit::Hearts), // dealer hole
        (Face::Six, Suit::Hearts),
        (Face::Nine, Suit::Clubs), // dealer draws
    ]);

    engine.deal().unwrap();
    engine.stay().unwrap();
    let result = engine.advance().unwrap().unwrap();
    assert!(result.dealer_bust());
    assert_eq!(result.outcome, Outcome::PlayerWins);
}

#[test]
fn soft_tally_settles_on_resolution() {
    let mut engine = stacked(&[
        (Face::Ace, Suit::Spades),
        (Face::Six, Suit::Spades),
        (Face::Ten, Suit::Hearts), // dealer hole
        (Face::Eight, Suit::Hearts),
    ]);

    engine.deal().unwrap();
    assert_eq!(engine.messages().player_tally, "7/17");

    engine.stay().unwrap();
    engine.advance().unwrap();
    assert_eq!(engine.messages().player_tally, "17");
    assert_eq!(engine.result().unwrap().outcome, Outcome::DealerWins);

    let snapshot = engine.snapshot();
    assert_eq!(snapshot.player_value.to_string(), "17");
    assert!(!snapshot.player_value.has_soft_alternative());
}

#[test]
fn stay_status_survives_resolution() {
    let mut engine = stacked(&[
        (Face::Ten, Suit::Spades),
        (Face::Nine, Suit::Spades),
        (Face::Ten, Suit::Hearts), // dealer hole
        (Face::Eight, Suit::Hearts),
    ]);

    engine.deal().unwrap();
    engine.stay().unwrap();
    let result = engine.advance().unwrap().unwrap();

    assert_eq!(result.outcome, Outcome::PlayerWins);
    assert_eq!(engine.messages().player_status, "Stays on 19");
    assert_eq!(engine.messages().dealer_status, "");
    assert_eq!(engine.messages().game_status, "Player wins!");
}

#[test]
fn actions_outside_their_phase_are_rejected() {
    let mut engine = RoundEngine::new(TableOptions::default(), 3);

    assert_eq!(engine.hit(), Err(ActionError::InvalidState));
    assert_eq!(engine.stay(), Err(ActionError::InvalidState));
    assert_eq!(engine.apply("h"), Err(ActionError::InvalidState));
    assert_eq!(engine.reveal_dealer(), Err(DealerError::InvalidState));
    assert_eq!(engine.dealer_hit(), Err(DealerError::InvalidState));
    assert_eq!(engine.dealer_play(), Err(DealerError::InvalidState));
    assert_eq!(engine.state(), RoundState::Dealing);
    assert!(engine.player().hand().is_empty());
}

#[test]
fn reset_mid_round_keeps_every_card() {
    let mut engine = RoundEngine::new(TableOptions::default(), 11);
    engine.deal().unwrap();
    while engine.state() == RoundState::PlayerTurn && engine.player().hand().len() < 4 {
        engine.hit().unwrap();
    }

    engine.reset();
    assert_eq!(engine.state(), RoundState::Dealing);
    assert!(engine.player().hand().is_empty());
    assert!(engine.dealer().hand().is_empty());
    assert_eq!(engine.result(), None);
    assert_eq!(engine.messages(), &tealeaf::Messages::default());
    assert_full_deck(&engine);
}

#[test]
fn many_rounds_always_resolve() {
    for seed in 0..200 {
        let mut engine = RoundEngine::new(TableOptions::default(), seed);
        for _ in 0..3 {
            engine.deal().unwrap();
            while engine.state() == RoundState::PlayerTurn {
                let decision = if engine.player().hand().final_value() < 17 {
                    "h"
                } else {
                    "s"
                };
                engine.apply(decision).unwrap();
            }

            let result = engine.advance().unwrap().unwrap();
            assert_eq!(engine.state(), RoundState::Resolved);
            assert!(!engine.dealer().hand().has_hidden());
            if !result.player_bust() && !result.player_blackjack && !result.dealer_blackjack {
                assert!(result.dealer_value >= 17);
            }
            assert_full_deck(&engine);
            engine.reset();
        }
    }
}

#[test]
fn snapshot_reflects_table() {
    let options = TableOptions::default().with_dealer_name("House");
    let mut engine = stacked_with(
        options,
        &[
            (Face::Ten, Suit::Spades),
            (Face::Six, Suit::Spades),
            (Face::Nine, Suit::Hearts),
            (Face::Seven, Suit::Hearts),
        ],
    );
    engine.set_player_name("  grace ");
    engine.deal().unwrap();

    let snapshot = engine.snapshot();
    assert_eq!(snapshot.state, RoundState::PlayerTurn);
    assert_eq!(snapshot.player_name, "Grace");
    assert_eq!(snapshot.dealer_name, "House");
    assert_eq!(engine.player().role(), Role::Player);
    assert_eq!(engine.dealer().role(), Role::Dealer);
    assert_eq!(snapshot.player_cards.len(), 2);
    assert_eq!(snapshot.dealer_cards.len(), 2);
    assert!(!snapshot.dealer_cards[0].face_up);
    assert_eq!(snapshot.player_value.total(), 16);
    assert_eq!(snapshot.dealer_value.total(), 7);
    assert_eq!(snapshot.result, None);
}
