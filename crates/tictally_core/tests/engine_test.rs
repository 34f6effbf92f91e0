//! Round lifecycle and scoring through the public engine API.

use std::cell::RefCell;
use std::rc::Rc;

use tictally_core::{
    EngineError, GameEngine, GameEvent, Ignored, Outcome, Placement, Player, Position,
    RoundState, Score, Square, WinLine,
};

fn play(engine: &mut GameEngine, indices: &[usize]) -> Vec<Placement> {
    indices
        .iter()
        .map(|&i| engine.place_mark(i).expect("index in range"))
        .collect()
}

fn recording(engine: &mut GameEngine) -> Rc<RefCell<Vec<GameEvent>>> {
    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&events);
    engine.subscribe(move |event: &GameEvent| sink.borrow_mut().push(*event));
    events
}

#[test]
fn test_turn_toggles_once_per_accepted_move() {
    let mut engine = GameEngine::new();
    let mut expected = Player::X;
    for index in [4, 0, 8, 2, 1, 7] {
        assert_eq!(engine.current_player(), expected);
        engine.place_mark(index).unwrap();
        expected = expected.opponent();
    }
    assert_eq!(engine.round_state(), RoundState::InProgress);
    assert_eq!(engine.current_player(), Player::X);
}

#[test]
fn test_occupied_square_is_ignored() {
    let mut engine = GameEngine::new();
    play(&mut engine, &[4]);
    let board_before = engine.board().clone();

    let placement = engine.place_mark(4).unwrap();

    assert_eq!(
        placement,
        Placement::Ignored(Ignored::SquareOccupied(Position::Center))
    );
    assert_eq!(engine.board(), &board_before);
    assert_eq!(engine.current_player(), Player::O);
}

#[test]
fn test_moves_after_win_are_ignored() {
    let mut engine = GameEngine::new();
    play(&mut engine, &[0, 3, 1, 4, 2]);
    let board_before = engine.board().clone();
    let score_before = engine.score();

    for index in [5, 6, 7, 8] {
        assert_eq!(
            engine.place_mark(index).unwrap(),
            Placement::Ignored(Ignored::RoundOver)
        );
    }

    assert_eq!(engine.board(), &board_before);
    assert_eq!(engine.score(), score_before);
    assert_eq!(engine.round_state(), RoundState::Won(Player::X));
    assert_eq!(engine.current_player(), Player::X);
}

#[test]
fn test_moves_after_draw_are_ignored() {
    let mut engine = GameEngine::new();
    play(&mut engine, &[0, 4, 2, 1, 3, 5, 7, 6, 8]);
    assert_eq!(engine.round_state(), RoundState::Draw);
    let board_before = engine.board().clone();
    let player_before = engine.current_player();

    for index in 0..9 {
        assert_eq!(
            engine.place_mark(index).unwrap(),
            Placement::Ignored(Ignored::RoundOver)
        );
    }

    assert_eq!(engine.board(), &board_before);
    assert_eq!(engine.current_player(), player_before);
    assert_eq!(engine.current_player(), Player::X);
    assert_eq!(engine.round_state(), RoundState::Draw);
    assert_eq!(engine.score(), Score::new(0, 0, 1));
}

#[test]
fn test_every_line_wins_for_x() {
    for line in WinLine::ALL {
        let mut engine = GameEngine::new();
        let targets = line.indices();
        let mut fillers = (0..9).filter(|i| !targets.contains(i));
        let mut moves = Vec::new();
        for (n, &target) in targets.iter().enumerate() {
            moves.push(target);
            if n < 2 {
                // O answers away from the line and avoids completing its own.
                let filler = fillers.next().expect("six spare squares");
                moves.push(filler);
            }
        }

        let placements = play(&mut engine, &moves);

        let outcome = Outcome::Win {
            winner: Player::X,
            line,
        };
        assert_eq!(placements.last(), Some(&Placement::RoundEnded(outcome)), "{:?}", line);
        assert_eq!(engine.round_state(), RoundState::Won(Player::X));
        assert_eq!(engine.winning_line(), Some(line));
        assert_eq!(engine.score(), Score::new(1, 0, 0));
    }
}

#[test]
fn test_every_line_wins_for_o() {
    for line in WinLine::ALL {
        let targets = line.indices();
        // X opens away from the line, then keeps playing squares that never
        // complete a line of its own before O finishes.
        let spare: Vec<usize> = (0..9).filter(|i| !targets.contains(i)).collect();
        let mut found = false;
        for a in 0..spare.len() {
            for b in 0..spare.len() {
                for c in 0..spare.len() {
                    if a == b || b == c || a == c {
                        continue;
                    }
                    let mut engine = GameEngine::new();
                    let moves = [
                        spare[a], targets[0], spare[b], targets[1], spare[c], targets[2],
                    ];
                    let placements = play(&mut engine, &moves);
                    if engine.round_state() == RoundState::Won(Player::O) {
                        assert_eq!(engine.winning_line(), Some(line));
                        assert!(placements[..5].iter().all(|p| matches!(p, Placement::TurnChanged { .. })));
                        assert_eq!(engine.score(), Score::new(0, 1, 0));
                        found = true;
                    }
                }
            }
        }
        assert!(found, "O could not win on {:?}", line);
    }
}

#[test]
fn test_full_board_without_line_is_draw() {
    let mut engine = GameEngine::new();
    let placements = play(&mut engine, &[0, 4, 2, 1, 3, 5, 7, 6, 8]);

    assert_eq!(placements.last(), Some(&Placement::RoundEnded(Outcome::Draw)));
    assert_eq!(engine.round_state(), RoundState::Draw);
    assert_eq!(engine.winning_line(), None);
    assert_eq!(engine.score(), Score::new(0, 0, 1));
    assert!(engine.board().squares().iter().all(|s| *s != Square::Empty));
}

#[test]
fn test_row_scenario() {
    let mut engine = GameEngine::new();
    play(&mut engine, &[0, 3, 1, 4, 2]);

    assert_eq!(engine.round_state(), RoundState::Won(Player::X));
    assert_eq!(engine.winning_line().map(|l| l.indices()), Some([0, 1, 2]));
    assert_eq!(*engine.score().x_wins(), 1);
}

#[test]
fn test_alternating_play_of_fill_sequence_ends_on_anti_diagonal() {
    let mut engine = GameEngine::new();
    let placements = play(&mut engine, &[0, 1, 2, 3, 4, 5, 6, 8, 7]);

    assert_eq!(engine.round_state(), RoundState::Won(Player::X));
    assert_eq!(engine.winning_line().map(|l| l.indices()), Some([2, 4, 6]));
    assert!(placements[7..].iter().all(|p| !p.is_accepted()));
}

#[test]
fn test_scores_accumulate_across_rounds() {
    let mut engine = GameEngine::new();
    play(&mut engine, &[0, 3, 1, 4, 2]);
    engine.start_round();
    play(&mut engine, &[8, 0, 7, 1, 3, 2]);
    engine.start_round();
    play(&mut engine, &[0, 4, 2, 1, 3, 5, 7, 6, 8]);

    assert_eq!(engine.score(), Score::new(1, 1, 1));
}

#[test]
fn test_start_round_always_hands_move_to_x() {
    let mut engine = GameEngine::new();
    play(&mut engine, &[4]);
    assert_eq!(engine.current_player(), Player::O);
    engine.start_round();
    assert_eq!(engine.current_player(), Player::X);

    play(&mut engine, &[8, 0, 7, 1, 3, 2]);
    assert_eq!(engine.round_state(), RoundState::Won(Player::O));
    engine.start_round();
    assert_eq!(engine.current_player(), Player::X);
    assert_eq!(engine.round_state(), RoundState::InProgress);
    assert_eq!(engine.winning_line(), None);
    assert_eq!(engine.score(), Score::new(0, 1, 0));
}

#[test]
fn test_reset_scores_clears_and_starts_round() {
    let mut engine = GameEngine::new();
    play(&mut engine, &[0, 3, 1, 4, 2]);
    engine.start_round();
    play(&mut engine, &[4, 0]);

    engine.reset_scores();

    assert_eq!(engine.score(), Score::new(0, 0, 0));
    assert!(engine.board().squares().iter().all(|s| *s == Square::Empty));
    assert_eq!(engine.current_player(), Player::X);
    assert_eq!(engine.round_state(), RoundState::InProgress);
}

#[test]
fn test_out_of_range_index_fails_fast() {
    let mut engine = GameEngine::new();
    let events = recording(&mut engine);

    assert_eq!(
        engine.place_mark(9),
        Err(EngineError::IndexOutOfRange { index: 9 })
    );
    assert_eq!(
        engine.place_mark(usize::MAX).unwrap_err().to_string(),
        format!("Position index {} out of range (must be 0-8)", usize::MAX)
    );
    assert_eq!(engine.board(), &tictally_core::Board::new());
    assert_eq!(engine.current_player(), Player::X);
    assert!(events.borrow().is_empty());
}

#[test]
fn test_observers_see_one_event_per_accepted_move() {
    let mut engine = GameEngine::new();
    let events = recording(&mut engine);

    engine.start_round();
    play(&mut engine, &[0, 3, 3, 1, 4, 2, 8]);

    let line = WinLine::ALL[0];
    assert_eq!(
        *events.borrow(),
        vec![
            GameEvent::RoundStarted,
            GameEvent::TurnChanged { to_move: Player::O },
            GameEvent::TurnChanged { to_move: Player::X },
            GameEvent::TurnChanged { to_move: Player::O },
            GameEvent::TurnChanged { to_move: Player::X },
            GameEvent::RoundEnded(Outcome::Win {
                winner: Player::X,
                line
            }),
        ]
    );
}

#[test]
fn test_reset_scores_notifies_round_started() {
    let mut engine = GameEngine::new();
    let events = recording(&mut engine);
    engine.reset_scores();
    assert_eq!(*events.borrow(), vec![GameEvent::RoundStarted]);
}

#[test]
fn test_observers_called_in_subscription_order() {
    let mut engine = GameEngine::new();
    let order = Rc::new(RefCell::new(Vec::new()));
    for id in 0..3 {
        let order = Rc::clone(&order);
        engine.subscribe(move |_: &GameEvent| order.borrow_mut().push(id));
    }
    engine.place(Position::Center);
    assert_eq!(*order.borrow(), vec![0, 1, 2]);
}

#[test]
fn test_independent_engines_share_nothing() {
    let mut first = GameEngine::new();
    let second = GameEngine::new();
    play(&mut first, &[0, 3, 1, 4, 2]);
    assert_eq!(second.score(), Score::default());
    assert_eq!(second.board(), &tictally_core::Board::new());
}
