//! End-to-end games through the public service API

use std::sync::{Arc, Barrier};
use std::thread;
use std::time::{Duration, Instant};
use wordle_sessions::config::GameConfig;
use wordle_sessions::error::GameError;
use wordle_sessions::game::{GameService, GameState, SessionStore};
use wordle_sessions::protocol::handle_line;
use wordle_sessions::wordlists::loader::words_from_slice;
use wordle_sessions::wordlists::{Catalog, WordList};

fn catalog() -> Catalog {
    let mut catalog = Catalog::new();
    catalog.insert(
        WordList::new(
            "fixed",
            "Fixed",
            "single target",
            words_from_slice(&["CRANE"]),
            words_from_slice(&["CRATE", "SLATE", "ALLOY"]),
        )
        .unwrap(),
    );
    catalog
}

fn service_with(idle_timeout: Duration, attempts: usize) -> GameService {
    GameService::new(
        Arc::new(SessionStore::new(idle_timeout)),
        Arc::new(catalog()),
        &GameConfig {
            total_attempts: attempts,
            default_dictionary: "fixed".to_string(),
            ..GameConfig::default()
        },
    )
}

fn service() -> GameService {
    service_with(Duration::from_secs(600), 6)
}

#[test]
fn full_game_by_typing_letters() {
    let service = service();
    let id = service.start("", None).unwrap().id;

    for letter in "CRATX".chars() {
        service.add_letter(id, letter).unwrap();
    }
    service.delete_letter(id).unwrap();
    service.add_letter(id, 'E').unwrap();

    let reply = service.submit_row(id).unwrap();
    assert_eq!(reply.result.unwrap().to_string(), "22202");

    let view = service.view(id).unwrap();
    assert_eq!(view.current_attempt, 1);
    assert_eq!(view.state, GameState::Active);

    for letter in "crane".chars() {
        service.add_letter(id, letter).unwrap();
    }
    let reply = service.submit_row(id).unwrap();
    assert!(reply.won);

    let view = service.view(id).unwrap();
    assert_eq!(view.state, GameState::Won);
    assert!(view.won && view.finished);
    assert_eq!(service.add_letter(id, 'A'), Err(GameError::SessionFinished));
}

#[test]
fn partial_row_is_pending_and_invalid_word_costs_nothing() {
    let service = service();
    let id = service.start("fixed", None).unwrap().id;

    service.add_letter(id, 'C').unwrap();
    assert!(service.submit_row(id).unwrap().is_pending());

    assert_eq!(
        service.submit(id, "ZZZZZ"),
        Err(GameError::InvalidWord("ZZZZZ".to_string()))
    );
    assert_eq!(service.view(id).unwrap().current_attempt, 0);
}

#[test]
fn losing_reveals_the_word() {
    let service = service_with(Duration::from_secs(600), 2);
    let id = service.start("fixed", None).unwrap().id;

    assert!(!service.submit(id, "SLATE").unwrap().finished);
    let last = service.submit(id, "ALLOY").unwrap();
    assert!(last.finished);
    assert!(!last.won);
    assert_eq!(last.word.as_deref(), Some("CRANE"));
}

#[test]
fn racing_submissions_to_one_session_finish_it_once() {
    let service = service();
    let id = service.start("fixed", None).unwrap().id;

    let results: Vec<_> = thread::scope(|s| {
        let handles: Vec<_> = (0..2)
            .map(|_| s.spawn(|| service.submit(id, "CRANE")))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    let wins = results
        .iter()
        .filter(|r| r.as_ref().is_ok_and(|reply| reply.won))
        .count();
    let rejected = results
        .iter()
        .filter(|r| **r == Err(GameError::SessionFinished))
        .count();
    assert_eq!((wins, rejected), (1, 1));
    assert_eq!(service.view(id).unwrap().state, GameState::Won);
}

#[test]
fn double_submit_of_a_typed_row_applies_once() {
    let service = service();
    let id = service.start("fixed", None).unwrap().id;
    for letter in "CRATE".chars() {
        service.add_letter(id, letter).unwrap();
    }

    let barrier = Barrier::new(2);
    let replies: Vec<_> = thread::scope(|s| {
        let handles: Vec<_> = (0..2)
            .map(|_| {
                s.spawn(|| {
                    barrier.wait();
                    service.submit_row(id).unwrap()
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    let applied: Vec<_> = replies.iter().filter_map(|r| r.result.as_ref()).collect();
    assert_eq!(applied.len(), 1);
    assert_eq!(applied[0].to_string(), "22202");
    assert_eq!(replies.iter().filter(|r| r.is_pending()).count(), 1);

    let view = service.view(id).unwrap();
    assert_eq!(view.current_attempt, 1);
    assert!(view.board.rows()[1].is_empty());
}

#[test]
fn independent_sessions_play_in_parallel() {
    let service = service();

    thread::scope(|s| {
        for _ in 0..8 {
            s.spawn(|| {
                let id = service.start("fixed", None).unwrap().id;
                assert_eq!(
                    service.submit(id, "CRATE").unwrap().result.unwrap().to_string(),
                    "22202"
                );
                assert!(service.submit(id, "CRANE").unwrap().won);
            });
        }
    });

    assert_eq!(service.store().len(), 8);
}

#[test]
fn idle_sessions_are_swept() {
    let service = service_with(Duration::from_secs(60), 6);
    let stale = service.start("fixed", None).unwrap().id;

    let later = Instant::now() + Duration::from_secs(120);
    assert_eq!(service.store().sweep_expired_at(later), 1);
    assert_eq!(service.view(stale), Err(GameError::UnknownSession));
    assert_eq!(service.submit(stale, "CRANE"), Err(GameError::UnknownSession));
}

#[test]
fn json_lines_round_trip() {
    let service = service();

    let request = |line: &str| serde_json::to_value(handle_line(&service, line)).unwrap();

    let started = request(r#"{"op":"start","dictName":"fixed"}"#);
    assert_eq!(started["totalAttempts"], 6);
    assert_eq!(started["wordLength"], 5);
    let id = started["id"].as_str().unwrap().to_string();

    let submit = format!(r#"{{"op":"submit","id":"{id}","guess":"crate"}}"#);
    assert_eq!(request(&submit)["result"], "22202");

    assert_eq!(
        request(r#"{"op":"view","id":"nope"}"#),
        serde_json::json!({ "error": "unknown session" })
    );
}
