//! Integration tests for the story viewer
//!
//! These drive the state machine the way the UI timer would: a repeating
//! tick carrying the current token, re-keyed on every transition.

use folio_core::{Highlight, MediaKind};
use folio_playback::{
    CloseReason, StoryConfig, StoryEvent, StoryPlayer, StoryPhase, TickOutcome,
};

// ===== Test Helpers =====

fn highlights(n: usize) -> Vec<Highlight> {
    (0..n)
        .map(|i| {
            let mut h = Highlight::placeholder(0);
            h.id = format!("highlight-{i}");
            if i % 2 == 1 {
                h.media_kind = MediaKind::Video;
            }
            h
        })
        .collect()
}

/// Open at the first item and run uninterrupted until the viewer closes,
/// recording visited ids.
fn run_to_completion(player: &mut StoryPlayer) -> Vec<String> {
    let mut token = player.open(0).unwrap();
    let mut visited = vec![player.current().unwrap().id.clone()];

    // Safety bound far above 100 ticks per item
    for _ in 0..(player.len() * 120) {
        match player.tick(token) {
            TickOutcome::Progressed(_) | TickOutcome::Frozen => {}
            TickOutcome::Advanced { token: fresh, .. } => {
                token = fresh;
                visited.push(player.current().unwrap().id.clone());
            }
            TickOutcome::Finished => return visited,
            TickOutcome::Stale => panic!("driver token went stale unexpectedly"),
        }
    }
    panic!("viewer never finished");
}

// ===== Scenarios =====

#[test]
fn uninterrupted_playback_visits_every_item_in_order() {
    let mut player = StoryPlayer::new(highlights(5), StoryConfig::default());

    let visited = run_to_completion(&mut player);

    let expected: Vec<String> = (0..5).map(|i| format!("highlight-{i}")).collect();
    assert_eq!(visited, expected);
    assert_eq!(player.phase(), StoryPhase::Closed);
}

#[test]
fn finishing_emits_closed_with_finished_reason() {
    let mut player = StoryPlayer::new(highlights(2), StoryConfig::default());
    run_to_completion(&mut player);

    let events = player.drain_events();
    assert!(matches!(
        events.last(),
        Some(StoryEvent::Closed {
            reason: CloseReason::Finished
        })
    ));
}

#[test]
fn pause_resume_mid_sequence_keeps_position() {
    let mut player = StoryPlayer::new(highlights(3), StoryConfig::default());
    let mut token = player.open(0).unwrap();

    // Play through the first item into the second
    for _ in 0..100 {
        if let TickOutcome::Advanced { token: fresh, .. } = player.tick(token) {
            token = fresh;
        }
    }
    assert_eq!(player.index(), 1);

    // Advance part way, pause, hammer the timer, resume
    for _ in 0..30 {
        player.tick(token);
    }
    player.pause();
    for _ in 0..500 {
        assert_eq!(player.tick(token), TickOutcome::Frozen);
    }
    assert_eq!(player.progress(), 30);

    player.resume();
    assert_eq!(player.tick(token), TickOutcome::Progressed(31));
}

#[test]
fn closing_cancels_the_pending_tick() {
    let mut player = StoryPlayer::new(highlights(3), StoryConfig::default());
    let token = player.open(0).unwrap();
    for _ in 0..42 {
        player.tick(token);
    }

    player.close();

    // The timer fires once more after close; it must be a no-op
    assert_eq!(player.tick(token), TickOutcome::Stale);
    assert!(!player.is_open());
    assert_eq!(player.progress(), 0);
}

#[test]
fn navigation_walks_backward_and_forward() {
    let mut player = StoryPlayer::new(highlights(3), StoryConfig::default());
    player.open(2).unwrap();

    player.previous().unwrap();
    assert_eq!(player.index(), 1);

    player.previous().unwrap();
    assert_eq!(player.index(), 0);

    // At the first item "previous" only resets progress
    let token = player.previous().unwrap();
    assert_eq!(player.index(), 0);
    assert_eq!(player.progress(), 0);

    player.tick(token);
    player.next().unwrap();
    assert_eq!(player.index(), 1);
    assert_eq!(player.progress(), 0);
}

#[test]
fn reopening_mid_item_restarts_cleanly() {
    let mut player = StoryPlayer::new(highlights(2), StoryConfig::default());
    let first = player.open(0).unwrap();
    for _ in 0..70 {
        player.tick(first);
    }

    // Operator taps a different thumbnail while the viewer is open
    let second = player.open(1).unwrap();

    assert_eq!(player.index(), 1);
    assert_eq!(player.progress(), 0);
    assert_eq!(player.tick(first), TickOutcome::Stale);
    assert_eq!(player.tick(second), TickOutcome::Progressed(1));
}

#[test]
fn item_events_tell_the_ui_what_to_mount() {
    let mut player = StoryPlayer::new(highlights(2), StoryConfig::default());
    let mut token = player.open(0).unwrap();
    for _ in 0..100 {
        if let TickOutcome::Advanced { token: fresh, .. } = player.tick(token) {
            token = fresh;
        }
    }

    let events = player.drain_events();
    // index 1 is a video in the fixture; it must mount muted
    assert!(events.iter().any(|e| matches!(
        e,
        StoryEvent::ItemChanged {
            index: 1,
            autoplay_muted: true,
            ..
        }
    )));
}
