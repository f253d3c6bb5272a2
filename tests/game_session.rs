use rand::rngs::StdRng;
use rand::SeedableRng;
use spelldle_core::catalog::{find_by_name, InMemoryCatalog};
use spelldle_core::daily::{DailySelector, InMemoryRecordStore, SelectionConfig};
use spelldle_core::session::GameSession;
use spelldle_core::spell::{Spell, SpellText};
use spelldle_core::types::{GameDate, Locale, SessionError, SpellId};

fn make_spell(id: u32, name: &str, cooldown: u32) -> Spell {
    Spell::new(id, cooldown).with_translation(
        Locale::En,
        SpellText {
            name: name.to_string(),
            description: String::new(),
            class: "Priest".to_string(),
            spec: vec!["Holy".to_string(), "Discipline".to_string()],
            school: "Holy".to_string(),
            use_type: "Healing".to_string(),
        },
    )
}

#[test]
fn attempts_are_numbered_from_one() {
    let target = make_spell(1, "Heal", 0);
    let other = make_spell(2, "Flash Heal", 6);
    let mut session = GameSession::new(target);

    assert_eq!(session.attempt_count(), 0);
    assert!(!session.has_won());

    for n in 1..=5 {
        let record = session.submit_guess(Some(&other), Locale::En).unwrap();
        assert_eq!(record.attempt_number, n);
    }

    assert_eq!(session.attempt_count(), 5);
    let numbers: Vec<u32> = session.guesses().iter().map(|g| g.attempt_number).collect();
    assert_eq!(numbers, vec![1, 2, 3, 4, 5]);
}

#[test]
fn decoy_with_identical_attributes_does_not_win() {
    let target = make_spell(1, "Heal", 10);
    let decoy = make_spell(2, "Greater Heal", 10);
    let mut session = GameSession::new(target.clone());

    let record = session.submit_guess(Some(&decoy), Locale::En).unwrap();
    assert!(record.feedback.is_full_match());
    assert!(!session.has_won());

    session.submit_guess(Some(&target), Locale::En).unwrap();
    assert!(session.has_won());
    assert_eq!(session.attempt_count(), 2);
}

#[test]
fn unresolved_candidate_is_rejected_without_consuming_an_attempt() {
    let catalog = vec![make_spell(1, "Heal", 0)];
    let mut session = GameSession::new(catalog[0].clone());

    let candidate = find_by_name(&catalog, "Renew", Locale::En);
    let err = session.submit_guess(candidate, Locale::En).unwrap_err();

    assert_eq!(err, SessionError::InvalidCandidate);
    assert_eq!(session.attempt_count(), 0);
}

#[test]
fn guessing_continues_after_a_win() {
    let target = make_spell(1, "Heal", 0);
    let mut session = GameSession::new(target.clone());

    session.submit_guess(Some(&target), Locale::En).unwrap();
    session.submit_guess(Some(&make_spell(2, "Renew", 0)), Locale::En).unwrap();

    assert!(session.has_won());
    assert_eq!(session.guessed_ids(), vec![SpellId::new(1), SpellId::new(2)]);
}

#[test]
fn reset_clears_guesses_but_not_the_daily_target() {
    let catalog = InMemoryCatalog::new(
        (1..=8).map(|id| make_spell(id, &format!("Spell {id}"), id)).collect(),
    )
    .unwrap();
    let store = InMemoryRecordStore::new();
    let selector = DailySelector::new(&catalog, &store, SelectionConfig::v0());
    let today = GameDate::from_ymd(2026, 10, 16).unwrap();

    let target = selector
        .select_target_with_rng(today, &mut StdRng::seed_from_u64(3))
        .unwrap();
    let mut session = GameSession::new(target.clone());
    session.submit_guess(Some(&target), Locale::En).unwrap();
    assert!(session.has_won());

    session.reset();
    assert_eq!(session.attempt_count(), 0);
    assert!(!session.has_won());
    assert!(session.guesses().is_empty());

    let replay = selector
        .select_target_with_rng(today, &mut StdRng::seed_from_u64(99))
        .unwrap();
    assert_eq!(replay.id, target.id);
    assert_eq!(session.target().id, target.id);
}
