use spelldle_core::session::GameSession;
use spelldle_core::spell::{Spell, SpellText};
use spelldle_core::types::{CooldownHint, Feedback, Locale, SpecMatch};

fn fireball() -> Spell {
    Spell::new(1, 0).with_translation(
        Locale::En,
        SpellText {
            name: "Fireball".to_string(),
            description: "Launch a fireball".to_string(),
            class: "Mage".to_string(),
            spec: vec!["Fire".to_string()],
            school: "Fire".to_string(),
            use_type: "Damaging".to_string(),
        },
    )
}

#[test]
fn golden_feedback_serialization() {
    let feedback = Feedback {
        class: true,
        spec: SpecMatch::Partial,
        school: false,
        use_type: true,
        cooldown: CooldownHint::Longer,
    };

    const EXPECTED_JSON: &str =
        r#"{"class":true,"spec":"partial","school":false,"useType":true,"cooldown":"longer"}"#;

    assert_eq!(serde_json::to_string(&feedback).unwrap(), EXPECTED_JSON);

    let back: Feedback = serde_json::from_str(EXPECTED_JSON).unwrap();
    assert_eq!(back, feedback);
}

#[test]
fn golden_spell_serialization() {
    let json = serde_json::to_value(fireball()).unwrap();

    assert_eq!(
        json,
        serde_json::json!({
            "id": 1,
            "translations": {
                "en": {
                    "name": "Fireball",
                    "description": "Launch a fireball",
                    "class": "Mage",
                    "spec": ["Fire"],
                    "school": "Fire",
                    "useType": "Damaging"
                }
            },
            "cooldown": 0
        })
    );

    let with_icon = serde_json::to_value(fireball().with_icon("/assets/spell-icons/fireball.svg")).unwrap();
    assert_eq!(with_icon["iconPath"], "/assets/spell-icons/fireball.svg");
}

#[test]
fn guess_record_carries_attempt_number_in_camel_case() {
    let mut session = GameSession::new(fireball());
    let record = session.submit_guess(Some(&fireball()), Locale::En).unwrap().clone();

    let json = serde_json::to_value(&record).unwrap();
    assert_eq!(json["attemptNumber"], 1);
    assert_eq!(json["feedback"]["spec"], "correct");
    assert_eq!(json["feedback"]["cooldown"], "correct");
}
