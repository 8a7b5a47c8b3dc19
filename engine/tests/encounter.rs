use std::io::Cursor;

use engine::{
    run_encounter, status_table, Choice, Console, Encounter, EncounterEnd, EncounterState,
    Monster, MonsterKind, Player,
};

fn noop_log(_: String) {}

fn coin(side: i32) -> impl FnMut(i32, i32) -> i32 {
    move |_, _| side
}

fn script(draws: Vec<i32>) -> impl FnMut(i32, i32) -> i32 {
    let mut draws = draws.into_iter();
    move |_, _| draws.next().expect("script ran out of draws")
}

#[test]
fn choices_are_lowercase_only() {
    assert_eq!(Choice::from('f'), Choice::Fight);
    assert_eq!(Choice::from('r'), Choice::Run);
    assert_eq!(Choice::from('F'), Choice::Other('F'));
    assert_eq!(Choice::from('x'), Choice::Other('x'));
}

#[test]
fn successful_escape_changes_nothing() {
    let mut hero = Player::new("Hero");
    let mut enc = Encounter::new(Monster::new(MonsterKind::Dragon));
    let mut seen = vec![];

    let state = enc.apply(&mut hero, Choice::Run, &mut coin(1), |s| seen.push(s));

    assert_eq!(state, EncounterState::Resolved(EncounterEnd::Escaped));
    assert_eq!(hero, Player::new("Hero"));
    assert_eq!(enc.monster, Monster::new(MonsterKind::Dragon));
    assert_eq!(seen, vec!["You escaped the dragon."]);
}

#[test]
fn failed_escape_gives_monster_a_free_hit() {
    let mut hero = Player::new("Hero");
    let mut enc = Encounter::new(Monster::new(MonsterKind::Orc));
    let mut seen = vec![];

    let state = enc.apply(&mut hero, Choice::Run, &mut coin(0), |s| seen.push(s));

    assert_eq!(state, EncounterState::AwaitingChoice);
    assert_eq!(hero.creature.health, 8);
    assert_eq!(enc.monster, Monster::new(MonsterKind::Orc));
    assert_eq!(seen, vec!["You couldn't escape the orc.", "The orc hit you for 2 damage."]);
}

#[test]
fn failed_escape_can_kill() {
    let mut hero = Player::new("Hero");
    hero.creature.health = 3;
    let mut enc = Encounter::new(Monster::new(MonsterKind::Dragon));

    let state = enc.apply(&mut hero, Choice::Run, &mut coin(0), noop_log);

    assert_eq!(state, EncounterState::Resolved(EncounterEnd::PlayerDead));
    assert!(!EncounterEnd::PlayerDead.escaped());
}

#[test]
fn unrecognised_input_is_ignored() {
    let mut hero = Player::new("Hero");
    let mut enc = Encounter::new(Monster::new(MonsterKind::Orc));
    let mut seen = vec![];
    let mut never = |_: i32, _: i32| -> i32 { panic!("no draw expected") };

    let state = enc.apply(&mut hero, Choice::Other('F'), &mut never, |s| seen.push(s));

    assert_eq!(state, EncounterState::AwaitingChoice);
    assert_eq!(hero, Player::new("Hero"));
    assert!(seen.is_empty());
}

#[test]
fn one_health_player_dies_to_orc_counter() {
    let mut hero = Player::new("Hero");
    hero.creature.health = 1;
    let mut enc = Encounter::new(Monster::new(MonsterKind::Orc));

    let state = enc.apply(&mut hero, Choice::Fight, &mut coin(0), noop_log);

    assert_eq!(enc.monster.creature.health, 3);
    assert_eq!(hero.creature.health, -1);
    assert_eq!(state, EncounterState::Resolved(EncounterEnd::PlayerDead));
}

#[test]
fn killing_blow_resolves_monster_dead() {
    let mut hero = Player::new("Hero");
    let mut enc = Encounter::new(Monster::new(MonsterKind::Slime));
    assert_eq!(enc.state(), EncounterState::AwaitingChoice);

    let state = enc.apply(&mut hero, Choice::Fight, &mut coin(0), noop_log);
    assert_eq!(enc.state(), state);

    assert_eq!(state, EncounterState::Resolved(EncounterEnd::MonsterDead));
    assert!(!EncounterEnd::MonsterDead.escaped());
    assert!(EncounterEnd::Escaped.escaped());

    // Resolved encounters stay resolved.
    let again = enc.apply(&mut hero, Choice::Fight, &mut coin(0), noop_log);
    assert_eq!(again, state);
    assert_eq!(hero.level, 2);
}

#[test]
fn status_table_layout() {
    let table = status_table(&Player::new("Hero"), &Monster::new(MonsterKind::Slime));
    insta::assert_snapshot!(table, @r"
    ________________________________________________________________________________
    |Player: Hero        |Health:   10|Gold:     0|Damage:   1|Level:   1|
    --------------------------------------------------------------------------------
    |Monster: slime      |Health:    1|Gold:    10|Damage:   1|Symbol:  s|
    ````````````````````````````````````````````````````````````````````````````````
    ");
}

#[test]
fn status_table_truncates_long_names() {
    let short = status_table(&Player::new("Hero"), &Monster::new(MonsterKind::Slime));
    let long = status_table(
        &Player::new("Maximilian_the_Bold"),
        &Monster::new(MonsterKind::Slime),
    );

    assert!(long.contains("|Player: Maximilian_t|Health:"));
    let widths = |t: &str| t.lines().map(|l| l.chars().count()).collect::<Vec<_>>();
    assert_eq!(widths(&long), widths(&short));
}

#[test]
fn run_encounter_reads_until_resolved() {
    let mut hero = Player::new("Hero");
    // orc spawn, one failed run, then a successful one
    let mut roll = script(vec![1, 0, 1]);
    let mut console = Console::new(Cursor::new("x F r\nr\n"));
    let mut out = Vec::new();

    let end = run_encounter(&mut hero, &mut roll, &mut console, &mut out).unwrap();

    assert_eq!(end, EncounterEnd::Escaped);
    assert_eq!(hero.creature.health, 8);
    let text = String::from_utf8(out).unwrap();
    assert!(text.starts_with("\n[You have encountered a/an orc (o).]\n"));
    assert_eq!(text.matches("(R)un or (F)ight: ").count(), 4);
    assert!(text.contains("You couldn't escape the orc.\nThe orc hit you for 2 damage.\n"));
    assert!(text.ends_with("You escaped the orc.\n"));
}

#[test]
fn run_encounter_reports_closed_input() {
    let mut hero = Player::new("Hero");
    let mut console = Console::new(Cursor::new("x\n"));
    let mut out = Vec::new();

    let err = run_encounter(&mut hero, &mut coin(0), &mut console, &mut out).unwrap_err();

    assert!(matches!(err, engine::GameError::InputClosed));
}
