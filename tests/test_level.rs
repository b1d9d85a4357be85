mod common;

use common::{config, record, seeded_rng, RecordingRenderer};
use rand::rngs::StdRng;
use side_scroller::config::GameConfig;
use side_scroller::entities::{Direction, Entity, Fireball, Shooter};
use side_scroller::error::LayoutError;
use side_scroller::input::{InputSnapshot, Key};
use side_scroller::layout::{SpawnKind, SpawnRecord};
use side_scroller::level::{Level, LevelId, LevelStatus, Prop, Slot};
use side_scroller::object::GameObject;
use side_scroller::render::NullRenderer;

fn ground() -> SpawnRecord {
    record(SpawnKind::Platform, 3000.0, 745.0)
}

fn spawn() -> SpawnRecord {
    record(SpawnKind::Player, 100.0, 687.0)
}

fn build(id: LevelId, records: &[SpawnRecord], config: &GameConfig, rng: &mut StdRng) -> Level {
    Level::new(id, records, config, rng).unwrap()
}

fn run(level: &mut Level, input: &InputSnapshot, rng: &mut StdRng, frames: usize) -> LevelStatus {
    let mut renderer = NullRenderer;
    let mut status = level.status();
    for _ in 0..frames {
        status = level.update(input, &mut renderer, rng);
    }
    status
}

// ── Construction ──────────────────────────────────────────────────────────────

#[test]
fn level_keeps_layout_order() {
    let config = config();
    let mut rng = seeded_rng();
    let records = [
        ground(),
        spawn(),
        record(SpawnKind::Coin, 400.0, 600.0),
        record(SpawnKind::Enemy, 700.0, 705.0),
        record(SpawnKind::FlyingPlatform, 900.0, 600.0),
        record(SpawnKind::EndFlag, 5800.0, 685.0),
    ];
    let level = build(LevelId::One, &records, &config, &mut rng);

    let names: Vec<&str> = level
        .objects()
        .iter()
        .map(|slot| match slot {
            Slot::Player => "Player",
            Slot::Boss => "Boss",
            Slot::Prop(prop) => prop.name(),
        })
        .collect();
    assert_eq!(names, vec!["Platform", "Player", "Coin", "Slime", "FlyingPlatform", "Flag"]);
    assert!(level.boss().is_none());
    assert_eq!(level.status(), LevelStatus::Active);
}

#[test]
fn level_without_player_is_rejected() {
    let config = config();
    let mut rng = seeded_rng();
    let err = Level::new(LevelId::One, &[ground()], &config, &mut rng).unwrap_err();
    assert!(matches!(err, LayoutError::MissingPlayer { level: LevelId::One }));
}

#[test]
fn boss_level_without_boss_is_rejected() {
    let config = config();
    let mut rng = seeded_rng();
    let err = Level::new(LevelId::Three, &[spawn(), ground()], &config, &mut rng).unwrap_err();
    assert!(matches!(err, LayoutError::MissingBoss { level: LevelId::Three }));
}

#[test]
fn extra_player_records_are_ignored() {
    let config = config();
    let mut rng = seeded_rng();
    let records = [spawn(), record(SpawnKind::Player, 900.0, 100.0), ground()];
    let level = build(LevelId::One, &records, &config, &mut rng);
    assert_eq!(level.objects().len(), 2);
    assert_eq!(level.player().body().x, 100.0);
}

// ── Frame ─────────────────────────────────────────────────────────────────────

#[test]
fn player_falls_and_rests_on_ground() {
    let config = config();
    let mut rng = seeded_rng();
    let records = [spawn(), record(SpawnKind::Enemy, 700.0, 705.0), ground()];
    let mut level = build(LevelId::One, &records, &config, &mut rng);

    run(&mut level, &InputSnapshot::new(), &mut rng, 20);
    assert_eq!(level.player().body().y, 700.0);
    assert_eq!(level.player().velocity_y(), 0.0);
    assert!(level.player().is_on_platform());

    for _ in 0..100 {
        run(&mut level, &InputSnapshot::new(), &mut rng, 1);
        assert!(level.player().is_on_platform());
        assert_eq!(level.player().body().y, 700.0);
    }
    assert_eq!(level.player().health(), 1.0);
}

#[test]
fn player_rests_when_ground_is_listed_first() {
    let config = config();
    let mut rng = seeded_rng();
    let mut level = build(LevelId::One, &[ground(), spawn()], &config, &mut rng);

    run(&mut level, &InputSnapshot::new(), &mut rng, 30);
    let player = level.player();
    assert!((player.body().bottom() - 725.0).abs() <= 1.0);
    assert!(player.velocity_y() <= 1.0);
}

#[test]
fn player_can_jump_from_the_ground() {
    let config = config();
    let mut rng = seeded_rng();
    let mut level = build(LevelId::One, &[spawn(), ground()], &config, &mut rng);
    run(&mut level, &InputSnapshot::new(), &mut rng, 20);

    run(&mut level, &InputSnapshot::new().with(Key::Jump), &mut rng, 1);
    assert!(level.player().body().y < 700.0);

    // Back down on the ground after the arc.
    run(&mut level, &InputSnapshot::new(), &mut rng, 60);
    assert_eq!(level.player().body().y, 700.0);
}

#[test]
fn collected_coin_is_purged_after_rising() {
    let config = config();
    let mut rng = seeded_rng();
    let records = [spawn(), ground(), record(SpawnKind::Coin, 100.0, 690.0)];
    let mut level = build(LevelId::One, &records, &config, &mut rng);

    run(&mut level, &InputSnapshot::new(), &mut rng, 1);
    assert_eq!(level.player().score(), 1);
    assert_eq!(level.props().count(), 2);

    run(&mut level, &InputSnapshot::new(), &mut rng, 100);
    assert_eq!(level.player().score(), 1);
    assert!(level.props().all(|prop| !matches!(prop, Prop::Item(_))));
}

#[test]
fn slime_on_the_path_hurts_once() {
    let config = config();
    let mut rng = seeded_rng();
    let records = [spawn(), ground(), record(SpawnKind::Enemy, 100.0, 705.0)];
    let mut level = build(LevelId::One, &records, &config, &mut rng);

    run(&mut level, &InputSnapshot::new(), &mut rng, 30);
    assert_eq!(level.player().health(), 0.5);
}

#[test]
fn reaching_the_flag_wins() {
    let config = config();
    let mut rng = seeded_rng();
    let records = [spawn(), ground(), record(SpawnKind::EndFlag, 100.0, 685.0)];
    let mut level = build(LevelId::Two, &records, &config, &mut rng);

    let status = run(&mut level, &InputSnapshot::new(), &mut rng, 1);
    assert_eq!(status, LevelStatus::Won);

    // Finished levels no longer advance.
    let y = level.player().body().y;
    assert_eq!(run(&mut level, &InputSnapshot::new(), &mut rng, 5), LevelStatus::Won);
    assert_eq!(level.player().body().y, y);
}

#[test]
fn finished_death_animation_loses() {
    let config = config();
    let mut rng = seeded_rng();
    let mut level = build(LevelId::One, &[spawn(), ground()], &config, &mut rng);
    run(&mut level, &InputSnapshot::new(), &mut rng, 10);

    level.player_mut().take_damage(1.0);
    assert_eq!(run(&mut level, &InputSnapshot::new(), &mut rng, 1), LevelStatus::Active);

    let mut status = LevelStatus::Active;
    for _ in 0..200 {
        status = run(&mut level, &InputSnapshot::new(), &mut rng, 1);
        if status != LevelStatus::Active {
            break;
        }
    }
    assert_eq!(status, LevelStatus::Lost);
    assert!(level.player().death_complete());
}

#[test]
fn boss_level_needs_the_boss_defeated() {
    let config = config();
    let mut rng = seeded_rng();
    let records = [
        spawn(),
        ground(),
        record(SpawnKind::EndFlag, 100.0, 685.0),
        record(SpawnKind::EnemyBoss, 5000.0, 650.0),
    ];
    let mut level = build(LevelId::Three, &records, &config, &mut rng);

    assert_eq!(run(&mut level, &InputSnapshot::new(), &mut rng, 10), LevelStatus::Active);
    assert!(!level.player().reached_flag());

    level.boss_mut().unwrap().take_damage(1.0);
    let mut status = LevelStatus::Active;
    for _ in 0..300 {
        status = run(&mut level, &InputSnapshot::new(), &mut rng, 1);
        if status != LevelStatus::Active {
            break;
        }
    }
    assert_eq!(status, LevelStatus::Won);
    assert!(level.boss().unwrap().death_complete());
}

// ── Fireballs ─────────────────────────────────────────────────────────────────

#[test]
fn player_fireball_hits_boss_and_is_purged() {
    let config = config();
    let mut rng = seeded_rng();
    let records = [spawn(), ground(), record(SpawnKind::EnemyBoss, 400.0, 650.0)];
    let mut level = build(LevelId::Three, &records, &config, &mut rng);

    level.add_fireball(Fireball::new(
        400.0,
        650.0,
        Direction::Right,
        Shooter::Player,
        &config.fireball,
    ));
    run(&mut level, &InputSnapshot::new(), &mut rng, 1);

    assert_eq!(level.boss().unwrap().health(), 0.5);
    assert!(level.fireballs().is_empty());
}

#[test]
fn boss_fireball_passes_through_the_boss() {
    let config = config();
    let mut rng = seeded_rng();
    let records = [spawn(), ground(), record(SpawnKind::EnemyBoss, 3000.0, 650.0)];
    let mut level = build(LevelId::Three, &records, &config, &mut rng);

    level.add_fireball(Fireball::new(
        3000.0,
        650.0,
        Direction::Left,
        Shooter::Boss,
        &config.fireball,
    ));
    run(&mut level, &InputSnapshot::new(), &mut rng, 1);
    assert_eq!(level.boss().unwrap().health(), 1.0);
    assert_eq!(level.fireballs().len(), 1);
}

#[test]
fn player_shoots_only_near_the_boss() {
    let config = config();
    let mut rng = seeded_rng();

    let mut plain = build(LevelId::One, &[spawn(), ground()], &config, &mut rng);
    run(&mut plain, &InputSnapshot::new(), &mut rng, 1);
    run(&mut plain, &InputSnapshot::new().with(Key::Shoot), &mut rng, 1);
    assert!(plain.fireballs().is_empty());

    let records = [spawn(), ground(), record(SpawnKind::EnemyBoss, 400.0, 650.0)];
    let mut boss_level = build(LevelId::Three, &records, &config, &mut rng);
    run(&mut boss_level, &InputSnapshot::new(), &mut rng, 1);
    run(&mut boss_level, &InputSnapshot::new().with(Key::Shoot), &mut rng, 1);
    assert_eq!(boss_level.fireballs().len(), 1);
    assert_eq!(boss_level.fireballs()[0].owner(), Shooter::Player);
}

#[test]
fn fireball_behind_the_view_is_kept() {
    let config = config();
    let mut rng = seeded_rng();
    let records = [spawn(), ground(), record(SpawnKind::EnemyBoss, 5000.0, 650.0)];
    let mut level = build(LevelId::Three, &records, &config, &mut rng);

    // Off the right edge but flying left, back towards the view.
    level.add_fireball(Fireball::new(
        2000.0,
        650.0,
        Direction::Left,
        Shooter::Boss,
        &config.fireball,
    ));
    run(&mut level, &InputSnapshot::new(), &mut rng, 1);
    assert_eq!(level.fireballs().len(), 1);
}

// ── Drawing ───────────────────────────────────────────────────────────────────

#[test]
fn frame_draws_objects_in_layout_order_then_fireballs() {
    let config = config();
    let mut rng = seeded_rng();
    let records = [spawn(), ground(), record(SpawnKind::EnemyBoss, 400.0, 650.0)];
    let mut level = build(LevelId::Three, &records, &config, &mut rng);
    level.add_fireball(Fireball::new(
        900.0,
        650.0,
        Direction::Right,
        Shooter::Boss,
        &config.fireball,
    ));

    let mut renderer = RecordingRenderer::default();
    level.update(&InputSnapshot::new(), &mut renderer, &mut rng);

    assert_eq!(
        renderer.images(),
        vec!["player_right", "platform", "enemy_boss", "fireball"]
    );
    assert_eq!(renderer.texts(), vec!["HEALTH 100", "SCORE 0", "HEALTH 100"]);
}
