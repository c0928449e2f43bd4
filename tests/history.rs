use std::num::NonZeroU32;

use eframe_sketchpad::{EventBus, History, Mark, SketchEvent, StickerMark, StrokeMark};
use egui::pos2;

// Helper to build a stroke through the given points
fn stroke(points: &[(f32, f32)], thickness: u32) -> Mark {
    let points = points.iter().map(|&(x, y)| pos2(x, y)).collect();
    let thickness = NonZeroU32::new(thickness).unwrap();
    Mark::Stroke(StrokeMark::from_points(points, thickness).unwrap())
}

fn sticker(x: f32, y: f32, glyph: &str) -> Mark {
    Mark::Sticker(StickerMark::new(pos2(x, y), glyph))
}

fn drain(bus: &EventBus) -> Vec<SketchEvent> {
    std::iter::from_fn(|| bus.pop()).collect()
}

#[test]
fn test_undo_redo_scenario() {
    let bus = EventBus::new();
    let mut history = History::new();
    let a = stroke(&[(1.0, 1.0), (2.0, 2.0), (3.0, 3.0)], 2);
    let b = sticker(10.0, 10.0, "😤");

    history.commit(a.clone(), &bus);
    history.commit(b.clone(), &bus);

    assert!(history.undo(&bus));
    assert_eq!(history.snapshot(), &[a.clone()]);
    assert_eq!(history.redo_buffer(), &[b.clone()]);

    assert!(history.undo(&bus));
    assert!(history.snapshot().is_empty());
    assert_eq!(history.redo_buffer(), &[b.clone(), a.clone()]);

    assert!(history.redo(&bus));
    assert_eq!(history.snapshot(), &[a]);
    assert_eq!(history.redo_buffer(), &[b]);
}

#[test]
fn test_undo_then_redo_restores_sequence() {
    let bus = EventBus::new();
    let mut history = History::new();
    for i in 0..5 {
        history.commit(sticker(i as f32, 0.0, "🥶"), &bus);
    }
    let before = history.snapshot().to_vec();

    for undos in 1..=5 {
        for _ in 0..undos {
            history.undo(&bus);
        }
        for _ in 0..undos {
            history.redo(&bus);
        }
        assert_eq!(history.snapshot(), before.as_slice());
    }
}

#[test]
fn test_commit_discards_redo_buffer() {
    let bus = EventBus::new();
    let mut history = History::new();
    history.commit(sticker(0.0, 0.0, "🏹"), &bus);
    history.commit(sticker(1.0, 0.0, "🏹"), &bus);
    history.undo(&bus);
    history.undo(&bus);
    assert_eq!(history.redo_buffer().len(), 2);

    history.commit(sticker(2.0, 0.0, "👊"), &bus);
    assert!(!history.can_redo());
    assert!(!history.redo(&bus));
    assert_eq!(history.len(), 1);
}

#[test]
fn test_empty_undo_redo_are_silent_noops() {
    let bus = EventBus::new();
    let mut history = History::new();

    assert!(!history.undo(&bus));
    assert!(!history.redo(&bus));
    assert!(history.is_empty());
    assert!(drain(&bus).is_empty());
}

#[test]
fn test_each_mutation_signals_once() {
    let bus = EventBus::new();
    let mut history = History::new();

    history.commit(sticker(0.0, 0.0, "✌️"), &bus);
    assert_eq!(drain(&bus), vec![SketchEvent::ContentChanged]);

    history.undo(&bus);
    assert_eq!(drain(&bus), vec![SketchEvent::ContentChanged]);

    history.redo(&bus);
    assert_eq!(drain(&bus), vec![SketchEvent::ContentChanged]);

    history.clear(&bus);
    assert_eq!(drain(&bus), vec![SketchEvent::ContentChanged]);
    assert!(history.is_empty());
    assert!(!history.can_redo());
}

#[test]
fn test_clear_empties_redo_buffer_too() {
    let bus = EventBus::new();
    let mut history = History::new();
    history.commit(sticker(0.0, 0.0, "😤"), &bus);
    history.commit(sticker(0.0, 0.0, "😤"), &bus);
    history.undo(&bus);

    history.clear(&bus);
    assert!(history.snapshot().is_empty());
    assert!(history.redo_buffer().is_empty());
}
