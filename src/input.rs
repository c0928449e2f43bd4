use egui::{Context, PointerButton, Pos2, Rect, Response};

use crate::mark::Point;

/// Represents the location where an input event occurred
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputLocation {
    /// Canvas-local position (top-left corner of the canvas is the origin)
    pub position: Point,
    /// Whether this position is within the canvas bounds
    pub is_in_canvas: bool,
}

/// Pointer input as seen by the sketch session
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Primary button was pressed
    PointerDown { location: InputLocation },
    /// Pointer moved, with or without the button held
    PointerMove { location: InputLocation },
    /// Primary button was released
    PointerUp { location: InputLocation },
    /// Pointer left the canvas or the window
    PointerLeave,
}

/// Turns egui's per-frame pointer state into canvas-local [`InputEvent`]s
#[derive(Debug)]
pub struct InputHandler {
    last_pointer_pos: Option<Pos2>,
    /// Whether the previous frame saw the pointer over an uncovered part of the canvas
    was_in_canvas: bool,
    canvas_rect: Rect,
}

impl InputHandler {
    pub fn new(canvas_rect: Rect) -> Self {
        Self {
            last_pointer_pos: None,
            was_in_canvas: false,
            canvas_rect,
        }
    }

    /// Translate a screen position into canvas space
    pub fn make_location(&self, pos: Pos2) -> InputLocation {
        InputLocation {
            position: Point::ZERO + (pos - self.canvas_rect.min),
            is_in_canvas: self.canvas_rect.contains(pos),
        }
    }

    /// Process raw egui input over the `canvas` widget and generate our InputEvents.
    ///
    /// A position only counts as inside the canvas when egui routes the pointer
    /// to the canvas itself, so windows floating above it swallow the input.
    pub fn process_input(&mut self, ctx: &Context, canvas: &Response) -> Vec<InputEvent> {
        self.canvas_rect = canvas.rect;
        let over_canvas = canvas.contains_pointer();
        let mut events = Vec::new();

        ctx.input(|input| {
            let pointer = &input.pointer;
            let pressed = pointer.button_pressed(PointerButton::Primary);
            let released = pointer.button_released(PointerButton::Primary);

            match pointer.hover_pos() {
                Some(pos) => {
                    let mut location = self.make_location(pos);
                    location.is_in_canvas &= over_canvas;

                    if pressed && location.is_in_canvas {
                        events.push(InputEvent::PointerDown { location });
                    } else if location.is_in_canvas {
                        if Some(pos) != self.last_pointer_pos {
                            events.push(InputEvent::PointerMove { location });
                        }
                    } else if self.was_in_canvas {
                        events.push(InputEvent::PointerLeave);
                    }
                    if released {
                        events.push(InputEvent::PointerUp { location });
                    }
                    self.last_pointer_pos = Some(pos);
                    self.was_in_canvas = location.is_in_canvas;
                }
                None => {
                    if released {
                        if let Some(last) = self.last_pointer_pos {
                            events.push(InputEvent::PointerUp {
                                location: self.make_location(last),
                            });
                        }
                    }
                    self.last_pointer_pos = None;
                    if std::mem::take(&mut self.was_in_canvas) {
                        events.push(InputEvent::PointerLeave);
                    }
                }
            }
        });

        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{Event, Modifiers, RawInput, Sense, pos2, vec2};

    const SCREEN: Rect = Rect::from_min_max(Pos2::ZERO, pos2(640.0, 420.0));
    /// Over the canvas and, when present, under the covering window
    const PRESS_AT: Pos2 = pos2(170.0, 190.0);

    /// One frame with a 256x256 canvas in the central panel, optionally covered
    /// by a window. Returns the canvas rectangle and the events produced.
    fn frame(
        ctx: &Context,
        handler: &mut InputHandler,
        events: Vec<Event>,
        covered: bool,
    ) -> (Rect, Vec<InputEvent>) {
        let raw = RawInput {
            screen_rect: Some(SCREEN),
            events,
            ..Default::default()
        };
        let mut canvas_rect = Rect::NOTHING;
        let mut produced = Vec::new();
        let _ = ctx.run(raw, |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                let (response, _painter) =
                    ui.allocate_painter(vec2(256.0, 256.0), Sense::click_and_drag());
                canvas_rect = response.rect;
                produced = handler.process_input(ctx, &response);
            });
            if covered {
                egui::Window::new("Cover")
                    .fixed_pos(pos2(150.0, 150.0))
                    .collapsible(false)
                    .show(ctx, |ui| {
                        ui.allocate_space(vec2(120.0, 120.0));
                    });
            }
        });
        (canvas_rect, produced)
    }

    /// Hover, press and release the primary button at [`PRESS_AT`]
    fn click(covered: bool) -> (Rect, Vec<InputEvent>) {
        let ctx = Context::default();
        let mut handler = InputHandler::new(Rect::NOTHING);
        let mut canvas_rect = Rect::NOTHING;
        for _ in 0..3 {
            (canvas_rect, _) = frame(&ctx, &mut handler, Vec::new(), covered);
        }

        let button = |pressed| Event::PointerButton {
            pos: PRESS_AT,
            button: PointerButton::Primary,
            pressed,
            modifiers: Modifiers::NONE,
        };
        let mut all = Vec::new();
        for events in [vec![Event::PointerMoved(PRESS_AT)], vec![button(true)], vec![button(false)]] {
            all.extend(frame(&ctx, &mut handler, events, covered).1);
        }
        (canvas_rect, all)
    }

    #[test]
    fn test_location_is_canvas_local() {
        let handler = InputHandler::new(Rect::from_min_size(pos2(40.0, 60.0), vec2(256.0, 256.0)));

        let inside = handler.make_location(pos2(50.0, 70.0));
        assert_eq!(inside.position, pos2(10.0, 10.0));
        assert!(inside.is_in_canvas);

        let outside = handler.make_location(pos2(10.0, 70.0));
        assert_eq!(outside.position, pos2(-30.0, 10.0));
        assert!(!outside.is_in_canvas);
    }

    #[test]
    fn test_no_pointer_no_events() {
        let ctx = Context::default();
        let mut handler = InputHandler::new(Rect::NOTHING);
        let (_, events) = frame(&ctx, &mut handler, Vec::new(), false);
        assert!(events.is_empty());
    }

    #[test]
    fn test_press_on_canvas_starts_pointer_down() {
        let (canvas_rect, events) = click(false);
        assert!(canvas_rect.contains(PRESS_AT));

        let expected = InputLocation {
            position: Point::ZERO + (PRESS_AT - canvas_rect.min),
            is_in_canvas: true,
        };
        assert!(events.contains(&InputEvent::PointerDown { location: expected }));
        assert!(matches!(events.last(), Some(InputEvent::PointerUp { .. })));
    }

    #[test]
    fn test_press_on_window_over_canvas_is_not_canvas_input() {
        let (canvas_rect, events) = click(true);
        assert!(canvas_rect.contains(PRESS_AT));

        assert!(
            events.iter().all(|event| !matches!(
                event,
                InputEvent::PointerDown { .. } | InputEvent::PointerMove { .. }
            )),
            "window click leaked into the canvas: {events:?}"
        );
    }
}
