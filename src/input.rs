//! Terminal input polling.
//!
//! Mouse events come from crossterm mouse capture and are reported in
//! screen cells. Screens translate them into table coordinates.

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use std::time::Duration;
use tracing::{instrument, trace};

/// Phase of a pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    /// Left button pressed.
    Down,
    /// Pointer moved with the left button held.
    Drag,
    /// Left button released.
    Up,
}

/// A pointer event at a screen cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerEvent {
    /// What happened.
    pub kind: PointerKind,
    /// Screen column.
    pub column: u16,
    /// Screen row.
    pub row: u16,
}

/// Input the event loop reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Key press.
    Key(KeyEvent),
    /// Left-button pointer activity.
    Pointer(PointerEvent),
    /// Ctrl+C.
    Quit,
}

/// Waits up to `timeout` for input, then returns at most `max` events.
///
/// Events beyond `max` stay queued for the next call. Key releases and
/// mouse activity other than the left button are dropped.
#[instrument(level = "trace")]
pub fn poll_input_events(max: usize, timeout: Duration) -> std::io::Result<Vec<InputEvent>> {
    let mut events = Vec::new();
    if !event::poll(timeout)? {
        return Ok(events);
    }
    while events.len() < max {
        if let Some(input) = translate(event::read()?) {
            events.push(input);
        }
        if !event::poll(Duration::ZERO)? {
            break;
        }
    }
    trace!(count = events.len(), "Polled input");
    Ok(events)
}

/// Maps a crossterm event to an [`InputEvent`], if it is one we use.
pub fn translate(event: Event) -> Option<InputEvent> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Release => None,
        Event::Key(key)
            if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) =>
        {
            Some(InputEvent::Quit)
        }
        Event::Key(key) => Some(InputEvent::Key(key)),
        Event::Mouse(mouse) => translate_mouse(mouse).map(InputEvent::Pointer),
        _ => None,
    }
}

fn translate_mouse(mouse: MouseEvent) -> Option<PointerEvent> {
    let kind = match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => PointerKind::Down,
        MouseEventKind::Drag(MouseButton::Left) => PointerKind::Drag,
        MouseEventKind::Up(MouseButton::Left) => PointerKind::Up,
        _ => return None,
    };
    Some(PointerEvent {
        kind,
        column: mouse.column,
        row: mouse.row,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mouse(kind: MouseEventKind) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column: 12,
            row: 7,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn test_left_button_maps_to_pointer() {
        assert_eq!(
            translate(mouse(MouseEventKind::Down(MouseButton::Left))),
            Some(InputEvent::Pointer(PointerEvent {
                kind: PointerKind::Down,
                column: 12,
                row: 7
            }))
        );
        assert!(translate(mouse(MouseEventKind::Down(MouseButton::Right))).is_none());
        assert!(translate(mouse(MouseEventKind::Moved)).is_none());
    }

    #[test]
    fn test_ctrl_c_quits() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(translate(Event::Key(key)), Some(InputEvent::Quit));
        let plain = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE);
        assert_eq!(translate(Event::Key(plain)), Some(InputEvent::Key(plain)));
    }
}
