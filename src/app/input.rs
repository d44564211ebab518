use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEventKind};

use crate::app::{App, Message, Model};

const MOUSE_SCROLL_LINES: usize = 3;

impl App {
    pub(super) fn handle_event(event: &Event, model: &Model) -> Option<Message> {
        match event {
            Event::Key(key) if key.kind != KeyEventKind::Release => Self::handle_key(*key, model),
            Event::Mouse(mouse) => match mouse.kind {
                MouseEventKind::ScrollUp => Some(Message::ScrollUp(MOUSE_SCROLL_LINES)),
                MouseEventKind::ScrollDown => Some(Message::ScrollDown(MOUSE_SCROLL_LINES)),
                _ => None,
            },
            Event::Resize(w, h) => Some(Message::Resize(*w, *h)),
            _ => None,
        }
    }

    pub(super) fn handle_key(key: KeyEvent, model: &Model) -> Option<Message> {
        if model.help_visible {
            return Some(match key.code {
                KeyCode::Char('q') => Message::Quit,
                _ => Message::HideHelp,
            });
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Some(Message::Quit),
            KeyCode::Char('c') if ctrl => Some(Message::Quit),
            KeyCode::Char('?') => Some(Message::ToggleHelp),

            KeyCode::Char('j') | KeyCode::Down => Some(Message::ScrollDown(1)),
            KeyCode::Char('k') | KeyCode::Up => Some(Message::ScrollUp(1)),
            KeyCode::Char('d') if ctrl => Some(Message::PageDown),
            KeyCode::Char('u') if ctrl => Some(Message::PageUp),
            KeyCode::PageDown | KeyCode::Char(' ') => Some(Message::PageDown),
            KeyCode::PageUp | KeyCode::Char('b') => Some(Message::PageUp),
            KeyCode::Char('g') | KeyCode::Home => Some(Message::GoToTop),
            KeyCode::Char('G') | KeyCode::End => Some(Message::GoToBottom),

            KeyCode::Tab => Some(Message::NextDocument),
            KeyCode::BackTab => Some(Message::PrevDocument),
            KeyCode::Char('x') => Some(Message::CloseDocument),

            KeyCode::Char('o') => Some(Message::InsertLine),
            KeyCode::Char('D') => Some(Message::DeleteLine),

            KeyCode::Char('w') => Some(Message::ToggleWatch),
            KeyCode::Char('r') => Some(Message::ForceReload),
            _ => None,
        }
    }
}
