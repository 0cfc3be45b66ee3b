use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use inbox_core::Tab;

/// All logical actions the TUI can perform, independent of key binding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // List navigation
    MoveUp,
    MoveDown,
    PageUp,
    PageDown,
    MoveTop,
    MoveBottom,

    // Row gestures
    /// Open the selected row, or delete it when its delete control is showing.
    Activate,
    /// Uncover the delete control (keyboard stand-in for a left swipe).
    /// A second press on an uncovered row deletes it.
    RevealDelete,
    HideDelete,

    // Search box
    FocusSearch,
    FocusList,
    SearchInput(char),
    SearchBackspace,
    SearchClear,

    // Footer
    SelectTab(Tab),

    // App
    Quit,
    Help,
}

/// Map a raw key event to an [`Action`], depending on whether the search box
/// has focus.
pub fn map_key(event: KeyEvent, in_search: bool) -> Option<Action> {
    let ctrl = event.modifiers.contains(KeyModifiers::CONTROL);
    let alt  = event.modifiers.contains(KeyModifiers::ALT);
    // "plain" = no modifier that would make a char a control sequence
    let plain = !ctrl && !alt;

    // ── Global bindings ───────────────────────────────────────────────────────
    match event.code {
        KeyCode::Char('c') if ctrl => return Some(Action::Quit),
        KeyCode::F(1) => return Some(Action::Help),
        _ => {}
    }

    if in_search {
        return map_search_key(event, ctrl, plain);
    }

    match event.code {
        KeyCode::Char('q') if plain => Some(Action::Quit),

        KeyCode::Up   | KeyCode::Char('k') if plain => Some(Action::MoveUp),
        KeyCode::Down | KeyCode::Char('j') if plain => Some(Action::MoveDown),
        KeyCode::PageUp                     => Some(Action::PageUp),
        KeyCode::PageDown                   => Some(Action::PageDown),
        KeyCode::Char('u') if ctrl          => Some(Action::PageUp),
        KeyCode::Char('d') if ctrl          => Some(Action::PageDown),
        KeyCode::Home | KeyCode::Char('g') if plain => Some(Action::MoveTop),
        KeyCode::End  | KeyCode::Char('G')  => Some(Action::MoveBottom),

        KeyCode::Enter => Some(Action::Activate),
        KeyCode::Left  | KeyCode::Char('h') if plain => Some(Action::RevealDelete),
        KeyCode::Delete | KeyCode::Char('d') if plain => Some(Action::RevealDelete),
        KeyCode::Right | KeyCode::Char('l') if plain => Some(Action::HideDelete),
        KeyCode::Esc => Some(Action::HideDelete),

        KeyCode::Char('/') | KeyCode::Char('s') if plain => Some(Action::FocusSearch),

        KeyCode::Char('1') if plain => Some(Action::SelectTab(Tab::Home)),
        KeyCode::Char('2') if plain => Some(Action::SelectTab(Tab::Cart)),
        KeyCode::Char('3') if plain => Some(Action::SelectTab(Tab::Add)),
        KeyCode::Char('4') if plain => Some(Action::SelectTab(Tab::Chats)),
        KeyCode::Char('5') if plain => Some(Action::SelectTab(Tab::Profile)),

        _ => None,
    }
}

fn map_search_key(event: KeyEvent, ctrl: bool, plain: bool) -> Option<Action> {
    match event.code {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Down | KeyCode::Tab => Some(Action::FocusList),
        KeyCode::Backspace         => Some(Action::SearchBackspace),
        KeyCode::Char('u') if ctrl => Some(Action::SearchClear),
        KeyCode::Char(c) if plain  => Some(Action::SearchInput(c)),
        _ => None,
    }
}

// ─── Unit tests ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

    use super::*;

    fn key(code: KeyCode, mods: KeyModifiers) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: mods,
            kind: KeyEventKind::Press,
            state: crossterm::event::KeyEventState::NONE,
        }
    }

    fn plain_key(c: char) -> KeyEvent { key(KeyCode::Char(c), KeyModifiers::NONE) }
    fn ctrl_key(c: char)  -> KeyEvent { key(KeyCode::Char(c), KeyModifiers::CONTROL) }

    // ── Search box ───────────────────────────────────────────────────────────

    #[test]
    fn printable_chars_type_into_search() {
        assert_eq!(map_key(plain_key('q'), true), Some(Action::SearchInput('q')));
        assert_eq!(map_key(plain_key('/'), true), Some(Action::SearchInput('/')));
        assert_eq!(map_key(plain_key('?'), true), Some(Action::SearchInput('?')));
    }

    #[test]
    fn shifted_chars_still_type() {
        let ev = key(KeyCode::Char('D'), KeyModifiers::SHIFT);
        assert_eq!(map_key(ev, true), Some(Action::SearchInput('D')));
    }

    #[test]
    fn esc_and_enter_leave_search() {
        assert_eq!(map_key(key(KeyCode::Esc, KeyModifiers::NONE), true), Some(Action::FocusList));
        assert_eq!(map_key(key(KeyCode::Enter, KeyModifiers::NONE), true), Some(Action::FocusList));
    }

    #[test]
    fn ctrl_u_clears_search() {
        assert_eq!(map_key(ctrl_key('u'), true), Some(Action::SearchClear));
    }

    #[test]
    fn alt_char_in_search_does_not_type() {
        let ev = key(KeyCode::Char('a'), KeyModifiers::ALT);
        assert_eq!(map_key(ev, true), None);
    }

    // ── List ─────────────────────────────────────────────────────────────────

    #[test]
    fn vim_keys_move_in_list() {
        assert_eq!(map_key(plain_key('j'), false), Some(Action::MoveDown));
        assert_eq!(map_key(plain_key('k'), false), Some(Action::MoveUp));
        assert_eq!(map_key(plain_key('G'), false), Some(Action::MoveBottom));
    }

    #[test]
    fn left_reveals_and_right_hides_delete() {
        assert_eq!(map_key(key(KeyCode::Left, KeyModifiers::NONE), false), Some(Action::RevealDelete));
        assert_eq!(map_key(key(KeyCode::Delete, KeyModifiers::NONE), false), Some(Action::RevealDelete));
        assert_eq!(map_key(key(KeyCode::Right, KeyModifiers::NONE), false), Some(Action::HideDelete));
    }

    #[test]
    fn enter_activates_row() {
        assert_eq!(map_key(key(KeyCode::Enter, KeyModifiers::NONE), false), Some(Action::Activate));
    }

    #[test]
    fn digits_select_tabs() {
        assert_eq!(map_key(plain_key('1'), false), Some(Action::SelectTab(Tab::Home)));
        assert_eq!(map_key(plain_key('3'), false), Some(Action::SelectTab(Tab::Add)));
        assert_eq!(map_key(plain_key('5'), false), Some(Action::SelectTab(Tab::Profile)));
    }

    #[test]
    fn slash_focuses_search() {
        assert_eq!(map_key(plain_key('/'), false), Some(Action::FocusSearch));
    }

    #[test]
    fn unbound_char_in_list_does_nothing() {
        assert_eq!(map_key(plain_key('x'), false), None);
    }

    // ── Global ───────────────────────────────────────────────────────────────

    #[test]
    fn ctrl_c_quits_everywhere() {
        assert_eq!(map_key(ctrl_key('c'), false), Some(Action::Quit));
        assert_eq!(map_key(ctrl_key('c'), true), Some(Action::Quit));
    }

    #[test]
    fn q_quits_only_outside_search() {
        assert_eq!(map_key(plain_key('q'), false), Some(Action::Quit));
        assert_ne!(map_key(plain_key('q'), true), Some(Action::Quit));
    }

    #[test]
    fn ctrl_d_pages_down_not_reveal() {
        assert_eq!(map_key(ctrl_key('d'), false), Some(Action::PageDown));
    }
}
