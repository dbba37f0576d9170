use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use pledge_core::share::ShareProvider;

use crate::app::{App, Focus, Mode};
use crate::calculator::CalcField;

/// Input action that can be performed
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Quit,
    // Page scrolling
    ScrollLineDown,
    ScrollLineUp,
    ScrollHalfPageDown,
    ScrollHalfPageUp,
    ScrollPageDown,
    ScrollPageUp,
    JumpToTop,
    JumpToBottom,
    PendingG, // First 'g' press, waiting for second 'g'
    // Anchor navigation
    NextSection,
    PrevSection,
    GotoSection(usize),
    // Calculator
    OpenCalculator,
    LeaveCalculator,
    ToggleCalcField,
    InputChar(char),
    Backspace,
    DeleteChar,
    CursorLeft,
    CursorRight,
    CursorHome,
    CursorEnd,
    PercentUp,
    PercentDown,
    // Sharing
    OpenShareMenu,
    ShareVia(ShareProvider),
    OpenCampaignUrl,
    // Overlays
    ShowHelp,
    ExitMode,
    None,
}

/// Handle a key event and return the corresponding action
pub fn handle_key_event(key: KeyEvent, app: &App) -> Action {
    // Overlays swallow input first
    match app.mode {
        Mode::Help => {
            // Any key exits help
            return Action::ExitMode;
        }
        Mode::Share => return handle_share_mode(key),
        Mode::Normal => {}
    }

    if app.focus == Focus::Calculator {
        return handle_calculator_mode(key, app);
    }

    // Page browsing keybindings
    match (key.code, key.modifiers) {
        // Quit
        (KeyCode::Char('q'), KeyModifiers::NONE) => Action::Quit,
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,

        // Line scrolling
        (KeyCode::Char('j'), KeyModifiers::NONE) => Action::ScrollLineDown,
        (KeyCode::Char('k'), KeyModifiers::NONE) => Action::ScrollLineUp,
        (KeyCode::Down, KeyModifiers::NONE) => Action::ScrollLineDown,
        (KeyCode::Up, KeyModifiers::NONE) => Action::ScrollLineUp,

        // Page scrolling
        (KeyCode::Char('d'), KeyModifiers::CONTROL) => Action::ScrollHalfPageDown,
        (KeyCode::Char('u'), KeyModifiers::CONTROL) => Action::ScrollHalfPageUp,
        (KeyCode::Char('f'), KeyModifiers::CONTROL) => Action::ScrollPageDown,
        (KeyCode::Char('b'), KeyModifiers::CONTROL) => Action::ScrollPageUp,

        // Jump to top/bottom
        (KeyCode::Char('g'), KeyModifiers::NONE) => {
            // gg requires double press
            if app.pending_key == Some('g') {
                Action::JumpToTop
            } else {
                Action::PendingG
            }
        }
        (KeyCode::Char('G'), KeyModifiers::SHIFT) => Action::JumpToBottom,

        // Anchor navigation between sections
        (KeyCode::Tab, KeyModifiers::NONE) => Action::NextSection,
        (KeyCode::BackTab, KeyModifiers::SHIFT) => Action::PrevSection,
        (KeyCode::Char(']'), KeyModifiers::NONE) => Action::NextSection,
        (KeyCode::Char('['), KeyModifiers::NONE) => Action::PrevSection,
        (KeyCode::Char(c @ '1'..='5'), KeyModifiers::NONE) => {
            Action::GotoSection(c as usize - '1' as usize)
        }

        // Calculator
        (KeyCode::Char('c'), KeyModifiers::NONE) => Action::OpenCalculator,
        (KeyCode::Enter, KeyModifiers::NONE) => Action::OpenCalculator,

        // Sharing
        (KeyCode::Char('s'), KeyModifiers::NONE) => Action::OpenShareMenu,
        (KeyCode::Char('o'), KeyModifiers::NONE) => Action::OpenCampaignUrl,

        // Help
        (KeyCode::Char('?'), KeyModifiers::SHIFT) => Action::ShowHelp,
        (KeyCode::Char('?'), KeyModifiers::NONE) => Action::ShowHelp,

        (KeyCode::Esc, KeyModifiers::NONE) => Action::ExitMode,

        _ => Action::None,
    }
}

/// Key events while the calculator owns input
fn handle_calculator_mode(key: KeyEvent, app: &App) -> Action {
    match key.code {
        KeyCode::Esc | KeyCode::Enter => Action::LeaveCalculator,
        KeyCode::Tab | KeyCode::BackTab => Action::ToggleCalcField,
        KeyCode::Char('c') if key.modifiers == KeyModifiers::CONTROL => Action::Quit,
        _ => match app.calculator.field {
            CalcField::Income => match key.code {
                KeyCode::Char(c) => Action::InputChar(c),
                KeyCode::Backspace => Action::Backspace,
                KeyCode::Delete => Action::DeleteChar,
                KeyCode::Left => Action::CursorLeft,
                KeyCode::Right => Action::CursorRight,
                KeyCode::Home => Action::CursorHome,
                KeyCode::End => Action::CursorEnd,
                KeyCode::Down => Action::ToggleCalcField,
                KeyCode::Up => Action::ToggleCalcField,
                _ => Action::None,
            },
            CalcField::Percent => match key.code {
                KeyCode::Left | KeyCode::Char('h') => Action::PercentDown,
                KeyCode::Right | KeyCode::Char('l') => Action::PercentUp,
                KeyCode::Up | KeyCode::Char('k') => Action::PercentUp,
                KeyCode::Down | KeyCode::Char('j') => Action::PercentDown,
                _ => Action::None,
            },
        },
    }
}

/// Key events in the share menu
fn handle_share_mode(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('t') => Action::ShareVia(ShareProvider::Twitter),
        KeyCode::Char('f') => Action::ShareVia(ShareProvider::Facebook),
        KeyCode::Char('e') => Action::ShareVia(ShareProvider::Email),
        KeyCode::Esc | KeyCode::Char('q') => Action::ExitMode,
        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Theme;
    use pledge_core::share::ShareLinks;
    use pledge_core::AppConfig;
    use std::sync::Arc;

    fn app() -> App {
        let config = Arc::new(AppConfig::default());
        let share_links = ShareLinks::build(&config.campaign).unwrap();
        App::new(config, Theme::default(), share_links)
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_page_mode_scrolling() {
        let app = app();
        assert_eq!(handle_key_event(key(KeyCode::Char('j')), &app), Action::ScrollLineDown);
        assert_eq!(handle_key_event(key(KeyCode::Char('q')), &app), Action::Quit);
        assert_eq!(
            handle_key_event(key(KeyCode::Char('3')), &app),
            Action::GotoSection(2)
        );
    }

    #[test]
    fn test_double_g_jumps_to_top() {
        let mut app = app();
        assert_eq!(handle_key_event(key(KeyCode::Char('g')), &app), Action::PendingG);
        app.pending_key = Some('g');
        assert_eq!(handle_key_event(key(KeyCode::Char('g')), &app), Action::JumpToTop);
    }

    #[test]
    fn test_calculator_mode_routes_digits() {
        let mut app = app();
        app.focus = Focus::Calculator;
        assert_eq!(
            handle_key_event(key(KeyCode::Char('7')), &app),
            Action::InputChar('7')
        );
        assert_eq!(handle_key_event(key(KeyCode::Esc), &app), Action::LeaveCalculator);

        app.calculator.toggle_field();
        assert_eq!(handle_key_event(key(KeyCode::Right), &app), Action::PercentUp);
    }

    #[test]
    fn test_share_mode_providers() {
        let mut app = app();
        app.mode = Mode::Share;
        assert_eq!(
            handle_key_event(key(KeyCode::Char('t')), &app),
            Action::ShareVia(ShareProvider::Twitter)
        );
        assert_eq!(handle_key_event(key(KeyCode::Esc), &app), Action::ExitMode);
    }

    #[test]
    fn test_help_exits_on_any_key() {
        let mut app = app();
        app.mode = Mode::Help;
        assert_eq!(handle_key_event(key(KeyCode::Char('x')), &app), Action::ExitMode);
    }
}
