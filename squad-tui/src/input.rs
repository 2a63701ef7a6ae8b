//! Keyboard input dispatch — notice → overlays → picker modal → global keys →
//! panel-specific handlers.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::{AppState, FilterFocus, Modal, Overlay, Panel, RESULT_COLUMNS, TEAM_COLUMNS};

/// Handle a key event.
pub fn handle_key(app: &mut AppState, key: KeyEvent) {
    // Only handle key press events (Windows sends both Press and Release).
    if key.kind != KeyEventKind::Press {
        return;
    }

    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.running = false;
        return;
    }

    // 1. An alert swallows the next key.
    if app.notice.is_some() {
        app.notice = None;
        return;
    }

    // 2. Overlays consume input next.
    if app.overlay == Overlay::ErrorHistory {
        handle_error_overlay(app, key);
        return;
    }

    // 3. The picker modal owns the keyboard while open.
    match app.modal {
        Modal::Browse => {
            handle_browse_key(app, key);
            return;
        }
        Modal::Detail(_) => {
            handle_detail_key(app, key);
            return;
        }
        Modal::Closed => {}
    }

    // 4. Global keys.
    match key.code {
        KeyCode::Char('q') => {
            app.running = false;
            return;
        }
        KeyCode::Char(c @ '1'..='9') => {
            if let Some(panel) = Panel::from_index(c as usize - '1' as usize) {
                app.active_panel = panel;
                return;
            }
        }
        KeyCode::Tab => {
            app.active_panel = app.active_panel.next();
            return;
        }
        KeyCode::BackTab => {
            app.active_panel = app.active_panel.prev();
            return;
        }
        _ => {}
    }

    // 5. Panel-specific keys.
    match app.active_panel {
        Panel::Team => handle_team_key(app, key),
        Panel::Help => handle_help_key(app, key),
    }
}

fn handle_error_overlay(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('e') => {
            app.overlay = Overlay::None;
        }
        KeyCode::Char('j') | KeyCode::Down => {
            if app.error_scroll + 1 < app.error_history.len() {
                app.error_scroll += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.error_scroll = app.error_scroll.saturating_sub(1);
        }
        _ => {}
    }
}

fn handle_team_key(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Char('a') | KeyCode::Enter => app.open_picker(),
        KeyCode::Char('x') | KeyCode::Delete => app.remove_selected(),
        KeyCode::Char('l') | KeyCode::Right => app.move_team_cursor(1),
        KeyCode::Char('h') | KeyCode::Left => app.move_team_cursor(-1),
        KeyCode::Char('j') | KeyCode::Down => app.move_team_cursor(TEAM_COLUMNS as isize),
        KeyCode::Char('k') | KeyCode::Up => app.move_team_cursor(-(TEAM_COLUMNS as isize)),
        _ => {}
    }
}

fn handle_help_key(app: &mut AppState, key: KeyEvent) {
    if let KeyCode::Char('e') = key.code {
        app.overlay = Overlay::ErrorHistory;
        app.error_scroll = 0;
    }
}

fn handle_browse_key(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            app.close_picker();
            return;
        }
        KeyCode::Tab => {
            app.picker.focus = app.picker.focus.next();
            return;
        }
        KeyCode::BackTab => {
            app.picker.focus = app.picker.focus.prev();
            return;
        }
        KeyCode::Enter => {
            app.pick_at_cursor();
            return;
        }
        // Arrow keys always drive the result grid vertically, so a search
        // can be typed and browsed without leaving the text box.
        KeyCode::Down => {
            app.move_result_cursor(RESULT_COLUMNS as isize);
            return;
        }
        KeyCode::Up => {
            app.move_result_cursor(-(RESULT_COLUMNS as isize));
            return;
        }
        _ => {}
    }

    match app.picker.focus {
        FilterFocus::Name => match key.code {
            KeyCode::Backspace => {
                app.picker.name_query.pop();
                app.clamp_result_cursor();
            }
            KeyCode::Char(c) => {
                app.picker.name_query.push(c);
                app.clamp_result_cursor();
            }
            _ => {}
        },
        FilterFocus::Dropdown(field) => match key.code {
            KeyCode::Char('l') | KeyCode::Right | KeyCode::Char(' ') => {
                app.picker.dropdown_mut(field).cycle(1);
                app.clamp_result_cursor();
            }
            KeyCode::Char('h') | KeyCode::Left => {
                app.picker.dropdown_mut(field).cycle(-1);
                app.clamp_result_cursor();
            }
            _ => {}
        },
        FilterFocus::Results => match key.code {
            KeyCode::Char('l') | KeyCode::Right => app.move_result_cursor(1),
            KeyCode::Char('h') | KeyCode::Left => app.move_result_cursor(-1),
            KeyCode::Char('j') => app.move_result_cursor(RESULT_COLUMNS as isize),
            KeyCode::Char('k') => app.move_result_cursor(-(RESULT_COLUMNS as isize)),
            KeyCode::Char(' ') => app.pick_at_cursor(),
            _ => {}
        },
    }
}

fn handle_detail_key(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Enter | KeyCode::Char('c') => app.confirm(),
        KeyCode::Esc | KeyCode::Backspace => app.cancel_detail(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{loaded_app, two_player_roster};
    use squad_core::{PlayerId, RosterField};

    fn press(app: &mut AppState, code: KeyCode) {
        handle_key(app, KeyEvent::from(code));
    }

    fn type_str(app: &mut AppState, s: &str) {
        for c in s.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn quit_on_q_and_ctrl_c() {
        let mut app = loaded_app(two_player_roster());
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.running);

        let mut app = loaded_app(two_player_roster());
        handle_key(&mut app, KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(!app.running);
    }

    #[test]
    fn q_types_into_search_while_picker_open() {
        let mut app = loaded_app(two_player_roster());
        press(&mut app, KeyCode::Char('a'));
        assert_eq!(app.modal, Modal::Browse);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.running);
        assert_eq!(app.picker.name_query, "q");
    }

    #[test]
    fn type_search_then_pick_with_enter() {
        let mut app = loaded_app(two_player_roster());
        press(&mut app, KeyCode::Enter);
        type_str(&mut app, "bo");
        assert_eq!(app.filtered().len(), 1);

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.modal, Modal::Detail(PlayerId::new("2")));
        assert_eq!(app.squad.ids(), [PlayerId::new("2")]);
    }

    #[test]
    fn backspace_edits_search() {
        let mut app = loaded_app(two_player_roster());
        press(&mut app, KeyCode::Char('a'));
        type_str(&mut app, "zz");
        assert!(app.filtered().is_empty());
        press(&mut app, KeyCode::Backspace);
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.filtered().len(), 2);
    }

    #[test]
    fn dropdown_focus_cycles_values() {
        let mut app = loaded_app(two_player_roster());
        press(&mut app, KeyCode::Char('a'));
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.picker.focus, FilterFocus::Dropdown(RosterField::Nationality));

        press(&mut app, KeyCode::Right);
        assert_eq!(app.picker.dropdown(RosterField::Nationality).value(), Some("ES"));
        let names: Vec<&str> = app.filtered().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Bob"]);
    }

    #[test]
    fn results_focus_moves_cursor() {
        let mut app = loaded_app(two_player_roster());
        press(&mut app, KeyCode::Char('a'));
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.picker.focus, FilterFocus::Results);
        press(&mut app, KeyCode::Char('l'));
        assert_eq!(app.picker.cursor, 1);
        press(&mut app, KeyCode::Char('l'));
        assert_eq!(app.picker.cursor, 1);
        press(&mut app, KeyCode::Char('h'));
        assert_eq!(app.picker.cursor, 0);
    }

    #[test]
    fn detail_escape_then_confirm_flow() {
        let mut app = loaded_app(two_player_roster());
        press(&mut app, KeyCode::Char('a'));
        press(&mut app, KeyCode::Enter);
        assert!(matches!(app.modal, Modal::Detail(_)));

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.modal, Modal::Browse);

        press(&mut app, KeyCode::Enter); // duplicate pick → alert
        assert!(app.notice.is_some());
        press(&mut app, KeyCode::Char('z')); // dismiss
        assert!(app.notice.is_none());
        assert_eq!(app.picker.name_query, "");

        app.picker.cursor = 1;
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Enter); // confirm
        assert_eq!(app.modal, Modal::Closed);
        assert_eq!(
            app.notice.as_ref().map(|n| n.message.as_str()),
            Some("Team of 2 players created!")
        );
    }

    #[test]
    fn team_delete_key_removes_under_cursor() {
        let mut app = loaded_app(two_player_roster());
        app.pick(&PlayerId::new("1"));
        app.pick(&PlayerId::new("2"));
        app.close_picker();

        press(&mut app, KeyCode::Char('l'));
        assert_eq!(app.team_cursor, 1);
        press(&mut app, KeyCode::Char('x'));
        assert_eq!(app.squad.ids(), [PlayerId::new("1")]);
        assert_eq!(app.team_cursor, 0);
    }

    #[test]
    fn help_panel_opens_error_history() {
        let mut app = loaded_app(two_player_roster());
        press(&mut app, KeyCode::Char('2'));
        assert_eq!(app.active_panel, Panel::Help);
        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.active_panel, Panel::Help);
        press(&mut app, KeyCode::Char('e'));
        assert_eq!(app.overlay, Overlay::ErrorHistory);
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.overlay, Overlay::None);
        press(&mut app, KeyCode::Char('1'));
        assert_eq!(app.active_panel, Panel::Team);
    }
}
