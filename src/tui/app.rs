use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use ratatui::{Frame, Terminal};

use crate::journal::{Journal, SubmissionSink};

use super::action::Action;
use super::error::AppError;
use super::screens::{BookingState, draw_booking};
use super::widgets::draw_confetti;

/// Top-level application state: the booking form, the journal the submitted
/// bookings go to, and the confetti flag.
///
/// The form has exactly two externally meaningful states: editing, and
/// just-submitted with the confetti overlay visible. Submit loops back into
/// editing.
pub struct App {
    booking: BookingState,
    journal: Journal,
    confetti: bool,
    should_quit: bool,
}

impl App {
    /// Creates a new `App` with an empty booking form.
    pub fn new(journal: Journal) -> Self {
        Self {
            booking: BookingState::new(),
            journal,
            confetti: false,
            should_quit: false,
        }
    }

    /// Main event loop: draw → read event → dispatch → check quit.
    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    pub fn run<B: ratatui::backend::Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
    ) -> Result<(), AppError> {
        while !self.should_quit {
            terminal.draw(|frame| self.draw(frame))?;
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }
        Ok(())
    }

    /// Renders the booking screen, with the confetti overlay on top when the
    /// flag is set.
    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    fn draw(&self, frame: &mut Frame) {
        let area = frame.area();
        draw_booking(&self.booking, frame, area);
        if self.confetti {
            draw_confetti(frame, area);
        }
    }

    /// Handles a key event: routes it to the screen, then applies the
    /// resulting action.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        let action = self.booking.handle_key(key);
        self.apply(action);
    }

    /// Applies a screen action to app-level state.
    fn apply(&mut self, action: Action) {
        match action {
            Action::None => {}
            Action::Quit => self.should_quit = true,
            Action::Submit(record) => {
                // The celebration toggles on every accepted submit rather
                // than latching on.
                self.confetti = !self.confetti;
                if let Err(e) = self.journal.submit(&record) {
                    self.booking.set_error(e.to_string());
                }
            }
        }
    }

    /// Returns `true` if the confetti overlay is currently visible.
    pub fn confetti(&self) -> bool {
        self.confetti
    }

    /// Returns `true` if the app should quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Returns a reference to the booking screen state.
    pub fn booking(&self) -> &BookingState {
        &self.booking
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEventState, KeyModifiers};
    use quickcheck_macros::quickcheck;

    use super::*;
    use crate::model::BookingDraft;

    fn make_app() -> (tempfile::TempDir, App) {
        let dir = tempfile::tempdir().unwrap();
        let journal = Journal::with_path(dir.path()).unwrap();
        (dir, App::new(journal))
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn alt_press(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::ALT,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn release(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        }
    }

    /// Fills every required field through key events (today, 09:00–10:00).
    fn fill_valid_form(app: &mut App) {
        app.handle_key(press(KeyCode::Down)); // tower
        app.handle_key(press(KeyCode::Tab));
        app.handle_key(press(KeyCode::Down)); // floor "3"
        app.handle_key(press(KeyCode::Tab));
        app.handle_key(press(KeyCode::Down)); // room "1"
        app.handle_key(press(KeyCode::Tab));
        app.handle_key(press(KeyCode::Down)); // date = today
        app.handle_key(press(KeyCode::Tab));
        app.handle_key(press(KeyCode::Down)); // start = 09:00
        app.handle_key(press(KeyCode::Tab));
        for _ in 0..5 {
            app.handle_key(press(KeyCode::Down)); // end = 10:00
        }
    }

    #[test]
    fn new_app_is_editing_with_no_confetti() {
        let (_dir, app) = make_app();
        assert!(!app.confetti());
        assert!(!app.should_quit());
        assert_eq!(*app.booking().draft(), BookingDraft::default());
    }

    #[test]
    fn esc_quits() {
        let (_dir, mut app) = make_app();
        app.handle_key(press(KeyCode::Esc));
        assert!(app.should_quit());
    }

    #[test]
    fn release_events_are_ignored() {
        let (_dir, mut app) = make_app();
        app.handle_key(release(KeyCode::Esc));
        assert!(!app.should_quit());
    }

    #[test]
    fn valid_submit_shows_confetti() {
        let (_dir, mut app) = make_app();
        fill_valid_form(&mut app);
        app.handle_key(alt_press(KeyCode::Char('s')));
        assert!(app.confetti());
    }

    #[test]
    fn second_submit_hides_confetti_again() {
        let (_dir, mut app) = make_app();
        fill_valid_form(&mut app);
        app.handle_key(alt_press(KeyCode::Char('s')));
        app.handle_key(alt_press(KeyCode::Char('s')));
        assert!(!app.confetti());
    }

    #[quickcheck]
    fn confetti_parity_over_n_submits(n: u8) -> bool {
        let n = n.min(16) as usize;
        let (_dir, mut app) = make_app();
        fill_valid_form(&mut app);
        for _ in 0..n {
            app.handle_key(alt_press(KeyCode::Char('s')));
        }
        app.confetti() == (n % 2 == 1)
    }

    #[test]
    fn rejected_submit_leaves_confetti_untouched() {
        let (_dir, mut app) = make_app();
        app.handle_key(alt_press(KeyCode::Char('s'))); // empty form
        assert!(!app.confetti());
        assert!(app.booking().has_errors());
    }

    #[test]
    fn submit_journals_the_record() {
        let (dir, mut app) = make_app();
        fill_valid_form(&mut app);
        app.handle_key(alt_press(KeyCode::Char('s')));

        let journal = Journal::with_path(dir.path()).unwrap();
        let entries = journal.entries().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].record.tower, "Tower A");
        assert_eq!(entries[0].record.start_time, "9:0");
        assert_eq!(entries[0].record.end_time, "10:0");
    }

    #[test]
    fn rejected_submit_journals_nothing() {
        let (dir, mut app) = make_app();
        app.handle_key(alt_press(KeyCode::Char('s')));

        let journal = Journal::with_path(dir.path()).unwrap();
        assert_eq!(journal.entries().unwrap().len(), 0);
    }

    #[test]
    fn clear_does_not_change_confetti() {
        let (_dir, mut app) = make_app();
        fill_valid_form(&mut app);
        app.handle_key(alt_press(KeyCode::Char('s')));
        assert!(app.confetti());

        app.handle_key(alt_press(KeyCode::Char('c')));
        assert!(app.confetti());
        assert_eq!(*app.booking().draft(), BookingDraft::default());
    }

    #[test]
    fn clear_on_pristine_form_leaves_confetti_off() {
        let (_dir, mut app) = make_app();
        app.handle_key(alt_press(KeyCode::Char('c')));
        assert!(!app.confetti());
        assert_eq!(*app.booking().draft(), BookingDraft::default());
    }
}
