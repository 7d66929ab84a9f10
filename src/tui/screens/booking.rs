//! Booking screen — the single meeting-room booking form.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use tui_textarea::TextArea;

use crate::model::{
    BookingDraft, BookingField, FieldValue, SubmissionRecord, floors, meeting_rooms, towers,
};
use crate::tui::action::Action;
use crate::tui::widgets::field_row::{ROW_HEIGHT, draw_field_row};
use crate::tui::widgets::picker;
use crate::tui::widgets::select::{Select, SelectItem};

/// Field index for the tower select.
const TOWER: usize = 0;
/// Field index for the floor select.
const FLOOR: usize = 1;
/// Field index for the meeting room select.
const ROOM: usize = 2;
/// Field index for the date picker.
const DATE: usize = 3;
/// Field index for the start time picker.
const START_TIME: usize = 4;
/// Field index for the end time picker.
const END_TIME: usize = 5;
/// Field index for the comment text area.
const COMMENT: usize = 6;
/// Total number of form fields.
const FIELD_COUNT: usize = 7;

/// State for the booking screen.
#[derive(Debug, Clone)]
pub struct BookingState {
    draft: BookingDraft,
    tower: Select,
    floor: Select,
    room: Select,
    comment: TextArea<'static>,
    focus: usize,
    field_errors: [Option<String>; FIELD_COUNT],
    general_error: Option<String>,
}

impl Default for BookingState {
    fn default() -> Self {
        Self::new()
    }
}

impl BookingState {
    /// Creates a fresh booking form with every field unset.
    pub fn new() -> Self {
        let tower = Select::new(
            "Tower",
            towers().iter().map(|t| SelectItem::plain(t)).collect(),
        );
        let floor = Select::new(
            "Floor",
            floors()
                .iter()
                .map(|f| SelectItem::plain(f.as_str()))
                .collect(),
        );
        let room = Select::new(
            "Meeting Room",
            meeting_rooms()
                .iter()
                .map(|r| SelectItem {
                    value: r.number.as_str(),
                    label: r.name.as_str(),
                })
                .collect(),
        );

        Self {
            draft: BookingDraft::default(),
            tower,
            floor,
            room,
            comment: make_textarea(),
            focus: TOWER,
            field_errors: Default::default(),
            general_error: None,
        }
    }

    /// Handles a key event, returning an [`Action`] for the app to apply.
    pub fn handle_key(&mut self, key: KeyEvent) -> Action {
        // Alt chords work from any field, including the comment.
        if key.modifiers == KeyModifiers::ALT {
            match key.code {
                KeyCode::Char('s') => return self.submit(),
                KeyCode::Char('c') => {
                    self.clear();
                    return Action::None;
                }
                _ => {}
            }
        }

        match key.code {
            KeyCode::Tab => {
                self.focus = (self.focus + 1) % FIELD_COUNT;
                Action::None
            }
            KeyCode::BackTab => {
                self.focus = (self.focus + FIELD_COUNT - 1) % FIELD_COUNT;
                Action::None
            }
            KeyCode::Esc => Action::Quit,
            _ if self.focus == COMMENT => self.handle_comment_key(key),
            KeyCode::Enter => self.submit(),
            KeyCode::Up => {
                self.step_focused(false);
                Action::None
            }
            KeyCode::Down => {
                self.step_focused(true);
                Action::None
            }
            KeyCode::Backspace | KeyCode::Delete => {
                self.clear_focused();
                Action::None
            }
            _ => Action::None,
        }
    }

    /// Returns the current draft.
    pub fn draft(&self) -> &BookingDraft {
        &self.draft
    }

    /// Returns the index of the focused field.
    pub fn focus(&self) -> usize {
        self.focus
    }

    /// Returns the validation error for the field at `index`, if any.
    pub fn field_error(&self, index: usize) -> Option<&str> {
        self.field_errors.get(index).and_then(Option::as_deref)
    }

    /// Returns `true` if any field has a validation error set.
    pub fn has_errors(&self) -> bool {
        self.field_errors.iter().any(Option::is_some)
    }

    /// Returns the screen-level error message, if any.
    pub fn general_error(&self) -> Option<&str> {
        self.general_error.as_deref()
    }

    /// Sets a screen-level error message not tied to any field.
    ///
    /// Used to display journal failures inline.
    pub fn set_error(&mut self, msg: String) {
        self.general_error = Some(msg);
    }

    /// Resets the whole form: draft, comment widget, focus, and errors.
    /// The app-level confetti flag is deliberately not touched.
    pub fn clear(&mut self) {
        self.draft.reset();
        self.comment = make_textarea();
        self.focus = TOWER;
        self.clear_errors();
        self.general_error = None;
    }

    /// Routes a key into the comment text area and folds the new text back
    /// into the draft. The third-party widget owns its editing state, so the
    /// draft is re-synced after every input.
    fn handle_comment_key(&mut self, key: KeyEvent) -> Action {
        self.comment.input(key);
        self.draft
            .set(FieldValue::Comment(self.comment.lines().join("\n")));
        Action::None
    }

    /// Steps the focused select or picker, folding the result into the draft.
    fn step_focused(&mut self, forward: bool) {
        let update = match self.focus {
            TOWER => {
                let v = if forward {
                    self.tower.next_value(&self.draft.tower)
                } else {
                    self.tower.prev_value(&self.draft.tower)
                };
                FieldValue::Tower(v.to_string())
            }
            FLOOR => {
                let v = if forward {
                    self.floor.next_value(&self.draft.tower_floor)
                } else {
                    self.floor.prev_value(&self.draft.tower_floor)
                };
                FieldValue::TowerFloor(v.to_string())
            }
            ROOM => {
                let v = if forward {
                    self.room.next_value(&self.draft.meeting_room)
                } else {
                    self.room.prev_value(&self.draft.meeting_room)
                };
                FieldValue::MeetingRoom(v.to_string())
            }
            DATE => FieldValue::Date(picker::step_date(self.draft.date, forward)),
            START_TIME => FieldValue::StartTime(picker::step_time(self.draft.start_time, forward)),
            END_TIME => FieldValue::EndTime(picker::step_time(self.draft.end_time, forward)),
            _ => return,
        };
        self.draft.set(update);
    }

    /// Clears the focused field back to unset.
    fn clear_focused(&mut self) {
        let update = match self.focus {
            TOWER => FieldValue::Tower(String::new()),
            FLOOR => FieldValue::TowerFloor(String::new()),
            ROOM => FieldValue::MeetingRoom(String::new()),
            DATE => FieldValue::Date(None),
            START_TIME => FieldValue::StartTime(None),
            END_TIME => FieldValue::EndTime(None),
            _ => return,
        };
        self.draft.set(update);
    }

    /// Validates the draft and assembles a submission record.
    ///
    /// On violations, every offending field is marked and nothing is
    /// submitted — the confetti flag never toggles for a rejected submit.
    fn submit(&mut self) -> Action {
        self.clear_errors();
        self.general_error = None;

        match SubmissionRecord::assemble(&self.draft) {
            Ok(record) => Action::Submit(record),
            Err(violations) => {
                for violation in &violations {
                    self.field_errors[field_index(violation.field())] =
                        Some(violation.to_string());
                }
                Action::None
            }
        }
    }

    fn clear_errors(&mut self) {
        for slot in &mut self.field_errors {
            *slot = None;
        }
    }
}

/// Maps a field identifier to its on-screen row index.
fn field_index(field: BookingField) -> usize {
    match field {
        BookingField::Tower => TOWER,
        BookingField::TowerFloor => FLOOR,
        BookingField::MeetingRoom => ROOM,
        BookingField::Date => DATE,
        BookingField::StartTime => START_TIME,
        BookingField::EndTime => END_TIME,
        BookingField::Comment => COMMENT,
    }
}

fn make_textarea() -> TextArea<'static> {
    let mut textarea = TextArea::default();
    textarea.set_cursor_line_style(Style::default());
    textarea.set_placeholder_text("Anything the room team should know");
    textarea
}

/// Renders the booking screen.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_booking(state: &BookingState, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" Book a Meeting Room ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let comment_height = ROW_HEIGHT + 2;
    let [rows_area, comment_area, error_area, _spacer, footer_area] = Layout::vertical([
        Constraint::Length(ROW_HEIGHT * 6),
        Constraint::Length(comment_height),
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(inner);

    let row_areas = Layout::vertical([Constraint::Length(ROW_HEIGHT); 6]).split(rows_area);

    let draft = state.draft();
    let rows: [(&str, String); 6] = [
        ("Tower", state.tower.display_label(&draft.tower).to_string()),
        (
            "Floor",
            state.floor.display_label(&draft.tower_floor).to_string(),
        ),
        (
            "Meeting Room",
            state.room.display_label(&draft.meeting_room).to_string(),
        ),
        ("Date", picker::display_date(draft.date)),
        ("Start Time", picker::display_time(draft.start_time)),
        ("End Time", picker::display_time(draft.end_time)),
    ];

    for (i, (label, value)) in rows.iter().enumerate() {
        draw_field_row(
            frame,
            row_areas[i],
            label,
            value,
            state.focus() == i,
            true,
            state.field_error(i),
        );
    }

    // Comment: bordered like the other rows, textarea rendered inside.
    let comment_focused = state.focus() == COMMENT;
    let comment_block = Block::default()
        .title("Comment")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if comment_focused {
            Color::Yellow
        } else {
            Color::DarkGray
        }));
    let comment_inner = comment_block.inner(comment_area);
    frame.render_widget(comment_block, comment_area);
    frame.render_widget(&state.comment, comment_inner);

    if let Some(err) = state.general_error() {
        let error = Paragraph::new(Line::from(Span::styled(
            err,
            Style::default().fg(Color::Red),
        )));
        frame.render_widget(error, error_area);
    }

    let footer = Paragraph::new(Line::from(
        "Tab: next  \u{2191}/\u{2193}: change  Del: unset  Enter/Alt+s: book  Alt+c: clear  Esc: quit",
    ))
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, footer_area);
}
