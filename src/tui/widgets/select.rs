//! Single-select widget over a static option catalog.

/// One selectable option: the stored value and its display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectItem {
    pub value: &'static str,
    pub label: &'static str,
}

impl SelectItem {
    /// An option whose stored value doubles as its label.
    pub fn plain(value: &'static str) -> Self {
        Self {
            value,
            label: value,
        }
    }
}

/// A dropdown-style single select.
///
/// The select holds no value of its own: the current value lives in the
/// booking draft and is passed in for stepping and display, keeping every
/// widget driven by form state rather than widget-internal state.
#[derive(Debug, Clone)]
pub struct Select {
    label: &'static str,
    items: Vec<SelectItem>,
}

impl Select {
    /// Creates a select over the given options.
    pub fn new(label: &'static str, items: Vec<SelectItem>) -> Self {
        Self { label, items }
    }

    /// Returns the field label.
    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Returns the options.
    pub fn items(&self) -> &[SelectItem] {
        &self.items
    }

    /// Returns the value one step after `current`.
    ///
    /// An unset value steps to the first option; the last option holds.
    pub fn next_value(&self, current: &str) -> &'static str {
        match self.position(current) {
            Some(i) => self.items[(i + 1).min(self.items.len() - 1)].value,
            None => self.first_value(),
        }
    }

    /// Returns the value one step before `current`.
    ///
    /// An unset value steps to the first option; the first option holds.
    pub fn prev_value(&self, current: &str) -> &'static str {
        match self.position(current) {
            Some(i) => self.items[i.saturating_sub(1)].value,
            None => self.first_value(),
        }
    }

    /// Returns the display label for a stored value, or `""` if unset.
    pub fn display_label(&self, current: &str) -> &'static str {
        self.position(current)
            .map(|i| self.items[i].label)
            .unwrap_or("")
    }

    fn position(&self, value: &str) -> Option<usize> {
        if value.is_empty() {
            return None;
        }
        self.items.iter().position(|item| item.value == value)
    }

    fn first_value(&self) -> &'static str {
        self.items.first().map(|item| item.value).unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_select() -> Select {
        Select::new(
            "Tower",
            vec![
                SelectItem::plain("Tower A"),
                SelectItem::plain("Tower B"),
                SelectItem {
                    value: "3",
                    label: "Meeting Room №3",
                },
            ],
        )
    }

    #[test]
    fn next_from_unset_selects_first() {
        assert_eq!(make_select().next_value(""), "Tower A");
    }

    #[test]
    fn prev_from_unset_selects_first() {
        assert_eq!(make_select().prev_value(""), "Tower A");
    }

    #[test]
    fn next_advances() {
        assert_eq!(make_select().next_value("Tower A"), "Tower B");
    }

    #[test]
    fn next_holds_at_last() {
        assert_eq!(make_select().next_value("3"), "3");
    }

    #[test]
    fn prev_steps_back() {
        assert_eq!(make_select().prev_value("Tower B"), "Tower A");
    }

    #[test]
    fn prev_holds_at_first() {
        assert_eq!(make_select().prev_value("Tower A"), "Tower A");
    }

    #[test]
    fn display_label_for_value() {
        assert_eq!(make_select().display_label("3"), "Meeting Room №3");
    }

    #[test]
    fn display_label_unset_is_empty() {
        assert_eq!(make_select().display_label(""), "");
    }

    #[test]
    fn empty_select_steps_stay_unset() {
        let select = Select::new("Empty", vec![]);
        assert_eq!(select.next_value(""), "");
        assert_eq!(select.prev_value(""), "");
    }

    #[test]
    fn label_accessor() {
        assert_eq!(make_select().label(), "Tower");
    }
}
