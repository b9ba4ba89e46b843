// 🧭 Navigator - Which view is active and how buttons move between them
//
// The current view is a plain value carried by each request; there is no
// server-side session. Every transition is an unconditional jump.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::UnknownVariant;
use crate::ledger::EntryType;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    #[default]
    Home,
    Income,
    Expense,
    Saving,
    Dashboard,
}

impl View {
    pub const ALL: [View; 5] = [
        View::Home,
        View::Income,
        View::Expense,
        View::Saving,
        View::Dashboard,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            View::Home => "home",
            View::Income => "income",
            View::Expense => "expense",
            View::Saving => "saving",
            View::Dashboard => "dashboard",
        }
    }

    /// Entry form shown by this view, if any
    pub fn entry_type(&self) -> Option<EntryType> {
        match self {
            View::Income => Some(EntryType::Income),
            View::Expense => Some(EntryType::Expense),
            View::Saving => Some(EntryType::Saving),
            View::Home | View::Dashboard => None,
        }
    }

    pub fn for_entry(entry_type: EntryType) -> View {
        match entry_type {
            EntryType::Income => View::Income,
            EntryType::Expense => View::Expense,
            EntryType::Saving => View::Saving,
        }
    }

    /// Label of the home-page button that opens this view
    pub fn button_label(&self) -> &'static str {
        match self {
            View::Home => "⬅️ Back to Home",
            View::Income => "➕ Add Income",
            View::Expense => "➖ Add Expense",
            View::Saving => "🪙 Add Savings",
            View::Dashboard => "📊 View Dashboard",
        }
    }

    pub fn apply(self, action: Action) -> View {
        match action {
            Action::Open(target) => target,
            Action::Back => View::Home,
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for View {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        View::ALL
            .into_iter()
            .find(|view| view.as_str() == s.trim().to_lowercase())
            .ok_or_else(|| UnknownVariant::new("view", s))
    }
}

/// A button activation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Open(View),
    Back,
}

impl Action {
    /// Build an action from the `action` / `target` fields of a navigation form
    pub fn parse(action: &str, target: Option<&str>) -> Result<Action, UnknownVariant> {
        match action.trim().to_lowercase().as_str() {
            "back" => Ok(Action::Back),
            "open" => {
                let target = target.ok_or_else(|| UnknownVariant::new("view", ""))?;
                Ok(Action::Open(target.parse()?))
            }
            other => Err(UnknownVariant::new("action", other)),
        }
    }
}

/// Tracks the active view across one interaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Navigator {
    current: View,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resume from a view name carried by the request. Unknown or missing names start at home.
    pub fn resume(view: Option<&str>) -> Self {
        let current = view
            .and_then(|name| name.parse().ok())
            .unwrap_or_default();
        Navigator { current }
    }

    pub fn current(&self) -> View {
        self.current
    }

    pub fn dispatch(&mut self, action: Action) -> View {
        self.current = self.current.apply(action);
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_home() {
        assert_eq!(Navigator::new().current(), View::Home);
        assert_eq!(Navigator::resume(None).current(), View::Home);
        assert_eq!(Navigator::resume(Some("nowhere")).current(), View::Home);
    }

    #[test]
    fn test_add_expense_then_back() {
        let mut nav = Navigator::new();

        assert_eq!(nav.dispatch(Action::Open(View::Expense)), View::Expense);
        assert_eq!(nav.dispatch(Action::Back), View::Home);
    }

    #[test]
    fn test_back_from_every_view_returns_home() {
        for view in View::ALL {
            assert_eq!(view.apply(Action::Back), View::Home);
        }
    }

    #[test]
    fn test_open_is_unconditional() {
        for from in View::ALL {
            for to in View::ALL {
                assert_eq!(from.apply(Action::Open(to)), to);
            }
        }
    }

    #[test]
    fn test_resume_and_parse() {
        assert_eq!(Navigator::resume(Some("saving")).current(), View::Saving);
        assert_eq!("Dashboard".parse::<View>().unwrap(), View::Dashboard);
        assert!("settings".parse::<View>().is_err());
    }

    #[test]
    fn test_action_parse() {
        assert_eq!(Action::parse("back", None), Ok(Action::Back));
        assert_eq!(
            Action::parse("open", Some("income")),
            Ok(Action::Open(View::Income))
        );
        assert!(Action::parse("open", None).is_err());
        assert!(Action::parse("open", Some("reports")).is_err());
        assert!(Action::parse("jump", Some("home")).is_err());
    }

    #[test]
    fn test_entry_views() {
        for entry_type in EntryType::ALL {
            assert_eq!(View::for_entry(entry_type).entry_type(), Some(entry_type));
        }
        assert_eq!(View::Dashboard.entry_type(), None);
    }
}
