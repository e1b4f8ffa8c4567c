//! Panel controller: which UI region is visible.
//!
//! The controller stores a single visible [`Panel`], so "exactly one panel
//! visible" holds by construction; the boolean view is a projection of it.

use super::state::GameState;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A mutually exclusive UI region, one per [`GameState`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Panel {
    Question,
    Guess,
    Learn,
    Result,
}

impl Panel {
    pub const ALL: [Panel; 4] = [Panel::Question, Panel::Guess, Panel::Learn, Panel::Result];

    /// The panel that shows `state`.
    pub fn for_state(state: GameState) -> Self {
        match state {
            GameState::Question => Self::Question,
            GameState::Guessing => Self::Guess,
            GameState::Learning => Self::Learn,
            GameState::Result => Self::Result,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Question => "question",
            Self::Guess => "guess",
            Self::Learn => "learn",
            Self::Result => "result",
        }
    }
}

impl fmt::Display for Panel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PanelController {
    visible: Panel,
}

impl Default for PanelController {
    fn default() -> Self {
        Self::new()
    }
}

impl PanelController {
    /// Starts with the question panel visible.
    pub fn new() -> Self {
        Self {
            visible: Panel::for_state(GameState::default()),
        }
    }

    /// Show the panel for `state` and hide the other three.
    ///
    /// Returns `true` if the visible panel changed.
    pub fn set_visible_panel(&mut self, state: GameState) -> bool {
        let panel = Panel::for_state(state);
        let changed = panel != self.visible;
        self.visible = panel;
        changed
    }

    pub fn visible_panel(&self) -> Panel {
        self.visible
    }

    pub fn is_visible(&self, panel: Panel) -> bool {
        self.visible == panel
    }

    /// Visibility flag of every panel, in [`Panel::ALL`] order.
    pub fn visibility(&self) -> [(Panel, bool); 4] {
        Panel::ALL.map(|panel| (panel, self.is_visible(panel)))
    }

    pub fn visible_count(&self) -> usize {
        self.visibility().iter().filter(|(_, shown)| *shown).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_question_panel() {
        let panels = PanelController::new();
        assert_eq!(panels.visible_panel(), Panel::Question);
        assert_eq!(panels.visible_count(), 1);
    }

    #[test]
    fn each_state_shows_its_own_panel() {
        let mut panels = PanelController::new();

        for state in GameState::ALL {
            panels.set_visible_panel(state);
            assert_eq!(panels.visible_panel(), Panel::for_state(state));
            assert_eq!(panels.visible_count(), 1);
        }
    }

    #[test]
    fn visibility_hides_the_other_three() {
        let mut panels = PanelController::new();
        panels.set_visible_panel(GameState::Learning);

        let visibility = panels.visibility();
        assert_eq!(
            visibility,
            [
                (Panel::Question, false),
                (Panel::Guess, false),
                (Panel::Learn, true),
                (Panel::Result, false),
            ]
        );
    }

    #[test]
    fn set_visible_panel_reports_changes() {
        let mut panels = PanelController::new();

        assert!(!panels.set_visible_panel(GameState::Question));
        assert!(panels.set_visible_panel(GameState::Guessing));
        assert!(!panels.set_visible_panel(GameState::Guessing));
    }
}
