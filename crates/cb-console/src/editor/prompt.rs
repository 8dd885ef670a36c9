//! Console prompt.

use nu_ansi_term::{Color, Style};
use reedline::{Prompt, PromptEditMode, PromptHistorySearch, PromptHistorySearchStatus};
use std::borrow::Cow;

/// Prompt drawn as a bold colored label followed by a plain symbol,
/// e.g. `cb-cli> `.
#[derive(Debug, Clone)]
pub struct ConsolePrompt {
    text: String,
    symbol: String,
    color: Color,
}

impl ConsolePrompt {
    pub fn new(text: impl Into<String>, symbol: impl Into<String>) -> Self {
        ConsolePrompt {
            text: text.into(),
            symbol: symbol.into(),
            color: Color::LightGreen,
        }
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }
}

impl Prompt for ConsolePrompt {
    fn render_prompt_left(&self) -> Cow<'_, str> {
        let style = match self.color {
            Color::Default => Style::new().bold(),
            c => Style::new().bold().fg(c),
        };
        Cow::Owned(format!("{}{}", style.paint(&self.text), self.symbol))
    }

    fn render_prompt_right(&self) -> Cow<'_, str> {
        Cow::Borrowed("")
    }

    fn render_prompt_indicator(&self, _edit_mode: PromptEditMode) -> Cow<'_, str> {
        Cow::Borrowed("")
    }

    fn render_prompt_multiline_indicator(&self) -> Cow<'_, str> {
        Cow::Borrowed("")
    }

    fn render_prompt_history_search_indicator(
        &self,
        history_search: PromptHistorySearch,
    ) -> Cow<'_, str> {
        let prefix = match history_search.status {
            PromptHistorySearchStatus::Passing => "",
            PromptHistorySearchStatus::Failing => "failing ",
        };
        Cow::Owned(format!(
            "({}reverse-search: {}) ",
            prefix, history_search.term
        ))
    }
}
