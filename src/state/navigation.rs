/// Specifying what typed characters are routed to.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum InputMode {
    #[default]
    Normal,
    NewTask,
    City,
    Motivation,
    Timezone,
}

impl InputMode {
    /// Prompt shown above the input line.
    ///
    pub fn prompt(&self) -> &'static str {
        match self {
            InputMode::Normal => "",
            InputMode::NewTask => "What is your main focus today?",
            InputMode::City => "City",
            InputMode::Motivation => "New motivation",
            InputMode::Timezone => "Timezone",
        }
    }

    /// Whether keys go to a text buffer instead of commands.
    ///
    pub fn is_editing(&self) -> bool {
        !matches!(self, InputMode::Normal)
    }
}
