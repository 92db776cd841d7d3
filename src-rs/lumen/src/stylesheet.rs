use owo_colors::Style;

pub const ERROR_COLOR: Style = Style::new().red();
pub const NOTE_COLOR: Style = Style::new().blue();
pub const HELP_COLOR: Style = Style::new().blue();
pub const SOURCE_ANNOTATION: Style = Style::new().blue().bold();
pub const FUNCTION_NAME: Style = Style::new().cyan().bold();
pub const TREE_BRANCH: Style = Style::new().dimmed();
pub const TOGGLE_ON: Style = Style::new().green().bold();
pub const TOGGLE_OFF: Style = Style::new().red().bold();
