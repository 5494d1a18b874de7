use ratatui::style::Color;

pub const APP_HEADER: &str = "🐶 Dogstagram";
pub const WELCOME_TEXT: &str = "👋 Welcome! Get a dog!";
pub const BUTTON_FETCH: &str = " Get Dog [f] ";
pub const BUTTON_CLEAR: &str = " Clear [c] ";
pub const EMPTY_FEED: &str = "🥹 No dogs yet!";
pub const LOADING_TEXT: &str = "Fetching a dog...";
pub const KEY_HINTS: &str = "↑/↓ scroll  Home/End jump  q quit";
pub const LIST_TITLE: &str = " Dogs ";

pub const SPINNER_FRAMES: [&str; 8] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧"];

pub const PRIMARY: Color = Color::Rgb(122, 66, 214);
pub const PRIMARY_LIGHT: Color = Color::Rgb(201, 180, 242);
pub const DESTRUCTIVE: Color = Color::Red;
