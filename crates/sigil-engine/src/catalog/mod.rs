pub mod symbol;
pub mod theme;

pub use symbol::Symbol;
pub use theme::Theme;
