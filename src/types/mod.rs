pub mod errors;
pub mod feedback;
pub mod identifiers;
pub mod locale;

pub use errors::{SelectionError, SessionError, StoreError};
pub use feedback::{CooldownHint, Feedback, SpecMatch};
pub use identifiers::{GameDate, GameDateError, SpellId};
pub use locale::{Locale, LocaleError};
