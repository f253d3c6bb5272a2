pub mod spell;
pub mod text;

pub use spell::Spell;
pub use text::SpellText;
