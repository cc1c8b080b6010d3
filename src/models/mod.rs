pub mod regime;

pub use regime::{Regime, S5_BADGE_EMPTY, S5_BADGE_PREFIX, coerce_to_string, s5_badge_text};
