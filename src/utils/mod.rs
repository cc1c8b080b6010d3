mod maths_utils;
mod time_utils;

pub use maths_utils::{pct01, round_even, round1, stable_rand_0_1};
pub use time_utils::{TimeUtils, format_feed_time, now_feed_time};
