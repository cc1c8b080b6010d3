use chrono::{DateTime, Utc};

pub struct TimeUtils;

impl TimeUtils {
    /// Format used for `updated_at` in every feed document.
    pub const FEED_TIME_FORMAT: &str = "%Y-%m-%d %H:%M UTC";
}

pub fn format_feed_time(dt: DateTime<Utc>) -> String {
    dt.format(TimeUtils::FEED_TIME_FORMAT).to_string()
}

pub fn now_feed_time() -> String {
    format_feed_time(Utc::now())
}
