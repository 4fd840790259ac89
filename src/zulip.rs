//! Zulip-specific syntax: time tags, mentions, emoji and narrow links.

use std::fmt::Display;

use chrono::{DateTime, SecondsFormat, TimeZone};

/// Render `time` as a Zulip `<time:…>` tag.
///
/// Zulip shows the tag in each reader's own timezone. UTC is written with a
/// `Z` suffix and other offsets as `±hh:mm`.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
///
/// let t = Utc.with_ymd_and_hms(2023, 5, 15, 14, 30, 0).unwrap();
/// assert_eq!(zlmd::format_time(&t), "<time:2023-05-15T14:30:00Z>");
/// ```
#[must_use]
pub fn format_time<Tz>(time: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    format!("<time:{}>", time.to_rfc3339_opts(SecondsFormat::Secs, true))
}

/// `@**name**`, notifying the user.
#[must_use]
pub fn mention(name: &str) -> String {
    format!("@**{name}**")
}

/// `@_**name**`, referring to the user without notifying them.
#[must_use]
pub fn silent_mention(name: &str) -> String {
    format!("@_**{name}**")
}

/// `@*group*`
#[must_use]
pub fn group_mention(group: &str) -> String {
    format!("@*{group}*")
}

/// `:name:`
#[must_use]
pub fn emoji(name: &str) -> String {
    format!(":{name}:")
}

/// `#**stream**`
#[must_use]
pub fn stream_link(stream: &str) -> String {
    format!("#**{stream}**")
}

/// `#**stream>topic**`
#[must_use]
pub fn topic_link(stream: &str, topic: &str) -> String {
    format!("#**{stream}>{topic}**")
}

#[cfg(test)]
mod tests {
    use chrono::{FixedOffset, NaiveDateTime, Utc};
    use rstest::rstest;

    use super::*;

    #[test]
    fn formats_utc_time() {
        let t = Utc
            .with_ymd_and_hms(2023, 1, 2, 15, 4, 5)
            .single()
            .expect("valid timestamp");
        assert_eq!(format_time(&t), "<time:2023-01-02T15:04:05Z>");
    }

    #[test]
    fn formats_offset_time() {
        let offset = FixedOffset::east_opt(2 * 3600).expect("valid offset");
        let t = offset
            .with_ymd_and_hms(2023, 1, 2, 15, 4, 5)
            .single()
            .expect("valid timestamp");
        assert_eq!(format_time(&t), "<time:2023-01-02T15:04:05+02:00>");
    }

    #[test]
    fn drops_subsecond_precision() {
        let naive =
            NaiveDateTime::parse_from_str("2024-03-01 08:00:00.750", "%Y-%m-%d %H:%M:%S%.f")
                .expect("valid timestamp");
        assert_eq!(format_time(&naive.and_utc()), "<time:2024-03-01T08:00:00Z>");
    }

    #[rstest]
    #[case(mention("Ada Lovelace"), "@**Ada Lovelace**")]
    #[case(silent_mention("Ada"), "@_**Ada**")]
    #[case(group_mention("backend"), "@*backend*")]
    #[case(emoji("tada"), ":tada:")]
    #[case(stream_link("general"), "#**general**")]
    #[case(topic_link("general", "release"), "#**general>release**")]
    fn formats_zulip_syntax(#[case] actual: String, #[case] expected: &str) {
        assert_eq!(actual, expected);
    }
}
