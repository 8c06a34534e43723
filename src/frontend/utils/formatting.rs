use chrono::{DateTime, Datelike, Local, Utc};
use leptos::prelude::*;

/// Human-relative label for an event timestamp.
///
/// Anything within a minute of `now` (including clock skew into the future)
/// renders as "Just now"; after a week the absolute date is shown, with the
/// year only when it differs from `now`'s.
pub fn relative_time(time: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let diff = now.signed_duration_since(time);
    let minutes = diff.num_minutes();
    if minutes < 60 {
        if minutes <= 1 {
            "Just now".to_string()
        } else {
            format!("{minutes}m ago")
        }
    } else if diff.num_hours() < 24 {
        format!("{}h ago", diff.num_hours())
    } else if diff.num_days() < 7 {
        format!("{}d ago", diff.num_days())
    } else if time.year() == now.year() {
        time.format("%b %-d").to_string()
    } else {
        time.format("%b %-d, %Y").to_string()
    }
}

pub fn render_date_time(date_time: DateTime<Utc>) -> String {
    date_time
        .with_timezone(&Local)
        .format("%Y-%m-%d %H:%M:%S")
        .to_string()
}

/// Relative label with the absolute timestamp as tooltip.
pub fn event_time(time: DateTime<Utc>) -> impl IntoView {
    view! { <span title=render_date_time(time)>{relative_time(time, Utc::now())}</span> }
}

pub fn user_path(username: &str) -> String {
    format!("/user/{username}")
}

pub fn user_link(username: &str, title: String) -> impl IntoView {
    view! {
        <a class="link" href=user_path(username)>
            {title}
        </a>
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::Duration;
    use pretty_assertions::assert_eq;

    fn now() -> DateTime<Utc> {
        "2024-01-10T12:00:00Z".parse().expect("parse timestamp")
    }

    #[test]
    fn test_just_now() {
        assert_eq!("Just now", relative_time(now() - Duration::seconds(30), now()));
        assert_eq!("Just now", relative_time(now() - Duration::seconds(90), now()));
        assert_eq!("Just now", relative_time(now(), now()));
        // timestamps slightly in the future round down as well
        assert_eq!("Just now", relative_time(now() + Duration::seconds(30), now()));
    }

    #[test]
    fn test_minutes() {
        assert_eq!("2m ago", relative_time(now() - Duration::minutes(2), now()));
        assert_eq!("5m ago", relative_time(now() - Duration::minutes(5), now()));
        assert_eq!("59m ago", relative_time(now() - Duration::minutes(59), now()));
    }

    #[test]
    fn test_hours() {
        assert_eq!("1h ago", relative_time(now() - Duration::minutes(60), now()));
        assert_eq!("3h ago", relative_time(now() - Duration::hours(3), now()));
        assert_eq!("23h ago", relative_time(now() - Duration::hours(23), now()));
    }

    #[test]
    fn test_days() {
        assert_eq!("1d ago", relative_time(now() - Duration::hours(24), now()));
        assert_eq!("3d ago", relative_time(now() - Duration::days(3), now()));
        assert_eq!("6d ago", relative_time(now() - Duration::days(6), now()));
    }

    #[test]
    fn test_absolute_date_same_year() {
        assert_eq!("Jan 3", relative_time(now() - Duration::days(7), now()));
    }

    #[test]
    fn test_absolute_date_other_year() {
        assert_eq!("Dec 7, 2023", relative_time(now() - Duration::days(400), now()));
    }
}
