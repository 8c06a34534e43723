use crate::common::{
    newtypes::NotificationId,
    notification::{Notification, NotificationKind},
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ReadFilter {
    #[default]
    All,
    Unread,
    Read,
}

impl ReadFilter {
    pub const ALL: [ReadFilter; 3] = [ReadFilter::All, ReadFilter::Unread, ReadFilter::Read];

    pub fn as_str(&self) -> &'static str {
        use ReadFilter::*;
        match self {
            All => "all",
            Unread => "unread",
            Read => "read",
        }
    }

    pub fn label(&self) -> &'static str {
        use ReadFilter::*;
        match self {
            All => "All",
            Unread => "Unread",
            Read => "Read",
        }
    }

    pub fn parse(value: &str) -> Self {
        use ReadFilter::*;
        match value {
            "unread" => Unread,
            "read" => Read,
            _ => All,
        }
    }

    fn matches(&self, notification: &Notification) -> bool {
        use ReadFilter::*;
        match self {
            All => true,
            Unread => !notification.read,
            Read => notification.read,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum KindFilter {
    #[default]
    All,
    Kind(NotificationKind),
}

impl KindFilter {
    /// The selectable categories, `Other` is not offered as a filter.
    pub const KINDS: [NotificationKind; 3] = [
        NotificationKind::DiscussionReply,
        NotificationKind::TranslationApproved,
        NotificationKind::TranslationRejected,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            KindFilter::All => "all",
            KindFilter::Kind(kind) => kind.as_str(),
        }
    }

    pub fn parse(value: &str) -> Self {
        match value {
            "all" => KindFilter::All,
            raw => KindFilter::Kind(NotificationKind::from(raw.to_string())),
        }
    }

    fn matches(&self, notification: &Notification) -> bool {
        match self {
            KindFilter::All => true,
            KindFilter::Kind(kind) => &notification.kind == kind,
        }
    }
}

/// Derive the visible inbox from the working list. Pure, order preserving, and
/// recomputed from scratch on every input change; the three predicates compose
/// with logical AND over disjoint fields.
pub fn filter_notifications(
    notifications: &[Notification],
    search: &str,
    read_filter: ReadFilter,
    kind_filter: &KindFilter,
) -> Vec<Notification> {
    let term = search.trim().to_lowercase();
    notifications
        .iter()
        .filter(|n| read_filter.matches(n))
        .filter(|n| kind_filter.matches(n))
        .filter(|n| term.is_empty() || matches_search(n, &term))
        .cloned()
        .collect()
}

/// Optimistic read-flag flip for a single notification. The caller issues the
/// remote update in the same step; the flag is never reverted afterwards.
pub fn mark_read(notifications: &mut [Notification], id: NotificationId) {
    if let Some(notification) = notifications.iter_mut().find(|n| n.id == id) {
        notification.read = true;
    }
}

/// Optimistic flip of the whole inbox, paired with the bulk update call.
pub fn mark_all_read(notifications: &mut [Notification]) {
    for notification in notifications.iter_mut() {
        notification.read = true;
    }
}

/// Case insensitive substring match against message and attribution fields,
/// any one match suffices. Absent fields never match.
fn matches_search(notification: &Notification, term: &str) -> bool {
    [
        Some(notification.message.as_str()),
        notification.created_by_username.as_deref(),
        notification.created_by_display_name.as_deref(),
    ]
    .iter()
    .flatten()
    .any(|field| field.to_lowercase().contains(term))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::common::newtypes::{NotificationId, TranslationId};
    use pretty_assertions::assert_eq;

    fn notification(id: i32, kind: NotificationKind, read: bool) -> Notification {
        Notification {
            id: NotificationId(id),
            kind,
            message: format!("message {id}"),
            read,
            created_at: "2024-01-10T12:00:00Z".parse().expect("parse timestamp"),
            translation_id: Some(TranslationId(id)),
            created_by_username: None,
            created_by_display_name: None,
        }
    }

    /// Fetch result from the scenario in the acceptance checklist: two unread,
    /// one read.
    fn inbox() -> Vec<Notification> {
        vec![
            notification(1, NotificationKind::DiscussionReply, false),
            notification(2, NotificationKind::TranslationApproved, false),
            notification(3, NotificationKind::TranslationRejected, true),
        ]
    }

    #[test]
    fn test_default_filters_pass_everything() {
        let list = inbox();
        let view = filter_notifications(&list, "", ReadFilter::All, &KindFilter::All);
        assert_eq!(list, view);
    }

    #[test]
    fn test_view_is_pure_and_idempotent() {
        let list = inbox();
        let once = filter_notifications(&list, "message", ReadFilter::Unread, &KindFilter::All);
        let twice = filter_notifications(&once, "message", ReadFilter::Unread, &KindFilter::All);
        assert_eq!(
            once,
            filter_notifications(&list, "message", ReadFilter::Unread, &KindFilter::All)
        );
        assert_eq!(once, twice);
        // the working list is untouched
        assert_eq!(inbox(), list);
    }

    #[test]
    fn test_read_filters_partition_the_list() {
        let list = inbox();
        let unread = filter_notifications(&list, "", ReadFilter::Unread, &KindFilter::All);
        let read = filter_notifications(&list, "", ReadFilter::Read, &KindFilter::All);
        assert_eq!(vec![list[0].clone(), list[1].clone()], unread);
        assert_eq!(vec![list[2].clone()], read);
        assert_eq!(list.len(), unread.len() + read.len());
    }

    #[test]
    fn test_filters_compose_with_and() {
        let list = inbox();
        let unread = filter_notifications(&list, "", ReadFilter::Unread, &KindFilter::All);
        assert_eq!(2, unread.len());
        let narrowed = filter_notifications(
            &list,
            "",
            ReadFilter::Unread,
            &KindFilter::Kind(NotificationKind::TranslationApproved),
        );
        assert_eq!(vec![list[1].clone()], narrowed);
    }

    #[test]
    fn test_filter_order_is_irrelevant() {
        // predicates are independent, so narrowing by category first must yield
        // the same view as narrowing by read state first
        let list = inbox();
        let by_kind = filter_notifications(
            &list,
            "",
            ReadFilter::All,
            &KindFilter::Kind(NotificationKind::TranslationApproved),
        );
        let then_unread = filter_notifications(&by_kind, "", ReadFilter::Unread, &KindFilter::All);
        let by_unread = filter_notifications(&list, "", ReadFilter::Unread, &KindFilter::All);
        let then_kind = filter_notifications(
            &by_unread,
            "",
            ReadFilter::All,
            &KindFilter::Kind(NotificationKind::TranslationApproved),
        );
        assert_eq!(then_unread, then_kind);
    }

    #[test]
    fn test_search_is_case_insensitive_and_trimmed() {
        let mut list = inbox();
        list[0].message = "Hello world".to_string();
        let upper = filter_notifications(&list, "HELLO", ReadFilter::All, &KindFilter::All);
        let lower = filter_notifications(&list, "hello", ReadFilter::All, &KindFilter::All);
        let padded = filter_notifications(&list, "  hello ", ReadFilter::All, &KindFilter::All);
        assert_eq!(vec![list[0].clone()], upper);
        assert_eq!(upper, lower);
        assert_eq!(upper, padded);
    }

    #[test]
    fn test_search_covers_attribution_fields() {
        let mut list = inbox();
        list[0].created_by_username = Some("alice".to_string());
        list[1].created_by_display_name = Some("Alice Lidell".to_string());
        let view = filter_notifications(&list, "alice", ReadFilter::All, &KindFilter::All);
        assert_eq!(vec![list[0].clone(), list[1].clone()], view);
        // absent attribution fields are skipped, not matched
        let none = filter_notifications(&list, "bob", ReadFilter::All, &KindFilter::All);
        assert!(none.is_empty());
    }

    #[test]
    fn test_mark_read_is_monotonic() {
        let mut list = inbox();
        mark_read(&mut list, NotificationId(1));
        assert!(list[0].read);
        assert!(!list[1].read);
        // marking again keeps the flag set
        mark_read(&mut list, NotificationId(1));
        assert!(list[0].read);
        // unknown ids leave the list untouched
        mark_read(&mut list, NotificationId(99));
        assert_eq!(inbox().len(), list.len());
    }

    #[test]
    fn test_mark_all_read_leaves_no_unread() {
        let mut list = inbox();
        mark_all_read(&mut list);
        let unread = filter_notifications(&list, "", ReadFilter::Unread, &KindFilter::All);
        assert!(unread.is_empty());
        let read = filter_notifications(&list, "", ReadFilter::Read, &KindFilter::All);
        assert_eq!(list.len(), read.len());
    }

    #[test]
    fn test_unknown_category_is_filterable() {
        let mut list = inbox();
        list[2].kind = NotificationKind::Other("goal_completed".to_string());
        let view = filter_notifications(
            &list,
            "",
            ReadFilter::All,
            &KindFilter::parse("goal_completed"),
        );
        assert_eq!(vec![list[2].clone()], view);
    }
}
