// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use clubhouse_domain::{ALL_MEMBERS, Announcement};
use time::macros::date;

use crate::Persistence;

fn announcement(title: &str, recipient: &str, day: time::Date, important: bool) -> Announcement {
    let mut announcement: Announcement = Announcement::new(
        title.to_string(),
        String::from("Details to follow"),
        String::from("Secretary"),
        recipient.to_string(),
        day,
    );
    announcement.important = important;
    announcement
}

#[test]
fn test_save_and_get_announcement() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let id: i64 = persistence
        .save_announcement(&announcement("AGM", ALL_MEMBERS, date!(2026 - 10 - 01), true))
        .unwrap();

    let loaded: Announcement = persistence.get_announcement(id).unwrap().unwrap();
    assert_eq!(loaded.title, "AGM");
    assert_eq!(loaded.sent_date, Some(date!(2026 - 10 - 01)));
    assert!(loaded.important);
}

#[test]
fn test_list_announcements_filters() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    persistence
        .save_announcement(&announcement("Kit", "Players", date!(2026 - 09 - 01), false))
        .unwrap();
    persistence
        .save_announcement(&announcement("AGM", ALL_MEMBERS, date!(2026 - 10 - 01), true))
        .unwrap();
    persistence
        .save_announcement(&announcement("Rota", "Coaches", date!(2026 - 09 - 15), true))
        .unwrap();

    let all: Vec<Announcement> = persistence.list_announcements(None, false).unwrap();
    let titles: Vec<&str> = all.iter().map(|a| a.title.as_str()).collect();
    assert_eq!(titles, vec!["AGM", "Rota", "Kit"]);

    assert_eq!(persistence.list_announcements(Some("Players"), false).unwrap().len(), 1);
    assert_eq!(persistence.list_announcements(None, true).unwrap().len(), 2);
}

#[test]
fn test_delete_announcement() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let id: i64 = persistence
        .save_announcement(&announcement("AGM", ALL_MEMBERS, date!(2026 - 10 - 01), false))
        .unwrap();
    assert!(persistence.delete_announcement(id).unwrap());
    assert!(!persistence.delete_announcement(id).unwrap());
}
