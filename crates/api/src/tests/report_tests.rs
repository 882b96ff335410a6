// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use clubhouse_domain::{Report, ReportKind};
use clubhouse_persistence::Persistence;

use super::helpers::{
    TODAY, add_game, add_player, add_squad, create_test_coach, create_test_secretary,
};
use crate::handlers::{games, training};
use crate::{
    ApiError, RecordAttendanceRequest, RecordGameStatsRequest, ScheduleTrainingRequest,
    player_performance_report, report_to_csv, squad_summary_report, training_attendance_report,
};

struct Fixture {
    persistence: Persistence,
    squad_id: i64,
    john: i64,
    tom: i64,
}

fn record(persistence: &mut Persistence, player_id: i64, game_id: i64, attended: bool, skill: i32) {
    games::record_game_stats(
        persistence,
        RecordGameStatsRequest {
            player_id,
            game_id,
            attended,
            tackles: skill,
            passes: skill,
            tries: skill,
            kicks: skill,
            overall_rating: None,
        },
        &create_test_coach(),
    )
    .unwrap();
}

fn attend(persistence: &mut Persistence, player_id: i64, training_id: i64, present: bool) {
    training::record_attendance(
        persistence,
        RecordAttendanceRequest {
            player_id,
            training_id,
            present,
            notes: None,
        },
        &create_test_coach(),
    )
    .unwrap();
}

/// Two players, two results (a win and a loss), two training sessions.
fn fixture() -> Fixture {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let squad_id: i64 = add_squad(&mut persistence, "Colts", "U16");
    let john: i64 = add_player(&mut persistence, "John", "Smith", Some(squad_id));
    let tom: i64 = add_player(&mut persistence, "Tom", "Adams", Some(squad_id));

    let first: i64 = add_game(&mut persistence, squad_id, "05/09/2026", Some("20 - 5"));
    let second: i64 = add_game(&mut persistence, squad_id, "12/09/2026", Some("7 - 12"));
    record(&mut persistence, john, first, true, 8);
    record(&mut persistence, john, second, true, 5);
    record(&mut persistence, tom, first, false, 0);

    for (date, john_present) in [("01/10/2026", true), ("08/10/2026", false)] {
        let training_id: i64 = training::schedule_training(
            &mut persistence,
            ScheduleTrainingRequest {
                date: Some(date.to_string()),
                squad_id: Some(squad_id),
                focus_areas: String::from("Defence"),
                coach_notes: None,
            },
            &create_test_coach(),
            TODAY,
        )
        .unwrap()
        .id;
        attend(&mut persistence, john, training_id, john_present);
        attend(&mut persistence, tom, training_id, true);
    }

    Fixture {
        persistence,
        squad_id,
        john,
        tom,
    }
}

#[test]
fn test_player_performance_report() {
    let mut f: Fixture = fixture();

    let report: Report =
        player_performance_report(&mut f.persistence, f.john, &create_test_secretary(), TODAY)
            .unwrap();

    assert_eq!(report.kind, ReportKind::PlayerPerformance);
    assert_eq!(report.title, "Player Performance: John Smith");
    assert_eq!(report.generated_on, TODAY);
    assert_eq!(report.rows.len(), 2);
    assert_eq!(
        report.rows[0],
        vec!["05/09/2026", "Rovers", "Yes", "8", "8", "8", "8", "8"]
    );
    assert_eq!(report.summary[0], "Overall skill rating: 6.50");
    assert_eq!(report.summary[1], "Game attendance: 100.0%");
    assert_eq!(report.summary[2], "Training attendance: 50.0%");
    assert_eq!(
        report.summary[3],
        "Totals over 2 games: 13 tries, 13 tackles, 13 passes, 13 kicks"
    );
}

#[test]
fn test_absent_games_do_not_count_towards_rating() {
    let mut f: Fixture = fixture();

    let report: Report =
        player_performance_report(&mut f.persistence, f.tom, &create_test_coach(), TODAY).unwrap();

    assert_eq!(report.rows.len(), 1);
    assert_eq!(report.rows[0][2], "No");
    assert_eq!(report.summary[0], "Overall skill rating: 0.00");
    assert_eq!(report.summary[1], "Game attendance: 0.0%");
    assert_eq!(report.summary[2], "Training attendance: 100.0%");
}

#[test]
fn test_player_report_requires_a_player() {
    let mut persistence = Persistence::new_in_memory().unwrap();

    assert_eq!(
        player_performance_report(&mut persistence, 3, &create_test_coach(), TODAY).unwrap_err(),
        ApiError::not_found("Player", 3)
    );
}

#[test]
fn test_squad_summary_report() {
    let mut f: Fixture = fixture();

    let report: Report =
        squad_summary_report(&mut f.persistence, f.squad_id, &create_test_coach(), TODAY).unwrap();

    assert_eq!(report.title, "Squad Summary: Colts (U16)");
    // Players are listed by last name.
    assert_eq!(
        report.rows,
        vec![
            vec!["Tom Adams", "Hooker", "0", "0", "0", "0.00", "100.0"],
            vec!["John Smith", "Hooker", "2", "13", "13", "6.50", "50.0"],
        ]
    );
    assert_eq!(report.summary[0], "Record: W1 L1 D0 from 2 results (2 games scheduled)");
    assert_eq!(report.summary[1], "Coaches: 0 of 2 required (understaffed)");
    assert_eq!(report.summary[2], "Squad training attendance: 75.0%");
}

#[test]
fn test_training_attendance_report() {
    let mut f: Fixture = fixture();

    let report: Report =
        training_attendance_report(&mut f.persistence, f.squad_id, &create_test_coach(), TODAY)
            .unwrap();

    assert_eq!(report.headers, vec!["Player", "Sessions", "Present", "Attendance %"]);
    assert_eq!(report.rows[1], vec!["John Smith", "2", "1", "50.0"]);
    assert_eq!(report.summary, vec!["Sessions held: 2", "Squad attendance rate: 75.0%"]);
}

#[test]
fn test_empty_squad_reports_zero_rates() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let squad_id: i64 = add_squad(&mut persistence, "Minis", "U8");

    let report: Report =
        training_attendance_report(&mut persistence, squad_id, &create_test_coach(), TODAY)
            .unwrap();

    assert!(report.rows.is_empty());
    assert_eq!(report.summary[1], "Squad attendance rate: 0.0%");
    assert_eq!(
        squad_summary_report(&mut persistence, 77, &create_test_coach(), TODAY).unwrap_err(),
        ApiError::not_found("Squad", 77)
    );
}

#[test]
fn test_report_csv_export() {
    let mut f: Fixture = fixture();
    let report: Report =
        training_attendance_report(&mut f.persistence, f.squad_id, &create_test_coach(), TODAY)
            .unwrap();

    let csv: String = report_to_csv(&report).unwrap();

    assert_eq!(
        csv,
        "Player,Sessions,Present,Attendance %\n\
         Tom Adams,2,2,100.0\n\
         John Smith,2,1,50.0\n"
    );
}
