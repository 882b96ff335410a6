// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Service layer for the Clubhouse rugby club manager.
//!
//! Each operation checks the actor's role, validates the entity with the
//! domain rules, checks that referenced records exist, and then delegates
//! to the store passed in by the caller.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

mod auth;
mod error;
pub mod handlers;
mod reports;
mod request_response;

#[cfg(test)]
mod tests;

pub use auth::{
    AuthenticatedActor, AuthenticationService, AuthorizationService, BcryptVerifier,
    CredentialVerifier, INVALID_CREDENTIALS,
};
pub use error::{
    ApiError, AuthError, persistence_failure, translate_domain_error, translate_persistence_error,
};
pub use reports::{
    player_performance_report, report_to_csv, squad_summary_report, training_attendance_report,
    write_report_csv,
};
pub use request_response::{
    ChangePasswordRequest, CoachingCheckResponse, CreateMemberRequest, CreateSquadRequest,
    CreateUserRequest, MemberDetails, MemberFilter, NewMemberKind, RecordAttendanceRequest,
    RecordGameStatsRequest, ScheduleGameRequest, ScheduleTrainingRequest, SendAnnouncementRequest,
    UpdateGameRequest, UpdateMemberRequest, UpdateSquadRequest, UpdateTrainingRequest, UserSummary,
    WriteResponse,
};
