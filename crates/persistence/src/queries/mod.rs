// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Read-only queries, one module per entity.
//!
//! Every query takes the connection explicitly and maps stored rows back
//! into domain entities. Lookups by ID return `Ok(None)` when nothing
//! matches; only database failures and unreadable rows are errors.

pub mod announcements;
pub mod games;
pub mod members;
pub mod squads;
pub mod training;
pub mod users;
