// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! State-changing operations, one module per entity.
//!
//! Inserts return the ID assigned by the store. Updates and deletes return
//! `false` when the target row does not exist. Writes that touch more than
//! one table run inside a single transaction.

pub mod announcements;
pub mod games;
pub mod members;
pub mod squads;
pub mod training;
pub mod users;
