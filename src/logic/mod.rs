// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Business logic: the page model and the submission guard attached to it.

pub mod page;
pub mod validator;
