// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Profile form fields and the payload handed over on submission.

use serde::Serialize;

/// The inputs rendered on the profile form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ProfileField {
    Name,
    Bio,
    Location,
}

impl ProfileField {
    /// All fields in form order.
    pub const ALL: [ProfileField; 3] = [Self::Name, Self::Bio, Self::Location];

    /// Element id the input is registered under on the page.
    pub fn id(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Bio => "bio",
            Self::Location => "location",
        }
    }

    /// Label shown above the input.
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Bio => "Bio",
            Self::Location => "Location",
        }
    }

    /// Placeholder text for an empty input.
    pub fn hint(self) -> &'static str {
        match self {
            Self::Name => "e.g., Alice",
            Self::Bio => "A few words about yourself",
            Self::Location => "e.g., NYC",
        }
    }
}

/// Profile data sent by the default submission action.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Profile {
    pub name: String,
    pub bio: String,
    pub location: String,
}

impl Profile {
    /// Build a profile from a lookup keyed by field.
    ///
    /// Missing values become empty strings; the submission guard is what
    /// decides whether such a profile may be sent.
    pub fn from_lookup(mut lookup: impl FnMut(ProfileField) -> Option<String>) -> Self {
        Self {
            name: lookup(ProfileField::Name).unwrap_or_default(),
            bio: lookup(ProfileField::Bio).unwrap_or_default(),
            location: lookup(ProfileField::Location).unwrap_or_default(),
        }
    }
}
