use std::fmt;

/// Preference key under which the selected persona is persisted.
pub const PROFILE_STORAGE_KEY: &str = "campus.profile";

/// One of the two mutually exclusive user-facing experiences.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Persona {
    Student,
    Patient,
}

impl Persona {
    /// Literal written to durable storage for this persona.
    #[must_use]
    pub const fn as_storage_value(self) -> &'static str {
        match self {
            Self::Student => "student",
            Self::Patient => "patient",
        }
    }

    /// Parse a stored literal. Anything other than the two known literals is `None`.
    #[must_use]
    pub fn from_storage_value(raw: &str) -> Option<Self> {
        match raw {
            "student" => Some(Self::Student),
            "patient" => Some(Self::Patient),
            _ => None,
        }
    }

    /// The other persona.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::Student => Self::Patient,
            Self::Patient => Self::Student,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Student => "Student / Professional",
            Self::Patient => "Patient",
        }
    }
}

impl fmt::Display for Persona {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_storage_value())
    }
}

/// Persisted persona choice, or the absence of one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ProfileSelection {
    #[default]
    Unset,
    Selected(Persona),
}

impl ProfileSelection {
    /// Interpret the raw stored value. A missing key or an unknown literal is `Unset`.
    #[must_use]
    pub fn from_stored(raw: Option<&str>) -> Self {
        raw.and_then(Persona::from_storage_value)
            .map_or(Self::Unset, Self::Selected)
    }

    #[must_use]
    pub const fn persona(self) -> Option<Persona> {
        match self {
            Self::Unset => None,
            Self::Selected(persona) => Some(persona),
        }
    }

    #[must_use]
    pub const fn is_unset(self) -> bool {
        matches!(self, Self::Unset)
    }

    /// Swap to the other persona. `Unset` has nothing to swap and stays `Unset`.
    #[must_use]
    pub const fn swapped(self) -> Self {
        match self {
            Self::Unset => Self::Unset,
            Self::Selected(persona) => Self::Selected(persona.other()),
        }
    }
}

impl From<Persona> for ProfileSelection {
    fn from(persona: Persona) -> Self {
        Self::Selected(persona)
    }
}

/// What the root route renders.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LandingView {
    ProfilePrompt,
    CoursePlatform,
    PatientPortal,
}

/// The landing experience is a pure function of the selection.
#[must_use]
pub const fn landing_view(selection: ProfileSelection) -> LandingView {
    match selection {
        ProfileSelection::Unset => LandingView::ProfilePrompt,
        ProfileSelection::Selected(Persona::Student) => LandingView::CoursePlatform,
        ProfileSelection::Selected(Persona::Patient) => LandingView::PatientPortal,
    }
}
