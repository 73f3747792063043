//! The closed set of translation keys.
//!
//! Every key has an entry in every locale table; the tables are exhaustive
//! `match` expressions, so adding a key without translating it fails to build.

use std::fmt;
use std::str::FromStr;

macro_rules! translation_keys {
    ($($variant:ident => $name:literal,)+) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Key {
            $($variant,)+
        }

        impl Key {
            pub const ALL: &'static [Key] = &[$(Key::$variant,)+];

            /// Name used in templates and string lookups.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Key::$variant => $name,)+
                }
            }
        }

        impl FromStr for Key {
            type Err = ();

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                match value {
                    $($name => Ok(Key::$variant),)+
                    _ => Err(()),
                }
            }
        }
    };
}

translation_keys! {
    Welcome => "welcome",
    Subtitle => "subtitle",
    Email => "email",
    EmailPlaceholder => "emailPlaceholder",
    Access => "access",
    InvalidEmail => "invalidEmail",
    SelectUniversity => "selectUniversity",
    SearchUniversity => "searchUniversity",
    NoUniversityFound => "noUniversityFound",
    Enstp => "enstp",
    EnstpWelcome => "enstpWelcome",
    EnstpConnect => "enstpConnect",
    EnstpEmailPlaceholder => "enstpEmailPlaceholder",
    Login => "login",
    InvalidEnstpEmail => "invalidEnstpEmail",
    UniversityEmailPlaceholder => "universityEmailPlaceholder",
    InvalidUniversityEmail => "invalidUniversityEmail",
    Dashboard => "dashboard",
    Profile => "profile",
    Logout => "logout",
    Cp => "cp",
    Ci => "ci",
    CpDescription => "cpDescription",
    CiDescription => "ciDescription",
    SelectCycle => "selectCycle",
    SelectDepartment => "selectDepartment",
    LabTopics => "labTopics",
    ComingSoon => "comingSoon",
    EngineeringData => "engineeringData",
    ModelingData => "modelingData",
    Modules => "modules",
    CompletedLabs => "completedLabs",
    NextSession => "nextSession",
    Copyright => "copyright",
    Student => "student",
    CivilEngineering => "civilEngineering",
    PublicWorks => "publicWorks",
    Geotechnics => "geotechnics",
    Structures => "structures",
    Roads => "roads",
    Soils => "soils",
    Language => "language",
    Back => "back",
    Search => "search",
    OpenLab => "openLab",
    LabLoading => "labLoading",
    LabSlow => "labSlow",
    LabUnavailable => "labUnavailable",
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_key_names_are_unique_and_parse_back() {
        let mut seen = HashSet::new();
        for key in Key::ALL {
            assert!(seen.insert(key.as_str()), "duplicate key name {key}");
            assert_eq!(key.as_str().parse::<Key>(), Ok(*key));
        }
    }

    #[test]
    fn test_unknown_names_do_not_parse() {
        assert!("Dashboard".parse::<Key>().is_err());
        assert!("".parse::<Key>().is_err());
    }
}
