//! Closed enumerations used by the configuration schema.
//!
//! Each set is declared once through `closed_set!`, which generates the enum,
//! its wire strings, the `ALL` list, and a `from_str` lookup derived from that
//! list. The free `is_valid_*` predicates are thin wrappers over `from_str`, so
//! adding a value is a single line in the declaration.

use std::fmt;

/// Schema version written by documents created through this crate.
pub const SCHEMA_VERSION: i64 = 2;

macro_rules! closed_set {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $text:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
        }

        impl $name {
            /// Every member of the set, in declaration order.
            pub const ALL: &'static [Self] = &[ $( Self::$variant, )+ ];

            /// Wire representation of this value.
            pub fn as_str(self) -> &'static str {
                match self {
                    $( Self::$variant => $text, )+
                }
            }

            /// Look up a value by its exact (case-sensitive) wire string.
            #[allow(clippy::should_implement_trait)]
            pub fn from_str(s: &str) -> Option<Self> {
                Self::ALL.iter().copied().find(|v| v.as_str() == s)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.as_str().to_string()
            }
        }
    };
}

closed_set! {
    /// Package manager / platform monitored by an update entry.
    pub enum PackageEcosystem {
        Bundler => "bundler",
        Cargo => "cargo",
        Composer => "composer",
        Docker => "docker",
        Elm => "elm",
        Gitsubmodule => "gitsubmodule",
        GitHubActions => "github-actions",
        Gomod => "gomod",
        Gradle => "gradle",
        Maven => "maven",
        Mix => "mix",
        Npm => "npm",
        NuGet => "nuget",
        Pip => "pip",
        Terraform => "terraform",
    }
}

closed_set! {
    /// How often an ecosystem is checked for updates.
    pub enum ScheduleInterval {
        Daily => "daily",
        Weekly => "weekly",
        Monthly => "monthly",
    }
}

closed_set! {
    /// Day of the week for weekly schedules.
    pub enum ScheduleDay {
        Monday => "monday",
        Tuesday => "tuesday",
        Wednesday => "wednesday",
        Thursday => "thursday",
        Friday => "friday",
        Saturday => "saturday",
        Sunday => "sunday",
    }
}

/// Returns true iff `value` is one of the supported package ecosystems.
pub fn is_valid_package_ecosystem(value: &str) -> bool {
    PackageEcosystem::from_str(value).is_some()
}

/// Returns true iff `value` is `daily`, `weekly` or `monthly`.
pub fn is_valid_schedule_interval(value: &str) -> bool {
    ScheduleInterval::from_str(value).is_some()
}

/// Returns true iff `value` is a lowercase weekday name.
pub fn is_valid_schedule_interval_day(value: &str) -> bool {
    ScheduleDay::from_str(value).is_some()
}
