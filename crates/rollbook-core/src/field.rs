//! Validated scalar field types.
//!
//! Each type owns exactly one format rule and a fixed constraint message. A
//! value that exists has passed its rule; there is no way to build one from
//! an unchecked string.

use std::{fmt, str::FromStr};

use once_cell::sync::Lazy;
use regex::Regex;

use crate::{Error, Result};

// ─── Field kinds ─────────────────────────────────────────────────────────────

/// Names the field a validation error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum FieldKind {
  Name,
  Phone,
  Email,
  Address,
  Tag,
  EmergencyContact,
}

// ─── Patterns ────────────────────────────────────────────────────────────────

static NAME_RE: Lazy<Regex> =
  Lazy::new(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9 ]*$").expect("name regex"));

static PHONE_RE: Lazy<Regex> =
  Lazy::new(|| Regex::new(r"^\+?[0-9]{8,}$").expect("phone regex"));

// local-part: alphanumeric runs joined by single `+_.-` separators.
// domain: dot-separated labels, hyphens only between alphanumerics, last
// label at least two characters.
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
  Regex::new(concat!(
    r"^[A-Za-z0-9]+(?:[+_.-][A-Za-z0-9]+)*",
    r"@(?:[A-Za-z0-9]+(?:-[A-Za-z0-9]+)*\.)*",
    r"(?:[A-Za-z0-9]{2,}|[A-Za-z0-9]+(?:-[A-Za-z0-9]+)+)$",
  ))
  .expect("email regex")
});

static ADDRESS_RE: Lazy<Regex> =
  Lazy::new(|| Regex::new(r"^\S.*$").expect("address regex"));

static TAG_RE: Lazy<Regex> =
  Lazy::new(|| Regex::new(r"^[A-Za-z0-9]+$").expect("tag regex"));

// ─── Validated string newtypes ───────────────────────────────────────────────

macro_rules! validated_string {
  (
    $(#[$meta:meta])*
    $ty:ident, $kind:expr, $re:ident, $message:expr
  ) => {
    $(#[$meta])*
    #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
    pub struct $ty(String);

    impl $ty {
      pub const MESSAGE_CONSTRAINTS: &'static str = $message;

      /// Whether `raw` satisfies this type's format rule.
      pub fn is_valid(raw: &str) -> bool { $re.is_match(raw) }

      /// Validate `raw` and wrap it.
      pub fn parse(raw: impl Into<String>) -> Result<Self> {
        let raw = raw.into();
        if Self::is_valid(&raw) {
          Ok(Self(raw))
        } else {
          Err(Error::Format {
            field:   $kind,
            message: Self::MESSAGE_CONSTRAINTS,
          })
        }
      }

      pub fn as_str(&self) -> &str { &self.0 }

      pub fn into_inner(self) -> String { self.0 }
    }

    impl fmt::Display for $ty {
      fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
      }
    }

    impl FromStr for $ty {
      type Err = Error;

      fn from_str(s: &str) -> Result<Self> { Self::parse(s) }
    }

    impl AsRef<str> for $ty {
      fn as_ref(&self) -> &str { &self.0 }
    }
  };
}

validated_string!(
  /// A person's display name.
  Name,
  FieldKind::Name,
  NAME_RE,
  "Names should only contain alphanumeric characters and spaces, and it \
   should not be blank"
);

validated_string!(
  /// A telephone number, digits only with an optional leading `+`.
  Phone,
  FieldKind::Phone,
  PHONE_RE,
  "Phone numbers should only contain numbers, optionally prefixed by '+', \
   and it should be at least 8 digits long"
);

validated_string!(
  Email,
  FieldKind::Email,
  EMAIL_RE,
  "Emails should be of the format local-part@domain and adhere to the \
   following constraints:\n\
   1. The local-part should only contain alphanumeric characters and these \
   special characters, excluding the parentheses, (+_.-). The local-part may \
   not start or end with any special characters.\n\
   2. This is followed by a '@' and then a domain name. The domain name is \
   made up of domain labels separated by periods.\n\
   The domain name must:\n    \
   - end with a domain label at least 2 characters long\n    \
   - have each domain label start and end with alphanumeric characters\n    \
   - have each domain label consist of alphanumeric characters, separated \
   only by hyphens, if any."
);

validated_string!(
  /// A free-form postal address; anything goes except a blank start.
  Address,
  FieldKind::Address,
  ADDRESS_RE,
  "Addresses can take any values, and it should not be blank"
);

validated_string!(
  /// A short alphanumeric label. Records hold tags as a set.
  Tag,
  FieldKind::Tag,
  TAG_RE,
  "Tags names should be alphanumeric"
);
