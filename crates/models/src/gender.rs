use std::{fmt, str::FromStr};

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

/// Sex of an animal. Stored and serialized as the lower-case clinic literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(10))")]
pub enum Gender {
    #[sea_orm(string_value = "мужской")]
    #[serde(rename = "мужской")]
    Male,
    #[sea_orm(string_value = "женский")]
    #[serde(rename = "женский")]
    Female,
}

impl Gender {
    pub const MALE: &'static str = "мужской";
    pub const FEMALE: &'static str = "женский";

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => Self::MALE,
            Gender::Female => Self::FEMALE,
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = ModelError;

    /// Case-insensitive match against the two literals, no trimming.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            Self::MALE => Ok(Gender::Male),
            Self::FEMALE => Ok(Gender::Female),
            _ => Err(ModelError::Validation(format!(
                "gender must be '{}' or '{}'",
                Self::MALE,
                Self::FEMALE
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("МУЖСКОЙ".parse::<Gender>().unwrap(), Gender::Male);
        assert_eq!("Женский".parse::<Gender>().unwrap(), Gender::Female);
        assert_eq!("мужской".parse::<Gender>().unwrap().to_string(), "мужской");
    }

    #[test]
    fn rejects_other_values() {
        assert!("male".parse::<Gender>().is_err());
        assert!(" женский".parse::<Gender>().is_err());
        assert!("".parse::<Gender>().is_err());
    }

    #[test]
    fn serializes_as_literal() {
        let json = serde_json::to_string(&Gender::Female).unwrap();
        assert_eq!(json, "\"женский\"");
        let back: Gender = serde_json::from_str("\"мужской\"").unwrap();
        assert_eq!(back, Gender::Male);
    }
}
