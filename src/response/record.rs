//! The answer set collected by the wizard
//!
//! Every choice is a closed enum. The serde names are the literal values the
//! form endpoint stores, and the `FromStr` impls accept either that wire value
//! or an English alias so the CLI can take `--companion alone`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::RsvpError;

/// Guest roster shown as balloons on the first screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Guest {
    Arthur,
    Vinicius,
    Douglas,
    Nicolas,
    Enzo,
    Henrique,
    Maria,
    Jaum,
    Millena,
    Laiza,
}

impl Guest {
    pub const ALL: [Guest; 10] = [
        Guest::Arthur,
        Guest::Vinicius,
        Guest::Douglas,
        Guest::Nicolas,
        Guest::Enzo,
        Guest::Henrique,
        Guest::Maria,
        Guest::Jaum,
        Guest::Millena,
        Guest::Laiza,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Guest::Arthur => "Arthur",
            Guest::Vinicius => "Vinicius",
            Guest::Douglas => "Douglas",
            Guest::Nicolas => "Nicolas",
            Guest::Enzo => "Enzo",
            Guest::Henrique => "Henrique",
            Guest::Maria => "Maria",
            Guest::Jaum => "Jaum",
            Guest::Millena => "Millena",
            Guest::Laiza => "Laiza",
        }
    }
}

impl FromStr for Guest {
    type Err = RsvpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Guest::ALL
            .iter()
            .copied()
            .find(|guest| guest.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| RsvpError::InvalidChoice(format!("unknown guest '{}'", s)))
    }
}

/// Who comes along: nobody, "o homi" or "a muié"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Companion {
    #[serde(rename = "sozinho")]
    Alone,
    #[serde(rename = "homi")]
    Homi,
    #[serde(rename = "muie")]
    Muie,
}

impl Companion {
    pub const ALL: [Companion; 3] = [Companion::Alone, Companion::Homi, Companion::Muie];

    pub fn wire_value(&self) -> &'static str {
        match self {
            Companion::Alone => "sozinho",
            Companion::Homi => "homi",
            Companion::Muie => "muie",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Companion::Alone => "😢 Vou sozinho (muito mais fácil!)",
            Companion::Homi => "🐟 Homi",
            Companion::Muie => "🐠 Muié",
        }
    }
}

impl FromStr for Companion {
    type Err = RsvpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sozinho" | "alone" => Ok(Companion::Alone),
            "homi" | "person-a" => Ok(Companion::Homi),
            "muie" | "person-b" => Ok(Companion::Muie),
            other => Err(RsvpError::InvalidChoice(format!(
                "unknown companion '{}' (expected sozinho, homi or muie)",
                other
            ))),
        }
    }
}

/// Split a draft beer with the host, or bring your own drink
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Beverage {
    #[serde(rename = "rachar")]
    Shared,
    #[serde(rename = "eu_pago")]
    OwnDrink,
}

impl Beverage {
    pub const ALL: [Beverage; 2] = [Beverage::Shared, Beverage::OwnDrink];

    pub fn wire_value(&self) -> &'static str {
        match self {
            Beverage::Shared => "rachar",
            Beverage::OwnDrink => "eu_pago",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Beverage::Shared => "🍻 Vamos rachar um chopp!",
            Beverage::OwnDrink => "🥤 Vou levar minha própria bebida",
        }
    }
}

impl FromStr for Beverage {
    type Err = RsvpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rachar" | "shared" => Ok(Beverage::Shared),
            "eu_pago" | "self-supplied" | "own" => Ok(Beverage::OwnDrink),
            other => Err(RsvpError::InvalidChoice(format!(
                "unknown beverage '{}' (expected rachar or eu_pago)",
                other
            ))),
        }
    }
}

/// Barbecue restrictions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dietary {
    #[serde(rename = "normal")]
    Anything,
    #[serde(rename = "restricoes")]
    Restricted,
    #[serde(rename = "linguica")]
    SausageMandatory,
}

impl Dietary {
    pub const ALL: [Dietary; 3] = [
        Dietary::Anything,
        Dietary::Restricted,
        Dietary::SausageMandatory,
    ];

    pub fn wire_value(&self) -> &'static str {
        match self {
            Dietary::Anything => "normal",
            Dietary::Restricted => "restricoes",
            Dietary::SausageMandatory => "linguica",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Dietary::Anything => "🥩 Churrasco normal, pode tudo!",
            Dietary::Restricted => "🥗 Tenho restrições alimentares",
            Dietary::SausageMandatory => "🌭 LINGUIÇA OBRIGATÓRIA!",
        }
    }
}

impl FromStr for Dietary {
    type Err = RsvpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "normal" | "none" => Ok(Dietary::Anything),
            "restricoes" | "restricted" => Ok(Dietary::Restricted),
            "linguica" | "sausage-mandatory" | "sausage" => Ok(Dietary::SausageMandatory),
            other => Err(RsvpError::InvalidChoice(format!(
                "unknown dietary choice '{}' (expected normal, restricoes or linguica)",
                other
            ))),
        }
    }
}

/// Which field of the record a step fills
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Companion,
    Beverage,
    Dietary,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Field::Name => "name",
            Field::Companion => "companion",
            Field::Beverage => "beverage",
            Field::Dietary => "dietary",
        };
        write!(f, "{s}")
    }
}

/// A value picked on one of the four data screens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Name(Guest),
    Companion(Companion),
    Beverage(Beverage),
    Dietary(Dietary),
}

impl Selection {
    pub fn field(&self) -> Field {
        match self {
            Selection::Name(_) => Field::Name,
            Selection::Companion(_) => Field::Companion,
            Selection::Beverage(_) => Field::Beverage,
            Selection::Dietary(_) => Field::Dietary,
        }
    }
}

/// In-progress answers, one optional slot per step
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    pub name: Option<Guest>,
    pub companion: Option<Companion>,
    pub beverage: Option<Beverage>,
    pub dietary: Option<Dietary>,
}

impl Record {
    /// Write a selection into its slot. Other slots are left alone.
    pub fn set(&mut self, selection: Selection) {
        match selection {
            Selection::Name(guest) => self.name = Some(guest),
            Selection::Companion(companion) => self.companion = Some(companion),
            Selection::Beverage(beverage) => self.beverage = Some(beverage),
            Selection::Dietary(dietary) => self.dietary = Some(dietary),
        }
    }

    pub fn is_set(&self, field: Field) -> bool {
        match field {
            Field::Name => self.name.is_some(),
            Field::Companion => self.companion.is_some(),
            Field::Beverage => self.beverage.is_some(),
            Field::Dietary => self.dietary.is_some(),
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Record::default()
    }

    /// The sendable form of the record, only once every field is populated
    pub fn complete(&self) -> Option<Submission> {
        Some(Submission {
            name: self.name?,
            companion: self.companion?,
            beverage: self.beverage?,
            dietary: self.dietary?,
        })
    }
}

/// Fully populated record in the endpoint's schema
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    #[serde(rename = "nome")]
    pub name: Guest,
    #[serde(rename = "acompanhante")]
    pub companion: Companion,
    #[serde(rename = "chopp")]
    pub beverage: Beverage,
    #[serde(rename = "comida")]
    pub dietary: Dietary,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complete_requires_every_field() {
        let mut record = Record::default();
        assert!(record.complete().is_none());

        record.set(Selection::Name(Guest::Maria));
        record.set(Selection::Companion(Companion::Alone));
        record.set(Selection::Beverage(Beverage::Shared));
        assert!(record.complete().is_none());

        record.set(Selection::Dietary(Dietary::SausageMandatory));
        let submission = record.complete().unwrap();
        assert_eq!(submission.name, Guest::Maria);
        assert_eq!(submission.dietary, Dietary::SausageMandatory);
    }

    #[test]
    fn submission_uses_endpoint_schema() {
        let submission = Submission {
            name: Guest::Jaum,
            companion: Companion::Muie,
            beverage: Beverage::OwnDrink,
            dietary: Dietary::Restricted,
        };

        let json = serde_json::to_value(submission).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "nome": "Jaum",
                "acompanhante": "muie",
                "chopp": "eu_pago",
                "comida": "restricoes"
            })
        );
    }

    #[test]
    fn choices_parse_from_wire_values_and_aliases() {
        assert_eq!("sozinho".parse::<Companion>().unwrap(), Companion::Alone);
        assert_eq!("alone".parse::<Companion>().unwrap(), Companion::Alone);
        assert_eq!("EU_PAGO".parse::<Beverage>().unwrap(), Beverage::OwnDrink);
        assert_eq!("linguica".parse::<Dietary>().unwrap(), Dietary::SausageMandatory);
        assert_eq!("millena".parse::<Guest>().unwrap(), Guest::Millena);
        assert!("Zé".parse::<Guest>().is_err());
        assert!("both".parse::<Companion>().is_err());
    }
}
