use serde::{Deserialize, Serialize};

/// Fuel type of the vehicle being estimated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FuelType {
    #[default]
    Petrol,
    Diesel,
    Lpg,
}

impl FuelType {
    /// Every fuel type, in the order surfaces should offer them.
    pub const ALL: [FuelType; 3] = [FuelType::Petrol, FuelType::Diesel, FuelType::Lpg];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Petrol => "Petrol",
            Self::Diesel => "Diesel",
            Self::Lpg => "LPG",
        }
    }

    /// Case-insensitive parse of a display name.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "petrol" => Some(Self::Petrol),
            "diesel" => Some(Self::Diesel),
            "lpg" => Some(Self::Lpg),
            _ => None,
        }
    }
}

impl std::fmt::Display for FuelType {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
