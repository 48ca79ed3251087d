use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::PriceError;

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }
    };
}

id_newtype!(CategoryId);
id_newtype!(ShopId);
id_newtype!(OfferId);

/// Screen mode presented to the user. A projection of controller state, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum View {
    #[default]
    Home,
    CategoryList,
    ShopDetail,
    EditPanel,
}

impl View {
    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::CategoryList => "category_list",
            Self::ShopDetail => "shop_detail",
            Self::EditPanel => "edit_panel",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub icon: String,
}

/// Image source usable without a further fetch when it holds a data URI.
///
/// Seeded records may still carry plain URLs; anything produced by the ingestion
/// pipeline is `data:<mime>;base64,<payload>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmbeddedImage(String);

impl EmbeddedImage {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn data_uri(mime_type: &str, base64_payload: &str) -> Self {
        Self(format!("data:{mime_type};base64,{base64_payload}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_data_uri(&self) -> bool {
        self.0.starts_with("data:")
    }

    pub fn mime_type(&self) -> Option<&str> {
        let rest = self.0.strip_prefix("data:")?;
        let (header, _) = rest.split_once(',')?;
        let mime = header.split(';').next().unwrap_or_default();
        (!mime.is_empty()).then_some(mime)
    }
}

impl fmt::Display for EmbeddedImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_data_uri() {
            write!(
                f,
                "<embedded {} image, {} chars>",
                self.mime_type().unwrap_or("unknown"),
                self.0.len()
            )
        } else {
            f.write_str(&self.0)
        }
    }
}

/// Non-negative, currency-agnostic amount.
///
/// Only constructible through [`Price::new`] or [`Price::parse`], so a stored offer
/// price is always a representable non-negative number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn new(amount: Decimal) -> Result<Self, PriceError> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(PriceError::Negative(amount.to_string()));
        }
        Ok(Self(amount.normalize()))
    }

    pub fn from_units(units: u64) -> Self {
        Self(Decimal::from(units))
    }

    /// Parses user-entered text. Surrounding whitespace is ignored.
    pub fn parse(text: &str) -> Result<Self, PriceError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(PriceError::Empty);
        }
        let not_numeric = || PriceError::NotNumeric(trimmed.to_string());
        if !is_plain_decimal(trimmed) {
            return Err(not_numeric());
        }
        let amount = Decimal::from_str_exact(trimmed).map_err(|_| not_numeric())?;
        Self::new(amount)
    }

    pub fn amount(&self) -> Decimal {
        self.0
    }

    /// es-AR grouping: `.` for thousands, `,` for decimals.
    pub fn localized(&self) -> String {
        let raw = self.0.normalize().to_string();
        let (int_part, frac_part) = match raw.split_once('.') {
            Some((int_part, frac_part)) => (int_part, Some(frac_part)),
            None => (raw.as_str(), None),
        };

        let digits: Vec<char> = int_part.chars().collect();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (index, digit) in digits.iter().enumerate() {
            if index > 0 && (digits.len() - index) % 3 == 0 {
                grouped.push('.');
            }
            grouped.push(*digit);
        }

        match frac_part {
            Some(frac) => format!("{grouped},{frac}"),
            None => grouped,
        }
    }
}

/// Optional leading `-`, ASCII digits, at most one `.` with digits on at least one side.
fn is_plain_decimal(text: &str) -> bool {
    let unsigned = text.strip_prefix('-').unwrap_or(text);
    let (int_part, frac_part) = unsigned.split_once('.').unwrap_or((unsigned, ""));
    let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
    (!int_part.is_empty() || !frac_part.is_empty()) && all_digits(int_part) && all_digits(frac_part)
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "$ {}", self.localized())
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let amount = <Decimal as Deserialize>::deserialize(deserializer)?;
        Price::new(amount).map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Offer {
    pub id: OfferId,
    pub name: String,
    pub price: Price,
    pub image: EmbeddedImage,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shop {
    pub id: ShopId,
    pub name: String,
    pub category: CategoryId,
    pub address: String,
    pub specialty: String,
    pub rating: f32,
    pub banner_image: EmbeddedImage,
    pub offers: Vec<Offer>,
    pub map_url: Url,
}

impl Shop {
    pub fn offer(&self, offer_id: &OfferId) -> Option<&Offer> {
        self.offers.iter().find(|offer| &offer.id == offer_id)
    }

    pub fn offer_mut(&mut self, offer_id: &OfferId) -> Option<&mut Offer> {
        self.offers.iter_mut().find(|offer| &offer.id == offer_id)
    }
}

#[cfg(test)]
#[path = "tests/domain_tests.rs"]
mod tests;
