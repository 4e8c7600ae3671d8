use sea_orm::{DeriveActiveEnum, EnumIter};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::error::{BeerError, BeerResult};

/// Beer style
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    DeriveActiveEnum,
    EnumIter,
    ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "beer_type")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum BeerType {
    #[sea_orm(string_value = "LAGER")]
    Lager,
    #[sea_orm(string_value = "MALZBIER")]
    Malzbier,
    #[sea_orm(string_value = "WITBIER")]
    Witbier,
    #[sea_orm(string_value = "WEISS")]
    Weiss,
    #[sea_orm(string_value = "ALE")]
    Ale,
    #[sea_orm(string_value = "IPA")]
    Ipa,
    #[sea_orm(string_value = "STOUT")]
    Stout,
}

impl BeerType {
    /// Human-readable name of the style
    pub fn description(&self) -> &'static str {
        match self {
            BeerType::Lager => "Lager",
            BeerType::Malzbier => "Malzbier",
            BeerType::Witbier => "Witbier",
            BeerType::Weiss => "Weiss",
            BeerType::Ale => "Ale",
            BeerType::Ipa => "IPA",
            BeerType::Stout => "Stout",
        }
    }
}

/// A stocked beer. `0 <= quantity <= max` always holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Beer {
    pub id: Uuid,
    /// Unique across the inventory
    pub name: String,
    pub brand: String,
    /// Stock capacity
    pub max: i32,
    /// Units currently in stock
    pub quantity: i32,
    #[serde(rename = "type")]
    pub beer_type: BeerType,
}

/// Direction of a stock movement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum StockChange {
    Increment,
    Decrement,
}

impl Beer {
    pub fn new(input: NewBeer) -> Self {
        Self {
            id: Uuid::now_v7(),
            name: input.name,
            brand: input.brand,
            max: input.max,
            quantity: input.quantity,
            beer_type: input.beer_type,
        }
    }

    /// Quantity after moving `amount` units, or the bound it would break.
    pub fn quantity_after(&self, change: StockChange, amount: i32) -> BeerResult<i32> {
        match change {
            StockChange::Increment => self
                .quantity
                .checked_add(amount)
                .filter(|new_quantity| *new_quantity <= self.max)
                .ok_or(BeerError::StockExceeded {
                    id: self.id,
                    amount,
                    max: self.max,
                }),
            StockChange::Decrement => self
                .quantity
                .checked_sub(amount)
                .filter(|new_quantity| *new_quantity >= 0)
                .ok_or(BeerError::NegativeStock {
                    id: self.id,
                    amount,
                    quantity: self.quantity,
                }),
        }
    }
}

/// Request body for registering a beer.
///
/// Fields are optional so that a missing field is reported as a
/// validation error on that field.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[validate(schema(function = "validate_stock_bounds", skip_on_field_errors = true))]
pub struct CreateBeer {
    #[validate(required, length(min = 1, max = 200))]
    #[schema(example = "Brahma")]
    pub name: Option<String>,

    #[validate(required, length(min = 1, max = 200))]
    #[schema(example = "Ambev")]
    pub brand: Option<String>,

    #[validate(required, range(min = 1, max = 500))]
    #[schema(example = 50)]
    pub max: Option<i32>,

    #[validate(required, range(min = 0, max = 100))]
    #[schema(example = 10)]
    pub quantity: Option<i32>,

    #[serde(rename = "type")]
    #[validate(required)]
    pub beer_type: Option<BeerType>,
}

fn validate_stock_bounds(input: &CreateBeer) -> Result<(), ValidationError> {
    match (input.quantity, input.max) {
        (Some(quantity), Some(max)) if quantity > max => {
            let mut error = ValidationError::new("quantity_exceeds_max");
            error.message = Some("quantity must not exceed max".into());
            Err(error)
        }
        _ => Ok(()),
    }
}

/// Validated registration command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBeer {
    pub name: String,
    pub brand: String,
    pub max: i32,
    pub quantity: i32,
    pub beer_type: BeerType,
}

impl TryFrom<CreateBeer> for NewBeer {
    type Error = ValidationErrors;

    fn try_from(input: CreateBeer) -> Result<Self, Self::Error> {
        input.validate()?;

        let CreateBeer {
            name: Some(name),
            brand: Some(brand),
            max: Some(max),
            quantity: Some(quantity),
            beer_type: Some(beer_type),
        } = input
        else {
            return Err(required("beer"));
        };

        Ok(Self {
            name,
            brand,
            max,
            quantity,
            beer_type,
        })
    }
}

/// Request body for stock movements
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct QuantityUpdate {
    /// Units to add or remove
    #[validate(required, range(min = 1, max = 100))]
    #[schema(example = 10)]
    pub quantity: Option<i32>,
}

impl QuantityUpdate {
    pub fn new(quantity: i32) -> Self {
        Self {
            quantity: Some(quantity),
        }
    }

    /// Validated amount to move
    pub fn amount(&self) -> Result<i32, ValidationErrors> {
        self.validate()?;
        self.quantity.ok_or_else(|| required("quantity"))
    }
}

fn required(field: &'static str) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    errors.add(field, ValidationError::new("required"));
    errors
}
