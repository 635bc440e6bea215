//! Product editor form state.
//!
//! DESIGN
//! ======
//! The form is a typed record rather than an open JSON map. Every edit goes
//! through [`ProductForm::update`], which merges one field and leaves the rest
//! untouched; nested groups (`dimensions`, `warranty`) merge partial patches so
//! sibling fields survive. Raw text from numeric inputs never fails: it is
//! parsed with a per-field fallback and clamped to non-negative values.
//!
//! Fields the editor does not know about are kept in `extra` so a save sends
//! back the whole record the backend handed out.

#[cfg(test)]
#[path = "product_form_test.rs"]
mod product_form_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Upper bound accepted for `discount_percentage`.
pub const DISCOUNT_MAX: f64 = 100.0;

/// Fallback for `low_stock_threshold` when its input does not parse.
pub const LOW_STOCK_FALLBACK: i64 = 10;

/// Fallback for the warranty period (months) when its input does not parse.
pub const WARRANTY_PERIOD_FALLBACK: i64 = 12;

/// Fallback for `max_order_quantity` when its input does not parse.
pub const MAX_ORDER_FALLBACK: i64 = 1;

/// Package dimensions in centimetres.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    #[serde(default, deserialize_with = "deserialize_decimal")]
    pub length: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_decimal")]
    pub width: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_decimal")]
    pub height: Option<f64>,
}

/// Partial update for [`Dimensions`]; `None` leaves a side untouched,
/// `Some(None)` clears it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DimensionsPatch {
    pub length: Option<Option<f64>>,
    pub width: Option<Option<f64>>,
    pub height: Option<Option<f64>>,
}

/// Who backs the warranty.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WarrantyKind {
    #[default]
    #[serde(rename = "none")]
    NoWarranty,
    Seller,
    Manufacturer,
    Extended,
}

impl WarrantyKind {
    pub const ALL: [Self; 4] = [Self::NoWarranty, Self::Seller, Self::Manufacturer, Self::Extended];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::NoWarranty => "none",
            Self::Seller => "seller",
            Self::Manufacturer => "manufacturer",
            Self::Extended => "extended",
        }
    }

    /// Parse a `<select>` value; unknown values map to no warranty.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == raw)
            .unwrap_or_default()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Warranty {
    pub period_months: Option<i64>,
    #[serde(default)]
    pub kind: WarrantyKind,
}

/// Partial update for [`Warranty`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WarrantyPatch {
    pub period_months: Option<Option<i64>>,
    pub kind: Option<WarrantyKind>,
}

/// Physical condition of the stock being sold.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductCondition {
    #[default]
    New,
    Used,
    Refurbished,
}

impl ProductCondition {
    pub const ALL: [Self; 3] = [Self::New, Self::Used, Self::Refurbished];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Used => "used",
            Self::Refurbished => "refurbished",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|condition| condition.as_str() == raw)
            .unwrap_or_default()
    }
}

/// The editable product record.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductForm {
    #[serde(default)]
    pub title: String,

    // Pricing
    #[serde(default, deserialize_with = "deserialize_decimal")]
    pub price: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_decimal")]
    pub compare_price: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_decimal")]
    pub cost_price: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_decimal")]
    pub discount_percentage: Option<f64>,

    // Inventory
    #[serde(default)]
    pub sku: Option<String>,
    #[serde(default)]
    pub stock_quantity: Option<i64>,
    #[serde(default)]
    pub low_stock_threshold: Option<i64>,
    #[serde(default)]
    pub max_order_quantity: Option<i64>,
    #[serde(default)]
    pub track_stock: bool,
    #[serde(default)]
    pub in_stock: bool,

    // Shipping
    #[serde(default, deserialize_with = "deserialize_decimal")]
    pub weight: Option<f64>,
    #[serde(default)]
    pub dimensions: Dimensions,
    #[serde(default)]
    pub requires_shipping: bool,

    // Warranty
    #[serde(default)]
    pub warranty: Warranty,
    #[serde(default)]
    pub condition: ProductCondition,

    // Merchandising
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub bestseller: bool,

    /// Backend fields the editor does not touch, echoed back on save.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Addressable fields of [`ProductForm`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProductField {
    Price,
    ComparePrice,
    CostPrice,
    DiscountPercentage,
    Sku,
    StockQuantity,
    LowStockThreshold,
    MaxOrderQuantity,
    TrackStock,
    InStock,
    Weight,
    Length,
    Width,
    Height,
    RequiresShipping,
    WarrantyPeriod,
    WarrantyKind,
    Condition,
    Featured,
    Bestseller,
}

/// How a numeric field parses its raw input.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NumericInput {
    Decimal { fallback: f64 },
    Integer { fallback: i64 },
}

impl ProductField {
    /// Parsing rule for numeric fields, `None` for text, flags and enums.
    #[must_use]
    pub fn numeric_input(self) -> Option<NumericInput> {
        match self {
            Self::Price
            | Self::ComparePrice
            | Self::CostPrice
            | Self::DiscountPercentage
            | Self::Weight
            | Self::Length
            | Self::Width
            | Self::Height => Some(NumericInput::Decimal { fallback: 0.0 }),
            Self::StockQuantity => Some(NumericInput::Integer { fallback: 0 }),
            Self::LowStockThreshold => Some(NumericInput::Integer { fallback: LOW_STOCK_FALLBACK }),
            Self::MaxOrderQuantity => Some(NumericInput::Integer { fallback: MAX_ORDER_FALLBACK }),
            Self::WarrantyPeriod => Some(NumericInput::Integer { fallback: WARRANTY_PERIOD_FALLBACK }),
            Self::Sku
            | Self::TrackStock
            | Self::InStock
            | Self::RequiresShipping
            | Self::WarrantyKind
            | Self::Condition
            | Self::Featured
            | Self::Bestseller => None,
        }
    }
}

/// A value destined for one [`ProductField`].
#[derive(Clone, Debug, PartialEq)]
pub enum FieldValue {
    Decimal(Option<f64>),
    Integer(Option<i64>),
    Text(Option<String>),
    Flag(bool),
    Warranty(WarrantyKind),
    Condition(ProductCondition),
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FormError {
    #[error("field {field:?} does not accept {value:?}")]
    TypeMismatch { field: ProductField, value: FieldValue },
}

impl ProductForm {
    /// Merge one field into the record, leaving every other field untouched.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::TypeMismatch`] when `value` has the wrong shape for
    /// `field`; the record is not modified in that case.
    pub fn update(&mut self, field: ProductField, value: FieldValue) -> Result<(), FormError> {
        use FieldValue as V;
        use ProductField as F;

        match (field, value) {
            (F::Price, V::Decimal(v)) => self.price = v,
            (F::ComparePrice, V::Decimal(v)) => self.compare_price = v,
            (F::CostPrice, V::Decimal(v)) => self.cost_price = v,
            (F::DiscountPercentage, V::Decimal(v)) => self.discount_percentage = v,
            (F::Weight, V::Decimal(v)) => self.weight = v,
            (F::Length, V::Decimal(v)) => self.merge_dimensions(DimensionsPatch { length: Some(v), ..Default::default() }),
            (F::Width, V::Decimal(v)) => self.merge_dimensions(DimensionsPatch { width: Some(v), ..Default::default() }),
            (F::Height, V::Decimal(v)) => self.merge_dimensions(DimensionsPatch { height: Some(v), ..Default::default() }),
            (F::StockQuantity, V::Integer(v)) => self.stock_quantity = v,
            (F::LowStockThreshold, V::Integer(v)) => self.low_stock_threshold = v,
            (F::MaxOrderQuantity, V::Integer(v)) => self.max_order_quantity = v,
            (F::WarrantyPeriod, V::Integer(v)) => {
                self.merge_warranty(WarrantyPatch { period_months: Some(v), ..Default::default() });
            }
            (F::WarrantyKind, V::Warranty(kind)) => {
                self.merge_warranty(WarrantyPatch { kind: Some(kind), ..Default::default() });
            }
            (F::Condition, V::Condition(condition)) => self.condition = condition,
            (F::Sku, V::Text(v)) => self.sku = v.filter(|s| !s.trim().is_empty()),
            (F::TrackStock, V::Flag(v)) => self.track_stock = v,
            (F::InStock, V::Flag(v)) => self.in_stock = v,
            (F::RequiresShipping, V::Flag(v)) => self.requires_shipping = v,
            (F::Featured, V::Flag(v)) => self.featured = v,
            (F::Bestseller, V::Flag(v)) => self.bestseller = v,
            (field, value) => return Err(FormError::TypeMismatch { field, value }),
        }
        Ok(())
    }

    /// Parse raw input text for a numeric field and merge it.
    ///
    /// Blank input clears the field. Unparseable input takes the field's
    /// fallback. Results are clamped to be non-negative.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::TypeMismatch`] if `field` takes neither numbers
    /// nor text.
    pub fn apply_input(&mut self, field: ProductField, raw: &str) -> Result<(), FormError> {
        let blank = raw.trim().is_empty();
        let value = match field.numeric_input() {
            Some(NumericInput::Decimal { fallback }) => {
                let parsed = (!blank).then(|| parse_decimal_input(raw, fallback));
                if field == ProductField::DiscountPercentage {
                    FieldValue::Decimal(parsed.map(|v| v.min(DISCOUNT_MAX)))
                } else {
                    FieldValue::Decimal(parsed)
                }
            }
            Some(NumericInput::Integer { fallback }) => {
                FieldValue::Integer((!blank).then(|| parse_integer_input(raw, fallback)))
            }
            None => FieldValue::Text((!blank).then(|| raw.trim().to_owned())),
        };
        self.update(field, value)
    }

    pub fn merge_dimensions(&mut self, patch: DimensionsPatch) {
        if let Some(length) = patch.length {
            self.dimensions.length = length;
        }
        if let Some(width) = patch.width {
            self.dimensions.width = width;
        }
        if let Some(height) = patch.height {
            self.dimensions.height = height;
        }
    }

    pub fn merge_warranty(&mut self, patch: WarrantyPatch) {
        if let Some(period) = patch.period_months {
            self.warranty.period_months = period;
        }
        if let Some(kind) = patch.kind {
            self.warranty.kind = kind;
        }
    }

    /// Current value of a numeric or text field formatted for an `<input>`.
    /// Unset values render as an empty string.
    #[must_use]
    pub fn input_value(&self, field: ProductField) -> String {
        use ProductField as F;

        let decimal = |v: Option<f64>| v.map(format_decimal).unwrap_or_default();
        let integer = |v: Option<i64>| v.map(|n| n.to_string()).unwrap_or_default();
        match field {
            F::Price => decimal(self.price),
            F::ComparePrice => decimal(self.compare_price),
            F::CostPrice => decimal(self.cost_price),
            F::DiscountPercentage => decimal(self.discount_percentage),
            F::Weight => decimal(self.weight),
            F::Length => decimal(self.dimensions.length),
            F::Width => decimal(self.dimensions.width),
            F::Height => decimal(self.dimensions.height),
            F::StockQuantity => integer(self.stock_quantity),
            F::LowStockThreshold => integer(self.low_stock_threshold),
            F::MaxOrderQuantity => integer(self.max_order_quantity),
            F::WarrantyPeriod => integer(self.warranty.period_months),
            F::Sku => self.sku.clone().unwrap_or_default(),
            F::WarrantyKind => self.warranty.kind.as_str().to_owned(),
            F::Condition => self.condition.as_str().to_owned(),
            F::TrackStock => self.track_stock.to_string(),
            F::InStock => self.in_stock.to_string(),
            F::RequiresShipping => self.requires_shipping.to_string(),
            F::Featured => self.featured.to_string(),
            F::Bestseller => self.bestseller.to_string(),
        }
    }

    /// Current value of a boolean flag field; `false` for non-flag fields.
    #[must_use]
    pub fn flag(&self, field: ProductField) -> bool {
        match field {
            ProductField::TrackStock => self.track_stock,
            ProductField::InStock => self.in_stock,
            ProductField::RequiresShipping => self.requires_shipping,
            ProductField::Featured => self.featured,
            ProductField::Bestseller => self.bestseller,
            _ => false,
        }
    }

    /// Copy of the record with every numeric field coerced to a finite,
    /// non-negative number. Unset fields stay unset.
    #[must_use]
    pub fn normalized(&self) -> Self {
        let decimal = |v: Option<f64>| v.map(|n| if n.is_finite() { n.max(0.0) } else { 0.0 });
        let integer = |v: Option<i64>| v.map(|n| n.max(0));

        let mut out = self.clone();
        out.price = decimal(self.price);
        out.compare_price = decimal(self.compare_price);
        out.cost_price = decimal(self.cost_price);
        out.discount_percentage = decimal(self.discount_percentage).map(|n| n.min(DISCOUNT_MAX));
        out.weight = decimal(self.weight);
        out.dimensions = Dimensions {
            length: decimal(self.dimensions.length),
            width: decimal(self.dimensions.width),
            height: decimal(self.dimensions.height),
        };
        out.stock_quantity = integer(self.stock_quantity);
        out.low_stock_threshold = integer(self.low_stock_threshold);
        out.max_order_quantity = integer(self.max_order_quantity);
        out.warranty.period_months = integer(self.warranty.period_months);
        out
    }
}

/// Parse a decimal input, substituting `fallback` for anything that is not a
/// finite number. Negative values clamp to zero.
#[must_use]
pub fn parse_decimal_input(raw: &str, fallback: f64) -> f64 {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(fallback)
        .max(0.0)
}

/// Parse an integer input. Decimal text truncates toward zero; anything else
/// takes `fallback`. Negative values clamp to zero.
#[must_use]
pub fn parse_integer_input(raw: &str, fallback: i64) -> i64 {
    let trimmed = raw.trim();
    #[allow(clippy::cast_possible_truncation)]
    let parsed = trimmed.parse::<i64>().ok().or_else(|| {
        trimmed
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite() && v.abs() < 9.0e15)
            .map(|v| v.trunc() as i64)
    });
    parsed.unwrap_or(fallback).max(0)
}

/// Accept a JSON number, a numeric string (decimal columns are often sent as
/// `"450000.00"`), an empty string or `null`.
fn deserialize_decimal<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<serde_json::Value>::deserialize(deserializer)? {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(serde_json::Value::Number(n)) => Ok(n.as_f64()),
        Some(serde_json::Value::String(s)) if s.trim().is_empty() => Ok(None),
        Some(serde_json::Value::String(s)) => s.trim().parse::<f64>().map(Some).map_err(D::Error::custom),
        Some(other) => Err(D::Error::custom(format!("expected decimal, got {other}"))),
    }
}

/// Render a decimal without a trailing `.0` for whole numbers.
#[must_use]
pub fn format_decimal(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1.0e15 {
        format!("{value:.0}")
    } else {
        value.to_string()
    }
}
