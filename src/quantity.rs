use k8s_openapi::apimachinery::pkg::api::resource::Quantity;
use thiserror::Error;

/// Suffix used for CPU quantities, expressed in thousandths of a core.
pub const CPU_MILLI_SUFFIX: &str = "m";
/// Suffix used for memory quantities.
pub const MEMORY_SUFFIX: &str = "G";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QuantityError {
    #[error("quantity is empty")]
    Empty,
    #[error("quantity `{quantity}` has an invalid numeric part")]
    InvalidNumber { quantity: String },
    #[error("quantity `{quantity}` has an unknown suffix `{suffix}`")]
    UnknownSuffix { quantity: String, suffix: String },
}

/// A quantity string split into its numeric value and the multiplier of its suffix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParsedQuantity {
    number: f64,
    multiplier: f64,
}

impl ParsedQuantity {
    /// Returns the quantity in base units (cores for cpu, bytes for memory).
    pub fn value(&self) -> f64 {
        self.number * self.multiplier
    }

    /// Returns the quantity in thousandths of base units, rounded to the nearest integer.
    pub fn to_millis(&self) -> i64 {
        (self.value() * 1000.0).round() as i64
    }

    pub fn to_bytes(&self) -> i64 {
        self.value().round() as i64
    }

    pub fn is_negative(&self) -> bool {
        self.number < 0.0
    }
}

/// Parses a Kubernetes quantity such as `250m`, `1.5`, `5G`, `128Mi` or `1e3`.
pub fn parse_quantity(quantity: &str) -> Result<ParsedQuantity, QuantityError> {
    let quantity = quantity.trim();
    if quantity.is_empty() {
        return Err(QuantityError::Empty);
    }

    let number_end = quantity
        .char_indices()
        .find(|(idx, c)| !(c.is_ascii_digit() || *c == '.' || (*idx == 0 && (*c == '+' || *c == '-'))))
        .map(|(idx, _)| idx)
        .unwrap_or(quantity.len());
    let (number, suffix) = quantity.split_at(number_end);

    if !number.chars().any(|c| c.is_ascii_digit()) || number.matches('.').count() > 1 {
        return Err(QuantityError::InvalidNumber {
            quantity: quantity.to_string(),
        });
    }
    let number = number.parse::<f64>().map_err(|_| QuantityError::InvalidNumber {
        quantity: quantity.to_string(),
    })?;

    let multiplier = suffix_multiplier(suffix).ok_or_else(|| QuantityError::UnknownSuffix {
        quantity: quantity.to_string(),
        suffix: suffix.to_string(),
    })?;

    Ok(ParsedQuantity { number, multiplier })
}

fn suffix_multiplier(suffix: &str) -> Option<f64> {
    let multiplier = match suffix {
        "" => 1.0,
        "n" => 1e-9,
        "u" => 1e-6,
        "m" => 1e-3,
        "k" => 1e3,
        "M" => 1e6,
        "G" => 1e9,
        "T" => 1e12,
        "P" => 1e15,
        "E" => 1e18,
        "Ki" => 1024f64,
        "Mi" => 1024f64.powi(2),
        "Gi" => 1024f64.powi(3),
        "Ti" => 1024f64.powi(4),
        "Pi" => 1024f64.powi(5),
        "Ei" => 1024f64.powi(6),
        _ => return decimal_exponent(suffix),
    };

    Some(multiplier)
}

// `e3`, `E-2`: decimal exponent notation
fn decimal_exponent(suffix: &str) -> Option<f64> {
    let exponent = suffix.strip_prefix('e').or_else(|| suffix.strip_prefix('E'))?;
    let digits = exponent.strip_prefix(['+', '-']).unwrap_or(exponent);
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }

    exponent.parse::<i32>().ok().map(|e| 10f64.powi(e))
}

/// Validates `quantity` and wraps it into a [`Quantity`].
///
/// Panics if `quantity` is malformed, only use it with values known to be valid.
pub fn must_parse(quantity: &str) -> Quantity {
    if let Err(err) = parse_quantity(quantity) {
        panic!("cannot parse quantity `{quantity}`: {err}");
    }

    Quantity(quantity.to_string())
}

pub fn cpu_quantity(millis: u64) -> Quantity {
    must_parse(&format!("{millis}{CPU_MILLI_SUFFIX}"))
}

pub fn memory_quantity(units: u64) -> Quantity {
    must_parse(&format!("{units}{MEMORY_SUFFIX}"))
}
