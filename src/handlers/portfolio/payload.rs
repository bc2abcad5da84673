use serde_json::Value;

use crate::database::models::{NewStock, StockUpdate};
use crate::error::ApiError;

/// Collects problems with a request body so one response can name every bad field.
///
/// A field is "missing" when absent, `null`, a blank string or zero. It is
/// "invalid" when present with the wrong JSON type. Integer fields take only
/// integer literals, so `10.0` is invalid. Accepted strings are kept as sent.
#[derive(Debug, Default)]
struct FieldErrors {
    missing: Vec<&'static str>,
    invalid: Vec<String>,
}

impl FieldErrors {
    fn text(&mut self, body: &Value, field: &'static str) -> Option<String> {
        match body.get(field) {
            None | Some(Value::Null) => self.missing(field),
            Some(Value::String(s)) if s.trim().is_empty() => self.missing(field),
            Some(Value::String(s)) => Some(s.clone()),
            Some(_) => self.invalid(field, "a string"),
        }
    }

    fn integer(&mut self, body: &Value, field: &'static str) -> Option<i64> {
        match body.get(field) {
            None | Some(Value::Null) => self.missing(field),
            Some(Value::Number(n)) => match n.as_i64() {
                Some(0) => self.missing(field),
                Some(v) => Some(v),
                None => self.invalid(field, "an integer"),
            },
            Some(_) => self.invalid(field, "an integer"),
        }
    }

    fn number(&mut self, body: &Value, field: &'static str) -> Option<f64> {
        match body.get(field) {
            None | Some(Value::Null) => self.missing(field),
            Some(Value::Number(n)) => match n.as_f64() {
                Some(v) if v == 0.0 => self.missing(field),
                Some(v) if v.is_finite() => Some(v),
                _ => self.invalid(field, "a number"),
            },
            Some(_) => self.invalid(field, "a number"),
        }
    }

    fn missing<T>(&mut self, field: &'static str) -> Option<T> {
        self.missing.push(field);
        None
    }

    fn invalid<T>(&mut self, field: &'static str, expected: &str) -> Option<T> {
        self.invalid.push(format!("{} must be {}", field, expected));
        None
    }

    fn finish(self) -> Result<(), ApiError> {
        if !self.missing.is_empty() {
            return Err(ApiError::validation_error(format!(
                "Missing required fields: {}",
                self.missing.join(", ")
            )));
        }
        if !self.invalid.is_empty() {
            return Err(ApiError::validation_error(format!(
                "Invalid fields: {}",
                self.invalid.join(", ")
            )));
        }
        Ok(())
    }
}

/// Body of `POST /portfolio`: `{name, ticker, quantity, buyPrice}`
pub fn parse_new_stock(body: &Value) -> Result<NewStock, ApiError> {
    let mut errors = FieldErrors::default();
    let name = errors.text(body, "name");
    let ticker = errors.text(body, "ticker");
    let quantity = errors.integer(body, "quantity");
    let buy_price = errors.number(body, "buyPrice");
    errors.finish()?;

    let (Some(name), Some(ticker), Some(quantity), Some(buy_price)) =
        (name, ticker, quantity, buy_price)
    else {
        return Err(ApiError::validation_error("Missing required fields"));
    };

    Ok(NewStock {
        name,
        ticker,
        quantity,
        buy_price,
    })
}

/// Body of `PUT /portfolio`: `{id, quantity, buyPrice}`
pub fn parse_stock_update(body: &Value) -> Result<StockUpdate, ApiError> {
    let mut errors = FieldErrors::default();
    let id = errors.integer(body, "id");
    let quantity = errors.integer(body, "quantity");
    let buy_price = errors.number(body, "buyPrice");
    errors.finish()?;

    let (Some(id), Some(quantity), Some(buy_price)) = (id, quantity, buy_price) else {
        return Err(ApiError::validation_error("Missing required fields"));
    };

    Ok(StockUpdate {
        id,
        quantity,
        buy_price,
    })
}

/// Path segment of `DELETE /portfolio/{id}`
pub fn parse_stock_id(raw: &str) -> Result<i64, ApiError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(ApiError::bad_request("Stock ID is required"));
    }
    raw.parse::<i64>()
        .map_err(|_| ApiError::bad_request("Stock ID must be an integer"))
}
