use validator::{Validate, ValidationErrors};

use crate::core::error::{AppError, Result};

/// Parse a path identifier into a row id.
///
/// `entity` names the resource in the error message, e.g. "product".
pub fn parse_id(raw: &str, entity: &str) -> Result<i32> {
    raw.parse::<i32>()
        .map_err(|_| AppError::InvalidInput(format!("Invalid {} ID: '{}'", entity, raw)))
}

/// Run `validator` rules and flatten failures into a single message
pub fn validate_dto<T: Validate>(dto: &T) -> Result<()> {
    dto.validate()
        .map_err(|e| AppError::Validation(flatten_errors(&e)))
}

fn flatten_errors(errors: &ValidationErrors) -> String {
    let mut messages: Vec<String> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |err| match &err.message {
                Some(msg) => format!("{}: {}", field, msg),
                None => format!("{}: invalid value", field),
            })
        })
        .collect();
    // HashMap iteration order is unstable
    messages.sort();
    messages.join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Validate)]
    struct Sample {
        #[validate(length(min = 1, message = "must not be empty"))]
        name: String,
        #[validate(range(min = 0, message = "must not be negative"))]
        count: i32,
    }

    #[test]
    fn test_parse_id_valid() {
        assert_eq!(parse_id("1", "product").unwrap(), 1);
        assert_eq!(parse_id("42", "product").unwrap(), 42);
        assert_eq!(parse_id("0", "product").unwrap(), 0);
    }

    #[test]
    fn test_parse_id_invalid() {
        for raw in ["", "abc", "1.5", "99999999999", "1a", " 42 ", "42 ", "+ 1"] {
            match parse_id(raw, "product") {
                Err(AppError::InvalidInput(msg)) => assert!(msg.contains("product")),
                other => panic!("expected InvalidInput for {:?}, got {:?}", raw, other),
            }
        }
    }

    #[test]
    fn test_validate_dto_collects_every_field() {
        let sample = Sample {
            name: String::new(),
            count: -1,
        };

        match validate_dto(&sample) {
            Err(AppError::Validation(msg)) => {
                assert_eq!(msg, "count: must not be negative; name: must not be empty");
            }
            other => panic!("expected Validation, got {:?}", other),
        }

        let ok = Sample {
            name: "Pen".to_string(),
            count: 0,
        };
        assert!(validate_dto(&ok).is_ok());
    }
}
