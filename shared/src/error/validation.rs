//! Bridge from `validator` errors to [`AppError`]
//!
//! Flattens nested validation errors into field-path details (camelCase,
//! matching the wire format) so API consumers see exactly which field
//! failed.

use super::codes::ErrorCode;
use super::types::AppError;
use validator::{ValidationErrors, ValidationErrorsKind};

fn to_camel(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper_next = false;
    for c in field.chars() {
        if c == '_' {
            upper_next = true;
        } else if upper_next {
            out.extend(c.to_uppercase());
            upper_next = false;
        } else {
            out.push(c);
        }
    }
    out
}

fn collect(prefix: &str, errors: &ValidationErrors, out: &mut Vec<(String, String)>) {
    for (field, kind) in errors.errors() {
        let name = to_camel(field);
        let path = if prefix.is_empty() {
            name
        } else {
            format!("{}.{}", prefix, name)
        };
        match kind {
            ValidationErrorsKind::Field(field_errors) => {
                for error in field_errors {
                    let message = error
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| error.code.to_string());
                    out.push((path.clone(), message));
                }
            }
            ValidationErrorsKind::Struct(nested) => collect(&path, nested, out),
            ValidationErrorsKind::List(items) => {
                for (index, nested) in items {
                    collect(&format!("{}[{}]", path, index), nested, out);
                }
            }
        }
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let mut flattened = Vec::new();
        collect("", &errors, &mut flattened);

        let mut err = AppError::with_message(ErrorCode::ValidationFailed, "Validation failed");
        for (path, message) in flattened {
            err = err.with_detail(path, message);
        }
        err
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use validator::Validate;

    #[derive(Debug, Deserialize, Validate)]
    struct Inner {
        #[validate(length(min = 1, message = "phone is required"))]
        phone: String,
    }

    #[derive(Debug, Deserialize, Validate)]
    struct Outer {
        #[validate(nested)]
        customer_info: Inner,
    }

    #[test]
    fn test_to_camel() {
        assert_eq!(to_camel("customer_info"), "customerInfo");
        assert_eq!(to_camel("phone"), "phone");
        assert_eq!(to_camel("card_quantity"), "cardQuantity");
    }

    #[test]
    fn test_nested_field_path() {
        let outer = Outer {
            customer_info: Inner {
                phone: String::new(),
            },
        };
        let err: AppError = outer.validate().unwrap_err().into();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
        let details = err.details.unwrap();
        assert_eq!(
            details.get("customerInfo.phone").unwrap(),
            "phone is required"
        );
    }
}
