pub mod create_item;
pub mod delete_item;
pub mod get_item;
pub mod list_items;
pub mod update_item;

pub const NAME_MAX_CHARS: usize = 100;

#[derive(thiserror::Error, Debug)]
pub enum ItemError {
    #[error("{0}")]
    Validation(String),
    #[error("not found")]
    NotFound,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub(crate) fn validate_name(name: &str) -> Result<(), ItemError> {
    if name.trim().is_empty() {
        return Err(ItemError::Validation(
            "The name field may not be blank.".into(),
        ));
    }
    if name.chars().count() > NAME_MAX_CHARS {
        return Err(ItemError::Validation(format!(
            "Ensure the name field has no more than {NAME_MAX_CHARS} characters."
        )));
    }
    Ok(())
}

pub(crate) fn validate_description(description: &str) -> Result<(), ItemError> {
    if description.trim().is_empty() {
        return Err(ItemError::Validation(
            "The description field may not be blank.".into(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_at_limit_is_accepted() {
        assert!(validate_name(&"x".repeat(NAME_MAX_CHARS)).is_ok());
    }

    #[test]
    fn name_over_limit_is_rejected() {
        let err = validate_name(&"x".repeat(NAME_MAX_CHARS + 1)).unwrap_err();
        assert!(matches!(err, ItemError::Validation(_)));
    }

    #[test]
    fn limit_counts_chars_not_bytes() {
        // 100 multibyte chars stay within the limit.
        assert!(validate_name(&"é".repeat(NAME_MAX_CHARS)).is_ok());
    }

    #[test]
    fn blank_fields_are_rejected() {
        assert!(matches!(
            validate_name("   "),
            Err(ItemError::Validation(_))
        ));
        assert!(matches!(
            validate_description(""),
            Err(ItemError::Validation(_))
        ));
    }
}
