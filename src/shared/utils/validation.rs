use crate::shared::errors::AppError;

pub const MAX_NAME_FRAGMENT_LENGTH: usize = 150;

pub struct Validator;

impl Validator {
    pub fn validate_pagination(page: u32, page_size: u32, max_page_size: u32) -> Result<(), AppError> {
        if page == 0 {
            return Err(AppError::invalid_parameter("page", "Page must be at least 1"));
        }
        if page_size == 0 {
            return Err(AppError::invalid_parameter(
                "page_size",
                "Page size must be positive",
            ));
        }
        if page_size > max_page_size {
            return Err(AppError::invalid_parameter(
                "page_size",
                format!("Page size cannot exceed {}", max_page_size),
            ));
        }
        Ok(())
    }

    pub fn validate_name_fragment(fragment: &str) -> Result<(), AppError> {
        if fragment.chars().count() > MAX_NAME_FRAGMENT_LENGTH {
            return Err(AppError::invalid_parameter(
                "teacher",
                format!("Name too long (max {} characters)", MAX_NAME_FRAGMENT_LENGTH),
            ));
        }
        Ok(())
    }
}
