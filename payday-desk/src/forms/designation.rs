//! Designation form controller

use payday_client::HttpClient;
use shared::models::DesignationPayload;

use super::{FormError, check, parse_optional_money, require};
use crate::core::{DeskContext, DeskError};

/// Designation create form (the backend exposes no update path)
#[derive(Debug, Clone, Default)]
pub struct DesignationForm {
    pub code: String,
    pub title: String,
    pub description: String,
    /// Salary-range bounds; blank means unspecified
    pub min_salary: String,
    pub max_salary: String,
}

impl DesignationForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn to_payload(&self) -> Result<DesignationPayload, FormError> {
        let payload = DesignationPayload {
            code: require("code", &self.code)?,
            title: require("title", &self.title)?,
            description: match self.description.trim() {
                "" => None,
                d => Some(d.to_string()),
            },
            min_salary: parse_optional_money("min salary", &self.min_salary)?,
            max_salary: parse_optional_money("max salary", &self.max_salary)?,
        };
        check(&payload)?;
        Ok(payload)
    }

    pub async fn submit<C: HttpClient>(
        &mut self,
        ctx: &mut DeskContext<C>,
    ) -> Result<(), DeskError> {
        let payload = self.to_payload()?;
        match ctx.client().create_designation(&payload).await {
            Ok(_) => {
                ctx.notices.success("Designation created successfully!");
                self.reset();
                ctx.load_designations().await?;
                ctx.load_dashboard().await?;
                Ok(())
            }
            Err(e) => {
                ctx.report(&e);
                Err(e.into())
            }
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn filled_form() -> DesignationForm {
        DesignationForm {
            code: "SE2".into(),
            title: "Software Engineer II".into(),
            description: String::new(),
            min_salary: "60000".into(),
            max_salary: "".into(),
        }
    }

    #[test]
    fn blank_bounds_stay_unset() {
        let payload = filled_form().to_payload().unwrap();
        assert_eq!(payload.min_salary, Some(Decimal::from(60000)));
        assert_eq!(payload.max_salary, None);
    }

    #[test]
    fn garbage_bound_is_a_number_error() {
        let mut form = filled_form();
        form.max_salary = "high".into();
        assert_eq!(
            form.to_payload().unwrap_err(),
            FormError::InvalidNumber { field: "max salary" }
        );
    }

    #[test]
    fn short_title_fails_payload_checks() {
        let mut form = filled_form();
        form.title = "X".into();
        let err = form.to_payload().unwrap_err();
        assert_eq!(err.field(), "title");
    }
}
