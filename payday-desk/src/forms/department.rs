//! Department form controller

use payday_client::HttpClient;
use shared::models::DepartmentPayload;

use super::{FormError, check, require};
use crate::core::{DeskContext, DeskError};

/// Department create form (the backend exposes no update path)
#[derive(Debug, Clone, Default)]
pub struct DepartmentForm {
    pub code: String,
    pub name: String,
    pub description: String,
}

impl DepartmentForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn to_payload(&self) -> Result<DepartmentPayload, FormError> {
        let payload = DepartmentPayload {
            code: require("code", &self.code)?,
            name: require("name", &self.name)?,
            description: match self.description.trim() {
                "" => None,
                d => Some(d.to_string()),
            },
        };
        check(&payload)?;
        Ok(payload)
    }

    pub async fn submit<C: HttpClient>(
        &mut self,
        ctx: &mut DeskContext<C>,
    ) -> Result<(), DeskError> {
        let payload = self.to_payload()?;
        match ctx.client().create_department(&payload).await {
            Ok(_) => {
                ctx.notices.success("Department created successfully!");
                self.reset();
                ctx.load_departments().await?;
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
