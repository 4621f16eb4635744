//! Waitlist form state and the lead record sent to the store
//!
//! `WaitlistForm` is the editable view state: five free-text fields addressed
//! through the closed `FormField` enum, so no other key can ever appear.
//! `LeadRecord` is the row written to the `leads` table; its serialized field
//! names are the contract with the hosted store.

use serde::{Deserialize, Serialize};

/// Identifies one field of the waitlist form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    FullName,
    Email,
    Company,
    MonthlyLeads,
    Phone,
}

impl FormField {
    /// All fields, in form order
    pub const ALL: [FormField; 5] = [
        FormField::FullName,
        FormField::Email,
        FormField::Company,
        FormField::MonthlyLeads,
        FormField::Phone,
    ];

    /// The `name` attribute used by the rendered input
    pub fn as_str(&self) -> &'static str {
        match self {
            FormField::FullName => "fullName",
            FormField::Email => "email",
            FormField::Company => "company",
            FormField::MonthlyLeads => "monthlyLeads",
            FormField::Phone => "phone",
        }
    }
}

/// In-memory waitlist form values
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WaitlistForm {
    pub full_name: String,
    pub email: String,
    pub company: String,
    pub monthly_leads: String,
    pub phone: String,
}

impl WaitlistForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read the current value of one field
    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::FullName => &self.full_name,
            FormField::Email => &self.email,
            FormField::Company => &self.company,
            FormField::MonthlyLeads => &self.monthly_leads,
            FormField::Phone => &self.phone,
        }
    }

    /// Replace one field, leaving the others untouched
    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        let slot = match field {
            FormField::FullName => &mut self.full_name,
            FormField::Email => &mut self.email,
            FormField::Company => &mut self.company,
            FormField::MonthlyLeads => &mut self.monthly_leads,
            FormField::Phone => &mut self.phone,
        };
        *slot = value.into();
    }

    /// Builder-style variant of [`WaitlistForm::set_field`]
    pub fn with_field(mut self, field: FormField, value: impl Into<String>) -> Self {
        self.set_field(field, value);
        self
    }
}

/// Errors turning a form into a lead record
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LeadError {
    #[error("Monthly leads must be a whole number, got {0:?}")]
    InvalidMonthlyLeads(String),

    #[error("Monthly leads cannot be negative")]
    NegativeMonthlyLeads,
}

impl LeadError {
    /// The form field the error should be displayed under
    pub fn field(&self) -> FormField {
        match self {
            LeadError::InvalidMonthlyLeads(_) | LeadError::NegativeMonthlyLeads => {
                FormField::MonthlyLeads
            }
        }
    }
}

/// One row of the `leads` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadRecord {
    pub full_name: String,
    pub business_email: String,
    pub company_name: String,
    pub monthly_leads: i32,
}

impl TryFrom<&WaitlistForm> for LeadRecord {
    type Error = LeadError;

    /// Phone is collected in the form state but is not part of the record.
    fn try_from(form: &WaitlistForm) -> Result<Self, Self::Error> {
        Ok(Self {
            full_name: form.full_name.clone(),
            business_email: form.email.clone(),
            company_name: form.company.clone(),
            monthly_leads: parse_monthly_leads(&form.monthly_leads)?,
        })
    }
}

/// Parse the leads-per-month input into the integer column value
pub fn parse_monthly_leads(input: &str) -> Result<i32, LeadError> {
    let trimmed = input.trim();
    let value: i32 = trimmed
        .parse()
        .map_err(|_| LeadError::InvalidMonthlyLeads(trimmed.to_string()))?;

    if value < 0 {
        return Err(LeadError::NegativeMonthlyLeads);
    }

    Ok(value)
}
