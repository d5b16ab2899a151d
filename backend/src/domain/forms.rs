//! Form validation rules.
//!
//! The stores accept any well-typed input; these checks are what the form
//! layer runs before submitting, mirroring the dashboard's form schemas.
//! Text inputs are trimmed before length checks.

use shared::{
    CreateBookingRequest, CreateCategoryRequest, CreateOrganizationRequest, FormValidation,
    FormValidationError,
};

/// Maximum length of a category or booking name
pub const MAX_NAME_LENGTH: usize = 50;
/// Maximum length of a category description
pub const MAX_DESCRIPTION_LENGTH: usize = 200;
/// Phone numbers must fall in this many characters, inclusive
pub const MIN_PHONE_LENGTH: usize = 10;
pub const MAX_PHONE_LENGTH: usize = 15;
/// Party size bounds, inclusive
pub const MIN_PARTY_SIZE: u32 = 1;
pub const MAX_PARTY_SIZE: u32 = 20;
/// Maximum length of an organization or restaurant name
pub const MAX_ORGANIZATION_NAME_LENGTH: usize = 100;
/// Maximum length of the settings contact info line
pub const MAX_CONTACT_INFO_LENGTH: usize = 50;

/// Validate category form input
pub fn validate_category_form(request: &CreateCategoryRequest) -> FormValidation {
    let mut errors = Vec::new();

    check_name(request.name.trim(), MAX_NAME_LENGTH, &mut errors);

    let description = request.description.trim();
    if description.is_empty() {
        errors.push(FormValidationError::EmptyDescription);
    } else if description.len() > MAX_DESCRIPTION_LENGTH {
        errors.push(FormValidationError::DescriptionTooLong(description.len()));
    }

    if !request.price_per_plate.is_finite() {
        errors.push(FormValidationError::InvalidPrice);
    } else if request.price_per_plate < 0.0 {
        errors.push(FormValidationError::NegativePrice);
    }

    FormValidation::from_errors(errors)
}

/// Validate booking form input
pub fn validate_booking_form(request: &CreateBookingRequest) -> FormValidation {
    let mut errors = Vec::new();

    check_name(request.name.trim(), MAX_NAME_LENGTH, &mut errors);
    check_phone(request.phone.trim(), &mut errors);

    if request.no_of_persons < MIN_PARTY_SIZE {
        errors.push(FormValidationError::PartyTooSmall);
    } else if request.no_of_persons > MAX_PARTY_SIZE {
        errors.push(FormValidationError::PartyTooLarge(request.no_of_persons));
    }

    if request.category_id.trim().is_empty() {
        errors.push(FormValidationError::MissingCategory);
    }

    FormValidation::from_errors(errors)
}

/// Validate organization form input
pub fn validate_organization_form(request: &CreateOrganizationRequest) -> FormValidation {
    let mut errors = Vec::new();

    check_name(request.name.trim(), MAX_ORGANIZATION_NAME_LENGTH, &mut errors);

    if !is_plausible_email(request.email.trim()) {
        errors.push(FormValidationError::InvalidEmail);
    }

    check_phone(request.phone.trim(), &mut errors);

    FormValidation::from_errors(errors)
}

/// Validate restaurant settings form input
pub fn validate_settings_form(name: &str, contact_info: &str) -> FormValidation {
    let mut errors = Vec::new();

    check_name(name.trim(), MAX_ORGANIZATION_NAME_LENGTH, &mut errors);

    let contact_info = contact_info.trim();
    if contact_info.is_empty() {
        errors.push(FormValidationError::EmptyContactInfo);
    } else if contact_info.len() > MAX_CONTACT_INFO_LENGTH {
        errors.push(FormValidationError::ContactInfoTooLong(contact_info.len()));
    }

    FormValidation::from_errors(errors)
}

fn check_name(name: &str, max_length: usize, errors: &mut Vec<FormValidationError>) {
    if name.is_empty() {
        errors.push(FormValidationError::EmptyName);
    } else if name.len() > max_length {
        errors.push(FormValidationError::NameTooLong(name.len()));
    }
}

fn check_phone(phone: &str, errors: &mut Vec<FormValidationError>) {
    if phone.len() < MIN_PHONE_LENGTH {
        errors.push(FormValidationError::PhoneTooShort);
    } else if phone.len() > MAX_PHONE_LENGTH {
        errors.push(FormValidationError::PhoneTooLong);
    }
}

/// Cheap structural email check: one `@`, a non-empty local part, and a
/// dotted domain. Deliverability is not this layer's problem.
fn is_plausible_email(email: &str) -> bool {
    let mut parts = email.splitn(2, '@');
    let local = parts.next().unwrap_or("");
    let domain = match parts.next() {
        Some(domain) => domain,
        None => return false,
    };

    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let mut labels = domain.split('.');
    domain.contains('.') && labels.all(|label| !label.is_empty())
}
