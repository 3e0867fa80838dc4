//! Form records filled in by the UI.
//!
//! Each form is a statically declared record with a matching field enum, so
//! field-indexed updates are checked at compile time. Validation yields a
//! `FormErrors` keyed by the same enum.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::item::{ItemDraft, parse_price};

/// Loose email shape: something, `@`, something, `.`, something.
static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern is a valid regex"));

// ─────────────────────────────────────────────────────────────────────────────
// Errors
// ─────────────────────────────────────────────────────────────────────────────

/// Validation messages keyed by form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormErrors<F: Ord> {
    errors: BTreeMap<F, String>,
}

impl<F: Ord> Default for FormErrors<F> {
    fn default() -> Self {
        Self {
            errors: BTreeMap::new(),
        }
    }
}

impl<F: Ord + Copy> FormErrors<F> {
    /// Create an empty error set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error for a field, replacing any previous one.
    pub fn insert(&mut self, field: F, message: impl Into<String>) {
        self.errors.insert(field, message.into());
    }

    /// Drop the error for a field (the user started editing it).
    pub fn clear(&mut self, field: F) {
        self.errors.remove(&field);
    }

    /// Error message for a field, if any.
    #[must_use]
    pub fn get(&self, field: F) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Iterate over `(field, message)` pairs in field order.
    pub fn iter(&self) -> impl Iterator<Item = (F, &str)> {
        self.errors.iter().map(|(field, msg)| (*field, msg.as_str()))
    }
}

impl<F: Ord + Copy + fmt::Display> fmt::Display for FormErrors<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in self.iter() {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{field}: {message}")?;
            first = false;
        }
        Ok(())
    }
}

impl<F: Ord + Copy + fmt::Debug + fmt::Display> std::error::Error for FormErrors<F> {}

// ─────────────────────────────────────────────────────────────────────────────
// Item form
// ─────────────────────────────────────────────────────────────────────────────

/// Fields of the "add item" form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemField {
    Name,
    Price,
    Img,
}

impl fmt::Display for ItemField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Name => "name",
            Self::Price => "price",
            Self::Img => "img",
        })
    }
}

/// Input state of the "add item" form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemForm {
    pub name: String,
    pub price: String,
    pub img: String,
}

impl ItemForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a single field.
    pub fn set(&mut self, field: ItemField, value: impl Into<String>) {
        let value = value.into();
        match field {
            ItemField::Name => self.name = value,
            ItemField::Price => self.price = value,
            ItemField::Img => self.img = value,
        }
    }

    #[must_use]
    pub fn get(&self, field: ItemField) -> &str {
        match field {
            ItemField::Name => &self.name,
            ItemField::Price => &self.price,
            ItemField::Img => &self.img,
        }
    }

    /// Clear every field.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Collect all validation errors for the current input.
    #[must_use]
    pub fn errors(&self) -> FormErrors<ItemField> {
        let mut errors = FormErrors::new();

        if self.name.trim().is_empty() {
            errors.insert(ItemField::Name, "Item name is required");
        }

        if self.price.trim().is_empty() {
            errors.insert(ItemField::Price, "Price is required");
        } else if !parse_price(&self.price).is_some_and(|price| price > 0.0) {
            errors.insert(ItemField::Price, "Please enter a valid price");
        }

        if self.img.trim().is_empty() {
            errors.insert(ItemField::Img, "Please select an image");
        }

        errors
    }

    /// Validate the form and produce the draft to submit.
    pub fn validate(&self) -> Result<ItemDraft, FormErrors<ItemField>> {
        let errors = self.errors();
        if errors.is_empty() {
            Ok(ItemDraft::new(
                self.name.trim(),
                self.price.trim(),
                self.img.trim(),
            ))
        } else {
            Err(errors)
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Shipping form
// ─────────────────────────────────────────────────────────────────────────────

/// Fields of the checkout shipping form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ShippingField {
    FirstName,
    LastName,
    Email,
    Address,
    City,
    ZipCode,
    Country,
}

impl ShippingField {
    /// All fields in display order.
    pub const ALL: [Self; 7] = [
        Self::FirstName,
        Self::LastName,
        Self::Email,
        Self::Address,
        Self::City,
        Self::ZipCode,
        Self::Country,
    ];

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::FirstName => "First Name",
            Self::LastName => "Last Name",
            Self::Email => "Email",
            Self::Address => "Address",
            Self::City => "City",
            Self::ZipCode => "ZIP Code",
            Self::Country => "Country",
        }
    }
}

impl fmt::Display for ShippingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Email => "email",
            Self::Address => "address",
            Self::City => "city",
            Self::ZipCode => "zipCode",
            Self::Country => "country",
        })
    }
}

/// Shipping details collected at checkout.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingDetails {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub address: String,
    pub city: String,
    pub zip_code: String,
    pub country: String,
}

impl ShippingDetails {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a single field.
    pub fn set(&mut self, field: ShippingField, value: impl Into<String>) {
        *self.field_mut(field) = value.into();
    }

    #[must_use]
    pub fn get(&self, field: ShippingField) -> &str {
        match field {
            ShippingField::FirstName => &self.first_name,
            ShippingField::LastName => &self.last_name,
            ShippingField::Email => &self.email,
            ShippingField::Address => &self.address,
            ShippingField::City => &self.city,
            ShippingField::ZipCode => &self.zip_code,
            ShippingField::Country => &self.country,
        }
    }

    fn field_mut(&mut self, field: ShippingField) -> &mut String {
        match field {
            ShippingField::FirstName => &mut self.first_name,
            ShippingField::LastName => &mut self.last_name,
            ShippingField::Email => &mut self.email,
            ShippingField::Address => &mut self.address,
            ShippingField::City => &mut self.city,
            ShippingField::ZipCode => &mut self.zip_code,
            ShippingField::Country => &mut self.country,
        }
    }

    /// Collect all validation errors. Last name is optional.
    #[must_use]
    pub fn errors(&self) -> FormErrors<ShippingField> {
        let mut errors = FormErrors::new();

        let required = [
            (ShippingField::FirstName, "First name is required"),
            (ShippingField::Address, "Address is required"),
            (ShippingField::City, "City is required"),
            (ShippingField::ZipCode, "ZIP code is required"),
            (ShippingField::Country, "Country is required"),
        ];
        for (field, message) in required {
            if self.get(field).trim().is_empty() {
                errors.insert(field, message);
            }
        }

        if self.email.trim().is_empty() {
            errors.insert(ShippingField::Email, "Email is required");
        } else if !EMAIL_PATTERN.is_match(&self.email) {
            errors.insert(ShippingField::Email, "Please enter a valid email");
        }

        errors
    }

    pub fn validate(&self) -> Result<(), FormErrors<ShippingField>> {
        let errors = self.errors();
        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_shipping() -> ShippingDetails {
        let mut details = ShippingDetails::new();
        details.set(ShippingField::FirstName, "Ada");
        details.set(ShippingField::Email, "ada@example.com");
        details.set(ShippingField::Address, "1 Analytical Way");
        details.set(ShippingField::City, "London");
        details.set(ShippingField::ZipCode, "N1");
        details.set(ShippingField::Country, "UK");
        details
    }

    #[test]
    fn test_empty_item_form_reports_every_field() {
        let errors = ItemForm::new().errors();
        assert_eq!(errors.len(), 3);
        assert_eq!(errors.get(ItemField::Name), Some("Item name is required"));
        assert_eq!(errors.get(ItemField::Price), Some("Price is required"));
        assert_eq!(errors.get(ItemField::Img), Some("Please select an image"));
    }

    #[test]
    fn test_item_form_rejects_non_positive_or_garbage_price() {
        let mut form = ItemForm::new();
        form.set(ItemField::Name, "Rack");
        form.set(ItemField::Img, "rack.jpg");

        for bad in ["0", "-3", "abc", "12abc"] {
            form.set(ItemField::Price, bad);
            let errors = form.validate().unwrap_err();
            assert_eq!(
                errors.get(ItemField::Price),
                Some("Please enter a valid price"),
                "price {bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_item_form_produces_trimmed_draft() {
        let mut form = ItemForm::new();
        form.set(ItemField::Name, "  Coffee Table ");
        form.set(ItemField::Price, "200");
        form.set(ItemField::Img, "coffee-table.jpg");

        let draft = form.validate().unwrap();
        assert_eq!(draft, ItemDraft::new("Coffee Table", "200", "coffee-table.jpg"));
    }

    #[test]
    fn test_item_form_reset() {
        let mut form = ItemForm::new();
        form.set(ItemField::Name, "x");
        form.reset();
        assert_eq!(form, ItemForm::default());
    }

    #[test]
    fn test_form_errors_clear_single_field() {
        let mut errors = ItemForm::new().errors();
        errors.clear(ItemField::Name);
        assert!(errors.get(ItemField::Name).is_none());
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_form_errors_display() {
        let mut errors = FormErrors::new();
        errors.insert(ItemField::Price, "Price is required");
        errors.insert(ItemField::Name, "Item name is required");
        assert_eq!(
            errors.to_string(),
            "name: Item name is required; price: Price is required"
        );
    }

    #[test]
    fn test_shipping_valid() {
        assert!(filled_shipping().validate().is_ok());
    }

    #[test]
    fn test_shipping_last_name_optional() {
        let details = filled_shipping();
        assert!(details.last_name.is_empty());
        assert!(details.errors().get(ShippingField::LastName).is_none());
    }

    #[test]
    fn test_shipping_email_shape() {
        let mut details = filled_shipping();
        details.set(ShippingField::Email, "not-an-email");
        assert_eq!(
            details.errors().get(ShippingField::Email),
            Some("Please enter a valid email")
        );

        details.set(ShippingField::Email, "  ");
        assert_eq!(
            details.errors().get(ShippingField::Email),
            Some("Email is required")
        );
    }

    #[test]
    fn test_shipping_missing_fields() {
        let errors = ShippingDetails::new().validate().unwrap_err();
        assert_eq!(errors.len(), 6);
        assert_eq!(errors.get(ShippingField::ZipCode), Some("ZIP code is required"));
    }

    #[test]
    fn test_shipping_field_round_trip() {
        let mut details = ShippingDetails::new();
        for field in ShippingField::ALL {
            details.set(field, field.label());
        }
        for field in ShippingField::ALL {
            assert_eq!(details.get(field), field.label());
        }
    }

    #[test]
    fn test_shipping_wire_names() {
        let json = serde_json::to_value(filled_shipping()).unwrap();
        assert_eq!(json["firstName"], "Ada");
        assert_eq!(json["zipCode"], "N1");
    }
}
