use serde::Serialize;

use crate::classify::descriptor::FieldDescriptor;
use crate::page::page_model::{FieldElement, PageSnapshot};

/// Inferred semantic purpose of a field. Exactly one category per field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    FirstName,
    LastName,
    FullName,
    Email,
    Password,
    Phone,
    Url,
    Username,
    Company,
    JobTitle,
    Street,
    City,
    State,
    Zip,
    Country,
    Amount,
    Duration,
    CategoryWord,
    Description,
    Search,
    Title,
    GenericText,
    Checkbox,
    Radio,
    Date,
    DateTime,
    Time,
    Numeric,
    Select,
}

/// Ordered keyword rule table. First match wins, so order is significant and
/// must not be reshuffled: several categories share keywords ("name" also
/// occurs inside "username"), and the published order resolves those ties.
pub const KEYWORD_RULES: &[(Category, &[&str])] = &[
    (Category::Email, &["email", "e-mail", "mail"]),
    (Category::Password, &["password", "pass", "pwd"]),
    (Category::Phone, &["phone", "tel", "mobile", "cell"]),
    (Category::Url, &["website", "url", "site", "homepage"]),
    (Category::FirstName, &["firstname", "first-name", "first_name", "fname", "given"]),
    (Category::LastName, &["lastname", "last-name", "last_name", "lname", "surname", "family"]),
    (Category::FullName, &["fullname", "full-name", "name", "full_name"]),
    (Category::Title, &["title", "subject", "heading", "summary"]),
    (Category::Username, &["username", "user", "login", "account"]),
    (Category::Company, &["company", "organization", "employer", "business"]),
    (Category::JobTitle, &["job", "position", "role", "occupation"]),
    (Category::Street, &["address", "street", "address1"]),
    (Category::City, &["city", "town"]),
    (Category::State, &["state", "province", "region"]),
    (Category::Zip, &["zip", "postal", "postcode", "zipcode"]),
    (Category::Country, &["country"]),
    (Category::Amount, &["amount", "price", "cost", "budget", "fee"]),
    (Category::Duration, &["hour", "duration", "estimate", "completion"]),
    (Category::CategoryWord, &["category", "type", "kind"]),
    (
        Category::Description,
        &["description", "comment", "message", "bio", "about", "notes", "details", "content", "body"],
    ),
    (Category::Search, &["search", "query"]),
];

/// Classify one field. Never fails: falls through to `GenericText`.
///
/// Non-text controls are classified structurally by tag/type before any
/// keyword matching. Declared input types for email/password/tel/url/search
/// take precedence over keywords; after that the keyword rules run in table
/// order with first-match-wins.
pub fn classify(field: &FieldElement, descriptor: &FieldDescriptor) -> Category {
    if field.is_select() {
        return Category::Select;
    }

    let field_type = field.type_or_text();

    match field_type.as_str() {
        "checkbox" => return Category::Checkbox,
        "radio" => return Category::Radio,
        "date" => return Category::Date,
        "datetime-local" => return Category::DateTime,
        "time" => return Category::Time,
        "range" | "number" => return Category::Numeric,
        "email" => return Category::Email,
        "password" => return Category::Password,
        "tel" => return Category::Phone,
        "url" => return Category::Url,
        "search" => return Category::Search,
        _ => {}
    }

    for (category, keywords) in KEYWORD_RULES {
        // Textareas take paragraph text at the description rule's position,
        // keyword match or not.
        if *category == Category::Description && field.is_textarea() {
            return Category::Description;
        }
        if descriptor.matches_any(keywords) {
            return *category;
        }
    }

    Category::GenericText
}

/// Convenience wrapper: build the descriptor and classify in one call.
pub fn classify_field(page: &PageSnapshot, field: &FieldElement) -> Category {
    let descriptor = FieldDescriptor::extract(page, field);
    classify(field, &descriptor)
}
