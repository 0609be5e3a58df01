use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::classify::classifier::Category;
use crate::page::page_model::FieldElement;

const FIRST_NAMES: &[&str] = &[
    "John", "Jane", "Michael", "Sarah", "David", "Emma", "James", "Emily", "Robert", "Lisa",
    "William", "Olivia",
];

const LAST_NAMES: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis", "Rodriguez",
    "Martinez", "Wilson", "Anderson",
];

const COMPANIES: &[&str] = &[
    "Tech Innovations", "Digital Solutions", "Cloud Systems", "Data Analytics Inc",
    "Smart Industries", "Global Enterprises",
];

const JOB_TITLES: &[&str] = &[
    "Software Engineer", "Product Manager", "UX Designer", "Data Analyst",
    "Marketing Specialist", "Project Manager",
];

const STREET_NAMES: &[&str] = &["Main", "Oak", "Maple", "Cedar", "Pine", "Elm", "Washington"];

const CITIES: &[&str] = &[
    "New York", "Los Angeles", "Chicago", "Houston", "Phoenix", "Philadelphia", "San Diego",
    "Dallas",
];

const STATES: &[&str] = &["CA", "NY", "TX", "FL", "IL", "PA", "OH", "GA", "NC", "MI"];

const COUNTRIES: &[&str] = &[
    "United States", "Canada", "United Kingdom", "Australia", "Germany", "France",
];

const WORDS: &[&str] = &[
    "Innovation", "Technology", "Solution", "Platform", "Service", "Product",
];

const PARAGRAPH: &str = "This is a comprehensive test description that provides enough detail \
for testing purposes. It includes multiple sentences to simulate real user input and can be \
used for various textarea fields, comment sections, and description boxes throughout the \
application.";

/// A value produced for one field: a string for text-like controls and
/// selects, a checked state for checkboxes and radios.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeneratedValue {
    Text(String),
    Checked(bool),
}

/// Synthetic value source. Intentionally fake: no validation against
/// real-world data. Seedable so tests can pin the random stream.
pub struct ValueGenerator {
    rng: StdRng,
}

impl ValueGenerator {
    pub fn new() -> Self {
        Self { rng: StdRng::from_os_rng() }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self { rng: StdRng::seed_from_u64(seed) }
    }

    /// Generate a value for a classified field.
    ///
    /// Returns `None` when the category is structurally not applicable to
    /// this field right now: a select with no eligible option, or a radio
    /// whose 30% probability roll failed. That is a skip, not an error.
    pub fn generate(&mut self, category: Category, field: &FieldElement) -> Option<GeneratedValue> {
        match category {
            Category::Select => self.choose_option(field).map(GeneratedValue::Text),
            // Checkboxes always act; radios only act on a 30% roll, to avoid
            // fighting native radio-group exclusivity across siblings.
            Category::Checkbox => Some(GeneratedValue::Checked(self.rng.random_bool(0.5))),
            Category::Radio => {
                if self.rng.random_bool(0.3) {
                    Some(GeneratedValue::Checked(true))
                } else {
                    None
                }
            }
            Category::Numeric => {
                let (min, max) = numeric_bounds(field);
                Some(GeneratedValue::Text(self.int_in(min, max).to_string()))
            }
            _ => Some(GeneratedValue::Text(self.text_for(category))),
        }
    }

    fn text_for(&mut self, category: Category) -> String {
        match category {
            Category::FirstName => self.pick(FIRST_NAMES).to_string(),
            Category::LastName => self.pick(LAST_NAMES).to_string(),
            Category::FullName => {
                format!("{} {}", self.pick(FIRST_NAMES), self.pick(LAST_NAMES))
            }
            Category::Email => format!("testuser{}@example.com", self.rng.random_range(0..10000)),
            Category::Password => format!("SecurePass{}!@#", self.rng.random_range(0..10000)),
            Category::Phone => format!(
                "({}) {}-{}",
                self.rng.random_range(100..=999),
                self.rng.random_range(100..=999),
                self.rng.random_range(1000..=9999),
            ),
            Category::Url => format!("https://www.example{}.com", self.rng.random_range(0..100)),
            Category::Username => format!("user{}", self.rng.random_range(0..100000)),
            Category::Company => self.pick(COMPANIES).to_string(),
            Category::JobTitle => self.pick(JOB_TITLES).to_string(),
            Category::Street => format!(
                "{} {} Street",
                self.rng.random_range(1..=9999),
                self.pick(STREET_NAMES)
            ),
            Category::City => self.pick(CITIES).to_string(),
            Category::State => self.pick(STATES).to_string(),
            Category::Zip => self.rng.random_range(10000..=99999).to_string(),
            Category::Country => self.pick(COUNTRIES).to_string(),
            Category::Amount => self.rng.random_range(50..=5000).to_string(),
            Category::Duration => self.rng.random_range(1..=40).to_string(),
            Category::CategoryWord => self.pick(WORDS).to_string(),
            Category::Description => PARAGRAPH.to_string(),
            Category::Search => self.pick(WORDS).to_string(),
            Category::Title => format!(
                "Test {} {}",
                self.pick(WORDS),
                self.rng.random_range(1..=1000)
            ),
            Category::Date => self.date(),
            Category::DateTime => format!("{}T10:30", self.date()),
            Category::Time => format!(
                "{:02}:{:02}",
                self.rng.random_range(0..=23),
                self.rng.random_range(0..=59)
            ),
            Category::GenericText => format!("Test {}", self.pick(WORDS)),
            // Handled structurally in generate()
            Category::Select | Category::Checkbox | Category::Radio | Category::Numeric => {
                format!("Test {}", self.pick(WORDS))
            }
        }
    }

    fn date(&mut self) -> String {
        format!(
            "{}-{:02}-{:02}",
            self.rng.random_range(1990..=2019),
            self.rng.random_range(1..=12),
            self.rng.random_range(1..=28),
        )
    }

    /// Pick an option value for a select, guarding against re-selecting a
    /// placeholder "choose one" option at index 0. `None` if nothing is
    /// eligible.
    fn choose_option(&mut self, field: &FieldElement) -> Option<String> {
        let candidates: Vec<(usize, &str)> = field
            .options
            .iter()
            .enumerate()
            .filter(|(_, opt)| !opt.value.trim().is_empty() && !opt.disabled)
            .filter(|(idx, opt)| *idx > 0 || !opt.value.trim().is_empty())
            .map(|(idx, opt)| (idx, opt.value.as_str()))
            .collect();

        if candidates.is_empty() {
            return None;
        }
        let (_, value) = candidates[self.rng.random_range(0..candidates.len())];
        Some(value.to_string())
    }

    fn pick<'a>(&mut self, pool: &[&'a str]) -> &'a str {
        pool[self.rng.random_range(0..pool.len())]
    }

    fn int_in(&mut self, min: i64, max: i64) -> i64 {
        if max < min {
            return min;
        }
        self.rng.random_range(min..=max)
    }
}

impl Default for ValueGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Declared min/max bounds for number/range inputs, defaulting to 1 and 1000
/// when absent or non-numeric.
pub fn numeric_bounds(field: &FieldElement) -> (i64, i64) {
    let min = field
        .min
        .as_deref()
        .and_then(|s| s.trim().parse::<i64>().ok())
        .unwrap_or(1);
    let max = field
        .max
        .as_deref()
        .and_then(|s| s.trim().parse::<i64>().ok())
        .unwrap_or(1000);
    (min, max)
}
