//! Choices offered by the idea form.

/// Industry / sector select options.
pub const INDUSTRIES: &[&str] = &[
    "Technology",
    "Healthcare",
    "Education",
    "Finance",
    "E-commerce",
    "Entertainment",
    "Food & Beverage",
    "Transportation",
    "Real Estate",
    "Environment",
    "Fashion",
    "Sports",
    "Travel",
    "Other",
];

/// Initial budget select options.
pub const BUDGET_RANGES: &[&str] = &[
    "Under $10K",
    "$10K - $50K",
    "$50K - $100K",
    "$100K - $500K",
    "$500K+",
];
