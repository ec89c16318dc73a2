//! Static field and step declarations for the application form.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page markup, the step validator and the data collector all read the
//! same tables, so a field's name, label and required flag are declared once.
//! Names are the prediction service's column names and double as form
//! control names.

#[cfg(test)]
#[path = "fields_test.rs"]
mod fields_test;

pub const GENDER: &str = "Gender";
pub const MARRIED: &str = "Married";
pub const DEPENDENTS: &str = "Dependents";
pub const EDUCATION: &str = "Education";
pub const EMPLOYMENT_TYPE: &str = "Employment_Type";
pub const DOMAIN: &str = "Domain";
pub const YEARS_OF_EXPERIENCE: &str = "Years_of_Experience";
pub const APPLICANT_INCOME: &str = "ApplicantIncome";
pub const COAPPLICANT_INCOME: &str = "CoapplicantIncome";
pub const LOAN_AMOUNT: &str = "LoanAmount";
pub const LOAN_AMOUNT_TERM: &str = "Loan_Amount_Term";
pub const INTEREST_RATE: &str = "Interest_Rate";
pub const PROPERTY_AREA: &str = "Property_Area";
pub const CREDIT_HISTORY: &str = "Credit_History";

/// One `<option>` of a select control.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SelectOption {
    pub value: &'static str,
    pub label: &'static str,
}

const fn opt(value: &'static str, label: &'static str) -> SelectOption {
    SelectOption { value, label }
}

const GENDER_OPTIONS: &[SelectOption] = &[opt("Male", "Male"), opt("Female", "Female")];
const YES_NO_OPTIONS: &[SelectOption] = &[opt("Yes", "Yes"), opt("No", "No")];
const DEPENDENTS_OPTIONS: &[SelectOption] = &[opt("0", "0"), opt("1", "1"), opt("2", "2"), opt("3+", "3+")];
const EDUCATION_OPTIONS: &[SelectOption] = &[opt("Graduate", "Graduate"), opt("Not Graduate", "Not Graduate")];
const EMPLOYMENT_OPTIONS: &[SelectOption] = &[
    opt("Salaried", "Salaried"),
    opt("Self-Employed", "Self-Employed"),
    opt("Business", "Business"),
];
const DOMAIN_OPTIONS: &[SelectOption] = &[
    opt("IT", "IT / Software"),
    opt("Finance", "Finance"),
    opt("Healthcare", "Healthcare"),
    opt("Education", "Education"),
    opt("Manufacturing", "Manufacturing"),
    opt("Government", "Government"),
    opt("Other", "Other"),
];
const TERM_OPTIONS: &[SelectOption] = &[
    opt("12", "12 months"),
    opt("36", "36 months"),
    opt("60", "60 months"),
    opt("120", "120 months"),
    opt("180", "180 months"),
    opt("240", "240 months"),
    opt("300", "300 months"),
    opt("360", "360 months"),
    opt("480", "480 months"),
];
const AREA_OPTIONS: &[SelectOption] = &[opt("Urban", "Urban"), opt("Semiurban", "Semiurban"), opt("Rural", "Rural")];
const CREDIT_OPTIONS: &[SelectOption] = &[opt("1", "Yes, clean repayment record"), opt("0", "No / poor history")];

/// Slider bounds and starting value for a paired control.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SliderRange {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub default: f64,
}

impl SliderRange {
    /// Clamp a value into `[min, max]` the way a range input does.
    #[must_use]
    pub fn clamp(self, value: f64) -> f64 {
        if value.is_nan() { self.min } else { value.clamp(self.min, self.max) }
    }
}

/// How a paired control's display label is formatted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LabelStyle {
    /// `4.5 years`
    Years,
    /// `₹12,34,567`
    Rupees,
    /// `8.5%`
    Percent,
}

/// Quantities edited through a slider (and, for money, a text box) pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PairId {
    Experience,
    ApplicantIncome,
    LoanAmount,
    InterestRate,
}

impl PairId {
    pub const ALL: [Self; 4] = [Self::Experience, Self::ApplicantIncome, Self::LoanAmount, Self::InterestRate];

    /// Position of this pair in [`PairId::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Experience => 0,
            Self::ApplicantIncome => 1,
            Self::LoanAmount => 2,
            Self::InterestRate => 3,
        }
    }

    /// The named form field this pair feeds.
    #[must_use]
    pub const fn field_name(self) -> &'static str {
        match self {
            Self::Experience => YEARS_OF_EXPERIENCE,
            Self::ApplicantIncome => APPLICANT_INCOME,
            Self::LoanAmount => LOAN_AMOUNT,
            Self::InterestRate => INTEREST_RATE,
        }
    }

    /// DOM id prefix used for the slider/text/display trio.
    #[must_use]
    pub const fn dom_prefix(self) -> &'static str {
        match self {
            Self::Experience => "exp",
            Self::ApplicantIncome => "app",
            Self::LoanAmount => "loan",
            Self::InterestRate => "rate",
        }
    }

    /// Money pairs carry a free-text box next to the slider.
    #[must_use]
    pub const fn has_text(self) -> bool {
        matches!(self, Self::ApplicantIncome | Self::LoanAmount)
    }

    #[must_use]
    pub const fn label_style(self) -> LabelStyle {
        match self {
            Self::Experience => LabelStyle::Years,
            Self::ApplicantIncome | Self::LoanAmount => LabelStyle::Rupees,
            Self::InterestRate => LabelStyle::Percent,
        }
    }

    #[must_use]
    pub const fn range(self) -> SliderRange {
        match self {
            Self::Experience => SliderRange { min: 0.0, max: 40.0, step: 0.5, default: 2.0 },
            Self::ApplicantIncome => SliderRange { min: 0.0, max: 500_000.0, step: 1000.0, default: 50_000.0 },
            Self::LoanAmount => SliderRange { min: 0.0, max: 10_000_000.0, step: 10_000.0, default: 1_000_000.0 },
            Self::InterestRate => SliderRange { min: 5.0, max: 20.0, step: 0.1, default: 8.5 },
        }
    }
}

/// Kind of control rendered for a field.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FieldKind {
    Select(&'static [SelectOption]),
    Paired(PairId),
    Number,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    /// Marked `required` in the step panel; checked by the step validator.
    pub required: bool,
    pub kind: FieldKind,
}

/// A selector that must hold an explicit choice before leaving its step.
///
/// Reported through a blocking alert rather than a field flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExplicitSelection {
    pub field: &'static str,
    pub alert: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StepSpec {
    pub title: &'static str,
    pub fields: &'static [FieldSpec],
    pub explicit_selection: Option<ExplicitSelection>,
}

const fn field(name: &'static str, label: &'static str, required: bool, kind: FieldKind) -> FieldSpec {
    FieldSpec { name, label, required, kind }
}

pub const CREDIT_HISTORY_ALERT: &str = "Please select credit history.";

/// The wizard's steps in display order. The last step is the review.
pub const STEPS: &[StepSpec] = &[
    StepSpec {
        title: "Personal",
        fields: &[
            field(GENDER, "Gender", true, FieldKind::Select(GENDER_OPTIONS)),
            field(MARRIED, "Married", true, FieldKind::Select(YES_NO_OPTIONS)),
            field(DEPENDENTS, "Dependents", true, FieldKind::Select(DEPENDENTS_OPTIONS)),
            field(EDUCATION, "Education", true, FieldKind::Select(EDUCATION_OPTIONS)),
        ],
        explicit_selection: None,
    },
    StepSpec {
        title: "Employment",
        fields: &[
            field(EMPLOYMENT_TYPE, "Employment Type", true, FieldKind::Select(EMPLOYMENT_OPTIONS)),
            field(DOMAIN, "Domain", true, FieldKind::Select(DOMAIN_OPTIONS)),
            field(YEARS_OF_EXPERIENCE, "Years of Experience", true, FieldKind::Paired(PairId::Experience)),
            field(APPLICANT_INCOME, "Monthly Income", true, FieldKind::Paired(PairId::ApplicantIncome)),
            field(COAPPLICANT_INCOME, "Co-applicant Monthly Income", false, FieldKind::Number),
        ],
        explicit_selection: None,
    },
    StepSpec {
        title: "Loan",
        fields: &[
            field(LOAN_AMOUNT, "Loan Amount", true, FieldKind::Paired(PairId::LoanAmount)),
            field(LOAN_AMOUNT_TERM, "Loan Term", true, FieldKind::Select(TERM_OPTIONS)),
            field(INTEREST_RATE, "Interest Rate", true, FieldKind::Paired(PairId::InterestRate)),
            field(PROPERTY_AREA, "Property Area", true, FieldKind::Select(AREA_OPTIONS)),
            field(CREDIT_HISTORY, "Credit History", false, FieldKind::Select(CREDIT_OPTIONS)),
        ],
        explicit_selection: Some(ExplicitSelection { field: CREDIT_HISTORY, alert: CREDIT_HISTORY_ALERT }),
    },
    StepSpec { title: "Review", fields: &[], explicit_selection: None },
];

/// Look up a step by index.
#[must_use]
pub fn step(index: usize) -> Option<&'static StepSpec> {
    STEPS.get(index)
}
