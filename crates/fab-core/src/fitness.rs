//! Fitness Age domain: argument parsing, the regression, status bands.

use std::fmt;

/// A numeric test result as entered by the user.
///
/// Tokens containing a `.` parse as decimals, everything else as integers.
/// Both feed the formula as `f64`; the split only matters for echoing the
/// value back in the reply exactly as it was understood.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Measurement {
    Int(i64),
    Decimal(f64),
}

impl Measurement {
    pub fn parse(token: &str) -> Option<Self> {
        if token.contains('.') {
            token
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .map(Self::Decimal)
        } else {
            token.parse::<i64>().ok().map(Self::Int)
        }
    }

    pub fn value(self) -> f64 {
        match self {
            Self::Int(v) => v as f64,
            Self::Decimal(v) => v,
        }
    }
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Int(v) => write!(f, "{v}"),
            // A decimal always keeps at least one fractional digit, so an
            // input of `25.0` echoes as `25.0`, not `25`.
            Self::Decimal(v) if v.fract() == 0.0 => write!(f, "{v:.1}"),
            Self::Decimal(v) => write!(f, "{v}"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sex {
    Male = 1,
    Female = 2,
}

impl Sex {
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            1 => Some(Self::Male),
            2 => Some(Self::Female),
            _ => None,
        }
    }

    /// The raw 1/2 code, used directly as the multiplier in the regression.
    /// The published formula was fit against this coding; remapping to 0/1
    /// would shift every result by 3.468 years.
    pub fn indicator(self) -> f64 {
        self as i64 as f64
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
        }
    }
}

/// The six test results for one calculation. Transient, built per request.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FitnessInput {
    pub step_test_count: Measurement,
    pub grip_strength_kg: Measurement,
    pub chair_stand_count: Measurement,
    pub sit_reach_cm: Measurement,
    pub tug_seconds: Measurement,
    pub sex: Sex,
}

/// Coarse three-way classification of the computed fitness age.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusBand {
    Excellent,
    Normal,
    NeedsImprovement,
}

impl StatusBand {
    /// Classifies the ROUNDED fitness age.
    pub fn classify(fitness_age: f64) -> Self {
        if fitness_age < 60.0 {
            Self::Excellent
        } else if fitness_age <= 75.0 {
            Self::Normal
        } else {
            Self::NeedsImprovement
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FitnessAgeResult {
    /// Rounded to one decimal place.
    pub fitness_age: f64,
    pub status: StatusBand,
}

/// Evaluates the Fitness Age regression. Pure and deterministic; the input
/// invariant (`sex` in {1, 2}, finite measurements) is upheld by parsing.
pub fn compute(input: &FitnessInput) -> FitnessAgeResult {
    let raw = 79.807
        - 0.017 * input.step_test_count.value()
        - 0.203 * input.grip_strength_kg.value()
        - 0.031 * input.chair_stand_count.value()
        - 0.052 * input.sit_reach_cm.value()
        + 0.985 * input.tug_seconds.value()
        - 3.468 * input.sex.indicator();

    let fitness_age = round_tenths(raw);
    FitnessAgeResult {
        fitness_age,
        status: StatusBand::classify(fitness_age),
    }
}

// `f64::round` rounds half away from zero, so a raw 59.95 lands on 60.0.
fn round_tenths(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

/// User-input failures for `/fitnessage`. All are recovered at the command
/// handler with a guidance reply; none is fatal.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum FitnessArgsError {
    #[error("expected 6 parameters, got {0}")]
    ArgumentCount(usize),

    #[error("parameter {index} is not a number: {token}")]
    ArgumentType { index: usize, token: String },

    #[error("sex must be 1 (male) or 2 (female), got {0}")]
    InvalidSex(i64),
}

/// Parses the whitespace-delimited argument string of `/fitnessage`.
///
/// Rules, applied in order: exactly 6 tokens; tokens 1-5 numeric (decimal if
/// they contain `.`, integer otherwise); token 6 an integer equal to 1 or 2.
pub fn parse_fitness_args(args: &str) -> Result<FitnessInput, FitnessArgsError> {
    let tokens: Vec<&str> = args.split_whitespace().collect();
    if tokens.len() != 6 {
        return Err(FitnessArgsError::ArgumentCount(tokens.len()));
    }

    let mut measured = [Measurement::Int(0); 5];
    for (i, token) in tokens[..5].iter().enumerate() {
        measured[i] = Measurement::parse(token).ok_or_else(|| FitnessArgsError::ArgumentType {
            index: i + 1,
            token: (*token).to_string(),
        })?;
    }

    let sex_code = tokens[5]
        .parse::<i64>()
        .map_err(|_| FitnessArgsError::ArgumentType {
            index: 6,
            token: tokens[5].to_string(),
        })?;
    let sex = Sex::from_code(sex_code).ok_or(FitnessArgsError::InvalidSex(sex_code))?;

    Ok(FitnessInput {
        step_test_count: measured[0],
        grip_strength_kg: measured[1],
        chair_stand_count: measured[2],
        sit_reach_cm: measured[3],
        tug_seconds: measured[4],
        sex,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_input() -> FitnessInput {
        FitnessInput {
            step_test_count: Measurement::Int(100),
            grip_strength_kg: Measurement::Decimal(30.5),
            chair_stand_count: Measurement::Int(12),
            sit_reach_cm: Measurement::Decimal(25.0),
            tug_seconds: Measurement::Decimal(8.5),
            sex: Sex::Male,
        }
    }

    #[test]
    fn reference_vector_end_to_end() {
        // 79.807 - 1.7 - 6.1915 - 0.372 - 1.3 + 8.3725 - 3.468 = 75.148
        let res = compute(&reference_input());
        assert_eq!(res.fitness_age, 75.1);
        assert_eq!(res.status, StatusBand::NeedsImprovement);
    }

    #[test]
    fn compute_is_deterministic() {
        let a = compute(&reference_input());
        let b = compute(&reference_input());
        assert_eq!(a.fitness_age.to_bits(), b.fitness_age.to_bits());
        assert_eq!(a.status, b.status);
    }

    #[test]
    fn rounds_half_away_from_zero() {
        assert_eq!(round_tenths(59.95), 60.0);
        assert_eq!(round_tenths(75.148), 75.1);
        assert_eq!(StatusBand::classify(round_tenths(59.95)), StatusBand::Normal);
    }

    #[test]
    fn tug_increases_fitness_age() {
        let base = compute(&reference_input());
        let mut slower = reference_input();
        slower.tug_seconds = Measurement::Decimal(9.5);
        assert!(compute(&slower).fitness_age > base.fitness_age);
    }

    #[test]
    fn grip_decreases_fitness_age() {
        let base = compute(&reference_input());
        let mut stronger = reference_input();
        stronger.grip_strength_kg = Measurement::Decimal(31.5);
        assert!(compute(&stronger).fitness_age < base.fitness_age);
    }

    #[test]
    fn classification_boundaries() {
        assert_eq!(StatusBand::classify(59.9), StatusBand::Excellent);
        assert_eq!(StatusBand::classify(60.0), StatusBand::Normal);
        assert_eq!(StatusBand::classify(75.0), StatusBand::Normal);
        assert_eq!(StatusBand::classify(75.1), StatusBand::NeedsImprovement);
    }

    #[test]
    fn parses_reference_invocation() {
        let input = parse_fitness_args("100 30.5 12 25.0 8.5 1").unwrap();
        assert_eq!(input.step_test_count, Measurement::Int(100));
        assert_eq!(input.grip_strength_kg, Measurement::Decimal(30.5));
        assert_eq!(input.sit_reach_cm, Measurement::Decimal(25.0));
        assert_eq!(input.sex, Sex::Male);
        assert_eq!(compute(&input).fitness_age, 75.1);
    }

    #[test]
    fn parsed_input_compares_as_a_whole() {
        let input = parse_fitness_args("100 30.5 12 25.0 8.5 1").unwrap();
        assert_eq!(input, reference_input());
    }

    #[test]
    fn rejects_wrong_argument_count() {
        assert_eq!(
            parse_fitness_args("100 30.5 12 25.0 8.5"),
            Err(FitnessArgsError::ArgumentCount(5))
        );
        assert_eq!(
            parse_fitness_args(""),
            Err(FitnessArgsError::ArgumentCount(0))
        );
    }

    #[test]
    fn rejects_non_numeric_token() {
        assert_eq!(
            parse_fitness_args("100 abc 12 25.0 8.5 1"),
            Err(FitnessArgsError::ArgumentType {
                index: 2,
                token: "abc".to_string(),
            })
        );
    }

    #[test]
    fn sex_must_be_integer_code() {
        // A decimal sex token fails integer parsing before the range check.
        assert_eq!(
            parse_fitness_args("100 30.5 12 25.0 8.5 1.0"),
            Err(FitnessArgsError::ArgumentType {
                index: 6,
                token: "1.0".to_string(),
            })
        );
        assert_eq!(
            parse_fitness_args("100 30.5 12 25.0 8.5 3"),
            Err(FitnessArgsError::InvalidSex(3))
        );
    }

    #[test]
    fn negative_sit_reach_is_accepted() {
        let input = parse_fitness_args("100 30.5 12 -5.0 8.5 2").unwrap();
        assert_eq!(input.sit_reach_cm, Measurement::Decimal(-5.0));
        assert_eq!(input.sex, Sex::Female);
    }

    #[test]
    fn measurement_display_preserves_form() {
        assert_eq!(Measurement::Int(100).to_string(), "100");
        assert_eq!(Measurement::Decimal(30.5).to_string(), "30.5");
        assert_eq!(Measurement::Decimal(25.0).to_string(), "25.0");
    }
}
