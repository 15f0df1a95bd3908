//! Athlete profile and its validation.
//!
//! A delivery layer deserializes a [`ProfileInput`] with every field optional
//! and converts it with [`ProfileInput::validate`]. Only a validated
//! [`AthleteProfile`] reaches the planner.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::types::{FitnessLevel, Sex, Sport};
use crate::error::{CoachError, CoachResult};

/// Validated athlete attributes, immutable within a planning cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AthleteProfile {
    /// Athlete identifier
    pub id: Uuid,
    /// Age in years (8-100)
    pub age: u8,
    /// Height in centimeters (100-250)
    pub height_cm: f32,
    /// Weight in kilograms (25-250)
    pub weight_kg: f32,
    /// Declared sex
    pub sex: Sex,
    /// Sport trained for
    pub sport: Sport,
    /// Years of structured training
    pub years_experience: u8,
    /// Declared fitness level
    pub fitness_level: FitnessLevel,
    /// Available training sessions per week (1-7)
    pub training_frequency: u8,
    /// Athlete reports a current injury
    #[serde(default)]
    pub has_injuries: bool,
}

impl AthleteProfile {
    /// Body mass index rounded to two decimals.
    pub fn bmi(&self) -> f32 {
        let height_m = self.height_cm / 100.0;
        (self.weight_kg / (height_m * height_m) * 100.0).round() / 100.0
    }

    /// Re-check ranges on a profile that was built directly.
    pub fn validate(&self) -> CoachResult<()> {
        check_age(self.age)?;
        check_height(self.height_cm)?;
        check_weight(self.weight_kg)?;
        check_experience(self.years_experience, self.age)?;
        check_frequency(self.training_frequency)?;
        Ok(())
    }

    /// Validate age value (8-100 years).
    pub fn validate_age(age: u8) -> bool {
        (8..=100).contains(&age)
    }

    /// Validate height value (100-250 cm).
    pub fn validate_height(height_cm: f32) -> bool {
        (100.0..=250.0).contains(&height_cm)
    }

    /// Validate weight value (25-250 kg).
    pub fn validate_weight(weight_kg: f32) -> bool {
        (25.0..=250.0).contains(&weight_kg)
    }

    /// Validate training frequency (1-7 sessions per week).
    pub fn validate_frequency(frequency: u8) -> bool {
        (1..=7).contains(&frequency)
    }
}

/// Unvalidated profile as submitted by a client.
///
/// Numeric fields are wide signed types so negative or oversized input is
/// reported as out of range instead of failing deserialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileInput {
    pub id: Option<Uuid>,
    pub age: Option<i64>,
    pub height_cm: Option<f64>,
    pub weight_kg: Option<f64>,
    pub sex: Option<Sex>,
    pub sport: Option<Sport>,
    pub years_experience: Option<i64>,
    pub fitness_level: Option<FitnessLevel>,
    pub training_frequency: Option<i64>,
    #[serde(default)]
    pub has_injuries: bool,
}

impl ProfileInput {
    /// Check presence and range of every field and build the profile.
    ///
    /// Fails on the first offending field, in declaration order.
    pub fn validate(&self) -> CoachResult<AthleteProfile> {
        let id = required(self.id, "id")?;
        let age = narrow_u8(required(self.age, "age")?, "age")?;
        check_age(age)?;
        let height_cm = required(self.height_cm, "height_cm")? as f32;
        check_height(height_cm)?;
        let weight_kg = required(self.weight_kg, "weight_kg")? as f32;
        check_weight(weight_kg)?;
        let sex = required(self.sex, "sex")?;
        let sport = required(self.sport, "sport")?;
        let years_experience = narrow_u8(
            required(self.years_experience, "years_experience")?,
            "years_experience",
        )?;
        check_experience(years_experience, age)?;
        let fitness_level = required(self.fitness_level, "fitness_level")?;
        let training_frequency = narrow_u8(
            required(self.training_frequency, "training_frequency")?,
            "training_frequency",
        )?;
        check_frequency(training_frequency)?;

        Ok(AthleteProfile {
            id,
            age,
            height_cm,
            weight_kg,
            sex,
            sport,
            years_experience,
            fitness_level,
            training_frequency,
            has_injuries: self.has_injuries,
        })
    }
}

impl From<&AthleteProfile> for ProfileInput {
    fn from(profile: &AthleteProfile) -> Self {
        Self {
            id: Some(profile.id),
            age: Some(profile.age as i64),
            height_cm: Some(profile.height_cm as f64),
            weight_kg: Some(profile.weight_kg as f64),
            sex: Some(profile.sex),
            sport: Some(profile.sport),
            years_experience: Some(profile.years_experience as i64),
            fitness_level: Some(profile.fitness_level),
            training_frequency: Some(profile.training_frequency as i64),
            has_injuries: profile.has_injuries,
        }
    }
}

fn required<T>(value: Option<T>, field: &'static str) -> CoachResult<T> {
    value.ok_or_else(|| CoachError::invalid_profile(field, "is required"))
}

fn narrow_u8(value: i64, field: &'static str) -> CoachResult<u8> {
    u8::try_from(value)
        .map_err(|_| CoachError::invalid_profile(field, format!("is out of range ({})", value)))
}

fn check_age(age: u8) -> CoachResult<()> {
    if AthleteProfile::validate_age(age) {
        Ok(())
    } else {
        Err(CoachError::invalid_profile(
            "age",
            format!("must be between 8 and 100 (got {})", age),
        ))
    }
}

fn check_height(height_cm: f32) -> CoachResult<()> {
    if AthleteProfile::validate_height(height_cm) {
        Ok(())
    } else {
        Err(CoachError::invalid_profile(
            "height_cm",
            format!("must be between 100 and 250 (got {})", height_cm),
        ))
    }
}

fn check_weight(weight_kg: f32) -> CoachResult<()> {
    if AthleteProfile::validate_weight(weight_kg) {
        Ok(())
    } else {
        Err(CoachError::invalid_profile(
            "weight_kg",
            format!("must be between 25 and 250 (got {})", weight_kg),
        ))
    }
}

fn check_experience(years: u8, age: u8) -> CoachResult<()> {
    if years <= age {
        Ok(())
    } else {
        Err(CoachError::invalid_profile(
            "years_experience",
            format!("cannot exceed age ({} > {})", years, age),
        ))
    }
}

fn check_frequency(frequency: u8) -> CoachResult<()> {
    if AthleteProfile::validate_frequency(frequency) {
        Ok(())
    } else {
        Err(CoachError::invalid_profile(
            "training_frequency",
            format!("must be between 1 and 7 (got {})", frequency),
        ))
    }
}
