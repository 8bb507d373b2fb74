// ABOUTME: Finding codes, severities, and machine-usable remediation hints
// ABOUTME: Findings are domain outcomes returned through the normal channel, never errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;

use serde::{Deserialize, Serialize};

/// Whether a finding prevents the plan from proceeding
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// The plan cannot proceed as given
    Blocking,
    /// Surfaced to the user; the plan may proceed
    Advisory,
}

/// Stable code identifying each validation rule
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FindingCode {
    // Blocking
    /// Body fat below the essential floor while losing weight
    BodyFatBelowEssential,
    /// Underweight BMI while losing weight
    BmiUnderweightLoss,
    /// Target calories below BMR
    TargetBelowBmr,
    /// Target calories below the absolute floor
    TargetBelowCalorieFloor,
    /// Weekly rate beyond the unsafe threshold
    ExtremeRate,
    /// No meal slot enabled
    NoMealsEnabled,
    /// Severe sleep deprivation with an aggressive rate
    SevereSleepAggressiveRate,
    /// Weekly training volume beyond the safe ceiling
    TrainingVolumeExcessive,
    /// Caloric deficit during pregnancy or lactation
    PregnancyDeficit,
    /// Loss and gain goals together
    GoalConflict,
    /// Too little exercise for a rate that forces calories below BMR
    InsufficientExerciseForRate,

    // Advisory
    /// Aggressive but not extreme rate
    AggressiveRate,
    /// Sleep below the recommendation
    InsufficientSleep,
    /// High stress
    HighStress,
    /// A medical condition adjusted the metrics
    MedicalConditionAdjusted,
    /// Medications or insulin-dependent condition warrant review
    MedicationReview,
    /// Alcohol or tobacco with an aggressive rate
    SubstanceUseAggressiveRate,
    /// Low diet readiness with an aggressive rate
    LowReadinessAggressiveRate,
    /// Older-adult guidance
    ElderlyGuidance,
    /// Adolescent with an athletic training load
    AdolescentAthlete,
    /// Perimenopausal guidance
    PerimenopausalGuidance,
    /// Equipment does not support the goal
    EquipmentGoalMismatch,
    /// Physical limitation with high-intensity training
    PhysicalLimitationIntensity,
    /// Cardiovascular caution with high-intensity training
    CardiovascularIntensity,
    /// Endurance and hypertrophy goals interfere
    ConcurrentTrainingInterference,
    /// Gain rate above natural muscle accretion
    ExcessiveGainRate,
    /// Self-reported intensity exceeds measured capability
    CapabilityIntensityMismatch,
    /// High but not excessive training volume
    HighTrainingVolume,
    /// Target weight yields an underweight BMI
    LowTargetBmi,
    /// Waist-to-hip ratio above the central adiposity threshold
    CentralAdiposity,
    /// Body fat is a conservative default
    BodyFatEstimateUncertain,
    /// Selected goal contradicts the weight endpoints
    GoalTargetMismatch,
    /// Only one meal slot enabled
    SingleMealStructure,
    /// Several minor lifestyle risks together
    MultipleLifestyleRisks,
}

impl FindingCode {
    /// Severity implied by the code
    #[must_use]
    pub const fn severity(&self) -> Severity {
        match self {
            Self::BodyFatBelowEssential
            | Self::BmiUnderweightLoss
            | Self::TargetBelowBmr
            | Self::TargetBelowCalorieFloor
            | Self::ExtremeRate
            | Self::NoMealsEnabled
            | Self::SevereSleepAggressiveRate
            | Self::TrainingVolumeExcessive
            | Self::PregnancyDeficit
            | Self::GoalConflict
            | Self::InsufficientExerciseForRate => Severity::Blocking,
            _ => Severity::Advisory,
        }
    }

    /// Whether a numeric rate or timeline change can resolve the finding
    #[must_use]
    pub const fn is_rate_related(&self) -> bool {
        matches!(
            self,
            Self::TargetBelowBmr
                | Self::TargetBelowCalorieFloor
                | Self::ExtremeRate
                | Self::SevereSleepAggressiveRate
                | Self::InsufficientExerciseForRate
        )
    }

    /// Stable string form
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::BodyFatBelowEssential => "BODY_FAT_BELOW_ESSENTIAL",
            Self::BmiUnderweightLoss => "BMI_UNDERWEIGHT_LOSS",
            Self::TargetBelowBmr => "TARGET_BELOW_BMR",
            Self::TargetBelowCalorieFloor => "TARGET_BELOW_CALORIE_FLOOR",
            Self::ExtremeRate => "EXTREME_RATE",
            Self::NoMealsEnabled => "NO_MEALS_ENABLED",
            Self::SevereSleepAggressiveRate => "SEVERE_SLEEP_AGGRESSIVE_RATE",
            Self::TrainingVolumeExcessive => "TRAINING_VOLUME_EXCESSIVE",
            Self::PregnancyDeficit => "PREGNANCY_DEFICIT",
            Self::GoalConflict => "GOAL_CONFLICT",
            Self::InsufficientExerciseForRate => "INSUFFICIENT_EXERCISE_FOR_RATE",
            Self::AggressiveRate => "AGGRESSIVE_RATE",
            Self::InsufficientSleep => "INSUFFICIENT_SLEEP",
            Self::HighStress => "HIGH_STRESS",
            Self::MedicalConditionAdjusted => "MEDICAL_CONDITION_ADJUSTED",
            Self::MedicationReview => "MEDICATION_REVIEW",
            Self::SubstanceUseAggressiveRate => "SUBSTANCE_USE_AGGRESSIVE_RATE",
            Self::LowReadinessAggressiveRate => "LOW_READINESS_AGGRESSIVE_RATE",
            Self::ElderlyGuidance => "ELDERLY_GUIDANCE",
            Self::AdolescentAthlete => "ADOLESCENT_ATHLETE",
            Self::PerimenopausalGuidance => "PERIMENOPAUSAL_GUIDANCE",
            Self::EquipmentGoalMismatch => "EQUIPMENT_GOAL_MISMATCH",
            Self::PhysicalLimitationIntensity => "PHYSICAL_LIMITATION_INTENSITY",
            Self::CardiovascularIntensity => "CARDIOVASCULAR_INTENSITY",
            Self::ConcurrentTrainingInterference => "CONCURRENT_TRAINING_INTERFERENCE",
            Self::ExcessiveGainRate => "EXCESSIVE_GAIN_RATE",
            Self::CapabilityIntensityMismatch => "CAPABILITY_INTENSITY_MISMATCH",
            Self::HighTrainingVolume => "HIGH_TRAINING_VOLUME",
            Self::LowTargetBmi => "LOW_TARGET_BMI",
            Self::CentralAdiposity => "CENTRAL_ADIPOSITY",
            Self::BodyFatEstimateUncertain => "BODY_FAT_ESTIMATE_UNCERTAIN",
            Self::GoalTargetMismatch => "GOAL_TARGET_MISMATCH",
            Self::SingleMealStructure => "SINGLE_MEAL_STRUCTURE",
            Self::MultipleLifestyleRisks => "MULTIPLE_LIFESTYLE_RISKS",
        }
    }
}

impl fmt::Display for FindingCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Machine-usable remediation attached to a finding
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Remediation {
    /// Extend the timeline to at least this many weeks
    MinimumTimelineWeeks {
        /// Weeks
        weeks: u32,
    },
    /// Daily calories must not fall below this
    MinimumDailyCalories {
        /// kcal/day
        kcal: f64,
    },
    /// Keep weekly training at or below this
    MaximumWeeklyMinutes {
        /// Minutes per week
        minutes: u32,
    },
    /// Expect the goal to take this many weeks
    RevisedTimelineWeeks {
        /// Weeks
        weeks: u32,
    },
    /// A categorical input must change; no numeric fix exists
    ChangeCategoricalInput {
        /// Profile field to change
        field: String,
    },
    /// Discuss the plan with a healthcare professional
    ConsultProfessional,
}

/// One validation outcome
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Finding {
    /// Stable code
    pub code: FindingCode,
    /// Severity (derived from the code)
    pub severity: Severity,
    /// Human-readable explanation
    pub message: String,
    /// Optional machine-usable remediation
    pub remediation: Option<Remediation>,
}

impl Finding {
    /// Create a finding without remediation
    pub fn new(code: FindingCode, message: impl Into<String>) -> Self {
        Self {
            code,
            severity: code.severity(),
            message: message.into(),
            remediation: None,
        }
    }

    /// Attach a remediation
    #[must_use]
    pub fn with_remediation(mut self, remediation: Remediation) -> Self {
        self.remediation = Some(remediation);
        self
    }

    /// Whether the finding blocks the plan
    #[must_use]
    pub fn is_blocking(&self) -> bool {
        self.severity == Severity::Blocking
    }
}
