// ABOUTME: Advisory rule battery; findings are surfaced but never block the plan
// ABOUTME: Rate, lifestyle, medical, age-band, training-compatibility, and body-composition guidance
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use fitplan_core::constants::physiology::time::WEEKS_PER_MONTH;
use fitplan_core::models::{
    BiologicalSex, EquipmentAccess, FitnessGoal, IntensityLevel, MedicalCondition, StressLevel,
    WorkoutType,
};

use super::{ceil_weeks, Finding, FindingCode, Remediation, RuleContext, ValidationRule};
use crate::metrics::{BodyFatSource, GoalDirection};

/// Advisory rules in declaration order
pub static ADVISORY_RULES: &[&dyn ValidationRule] = &[
    &AggressiveRate,
    &InsufficientSleep,
    &HighStress,
    &MedicalConditionAdjusted,
    &MedicationReview,
    &SubstanceUseAggressiveRate,
    &LowReadinessAggressiveRate,
    &ElderlyGuidance,
    &AdolescentAthlete,
    &PerimenopausalGuidance,
    &EquipmentGoalMismatch,
    &PhysicalLimitationIntensity,
    &CardiovascularIntensity,
    &ConcurrentTrainingInterference,
    &ExcessiveGainRate,
    &CapabilityIntensityMismatch,
    &HighTrainingVolume,
    &LowTargetBmi,
    &CentralAdiposity,
    &BodyFatEstimateUncertain,
    &GoalTargetMismatch,
    &SingleMealStructure,
    &MultipleLifestyleRisks,
];

fn is_high_intensity(ctx: &RuleContext<'_>) -> bool {
    ctx.profile.intensity == IntensityLevel::Advanced
        || ctx.profile.workout_types.contains(&WorkoutType::Hiit)
}

fn revised_timeline(ctx: &RuleContext<'_>) -> Option<Remediation> {
    (ctx.metrics.effective_timeline_weeks > ctx.profile.timeline_weeks).then_some(
        Remediation::RevisedTimelineWeeks {
            weeks: ctx.metrics.effective_timeline_weeks,
        },
    )
}

fn with_optional(finding: Finding, remediation: Option<Remediation>) -> Finding {
    match remediation {
        Some(remediation) => finding.with_remediation(remediation),
        None => finding,
    }
}

/// Aggressive but not extreme rate
pub struct AggressiveRate;

impl ValidationRule for AggressiveRate {
    fn code(&self) -> FindingCode {
        FindingCode::AggressiveRate
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Option<Finding> {
        let band = ctx.rate_band()?;
        (ctx.is_aggressive_rate() && !ctx.is_extreme_rate()).then(|| {
            Finding::new(
                self.code(),
                format!(
                    "A weekly change of {:.2}% of body weight is aggressive; above {:.1}% is harder to sustain",
                    ctx.metrics.weekly_rate_percent, band.aggressive_percent
                ),
            )
            .with_remediation(Remediation::MinimumTimelineWeeks {
                weeks: ctx.weeks_at_rate_percent(band.aggressive_percent),
            })
        })
    }
}

/// Sleep below the recommended minimum
pub struct InsufficientSleep;

impl ValidationRule for InsufficientSleep {
    fn code(&self) -> FindingCode {
        FindingCode::InsufficientSleep
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Option<Finding> {
        let sleep = ctx.metrics.sleep_hours;
        let recommended = ctx.config.safety.recommended_sleep_hours;
        (sleep < recommended).then(|| {
            with_optional(
                Finding::new(
                    self.code(),
                    format!(
                        "{sleep:.1} hours of sleep is below the recommended {recommended:.0}; progress may be slower"
                    ),
                ),
                revised_timeline(ctx),
            )
        })
    }
}

/// High self-reported stress
pub struct HighStress;

impl ValidationRule for HighStress {
    fn code(&self) -> FindingCode {
        FindingCode::HighStress
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Option<Finding> {
        (ctx.profile.stress_level == StressLevel::High).then(|| {
            with_optional(
                Finding::new(
                    self.code(),
                    "High stress raises cortisol and tends to slow body-composition changes",
                ),
                revised_timeline(ctx),
            )
        })
    }
}

/// A medical condition adjusted the metrics
pub struct MedicalConditionAdjusted;

impl ValidationRule for MedicalConditionAdjusted {
    fn code(&self) -> FindingCode {
        FindingCode::MedicalConditionAdjusted
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Option<Finding> {
        let adjustment = ctx.metrics.modifiers.metabolic.as_ref()?;
        Some(
            Finding::new(
                self.code(),
                format!(
                    "Targets were adjusted for {} (energy {:+.0}%, carbohydrate -{:.0}%)",
                    adjustment.condition().label(),
                    ctx.metrics.modifiers.total_tdee_percent,
                    ctx.metrics.modifiers.carb_reduction_percent
                ),
            )
            .with_remediation(Remediation::ConsultProfessional),
        )
    }
}

/// Medications or an insulin-dependent condition warrant review
pub struct MedicationReview;

impl ValidationRule for MedicationReview {
    fn code(&self) -> FindingCode {
        FindingCode::MedicationReview
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Option<Finding> {
        let insulin_dependent = ctx
            .profile
            .medical_conditions
            .contains(&MedicalCondition::Type1Diabetes);
        (!ctx.profile.medications.is_empty() || insulin_dependent).then(|| {
            Finding::new(
                self.code(),
                "Medication needs may change with diet and training; review the plan with your prescriber",
            )
            .with_remediation(Remediation::ConsultProfessional)
        })
    }
}

/// Alcohol or tobacco combined with an aggressive rate
pub struct SubstanceUseAggressiveRate;

impl ValidationRule for SubstanceUseAggressiveRate {
    fn code(&self) -> FindingCode {
        FindingCode::SubstanceUseAggressiveRate
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Option<Finding> {
        let uses = ctx.profile.drinks_alcohol || ctx.profile.uses_tobacco;
        (uses && ctx.is_aggressive_rate()).then(|| {
            Finding::new(
                self.code(),
                "Alcohol or tobacco use makes an aggressive rate harder to sustain and recover from",
            )
        })
    }
}

/// Low diet readiness combined with an aggressive rate
pub struct LowReadinessAggressiveRate;

impl ValidationRule for LowReadinessAggressiveRate {
    fn code(&self) -> FindingCode {
        FindingCode::LowReadinessAggressiveRate
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Option<Finding> {
        let score = ctx.metrics.diet_readiness_score;
        (score < ctx.config.safety.low_readiness_score && ctx.is_aggressive_rate()).then(|| {
            Finding::new(
                self.code(),
                format!(
                    "A diet-readiness score of {score:.0} suggests building habits before an aggressive rate"
                ),
            )
        })
    }
}

/// Older-adult guidance
pub struct ElderlyGuidance;

impl ValidationRule for ElderlyGuidance {
    fn code(&self) -> FindingCode {
        FindingCode::ElderlyGuidance
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Option<Finding> {
        (ctx.profile.age >= ctx.config.safety.elderly_age).then(|| {
            Finding::new(
                self.code(),
                "Prioritize resistance training, balance work, and protein to preserve muscle",
            )
        })
    }
}

/// Adolescent with an athletic training load
pub struct AdolescentAthlete;

impl ValidationRule for AdolescentAthlete {
    fn code(&self) -> FindingCode {
        FindingCode::AdolescentAthlete
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Option<Finding> {
        let safety = &ctx.config.safety;
        let profile = ctx.profile;
        let athletic = profile.workout_frequency_per_week >= safety.adolescent_session_threshold
            || profile.has_goal(FitnessGoal::ImproveStrength)
            || profile.has_goal(FitnessGoal::GainMuscle);
        (profile.age < safety.adolescent_age && athletic).then(|| {
            Finding::new(
                self.code(),
                "Growing athletes need energy for development; avoid restrictive diets and train under supervision",
            )
        })
    }
}

/// Perimenopausal guidance
pub struct PerimenopausalGuidance;

impl ValidationRule for PerimenopausalGuidance {
    fn code(&self) -> FindingCode {
        FindingCode::PerimenopausalGuidance
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Option<Finding> {
        let (min, max) = ctx.config.safety.perimenopause_ages;
        let in_window = (min..=max).contains(&ctx.profile.age);
        (ctx.profile.sex == BiologicalSex::Female && in_window).then(|| {
            Finding::new(
                self.code(),
                "Hormonal changes may shift fat distribution; resistance training and adequate protein help",
            )
        })
    }
}

/// Equipment cannot support the strength or hypertrophy goal
pub struct EquipmentGoalMismatch;

impl ValidationRule for EquipmentGoalMismatch {
    fn code(&self) -> FindingCode {
        FindingCode::EquipmentGoalMismatch
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Option<Finding> {
        let profile = ctx.profile;
        let needs_load = profile.has_goal(FitnessGoal::GainMuscle)
            || profile.has_goal(FitnessGoal::ImproveStrength);
        (profile.equipment == EquipmentAccess::BodyweightOnly && needs_load).then(|| {
            Finding::new(
                self.code(),
                "Bodyweight-only training limits progressive overload for strength and muscle goals",
            )
        })
    }
}

/// Physical limitation with high-intensity training
pub struct PhysicalLimitationIntensity;

impl ValidationRule for PhysicalLimitationIntensity {
    fn code(&self) -> FindingCode {
        FindingCode::PhysicalLimitationIntensity
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Option<Finding> {
        let limitation = ctx
            .profile
            .medical_conditions
            .iter()
            .find(|condition| condition.is_physical_limitation())?;
        is_high_intensity(ctx).then(|| {
            Finding::new(
                self.code(),
                format!(
                    "High-intensity or high-impact work may aggravate {}; favor low-impact alternatives",
                    limitation.label()
                ),
            )
        })
    }
}

/// Cardiovascular caution with high-intensity training
pub struct CardiovascularIntensity;

impl ValidationRule for CardiovascularIntensity {
    fn code(&self) -> FindingCode {
        FindingCode::CardiovascularIntensity
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Option<Finding> {
        (ctx.metrics.modifiers.intensity_caution && is_high_intensity(ctx)).then(|| {
            Finding::new(
                self.code(),
                "A cardiovascular condition calls for medical clearance before high-intensity training",
            )
            .with_remediation(Remediation::ConsultProfessional)
        })
    }
}

/// Endurance and hypertrophy goals interfere with each other
pub struct ConcurrentTrainingInterference;

impl ValidationRule for ConcurrentTrainingInterference {
    fn code(&self) -> FindingCode {
        FindingCode::ConcurrentTrainingInterference
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Option<Finding> {
        let profile = ctx.profile;
        let endurance = profile.has_goal(FitnessGoal::ImproveEndurance);
        let hypertrophy = profile.has_goal(FitnessGoal::GainMuscle)
            || profile.has_goal(FitnessGoal::ImproveStrength);
        (endurance && hypertrophy).then(|| {
            Finding::new(
                self.code(),
                "Heavy endurance work can blunt strength and muscle gains; separate sessions by several hours",
            )
        })
    }
}

/// Gain rate above natural muscle accretion
pub struct ExcessiveGainRate;

impl ValidationRule for ExcessiveGainRate {
    fn code(&self) -> FindingCode {
        FindingCode::ExcessiveGainRate
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Option<Finding> {
        if ctx.metrics.goal_direction != GoalDirection::Gain
            || !ctx.profile.has_goal(FitnessGoal::GainMuscle)
        {
            return None;
        }
        let limit = ctx
            .config
            .safety
            .muscle_gain
            .limit_for(ctx.profile.experience_years);
        let monthly = ctx.metrics.weekly_rate_kg * WEEKS_PER_MONTH;
        (monthly > limit).then(|| {
            let weeks =
                ceil_weeks(ctx.profile.weight_delta_kg() / (limit / WEEKS_PER_MONTH));
            Finding::new(
                self.code(),
                format!(
                    "Gaining {monthly:.2} kg/month exceeds the natural muscle gain of about {limit:.2} kg/month; the excess will be mostly fat"
                ),
            )
            .with_remediation(Remediation::MinimumTimelineWeeks { weeks })
        })
    }
}

/// Self-reported intensity exceeds measured capability
pub struct CapabilityIntensityMismatch;

impl ValidationRule for CapabilityIntensityMismatch {
    fn code(&self) -> FindingCode {
        FindingCode::CapabilityIntensityMismatch
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Option<Finding> {
        if ctx.profile.intensity != IntensityLevel::Advanced {
            return None;
        }
        let safety = &ctx.config.safety;
        let weak_pushups = ctx
            .profile
            .pushup_count
            .is_some_and(|count| count < safety.capability_min_pushups);
        let weak_endurance = ctx
            .profile
            .run_endurance_minutes
            .is_some_and(|minutes| minutes < safety.capability_min_run_minutes);
        (weak_pushups || weak_endurance).then(|| {
            Finding::new(
                self.code(),
                "Measured capability suggests starting at intermediate intensity and progressing",
            )
        })
    }
}

/// High but not excessive training volume
pub struct HighTrainingVolume;

impl ValidationRule for HighTrainingVolume {
    fn code(&self) -> FindingCode {
        FindingCode::HighTrainingVolume
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Option<Finding> {
        let safety = &ctx.config.safety;
        let minutes = ctx.metrics.weekly_exercise_minutes;
        (minutes > safety.high_weekly_training_minutes
            && minutes <= safety.max_weekly_training_minutes)
            .then(|| {
                Finding::new(
                    self.code(),
                    format!("{minutes} minutes per week is a high load; schedule recovery days"),
                )
                .with_remediation(Remediation::MaximumWeeklyMinutes {
                    minutes: safety.high_weekly_training_minutes,
                })
            })
    }
}

/// Target weight yields an underweight BMI
pub struct LowTargetBmi;

impl ValidationRule for LowTargetBmi {
    fn code(&self) -> FindingCode {
        FindingCode::LowTargetBmi
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Option<Finding> {
        let threshold = ctx.config.safety.underweight_bmi;
        let target_bmi = ctx.metrics.target_bmi;
        (target_bmi < threshold).then(|| {
            Finding::new(
                self.code(),
                format!("The target weight gives a BMI of {target_bmi:.1}, below {threshold:.1}"),
            )
        })
    }
}

/// Waist-to-hip ratio above the central adiposity threshold
pub struct CentralAdiposity;

impl ValidationRule for CentralAdiposity {
    fn code(&self) -> FindingCode {
        FindingCode::CentralAdiposity
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Option<Finding> {
        let ratio = ctx.metrics.waist_hip_ratio?;
        let threshold = ctx.config.safety.central_adiposity_whr.get(ctx.profile.sex);
        (ratio > threshold).then(|| {
            Finding::new(
                self.code(),
                format!(
                    "A waist-to-hip ratio of {ratio:.2} is above {threshold:.2}, a marker of elevated metabolic risk"
                ),
            )
        })
    }
}

/// Body fat is a conservative default
pub struct BodyFatEstimateUncertain;

impl ValidationRule for BodyFatEstimateUncertain {
    fn code(&self) -> FindingCode {
        FindingCode::BodyFatEstimateUncertain
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Option<Finding> {
        (ctx.metrics.body_fat.source == BodyFatSource::ConservativeDefault).then(|| {
            Finding::new(
                self.code(),
                "Body fat is a default estimate; enter a measurement for more accurate targets",
            )
        })
    }
}

/// Selected goal contradicts the weight endpoints
pub struct GoalTargetMismatch;

impl ValidationRule for GoalTargetMismatch {
    fn code(&self) -> FindingCode {
        FindingCode::GoalTargetMismatch
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Option<Finding> {
        let profile = ctx.profile;
        let mismatch = match ctx.metrics.goal_direction {
            GoalDirection::Gain => profile.has_goal(FitnessGoal::LoseWeight),
            GoalDirection::Loss => profile.has_goal(FitnessGoal::GainWeight),
            GoalDirection::Maintain | GoalDirection::Indeterminate => false,
        };
        mismatch.then(|| {
            Finding::new(
                self.code(),
                "The target weight moves in the opposite direction of the selected goal",
            )
            .with_remediation(Remediation::ChangeCategoricalInput {
                field: "target_weight_kg".to_owned(),
            })
        })
    }
}

/// Only one meal slot enabled
pub struct SingleMealStructure;

impl ValidationRule for SingleMealStructure {
    fn code(&self) -> FindingCode {
        FindingCode::SingleMealStructure
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Option<Finding> {
        (ctx.profile.meals.enabled_count() == 1).then(|| {
            Finding::new(
                self.code(),
                "Fitting all daily targets into a single meal is difficult; consider a second meal",
            )
        })
    }
}

/// Several independently minor lifestyle risks together
pub struct MultipleLifestyleRisks;

impl ValidationRule for MultipleLifestyleRisks {
    fn code(&self) -> FindingCode {
        FindingCode::MultipleLifestyleRisks
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Option<Finding> {
        let safety = &ctx.config.safety;
        let profile = ctx.profile;
        let risks = [
            ctx.metrics.sleep_hours < safety.recommended_sleep_hours,
            profile.stress_level == StressLevel::High,
            profile.drinks_alcohol,
            profile.uses_tobacco,
            ctx.metrics.diet_readiness_score < safety.lifestyle_readiness_score,
            ctx.metrics.weekly_exercise_minutes < safety.minimum_weekly_exercise_minutes,
        ]
        .into_iter()
        .filter(|risk| *risk)
        .count();
        (risks >= safety.lifestyle_risk_count).then(|| {
            with_optional(
                Finding::new(
                    self.code(),
                    format!("{risks} lifestyle factors together may slow progress; address one at a time"),
                ),
                revised_timeline(ctx),
            )
        })
    }
}
