// ABOUTME: Blocking rule battery; any finding here prevents the plan from proceeding
// ABOUTME: Rules are declared safety-critical first and evaluated independently
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{Finding, FindingCode, Remediation, RuleContext, ValidationRule};

/// Blocking rules in declaration order
pub static BLOCKING_RULES: &[&dyn ValidationRule] = &[
    &BodyFatBelowEssential,
    &BmiUnderweightLoss,
    &TargetBelowBmr,
    &TargetBelowCalorieFloor,
    &ExtremeRate,
    &NoMealsEnabled,
    &SevereSleepAggressiveRate,
    &TrainingVolumeExcessive,
    &PregnancyDeficit,
    &GoalConflict,
    &InsufficientExerciseForRate,
];

/// Body fat already at or below the essential floor while the goal is further loss
pub struct BodyFatBelowEssential;

impl ValidationRule for BodyFatBelowEssential {
    fn code(&self) -> FindingCode {
        FindingCode::BodyFatBelowEssential
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Option<Finding> {
        let floor = ctx.config.safety.essential_fat_percent.get(ctx.profile.sex);
        let body_fat = ctx.metrics.body_fat.percentage;
        (ctx.is_loss() && body_fat < floor).then(|| {
            Finding::new(
                self.code(),
                format!(
                    "Body fat of {body_fat:.1}% is below the essential floor of {floor:.1}%; further loss is unsafe"
                ),
            )
            .with_remediation(Remediation::ConsultProfessional)
        })
    }
}

/// Clinically underweight BMI while the goal is further loss
pub struct BmiUnderweightLoss;

impl ValidationRule for BmiUnderweightLoss {
    fn code(&self) -> FindingCode {
        FindingCode::BmiUnderweightLoss
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Option<Finding> {
        let threshold = ctx.config.safety.underweight_bmi;
        let bmi = ctx.metrics.bmi;
        (ctx.is_loss() && bmi < threshold).then(|| {
            Finding::new(
                self.code(),
                format!("BMI of {bmi:.1} is already below {threshold:.1}; weight loss is not advised"),
            )
            .with_remediation(Remediation::ConsultProfessional)
        })
    }
}

/// Target calories below basal metabolic rate
pub struct TargetBelowBmr;

impl ValidationRule for TargetBelowBmr {
    fn code(&self) -> FindingCode {
        FindingCode::TargetBelowBmr
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Option<Finding> {
        let bmr = ctx.metrics.bmr;
        let target = ctx.metrics.target_calories;
        (target < bmr).then(|| {
            Finding::new(
                self.code(),
                format!("Target of {target:.0} kcal/day is below your BMR of {bmr:.0} kcal/day"),
            )
            .with_remediation(ctx.remediation_for_floor(bmr))
        })
    }
}

/// Target calories below the sex-specific absolute floor
pub struct TargetBelowCalorieFloor;

impl ValidationRule for TargetBelowCalorieFloor {
    fn code(&self) -> FindingCode {
        FindingCode::TargetBelowCalorieFloor
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Option<Finding> {
        let floor = ctx.calorie_floor();
        let target = ctx.metrics.target_calories;
        (target < floor).then(|| {
            Finding::new(
                self.code(),
                format!("Target of {target:.0} kcal/day is below the minimum of {floor:.0} kcal/day"),
            )
            .with_remediation(ctx.remediation_for_floor(floor))
        })
    }
}

/// Weekly rate beyond the extreme-unsafe share of body weight
pub struct ExtremeRate;

impl ValidationRule for ExtremeRate {
    fn code(&self) -> FindingCode {
        FindingCode::ExtremeRate
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Option<Finding> {
        let band = ctx.rate_band()?;
        ctx.is_extreme_rate().then(|| {
            Finding::new(
                self.code(),
                format!(
                    "A weekly change of {:.2} kg ({:.2}% of body weight) exceeds the safe limit of {:.1}%",
                    ctx.metrics.weekly_rate_kg.abs(),
                    ctx.metrics.weekly_rate_percent,
                    band.extreme_percent
                ),
            )
            .with_remediation(Remediation::MinimumTimelineWeeks {
                weeks: ctx.weeks_at_rate_percent(band.extreme_percent),
            })
        })
    }
}

/// Every meal slot is disabled
pub struct NoMealsEnabled;

impl ValidationRule for NoMealsEnabled {
    fn code(&self) -> FindingCode {
        FindingCode::NoMealsEnabled
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Option<Finding> {
        (ctx.profile.meals.enabled_count() == 0).then(|| {
            Finding::new(self.code(), "At least one meal must be enabled to build a plan")
                .with_remediation(Remediation::ChangeCategoricalInput {
                    field: "meals".to_owned(),
                })
        })
    }
}

/// Severe sleep deprivation combined with an aggressive rate
pub struct SevereSleepAggressiveRate;

impl ValidationRule for SevereSleepAggressiveRate {
    fn code(&self) -> FindingCode {
        FindingCode::SevereSleepAggressiveRate
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Option<Finding> {
        let band = ctx.rate_band()?;
        let sleep = ctx.metrics.sleep_hours;
        (sleep < ctx.config.safety.severe_sleep_hours && ctx.is_aggressive_rate()).then(|| {
            Finding::new(
                self.code(),
                format!("{sleep:.1} hours of sleep cannot support an aggressive rate of change"),
            )
            .with_remediation(Remediation::MinimumTimelineWeeks {
                weeks: ctx.weeks_at_rate_percent(band.aggressive_percent),
            })
        })
    }
}

/// Weekly training volume beyond the absolute ceiling
pub struct TrainingVolumeExcessive;

impl ValidationRule for TrainingVolumeExcessive {
    fn code(&self) -> FindingCode {
        FindingCode::TrainingVolumeExcessive
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Option<Finding> {
        let ceiling = ctx.config.safety.max_weekly_training_minutes;
        let minutes = ctx.metrics.weekly_exercise_minutes;
        (minutes > ceiling).then(|| {
            Finding::new(
                self.code(),
                format!("{minutes} training minutes per week exceeds the safe ceiling of {ceiling}"),
            )
            .with_remediation(Remediation::MaximumWeeklyMinutes { minutes: ceiling })
        })
    }
}

/// Any caloric deficit during pregnancy or lactation
pub struct PregnancyDeficit;

impl ValidationRule for PregnancyDeficit {
    fn code(&self) -> FindingCode {
        FindingCode::PregnancyDeficit
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Option<Finding> {
        (ctx.profile.is_pregnant_or_lactating() && ctx.is_loss()).then(|| {
            Finding::new(
                self.code(),
                "A caloric deficit is not safe during pregnancy or breastfeeding",
            )
            .with_remediation(Remediation::ChangeCategoricalInput {
                field: "goals".to_owned(),
            })
        })
    }
}

/// Simultaneous loss and gain goals
pub struct GoalConflict;

impl ValidationRule for GoalConflict {
    fn code(&self) -> FindingCode {
        FindingCode::GoalConflict
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Option<Finding> {
        ctx.metrics.goal_direction_indeterminate.then(|| {
            Finding::new(
                self.code(),
                "Losing weight and gaining weight cannot be pursued at the same time",
            )
            .with_remediation(Remediation::ChangeCategoricalInput {
                field: "goals".to_owned(),
            })
        })
    }
}

/// Too little planned exercise for a rate that forces calories below BMR
pub struct InsufficientExerciseForRate;

impl ValidationRule for InsufficientExerciseForRate {
    fn code(&self) -> FindingCode {
        FindingCode::InsufficientExerciseForRate
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Option<Finding> {
        let minimum = ctx.config.safety.minimum_weekly_exercise_minutes;
        let minutes = ctx.metrics.weekly_exercise_minutes;
        let below_bmr = ctx.metrics.target_calories < ctx.metrics.bmr;
        (ctx.is_loss() && minutes < minimum && below_bmr).then(|| {
            Finding::new(
                self.code(),
                format!(
                    "With {minutes} minutes of exercise per week this rate needs a diet below your BMR; plan at least {minimum} minutes or extend the timeline"
                ),
            )
            .with_remediation(ctx.remediation_for_floor(ctx.metrics.bmr))
        })
    }
}
