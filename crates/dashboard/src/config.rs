use std::str::FromStr;

use skillpath_core::chart::ChartConfig;
use skillpath_core::dashboard::{DashboardConfig, DEFAULT_RECOMMENDATION_SEED};
use skillpath_core::progress::{ProgressConfig, ProgressStrategy};

use crate::error::ConfigError;

/// Which view the binary renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DashboardView {
    #[default]
    Dashboard,
    Skills,
    Plan,
    Resources,
    Courses,
    Lesson,
}

impl DashboardView {
    pub fn from_str_value(s: &str) -> Result<Self, String> {
        match s {
            "dashboard" => Ok(Self::Dashboard),
            "skills" => Ok(Self::Skills),
            "plan" => Ok(Self::Plan),
            "resources" => Ok(Self::Resources),
            "courses" => Ok(Self::Courses),
            "lesson" => Ok(Self::Lesson),
            _ => Err(format!("Unknown dashboard view: {s}")),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::Skills => "skills",
            Self::Plan => "plan",
            Self::Resources => "resources",
            Self::Courses => "courses",
            Self::Lesson => "lesson",
        }
    }
}

/// Application configuration loaded from environment variables.
///
/// All fields have defaults matching the core crate's defaults.
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub dashboard: DashboardConfig,
    /// Add artificial delays to repository reads.
    pub simulate_latency: bool,
    pub view: DashboardView,
    /// Lesson rendered by the `lesson` view.
    pub lesson_id: Option<String>,
    /// Quiz answers (option ids, in question order) submitted for
    /// `lesson_id`. When set, the `lesson` view attempts the lesson instead
    /// of only showing it.
    pub quiz_answers: Option<Vec<String>>,
}

/// Split a comma-separated list, dropping blank entries.
fn parse_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_var<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
    default: T,
) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(var) {
        None => Ok(default),
        Some(value) => value.trim().parse().map_err(|e: T::Err| ConfigError::InvalidValue {
            var,
            reason: e.to_string(),
            value,
        }),
    }
}

fn parse_with<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
    default: T,
    parse: impl Fn(&str) -> Result<T, String>,
) -> Result<T, ConfigError> {
    match lookup(var) {
        None => Ok(default),
        Some(value) => parse(value.trim()).map_err(|reason| ConfigError::InvalidValue {
            var,
            value,
            reason,
        }),
    }
}

impl AppConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                     | Default       |
    /// |-----------------------------|---------------|
    /// | `PROGRESS_STRATEGY`         | `level_ratio` |
    /// | `PROGRESS_POINTS_PER_STEP`  | `100`         |
    /// | `PROGRESS_PERCENT_PER_STEP` | `50`          |
    /// | `PROGRESS_POINTS_CAP`       | `99`          |
    /// | `PRIORITY_LIMIT`            | `3`           |
    /// | `CHART_LIMIT`               | `5`           |
    /// | `CHART_FULL_MIN_ITEMS`      | `3`           |
    /// | `RECOMMENDATION_LIMIT`      | `3`           |
    /// | `RECOMMENDATION_SEED`       | `42`          |
    /// | `WEEKLY_TARGET`             | `70`          |
    /// | `SIMULATE_LATENCY`          | `false`       |
    /// | `DASHBOARD_VIEW`            | `dashboard`   |
    /// | `LESSON_ID`                 | (none)        |
    /// | `QUIZ_ANSWERS`              | (none)        |
    ///
    /// `LESSON_ID` is required when `DASHBOARD_VIEW=lesson`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Same as [`AppConfig::from_env`] with a custom variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = DashboardConfig::default();

        let progress = ProgressConfig {
            strategy: parse_with(
                &lookup,
                "PROGRESS_STRATEGY",
                defaults.progress.strategy,
                ProgressStrategy::from_str_value,
            )?,
            points_per_step: parse_var(
                &lookup,
                "PROGRESS_POINTS_PER_STEP",
                defaults.progress.points_per_step,
            )?,
            percent_per_step: parse_var(
                &lookup,
                "PROGRESS_PERCENT_PER_STEP",
                defaults.progress.percent_per_step,
            )?,
            points_cap: parse_var(&lookup, "PROGRESS_POINTS_CAP", defaults.progress.points_cap)?,
        };

        let chart = ChartConfig {
            limit: parse_var(&lookup, "CHART_LIMIT", defaults.chart.limit)?,
            full_min_items: parse_var(&lookup, "CHART_FULL_MIN_ITEMS", defaults.chart.full_min_items)?,
        };

        let dashboard = DashboardConfig {
            progress,
            chart,
            priority_limit: parse_var(&lookup, "PRIORITY_LIMIT", defaults.priority_limit)?,
            recommendation_limit: parse_var(
                &lookup,
                "RECOMMENDATION_LIMIT",
                defaults.recommendation_limit,
            )?,
            recommendation_seed: parse_var(
                &lookup,
                "RECOMMENDATION_SEED",
                DEFAULT_RECOMMENDATION_SEED,
            )?,
            weekly_target: parse_var(&lookup, "WEEKLY_TARGET", defaults.weekly_target)?,
            plan_skills: defaults.plan_skills,
        };
        dashboard.validate()?;

        let view = parse_with(
            &lookup,
            "DASHBOARD_VIEW",
            DashboardView::default(),
            DashboardView::from_str_value,
        )?;
        let lesson_id = lookup("LESSON_ID")
            .map(|id| id.trim().to_string())
            .filter(|id| !id.is_empty());
        if view == DashboardView::Lesson && lesson_id.is_none() {
            return Err(ConfigError::Missing {
                var: "LESSON_ID",
                context: "DASHBOARD_VIEW=lesson",
            });
        }

        Ok(Self {
            dashboard,
            simulate_latency: parse_var(&lookup, "SIMULATE_LATENCY", false)?,
            view,
            lesson_id,
            quiz_answers: lookup("QUIZ_ANSWERS").map(|value| parse_list(&value)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    use assert_matches::assert_matches;
    use skillpath_core::error::CoreError;

    fn load(vars: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|var| vars.get(var).cloned())
    }

    #[test]
    fn empty_environment_uses_defaults() {
        let config = load(&[]).unwrap();
        assert_eq!(config.dashboard, DashboardConfig::default());
        assert!(!config.simulate_latency);
        assert_eq!(config.view, DashboardView::Dashboard);
        assert!(config.lesson_id.is_none());
        assert!(config.quiz_answers.is_none());
    }

    #[test]
    fn overrides_are_applied() {
        let config = load(&[
            ("PROGRESS_STRATEGY", "points_based"),
            ("PROGRESS_POINTS_CAP", "90"),
            ("CHART_FULL_MIN_ITEMS", "1"),
            ("RECOMMENDATION_SEED", "7"),
            ("SIMULATE_LATENCY", "true"),
            ("DASHBOARD_VIEW", "courses"),
        ])
        .unwrap();
        assert_eq!(config.dashboard.progress.strategy, ProgressStrategy::PointsBased);
        assert_eq!(config.dashboard.progress.points_cap, 90);
        assert_eq!(config.dashboard.chart.full_min_items, 1);
        assert_eq!(config.dashboard.recommendation_seed, 7);
        assert!(config.simulate_latency);
        assert_eq!(config.view, DashboardView::Courses);
    }

    #[test]
    fn unparsable_number_names_the_variable() {
        let err = load(&[("CHART_LIMIT", "five")]).unwrap_err();
        assert_matches!(err, ConfigError::InvalidValue { var: "CHART_LIMIT", .. });
    }

    #[test]
    fn unknown_view_is_rejected() {
        assert_matches!(
            load(&[("DASHBOARD_VIEW", "settings")]),
            Err(ConfigError::InvalidValue { var: "DASHBOARD_VIEW", .. })
        );
    }

    #[test]
    fn lesson_view_reads_lesson_and_answers() {
        let config = load(&[
            ("DASHBOARD_VIEW", "lesson"),
            ("LESSON_ID", " lesson-2 "),
            ("QUIZ_ANSWERS", "b, c,"),
        ])
        .unwrap();
        assert_eq!(config.view, DashboardView::Lesson);
        assert_eq!(config.lesson_id.as_deref(), Some("lesson-2"));
        assert_eq!(
            config.quiz_answers,
            Some(vec!["b".to_string(), "c".to_string()])
        );
    }

    #[test]
    fn lesson_view_requires_lesson_id() {
        assert_matches!(
            load(&[("DASHBOARD_VIEW", "lesson")]),
            Err(ConfigError::Missing { var: "LESSON_ID", .. })
        );
        assert_matches!(
            load(&[("DASHBOARD_VIEW", "lesson"), ("LESSON_ID", "  ")]),
            Err(ConfigError::Missing { var: "LESSON_ID", .. })
        );
    }

    #[test]
    fn zero_points_per_step_fails_validation() {
        assert_matches!(
            load(&[("PROGRESS_POINTS_PER_STEP", "0")]),
            Err(ConfigError::Core(CoreError::Validation(_)))
        );
    }

    #[test]
    fn view_names_round_trip() {
        for view in [
            DashboardView::Dashboard,
            DashboardView::Skills,
            DashboardView::Plan,
            DashboardView::Resources,
            DashboardView::Courses,
            DashboardView::Lesson,
        ] {
            assert_eq!(DashboardView::from_str_value(view.as_str()), Ok(view));
        }
    }
}
