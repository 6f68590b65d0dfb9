//! Student and Welch t-tests, paired t-test and a pooled two-proportion z-test.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::StatsError;
use crate::distributions::{normal_cdf, student_t_cdf};
use crate::summary::{mean, sample_variance};

/// Direction of the alternative hypothesis, relative to `a - b`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Alternative {
    TwoSided,
    /// `a` is smaller than `b`.
    Less,
    /// `a` is larger than `b`.
    Greater,
}

impl Alternative {
    /// p-value of statistic `t` under a t distribution with `df` degrees of freedom.
    #[must_use]
    pub fn p_value(self, t: f64, df: f64) -> f64 {
        match self {
            Self::TwoSided => 2.0 * student_t_cdf(-t.abs(), df),
            Self::Less => student_t_cdf(t, df),
            Self::Greater => student_t_cdf(-t, df),
        }
    }
}

impl fmt::Display for Alternative {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::TwoSided => "two-sided",
            Self::Less => "less",
            Self::Greater => "greater",
        })
    }
}

impl FromStr for Alternative {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "two-sided" => Ok(Self::TwoSided),
            "less" => Ok(Self::Less),
            "greater" => Ok(Self::Greater),
            other => Err(format!(
                "unknown alternative '{other}': expected two-sided, less or greater"
            )),
        }
    }
}

/// Outcome of a t-test.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TTest {
    pub statistic: f64,
    pub df: f64,
    pub p_value: f64,
    pub alternative: Alternative,
}

impl TTest {
    fn from_statistic(statistic: f64, df: f64, alternative: Alternative) -> Self {
        Self {
            statistic,
            df,
            p_value: alternative.p_value(statistic, df),
            alternative,
        }
    }
}

/// Independent two-sample t-test assuming equal variances.
///
/// # Errors
///
/// [`StatsError::InsufficientData`] unless both samples are non-empty and
/// together hold at least three observations.
pub fn ttest_ind(a: &[f64], b: &[f64], alternative: Alternative) -> Result<TTest, StatsError> {
    let total = a.len() + b.len();
    if a.is_empty() || b.is_empty() || total < 3 {
        return Err(StatsError::InsufficientData {
            test: "independent t-test",
            needed: 3,
            got: total,
        });
    }

    let (mean_a, mean_b) = (sample_mean(a), sample_mean(b));
    let sum_squares =
        |values: &[f64], mean: f64| values.iter().map(|v| (v - mean).powi(2)).sum::<f64>();

    #[allow(clippy::cast_precision_loss)]
    let (n_a, n_b) = (a.len() as f64, b.len() as f64);
    let df = n_a + n_b - 2.0;
    let pooled = (sum_squares(a, mean_a) + sum_squares(b, mean_b)) / df;
    let statistic = (mean_a - mean_b) / (pooled * (1.0 / n_a + 1.0 / n_b)).sqrt();

    Ok(TTest::from_statistic(statistic, df, alternative))
}

/// Independent two-sample t-test without the equal-variance assumption.
///
/// # Errors
///
/// [`StatsError::InsufficientData`] unless both samples hold at least two observations.
pub fn ttest_welch(a: &[f64], b: &[f64], alternative: Alternative) -> Result<TTest, StatsError> {
    let (Some(var_a), Some(var_b)) = (sample_variance(a), sample_variance(b)) else {
        return Err(StatsError::InsufficientData {
            test: "Welch t-test",
            needed: 2,
            got: a.len().min(b.len()),
        });
    };

    #[allow(clippy::cast_precision_loss)]
    let (n_a, n_b) = (a.len() as f64, b.len() as f64);
    let (se_a, se_b) = (var_a / n_a, var_b / n_b);
    let statistic = (sample_mean(a) - sample_mean(b)) / (se_a + se_b).sqrt();
    let df = (se_a + se_b).powi(2) / (se_a.powi(2) / (n_a - 1.0) + se_b.powi(2) / (n_b - 1.0));

    Ok(TTest::from_statistic(statistic, df, alternative))
}

/// Paired t-test on `a[i] - b[i]`.
///
/// # Errors
///
/// [`StatsError::LengthMismatch`] if the samples differ in length,
/// [`StatsError::InsufficientData`] below two pairs.
pub fn ttest_rel(a: &[f64], b: &[f64], alternative: Alternative) -> Result<TTest, StatsError> {
    if a.len() != b.len() {
        return Err(StatsError::LengthMismatch {
            left: a.len(),
            right: b.len(),
        });
    }

    let differences: Vec<f64> = a.iter().zip(b).map(|(x, y)| x - y).collect();
    let Some(variance) = sample_variance(&differences) else {
        return Err(StatsError::InsufficientData {
            test: "paired t-test",
            needed: 2,
            got: differences.len(),
        });
    };

    #[allow(clippy::cast_precision_loss)]
    let n = differences.len() as f64;
    let statistic = sample_mean(&differences) / (variance / n).sqrt();

    Ok(TTest::from_statistic(statistic, n - 1.0, alternative))
}

/// Outcome of the pooled two-proportion z-test.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ZTest {
    pub statistic: f64,
    /// Lower-tail p-value, `P(Z <= z)`.
    pub p_value: f64,
}

/// Pooled z-test comparing the success rates of two 0/1 samples.
///
/// # Errors
///
/// [`StatsError::InsufficientData`] if either sample is empty.
pub fn two_proportion_z(a: &[f64], b: &[f64]) -> Result<ZTest, StatsError> {
    if a.is_empty() || b.is_empty() {
        return Err(StatsError::InsufficientData {
            test: "two-proportion z-test",
            needed: 1,
            got: a.len().min(b.len()),
        });
    }

    #[allow(clippy::cast_precision_loss)]
    let (n_a, n_b) = (a.len() as f64, b.len() as f64);
    let (sum_a, sum_b) = (a.iter().sum::<f64>(), b.iter().sum::<f64>());
    let pooled = (sum_a + sum_b) / (n_a + n_b);
    let statistic =
        (sum_a / n_a - sum_b / n_b) / (pooled * (1.0 - pooled) * (1.0 / n_a + 1.0 / n_b)).sqrt();

    Ok(ZTest {
        statistic,
        p_value: normal_cdf(statistic),
    })
}

fn sample_mean(values: &[f64]) -> f64 {
    mean(values).unwrap_or(f64::NAN)
}
