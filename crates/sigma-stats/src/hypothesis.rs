//! Hypothesis statements and their verdict at a significance level.

use serde::Serialize;
use std::fmt;

use crate::ttest::TTest;

/// A research question with its null and alternative hypotheses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Hypothesis {
    pub question: String,
    pub null: String,
    pub alternative: String,
}

impl Hypothesis {
    pub fn new(
        question: impl Into<String>,
        null: impl Into<String>,
        alternative: impl Into<String>,
    ) -> Self {
        Self {
            question: question.into(),
            null: null.into(),
            alternative: alternative.into(),
        }
    }

    /// Decide this hypothesis from a p-value.
    #[must_use]
    pub fn conclude(self, p_value: f64, alpha: f64) -> Conclusion {
        Conclusion {
            verdict: Verdict::at(p_value, alpha),
            hypothesis: self,
            p_value,
            alpha,
        }
    }
}

/// Which hypothesis the data supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    AcceptAlternative,
    RetainNull,
}

impl Verdict {
    /// `AcceptAlternative` only when `p_value < alpha`. NaN retains the null.
    #[must_use]
    pub fn at(p_value: f64, alpha: f64) -> Self {
        if p_value < alpha {
            Self::AcceptAlternative
        } else {
            Self::RetainNull
        }
    }
}

/// A hypothesis together with the evidence that decided it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Conclusion {
    pub hypothesis: Hypothesis,
    pub p_value: f64,
    pub alpha: f64,
    pub verdict: Verdict,
}

impl fmt::Display for Conclusion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.verdict {
            Verdict::AcceptAlternative => write!(
                f,
                "We accept H1 because the p-value {:.3} < {}.",
                self.p_value, self.alpha
            ),
            Verdict::RetainNull => write!(
                f,
                "We cannot reject H0 because the p-value {:.3} >= {}.",
                self.p_value, self.alpha
            ),
        }
    }
}

/// A test statistic with the hypothesis it decides.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TestedHypothesis {
    pub test: TTest,
    pub conclusion: Conclusion,
}

impl TestedHypothesis {
    pub(crate) fn new(hypothesis: Hypothesis, test: TTest, alpha: f64) -> Self {
        Self {
            conclusion: hypothesis.conclude(test.p_value, alpha),
            test,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> Hypothesis {
        Hypothesis::new("Does it help?", "It does not.", "It does.")
    }

    #[test]
    fn strict_threshold() {
        assert_eq!(Verdict::at(0.049, 0.05), Verdict::AcceptAlternative);
        assert_eq!(Verdict::at(0.05, 0.05), Verdict::RetainNull);
        assert_eq!(Verdict::at(f64::NAN, 0.05), Verdict::RetainNull);
    }

    #[test]
    fn conclusion_text() {
        let accepted = sample().conclude(0.012_3, 0.05);
        assert_eq!(
            accepted.to_string(),
            "We accept H1 because the p-value 0.012 < 0.05."
        );
        let retained = sample().conclude(0.4, 0.05);
        assert_eq!(
            retained.to_string(),
            "We cannot reject H0 because the p-value 0.400 >= 0.05."
        );
    }
}
