//! Audit trace models.
//!
//! Every calculation records the decisions it made as an ordered list of
//! [`AuditStep`]s so a displayed amount can be traced back to its inputs.

use serde::{Deserialize, Serialize};

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during calculation.
///
/// Warnings indicate conditions that don't prevent calculation
/// but should be shown next to the result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// The complete audit trace for a calculation.
///
/// # Example
///
/// ```
/// use severance_engine::models::AuditTrace;
///
/// let trace = AuditTrace {
///     steps: vec![],
///     warnings: vec![],
///     duration_us: 12,
/// };
/// assert!(trace.steps.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during calculation.
    pub warnings: Vec<AuditWarning>,
    /// The total calculation duration in microseconds.
    pub duration_us: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_step() -> AuditStep {
        AuditStep {
            step_number: 1,
            rule_id: "period_resolution".to_string(),
            rule_name: "Employment Period Resolution".to_string(),
            input: serde_json::json!({"start_date": "2020-01-01", "end_date": "2023-01-01"}),
            output: serde_json::json!({"working_days": 1096}),
            reasoning: "2023-01-01 - 2020-01-01 = 1096 days".to_string(),
        }
    }

    #[test]
    fn test_audit_step_serializes_all_fields() {
        let json = serde_json::to_value(sample_step()).unwrap();

        assert_eq!(json["step_number"], 1);
        assert_eq!(json["rule_id"], "period_resolution");
        assert_eq!(json["output"]["working_days"], 1096);
        assert!(json["reasoning"].as_str().unwrap().contains("1096 days"));
    }

    #[test]
    fn test_audit_trace_deserializes() {
        let json = r#"{
            "steps": [],
            "warnings": [
                {"code": "PRORATED_SHORT_SERVICE", "message": "prorated", "severity": "medium"}
            ],
            "duration_us": 42
        }"#;

        let trace: AuditTrace = serde_json::from_str(json).unwrap();
        assert_eq!(trace.warnings.len(), 1);
        assert_eq!(trace.warnings[0].code, "PRORATED_SHORT_SERVICE");
        assert_eq!(trace.duration_us, 42);
    }
}
