use super::*;
use crate::model::FilterCriteria;
use crate::test_harness::{company, sample_directory};

#[test]
fn empty_query_and_default_criteria_is_identity() {
    let companies = sample_directory();
    let result = filter(&companies, "", &FilterCriteria::default());
    assert_eq!(result, companies);
}

#[test]
fn name_match_is_case_insensitive_substring() {
    let companies = sample_directory();

    let result = filter(&companies, "ZEN", &FilterCriteria::default());
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].name, "Zenith");

    // Substring, not prefix
    let result = filter(&companies, "eni", &FilterCriteria::default());
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].name, "Zenith");
}

#[test]
fn industry_filter_is_exact_match() {
    let companies = sample_directory();
    let criteria = FilterCriteria {
        industry: Some("Energy".to_string()),
        ..FilterCriteria::default()
    };

    let result = filter(&companies, "", &criteria);
    let names: Vec<&str> = result.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["Borealis", "Delta Energy"]);
}

#[test]
fn industry_filter_does_not_substring_match() {
    // "Tech" must not match an industry merely containing it
    let companies = vec![
        company("A", "Tech", "NY", 1, 2000),
        company("B", "Biotech", "NY", 1, 2000),
    ];
    let criteria = FilterCriteria {
        industry: Some("Tech".to_string()),
        ..FilterCriteria::default()
    };

    let result = filter(&companies, "", &criteria);
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].name, "A");
}

#[test]
fn location_filter_is_exact_match() {
    let companies = sample_directory();
    let criteria = FilterCriteria {
        location: Some("NY".to_string()),
        ..FilterCriteria::default()
    };

    let result = filter(&companies, "", &criteria);
    let names: Vec<&str> = result.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["Acme", "Cedar Retail"]);
}

#[test]
fn min_employees_keeps_at_or_above_threshold() {
    let companies = sample_directory();
    let criteria = FilterCriteria {
        min_employees: 80,
        ..FilterCriteria::default()
    };

    let result = filter(&companies, "", &criteria);
    let names: Vec<&str> = result.iter().map(|c| c.name.as_str()).collect();
    // 80 itself survives (>=, not >)
    assert_eq!(names, ["Zenith", "Borealis", "Cedar Retail"]);
}

#[test]
fn zero_min_employees_means_no_minimum() {
    let companies = sample_directory();
    let criteria = FilterCriteria {
        min_employees: 0,
        ..FilterCriteria::default()
    };
    assert_eq!(filter(&companies, "", &criteria).len(), companies.len());
}

#[test]
fn steps_combine_by_narrowing() {
    let companies = sample_directory();
    let criteria = FilterCriteria {
        industry: Some("Energy".to_string()),
        location: Some("TX".to_string()),
        min_employees: 100,
    };

    let result = filter(&companies, "", &criteria);
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].name, "Borealis");
}

#[test]
fn unmatched_input_yields_empty_list_not_failure() {
    let companies = sample_directory();
    let result = filter(&companies, "no such company", &FilterCriteria::default());
    assert!(result.is_empty());
}

#[test]
fn filter_preserves_input_order() {
    let companies = sample_directory();
    let criteria = FilterCriteria {
        min_employees: 41,
        ..FilterCriteria::default()
    };

    let result = filter(&companies, "", &criteria);
    let names: Vec<&str> = result.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["Acme", "Zenith", "Borealis", "Cedar Retail"]);
}

#[test]
fn filter_is_idempotent() {
    let companies = sample_directory();
    let criteria = FilterCriteria {
        industry: Some("Tech".to_string()),
        min_employees: 10,
        ..FilterCriteria::default()
    };

    let once = filter(&companies, "e", &criteria);
    let twice = filter(&once, "e", &criteria);
    assert_eq!(once, twice);
}

#[test]
fn empty_input_yields_empty_output() {
    let result = filter(&[], "anything", &FilterCriteria::default());
    assert!(result.is_empty());
}
