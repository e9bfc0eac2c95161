//! Integration tests driving the full submit flow: raw form fields through
//! validation and parsing into the financing worksheet.

use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;

use rent_core::{
    ApprovedFinancing, FinancingDecision, FinancingPolicy, FinancingWorksheet, RepaymentPeriod,
};
use rent_form::{FinancingFormError, FinancingFormModel, SubmitError, submit};

fn worksheet() -> FinancingWorksheet {
    FinancingWorksheet::new(FinancingPolicy::default())
}

fn filled_form() -> FinancingFormModel {
    FinancingFormModel {
        monthly_salary: "500000".to_string(),
        requested_amount: "300000".to_string(),
        renewal_date: "2026-03-01".to_string(),
        repayment_period: "12".to_string(),
        contact_email: "applicant@example.com".to_string(),
    }
}

#[test]
fn submit_caps_request_exceeding_affordability() {
    // Salary 100,000, requested 200,000 over 6 months: monthly repayment
    // 41,333.33 exceeds the 33,330.00 cap.
    let form = FinancingFormModel {
        monthly_salary: "100000".to_string(),
        requested_amount: "200000".to_string(),
        repayment_period: "6".to_string(),
        ..filled_form()
    };

    let decision = submit(&form, &worksheet()).unwrap();

    assert_eq!(decision, FinancingDecision::Capped);
}

#[test]
fn submit_approves_affordable_request_with_breakdown() {
    // Salary 500,000, requested 300,000 over 12 months: total 444,000,
    // monthly 37,000, well under the 166,650.00 cap.
    let form = filled_form();

    let decision = submit(&form, &worksheet()).unwrap();

    assert_eq!(
        decision,
        FinancingDecision::Approved(ApprovedFinancing {
            requested_amount: dec!(300000),
            monthly_repayment: dec!(37000.00),
            security_deposit: dec!(37000.00),
            repayment_period: RepaymentPeriod::TwelveMonths,
        })
    );
}

#[test]
fn submit_rounds_repeating_monthly_repayment() {
    // Salary 200,000, requested 150,000 over 9 months: total 204,000,
    // monthly 22,666.66… rounded half-up.
    let form = FinancingFormModel {
        monthly_salary: "200000".to_string(),
        requested_amount: "150000".to_string(),
        repayment_period: "9".to_string(),
        ..filled_form()
    };

    let decision = submit(&form, &worksheet()).unwrap();

    let offer = match decision {
        FinancingDecision::Approved(offer) => offer,
        FinancingDecision::Capped => panic!("expected approval"),
    };
    assert_eq!(offer.monthly_repayment, dec!(22666.67));
}

#[test]
fn submit_treats_repayment_exactly_at_cap_as_affordable() {
    // Cap = 124,000 × 0.3333 = 41,329.20; monthly repayment lands exactly
    // on it, and the cap check is strictly greater-than.
    let form = FinancingFormModel {
        monthly_salary: "124000".to_string(),
        requested_amount: "199980".to_string(),
        repayment_period: "6".to_string(),
        ..filled_form()
    };

    let decision = submit(&form, &worksheet()).unwrap();

    assert!(matches!(decision, FinancingDecision::Approved(_)));
}

#[test]
fn submit_holds_one_monthly_repayment_as_deposit() {
    for period in ["6", "9", "12"] {
        let form = FinancingFormModel {
            repayment_period: period.to_string(),
            ..filled_form()
        };

        let decision = submit(&form, &worksheet()).unwrap();

        let offer = match decision {
            FinancingDecision::Approved(offer) => offer,
            FinancingDecision::Capped => panic!("expected approval for period {period}"),
        };
        assert_eq!(offer.security_deposit, offer.monthly_repayment);
    }
}

#[test]
fn submit_rejects_empty_requested_amount_without_calculating() {
    let form = FinancingFormModel {
        requested_amount: String::new(),
        ..filled_form()
    };

    let result = submit(&form, &worksheet());

    assert!(matches!(
        result,
        Err(SubmitError::Form(FinancingFormError::Incomplete(_)))
    ));
}

#[test]
fn submit_treats_zero_requested_amount_as_missing() {
    let form = FinancingFormModel {
        requested_amount: "0".to_string(),
        ..filled_form()
    };

    let result = submit(&form, &worksheet());

    assert!(matches!(
        result,
        Err(SubmitError::Form(FinancingFormError::Incomplete(_)))
    ));
}

#[test]
fn submit_rejects_missing_email_even_when_numbers_are_valid() {
    let form = FinancingFormModel {
        contact_email: String::new(),
        ..filled_form()
    };

    let result = submit(&form, &worksheet());

    let messages = match result {
        Err(SubmitError::Form(FinancingFormError::Incomplete(messages))) => messages,
        other => panic!("expected incomplete-input error, got {other:?}"),
    };
    assert_eq!(messages, vec!["Contact email is required.".to_string()]);
}

#[test]
fn submit_reports_every_missing_field() {
    let result = submit(&FinancingFormModel::default(), &worksheet());

    let messages = match result {
        Err(SubmitError::Form(FinancingFormError::Incomplete(messages))) => messages,
        other => panic!("expected incomplete-input error, got {other:?}"),
    };
    assert_eq!(messages.len(), 5);
}

#[test]
fn submit_surfaces_typed_error_for_non_numeric_amount() {
    let form = FinancingFormModel {
        requested_amount: "lots".to_string(),
        ..filled_form()
    };

    let result = submit(&form, &worksheet());

    assert!(matches!(
        result,
        Err(SubmitError::Form(FinancingFormError::InvalidAmount { .. }))
    ));
}

#[test]
fn submit_surfaces_typed_error_for_malformed_date() {
    let form = FinancingFormModel {
        renewal_date: "March 1st".to_string(),
        ..filled_form()
    };

    let result = submit(&form, &worksheet());

    assert!(matches!(
        result,
        Err(SubmitError::Form(FinancingFormError::InvalidDate { .. }))
    ));
}

#[test]
fn submit_is_idempotent_for_same_fields() {
    let form = filled_form();
    let worksheet = worksheet();

    let first = submit(&form, &worksheet).unwrap();
    let second = submit(&form, &worksheet).unwrap();

    assert_eq!(first, second);
}
